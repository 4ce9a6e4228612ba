//! Client configuration

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ClientError;

/// Index of the first page on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageIndexBase {
    /// `page=0` is the first page (Spring pageable)
    #[default]
    Zero,
    /// `page=1` is the first page
    One,
}

impl PageIndexBase {
    /// Wire index for a 1-based page number
    pub fn wire_index(self, page: u32) -> u32 {
        match self {
            Self::Zero => page.saturating_sub(1),
            Self::One => page,
        }
    }
}

impl FromStr for PageIndexBase {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "zero" => Ok(Self::Zero),
            "1" | "one" => Ok(Self::One),
            other => Err(ClientError::Config(format!("invalid page index base: {other}"))),
        }
    }
}

/// Client configuration for the platform gateway
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway root URL (e.g., "http://localhost:8080")
    pub gateway_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Page index convention of the backend
    pub page_index_base: PageIndexBase,

    /// File holding the persisted session token; in-memory when `None`
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            timeout: 30,
            page_index_base: PageIndexBase::Zero,
            token_path: None,
        }
    }

    /// Read `GATEWAY_URL`, `REQUEST_TIMEOUT_SECS`, `PAGE_INDEX_BASE` and
    /// `TOKEN_PATH`, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut config = Self::new(
            std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://localhost:8080".into()),
        );
        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_SECS") {
            config.timeout = timeout
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid REQUEST_TIMEOUT_SECS: {timeout}")))?;
        }
        if let Ok(base) = std::env::var("PAGE_INDEX_BASE") {
            config.page_index_base = base.parse()?;
        }
        config.token_path = std::env::var_os("TOKEN_PATH").map(PathBuf::from);
        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the backend's page index convention
    pub fn with_page_index_base(mut self, base: PageIndexBase) -> Self {
        self.page_index_base = base;
        self
    }

    /// Persist the session token in a file
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
