//! Session token slot
//!
//! A single string stored under the `auth_token` key, either in a JSON file
//! that survives restarts or in memory for the lifetime of the process.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ClientResult;

/// Storage key of the session token
pub const TOKEN_KEY: &str = "auth_token";

/// Persistence for the session token
pub trait TokenStorage: Send + Sync + fmt::Debug {
    fn load(&self) -> ClientResult<Option<String>>;

    fn store(&self, token: &str) -> ClientResult<()>;

    fn clear(&self) -> ClientResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenFile {
    #[serde(rename = "auth_token", default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
}

/// JSON file holding the token slot
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> ClientResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let file: TokenFile = serde_json::from_str(&json)?;
        Ok(file.auth_token)
    }

    fn store(&self, token: &str) -> ClientResult<()> {
        self.ensure_dir()?;
        let file = TokenFile {
            auth_token: Some(token.to_string()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Process-local token slot
#[derive(Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for MemoryTokenStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStorage")
            .field("has_token", &self.token.read().is_some())
            .finish()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn store(&self, token: &str) -> ClientResult<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.token.write() = None;
        Ok(())
    }
}
