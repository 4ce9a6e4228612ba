//! Endpoint resolution behind the gateway
//!
//! Resources owned by a microservice live under
//! `{gateway}/services/{microservice}/`; everything else sits directly under
//! the gateway root.

/// Composes absolute URLs from the gateway root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolver {
    gateway_url: String,
}

impl EndpointResolver {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// `{gateway}[/services/{microservice}]/{resource_path}`
    pub fn resolve(&self, resource_path: &str, microservice: Option<&str>) -> String {
        let path = resource_path.trim_start_matches('/');
        match microservice {
            Some(service) => format!(
                "{}/services/{}/{}",
                self.gateway_url,
                service.trim_matches('/'),
                path
            ),
            None => format!("{}/{}", self.gateway_url, path),
        }
    }
}
