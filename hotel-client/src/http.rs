//! Gateway transport
//!
//! Thin layer over `reqwest` that attaches the session's bearer token,
//! turns non-2xx answers into [`ClientError::Status`] and decodes JSON
//! bodies.

use http::Method;
use reqwest::{Client, RequestBuilder, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::auth::Session;
use crate::error::{ClientError, ClientResult};

/// Response header carrying the unpaged row count
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Whether a request carries the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    Anonymous,
}

#[derive(Debug, Clone)]
pub struct GatewayHttp {
    client: Client,
    session: Session,
}

impl GatewayHttp {
    pub fn new(timeout_secs: u64, session: Session) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn auth_header(&self) -> Option<String> {
        self.session
            .valid_token()
            .map(|token| format!("Bearer {}", token))
    }

    fn request(&self, method: Method, url: &str, auth: Auth) -> RequestBuilder {
        let mut req = self.client.request(method, url);
        if auth == Auth::Bearer
            && let Some(value) = self.auth_header()
        {
            req = req.header(header::AUTHORIZATION, value);
        }
        req
    }

    async fn send(&self, method: Method, url: &str, req: RequestBuilder) -> ClientResult<Response> {
        tracing::debug!(%method, url, "Sending request");
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, url, status = status.as_u16(), "Request failed");
            return Err(ClientError::Status { status, body });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Decode a body that the backend may leave empty
    async fn decode_optional<T: DeserializeOwned>(response: Response) -> ClientResult<Option<T>> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, url, Auth::Bearer);
        let response = self.send(Method::GET, url, req).await?;
        Self::decode(response).await
    }

    /// GET a list together with its `X-Total-Count` header
    pub async fn get_with_total<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> ClientResult<(T, Option<u64>)> {
        let req = self.request(Method::GET, url, Auth::Bearer);
        let response = self.send(Method::GET, url, req).await?;
        let total = total_count(&response);
        Ok((Self::decode(response).await?, total))
    }

    /// Send a JSON body and decode the (possibly empty) answer
    pub async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
        auth: Auth,
    ) -> ClientResult<Option<T>> {
        let req = self.request(method.clone(), url, auth).json(body);
        let response = self.send(method, url, req).await?;
        Self::decode_optional(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(Method::POST, url, body, Auth::Bearer)
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("empty response body".into()))
    }

    /// Send a JSON body and ignore whatever comes back
    pub async fn send_no_content<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> ClientResult<()> {
        let req = self.request(method.clone(), url, Auth::Bearer).json(body);
        self.send(method, url, req).await?;
        Ok(())
    }

    pub async fn delete(&self, url: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, url, Auth::Bearer);
        self.send(Method::DELETE, url, req).await?;
        Ok(())
    }
}

fn total_count(response: &Response) -> Option<u64> {
    let value = response.headers().get(TOTAL_COUNT_HEADER)?;
    match value.to_str().ok().and_then(|v| v.trim().parse().ok()) {
        Some(total) => Some(total),
        None => {
            tracing::warn!(value = ?value, "Unparsable X-Total-Count header");
            None
        }
    }
}
