//! Login and logout

use http::Method;
use serde::{Deserialize, Serialize};
use shared::validation::MIN_PASSWORD_LEN;

use crate::auth::Session;
use crate::endpoint::EndpointResolver;
use crate::error::{ClientError, ClientResult};
use crate::http::{Auth, GatewayHttp};
use crate::resources::{AUTHENTICATE_PATH, USERMS};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    id_token: String,
}

#[derive(Debug, Clone)]
pub struct AccountClient {
    http: GatewayHttp,
    resolver: EndpointResolver,
}

impl AccountClient {
    pub fn new(http: GatewayHttp, resolver: EndpointResolver) -> Self {
        Self { http, resolver }
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    /// Authenticate and keep the returned token in the session
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        if username.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ClientError::Validation("Invalid credentials".into()));
        }

        let url = self.resolver.resolve(AUTHENTICATE_PATH, Some(USERMS));
        let response: LoginResponse = self
            .http
            .send_json(
                Method::POST,
                &url,
                &LoginRequest { username, password },
                Auth::Anonymous,
            )
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("empty login response".into()))?;

        self.session().save_token(&response.id_token)?;
        tracing::info!(username, "Logged in");
        Ok(())
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.session().clear_token()?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }
}
