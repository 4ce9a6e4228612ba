//! Current-user session

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;

use super::storage::{MemoryTokenStorage, TokenStorage};
use crate::error::{ClientError, ClientResult};

/// Claims read from the token payload. The signature is not verified; the
/// backend remains the authority on whether a token is accepted.
///
/// Claims of an unexpected shape are read as absent rather than failing the
/// whole token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default, deserialize_with = "lenient_text")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Expiry, seconds since the Unix epoch (may be fractional)
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub exp: Option<f64>,
}

/// Strings as-is, numbers and booleans in their JSON form
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|secs: &f64| secs.is_finite()))
}

impl TokenClaims {
    /// Decode the payload segment of a JWT
    pub fn decode(token: &str) -> ClientResult<Self> {
        let payload = token
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| ClientError::InvalidResponse("token has no payload".into()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| ClientError::InvalidResponse(format!("token payload: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp < now as f64)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }

    /// Display name: `sub`, then `username`, then the local part of
    /// `email`, then `name`.
    pub fn display_name(&self) -> Option<String> {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        non_empty(&self.sub)
            .or_else(|| non_empty(&self.username))
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|email| email.split('@').next())
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
            .or_else(|| non_empty(&self.name))
    }
}

/// The signed-in user's token, shared by every client built from the same
/// [`crate::HotelClient`]. Cloning is cheap and clones share the slot.
#[derive(Debug, Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage>,
}

impl Session {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::new()))
    }

    /// Raw stored token, whether or not it is still valid
    pub fn token(&self) -> Option<String> {
        match self.storage.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session token");
                None
            }
        }
    }

    pub fn save_token(&self, token: &str) -> ClientResult<()> {
        self.storage.store(token)
    }

    pub fn clear_token(&self) -> ClientResult<()> {
        self.storage.clear()
    }

    /// Stored token if it decodes and has not expired. Anything else is
    /// cleared from storage.
    pub fn valid_token(&self) -> Option<String> {
        let token = self.token()?;
        match TokenClaims::decode(&token) {
            Ok(claims) if !claims.is_expired() => Some(token),
            Ok(_) => {
                tracing::info!("Session token expired, clearing");
                self.discard();
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Undecodable session token, clearing");
                self.discard();
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.valid_token().is_some()
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        self.valid_token()
            .and_then(|token| TokenClaims::decode(&token).ok())
    }

    pub fn username(&self) -> Option<String> {
        self.claims().and_then(|claims| claims.display_name())
    }

    fn discard(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "Failed to clear session token");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(claims: serde_json::Value) -> String {
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("eyJhbGciOiJIUzUxMiJ9.{payload}.signature")
    }

    fn future() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_no_token_is_not_authenticated() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_valid_token() {
        let session = Session::in_memory();
        session
            .save_token(&token_with(json!({"sub": "admin", "exp": future()})))
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.username().as_deref(), Some("admin"));
    }

    #[test]
    fn test_token_without_exp_is_valid() {
        let session = Session::in_memory();
        session.save_token(&token_with(json!({"sub": "admin"}))).unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_expired_token_is_cleared() {
        let session = Session::in_memory();
        session
            .save_token(&token_with(json!({"sub": "admin", "exp": 1_000})))
            .unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_malformed_token_is_cleared() {
        let session = Session::in_memory();
        session.save_token("not-a-jwt").unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.save_token("a.%%%.c").unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let session = Session::in_memory();
        let other = session.clone();
        session.save_token(&token_with(json!({"sub": "x"}))).unwrap();
        assert!(other.is_authenticated());
        other.clear_token().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let claims = TokenClaims {
            username: Some("jdoe".into()),
            email: Some("john@example.com".into()),
            ..Default::default()
        };
        assert_eq!(claims.display_name().as_deref(), Some("jdoe"));

        let claims = TokenClaims {
            email: Some("john@example.com".into()),
            name: Some("John".into()),
            ..Default::default()
        };
        assert_eq!(claims.display_name().as_deref(), Some("john"));

        let claims = TokenClaims {
            name: Some("John".into()),
            ..Default::default()
        };
        assert_eq!(claims.display_name().as_deref(), Some("John"));
        assert_eq!(TokenClaims::default().display_name(), None);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = TokenClaims {
            exp: Some(100.0),
            ..Default::default()
        };
        assert!(!claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));

        let claims = TokenClaims {
            exp: Some(100.5),
            ..Default::default()
        };
        assert!(!claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
    }

    #[test]
    fn test_fractional_exp_keeps_session() {
        let session = Session::in_memory();
        let exp = chrono::Utc::now().timestamp() as f64 + 3600.5;
        session
            .save_token(&token_with(json!({"sub": "admin", "exp": exp})))
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.username().as_deref(), Some("admin"));
    }

    #[test]
    fn test_numeric_sub_keeps_session() {
        let session = Session::in_memory();
        session
            .save_token(&token_with(json!({"sub": 42, "exp": future()})))
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.username().as_deref(), Some("42"));
    }

    #[test]
    fn test_odd_claim_shapes_read_as_absent() {
        let claims: TokenClaims = serde_json::from_value(json!({
            "sub": {"id": 1},
            "username": null,
            "email": "jane@example.com",
            "exp": "not a time"
        }))
        .unwrap();
        assert_eq!(claims.sub, None);
        assert_eq!(claims.exp, None);
        assert_eq!(claims.display_name().as_deref(), Some("jane"));
    }
}
