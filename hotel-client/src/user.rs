//! User administration

use http::Method;
use shared::Validate;
use shared::models::{ChangePassword, User};
use std::ops::Deref;

use crate::error::ClientResult;
use crate::resource::{ResourceClient, RoutePath};
use crate::resources::CHANGE_PASSWORD_PATH;

/// [`ResourceClient`] for users plus the password reset
#[derive(Debug, Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Set a new password for `request.login`. Checked locally first.
    pub async fn change_password(&self, request: &ChangePassword) -> ClientResult<()> {
        request.validate()?;
        let url = self.inner.spec().url(
            self.inner.resolver(),
            RoutePath::Service(CHANGE_PASSWORD_PATH),
            None,
        )?;
        self.inner
            .http()
            .send_no_content(Method::POST, &url, request)
            .await?;
        tracing::info!(login = %request.login, "Password changed");
        Ok(())
    }
}

impl Deref for UserClient {
    type Target = ResourceClient<User>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
