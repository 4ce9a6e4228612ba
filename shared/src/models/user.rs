//! User, Role and Tenant Models

use serde::{Deserialize, Serialize};

use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validate, ValidationError, validate_email,
    validate_password, validate_required_text,
};

/// Tenant that owns a set of users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

/// Authority that can be granted to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

/// Console user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub login: String,
    /// Only sent when registering a new account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub lang_key: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,
}

impl User {
    /// Replace the granted authorities with the names of `roles`
    pub fn assign_roles(&mut self, roles: &[Role]) {
        self.authorities = Some(roles.iter().map(|r| r.name.clone()).collect());
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.login, "login", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.first_name, "firstName", MAX_NAME_LEN)?;
        validate_required_text(&self.last_name, "lastName", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")?;
        if self.id.is_none() {
            validate_password(self.password.as_deref().unwrap_or_default(), "password")?;
        }
        Ok(())
    }
}

/// Password reset for another user's login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub login: String,
    pub password: String,
}

impl Validate for ChangePassword {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.login, "login", MAX_SHORT_TEXT_LEN)?;
        validate_password(&self.password, "password")
    }
}
