//! Company Model

use serde::{Deserialize, Serialize};

use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validate, ValidationError,
    validate_optional_email, validate_positive, validate_required_text,
};

/// Corporate client (organization)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Taxpayer identification number
    pub inn: i64,
    pub name: String,
    pub registration_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Validate for Company {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_positive(self.inn, "inn")?;
        validate_required_text(&self.registration_number, "registrationNumber", MAX_SHORT_TEXT_LEN)?;
        validate_optional_email(&self.email, "email")?;
        if self.address.len() > MAX_ADDRESS_LEN {
            return Err(ValidationError::new("address", "is too long"));
        }
        Ok(())
    }
}
