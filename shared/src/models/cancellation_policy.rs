//! Cancellation Policy Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{MAX_NAME_LEN, Validate, ValidationError, validate_required_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationPolicyType {
    Early,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationPolicyChargeType {
    FreeOfCharge,
    FixedRate,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub policy_type: CancellationPolicyType,
    pub charge_type: CancellationPolicyChargeType,
    /// Amount or percentage, depending on `charge_type`
    pub rate: Decimal,
}

impl Validate for CancellationPolicy {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        if self.rate.is_sign_negative() {
            return Err(ValidationError::new("rate", "must not be negative"));
        }
        if self.charge_type == CancellationPolicyChargeType::Percentage
            && self.rate > Decimal::ONE_HUNDRED
        {
            return Err(ValidationError::new("rate", "percentage cannot exceed 100"));
        }
        Ok(())
    }
}
