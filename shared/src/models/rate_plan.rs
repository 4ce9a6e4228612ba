//! Rate Plan Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CancellationPolicy, Currency, ExtraService};
use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validate, ValidationError, validate_required_text,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatePlanStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatePlanType {
    Base,
    Derived,
}

/// Pricing plan with its bundled services and cancellation terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub short_name: String,
    pub status: RatePlanStatus,
    #[serde(rename = "type")]
    pub plan_type: RatePlanType,
    pub start_date: NaiveDate,
    /// Open-ended when absent
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub extra_services: Vec<ExtraService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_cancellation_policy: Option<CancellationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_cancellation_policy: Option<CancellationPolicy>,
}

impl Validate for RatePlan {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.short_name, "shortName", MAX_SHORT_TEXT_LEN)?;
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(ValidationError::new("endDate", "must not be before the start date"));
        }
        if let Some(policy) = &self.late_cancellation_policy {
            policy.validate()?;
        }
        if let Some(policy) = &self.early_cancellation_policy {
            policy.validate()?;
        }
        Ok(())
    }
}
