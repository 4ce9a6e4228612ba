//! Currency Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// ISO 4217 code, e.g. `EUR`
    pub code: String,
    #[serde(default)]
    pub name: String,
}
