use serde::{Deserialize, Serialize};

use crate::helpers::de::{opt_number_or_string, opt_string_or_number};

/// The product fields a merchant submits when adding to their catalog. Nothing has been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub admin_id: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub quantity: Option<f64>,
}
