use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::populate::{CustomerSummary, ShopSummary};
use crate::{
    db_types::{Order, RecordId},
    helpers::de::{opt_number_or_string, opt_string_or_number},
};

pub const UNKNOWN_CUSTOMER_NAME: &str = "Unknown";
pub const UNKNOWN_CUSTOMER_EMAIL: &str = "N/A";
pub const UNKNOWN_SHOP_NAME: &str = "Unknown Shop";
pub const UNKNOWN_SHOP_CITY: &str = "Unknown City";

fn or_fallback(value: Option<&String>, fallback: &str) -> String {
    value.filter(|s| !s.is_empty()).cloned().unwrap_or_else(|| fallback.to_string())
}

/// The fields a customer submits when placing an order. Nothing has been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub customer_id: Option<String>,
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub admin_id: Option<String>,
}

/// An order as a shop admin sees it: the stored order plus the current name and email of the customer who placed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrderView {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: String,
    pub admin_id: RecordId,
    pub customer_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminOrderView {
    /// Builds the view. The names come from the populated customer rather than the snapshot taken when the order was
    /// placed, falling back to "Unknown" / "N/A" when the customer can no longer be found.
    pub fn new(order: Order, customer: Option<&CustomerSummary>) -> Self {
        let customer_name = or_fallback(customer.and_then(|c| c.name.as_ref()), UNKNOWN_CUSTOMER_NAME);
        let customer_email = or_fallback(customer.and_then(|c| c.email.as_ref()), UNKNOWN_CUSTOMER_EMAIL);
        Self {
            id: order.id,
            customer_name,
            customer_email,
            product_name: order.product_name,
            quantity: order.quantity,
            unit: order.unit,
            status: order.status,
            admin_id: order.admin_id,
            customer_id: order.customer_id,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// An order as the customer sees it, with the shop's name and city attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderView {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: String,
    /// Only present when the shop still exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<RecordId>,
    pub shop_name: String,
    pub city: String,
}

impl CustomerOrderView {
    pub fn new(order: Order, shop: Option<&ShopSummary>) -> Self {
        Self {
            id: order.id,
            product_name: order.product_name,
            quantity: order.quantity,
            unit: order.unit,
            status: order.status,
            admin_id: shop.map(|s| s.id),
            shop_name: or_fallback(shop.and_then(|s| s.shop_name.as_ref()), UNKNOWN_SHOP_NAME),
            city: or_fallback(shop.and_then(|s| s.city.as_ref()), UNKNOWN_SHOP_CITY),
        }
    }
}
