use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

//--------------------------------------       RecordId        ---------------------------------------------------------
/// The creation identity of a stored record.
///
/// Ids are assigned by the store in insertion order, so a larger id always means a more recently created record.
/// Several queries rely on this as a recency proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Type, Serialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct RecordId(pub i64);

#[derive(Debug, Clone, Error)]
#[error("Malformed record id: {0}")]
pub struct MalformedIdError(pub String);

impl RecordId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for RecordId {
    type Err = MalformedIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self).map_err(|_| MalformedIdError(s.to_string()))
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = crate::helpers::de::string_or_number(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//--------------------------------------       UserType        ---------------------------------------------------------
/// The two kinds of account that can sign up and log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Admin,
}

#[derive(Debug, Clone, Error)]
#[error("Invalid user type: {0}")]
pub struct ConversionError(String);

impl FromStr for UserType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            s => Err(ConversionError(s.to_string())),
        }
    }
}

impl Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Customer => write!(f, "customer"),
            UserType::Admin => write!(f, "admin"),
        }
    }
}

//--------------------------------------       Customer        ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub mobile: Option<String>,
}

//--------------------------------------         Admin         ---------------------------------------------------------
/// A merchant account. Each admin runs exactly one shop.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub admin_name: Option<String>,
    pub shop_name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub mobile: Option<String>,
    pub photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub admin_name: Option<String>,
    pub shop_name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub mobile: Option<String>,
    /// Defaults to the empty string when the merchant did not upload a photo.
    pub photo: Option<String>,
}

//--------------------------------------        Product        ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub image: String,
    pub quantity: f64,
    pub admin_id: RecordId,
}

/// A product that has passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub image: String,
    pub quantity: f64,
    pub admin_id: RecordId,
}

//--------------------------------------    OrderStatusType    ---------------------------------------------------------
/// The intended lifecycle states of an order.
///
/// Orders store their status as free text, and any state may move to any other. This enum only names the states the
/// client apps know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatusType {
    /// The order has been placed, but the shop has not prepared it yet.
    Pending,
    /// The shop has packed the order and the customer can collect it.
    ReadyToPickup,
    /// The customer has collected the order.
    Completed,
    /// The order was cancelled by the shop or the customer.
    Cancelled,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "Pending"),
            OrderStatusType::ReadyToPickup => write!(f, "Ready to Pickup"),
            OrderStatusType::Completed => write!(f, "Completed"),
            OrderStatusType::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatusError(String);

impl FromStr for OrderStatusType {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Ready to Pickup" => Ok(Self::ReadyToPickup),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            s => Err(UnknownStatusError(s.to_string())),
        }
    }
}

//--------------------------------------         Order         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// The customer's name at the time the order was placed.
    pub customer_name: Option<String>,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: String,
    pub admin_id: RecordId,
    pub customer_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// The status as one of the known lifecycle states, or `None` if someone stored a value outside that set.
    pub fn status_type(&self) -> Option<OrderStatusType> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: RecordId,
    pub customer_name: Option<String>,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub admin_id: RecordId,
    pub status: OrderStatusType,
}

impl NewOrder {
    pub fn new(customer_id: RecordId, admin_id: RecordId, product_name: String, quantity: f64, unit: String) -> Self {
        Self {
            customer_id,
            customer_name: None,
            product_name,
            quantity,
            unit,
            admin_id,
            status: OrderStatusType::Pending,
        }
    }

    pub fn with_customer_name(mut self, name: Option<String>) -> Self {
        self.customer_name = name;
        self
    }
}
