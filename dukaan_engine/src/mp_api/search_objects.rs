use serde::{Deserialize, Serialize};

use crate::db_types::{Product, RecordId};

/// One shop in a product search result, with the products of that shop that matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProducts {
    pub shop_name: Option<String>,
    pub city: Option<String>,
    pub admin_id: RecordId,
    pub products: Vec<Product>,
}
