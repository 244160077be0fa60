//! Reference resolution ("populate").
//!
//! Orders point at their customer and shop by id. These helpers resolve those references for a whole batch of
//! records with one id-set query per referenced collection, and copy out only the fields the views need. A reference
//! that does not resolve is simply absent from the returned map.
use std::collections::{BTreeSet, HashMap};

use log::trace;

use crate::{
    db::traits::{AdminManagement, AdminQueryFilter, CustomerManagement, CustomerQueryFilter, StoreError},
    db_types::{Admin, Customer, RecordId},
};

/// The customer fields copied onto a populated order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<Customer> for CustomerSummary {
    fn from(c: Customer) -> Self {
        Self { name: c.name, email: c.email }
    }
}

/// The shop fields copied onto a populated order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopSummary {
    pub id: RecordId,
    pub shop_name: Option<String>,
    pub city: Option<String>,
}

impl From<Admin> for ShopSummary {
    fn from(a: Admin) -> Self {
        Self { id: a.id, shop_name: a.shop_name, city: a.city }
    }
}

fn distinct_refs<T, F>(records: &[T], reference: F) -> BTreeSet<RecordId>
where F: Fn(&T) -> RecordId {
    records.iter().map(reference).collect()
}

/// Resolves the customer referenced by each record in `records`.
pub async fn populate_customers<B, T, F>(
    db: &B,
    records: &[T],
    reference: F,
) -> Result<HashMap<RecordId, CustomerSummary>, StoreError>
where
    B: CustomerManagement,
    F: Fn(&T) -> RecordId,
{
    let ids = distinct_refs(records, reference);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let wanted = ids.len();
    let customers = db.fetch_customers(CustomerQueryFilter::default().with_ids(ids)).await?;
    trace!("🔄️ Populated {} of {wanted} customer references", customers.len());
    Ok(customers.into_iter().map(|c| (c.id, CustomerSummary::from(c))).collect())
}

/// Resolves the shop referenced by each record in `records`.
pub async fn populate_shops<B, T, F>(
    db: &B,
    records: &[T],
    reference: F,
) -> Result<HashMap<RecordId, ShopSummary>, StoreError>
where
    B: AdminManagement,
    F: Fn(&T) -> RecordId,
{
    let ids = distinct_refs(records, reference);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let wanted = ids.len();
    let admins = db.fetch_admins(AdminQueryFilter::default().with_ids(ids)).await?;
    trace!("🔄️ Populated {} of {wanted} shop references", admins.len());
    Ok(admins.into_iter().map(|a| (a.id, ShopSummary::from(a))).collect())
}
