use super::{OrderQueryFilter, StoreError};
use crate::db_types::{NewOrder, Order, RecordId};

#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError>;

    async fn fetch_order(&self, id: RecordId) -> Result<Option<Order>, StoreError>;

    /// Fetches orders matching `query`, in ascending id order unless the query asks for the newest first.
    async fn fetch_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, StoreError>;

    /// Overwrites the status of the order and returns the updated record, or `None` if there is no such order.
    ///
    /// No transition rules are applied here. Whatever string is passed in is what gets stored.
    async fn update_order_status(&self, id: RecordId, status: &str) -> Result<Option<Order>, StoreError>;
}
