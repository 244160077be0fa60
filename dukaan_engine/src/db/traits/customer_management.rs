use super::{CustomerQueryFilter, StoreError};
use crate::db_types::{Customer, NewCustomer, RecordId};

#[allow(async_fn_in_trait)]
pub trait CustomerManagement {
    /// Stores a new customer and returns the full record, including its freshly assigned id.
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, StoreError>;

    async fn fetch_customer(&self, id: RecordId) -> Result<Option<Customer>, StoreError>;

    /// Fetches customers matching `query`, in ascending id order unless the query asks otherwise.
    async fn fetch_customers(&self, query: CustomerQueryFilter) -> Result<Vec<Customer>, StoreError>;
}
