use super::{AdminQueryFilter, StoreError};
use crate::db_types::{Admin, NewAdmin, RecordId};

#[allow(async_fn_in_trait)]
pub trait AdminManagement {
    /// Stores a new shop admin and returns the full record. A missing photo is stored as the empty string.
    async fn insert_admin(&self, admin: NewAdmin) -> Result<Admin, StoreError>;

    async fn fetch_admin(&self, id: RecordId) -> Result<Option<Admin>, StoreError>;

    /// Fetches admins matching `query`, in ascending id order unless the query asks otherwise.
    async fn fetch_admins(&self, query: AdminQueryFilter) -> Result<Vec<Admin>, StoreError>;
}
