use super::{ProductQueryFilter, StoreError};
use crate::db_types::{NewProduct, Product, RecordId};

#[allow(async_fn_in_trait)]
pub trait ProductManagement {
    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    async fn fetch_product(&self, id: RecordId) -> Result<Option<Product>, StoreError>;

    /// Fetches products matching `query`, in ascending id order.
    async fn fetch_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, StoreError>;

    /// Deletes the product with the given id. Returns the number of rows removed, which is zero if there was no
    /// such product.
    async fn delete_product(&self, id: RecordId) -> Result<u64, StoreError>;
}
