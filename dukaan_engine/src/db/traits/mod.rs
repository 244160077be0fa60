//! The store adapter boundary.
//!
//! Each collection gets its own trait so that the marketplace APIs can ask for only the collections they touch.
mod admin_management;
mod customer_management;
mod errors;
mod order_management;
mod product_management;
mod query_filters;

pub use admin_management::AdminManagement;
pub use customer_management::CustomerManagement;
pub use errors::StoreError;
pub use order_management::OrderManagement;
pub use product_management::ProductManagement;
pub use query_filters::{AdminQueryFilter, CustomerQueryFilter, OrderQueryFilter, ProductQueryFilter};

