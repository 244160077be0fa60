//! Dukaan Engine
//!
//! The Dukaan Engine holds the storage and business rules for the Dukaan local marketplace, where customers order
//! produce from nearby shops (admins). This library is provider-agnostic; the HTTP surface lives in `dukaan_server`.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@db`]). SQLite is the supported backend. You should never need to access
//!    the database directly. Instead, use the public API provided by the engine. The exception is the data types used
//!    in the database. These are defined in the `db_types` module and are public.
//! 2. The marketplace public API ([`mod@mp_api`]). This provides the entity repositories, authentication, order
//!    lookup and enrichment, and shop/product search. Backends need to implement the traits in [`db::traits`] in
//!    order to act as a store for the marketplace.
pub mod db;

pub mod db_types;
pub mod helpers;
pub mod mp_api;

#[cfg(feature = "sqlite")]
pub use db::sqlite::{SqliteDatabase, SqliteDatabaseError};
pub use db::traits::{
    AdminManagement,
    AdminQueryFilter,
    CustomerManagement,
    CustomerQueryFilter,
    OrderManagement,
    OrderQueryFilter,
    ProductManagement,
    ProductQueryFilter,
    StoreError,
};
pub use mp_api::{
    auth_api::{AuthApi, LoginResult, SignupRequest},
    errors::MarketplaceError,
    order_lookup_api::OrderLookupApi,
    order_objects,
    repositories::{AdminRepository, CustomerRepository, OrderRepository, ProductRepository},
    search_api::SearchApi,
    search_objects,
};
