//! The marketplace's public API.
//!
//! Route handlers talk to these types, never to the store traits directly. Every API here is generic over the
//! storage backend and only asks for the collections it actually touches.
pub mod auth_api;
pub mod errors;
pub mod order_lookup_api;
pub mod order_objects;
pub mod populate;
pub mod product_objects;
pub mod repositories;
pub mod search_api;
pub mod search_objects;
