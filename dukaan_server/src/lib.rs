//! # Dukaan server
//! This module hosts the HTTP server for the Dukaan marketplace. It is responsible for:
//! Accepting signups and logins for customers and shop admins.
//! Serving shop catalogs, order lists and search results as JSON.
//! Passing every request through to the `dukaan_engine` APIs, which own the business rules.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes, among others:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/login` and `/signup`: Credential checks and account creation.
//! * `/api/...`: Profiles, products, orders and search. See [routes](routes/index.html) for the full list.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
