//! # Vechnost server
//! The REST face of the Vechnost storefront. It is responsible for:
//! * Deserializing and validating client requests, and digesting credentials at the boundary.
//! * Dispatching each request to the matching engine API.
//! * Translating engine errors into JSON error envelopes with the right status codes.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! Public routes cover auth, the catalog, orders and payment webhooks, deposits, ratings and the
//! top-products ranking. Admin routes under `/api/admin` expose catalog and user CRUD plus a
//! monitoring overview. The admin routes carry no authentication gate yet; keep the server behind
//! a trusted proxy until they do.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod helpers;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
