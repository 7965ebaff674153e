//! Vechnost Storefront Engine
//!
//! This library contains the core logic for the Vechnost digital goods store: user accounts, the
//! product catalogue, fee-aware order pricing, payment gateway reconciliation, deposits, product
//! ratings and the aggregates behind the admin dashboard.
//!
//! The library is divided into two main sections:
//! 1. Storage. The server never touches SQL directly. All access goes through the storage traits
//!    re-exported at the crate root ([`CatalogManagement`], [`OrderManagement`] and friends), for
//!    which [`SqliteDatabase`] is the production implementation. The record and enum types shared
//!    across layers live in [`db_types`].
//! 2. The storefront API. The `*Api` structs wrap any backend implementing the storage traits and
//!    add orchestration on top: [`OrderFlowApi`] prices orders and applies payment gateway
//!    updates, [`CatalogApi`] manages what is on sale, [`ReportApi`] serves the rankings and the
//!    dashboard. HTTP layers should talk to these rather than to the traits directly.

mod api;
mod sqlite;
mod traits;

pub mod db_types;
pub mod helpers;

pub use api::{objects, CatalogApi, DepositApi, OrderFlowApi, RatingApi, ReportApi, UserApi};
pub use sqlite::SqliteDatabase;
pub use traits::{
    CatalogError,
    CatalogManagement,
    DepositError,
    DepositManagement,
    OrderFlowError,
    OrderManagement,
    RatingError,
    RatingManagement,
    ReportError,
    Reporting,
    UserError,
    UserManagement,
};
