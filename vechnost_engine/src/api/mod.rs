//! The high-level storefront APIs.
//!
//! Each API struct wraps a database backend and adds the validation and orchestration logic that
//! sits above raw storage: pricing orders, rejecting bad ratings, resolving product titles for
//! rankings and so on. The backend is any type implementing the relevant traits from
//! [`crate::traits`], which keeps the APIs testable against mocks and portable across storage
//! implementations.
//!
//! A typical server wires them up like this:
//!
//! ```rust,ignore
//! use vechnost_engine::{CatalogApi, OrderFlowApi, SqliteDatabase};
//!
//! let db = SqliteDatabase::new_with_url("sqlite://data/vechnost.db", 25).await?;
//! let catalog = CatalogApi::new(db.clone());
//! let orders = OrderFlowApi::new(db.clone());
//! let result = orders.create_order(request).await?;
//! ```

mod catalog_api;
mod deposit_api;
mod order_flow_api;
mod rating_api;
mod report_api;
mod user_api;

pub mod objects;

pub use catalog_api::CatalogApi;
pub use deposit_api::DepositApi;
pub use order_flow_api::OrderFlowApi;
pub use rating_api::RatingApi;
pub use report_api::ReportApi;
pub use user_api::UserApi;
