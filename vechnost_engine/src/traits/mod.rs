//! # Storage interface contracts.
//!
//! This module defines the interface contracts that storefront database *backends* must implement.
//!
//! Each trait covers one concern and carries its own error enum:
//!
//! * [`CatalogManagement`] owns categories, products and payment methods, i.e. everything an order needs to price
//!   itself against.
//! * [`OrderManagement`] owns the order lifecycle: insertion (including attaching a hosted-checkout URL in the same
//!   transaction), lookups by id or payment reference, and status updates driven by gateway webhooks.
//! * [`UserManagement`] covers registration and the admin user list.
//! * [`DepositManagement`] and [`RatingManagement`] cover the two auxiliary records customers create.
//! * [`Reporting`] provides the sales aggregate behind the top-products ranking and the admin overview counts.
//!
//! The server only ever talks to these traits (via the thin API structs in [`crate::api`]), so backends can be
//! swapped without touching any HTTP code.
mod catalog_management;
mod deposit_management;
mod order_management;
mod rating_management;
mod reporting;
mod user_management;

pub use catalog_management::{CatalogError, CatalogManagement};
pub use deposit_management::{DepositError, DepositManagement};
pub use order_management::{OrderFlowError, OrderManagement};
pub use rating_management::{RatingError, RatingManagement};
pub use reporting::{ReportError, Reporting};
pub use user_management::{UserError, UserManagement};
