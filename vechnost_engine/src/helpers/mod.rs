//! Pure calculation helpers shared by the order flow and the public tools
//! endpoints.
pub mod pricing;

pub use pricing::{order_total, PriceBreakdown, PriceOverflow};
