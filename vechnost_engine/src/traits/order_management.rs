use thiserror::Error;

use crate::{
    api::objects::OrderQueryFilter,
    db_types::{NewOrder, Order, OrderStatus},
    helpers::PriceOverflow,
    traits::CatalogError,
};

/// The order lifecycle: priced inserts, lookups and webhook-driven status
/// updates.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Stores a priced order in a single atomic transaction.
    ///
    /// When the order's payment method routes through a hosted gateway, the
    /// mock checkout URL (which embeds the new order id) is attached before
    /// the transaction commits, so no reader ever observes a gateway order
    /// without its `payment_url`.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderFlowError>;

    async fn fetch_order(&self, id: i64) -> Result<Option<Order>, OrderFlowError>;

    async fn fetch_order_by_payment_reference(&self, reference: &str) -> Result<Option<Order>, OrderFlowError>;

    /// Sets the order's status and bumps `updated_at`. The update is
    /// unconditional; replaying a webhook is a no-op rather than an error.
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderFlowError>;

    /// Fetches orders matching the filter, in insertion order.
    async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderFlowError>;
}

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("Could not connect to the database: {0}")]
    DatabaseError(String),
    #[error("Product {0} does not exist")]
    ProductNotFound(i64),
    #[error("Order {0} does not exist")]
    OrderNotFound(String),
    #[error("Order amount must be at least 1, not {0}")]
    InvalidAmount(i64),
    #[error("Order could not be priced: {0}")]
    PriceError(#[from] PriceOverflow),
    #[error("Catalog lookup failed: {0}")]
    CatalogError(#[from] CatalogError),
}

impl From<sqlx::Error> for OrderFlowError {
    fn from(e: sqlx::Error) -> Self {
        OrderFlowError::DatabaseError(e.to_string())
    }
}
