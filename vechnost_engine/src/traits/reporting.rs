use thiserror::Error;

use crate::{api::objects::AdminOverview, db_types::ProductSales, traits::CatalogError};

/// Read-only aggregates for the storefront ranking and the admin dashboard.
#[allow(async_fn_in_trait)]
pub trait Reporting {
    /// Groups all orders by product and returns up to `limit` rows, busiest
    /// product first. Ties on order count break by ascending product id.
    /// Orders count towards their product regardless of status.
    async fn product_sales(&self, limit: i64) -> Result<Vec<ProductSales>, ReportError>;

    /// Collection counts plus the ten most recent orders.
    async fn overview(&self) -> Result<AdminOverview, ReportError>;

    /// Names of the tables in the backing store. Doubles as a connectivity
    /// probe for the health endpoint.
    async fn list_tables(&self) -> Result<Vec<String>, ReportError>;
}

#[derive(Debug, Clone, Error)]
pub enum ReportError {
    #[error("Could not connect to the database: {0}")]
    DatabaseError(String),
    #[error("Catalog lookup failed: {0}")]
    CatalogError(#[from] CatalogError),
}

impl From<sqlx::Error> for ReportError {
    fn from(e: sqlx::Error) -> Self {
        ReportError::DatabaseError(e.to_string())
    }
}
