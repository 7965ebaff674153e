use thiserror::Error;

use crate::{
    api::objects::ProductQueryFilter,
    db_types::{Category, NewCategory, NewPaymentMethod, NewProduct, NewProviderConfig, PaymentMethod, Product},
};

/// Access to the records an order prices itself against: categories, products
/// and payment methods, plus upstream provider credentials.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    async fn insert_category(&self, category: NewCategory) -> Result<Category, CatalogError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Deletes the category, returning `false` if no such row existed.
    async fn delete_category(&self, id: i64) -> Result<bool, CatalogError>;

    async fn insert_product(&self, product: NewProduct) -> Result<Product, CatalogError>;

    /// Inserts a batch of products in a single transaction and returns the number inserted.
    async fn insert_products(&self, products: Vec<NewProduct>) -> Result<usize, CatalogError>;

    async fn fetch_product(&self, id: i64) -> Result<Option<Product>, CatalogError>;

    /// Fetches products matching the filter, in insertion order.
    async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, CatalogError>;

    async fn delete_product(&self, id: i64) -> Result<bool, CatalogError>;

    async fn insert_payment_method(&self, method: NewPaymentMethod) -> Result<PaymentMethod, CatalogError>;

    /// Fetches every payment method customers may currently select.
    async fn fetch_active_payment_methods(&self) -> Result<Vec<PaymentMethod>, CatalogError>;

    /// Looks up an **active** payment method by its unique code. Inactive
    /// methods are invisible here, so orders silently fall back to fee-free
    /// pricing when a method has been switched off.
    async fn fetch_active_payment_method_by_code(&self, code: &str) -> Result<Option<PaymentMethod>, CatalogError>;

    async fn delete_payment_method(&self, id: i64) -> Result<bool, CatalogError>;

    /// Stores upstream provider credentials and returns the new row id.
    async fn insert_provider_config(&self, config: NewProviderConfig) -> Result<i64, CatalogError>;
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Could not connect to the database: {0}")]
    DatabaseError(String),
    #[error("Category {0} does not exist")]
    CategoryNotFound(i64),
    #[error("Product {0} does not exist")]
    ProductNotFound(i64),
    #[error("Payment method {0} does not exist")]
    PaymentMethodNotFound(i64),
    #[error("Payment method code {0} is already in use")]
    DuplicateMethodCode(String),
    #[error("No items provided")]
    NoItemsProvided,
    #[error("{0} may not be negative")]
    NegativeValue(&'static str),
}

impl From<sqlx::Error> for CatalogError {
    fn from(e: sqlx::Error) -> Self {
        CatalogError::DatabaseError(e.to_string())
    }
}
