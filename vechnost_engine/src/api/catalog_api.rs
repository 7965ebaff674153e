use std::fmt::Debug;

use log::*;
use vechnost_common::Money;

use crate::{
    api::objects::{BulkAddRequest, ProductQueryFilter},
    db_types::{
        Category,
        NewCategory,
        NewPaymentMethod,
        NewProduct,
        NewProviderConfig,
        PaymentMethod,
        Product,
    },
    traits::{CatalogError, CatalogManagement},
};

/// `CatalogApi` manages the sellable side of the store: categories, products, payment methods and
/// provider credentials.
pub struct CatalogApi<B> {
    db: B,
}

impl<B> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi")
    }
}

impl<B> CatalogApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub async fn create_category(&self, category: NewCategory) -> Result<Category, CatalogError> {
        let category = self.db.insert_category(category).await?;
        debug!("🏷️ Category {} ({}) created", category.id, category.slug);
        Ok(category)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.db.fetch_categories().await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), CatalogError> {
        if self.db.delete_category(id).await? {
            Ok(())
        } else {
            Err(CatalogError::CategoryNotFound(id))
        }
    }

    pub async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        if product.price < Money::ZERO {
            return Err(CatalogError::NegativeValue("price"));
        }
        let product = self.db.insert_product(product).await?;
        debug!("🏷️ Product {} ({}) created", product.id, product.title);
        Ok(product)
    }

    pub async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, CatalogError> {
        self.db.search_products(query).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogError> {
        if self.db.delete_product(id).await? {
            Ok(())
        } else {
            Err(CatalogError::ProductNotFound(id))
        }
    }

    /// Imports a batch of products from an upstream provider's catalogue dump.
    ///
    /// Items are forgiving in shape. Missing titles fall back to the `name` field and then to a
    /// placeholder, and missing prices come in as zero, so a partially mapped feed still loads.
    /// An empty batch is rejected.
    pub async fn bulk_add(&self, request: BulkAddRequest) -> Result<usize, CatalogError> {
        if request.items.is_empty() {
            return Err(CatalogError::NoItemsProvided);
        }
        let provider = request.provider;
        let products = request.items.into_iter().map(|item| item.into_new_product(provider)).collect::<Vec<_>>();
        let count = self.db.insert_products(products).await?;
        info!("🏷️ Imported {count} products from {provider}");
        Ok(count)
    }

    pub async fn create_payment_method(&self, method: NewPaymentMethod) -> Result<PaymentMethod, CatalogError> {
        if method.fee_percent.is_negative() {
            return Err(CatalogError::NegativeValue("fee_percent"));
        }
        if method.fee_flat < Money::ZERO {
            return Err(CatalogError::NegativeValue("fee_flat"));
        }
        let method = self.db.insert_payment_method(method).await?;
        debug!("🏷️ Payment method {} ({}) created", method.id, method.code);
        Ok(method)
    }

    pub async fn active_payment_methods(&self) -> Result<Vec<PaymentMethod>, CatalogError> {
        self.db.fetch_active_payment_methods().await
    }

    pub async fn delete_payment_method(&self, id: i64) -> Result<(), CatalogError> {
        if self.db.delete_payment_method(id).await? {
            Ok(())
        } else {
            Err(CatalogError::PaymentMethodNotFound(id))
        }
    }

    pub async fn add_provider_config(&self, config: NewProviderConfig) -> Result<i64, CatalogError> {
        let name = config.name;
        let id = self.db.insert_provider_config(config).await?;
        info!("🏷️ Stored credentials for provider {name} with id {id}");
        Ok(id)
    }
}
