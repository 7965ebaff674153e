use serde::{Deserialize, Serialize};
use vechnost_common::Money;

use crate::db_types::{DepositStatus, NewProduct, Order, OrderStatus, ProductType, Provider, ProviderName};

//--------------------------------------  CreateOrderRequest --------------------------------------------------------
/// Client payload for placing an order. Pricing fields (`total_price`,
/// `payment_url`, `status`) are server-assigned and absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub product_id: i64,
    #[serde(default = "default_amount")]
    pub amount: i64,
    #[serde(default)]
    pub target_id: Option<String>,
    /// Overrides the product's fulfilment provider when set.
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub payment_method_code: Option<String>,
    /// Gateway reference, when the client already holds one. Webhooks
    /// reconcile against it later.
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_amount() -> i64 {
    1
}

//--------------------------------------   NewOrderResult   ----------------------------------------------------------
/// What the storefront shows straight after checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderResult {
    pub id: i64,
    pub payment_url: Option<String>,
    pub total_price: Money,
}

//--------------------------------------  OrderQueryFilter  ----------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQueryFilter {
    pub status: Option<OrderStatus>,
    pub user_id: Option<i64>,
}

impl OrderQueryFilter {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.user_id.is_none()
    }
}

//-------------------------------------- ProductQueryFilter ----------------------------------------------------------
/// Product search criteria. Field names double as the public query-string
/// parameters, hence the renames.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQueryFilter {
    #[serde(rename = "category", default)]
    pub category_id: Option<i64>,
    #[serde(rename = "type", default)]
    pub product_type: Option<ProductType>,
    /// Case-insensitive substring match over title, description and tags.
    #[serde(default)]
    pub q: Option<String>,
}

impl ProductQueryFilter {
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn with_term(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.product_type.is_none() && self.q.is_none()
    }
}

//-------------------------------------- DepositQueryFilter ----------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepositQueryFilter {
    pub user_id: Option<i64>,
    pub status: Option<DepositStatus>,
}

impl DepositQueryFilter {
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: DepositStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.status.is_none()
    }
}

//--------------------------------------   BulkAddRequest   ----------------------------------------------------------
/// A batch of products pulled from an upstream provider's catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAddRequest {
    pub provider: ProviderName,
    #[serde(default)]
    pub items: Vec<BulkProductItem>,
}

/// One upstream catalogue entry. Providers are sloppy about field names, so
/// everything is optional and resolved with fallbacks on import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkProductItem {
    #[serde(default)]
    pub title: Option<String>,
    /// Some providers say `name` instead of `title`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(rename = "type", default)]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl BulkProductItem {
    /// Resolves the item into an insertable product. Blank titles fall back
    /// to `name`, and failing that to the generic "Produk".
    pub fn into_new_product(self, provider: ProviderName) -> NewProduct {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .or(self.name.filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "Produk".to_string());
        NewProduct {
            title,
            description: self.description,
            price: self.price.unwrap_or(Money::ZERO),
            category_id: self.category_id,
            product_type: self.product_type.unwrap_or_default(),
            provider: Some(provider.into()),
            is_active: true,
            tags: self.tags.unwrap_or_default(),
        }
    }
}

//--------------------------------------    RankingEntry    ----------------------------------------------------------
/// One row of the top-products listing. The title is `None` when the product
/// has since been deleted; the row still ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub product_id: i64,
    pub product_title: Option<String>,
    pub orders: i64,
    pub revenue: Money,
}

//--------------------------------------    AdminOverview   ----------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverview {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
    pub deposits: i64,
    pub pending_orders: i64,
    pub paid_orders: i64,
    /// The ten newest orders, newest first.
    pub recent_orders: Vec<Order>,
}
