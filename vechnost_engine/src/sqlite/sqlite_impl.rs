use std::fmt::{Debug, Formatter};

use log::*;
use sqlx::SqlitePool;

use crate::{
    api::objects::{AdminOverview, DepositQueryFilter, OrderQueryFilter, ProductQueryFilter},
    db_types::{
        Category,
        Deposit,
        NewCategory,
        NewDeposit,
        NewOrder,
        NewPaymentMethod,
        NewProduct,
        NewProviderConfig,
        NewRating,
        NewUser,
        Order,
        OrderStatus,
        PaymentMethod,
        Product,
        ProductSales,
        Rating,
        User,
    },
    sqlite::db,
    traits::{
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
    },
};

/// The Sqlite-backed storefront database. Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SqliteDatabase ({})", self.url)
    }
}

impl SqliteDatabase {
    /// Connects to the database at `url`, creating the file if it does not exist yet.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = db::new_pool(url, max_connections).await?;
        debug!("🗃️ Connected to database at {url}");
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date with the migrations embedded in this binary.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./src/sqlite/migrations").run(&self.pool).await
    }
}

impl UserManagement for SqliteDatabase {
    async fn insert_user(&self, user: NewUser) -> Result<User, UserError> {
        let mut conn = self.pool.acquire().await?;
        db::users::insert_user(user, &mut conn).await
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let mut conn = self.pool.acquire().await?;
        db::users::fetch_user_by_email(email, &mut conn).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, UserError> {
        let mut conn = self.pool.acquire().await?;
        db::users::fetch_users(&mut conn).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool, UserError> {
        let mut conn = self.pool.acquire().await?;
        db::users::delete_user(id, &mut conn).await
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn insert_category(&self, category: NewCategory) -> Result<Category, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::categories::insert_category(category, &mut conn).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::categories::fetch_categories(&mut conn).await
    }

    async fn delete_category(&self, id: i64) -> Result<bool, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::categories::delete_category(id, &mut conn).await
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::products::insert_product(product, &mut conn).await
    }

    async fn insert_products(&self, products: Vec<NewProduct>) -> Result<usize, CatalogError> {
        let mut tx = self.pool.begin().await?;
        let count = db::products::insert_products(products, &mut tx).await?;
        tx.commit().await?;
        Ok(count)
    }

    async fn fetch_product(&self, id: i64) -> Result<Option<Product>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::products::fetch_product(id, &mut conn).await
    }

    async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::products::search_products(query, &mut conn).await
    }

    async fn delete_product(&self, id: i64) -> Result<bool, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::products::delete_product(id, &mut conn).await
    }

    async fn insert_payment_method(&self, method: NewPaymentMethod) -> Result<PaymentMethod, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::payment_methods::insert_payment_method(method, &mut conn).await
    }

    async fn fetch_active_payment_methods(&self) -> Result<Vec<PaymentMethod>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::payment_methods::fetch_active_payment_methods(&mut conn).await
    }

    async fn fetch_active_payment_method_by_code(&self, code: &str) -> Result<Option<PaymentMethod>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::payment_methods::fetch_active_payment_method_by_code(code, &mut conn).await
    }

    async fn delete_payment_method(&self, id: i64) -> Result<bool, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::payment_methods::delete_payment_method(id, &mut conn).await
    }

    async fn insert_provider_config(&self, config: NewProviderConfig) -> Result<i64, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        db::providers::insert_provider_config(config, &mut conn).await
    }
}

impl OrderManagement for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderFlowError> {
        let gateway = order.gateway.filter(|g| g.is_hosted());
        let mut tx = self.pool.begin().await?;
        let mut order = db::orders::insert_order(order, &mut tx).await?;
        if let Some(gateway) = gateway {
            order = db::orders::attach_checkout_url(order.id, gateway, &mut tx).await?;
        }
        tx.commit().await?;
        Ok(order)
    }

    async fn fetch_order(&self, id: i64) -> Result<Option<Order>, OrderFlowError> {
        let mut conn = self.pool.acquire().await?;
        db::orders::fetch_order(id, &mut conn).await
    }

    async fn fetch_order_by_payment_reference(&self, reference: &str) -> Result<Option<Order>, OrderFlowError> {
        let mut conn = self.pool.acquire().await?;
        db::orders::fetch_order_by_payment_reference(reference, &mut conn).await
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderFlowError> {
        let mut conn = self.pool.acquire().await?;
        db::orders::update_order_status(id, status, &mut conn).await
    }

    async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderFlowError> {
        let mut conn = self.pool.acquire().await?;
        db::orders::search_orders(query, &mut conn).await
    }
}

impl DepositManagement for SqliteDatabase {
    async fn insert_deposit(&self, deposit: NewDeposit) -> Result<Deposit, DepositError> {
        let mut conn = self.pool.acquire().await?;
        db::deposits::insert_deposit(deposit, &mut conn).await
    }

    async fn search_deposits(&self, query: DepositQueryFilter) -> Result<Vec<Deposit>, DepositError> {
        let mut conn = self.pool.acquire().await?;
        db::deposits::search_deposits(query, &mut conn).await
    }
}

impl RatingManagement for SqliteDatabase {
    async fn insert_rating(&self, rating: NewRating) -> Result<Rating, RatingError> {
        let mut conn = self.pool.acquire().await?;
        db::ratings::insert_rating(rating, &mut conn).await
    }

    async fn fetch_ratings_for_product(&self, product_id: i64) -> Result<Vec<Rating>, RatingError> {
        let mut conn = self.pool.acquire().await?;
        db::ratings::fetch_ratings_for_product(product_id, &mut conn).await
    }
}

impl Reporting for SqliteDatabase {
    async fn product_sales(&self, limit: i64) -> Result<Vec<ProductSales>, ReportError> {
        let mut conn = self.pool.acquire().await?;
        db::reports::product_sales(limit, &mut conn).await
    }

    async fn overview(&self) -> Result<AdminOverview, ReportError> {
        let mut conn = self.pool.acquire().await?;
        db::reports::overview(&mut conn).await
    }

    async fn list_tables(&self) -> Result<Vec<String>, ReportError> {
        let mut conn = self.pool.acquire().await?;
        db::reports::list_tables(&mut conn).await
    }
}
