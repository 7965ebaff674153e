use mockall::mock;
use vechnost_engine::{
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
    objects::{AdminOverview, DepositQueryFilter, OrderQueryFilter, ProductQueryFilter},
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

mock! {
    pub Storefront {}
    impl UserManagement for Storefront {
        async fn insert_user(&self, user: NewUser) -> Result<User, UserError>;
        async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        async fn fetch_users(&self) -> Result<Vec<User>, UserError>;
        async fn delete_user(&self, id: i64) -> Result<bool, UserError>;
    }
    impl CatalogManagement for Storefront {
        async fn insert_category(&self, category: NewCategory) -> Result<Category, CatalogError>;
        async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;
        async fn delete_category(&self, id: i64) -> Result<bool, CatalogError>;
        async fn insert_product(&self, product: NewProduct) -> Result<Product, CatalogError>;
        async fn insert_products(&self, products: Vec<NewProduct>) -> Result<usize, CatalogError>;
        async fn fetch_product(&self, id: i64) -> Result<Option<Product>, CatalogError>;
        async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, CatalogError>;
        async fn delete_product(&self, id: i64) -> Result<bool, CatalogError>;
        async fn insert_payment_method(&self, method: NewPaymentMethod) -> Result<PaymentMethod, CatalogError>;
        async fn fetch_active_payment_methods(&self) -> Result<Vec<PaymentMethod>, CatalogError>;
        async fn fetch_active_payment_method_by_code(&self, code: &str) -> Result<Option<PaymentMethod>, CatalogError>;
        async fn delete_payment_method(&self, id: i64) -> Result<bool, CatalogError>;
        async fn insert_provider_config(&self, config: NewProviderConfig) -> Result<i64, CatalogError>;
    }
    impl OrderManagement for Storefront {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderFlowError>;
        async fn fetch_order(&self, id: i64) -> Result<Option<Order>, OrderFlowError>;
        async fn fetch_order_by_payment_reference(&self, reference: &str) -> Result<Option<Order>, OrderFlowError>;
        async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderFlowError>;
        async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderFlowError>;
    }
    impl DepositManagement for Storefront {
        async fn insert_deposit(&self, deposit: NewDeposit) -> Result<Deposit, DepositError>;
        async fn search_deposits(&self, query: DepositQueryFilter) -> Result<Vec<Deposit>, DepositError>;
    }
    impl RatingManagement for Storefront {
        async fn insert_rating(&self, rating: NewRating) -> Result<Rating, RatingError>;
        async fn fetch_ratings_for_product(&self, product_id: i64) -> Result<Vec<Rating>, RatingError>;
    }
    impl Reporting for Storefront {
        async fn product_sales(&self, limit: i64) -> Result<Vec<ProductSales>, ReportError>;
        async fn overview(&self) -> Result<AdminOverview, ReportError>;
        async fn list_tables(&self) -> Result<Vec<String>, ReportError>;
    }
}
