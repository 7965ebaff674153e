use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use vechnost_common::Money;
use vechnost_engine::{
    db_types::{Json, Product, ProductSales, ProductType},
    objects::AdminOverview,
    ReportApi,
    ReportError,
};

use super::helpers::get_request;
use crate::{
    endpoint_tests::mocks::MockStorefront,
    routes::{AdminOverviewRoute, StorageCheckRoute, TopProductsRoute},
};

#[actix_web::test]
async fn rankings_resolve_product_titles() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/top?limit=2", configure_ranking).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"[{"product_id":5,"product_title":"86 Diamonds","orders":3,"revenue":150000.0}]"#);
}

#[actix_web::test]
async fn ranking_limit_defaults_to_ten() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/top", configure_default_limit).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[actix_web::test]
async fn deleted_products_still_rank() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/top?limit=1", configure_deleted_product).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"[{"product_id":5,"product_title":null,"orders":3,"revenue":150000.0}]"#);
}

#[actix_web::test]
async fn overview_reports_the_counters() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/admin/overview", configure_overview).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"users":2,"products":3,"orders":4,"deposits":1,"pending_orders":2,"paid_orders":1,"recent_orders":[]}"#
    );
}

#[actix_web::test]
async fn storage_check_lists_the_tables() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/test", configure_tables).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"backend":"ok","collections":["orders","users"],"database":"connected"}"#);
}

#[actix_web::test]
async fn storage_errors_are_reported_clipped() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/test", configure_broken_storage).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    // The handler clips the error to 80 characters before echoing it.
    let expected = format!(
        r#"{{"backend":"ok","collections":[],"database":"error: Could not connect to the database: {}"}}"#,
        "x".repeat(45)
    );
    assert_eq!(body, expected);
}

fn test_sales() -> Vec<ProductSales> {
    vec![ProductSales { product_id: 5, orders: 3, revenue: Money::from_units(150_000) }]
}

fn test_product() -> Product {
    Product {
        id: 5,
        title: "86 Diamonds".to_string(),
        description: None,
        price: Money::from_units(50_000),
        category_id: Some(2),
        product_type: ProductType::GameTopup,
        provider: None,
        is_active: true,
        tags: Json(vec![]),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}

fn add_routes(cfg: &mut ServiceConfig, db: MockStorefront) {
    cfg.service(TopProductsRoute::<MockStorefront>::new())
        .service(AdminOverviewRoute::<MockStorefront>::new())
        .service(StorageCheckRoute::<MockStorefront>::new())
        .app_data(web::Data::new(ReportApi::new(db)));
}

fn configure_ranking(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_product_sales().withf(|limit| *limit == 2).returning(|_| Ok(test_sales()));
    db.expect_fetch_product().withf(|id| *id == 5).returning(|_| Ok(Some(test_product())));
    add_routes(cfg, db);
}

fn configure_default_limit(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_product_sales().withf(|limit| *limit == 10).returning(|_| Ok(vec![]));
    add_routes(cfg, db);
}

fn configure_deleted_product(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_product_sales().returning(|_| Ok(test_sales()));
    db.expect_fetch_product().returning(|_| Ok(None));
    add_routes(cfg, db);
}

fn configure_overview(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_overview().returning(|| {
        Ok(AdminOverview {
            users: 2,
            products: 3,
            orders: 4,
            deposits: 1,
            pending_orders: 2,
            paid_orders: 1,
            recent_orders: vec![],
        })
    });
    add_routes(cfg, db);
}

fn configure_tables(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_list_tables().returning(|| Ok(vec!["orders".to_string(), "users".to_string()]));
    add_routes(cfg, db);
}

fn configure_broken_storage(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_list_tables().returning(|| Err(ReportError::DatabaseError("x".repeat(100))));
    add_routes(cfg, db);
}
