use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use serde_json::json;
use vechnost_common::Money;
use vechnost_engine::{
    db_types::{Category, Json, Product, ProductType, ProviderName},
    CatalogApi,
    CatalogError,
};

use super::helpers::{delete_request, get_request, post_request};
use crate::{
    endpoint_tests::mocks::MockStorefront,
    routes::{
        AdminCategoriesRoute,
        AddProviderRoute,
        BulkAddProductsRoute,
        CategoriesRoute,
        CreatePaymentMethodRoute,
        CreateProductRoute,
        DeleteProductRoute,
        ProductsRoute,
    },
};

#[actix_web::test]
async fn product_search_parses_query_params() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/products?category=2&type=pulsa&q=ml", configure_search).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[actix_web::test]
async fn both_category_listings_serve_the_same_rows() {
    let _ = env_logger::try_init().ok();
    let (status, public) = get_request("/api/categories", configure_categories).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let (status, admin) = get_request("/api/admin/categories", configure_categories).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(public, admin);
    assert!(public.contains(r#""slug":"mobile-legends""#));
}

#[actix_web::test]
async fn creating_a_product_returns_the_new_id() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"title": "86 Diamonds", "price": 20_000});
    let (status, body) = post_request("/api/admin/products", payload, configure_insert_product).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":5}"#);
}

#[actix_web::test]
async fn deleting_a_missing_product_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/api/admin/products/404", configure_no_rows).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Not found"}"#);
}

#[actix_web::test]
async fn empty_bulk_batches_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"provider": "vip", "items": []});
    let (status, body) = post_request("/api/admin/products/bulk-add", payload, configure_quiet).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"No items provided"}"#);
}

#[actix_web::test]
async fn duplicate_method_codes_conflict() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"name": "QRIS", "code": "qris"});
    let (status, body) =
        post_request("/api/admin/payment-methods", payload, configure_duplicate_code).await.expect("Request failed");
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, r#"{"error":"Payment method code qris is already in use"}"#);
}

#[actix_web::test]
async fn negative_flat_fees_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"name": "QRIS", "code": "qris", "fee_flat": -1});
    let (status, body) = post_request("/api/admin/payment-methods", payload, configure_quiet).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"fee_flat may not be negative"}"#);
}

#[actix_web::test]
async fn provider_credentials_return_only_an_id() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"name": "vip", "api_key": "abc123", "api_secret": "shhh"});
    let (status, body) = post_request("/api/admin/providers", payload, configure_provider).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":3}"#);
    assert!(!body.contains("abc123"));
}

fn test_category() -> Category {
    Category {
        id: 2,
        name: "Mobile Legends".to_string(),
        slug: "mobile-legends".to_string(),
        description: None,
        rank: 1,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}

fn test_product() -> Product {
    Product {
        id: 5,
        title: "86 Diamonds".to_string(),
        description: None,
        price: Money::from_units(20_000),
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
    cfg.service(CategoriesRoute::<MockStorefront>::new())
        .service(AdminCategoriesRoute::<MockStorefront>::new())
        .service(CreateProductRoute::<MockStorefront>::new())
        .service(ProductsRoute::<MockStorefront>::new())
        .service(BulkAddProductsRoute::<MockStorefront>::new())
        .service(DeleteProductRoute::<MockStorefront>::new())
        .service(CreatePaymentMethodRoute::<MockStorefront>::new())
        .service(AddProviderRoute::<MockStorefront>::new())
        .app_data(web::Data::new(CatalogApi::new(db)));
}

fn configure_search(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_search_products()
        .withf(|query| {
            query.category_id == Some(2) && query.product_type == Some(ProductType::Pulsa) && query.q.as_deref() == Some("ml")
        })
        .returning(|_| Ok(vec![]));
    add_routes(cfg, db);
}

fn configure_categories(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_fetch_categories().returning(|| Ok(vec![test_category()]));
    add_routes(cfg, db);
}

fn configure_insert_product(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_insert_product().returning(|_| Ok(test_product()));
    add_routes(cfg, db);
}

fn configure_no_rows(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_delete_product().returning(|_| Ok(false));
    add_routes(cfg, db);
}

fn configure_quiet(cfg: &mut ServiceConfig) {
    add_routes(cfg, MockStorefront::new());
}

fn configure_duplicate_code(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_insert_payment_method()
        .returning(|_| Err(CatalogError::DuplicateMethodCode("qris".to_string())));
    add_routes(cfg, db);
}

fn configure_provider(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_insert_provider_config()
        .withf(|config| config.name == ProviderName::Vip && config.active && config.api_key.reveal().as_str() == "abc123")
        .returning(|_| Ok(3));
    add_routes(cfg, db);
}
