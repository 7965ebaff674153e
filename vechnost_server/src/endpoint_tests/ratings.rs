use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use serde_json::json;
use vechnost_common::Money;
use vechnost_engine::{
    db_types::{Json, Product, ProductType, Rating},
    RatingApi,
};

use super::helpers::{get_request, post_request};
use crate::{
    endpoint_tests::mocks::MockStorefront,
    routes::{CreateRatingRoute, RatingsRoute},
};

#[actix_web::test]
async fn creating_a_rating_returns_the_new_id() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"user_id": 3, "product_id": 5, "stars": 4, "comment": "mantap"});
    let (status, body) = post_request("/api/ratings", payload, configure_create).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":9}"#);
}

#[actix_web::test]
async fn rating_a_missing_product_is_not_found() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"product_id": 404});
    let (status, body) = post_request("/api/ratings", payload, configure_no_product).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Product not found"}"#);
}

#[actix_web::test]
async fn six_stars_is_too_generous() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"product_id": 5, "stars": 6});
    let (status, body) = post_request("/api/ratings", payload, configure_quiet).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Rating must be between 1 and 5 stars, not 6"}"#);
}

#[actix_web::test]
async fn ratings_are_listed_per_product() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/ratings/5", configure_listing).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, RATINGS_JSON);
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

fn test_rating() -> Rating {
    Rating {
        id: 9,
        user_id: Some(3),
        product_id: 5,
        stars: 4,
        comment: Some("mantap".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
    }
}

fn add_routes(cfg: &mut ServiceConfig, db: MockStorefront) {
    cfg.service(CreateRatingRoute::<MockStorefront>::new())
        .service(RatingsRoute::<MockStorefront>::new())
        .app_data(web::Data::new(RatingApi::new(db)));
}

fn configure_create(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_fetch_product().withf(|id| *id == 5).returning(|_| Ok(Some(test_product())));
    db.expect_insert_rating().withf(|rating| rating.stars == 4).returning(|_| Ok(test_rating()));
    add_routes(cfg, db);
}

fn configure_no_product(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_fetch_product().returning(|_| Ok(None));
    add_routes(cfg, db);
}

fn configure_quiet(cfg: &mut ServiceConfig) {
    add_routes(cfg, MockStorefront::new());
}

fn configure_listing(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_fetch_ratings_for_product().withf(|id| *id == 5).returning(|_| Ok(vec![test_rating()]));
    add_routes(cfg, db);
}

const RATINGS_JSON: &str = r#"[{"id":9,"user_id":3,"product_id":5,"stars":4,"comment":"mantap","created_at":"2024-05-03T08:00:00Z","updated_at":"2024-05-03T08:00:00Z"}]"#;
