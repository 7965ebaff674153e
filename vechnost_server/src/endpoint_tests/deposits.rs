use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use serde_json::json;
use vechnost_common::Money;
use vechnost_engine::{
    db_types::{Deposit, DepositStatus},
    DepositApi,
};

use super::helpers::{get_request, post_request};
use crate::{
    endpoint_tests::mocks::MockStorefront,
    routes::{CreateDepositRoute, DepositsRoute},
};

#[actix_web::test]
async fn creating_a_deposit_returns_the_new_id() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"user_id": 3, "amount": 50_000, "method_code": "qris"});
    let (status, body) = post_request("/api/deposits", payload, configure_create).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":6}"#);
}

#[actix_web::test]
async fn negative_deposits_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"user_id": 3, "amount": -5});
    let (status, body) = post_request("/api/deposits", payload, configure_quiet).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Deposit amount may not be negative: -5.00"}"#);
}

#[actix_web::test]
async fn deposit_listing_passes_the_filter_through() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/deposits?user_id=3&status=paid", configure_listing).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, DEPOSITS_JSON);
}

fn test_deposit() -> Deposit {
    Deposit {
        id: 6,
        user_id: 3,
        amount: Money::from_units(50_000),
        status: DepositStatus::Paid,
        method_code: Some("qris".to_string()),
        reference: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
    }
}

fn add_routes(cfg: &mut ServiceConfig, db: MockStorefront) {
    cfg.service(CreateDepositRoute::<MockStorefront>::new())
        .service(DepositsRoute::<MockStorefront>::new())
        .app_data(web::Data::new(DepositApi::new(db)));
}

fn configure_create(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_insert_deposit()
        .withf(|deposit| deposit.amount == Money::from_units(50_000) && deposit.method_code.as_deref() == Some("qris"))
        .returning(|_| Ok(test_deposit()));
    add_routes(cfg, db);
}

fn configure_quiet(cfg: &mut ServiceConfig) {
    add_routes(cfg, MockStorefront::new());
}

fn configure_listing(cfg: &mut ServiceConfig) {
    let mut db = MockStorefront::new();
    db.expect_search_deposits()
        .withf(|query| query.user_id == Some(3) && query.status == Some(DepositStatus::Paid))
        .returning(|_| Ok(vec![test_deposit()]));
    add_routes(cfg, db);
}

const DEPOSITS_JSON: &str = r#"[{"id":6,"user_id":3,"amount":50000.0,"status":"paid","method_code":"qris","reference":null,"created_at":"2024-05-03T08:00:00Z","updated_at":"2024-05-03T08:00:00Z"}]"#;
