use actix_web::{http::StatusCode, web::ServiceConfig};
use serde_json::json;

use super::helpers::{get_request, post_request};
use crate::routes::{calc_total, check_game_id, health, index};

#[actix_web::test]
async fn health_says_ok() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/health", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn root_reports_backend_identity() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Backend running","name":"Vechnost"}"#);
}

#[actix_web::test]
async fn short_game_ids_are_invalid() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"game": "mobile-legends", "user_id": " ab "});
    let (status, body) = post_request("/api/tools/check-game-id", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"ID terlalu pendek","valid":false}"#);
}

#[actix_web::test]
async fn valid_game_ids_get_a_nickname() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"game": "mobile-legends", "user_id": "123456789"});
    let (status, body) = post_request("/api/tools/check-game-id", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"game":"mobile-legends","nickname":"Player-6789","valid":true}"#);
}

#[actix_web::test]
async fn calc_applies_percent_and_flat_fees() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"price": 100_000, "amount": 2, "fee_percent": 2.5, "fee_flat": 1000});
    let (status, body) = post_request("/api/tools/calc", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"base":200000.0,"total":206000.0}"#);
}

#[actix_web::test]
async fn calc_defaults_to_one_unit_and_no_fees() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"price": 10});
    let (status, body) = post_request("/api/tools/calc", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"base":10.0,"total":10.0}"#);
}

// These handlers take no backend, so a single configuration covers them all.
fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health).service(index).service(check_game_id).service(calc_total);
}
