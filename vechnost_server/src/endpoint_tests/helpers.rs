use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use anyhow::{anyhow, Result};
use log::debug;
use serde::Serialize;

async fn send_request(req: TestRequest, configure: fn(&mut ServiceConfig)) -> Result<(StatusCode, String)> {
    let req = req.to_request();
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request to {}", req.path());
    let (_, res) = test::try_call_service(&service, req)
        .await
        .map_err(|e| anyhow!("Could not call service: {e}"))?
        .into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    Ok((status, body))
}

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> Result<(StatusCode, String)> {
    send_request(TestRequest::get().uri(path), configure).await
}

pub async fn post_request<T: Serialize>(
    path: &str,
    payload: T,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String)> {
    send_request(TestRequest::post().uri(path).set_json(payload), configure).await
}

pub async fn delete_request(path: &str, configure: fn(&mut ServiceConfig)) -> Result<(StatusCode, String)> {
    send_request(TestRequest::delete().uri(path), configure).await
}
