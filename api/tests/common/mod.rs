//! Helpers shared by the API integration tests

#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use serde_json::{json, Value};

use shelf_api::AppState;
use shelf_infra::Storage;
use shelf_shared::config::{AppConfig, Environment, JwtConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Preset for `environment` with a fixed secret and a cheap hash cost
pub fn test_config(environment: Environment) -> AppConfig {
    let mut config = AppConfig::for_environment(environment);
    config.auth.jwt = JwtConfig::new(TEST_SECRET);
    config.auth.bcrypt_cost = 4;
    config
}

pub fn state(environment: Environment) -> web::Data<AppState> {
    state_with(environment, Storage::in_memory())
}

pub fn state_with(environment: Environment, storage: Storage) -> web::Data<AppState> {
    web::Data::new(AppState::new(&test_config(environment), storage))
}

/// Status and parsed JSON body of a response
pub async fn read<B: MessageBody>(resp: ServiceResponse<B>) -> (u16, Value) {
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn register_request(user_name: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "userName": user_name, "email": email, "password": "secret123" }))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
