//! HTTP services exposed by the backend.
//!
//! `configure_app` is shared by `main.rs` and the route tests so both run
//! the exact same application wiring.

pub mod food;

use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Registers application data and every service scope.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::PayloadConfig::new(state.config.body_limit))
        .app_data(web::Data::new(state))
        .service(food::configure_routes());
}

/// Fallback for paths no service claims.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
