use crate::error::{AppError, FoodAction};
use crate::state::AppState;
use crate::upstream::FoodUpstream;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::food::FoodItem;
use common::normalize::{normalize_item, to_upstream_payload};
use log::info;
use serde_json::Value;

/// Handler for `POST /api/food`.
///
/// - On success: `201 Created` with the normalized item the upstream stored.
/// - On failure: the upstream status or `500`, see `AppError`.
pub async fn process(body: web::Bytes, state: web::Data<AppState>) -> impl Responder {
    match create_food(&body, state.upstream()).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => e.error_response(),
    }
}

/// Maps the client body to the upstream write shape, posts it and
/// normalizes the record the upstream answers with.
///
/// The body is not validated here: form validation happens before
/// submission and is also available through `POST /api/food/validate`.
pub async fn create_food(body: &[u8], upstream: &dyn FoodUpstream) -> Result<FoodItem, AppError> {
    let body: Value =
        serde_json::from_slice(body).map_err(|e| AppError::internal(FoodAction::Create, e))?;

    let payload = to_upstream_payload(&body);
    let created = upstream
        .create(&payload)
        .await
        .map_err(|e| AppError::upstream(FoodAction::Create, e))?;

    let item = normalize_item(&created);
    info!("Created food item {} ({})", item.id, item.name);
    Ok(item)
}
