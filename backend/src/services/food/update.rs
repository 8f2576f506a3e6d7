use crate::error::{AppError, FoodAction};
use crate::state::AppState;
use crate::upstream::FoodUpstream;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use common::model::food::FoodItem;
use common::normalize::{normalize_item, to_upstream_payload};
use common::requests::FoodIdRequest;
use log::info;
use serde_json::Value;

/// Handler for `PUT /api/food?id=<id>`.
pub async fn process(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> impl Responder {
    let query = FoodIdRequest::from_query(req.query_string());
    match update_food(query.id(), &body, state.upstream()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => e.error_response(),
    }
}

/// Replaces the record `id` with the mapped client body.
///
/// A missing id is rejected before the body is parsed or the upstream is
/// contacted.
pub async fn update_food(
    id: Option<&str>,
    body: &[u8],
    upstream: &dyn FoodUpstream,
) -> Result<FoodItem, AppError> {
    let id = id.ok_or(AppError::MissingId)?;

    let body: Value =
        serde_json::from_slice(body).map_err(|e| AppError::internal(FoodAction::Update, e))?;

    let payload = to_upstream_payload(&body);
    let updated = upstream
        .update(id, &payload)
        .await
        .map_err(|e| AppError::upstream(FoodAction::Update, e))?;

    info!("Updated food item {id}");
    Ok(normalize_item(&updated))
}
