use crate::error::{AppError, FoodAction};
use crate::state::AppState;
use crate::upstream::FoodUpstream;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use common::model::food::DeleteAck;
use common::requests::FoodIdRequest;
use log::info;

/// Handler for `DELETE /api/food?id=<id>`.
pub async fn process(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let query = FoodIdRequest::from_query(req.query_string());
    match delete_food(query.id(), state.upstream()).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => e.error_response(),
    }
}

pub async fn delete_food(id: Option<&str>, upstream: &dyn FoodUpstream) -> Result<DeleteAck, AppError> {
    let id = id.ok_or(AppError::MissingId)?;

    let deleted = upstream
        .delete(id)
        .await
        .map_err(|e| AppError::upstream(FoodAction::Delete, e))?;

    info!("Deleted food item {id}");
    Ok(DeleteAck::new(deleted))
}
