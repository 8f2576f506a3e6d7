use actix_web::{web, HttpResponse, Responder};
use common::model::form::FoodFormValues;
use common::validation::validate;
use log::error;
use serde_json::{json, Value};

// Always 200: an invalid form is a normal outcome reported in the body.
pub async fn process(body: web::Bytes) -> impl Responder {
    match serde_json::from_slice::<Value>(&body) {
        Ok(values) => HttpResponse::Ok().json(validate(&FoodFormValues::from_json(&values))),
        Err(e) => {
            error!("POST /api/food/validate error: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}
