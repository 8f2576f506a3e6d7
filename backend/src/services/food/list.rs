//! # Food Listing Service
//!
//! Backend logic for `GET /api/food`, the browse and search endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` reads the optional query parameters
//!     `name`, `page`, `pageSize`, `sort`, `order` and `filter` into a
//!     `ListFoodsRequest`. Blank values and unparsable numbers are ignored,
//!     and a repeated key keeps its first value.
//!
//! 2.  **Translation**: the parameters are renamed to the upstream's
//!     vocabulary (`pageSize` → `limit`, `sort` → `sortBy`) in an
//!     `UpstreamQuery`.
//!
//! 3.  **Upstream Call**: `list_foods` asks the configured `FoodUpstream` for
//!     the matching records.
//!
//! 4.  **Normalization**: every record of the returned array goes through
//!     `normalize_item`. A body that is not an array yields an empty listing.
//!
//! 5.  **HTTP Response**: `200 OK` with `{items, totalCount}` (plus `page` and
//!     `pageSize` when a page was requested). An upstream non-2xx status is
//!     passed through as `{"error": "Failed to fetch food items"}`; any other
//!     failure is a `500`.

use crate::error::{AppError, FoodAction};
use crate::state::AppState;
use crate::upstream::{FoodUpstream, UpstreamQuery};
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use common::model::food::FoodList;
use common::normalize::normalize_items;
use common::requests::ListFoodsRequest;

/// Actix web handler for `GET /api/food`.
///
/// # Returns
/// - `200 OK` with the normalized `FoodList`.
/// - The upstream's status code, or `500`, with an `{"error": ...}` body.
pub async fn process(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let request = ListFoodsRequest::from_query(req.query_string());
    match list_foods(&request, state.upstream()).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => e.error_response(),
    }
}

/// Fetches and normalizes one listing from the upstream.
///
/// # Arguments
/// * `request` - The client's list parameters.
/// * `upstream` - The collection to query.
///
/// # Returns
/// - `Ok(FoodList)` with `totalCount` equal to the number of returned items.
/// - `Err(AppError)` when the upstream fails or answers with invalid JSON.
pub async fn list_foods(
    request: &ListFoodsRequest,
    upstream: &dyn FoodUpstream,
) -> Result<FoodList, AppError> {
    let query = UpstreamQuery::from_request(request);

    let body = upstream
        .list(&query)
        .await
        .map_err(|e| AppError::upstream(FoodAction::List, e))?;

    let items = normalize_items(&body);
    Ok(FoodList::new(items).with_page(query.page, query.limit))
}
