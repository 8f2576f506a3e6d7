//! # Food Service Module
//!
//! Proxies food item CRUD to the upstream API under `/api/food`, reshaping
//! JSON between the client's field names and the upstream's on the way.
//!
//! ## Sub-modules:
//! - `list`: browse and search, with optional pagination.
//! - `create`: maps a form body to the upstream shape and stores it.
//! - `update`: same mapping for an existing record, addressed by `?id=`.
//! - `delete`: removes a record, addressed by `?id=`.
//! - `validate`: runs the food form rules without touching the upstream.

mod create;
mod delete;
mod list;
mod update;
mod validate;

use actix_web::web::{self, scope};
use actix_web::Scope;

/// The base path for all food endpoints.
const API_PATH: &str = "/api/food";

/// Configures and returns the Actix `Scope` for the food routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/food`** → `list::process`: `?name=` substring search plus
///     optional `page`, `pageSize`, `sort`, `order`, `filter`. Answers
///     `{items, totalCount}`.
///
/// *   **`POST /api/food`** → `create::process`: form or canonical JSON body,
///     answers `201` with the normalized item.
///
/// *   **`PUT /api/food?id=<id>`** → `update::process`: answers the
///     normalized item, `400` without an id.
///
/// *   **`DELETE /api/food?id=<id>`** → `delete::process`: answers
///     `{success: true, data}`, `400` without an id.
///
/// *   **`POST /api/food/validate`** → `validate::process`: answers
///     `{isValid, errors}` for a form body.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            web::resource("")
                .route(web::get().to(list::process))
                .route(web::post().to(create::process))
                .route(web::put().to(update::process))
                .route(web::delete().to(delete::process)),
        )
        .route("/validate", web::post().to(validate::process))
}
