//! Application-facing errors of the `/api/food` routes.
//!
//! Every failure leaves the server as `{"error": "<message>"}`:
//! - a missing `id` on update/delete is a `400`;
//! - an upstream non-2xx status is passed through with a generic message;
//! - anything else (network, timeout, malformed JSON) is a `500` whose detail
//!   is logged but never sent to the client.

use crate::upstream::UpstreamError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The proxied operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodAction {
    List,
    Create,
    Update,
    Delete,
}

impl FoodAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            FoodAction::List => "Failed to fetch food items",
            FoodAction::Create => "Failed to create food item",
            FoodAction::Update => "Failed to update food item",
            FoodAction::Delete => "Failed to delete food item",
        }
    }
}

impl fmt::Display for FoodAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            FoodAction::List => "GET",
            FoodAction::Create => "POST",
            FoodAction::Update => "PUT",
            FoodAction::Delete => "DELETE",
        };
        write!(f, "{method} /api/food")
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing id parameter")]
    MissingId,

    #[error("{}", .action.failure_message())]
    Upstream { status: u16, action: FoodAction },

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    /// Maps an upstream failure for `action`, logging it on the way.
    pub fn upstream(action: FoodAction, err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status(status) => {
                warn!("{action}: upstream responded with {status}");
                AppError::Upstream { status, action }
            }
            other => Self::internal(action, other),
        }
    }

    /// Logs `detail` and hides it behind a generic `500`.
    pub fn internal(action: FoodAction, detail: impl fmt::Display) -> Self {
        error!("{action} error: {detail}");
        AppError::Internal
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingId => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
