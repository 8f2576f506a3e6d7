//! Shared, read-only application state.
//!
//! Built once in `main.rs` and handed to every worker as `web::Data`. Request
//! handlers never mutate it: all item state lives in the upstream API.

use crate::config::Config;
use crate::upstream::FoodUpstream;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Configuration the server was started with.
    pub config: Config,

    /// The upstream collection every `/api/food` route proxies to.
    ///
    /// Behind a trait object so tests can inject an in-memory fake in place
    /// of the HTTP client.
    pub upstream: Arc<dyn FoodUpstream>,
}

impl AppState {
    pub fn new(config: Config, upstream: Arc<dyn FoodUpstream>) -> Self {
        Self { config, upstream }
    }

    pub fn upstream(&self) -> &dyn FoodUpstream {
        self.upstream.as_ref()
    }
}
