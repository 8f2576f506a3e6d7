//! The upstream food API the `/api/food` routes proxy to.
//!
//! Routes only see the `FoodUpstream` trait. `MockApiClient` is the HTTP
//! implementation used by the server; tests swap in an in-memory fake.

mod client;
#[cfg(test)]
pub mod fake;

pub use client::MockApiClient;

use async_trait::async_trait;
use common::normalize::UpstreamPayload;
use common::requests::ListFoodsRequest;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UpstreamError>;

/// List parameters in the upstream's own vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub name: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
}

impl UpstreamQuery {
    /// Translates the client's list parameters (`pageSize`, `sort`) into
    /// the upstream names (`limit`, `sortBy`).
    pub fn from_request(request: &ListFoodsRequest) -> Self {
        Self {
            name: request.name().map(str::to_string),
            page: request.page(),
            limit: request.page_size(),
            sort_by: request.sort().map(str::to_string),
            order: request.order().map(str::to_string),
            filter: request.filter().map(str::to_string),
        }
    }

    /// Query-string pairs, in a stable order, for the parameters that are set.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(order) = &self.order {
            pairs.push(("order", order.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        pairs
    }
}

/// Operations the proxy needs from the upstream API. Each returns the
/// upstream's JSON body untouched; normalization happens in the routes.
#[async_trait]
pub trait FoodUpstream: Send + Sync {
    async fn list(&self, query: &UpstreamQuery) -> Result<Value>;

    async fn create(&self, payload: &UpstreamPayload) -> Result<Value>;

    async fn update(&self, id: &str, payload: &UpstreamPayload) -> Result<Value>;

    async fn delete(&self, id: &str) -> Result<Value>;
}
