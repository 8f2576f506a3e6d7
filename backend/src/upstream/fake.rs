//! In-memory `FoodUpstream` for route tests.
//!
//! Behaves like a mockapi.io collection: string ids assigned on create,
//! case-insensitive substring match on `name`, 1-based `page`/`limit`
//! pagination, and `404` for unknown ids. Every call is recorded so tests can
//! assert what reached the upstream.

use super::{FoodUpstream, Result, UpstreamError, UpstreamQuery};
use async_trait::async_trait;
use common::normalize::UpstreamPayload;
use serde_json::{json, Value};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(UpstreamQuery),
    Create(UpstreamPayload),
    Update(String, UpstreamPayload),
    Delete(String),
}

/// How the fake should misbehave on every call.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Status(u16),
    MalformedJson,
}

#[derive(Default)]
pub struct FakeUpstream {
    records: RwLock<Vec<Value>>,
    calls: RwLock<Vec<Call>>,
    next_id: RwLock<u64>,
    failure: Option<Failure>,
    list_body: Option<Value>,
}

impl FakeUpstream {
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            next_id: RwLock::new(records.len() as u64),
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Answers every list call with `body` verbatim.
    pub fn with_list_body(body: Value) -> Self {
        Self {
            list_body: Some(body),
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: Call) -> Result<()> {
        self.calls.write().await.push(call);
        match self.failure {
            None => Ok(()),
            Some(Failure::Status(status)) => Err(UpstreamError::Status(status)),
            Some(Failure::MalformedJson) => Err(UpstreamError::Json(
                serde_json::from_str::<Value>("<html>").unwrap_err(),
            )),
        }
    }

    fn stored(id: &str, payload: &UpstreamPayload) -> Value {
        let mut record = serde_json::to_value(payload).unwrap();
        record["id"] = json!(id);
        record
    }
}

fn matches_name(record: &Value, name: &str) -> bool {
    record["name"]
        .as_str()
        .is_some_and(|n| n.to_lowercase().contains(&name.to_lowercase()))
}

#[async_trait]
impl FoodUpstream for FakeUpstream {
    async fn list(&self, query: &UpstreamQuery) -> Result<Value> {
        self.record(Call::List(query.clone())).await?;
        if let Some(body) = &self.list_body {
            return Ok(body.clone());
        }

        let records = self.records.read().await;
        let matching: Vec<Value> = records
            .iter()
            .filter(|r| query.name.as_deref().map_or(true, |name| matches_name(r, name)))
            .cloned()
            .collect();

        let page: Vec<Value> = match query.limit {
            Some(limit) => {
                let skip = (query.page.unwrap_or(1).saturating_sub(1) * limit) as usize;
                matching.into_iter().skip(skip).take(limit as usize).collect()
            }
            None => matching,
        };
        Ok(Value::Array(page))
    }

    async fn create(&self, payload: &UpstreamPayload) -> Result<Value> {
        self.record(Call::Create(payload.clone())).await?;

        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        let record = Self::stored(&next_id.to_string(), payload);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, payload: &UpstreamPayload) -> Result<Value> {
        self.record(Call::Update(id.to_string(), payload.clone())).await?;

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r["id"] == json!(id))
            .ok_or(UpstreamError::Status(404))?;
        *slot = Self::stored(id, payload);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<Value> {
        self.record(Call::Delete(id.to_string())).await?;

        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r["id"] == json!(id))
            .ok_or(UpstreamError::Status(404))?;
        Ok(records.remove(index))
    }
}
