use super::{FoodUpstream, Result, UpstreamError, UpstreamQuery};
use crate::config::Config;
use async_trait::async_trait;
use common::normalize::UpstreamPayload;
use log::debug;
use serde_json::Value;
use url::Url;

/// `FoodUpstream` over HTTP against a mockapi.io-style collection:
/// `GET {base}`, `POST {base}`, `PUT {base}/{id}`, `DELETE {base}/{id}`.
#[derive(Debug, Clone)]
pub struct MockApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MockApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single record. The id is percent-encoded as one path segment.
    fn item_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }
}

/// Fails on any non-2xx status, otherwise decodes the body as JSON.
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl FoodUpstream for MockApiClient {
    async fn list(&self, query: &UpstreamQuery) -> Result<Value> {
        debug!("GET {} {:?}", self.base_url, query.pairs());

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&query.pairs())
            .send()
            .await?;
        read_json(response).await
    }

    async fn create(&self, payload: &UpstreamPayload) -> Result<Value> {
        debug!("POST {}", self.base_url);

        let response = self
            .http
            .post(self.base_url.clone())
            .json(payload)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update(&self, id: &str, payload: &UpstreamPayload) -> Result<Value> {
        let url = self.item_url(id);
        debug!("PUT {url}");

        let response = self.http.put(url).json(payload).send().await?;
        read_json(response).await
    }

    async fn delete(&self, id: &str) -> Result<Value> {
        let url = self.item_url(id);
        debug!("DELETE {url}");

        let response = self.http.delete(url).send().await?;
        read_json(response).await
    }
}
