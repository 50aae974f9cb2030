use std::time::Duration;

use async_trait::async_trait;
use bintrack_types::{
    Adjustment, Bin, Envelope, HistoryEntry, HistoryFilter, HistoryStats, Product, Record,
    RecordDraft, RecordId,
};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::debug;

use crate::api::InventoryApi;
use crate::error::{ClientError, Result};
use crate::routes;

const DEFAULT_NEEDS_CONFIG: &str = "Database not configured. Please configure your database settings.";

/// Connection settings for [`HttpInventoryApi`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    /// Raw `Cookie` header value carrying an already-issued session
    pub session_cookie: Option<String>,
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            session_cookie: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie;
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

impl HttpInventoryApi {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = options.session_cookie.as_deref() {
            let value =
                HeaderValue::from_str(cookie).map_err(|e| ClientError::Config(e.to_string()))?;
            headers.insert(COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode its envelope.
    ///
    /// 401 wins over anything in the body. Other error statuses still carry
    /// an envelope (`needs_config` arrives with 400), so the body is parsed
    /// before the status is considered.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        route: &str,
        fallback: &str,
    ) -> Result<Envelope<T>> {
        let response = request.send().await?;
        let status = response.status();
        debug!(route, status = status.as_u16(), "api response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::AuthRequired);
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => return Err(ClientError::Decode(err)),
            Err(_) => {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
        };

        check(envelope, fallback)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        route: &str,
        fallback: &str,
    ) -> Result<Vec<T>> {
        let envelope = self.fetch::<Vec<T>>(request, route, fallback).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn mutate(&self, request: RequestBuilder, route: &str, fallback: &str) -> Result<String> {
        let envelope = self.fetch::<IgnoredAny>(request, route, fallback).await?;
        Ok(envelope.message.unwrap_or_default())
    }
}

/// Map a decoded envelope onto the error taxonomy.
fn check<T>(envelope: Envelope<T>, fallback: &str) -> Result<Envelope<T>> {
    if envelope.auth_required {
        return Err(ClientError::AuthRequired);
    }
    if envelope.success {
        return Ok(envelope);
    }
    if envelope.needs_config {
        return Err(ClientError::NeedsConfig {
            message: envelope
                .message
                .unwrap_or_else(|| DEFAULT_NEEDS_CONFIG.to_string()),
        });
    }
    Err(ClientError::Rejected(
        envelope.message.unwrap_or_else(|| fallback.to_string()),
    ))
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_records(&self) -> Result<Vec<Record>> {
        debug!(route = routes::RECORDS, "GET");
        let request = self.http.get(self.url(routes::RECORDS));
        self.fetch_list(request, routes::RECORDS, "Failed to load data")
            .await
    }

    async fn list_bins(&self) -> Result<Vec<Bin>> {
        debug!(route = routes::BINS, "GET");
        let request = self.http.get(self.url(routes::BINS));
        self.fetch_list(request, routes::BINS, "Failed to load bin locations")
            .await
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }
        debug!(route = routes::PRODUCT_SEARCH, query, "GET");
        let request = self
            .http
            .get(self.url(routes::PRODUCT_SEARCH))
            .query(&[("q", query)]);
        self.fetch_list(request, routes::PRODUCT_SEARCH, "Product search failed")
            .await
    }

    async fn create_record(&self, draft: &RecordDraft) -> Result<String> {
        debug!(route = routes::RECORDS, "POST");
        let request = self.http.post(self.url(routes::RECORDS)).json(draft);
        self.mutate(request, routes::RECORDS, "Failed to save record")
            .await
    }

    async fn update_record(&self, id: RecordId, draft: &RecordDraft) -> Result<String> {
        let route = routes::record(id);
        debug!(route = %route, "PUT");
        let request = self.http.put(self.url(&route)).json(draft);
        self.mutate(request, &route, "Failed to save record").await
    }

    async fn adjust_record(&self, id: RecordId, adjustment: &Adjustment) -> Result<String> {
        let route = routes::record_adjust(id);
        debug!(route = %route, delta = adjustment.adjustment, "PATCH");
        let request = self.http.patch(self.url(&route)).json(adjustment);
        self.mutate(request, &route, "Failed to adjust quantity")
            .await
    }

    async fn delete_record(&self, id: RecordId) -> Result<String> {
        let route = routes::record(id);
        debug!(route = %route, "DELETE");
        let request = self.http.delete(self.url(&route));
        self.mutate(request, &route, "Failed to delete record").await
    }

    async fn history(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>> {
        debug!(route = routes::HISTORY, limit = filter.limit, "GET");
        let request = self.http.get(self.url(routes::HISTORY)).query(filter);
        self.fetch_list(request, routes::HISTORY, "Failed to load history")
            .await
    }

    async fn history_stats(&self) -> Result<HistoryStats> {
        debug!(route = routes::HISTORY_STATS, "GET");
        let request = self.http.get(self.url(routes::HISTORY_STATS));
        let envelope = self
            .fetch::<HistoryStats>(request, routes::HISTORY_STATS, "Failed to load history stats")
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn health(&self) -> Result<String> {
        debug!(route = routes::HEALTH, "GET");
        let response = self.http.get(self.url(routes::HEALTH)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let health: HealthBody = serde_json::from_str(&body)?;
        Ok(health.status)
    }

    async fn logout(&self) -> Result<()> {
        debug!(route = routes::LOGOUT, "POST");
        let response = self.http.post(self.url(routes::LOGOUT)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_prefers_auth_flag() {
        let mut envelope: Envelope<()> = Envelope::failure("nope");
        envelope.auth_required = true;
        assert!(check(envelope, "fallback").unwrap_err().is_auth_required());
    }

    #[test]
    fn test_check_uses_fallback_message() {
        let mut envelope: Envelope<()> = Envelope::failure("");
        envelope.message = None;
        let err = check(envelope, "Failed to delete record").unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete record");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpInventoryApi::new(ClientOptions::new("http://localhost:5000/")).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url(routes::BINS), "http://localhost:5000/api/bins");
    }
}
