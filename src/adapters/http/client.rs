//! Paced HTTP client for one external service
//!
//! Wraps `reqwest` with the service's pacer, a per-request timeout, and
//! bounded exponential-backoff retry for GETs. Status interpretation is
//! left to the adapter that owns the endpoint.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RequestPacer;
use crate::error::{Result, Service, TriageError};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("recovery-triage/", env!("CARGO_PKG_VERSION"));

/// Transport settings for one service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    /// Minimum spacing between requests
    pub min_interval: Duration,
    /// Deadline for each request
    pub timeout: Duration,
    /// Extra attempts for failed GETs
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each further one
    pub retry_backoff: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            min_interval: Duration::ZERO,
            timeout: Duration::from_secs(30),
            max_retries: 0,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

/// HTTP client bound to one service and its request budget
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    pacer: Arc<RequestPacer>,
    service: Service,
    max_retries: u32,
    retry_backoff: Duration,
}

impl HttpClient {
    /// Build a client sending `headers` with every request
    pub fn new(service: Service, settings: &HttpSettings, headers: HeaderMap) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| TriageError::Setup(format!("{service} client: {e}")))?;
        Ok(Self {
            client,
            pacer: Arc::new(RequestPacer::new(settings.min_interval)),
            service,
            max_retries: settings.max_retries,
            retry_backoff: settings.retry_backoff,
        })
    }

    /// GET `url`, retrying rate-limit, server and connection failures
    ///
    /// 429 and 5xx answers become [`TriageError::TransientService`] once
    /// retries are exhausted; every other status is returned to the caller.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut attempt = 0;
        loop {
            match self.get_once(url).await {
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let delay = self.retry_backoff.saturating_mul(2u32.saturating_pow(attempt));
                    warn!("{e}; retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                },
                other => return other,
            }
        }
    }

    async fn get_once(&self, url: &str) -> Result<Response> {
        self.pacer.acquire().await;
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TriageError::from_request(self.service, url, e))?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(TriageError::unexpected_status(self.service, status.as_u16(), url));
        }
        Ok(response)
    }

    /// POST a JSON body to `url` (never retried)
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Response> {
        self.pacer.acquire().await;
        debug!("POST {url}");
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TriageError::from_request(self.service, url, e))
    }

    /// Read a response body as text
    pub async fn read_text(&self, url: &str, response: Response) -> Result<String> {
        response
            .text()
            .await
            .map_err(|e| TriageError::from_request(self.service, url, e))
    }

    /// Read and decode a JSON response body
    pub async fn read_json<T: DeserializeOwned>(&self, url: &str, response: Response) -> Result<T> {
        let body = self.read_text(url, response).await?;
        serde_json::from_str(&body).map_err(|e| TriageError::Decode {
            service: self.service,
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
