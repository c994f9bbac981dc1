//! HTTP client plumbing for the homewarden REST API.
//!
//! Handles base-URL construction, request dispatch and decoding of the
//! server's JSON error bodies into typed errors.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the homewarden server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
    /// Base URL for resource endpoints (origin + `/api`)
    api_root: String,
    /// Server origin, for root endpoints such as `/health`
    origin: String,
}

impl ApiClient {
    /// Create a client for a server origin, e.g. `http://localhost:3000`.
    pub fn new(origin: &str) -> ClientResult<Self> {
        let inner = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(ClientError::Transport)?;

        let origin = origin.trim_end_matches('/').to_string();
        Ok(Self {
            api_root: format!("{origin}/api"),
            origin,
            inner,
        })
    }

    /// Liveness probe (`GET /health`).
    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        let resp = self
            .inner
            .get(format!("{}/health", self.origin))
            .send()
            .await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let resp = self.inner.get(self.url(path)).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let resp = self.inner.get(self.url(path)).query(query).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let resp = self.inner.post(self.url(path)).json(body).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let resp = self.inner.put(self.url(path)).json(body).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let resp = self.inner.patch(self.url(path)).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let resp = self.inner.delete(self.url(path)).send().await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    async fn parse_json<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
        let resp = Self::check_status(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Pass 2xx responses through; decode anything else into the typed API
    /// error using the server's JSON error body.
    async fn check_status(resp: Response) -> ClientResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Error body shape shared by all server error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}
