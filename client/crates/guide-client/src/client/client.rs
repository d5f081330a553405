use crate::client::wire::{SearchRequest, SigninRequest, SignupRequest};
use crate::{CliClientResult, ClientError, SearchResponse, SigninResponse, SignupResponse};

use std::time::Duration;

use guide_core::{Credentials, SignupFields};
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the search/identity backend.
///
/// One request per call: no retry, no streaming.
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send, then decode a JSON body; non-2xx becomes an error built from `detail`.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|_| ClientError::invalid_body(status.as_u16()))?;

        if !status.is_success() {
            debug!("Backend answered {status}");
            return Err(ClientError::from_detail(status.as_u16(), body.get("detail")));
        }

        Ok(serde_json::from_value(body)?)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Ask the assistant. `selected_text` is the passage the reader highlighted, or "".
    pub async fn search(
        &self,
        query: &str,
        selected_text: &str,
    ) -> CliClientResult<SearchResponse> {
        let body = SearchRequest {
            query,
            selected_text,
        };
        let req = self.request(Method::POST, "/search").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub async fn signup(&self, fields: &SignupFields) -> CliClientResult<SignupResponse> {
        let body = SignupRequest {
            email: fields.email.trim(),
            password: &fields.password,
            background: fields.background_or_default(),
        };
        let req = self.request(Method::POST, "/signup").json(&body);
        self.execute(req).await
    }

    pub async fn signin(&self, credentials: &Credentials) -> CliClientResult<SigninResponse> {
        let body = SigninRequest {
            email: credentials.email.trim(),
            password: &credentials.password,
        };
        let req = self.request(Method::POST, "/signin").json(&body);
        self.execute(req).await
    }
}
