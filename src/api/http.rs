//! HTTP transport built on reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};

use super::{ApiRequest, ApiResponse, Backend, SEARCH_PATH};
use crate::error::ApiError;
use crate::model::{MediaType, Session};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Talks to the request service over HTTP
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

/// Path and query for a search call, both parameters percent-encoded.
pub fn search_path(media_type: MediaType, query: &str) -> String {
    format!(
        "{}?type={}&q={}",
        SEARCH_PATH,
        urlencoding::encode(media_type.as_str()),
        urlencoding::encode(query)
    )
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::info!(base_url = %base_url, "HTTP backend created");

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build(&self, request: &ApiRequest) -> RequestBuilder {
        match request {
            ApiRequest::Login { username, password } => self
                .client
                .post(self.url(request.path()))
                .json(&serde_json::json!({ "username": username, "password": password })),
            ApiRequest::Search { media_type, query } => {
                self.client.get(self.url(&search_path(*media_type, query)))
            }
            ApiRequest::Request { item } => self
                .client
                .post(self.url(request.path()))
                .header(CONTENT_TYPE, "application/json")
                .body(item.payload().to_string()),
            ApiRequest::Users => self.client.get(self.url(request.path())),
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn send(
        &self,
        request: &ApiRequest,
        session: Option<&Session>,
    ) -> Result<ApiResponse, ApiError> {
        let mut builder = self.build(request);
        if let Some(session) = session.filter(|s| s.is_authenticated()) {
            builder = builder.bearer_auth(session.token());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
