//! HTTP client for the SendGrid v3 Email Activity API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{query::MessageQuery, types::MessagesResponse, Error};

/// HTTP client for the SendGrid v3 API.
///
/// Authenticates every request with a static bearer credential. Each request
/// builds a fresh `reqwest::Client` with a 30-second timeout; one request is
/// in flight per call, run to completion or failure with no retry.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.sendgrid.com/v3`.
    base_api_url: String,
    /// Bearer credential sent in the `Authorization` header.
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production SendGrid v3 API.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_api_url: "https://api.sendgrid.com/v3".to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&MessageQuery>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(&self, path: &str, query: Option<&MessageQuery>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedResponse
        })?;

        Ok(parsed)
    }

    /// Fetches one page of message activity matching the given query.
    pub async fn get_messages(&self, query: &MessageQuery) -> Result<MessagesResponse, Error> {
        self.get::<MessagesResponse>("/messages", Some(query)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
