//! Core HTTP operations for the catalog endpoints
//!
//! A single GET per call. Every failure is mapped onto the [`FetchError`]
//! taxonomy; nothing is retried.

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::{FetchError, FetchResult};

/// HTTP operations handler
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a new HttpHandler around a configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and decodes the body as a JSON array of `T`
    ///
    /// # Errors
    ///
    /// - `FetchError::Network` on transport failure or when the body is not
    ///   a JSON array of `T`
    /// - `FetchError::Server` on a non-2xx status
    /// - `FetchError::EmptyResult` on an empty or `null` body
    pub async fn get_json_list<T: DeserializeOwned>(&self, url: &Url) -> FetchResult<Vec<T>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered HTTP {}", url, status.as_u16());
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_list(&body)
    }
}

/// Decodes a response body as a JSON array of `T`
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> FetchResult<Vec<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyResult);
    }

    let records: Option<Vec<T>> = serde_json::from_slice(body)?;
    let records = records.ok_or(FetchError::EmptyResult)?;
    tracing::debug!("Decoded {} records", records.len());
    Ok(records)
}
