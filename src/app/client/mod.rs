//! HTTP client for the remote catalog
//!
//! The client is constructed explicitly and shared by the screens through an
//! `Arc`; there is no process-wide instance.
//!
//! The module is organized into:
//! - `config`: HTTP client configuration and building
//! - `http`: the single GET-and-decode operation

use url::Url;

use crate::config::EndpointConfig;
use crate::errors::{ClientError, ClientResult, FetchResult};

pub mod config;
pub mod http;

#[cfg(test)]
pub(crate) mod stub;

pub use config::ClientConfig;

use super::models::Listing;
use http::HttpHandler;

/// HTTP client for the countries and books endpoints
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_handler: HttpHandler,
    base_url: Url,
    endpoints: EndpointConfig,
}

impl CatalogClient {
    /// Creates a client for the given endpoints
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the base URL does not parse or the HTTP
    /// client cannot be built
    pub fn new(config: &ClientConfig, endpoints: EndpointConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&endpoints.base_url).map_err(|error| ClientError::InvalidUrl {
            url: endpoints.base_url.clone(),
            error,
        })?;
        let client = config.build_http_client()?;

        tracing::debug!("Created catalog client for {}", base_url);

        Ok(Self {
            http_handler: HttpHandler::new(client),
            base_url,
            endpoints,
        })
    }

    /// Full URL of the endpoint serving `T`
    pub fn endpoint_url<T: Listing>(&self) -> ClientResult<Url> {
        let path = T::endpoint_path(&self.endpoints);
        self.base_url
            .join(path)
            .map_err(|error| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                error,
            })
    }

    /// Fetches the full list of `T` from `url`
    pub async fn fetch_list<T: Listing>(&self, url: &Url) -> FetchResult<Vec<T>> {
        let records: Vec<T> = self.http_handler.get_json_list(url).await?;
        T::inspect_batch(&records);
        Ok(records)
    }
}
