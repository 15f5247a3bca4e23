//! Web Client Implementations
//!
//! Provides the HTTP GET abstraction used by http checks. Only the status code
//! matters: the response body is never read and the response is dropped as soon
//! as its status is known.

use crate::config::defaults::MAX_REDIRECTS;
use crate::core::logger::Logger;
use crate::core::network::types::WebClientError;
use std::sync::Arc;
use std::time::Duration;

use isahc::config::{Configurable, RedirectPolicy};
use isahc::{HttpClient, Request};

/// HTTP client abstraction for dependency injection and testing
#[async_trait::async_trait]
pub trait WebClient: Send + Sync {
    /// Execute a GET request and return the response status code
    ///
    /// # Returns
    /// * `Ok(u16)` - Status code of the final response (after redirects)
    /// * `Err(WebClientError)` - Request could not be built or sent
    async fn get(&self, url: &str) -> Result<u16, WebClientError>;
}

/// Production web client implementation using isahc
pub struct IsahcWebClient {
    client: HttpClient,
    logger: Arc<Logger>,
}

impl IsahcWebClient {
    /// Build a client following up to `MAX_REDIRECTS` redirects
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>, logger: Arc<Logger>) -> Result<Self, WebClientError> {
        let mut builder =
            HttpClient::builder().redirect_policy(RedirectPolicy::Limit(MAX_REDIRECTS));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(WebClientError::Client)?;
        Ok(Self { client, logger })
    }
}

#[async_trait::async_trait]
impl WebClient for IsahcWebClient {
    async fn get(&self, url: &str) -> Result<u16, WebClientError> {
        self.logger.debug(
            "WebClient",
            "request_start",
            &format!("Attempting to make GET request to {}", url),
        );

        let request = Request::get(url)
            .body(())
            .map_err(|source| WebClientError::Request {
                url: url.to_string(),
                source,
            })?;

        let response = self
            .client
            .send_async(request)
            .await
            .map_err(|source| WebClientError::Transport {
                url: url.to_string(),
                source,
            })?;

        // Body is left unread; dropping the response releases the connection
        let status = response.status().as_u16();
        drop(response);
        Ok(status)
    }
}
