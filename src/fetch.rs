//! Page fetching
//!
//! The digest pipeline only needs "give me the text behind this URL".
//! [`HttpFetcher`] asks a reader endpoint for a markdown rendering of the
//! page; tests plug in their own [`Fetch`] implementations.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::storage::FetchConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetching {url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// Source of page text
pub trait Fetch {
    /// Returns the textual content behind `url`
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher
pub struct HttpFetcher {
    client: Client,
    reader_endpoint: String,
}

impl HttpFetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            reader_endpoint: config.reader_endpoint.clone(),
        })
    }

    /// URL actually requested for a page
    pub fn request_url(&self, url: &str) -> String {
        format!("{}{}", self.reader_endpoint, url)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let request_url = self.request_url(url);
        let response = self.client.get(&request_url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request_url,
                status,
            });
        }

        Ok(response.text()?)
    }
}
