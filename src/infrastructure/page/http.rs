//! HTTP page source using reqwest

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{PageError, PageSource};

/// User agent sent with page requests
const USER_AGENT: &str = concat!("tldv-export/", env!("CARGO_PKG_VERSION"));

/// Fetches the meeting page over HTTP(S)
pub struct HttpPageSource {
    url: String,
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Create a page source for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn load(&self) -> Result<String, PageError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| PageError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PageError::ReadFailed(e.to_string()))?;

        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
