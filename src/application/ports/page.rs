//! Page source port interface

use async_trait::async_trait;
use thiserror::Error;

/// Errors loading page markup
#[derive(Debug, Clone, Error)]
pub enum PageError {
    #[error("Page file not found: {0}")]
    NotFound(String),

    #[error("Failed to read page: {0}")]
    ReadFailed(String),

    #[error("Page request failed: {0}")]
    RequestFailed(String),

    #[error("Page request returned HTTP {0}")]
    HttpStatus(u16),
}

/// Port for obtaining the HTML of a meeting page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Load the full page markup
    async fn load(&self) -> Result<String, PageError>;

    /// Human-readable description of where the page comes from
    fn describe(&self) -> String;
}

/// Blanket implementation for boxed page sources
#[async_trait]
impl PageSource for Box<dyn PageSource> {
    async fn load(&self) -> Result<String, PageError> {
        self.as_ref().load().await
    }

    fn describe(&self) -> String {
        self.as_ref().describe()
    }
}
