//! File download port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Download errors
#[derive(Debug, Clone, Error)]
pub enum DownloadError {
    #[error("Output directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(String),

    #[error("Refusing to write outside the output directory: {0}")]
    InvalidFilename(String),
}

/// Port for saving a finished payload as a file
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Save `payload` under `filename`.
    ///
    /// # Arguments
    /// * `payload` - File contents
    /// * `filename` - Name offered to the user
    /// * `mime_type` - Content type of the payload
    ///
    /// # Returns
    /// The final location of the file
    async fn save(
        &self,
        payload: &str,
        filename: &str,
        mime_type: &str,
    ) -> Result<PathBuf, DownloadError>;
}

/// Blanket implementation for boxed download sinks
#[async_trait]
impl DownloadSink for Box<dyn DownloadSink> {
    async fn save(
        &self,
        payload: &str,
        filename: &str,
        mime_type: &str,
    ) -> Result<PathBuf, DownloadError> {
        self.as_ref().save(payload, filename, mime_type).await
    }
}
