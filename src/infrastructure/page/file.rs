//! Local page sources

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::application::ports::{PageError, PageSource};

/// Reads a saved HTML page from disk
pub struct FilePageSource {
    path: PathBuf,
}

impl FilePageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PageSource for FilePageSource {
    async fn load(&self) -> Result<String, PageError> {
        fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PageError::NotFound(self.path.display().to_string())
            } else {
                PageError::ReadFailed(format!("{}: {}", self.path.display(), e))
            }
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads the page markup from standard input
#[derive(Debug, Default)]
pub struct StdinPageSource;

#[async_trait]
impl PageSource for StdinPageSource {
    async fn load(&self) -> Result<String, PageError> {
        let mut html = String::new();
        tokio::io::stdin()
            .read_to_string(&mut html)
            .await
            .map_err(|e| PageError::ReadFailed(e.to_string()))?;
        Ok(html)
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}
