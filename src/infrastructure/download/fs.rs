//! Filesystem download sink
//!
//! The payload is written to a temporary file inside the output directory and
//! then renamed to its final name, so a partially written transcript never
//! shows up under the offered filename. The temporary file is removed when
//! anything fails.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{DownloadError, DownloadSink};

/// Saves downloads into a directory
pub struct FsDownloadSink {
    dir: PathBuf,
}

impl FsDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A bare file name: exactly one normal path component
    fn is_plain_filename(filename: &str) -> bool {
        let mut components = Path::new(filename).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }

    fn write_atomic(dir: &Path, target: &Path, payload: &[u8]) -> Result<(), DownloadError> {
        let mut temp =
            NamedTempFile::new_in(dir).map_err(|e| DownloadError::WriteFailed(e.to_string()))?;
        temp.write_all(payload)
            .and_then(|_| temp.flush())
            .map_err(|e| DownloadError::WriteFailed(e.to_string()))?;
        temp.persist(target)
            .map_err(|e| DownloadError::WriteFailed(e.error.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl DownloadSink for FsDownloadSink {
    async fn save(
        &self,
        payload: &str,
        filename: &str,
        mime_type: &str,
    ) -> Result<PathBuf, DownloadError> {
        if !Self::is_plain_filename(filename) {
            return Err(DownloadError::InvalidFilename(filename.to_string()));
        }

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DownloadError::DirectoryUnavailable(format!("{}: {}", self.dir.display(), e)))?;

        let target = self.dir.join(filename);
        let dir = self.dir.clone();
        let path = target.clone();
        let bytes = payload.as_bytes().to_vec();

        tokio::task::spawn_blocking(move || Self::write_atomic(&dir, &path, &bytes))
            .await
            .map_err(|e| DownloadError::WriteFailed(format!("Task join error: {}", e)))??;

        debug!(
            "Saved {} bytes of {} to {}",
            payload.len(),
            mime_type,
            target.display()
        );
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saves_payload_under_filename() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsDownloadSink::new(dir.path());

        let path = sink
            .save("a,b\n", "tldv_x_meeting_transcript.csv", "text/csv")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("tldv_x_meeting_transcript.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
    }

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("2024");
        let sink = FsDownloadSink::new(&nested);

        let path = sink.save("hi", "out.txt", "text/plain").await.unwrap();
        assert!(path.starts_with(&nested));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hi");
    }

    #[tokio::test]
    async fn overwrites_existing_file_and_leaves_no_temporaries() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsDownloadSink::new(dir.path());

        sink.save("old", "t.md", "text/markdown").await.unwrap();
        sink.save("new", "t.md", "text/markdown").await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("t.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn plain_filenames_only() {
        assert!(FsDownloadSink::is_plain_filename("tldv_x_meeting_transcript.txt"));
        assert!(!FsDownloadSink::is_plain_filename("../escaped_x.txt"));
        assert!(!FsDownloadSink::is_plain_filename("sub/x.txt"));
        assert!(!FsDownloadSink::is_plain_filename("/tmp/x.txt"));
        assert!(!FsDownloadSink::is_plain_filename(".."));
        assert!(!FsDownloadSink::is_plain_filename(""));
    }

    #[tokio::test]
    async fn filename_escaping_directory_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");
        let sink = FsDownloadSink::new(&out);

        let err = sink
            .save("x", "../escaped_abc_meeting_transcript.txt", "text/plain")
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::InvalidFilename(_)));
        assert!(!root.path().join("escaped_abc_meeting_transcript.txt").exists());
    }

    #[tokio::test]
    async fn unusable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        let sink = FsDownloadSink::new(&file);
        let err = sink.save("hi", "out.txt", "text/plain").await.unwrap_err();
        assert!(matches!(err, DownloadError::DirectoryUnavailable(_)));
    }
}
