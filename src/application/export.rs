//! Export transcript use case

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::transcript::{
    download_filename, formatter, ActivationGate, Command, MeetingId, OutputMode,
    TranscriptRecord, DEFAULT_FILENAME_PREFIX,
};

use super::extract::extract;
use super::ports::{
    Clipboard, ClipboardError, DocumentParser, DownloadError, DownloadSink, NotificationIcon,
    Notifier, PageError, PageSource,
};

/// Title used for desktop notifications
const NOTIFY_TITLE: &str = "tl;dv export";

/// Errors from the export use case
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("This tool works only on tl;dv (page address must contain \"{host_marker}\")")]
    WrongHost { host_marker: String },

    #[error("No transcript data found")]
    ContainerNotFound,

    #[error("No transcript data found")]
    EmptyResult,

    #[error("Could not load page: {0}")]
    Page(#[from] PageError),

    #[error("Clipboard copy failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),
}

impl ExportError {
    /// Whether the page simply had no transcript to export
    pub fn is_no_transcript(&self) -> bool {
        matches!(self, Self::ContainerNotFound | Self::EmptyResult)
    }
}

/// Input parameters for one export
#[derive(Debug, Clone)]
pub struct ExportInput {
    /// Format and destination requested by the user
    pub command: Command,
    /// Address of the meeting page
    pub page_url: String,
    /// Host check performed before the page is touched
    pub gate: ActivationGate,
    /// Prefix for downloaded file names
    pub filename_prefix: String,
    /// Whether a failed clipboard copy gets a second attempt on the fallback
    pub enable_clipboard_fallback: bool,
    /// Whether to show notifications
    pub enable_notify: bool,
}

impl Default for ExportInput {
    fn default() -> Self {
        Self {
            command: Command::default(),
            page_url: String::new(),
            gate: ActivationGate::default(),
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            enable_clipboard_fallback: true,
            enable_notify: false,
        }
    }
}

/// Where the payload ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Copied to the clipboard, possibly through the fallback backend
    Clipboard { used_fallback: bool },
    /// Written to a file
    File(PathBuf),
}

/// Output from the export use case
#[derive(Debug, Clone)]
pub struct ExportOutput {
    /// Number of transcript records exported
    pub record_count: usize,
    /// The formatted payload
    pub payload: String,
    /// Where the payload was sent
    pub destination: Destination,
    /// User-facing status line
    pub status_message: String,
}

/// Scrape, format and deliver a meeting transcript
pub struct ExportTranscriptUseCase<P, C, F, D, N>
where
    P: DocumentParser,
    C: Clipboard,
    F: Clipboard,
    D: DownloadSink,
    N: Notifier,
{
    parser: P,
    clipboard: C,
    fallback_clipboard: F,
    downloads: D,
    notifier: N,
}

impl<P, C, F, D, N> ExportTranscriptUseCase<P, C, F, D, N>
where
    P: DocumentParser,
    C: Clipboard,
    F: Clipboard,
    D: DownloadSink,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(parser: P, clipboard: C, fallback_clipboard: F, downloads: D, notifier: N) -> Self {
        Self {
            parser,
            clipboard,
            fallback_clipboard,
            downloads,
            notifier,
        }
    }

    /// Run one full extract, format and deliver cycle for a command
    pub async fn execute<S>(
        &self,
        input: ExportInput,
        page: &S,
    ) -> Result<ExportOutput, ExportError>
    where
        S: PageSource + ?Sized,
    {
        let result = self.run(&input, page).await;

        if input.enable_notify {
            let (message, icon) = match &result {
                Ok(output) => (output.status_message.clone(), NotificationIcon::Success),
                Err(e) if e.is_no_transcript() => (e.to_string(), NotificationIcon::Info),
                Err(e) => (e.to_string(), NotificationIcon::Error),
            };
            if let Err(e) = self.notifier.notify(NOTIFY_TITLE, &message, icon).await {
                warn!("Notification failed: {}", e);
            }
        }

        result
    }

    async fn run<S>(&self, input: &ExportInput, page: &S) -> Result<ExportOutput, ExportError>
    where
        S: PageSource + ?Sized,
    {
        if !input.gate.allows(&input.page_url) {
            return Err(ExportError::WrongHost {
                host_marker: input.gate.host_marker().to_string(),
            });
        }

        debug!("Loading page from {}", page.describe());
        let html = page.load().await?;

        let records = self.scrape(&html)?;
        let format = input.command.format;
        let payload = formatter::format(&records, format);
        info!(
            "Formatted {} records as {} ({} bytes)",
            records.len(),
            format,
            payload.len()
        );

        let (destination, status_message) = match input.command.mode {
            OutputMode::CopyToClipboard => {
                let used_fallback = self
                    .copy_with_fallback(&payload, input.enable_clipboard_fallback)
                    .await?;
                (
                    Destination::Clipboard { used_fallback },
                    format!("{} copied to clipboard!", format.label()),
                )
            }
            OutputMode::DownloadFile => {
                let meeting_id = MeetingId::from_url(&input.page_url);
                let filename = download_filename(&input.filename_prefix, &meeting_id, format);
                let path = self
                    .downloads
                    .save(&payload, &filename, format.mime_type())
                    .await?;
                let message = format!("{} saved to {}", format.label(), path.display());
                (Destination::File(path), message)
            }
        };

        Ok(ExportOutput {
            record_count: records.len(),
            payload,
            destination,
            status_message,
        })
    }

    /// Parse and extract without holding the document across an await
    fn scrape(&self, html: &str) -> Result<Vec<TranscriptRecord>, ExportError> {
        let document = self.parser.parse(html);
        let records = extract(&document).ok_or(ExportError::ContainerNotFound)?;
        if records.is_empty() {
            return Err(ExportError::EmptyResult);
        }
        Ok(records)
    }

    /// Copy through the primary clipboard, then once through the fallback.
    /// Returns whether the fallback was used.
    async fn copy_with_fallback(
        &self,
        payload: &str,
        enable_fallback: bool,
    ) -> Result<bool, ClipboardError> {
        match self.clipboard.copy(payload).await {
            Ok(()) => Ok(false),
            Err(e) if enable_fallback => {
                warn!("Primary clipboard failed ({}), trying fallback", e);
                self.fallback_clipboard.copy(payload).await?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }
}
