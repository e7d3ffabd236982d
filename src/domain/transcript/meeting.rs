//! Meeting id and download filename value objects

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::output::OutputFormat;

/// Placeholder used when the page URL carries no meeting id
pub const UNKNOWN_MEETING_ID: &str = "unknown";

/// Default prefix of downloaded file names
pub const DEFAULT_FILENAME_PREFIX: &str = "tldv";

static MEETING_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/meetings/([a-zA-Z0-9]+)").expect("valid meeting path regex"));

/// Identifier of a meeting, taken from its page URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetingId(String);

impl MeetingId {
    /// Parse the id from the first `/meetings/<alphanumeric>` path segment.
    /// Falls back to the `unknown` placeholder.
    pub fn from_url(url: &str) -> Self {
        MEETING_PATH
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_MEETING_ID
    }
}

impl Default for MeetingId {
    fn default() -> Self {
        Self(UNKNOWN_MEETING_ID.to_string())
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `prefix` can start a file name without leaving the output directory
pub fn is_valid_filename_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && !prefix.contains(['/', '\\', '\0'])
        && !prefix.contains("..")
}

/// Build `{prefix}_{meetingId}_meeting_transcript.{ext}`
pub fn download_filename(prefix: &str, meeting_id: &MeetingId, format: OutputFormat) -> String {
    format!(
        "{}_{}_meeting_transcript.{}",
        prefix,
        meeting_id,
        format.extension()
    )
}
