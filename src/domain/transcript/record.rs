//! Transcript record value object

/// One utterance scraped from a transcript paragraph.
///
/// The timestamp is a free-form label copied from the page and may be empty.
/// Records are rebuilt on every extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TranscriptRecord {
    timestamp: String,
    speaker: String,
    text: String,
}

impl TranscriptRecord {
    /// Create a record from its three fields
    pub fn new(
        timestamp: impl Into<String>,
        speaker: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// Timestamp label (empty when the paragraph had no anchor)
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Cleaned speaker name
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Spoken text, fragments joined by a single space
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the record carries a timestamp
    pub fn has_timestamp(&self) -> bool {
        !self.timestamp.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_fields() {
        let record = TranscriptRecord::new("05:05", "Speaker Name", "Hello World");
        assert_eq!(record.timestamp(), "05:05");
        assert_eq!(record.speaker(), "Speaker Name");
        assert_eq!(record.text(), "Hello World");
        assert!(record.has_timestamp());
    }

    #[test]
    fn empty_timestamp() {
        let record = TranscriptRecord::new("", "Alice", "Hi");
        assert!(!record.has_timestamp());
    }
}
