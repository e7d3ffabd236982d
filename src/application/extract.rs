//! Transcript extractor
//!
//! Walks the transcript container of a meeting page and turns every
//! qualifying paragraph into a [`TranscriptRecord`]. Elements are matched by
//! their `data-speaker` marker rather than by class names, so styling changes
//! on the host page do not break extraction.

use tracing::debug;

use crate::domain::transcript::TranscriptRecord;

use super::ports::{DocumentTree, ElementQuery};

/// Id of the element holding every transcript paragraph
pub const CONTAINER_ID: &str = "transcript-container";

/// One paragraph per utterance
pub const PARAGRAPH: ElementQuery<'static> = ElementQuery::tag("p");

/// Element holding the speaker name and optional timestamp link
pub const SPEAKER_MARKER: ElementQuery<'static> = ElementQuery::attribute("data-speaker", "true");

/// Element holding a piece of spoken text
pub const TEXT_FRAGMENT: ElementQuery<'static> =
    ElementQuery::tag("span").with_attribute("data-speaker", "false");

/// Timestamp link nested in the speaker marker
pub const TIMESTAMP_LINK: ElementQuery<'static> = ElementQuery::tag("a");

/// Extract transcript records from a document.
///
/// Returns `None` when the page has no transcript container. Paragraphs
/// without a speaker marker or without any text fragment are skipped, so an
/// existing container may still yield an empty list.
pub fn extract<D: DocumentTree>(root: &D) -> Option<Vec<TranscriptRecord>> {
    let container = root.find_by_id(CONTAINER_ID)?;

    let paragraphs = root.find_all_descendants(container, &PARAGRAPH);
    let mut records = Vec::with_capacity(paragraphs.len());

    for paragraph in paragraphs {
        let Some(marker) = root.find_first_descendant(paragraph, &SPEAKER_MARKER) else {
            continue;
        };

        let fragments = root.find_all_descendants(paragraph, &TEXT_FRAGMENT);
        if fragments.is_empty() {
            continue;
        }

        let timestamp = root
            .find_first_descendant(marker, &TIMESTAMP_LINK)
            .map(|link| root.text_of(link))
            .unwrap_or_default();

        let speaker = clean_speaker(&root.text_of(marker), &timestamp);

        let text = fragments
            .into_iter()
            .map(|fragment| root.text_of(fragment))
            .collect::<Vec<_>>()
            .join(" ");

        records.push(TranscriptRecord::new(timestamp, speaker, text));
    }

    debug!("Extracted {} transcript records", records.len());
    Some(records)
}

/// Derive the speaker name from the marker's full text.
///
/// The first occurrence of `timestamp` is removed wherever it sits, then any
/// leading or trailing run of colons and whitespace is stripped.
pub fn clean_speaker(full_text: &str, timestamp: &str) -> String {
    let full_text = full_text.trim();
    let speaker = if timestamp.is_empty() {
        full_text.to_string()
    } else {
        full_text.replacen(timestamp, "", 1).trim().to_string()
    };
    strip_separators(&speaker).to_string()
}

fn strip_separators(s: &str) -> &str {
    s.trim_matches(|c: char| c == ':' || c == '\u{feff}' || c.is_whitespace())
}
