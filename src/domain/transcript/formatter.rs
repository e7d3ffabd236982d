//! Record-to-text formatter
//!
//! Rendering is a pure function of the records and the requested format.
//! Where the payload goes afterwards is the caller's business.

use super::output::OutputFormat;
use super::record::TranscriptRecord;

/// First line of every CSV payload
pub const CSV_HEADER: &str = "Timestamp,Speaker,Transcript";

/// Render records into a single payload string.
///
/// An empty record list renders as an empty string, or the bare header line
/// (with its newline) for CSV.
pub fn format(records: &[TranscriptRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => records
            .iter()
            .map(plain_line)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Markdown => records
            .iter()
            .map(markdown_line)
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Csv => {
            let rows = records.iter().map(csv_line).collect::<Vec<_>>().join("\n");
            format!("{}\n{}", CSV_HEADER, rows)
        }
    }
}

/// Quote a CSV field, doubling any embedded double quote
pub fn csv_escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn plain_line(record: &TranscriptRecord) -> String {
    let time_part = if record.has_timestamp() {
        format!("{} ", record.timestamp())
    } else {
        String::new()
    };
    format!("{}{} :: {}", time_part, record.speaker(), record.text())
}

fn markdown_line(record: &TranscriptRecord) -> String {
    let time_part = if record.has_timestamp() {
        format!("**{}** ", record.timestamp())
    } else {
        String::new()
    };
    format!("{}*{}* :: {}", time_part, record.speaker(), record.text())
}

fn csv_line(record: &TranscriptRecord) -> String {
    format!(
        "{},{},{}",
        csv_escape(record.timestamp()),
        csv_escape(record.speaker()),
        csv_escape(record.text())
    )
}
