//! Transcript domain module

pub mod formatter;
mod gate;
mod meeting;
mod output;
mod record;

pub use formatter::{csv_escape, format, CSV_HEADER};
pub use gate::{ActivationGate, DEFAULT_HOST_MARKER};
pub use meeting::{
    download_filename, is_valid_filename_prefix, MeetingId, DEFAULT_FILENAME_PREFIX,
    UNKNOWN_MEETING_ID,
};
pub use output::{Command, OutputFormat, OutputMode, ALL_FORMATS};
pub use record::TranscriptRecord;
