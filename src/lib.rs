//! tldv-export - copy or download tl;dv meeting transcripts
//!
//! Scrapes the transcript out of a tl;dv meeting page, normalizes it into
//! timestamp/speaker/text records and renders it as plain text, Markdown or
//! CSV for the clipboard or a downloaded file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Transcript records, output formats, the formatter and config
//! - **Application**: The extractor, the export use case and port interfaces
//! - **Infrastructure**: Adapter implementations (scraper, reqwest, clipboard, files)
//! - **CLI**: Command-line interface, argument parsing and presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
