//! Application layer - Use cases and port interfaces
//!
//! Contains the extractor, the export use case, and trait definitions
//! for external system interactions.

pub mod export;
pub mod extract;
pub mod ports;

// Re-export use cases
pub use export::{
    Destination, ExportError, ExportInput, ExportOutput, ExportTranscriptUseCase,
};
pub use extract::{clean_speaker, extract};
