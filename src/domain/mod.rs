//! Domain layer - Core business logic
//!
//! Contains transcript value objects, the formatter, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod transcript;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use transcript::{
    ActivationGate, Command, MeetingId, OutputFormat, OutputMode, TranscriptRecord,
};
