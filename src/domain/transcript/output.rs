//! Output format, output mode and the command pairing them

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{InvalidFormatError, InvalidModeError};

/// All available output formats
pub const ALL_FORMATS: &[OutputFormat] = &[
    OutputFormat::Plain,
    OutputFormat::Markdown,
    OutputFormat::Csv,
];

/// Serialization format for a transcript payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Markdown,
    Csv,
}

impl OutputFormat {
    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::Markdown => "md",
            Self::Csv => "csv",
        }
    }

    /// Get the MIME type string
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Plain => "text/plain",
            Self::Markdown => "text/markdown",
            Self::Csv => "text/csv",
        }
    }

    /// Short uppercase label used in status messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Plain => "TXT",
            Self::Markdown => "MD",
            Self::Csv => "CSV",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "plain" | "text" => Ok(Self::Plain),
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            _ => Err(InvalidFormatError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Where a finished payload is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    #[default]
    CopyToClipboard,
    DownloadFile,
}

impl OutputMode {
    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CopyToClipboard => "copy",
            Self::DownloadFile => "download",
        }
    }
}

impl FromStr for OutputMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "copy" | "clipboard" => Ok(Self::CopyToClipboard),
            "download" | "file" => Ok(Self::DownloadFile),
            _ => Err(InvalidModeError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single user action: which format to render and where to send it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Command {
    pub format: OutputFormat,
    pub mode: OutputMode,
}

impl Command {
    pub const fn new(format: OutputFormat, mode: OutputMode) -> Self {
        Self { format, mode }
    }

    /// Every format/mode combination, in button order (copy before download)
    pub fn all() -> Vec<Self> {
        ALL_FORMATS
            .iter()
            .flat_map(|&format| {
                [
                    Self::new(format, OutputMode::CopyToClipboard),
                    Self::new(format, OutputMode::DownloadFile),
                ]
            })
            .collect()
    }
}
