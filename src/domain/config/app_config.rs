//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::transcript::{
    is_valid_filename_prefix, ActivationGate, OutputFormat, OutputMode, DEFAULT_FILENAME_PREFIX,
    DEFAULT_HOST_MARKER,
};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub format: Option<String>,
    pub mode: Option<String>,
    pub output_dir: Option<String>,
    pub filename_prefix: Option<String>,
    pub host_marker: Option<String>,
    pub notify: Option<bool>,
    pub clipboard_fallback: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            format: Some("txt".to_string()),
            mode: Some("copy".to_string()),
            output_dir: None,
            filename_prefix: Some(DEFAULT_FILENAME_PREFIX.to_string()),
            host_marker: Some(DEFAULT_HOST_MARKER.to_string()),
            notify: Some(false),
            clipboard_fallback: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            format: other.format.or(self.format),
            mode: other.mode.or(self.mode),
            output_dir: other.output_dir.or(self.output_dir),
            filename_prefix: other.filename_prefix.or(self.filename_prefix),
            host_marker: other.host_marker.or(self.host_marker),
            notify: other.notify.or(self.notify),
            clipboard_fallback: other.clipboard_fallback.or(self.clipboard_fallback),
        }
    }

    /// Get format as parsed OutputFormat, or default if not set/invalid
    pub fn format_or_default(&self) -> OutputFormat {
        self.format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get mode as parsed OutputMode, or default if not set/invalid
    pub fn mode_or_default(&self) -> OutputMode {
        self.mode
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the download directory, or the platform download dir, or the
    /// current directory
    pub fn output_dir_or_default(&self) -> PathBuf {
        self.output_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get filename prefix, or "tldv" if not set or not a plain name
    pub fn filename_prefix_or_default(&self) -> &str {
        self.filename_prefix
            .as_deref()
            .filter(|s| is_valid_filename_prefix(s))
            .unwrap_or(DEFAULT_FILENAME_PREFIX)
    }

    /// Build the activation gate from the configured host marker
    pub fn activation_gate(&self) -> ActivationGate {
        ActivationGate::new(
            self.host_marker
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_HOST_MARKER),
        )
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get clipboard fallback setting, or true if not set
    pub fn clipboard_fallback_or_default(&self) -> bool {
        self.clipboard_fallback.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.format, Some("txt".to_string()));
        assert_eq!(config.mode, Some("copy".to_string()));
        assert!(config.output_dir.is_none());
        assert_eq!(config.filename_prefix_or_default(), "tldv");
        assert_eq!(config.activation_gate().host_marker(), "tldv.io");
        assert_eq!(config.notify, Some(false));
        assert_eq!(config.clipboard_fallback, Some(true));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.format.is_none());
        assert!(config.mode.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.host_marker.is_none());
        assert!(config.notify.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            format: Some("txt".to_string()),
            mode: Some("copy".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            format: Some("csv".to_string()),
            mode: None,
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.format, Some("csv".to_string()));
        assert_eq!(merged.mode, Some("copy".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            output_dir: Some("/tmp/out".to_string()),
            notify: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.output_dir, Some("/tmp/out".to_string()));
        assert_eq!(merged.notify, Some(true));
    }

    #[test]
    fn format_or_default_parses() {
        let config = AppConfig {
            format: Some("md".to_string()),
            ..Default::default()
        };
        assert_eq!(config.format_or_default(), OutputFormat::Markdown);
    }

    #[test]
    fn format_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            format: Some("pdf".to_string()),
            ..Default::default()
        };
        assert_eq!(config.format_or_default(), OutputFormat::Plain);
    }

    #[test]
    fn mode_or_default_parses() {
        let config = AppConfig {
            mode: Some("download".to_string()),
            ..Default::default()
        };
        assert_eq!(config.mode_or_default(), OutputMode::DownloadFile);
        assert_eq!(AppConfig::empty().mode_or_default(), OutputMode::CopyToClipboard);
    }

    #[test]
    fn output_dir_uses_configured_value() {
        let config = AppConfig {
            output_dir: Some("/srv/transcripts".to_string()),
            ..Default::default()
        };
        assert_eq!(config.output_dir_or_default(), PathBuf::from("/srv/transcripts"));
    }

    #[test]
    fn empty_prefix_and_marker_fall_back() {
        let config = AppConfig {
            filename_prefix: Some(String::new()),
            host_marker: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.filename_prefix_or_default(), "tldv");
        assert_eq!(config.activation_gate().host_marker(), "tldv.io");
    }

    #[test]
    fn prefix_with_path_components_falls_back() {
        for prefix in ["../escaped", "sub/dir", "..", "a\\b"] {
            let config = AppConfig {
                filename_prefix: Some(prefix.to_string()),
                ..Default::default()
            };
            assert_eq!(config.filename_prefix_or_default(), "tldv", "{}", prefix);
        }
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(!config.notify_or_default());
        assert!(config.clipboard_fallback_or_default());
    }
}
