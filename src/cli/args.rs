//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::transcript::{ActivationGate, Command, OutputFormat, OutputMode};

/// tldv-export - copy or download tl;dv meeting transcripts
#[derive(Parser, Debug)]
#[command(name = "tldv-export")]
#[command(version)]
#[command(about = "Export tl;dv meeting transcripts as text, Markdown or CSV")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Meeting page address (e.g. https://tldv.io/app/meetings/abc123)
    #[arg(short = 'u', long, value_name = "URL", required = true)]
    pub url: Option<String>,

    /// Read the page HTML from a file instead of fetching the URL ("-" for stdin)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Where the transcript goes
    #[arg(short = 'm', long, value_name = "MODE", conflicts_with_all = ["copy", "download"])]
    pub mode: Option<ModeArg>,

    /// Copy the transcript to the clipboard (same as --mode copy)
    #[arg(short = 'c', long, conflicts_with = "download")]
    pub copy: bool,

    /// Save the transcript to a file (same as --mode download)
    #[arg(short = 'o', long)]
    pub download: bool,

    /// Directory downloaded transcripts are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also print the formatted transcript to stdout
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Show a desktop notification with the result
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Mode selected on the command line, if any
    pub fn selected_mode(&self) -> Option<OutputMode> {
        if self.copy {
            Some(OutputMode::CopyToClipboard)
        } else if self.download {
            Some(OutputMode::DownloadFile)
        } else {
            self.mode.map(OutputMode::from)
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    #[value(aliases = ["plain", "text"])]
    Txt,
    #[value(alias = "markdown")]
    Md,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Txt => OutputFormat::Plain,
            FormatArg::Md => OutputFormat::Markdown,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Mode argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    #[value(alias = "clipboard")]
    Copy,
    #[value(alias = "file")]
    Download,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Copy => OutputMode::CopyToClipboard,
            ModeArg::Download => OutputMode::DownloadFile,
        }
    }
}

/// Resolved options for one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub url: String,
    pub input: Option<PathBuf>,
    pub command: Command,
    pub output_dir: PathBuf,
    pub filename_prefix: String,
    pub gate: ActivationGate,
    pub print: bool,
    pub notify: bool,
    pub clipboard_fallback: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "format",
    "mode",
    "output_dir",
    "filename_prefix",
    "host_marker",
    "notify",
    "clipboard_fallback",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const URL: &str = "https://tldv.io/app/meetings/abc123";

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["tldv-export", "--url", URL]);
        assert_eq!(cli.url.as_deref(), Some(URL));
        assert!(cli.input.is_none());
        assert!(cli.format.is_none());
        assert!(cli.selected_mode().is_none());
        assert!(!cli.print);
        assert!(!cli.notify);
        assert!(!cli.verbose);
    }

    #[test]
    fn url_is_required_without_subcommand() {
        assert!(Cli::try_parse_from(["tldv-export"]).is_err());
    }

    #[test]
    fn config_subcommand_does_not_need_url() {
        let cli = Cli::parse_from(["tldv-export", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        ));
    }

    #[test]
    fn cli_parses_format_aliases() {
        for (arg, expected) in [
            ("txt", FormatArg::Txt),
            ("plain", FormatArg::Txt),
            ("markdown", FormatArg::Md),
            ("csv", FormatArg::Csv),
        ] {
            let cli = Cli::parse_from(["tldv-export", "-u", URL, "-f", arg]);
            assert_eq!(cli.format, Some(expected));
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["tldv-export", "-u", URL, "-f", "pdf"]).is_err());
    }

    #[test]
    fn mode_shortcuts() {
        let cli = Cli::parse_from(["tldv-export", "-u", URL, "-o"]);
        assert_eq!(cli.selected_mode(), Some(OutputMode::DownloadFile));

        let cli = Cli::parse_from(["tldv-export", "-u", URL, "-c"]);
        assert_eq!(cli.selected_mode(), Some(OutputMode::CopyToClipboard));

        let cli = Cli::parse_from(["tldv-export", "-u", URL, "--mode", "file"]);
        assert_eq!(cli.selected_mode(), Some(OutputMode::DownloadFile));
    }

    #[test]
    fn copy_and_download_conflict() {
        assert!(Cli::try_parse_from(["tldv-export", "-u", URL, "-c", "-o"]).is_err());
        assert!(Cli::try_parse_from(["tldv-export", "-u", URL, "-m", "copy", "-o"]).is_err());
    }

    #[test]
    fn cli_parses_input_and_output_dir() {
        let cli = Cli::parse_from([
            "tldv-export",
            "-u",
            URL,
            "-i",
            "page.html",
            "--output-dir",
            "/tmp/out",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("page.html")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["tldv-export", "config", "set", "format", "csv"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "format");
            assert_eq!(value, "csv");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn format_arg_converts_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Txt), OutputFormat::Plain);
        assert_eq!(OutputFormat::from(FormatArg::Md), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from(FormatArg::Csv), OutputFormat::Csv);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("format"));
        assert!(is_valid_config_key("host_marker"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
