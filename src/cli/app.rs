//! Main app runner for a single export

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing::debug;

use crate::application::ports::{Clipboard, ConfigStore, PageSource};
use crate::application::{Destination, ExportInput, ExportTranscriptUseCase};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_notifier, ArboardClipboard, CommandClipboard, FilePageSource, FsDownloadSink,
    HtmlParser, HttpPageSource, StdinPageSource, XdgConfigStore,
};

use super::args::ExportOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the download directory
pub const ENV_OUTPUT_DIR: &str = "TLDV_EXPORT_OUTPUT_DIR";

/// Run one export command
pub async fn run_export(options: ExportOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let page = page_source(&options);
    let fetching = options.input.is_none();

    let [primary, fallback] = CLIPBOARD_ORDER.map(ClipboardBackend::build);
    let use_case = ExportTranscriptUseCase::new(
        HtmlParser::new(),
        primary,
        fallback,
        FsDownloadSink::new(options.output_dir.clone()),
        create_notifier(),
    );

    let input = ExportInput {
        command: options.command,
        page_url: options.url.clone(),
        gate: options.gate.clone(),
        filename_prefix: options.filename_prefix.clone(),
        enable_clipboard_fallback: options.clipboard_fallback,
        enable_notify: options.notify,
    };

    if fetching {
        presenter.start_spinner("Fetching meeting page...");
    }
    let result = use_case.execute(input, page.as_ref()).await;
    presenter.stop_spinner();

    match result {
        Ok(output) => {
            if options.print {
                presenter.output(&output.payload);
            }
            if let Destination::Clipboard {
                used_fallback: true,
            } = output.destination
            {
                presenter.info(&format!(
                    "Copied through the fallback clipboard ({})",
                    CLIPBOARD_ORDER[1].name()
                ));
            }
            presenter.success(&output.status_message);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Clipboard implementations the export can copy through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardBackend {
    Arboard,
    Command,
}

impl ClipboardBackend {
    fn build(self) -> Box<dyn Clipboard> {
        match self {
            Self::Arboard => Box::new(ArboardClipboard::new()),
            Self::Command => Box::new(CommandClipboard::new()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Command => "clipboard command",
        }
    }
}

/// Primary then fallback clipboard.
///
/// X11 selections are served by the owning process, so arboard's copy is gone
/// once this process exits. `wl-copy`/`xclip`/`xsel` fork a server that keeps it.
#[cfg(target_os = "linux")]
const CLIPBOARD_ORDER: [ClipboardBackend; 2] =
    [ClipboardBackend::Command, ClipboardBackend::Arboard];

#[cfg(not(target_os = "linux"))]
const CLIPBOARD_ORDER: [ClipboardBackend; 2] =
    [ClipboardBackend::Arboard, ClipboardBackend::Command];

/// Pick the page source: stdin for "-", a file for any other path, HTTP otherwise
fn page_source(options: &ExportOptions) -> Box<dyn PageSource> {
    match options.input.as_deref() {
        Some(path) if path == Path::new("-") => Box::new(StdinPageSource),
        Some(path) => Box::new(FilePageSource::new(path)),
        None => Box::new(HttpPageSource::new(options.url.clone())),
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            debug!("Ignoring unreadable config file: {}", e);
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        output_dir: env::var(ENV_OUTPUT_DIR).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
