//! tldv-export CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tldv_export::cli::{
    app::{load_merged_config, run_export, EXIT_ERROR},
    args::{Cli, Commands, ExportOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use tldv_export::domain::config::AppConfig;
use tldv_export::domain::transcript::{Command, OutputFormat};
use tldv_export::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // clap only lets a missing --url through when a subcommand is present
    let Some(url) = cli.url.clone() else {
        presenter.error("Missing --url");
        return ExitCode::from(tldv_export::cli::EXIT_USAGE_ERROR);
    };

    let cli_config = AppConfig {
        format: cli
            .format
            .map(|f| OutputFormat::from(f).extension().to_string()),
        mode: cli.selected_mode().map(|m| m.as_str().to_string()),
        output_dir: cli
            .output_dir
            .as_ref()
            .map(|dir| dir.to_string_lossy().into_owned()),
        notify: if cli.notify { Some(true) } else { None },
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    let options = ExportOptions {
        url,
        input: cli.input,
        command: Command::new(config.format_or_default(), config.mode_or_default()),
        output_dir: config.output_dir_or_default(),
        filename_prefix: config.filename_prefix_or_default().to_string(),
        gate: config.activation_gate(),
        print: cli.print,
        notify: config.notify_or_default(),
        clipboard_fallback: config.clipboard_fallback_or_default(),
    };

    run_export(options).await
}

/// Log to stderr; `--verbose` forces debug, otherwise RUST_LOG or warn
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
