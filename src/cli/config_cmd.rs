//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::transcript::{is_valid_filename_prefix, OutputFormat, OutputMode};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate `value` for `key` and store it in its normalized form
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "format" => {
            let format: OutputFormat = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.format = Some(format.extension().to_string());
        }
        "mode" => {
            let mode: OutputMode = value.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.mode = Some(mode.as_str().to_string());
        }
        "output_dir" => config.output_dir = Some(non_empty(value).map_err(invalid)?),
        "filename_prefix" => {
            let prefix = non_empty(value).map_err(invalid)?;
            if !is_valid_filename_prefix(&prefix) {
                return Err(invalid(
                    "Prefix must not contain path separators or '..'".to_string(),
                ));
            }
            config.filename_prefix = Some(prefix);
        }
        "host_marker" => config.host_marker = Some(non_empty(value).map_err(invalid)?),
        "notify" => config.notify = Some(parse_bool(value).map_err(invalid)?),
        "clipboard_fallback" => {
            config.clipboard_fallback = Some(parse_bool(value).map_err(invalid)?)
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "format" => config.format.clone(),
        "mode" => config.mode.clone(),
        "output_dir" => config.output_dir.clone(),
        "filename_prefix" => config.filename_prefix.clone(),
        "host_marker" => config.host_marker.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        "clipboard_fallback" => config.clipboard_fallback.map(|b| b.to_string()),
        _ => None,
    }
}

fn non_empty(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err("Value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err("Value must be 'true' or 'false'".to_string()),
    }
}
