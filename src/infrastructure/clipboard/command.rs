//! Clipboard adapter driving command-line clipboard tools
//!
//! Tries `wl-copy`, `xclip` and `xsel` in order, feeding the text on stdin.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

/// A clipboard tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardTool {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Default tools, most specific first
pub fn default_tools() -> Vec<ClipboardTool> {
    vec![
        ClipboardTool::new("wl-copy", &[]),
        ClipboardTool::new("xclip", &["-selection", "clipboard"]),
        ClipboardTool::new("xsel", &["--clipboard", "--input"]),
    ]
}

/// Clipboard adapter using external tools
pub struct CommandClipboard {
    tools: Vec<ClipboardTool>,
}

impl CommandClipboard {
    /// Create an adapter using the default tool list
    pub fn new() -> Self {
        Self {
            tools: default_tools(),
        }
    }

    /// Create with a custom tool list
    pub fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    async fn run_tool(tool: &ClipboardTool, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&tool.program)
            .args(&tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::ToolNotFound
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "{} exited with status: {}",
                tool.program, status
            )));
        }

        Ok(())
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::ToolNotFound;

        for tool in &self.tools {
            match Self::run_tool(tool, text).await {
                Ok(()) => {
                    debug!("Copied {} chars with {}", text.len(), tool.program);
                    return Ok(());
                }
                Err(ClipboardError::ToolNotFound) => {
                    debug!("{} not installed", tool.program);
                }
                Err(e) => {
                    debug!("{} failed: {}", tool.program, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tool_order() {
        let programs: Vec<String> = default_tools().into_iter().map(|t| t.program).collect();
        assert_eq!(programs, ["wl-copy", "xclip", "xsel"]);
    }

    #[tokio::test]
    async fn missing_tools_report_not_found() {
        let clipboard = CommandClipboard::with_tools(vec![ClipboardTool::new(
            "definitely-not-a-clipboard-tool",
            &[],
        )]);
        let err = clipboard.copy("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::ToolNotFound));
    }

    #[tokio::test]
    async fn empty_tool_list_is_not_found() {
        let clipboard = CommandClipboard::with_tools(Vec::new());
        assert!(matches!(
            clipboard.copy("text").await,
            Err(ClipboardError::ToolNotFound)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn first_working_tool_wins() {
        // `cat` consumes stdin and exits 0, standing in for a real tool.
        let clipboard = CommandClipboard::with_tools(vec![
            ClipboardTool::new("definitely-not-a-clipboard-tool", &[]),
            ClipboardTool::new("cat", &[]),
        ]);
        assert!(clipboard.copy("hello").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_tool_reports_copy_failed() {
        let clipboard = CommandClipboard::with_tools(vec![ClipboardTool::new("false", &[])]);
        assert!(matches!(
            clipboard.copy("hello").await,
            Err(ClipboardError::CopyFailed(_))
        ));
    }
}
