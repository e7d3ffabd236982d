//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard and the
//! command-line clipboard tools. On Linux the tools go first because they
//! keep serving the selection after this process exits.

mod arboard;
mod command;

pub use self::arboard::ArboardClipboard;
pub use command::{default_tools, ClipboardTool, CommandClipboard};
