//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod dom;
pub mod download;
pub mod notifier;
pub mod page;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use dom::{DocumentParser, DocumentTree, ElementQuery};
pub use download::{DownloadError, DownloadSink};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use page::{PageError, PageSource};
