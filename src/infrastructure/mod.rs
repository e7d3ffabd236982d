//! Infrastructure layer - Adapter implementations
//!
//! Concrete implementations of the port interfaces: HTML parsing with
//! scraper, page loading over HTTP or from disk, clipboard, downloads,
//! desktop notifications and the TOML config file.

pub mod clipboard;
pub mod config;
pub mod dom;
pub mod download;
pub mod notification;
pub mod page;

// Re-export adapters
pub use clipboard::{ArboardClipboard, CommandClipboard};
pub use config::XdgConfigStore;
pub use dom::{HtmlDocument, HtmlParser};
pub use download::FsDownloadSink;
pub use notification::{create_notifier, NotifyRustNotifier};
pub use page::{FilePageSource, HttpPageSource, StdinPageSource};
