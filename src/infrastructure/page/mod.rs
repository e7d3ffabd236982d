//! Page source infrastructure module
//!
//! Meeting pages can be read from a saved HTML file, from stdin, or fetched
//! over HTTP.

mod file;
mod http;

pub use file::{FilePageSource, StdinPageSource};
pub use http::HttpPageSource;
