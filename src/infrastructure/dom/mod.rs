//! DOM infrastructure module
//!
//! Provides the HTML-backed document tree used to scrape meeting pages.

mod html;

pub use html::{HtmlDocument, HtmlParser};
