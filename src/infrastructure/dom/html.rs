//! HTML document adapter using scraper

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::application::ports::{DocumentParser, DocumentTree, ElementQuery};

/// Parsed HTML page exposing the document tree port
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document (lenient, never fails)
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl DocumentTree for HtmlDocument {
    type Element<'a> = ElementRef<'a>;

    fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
    }

    fn find_all_descendants<'a>(
        &'a self,
        scope: ElementRef<'a>,
        query: &ElementQuery<'_>,
    ) -> Vec<ElementRef<'a>> {
        let css = query.to_css();
        let found = match Selector::parse(&css) {
            Ok(selector) => scope.select(&selector).filter(|el| *el != scope).collect(),
            Err(e) => {
                // Unusual attribute values can defeat the CSS parser; match by hand.
                debug!("Selector {} rejected ({:?}), scanning descendants", css, e);
                scope
                    .descendants()
                    .skip(1)
                    .filter_map(ElementRef::wrap)
                    .filter(|el| query.matches(el.value().name(), |name| el.value().attr(name)))
                    .collect()
            }
        };
        found
    }

    fn text_of(&self, element: ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }
}

/// Parser producing [`HtmlDocument`] trees
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for HtmlParser {
    type Document = HtmlDocument;

    fn parse(&self, html: &str) -> HtmlDocument {
        HtmlDocument::parse(html)
    }
}
