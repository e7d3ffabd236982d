//! Document tree port interface
//!
//! The extractor only needs three capabilities from a page: look an element
//! up by id, list descendants matching a tag/attribute filter in document
//! order, and read an element's trimmed text. Anything that can answer those
//! (a parsed HTML document, a hand-built tree in tests) can be scraped.

/// Tag and attribute filter for descendant queries.
///
/// `None` parts match anything; the attribute filter requires an exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementQuery<'q> {
    pub tag: Option<&'q str>,
    pub attribute: Option<(&'q str, &'q str)>,
}

impl<'q> ElementQuery<'q> {
    /// Match any element with the given tag name
    pub const fn tag(tag: &'q str) -> Self {
        Self {
            tag: Some(tag),
            attribute: None,
        }
    }

    /// Match any element carrying `name="value"`
    pub const fn attribute(name: &'q str, value: &'q str) -> Self {
        Self {
            tag: None,
            attribute: Some((name, value)),
        }
    }

    /// Add an attribute requirement to this query
    pub const fn with_attribute(self, name: &'q str, value: &'q str) -> Self {
        Self {
            tag: self.tag,
            attribute: Some((name, value)),
        }
    }

    /// Check an element, given its tag name and an attribute lookup
    pub fn matches<'e>(&self, tag: &str, attr: impl Fn(&str) -> Option<&'e str>) -> bool {
        let tag_ok = self.tag.map_or(true, |t| t.eq_ignore_ascii_case(tag));
        let attr_ok = self
            .attribute
            .map_or(true, |(name, value)| attr(name) == Some(value));
        tag_ok && attr_ok
    }

    /// Render as a CSS selector, e.g. `span[data-speaker="false"]`
    pub fn to_css(&self) -> String {
        let mut css = self.tag.unwrap_or("*").to_string();
        if let Some((name, value)) = self.attribute {
            css.push_str(&format!("[{}=\"{}\"]", name, value.replace('"', "\\\"")));
        }
        css
    }
}

/// Port for read-only DOM access
pub trait DocumentTree {
    /// Lightweight handle to an element of this tree
    type Element<'a>: Copy
    where
        Self: 'a;

    /// Find the element with `id` attribute equal to `id`
    fn find_by_id(&self, id: &str) -> Option<Self::Element<'_>>;

    /// All descendants of `scope` matching `query`, in document order.
    /// `scope` itself is never included.
    fn find_all_descendants<'a>(
        &'a self,
        scope: Self::Element<'a>,
        query: &ElementQuery<'_>,
    ) -> Vec<Self::Element<'a>>;

    /// Rendered text content of an element, trimmed
    fn text_of(&self, element: Self::Element<'_>) -> String;

    /// First descendant of `scope` matching `query`
    fn find_first_descendant<'a>(
        &'a self,
        scope: Self::Element<'a>,
        query: &ElementQuery<'_>,
    ) -> Option<Self::Element<'a>> {
        self.find_all_descendants(scope, query).into_iter().next()
    }
}

/// Port turning raw page markup into a queryable tree
pub trait DocumentParser: Send + Sync {
    type Document: DocumentTree;

    /// Parse a full HTML document. Parsing is lenient and never fails.
    fn parse(&self, html: &str) -> Self::Document;
}
