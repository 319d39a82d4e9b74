//! Parsed HTML page with the lookups the scrapers rely on
//!
//! Every structural lookup either returns a typed element or a `ParseError`
//! naming what was missing, so a layout change on the site fails at the first
//! unmet assumption instead of somewhere deeper in a traversal.

use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html, Node, Selector};

/// A fetched page, parsed and ready for scraping
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML body
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Returns every `tag` element whose `attr` attribute equals `value` exactly
    ///
    /// This is attribute equality, not class-list membership:
    /// `class="wwgrp other"` does not match `("div", "class", "wwgrp")`.
    pub fn elements_with_attr(&self, tag: &str, attr: &str, value: &str) -> Vec<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| {
                element.value().name() == tag && element.value().attr(attr) == Some(value)
            })
            .collect()
    }

    /// Returns the first link whose visible text, trimmed, equals `text`
    pub fn link_with_text(&self, text: &str) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "a")
            .find(|element| element_text(*element).trim() == text)
    }

    /// Returns the first element matching a structural CSS path
    pub fn select_path(&self, path: &str) -> ParseResult<ElementRef<'_>> {
        let selector =
            Selector::parse(path).map_err(|_| ParseError::InvalidSelector(path.to_string()))?;

        self.html
            .select(&selector)
            .next()
            .ok_or_else(|| ParseError::MissingElement(path.to_string()))
    }
}

/// Concatenates all text beneath an element
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of an element's first child node
///
/// A text child is returned as is; an element child yields all of its text.
pub(crate) fn first_child_text(element: ElementRef<'_>) -> Option<String> {
    let node = element.children().next()?;
    match node.value() {
        Node::Text(text) => Some((**text).to_string()),
        _ => ElementRef::wrap(node).map(element_text),
    }
}

/// Returns the `index`-th child node of `element` if it is an element
///
/// Text nodes count towards the index.
pub(crate) fn child_element_at(element: ElementRef<'_>, index: usize) -> Option<ElementRef<'_>> {
    element.children().nth(index).and_then(ElementRef::wrap)
}
