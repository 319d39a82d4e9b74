//! Proceeding detail page scraper
//!
//! The detail page lists a proceeding's attributes as pairs of spans inside
//! `div.wwgrp` containers: a span wrapping a `<label>` for the name, followed by
//! a plain span holding the value.

use crate::model::Fields;
use crate::scrape::document::{element_text, first_child_text, Document};
use crate::{ParseError, ParseResult};
use scraper::ElementRef;

/// Class attribute marking a label/value container
pub const CONTAINER_CLASS: &str = "wwgrp";

enum Token {
    Key(String),
    Value(String),
}

/// Scrapes a proceeding detail page into a label → value mapping
///
/// Labels become keys: the label's leading text up to the first colon, with
/// spaces replaced by underscores and lowercased (`"Docket Number:"` becomes
/// `docket_number`). Values are trimmed and have thousands separators removed.
/// A later duplicate key overwrites an earlier one.
///
/// # Errors
///
/// * `ParseError::MissingElement` - No container on the page, or a label with no text
/// * `ParseError::BrokenAlternation` - Labels and values do not strictly alternate
pub fn parse_proceeding_page(document: &Document) -> ParseResult<Fields> {
    let containers = document.elements_with_attr("div", "class", CONTAINER_CLASS);
    if containers.is_empty() {
        return Err(ParseError::MissingElement(format!(
            "div[class=\"{}\"]",
            CONTAINER_CLASS
        )));
    }

    let mut fields = Fields::new();
    let mut pending_key: Option<String> = None;
    let mut position = 0;

    for container in containers {
        for span in descendants_named(container, "span") {
            match span_token(span)? {
                Token::Key(key) => {
                    if let Some(previous) = pending_key.replace(key) {
                        return Err(ParseError::BrokenAlternation {
                            position,
                            message: format!("label '{}' has no value", previous),
                        });
                    }
                }
                Token::Value(value) => match pending_key.take() {
                    Some(key) => {
                        fields.insert(key, value);
                    }
                    None => {
                        return Err(ParseError::BrokenAlternation {
                            position,
                            message: format!("value '{}' has no label", value),
                        });
                    }
                },
            }
            position += 1;
        }
    }

    if let Some(key) = pending_key {
        return Err(ParseError::BrokenAlternation {
            position,
            message: format!("label '{}' has no value", key),
        });
    }

    tracing::debug!("Scraped {} proceeding attributes", fields.len());
    Ok(fields)
}

fn descendants_named<'a>(
    element: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

fn span_token(span: ElementRef<'_>) -> ParseResult<Token> {
    match descendants_named(span, "label").next() {
        Some(label) => {
            let text = first_child_text(label).unwrap_or_default();
            let key = normalize_label(&text);
            if key.is_empty() {
                return Err(ParseError::MissingElement("label text".to_string()));
            }
            Ok(Token::Key(key))
        }
        None => Ok(Token::Value(element_text(span).trim().replace(',', ""))),
    }
}

/// Turns label text such as `"Date Created:"` into `date_created`
fn normalize_label(text: &str) -> String {
    let name = text.trim().split(':').next().unwrap_or_default().trim();
    name.replace(' ', "_").to_lowercase()
}
