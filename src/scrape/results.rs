//! Search results page scraper
//!
//! The listing page is scraped by position. Every path, column index and text
//! marker below is a contract with the live page layout: when the site changes,
//! these constants are what has to change with it.

use crate::model::{Fields, RawResults};
use crate::query::{ConstraintKey, ConstraintStore};
use crate::scrape::document::{child_element_at, element_text, Document};
use crate::{FormatError, ParseError, Result};
use scraper::ElementRef;

/// Span holding the "first - last of total" summary banner
/// (XPath `//*[@id='yui-main']/div/div[2]/table/tbody/tr[2]/td/span[1]`)
pub const BANNER_PATH: &str = "#yui-main > div > div:nth-of-type(2) > table > tbody > tr:nth-of-type(2) > td > span:nth-of-type(1)";

/// Body of the results table, one `tr` per proceeding
/// (XPath `//*[@id='yui-main']/div/div[2]/table/tbody/tr[2]/td/table/tbody`)
pub const RESULTS_BODY_PATH: &str = "#yui-main > div > div:nth-of-type(2) > table > tbody > tr:nth-of-type(2) > td > table > tbody";

/// Visible text of the pagination link pointing at the final page
pub const LAST_LINK_TEXT: &str = "Last";

/// Banner text from this marker onwards is ignored
pub const BANNER_TERMINATOR: &str = "Modify Search";

// Column positions index a row's child nodes, whitespace text nodes included.
pub const DOCKET_COLUMN: usize = 0;
pub const BUREAU_COLUMN: usize = 2;
pub const SUBJECT_COLUMN: usize = 4;

/// Tokens allowed before the "first - last of total" run
const BANNER_MAX_LABEL_TOKENS: usize = 1;

const PAGE_NUMBER_MARKER: &str = "pageNumber=";
const DOCKET_MARKER: &str = "name=";

/// Scrapes a results listing page
///
/// `constraints` are the ones the page was requested with; `fcc_url` is the URL
/// it was fetched from. When the page has no "Last" link the listing is taken
/// to be a single page and `total_pages` equals `current_page`.
///
/// # Errors
///
/// * `EcfsError::Format` - `page_number` unset, or a count that is not an integer
/// * `EcfsError::Parse` - The banner, table or a row column is missing or malformed,
///   or the scraped counts contradict each other
pub fn parse_results_page(
    document: &Document,
    constraints: &ConstraintStore,
    fcc_url: &str,
) -> Result<RawResults> {
    let current_page = current_page(constraints)?;

    let total_pages = match document.link_with_text(LAST_LINK_TEXT) {
        Some(link) => total_pages_from_link(link)?,
        None => {
            tracing::debug!("No '{}' link, treating as a single page", LAST_LINK_TEXT);
            current_page
        }
    };

    let banner = document.select_path(BANNER_PATH)?;
    let (first_result, last_result, total_results) = parse_banner(&element_text(banner))?;

    let body = document.select_path(RESULTS_BODY_PATH)?;
    let results = body
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|row| row.value().name() == "tr")
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Scraped page {}/{} with {} rows (results {}-{} of {})",
        current_page,
        total_pages,
        results.len(),
        first_result,
        last_result,
        total_results
    );

    let raw = RawResults {
        constraints: constraints.clone(),
        fcc_url: fcc_url.to_string(),
        current_page,
        total_pages,
        first_result,
        last_result,
        total_results,
        results,
    };
    check_counts(&raw)?;

    Ok(raw)
}

fn current_page(constraints: &ConstraintStore) -> Result<u32> {
    let raw = constraints
        .value(ConstraintKey::PageNumber)
        .ok_or(FormatError::MissingPageNumber)?;
    Ok(parse_count("current_page", raw)?)
}

fn total_pages_from_link(link: ElementRef<'_>) -> Result<u32> {
    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| ParseError::MissingElement("href on 'Last' link".to_string()))?;

    let (_, tail) = href.split_once(PAGE_NUMBER_MARKER).ok_or_else(|| {
        ParseError::UnexpectedLayout(format!("'Last' link without page number: {}", href))
    })?;
    let value = tail.split('&').next().unwrap_or_default();

    Ok(parse_count("total_pages", value)?)
}

/// Parses `"<first> - <last> of <total> ... Modify Search ..."`
///
/// The run either opens the banner or follows a single leading label
/// ("Results 1 - 25 of 137"). Anything else is an unexpected layout.
fn parse_banner(text: &str) -> Result<(u32, u32, u32)> {
    let summary = text.trim().split(BANNER_TERMINATOR).next().unwrap_or_default();
    let tokens: Vec<&str> = summary.split_whitespace().collect();

    let start = (0..=BANNER_MAX_LABEL_TOKENS)
        .find(|&start| {
            tokens
                .get(start..start + 5)
                .is_some_and(|window| window[1] == "-" && window[3] == "of")
        })
        .ok_or_else(|| {
            ParseError::UnexpectedLayout(format!("results banner '{}'", summary.trim()))
        })?;

    Ok((
        parse_count("first_result", tokens[start])?,
        parse_count("last_result", tokens[start + 2])?,
        parse_count("total_results", tokens[start + 4])?,
    ))
}

fn parse_row(index: usize, row: ElementRef<'_>) -> Result<Fields> {
    let docket_cell = column(row, index, DOCKET_COLUMN)?;
    let href = docket_cell
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
        .find_map(|link| link.value().attr("href"))
        .ok_or_else(|| {
            ParseError::MissingElement(format!("docket link in result row {}", index))
        })?;
    let (_, docket_number) = href.split_once(DOCKET_MARKER).ok_or_else(|| {
        ParseError::UnexpectedLayout(format!(
            "docket link without '{}' in result row {}: {}",
            DOCKET_MARKER, index, href
        ))
    })?;

    let bureau = element_text(column(row, index, BUREAU_COLUMN)?);
    let subject = element_text(column(row, index, SUBJECT_COLUMN)?);

    let mut fields = Fields::new();
    fields.insert(
        "docket_number".to_string(),
        docket_number.trim_end().to_string(),
    );
    fields.insert("bureau".to_string(), bureau.trim().to_string());
    fields.insert("subject".to_string(), subject.trim().to_string());
    Ok(fields)
}

fn column(row: ElementRef<'_>, row_index: usize, column: usize) -> Result<ElementRef<'_>> {
    child_element_at(row, column).ok_or_else(|| {
        ParseError::MissingElement(format!("column {} in result row {}", column, row_index))
            .into()
    })
}

fn parse_count(field: &'static str, raw: &str) -> std::result::Result<u32, FormatError> {
    raw.replace(',', "")
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

fn check_counts(raw: &RawResults) -> Result<()> {
    if raw.first_result > raw.last_result || raw.last_result > raw.total_results {
        return Err(ParseError::InconsistentCounts(format!(
            "results {} - {} of {}",
            raw.first_result, raw.last_result, raw.total_results
        ))
        .into());
    }

    if raw.current_page > raw.total_pages {
        return Err(ParseError::InconsistentCounts(format!(
            "page {} of {}",
            raw.current_page, raw.total_pages
        ))
        .into());
    }

    Ok(())
}
