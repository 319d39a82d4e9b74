//! Markdown rendering of query output
//!
//! This module turns proceedings and result pages into human-readable
//! markdown, including any warnings the query raised.

use crate::model::{Fields, RawResults, ResultSet};
use crate::query::{ConstraintStore, QueryOutcome, QueryOutput, QueryWarning};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown rendering of a query outcome to a file
///
/// # Arguments
///
/// * `outcome` - The query outcome to render
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown(
    outcome: &QueryOutcome<QueryOutput>,
    output_path: &Path,
) -> std::io::Result<()> {
    let markdown = format_markdown(outcome);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a query outcome as markdown
pub fn format_markdown(outcome: &QueryOutcome<QueryOutput>) -> String {
    let mut md = match &outcome.output {
        QueryOutput::Fields(fields) => format_fields(fields),
        QueryOutput::Proceeding(proceeding) => format_fields(proceeding.fields()),
        QueryOutput::RawResults(raw) => format_raw_results(raw),
        QueryOutput::ResultSet(set) => format_result_set(set),
    };

    if !outcome.warnings.is_empty() {
        md.push_str(&format_warnings(&outcome.warnings));
    }

    md
}

fn format_fields(fields: &Fields) -> String {
    let mut md = String::new();

    let title = fields
        .get("docket_number")
        .map(String::as_str)
        .unwrap_or("(unknown docket)");
    md.push_str(&format!("# Proceeding {}\n\n", title));

    md.push_str("| Attribute | Value |\n");
    md.push_str("|-----------|-------|\n");
    for (name, value) in fields {
        md.push_str(&format!("| {} | {} |\n", name, escape_cell(value)));
    }
    md.push('\n');

    md
}

fn format_raw_results(raw: &RawResults) -> String {
    let rows: Vec<&Fields> = raw.results.iter().collect();
    format_listing(ListingHeader::from_raw(raw), &rows)
}

fn format_result_set(set: &ResultSet) -> String {
    let rows: Vec<&Fields> = set.results.iter().map(|p| p.fields()).collect();
    format_listing(ListingHeader::from_set(set), &rows)
}

struct ListingHeader<'a> {
    constraints: &'a ConstraintStore,
    fcc_url: &'a str,
    current_page: u32,
    total_pages: u32,
    first_result: u32,
    last_result: u32,
    total_results: u32,
}

impl<'a> ListingHeader<'a> {
    fn from_raw(raw: &'a RawResults) -> Self {
        Self {
            constraints: &raw.constraints,
            fcc_url: &raw.fcc_url,
            current_page: raw.current_page,
            total_pages: raw.total_pages,
            first_result: raw.first_result,
            last_result: raw.last_result,
            total_results: raw.total_results,
        }
    }

    fn from_set(set: &'a ResultSet) -> Self {
        Self {
            constraints: &set.constraints,
            fcc_url: &set.fcc_url,
            current_page: set.current_page,
            total_pages: set.total_pages,
            first_result: set.first_result,
            last_result: set.last_result,
            total_results: set.total_results,
        }
    }
}

fn format_listing(header: ListingHeader<'_>, rows: &[&Fields]) -> String {
    let mut md = String::new();

    md.push_str("# ECFS Proceeding Search\n\n");

    md.push_str("## Query\n\n");
    md.push_str(&format!("- **URL**: {}\n", header.fcc_url));
    for (key, value) in header.constraints.iter() {
        md.push_str(&format!("- **{}**: {}\n", key, value));
    }
    md.push('\n');

    md.push_str("## Pagination\n\n");
    md.push_str(&format!(
        "- **Page**: {} of {}\n",
        header.current_page, header.total_pages
    ));
    md.push_str(&format!(
        "- **Results**: {} - {} of {}\n\n",
        header.first_result, header.last_result, header.total_results
    ));

    md.push_str("## Proceedings\n\n");
    if rows.is_empty() {
        md.push_str("_No proceedings on this page._\n\n");
        return md;
    }

    md.push_str("| Docket | Bureau | Subject |\n");
    md.push_str("|--------|--------|---------|\n");
    for row in rows {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            cell(row, "docket_number"),
            cell(row, "bureau"),
            cell(row, "subject")
        ));
    }
    md.push('\n');

    md
}

fn format_warnings(warnings: &[QueryWarning]) -> String {
    let mut md = String::from("## Warnings\n\n");
    for warning in warnings {
        md.push_str(&format!("- {}\n", warning));
    }
    md.push('\n');
    md
}

fn cell(row: &Fields, name: &str) -> String {
    row.get(name).map(|v| escape_cell(v)).unwrap_or_default()
}

/// Keeps a value from breaking the table row it sits in
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
