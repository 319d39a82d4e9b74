//! ECFS-Scrape main entry point
//!
//! This is the command-line interface for querying the ECFS proceeding search.

use clap::Parser;
use ecfs_scrape::config::{load_config, Config};
use ecfs_scrape::output::{format_markdown, generate_markdown};
use ecfs_scrape::{ConstraintKey, HttpFetcher, ProceedingsQuery};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Results page requested when the command line names none
const DEFAULT_PAGE: &str = "1";

/// ECFS-Scrape: structured access to the FCC's proceeding search
///
/// Looks up a single proceeding by docket number, or lists one page of
/// proceedings matching a set of search constraints.
#[derive(Parser, Debug)]
#[command(name = "ecfs-scrape")]
#[command(version)]
#[command(about = "Query the ECFS proceeding search", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Look up a single proceeding; other constraints are then ignored
    #[arg(long, value_name = "DOCKET")]
    docket: Option<String>,

    /// Results page to fetch (first page when neither this nor `-c page_number=N` is given)
    #[arg(long, value_name = "N")]
    page: Option<String>,

    /// Results per page
    #[arg(long, value_name = "N")]
    per_page: Option<String>,

    /// Additional search constraint, e.g. `-c bureau_code=WC` (repeatable)
    #[arg(short = 'c', long = "constraint", value_name = "KEY=VALUE", value_parser = parse_constraint)]
    constraints: Vec<(String, String)>,

    /// Return raw scraped fields instead of typed records
    #[arg(long)]
    raw: bool,

    /// Write markdown to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?
        }
        None => Config::default(),
    };

    let query = build_query(&cli, &config)?;
    let fetcher = HttpFetcher::new(&config)?;

    tracing::info!("Querying {}", query.base_url());
    let outcome = match query.execute(&fetcher, !cli.raw).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            return Err(e.into());
        }
    };

    match &cli.output {
        Some(path) => {
            generate_markdown(&outcome, path)?;
            tracing::info!("Wrote results to: {}", path.display());
        }
        None => print!("{}", format_markdown(&outcome)),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ecfs_scrape=info,warn"),
            1 => EnvFilter::new("ecfs_scrape=debug,info"),
            2 => EnvFilter::new("ecfs_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Applies the command-line constraints to a new query
fn build_query(cli: &Cli, config: &Config) -> ecfs_scrape::Result<ProceedingsQuery> {
    let mut query = ProceedingsQuery::from_config(config)?;

    for (key, value) in &cli.constraints {
        query.set(key, value.as_str())?;
    }

    if let Some(docket) = &cli.docket {
        query.set("docket_number", docket.as_str())?;
    }

    // Listing options only apply when no docket is looked up
    if query.value(ConstraintKey::DocketNumber).is_none() {
        if let Some(page) = &cli.page {
            query.set("page_number", page.as_str())?;
        } else if query.value(ConstraintKey::PageNumber).is_none() {
            query.set("page_number", DEFAULT_PAGE)?;
        }
        if let Some(per_page) = &cli.per_page {
            query.set("per_page", per_page.as_str())?;
        }
    }

    Ok(query)
}

/// Parses a `key=value` constraint argument
fn parse_constraint(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_for(args: &[&str]) -> ProceedingsQuery {
        let cli = Cli::parse_from(std::iter::once("ecfs-scrape").chain(args.iter().copied()));
        build_query(&cli, &Config::default()).unwrap()
    }

    #[test]
    fn test_default_page() {
        let query = query_for(&["-c", "bureau_code=WC"]);
        assert_eq!(query.value(ConstraintKey::PageNumber), Some("1"));
    }

    #[test]
    fn test_page_constraint_is_kept() {
        let query = query_for(&["-c", "page_number=3"]);
        assert_eq!(query.value(ConstraintKey::PageNumber), Some("3"));
        assert_eq!(query.constraints().len(), 1);
    }

    #[test]
    fn test_page_flag() {
        let query = query_for(&["--page", "4", "--per-page", "50"]);
        assert_eq!(query.value(ConstraintKey::PageNumber), Some("4"));
        assert_eq!(query.value(ConstraintKey::PerPage), Some("50"));
    }

    #[test]
    fn test_docket_constraint_adds_no_listing_options() {
        let query = query_for(&["-c", "docket_number=12-375"]);
        assert_eq!(query.constraints().len(), 1);
        assert_eq!(query.value(ConstraintKey::DocketNumber), Some("12-375"));
    }

    #[test]
    fn test_docket_flag_ignores_page() {
        let query = query_for(&["--docket", "12-375", "--page", "2"]);
        assert_eq!(query.constraints().len(), 1);
        assert_eq!(query.value(ConstraintKey::PageNumber), None);
    }

    #[test]
    fn test_parse_constraint() {
        assert_eq!(
            parse_constraint("bureau_code=WC").unwrap(),
            ("bureau_code".to_string(), "WC".to_string())
        );
        assert!(parse_constraint("bureau_code").is_err());
    }
}
