//! Proceeding queries against the ECFS search
//!
//! A `ProceedingsQuery` collects constraints, builds the search URL, performs a
//! single fetch and hands the page to the scraper matching the query mode:
//! a docket lookup scrapes the proceeding detail page, anything else scrapes a
//! page of search results.

mod builder;
mod constraints;

pub use builder::build_query_url;
pub use constraints::{ConstraintKey, ConstraintStore, CONSTRAINT_DICTIONARY};

use crate::config::Config;
use crate::model::{Fields, Proceeding, RawResults, ResultSet};
use crate::scrape::{parse_proceeding_page, parse_results_page, Document, PageFetcher};
use crate::Result;
use std::fmt;
use url::Url;

/// Which scraper a set of constraints is routed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Detail page lookup; `ignored` lists the other constraints that were set
    Proceeding {
        docket_number: String,
        ignored: Vec<ConstraintKey>,
    },
    /// Paginated search results
    Results,
}

/// Decides the query mode for a set of constraints
pub fn route(constraints: &ConstraintStore) -> Route {
    match constraints.value(ConstraintKey::DocketNumber) {
        Some(docket_number) => Route::Proceeding {
            docket_number: docket_number.to_string(),
            ignored: constraints
                .keys()
                .filter(|key| *key != ConstraintKey::DocketNumber)
                .collect(),
        },
        None => Route::Results,
    }
}

/// Non-fatal conditions reported alongside a successful query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryWarning {
    /// A docket lookup was combined with other constraints, which were not sent
    IgnoredConstraints(Vec<ConstraintKey>),
}

impl fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryWarning::IgnoredConstraints(keys) => {
                let names: Vec<&str> = keys.iter().map(|key| key.logical_name()).collect();
                write!(
                    f,
                    "Constraints other than `docket_number` will be ignored: {}",
                    names.join(", ")
                )
            }
        }
    }
}

/// What a query returns, raw or typecast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    Fields(Fields),
    RawResults(RawResults),
    Proceeding(Proceeding),
    ResultSet(ResultSet),
}

impl QueryOutput {
    /// Unwraps typecast output into its raw form; raw output is returned as is
    pub fn into_raw(self) -> QueryOutput {
        match self {
            QueryOutput::Proceeding(proceeding) => QueryOutput::Fields(proceeding.into_fields()),
            QueryOutput::ResultSet(set) => QueryOutput::RawResults(set.into_raw()),
            raw => raw,
        }
    }
}

/// A successful query result and any warnings raised producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome<T> {
    pub output: T,
    pub warnings: Vec<QueryWarning>,
}

/// A query against the ECFS proceeding search
///
/// # Example
///
/// ```no_run
/// use ecfs_scrape::config::Config;
/// use ecfs_scrape::{HttpFetcher, ProceedingsQuery, QueryOutput};
///
/// # async fn example() -> ecfs_scrape::Result<()> {
/// let config = Config::default();
/// let fetcher = HttpFetcher::new(&config)?;
/// let mut query = ProceedingsQuery::from_config(&config)?;
/// query.set("bureau_code", "WC")?;
/// query.set("page_number", "1")?;
///
/// let outcome = query.execute(&fetcher, true).await?;
/// if let QueryOutput::ResultSet(set) = outcome.output {
///     println!("{} proceedings", set.total_results);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProceedingsQuery {
    base_url: Url,
    constraints: ConstraintStore,
}

impl ProceedingsQuery {
    /// Creates a query against the search endpoint at `base_url`
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            constraints: ConstraintStore::new(),
        }
    }

    /// Creates a query against the endpoint named in the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Url::parse(&config.client.base_url)?))
    }

    /// Sets a constraint by logical name, failing on unrecognized names
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.constraints.set(key, value)
    }

    /// Gets a constraint by logical name
    pub fn get(&self, key: &str) -> Result<Option<&str>> {
        self.constraints.get(key)
    }

    /// Sets a constraint by key
    pub fn insert(&mut self, key: ConstraintKey, value: impl Into<String>) {
        self.constraints.insert(key, value);
    }

    /// Gets a constraint by key
    pub fn value(&self, key: ConstraintKey) -> Option<&str> {
        self.constraints.value(key)
    }

    /// All constraints set so far, in insertion order
    pub fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    /// The search endpoint queried
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The search URL for the full constraint set
    pub fn url(&self) -> Url {
        build_query_url(&self.base_url, &self.constraints)
    }

    /// Runs the query: one fetch, one scrape
    ///
    /// With `docket_number` set, only that constraint is sent and the detail page
    /// is scraped; any other constraints produce a `QueryWarning`. Otherwise the
    /// full constraint set is sent and a results page is scraped.
    ///
    /// With `typecast` the output is a `Proceeding` or `ResultSet`, without it the
    /// raw `Fields` or `RawResults`.
    pub async fn execute<F: PageFetcher>(
        &self,
        fetcher: &F,
        typecast: bool,
    ) -> Result<QueryOutcome<QueryOutput>> {
        match route(&self.constraints) {
            Route::Proceeding {
                docket_number,
                ignored,
            } => {
                let mut warnings = Vec::new();
                if !ignored.is_empty() {
                    let warning = QueryWarning::IgnoredConstraints(ignored);
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                }

                let mut docket_only = ConstraintStore::new();
                docket_only.insert(ConstraintKey::DocketNumber, docket_number);
                let url = build_query_url(&self.base_url, &docket_only);

                let page = fetcher.fetch(&url).await?;
                let fields = parse_proceeding_page(&Document::parse(&page.body))?;

                let output = if typecast {
                    QueryOutput::Proceeding(Proceeding::from(fields))
                } else {
                    QueryOutput::Fields(fields)
                };
                Ok(QueryOutcome { output, warnings })
            }
            Route::Results => {
                let url = self.url();

                let page = fetcher.fetch(&url).await?;
                let raw = parse_results_page(
                    &Document::parse(&page.body),
                    &self.constraints,
                    page.final_url.as_str(),
                )?;

                let output = if typecast {
                    QueryOutput::ResultSet(ResultSet::from(raw))
                } else {
                    QueryOutput::RawResults(raw)
                };
                Ok(QueryOutcome {
                    output,
                    warnings: Vec::new(),
                })
            }
        }
    }
}
