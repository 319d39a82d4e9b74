use crate::model::proceeding::{Fields, Proceeding};
use crate::query::ConstraintStore;

/// One page of a results listing, as scraped
///
/// Rows stay as raw field mappings. `ResultSet` is the typecast form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResults {
    /// Constraints used to produce the page
    pub constraints: ConstraintStore,
    /// The URL the page was fetched from
    pub fcc_url: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub first_result: u32,
    pub last_result: u32,
    pub total_results: u32,
    pub results: Vec<Fields>,
}

/// One page of a results listing with typed rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub constraints: ConstraintStore,
    pub fcc_url: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub first_result: u32,
    pub last_result: u32,
    pub total_results: u32,
    pub results: Vec<Proceeding>,
}

impl ResultSet {
    /// Returns true if a later page exists
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Number of rows on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Unwraps back into the raw form
    pub fn into_raw(self) -> RawResults {
        RawResults {
            constraints: self.constraints,
            fcc_url: self.fcc_url,
            current_page: self.current_page,
            total_pages: self.total_pages,
            first_result: self.first_result,
            last_result: self.last_result,
            total_results: self.total_results,
            results: self
                .results
                .into_iter()
                .map(Proceeding::into_fields)
                .collect(),
        }
    }
}

impl From<RawResults> for ResultSet {
    fn from(raw: RawResults) -> Self {
        Self {
            constraints: raw.constraints,
            fcc_url: raw.fcc_url,
            current_page: raw.current_page,
            total_pages: raw.total_pages,
            first_result: raw.first_result,
            last_result: raw.last_result,
            total_results: raw.total_results,
            results: raw.results.into_iter().map(Proceeding::from).collect(),
        }
    }
}
