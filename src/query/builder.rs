//! Search URL construction

use crate::query::constraints::ConstraintStore;
use url::Url;

/// Builds the search URL for a set of constraints
///
/// Each set constraint becomes a `wire_name=value` pair, form-encoded, in the
/// store's insertion order. Unset constraints are omitted rather than sent empty.
/// Any query string already present on `base_url` is replaced.
///
/// # Example
///
/// ```
/// use ecfs_scrape::query::{build_query_url, ConstraintKey, ConstraintStore};
/// use url::Url;
///
/// let base = Url::parse("http://apps.fcc.gov/ecfs/proceeding_search/execute").unwrap();
/// let mut constraints = ConstraintStore::new();
/// constraints.insert(ConstraintKey::BureauCode, "WC");
/// constraints.insert(ConstraintKey::PageNumber, "1");
///
/// let url = build_query_url(&base, &constraints);
/// assert_eq!(url.query(), Some("bureauCode=WC&pageNumber=1"));
/// ```
pub fn build_query_url(base_url: &Url, constraints: &ConstraintStore) -> Url {
    let mut url = base_url.clone();
    url.set_query(None);

    url.query_pairs_mut().extend_pairs(
        constraints
            .iter()
            .map(|(key, value)| (key.wire_name(), value)),
    );

    url
}
