//! Search constraints and the logical-name → wire-name dictionary

use crate::EcfsError;
use std::fmt;
use std::str::FromStr;

/// One recognized search constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKey {
    DocketNumber,
    BureauCode,
    Subject,
    BureauId,
    Applicant,
    FiledBy,
    RecentFilings,
    OpenStatus,
    CreatedAfter,
    CreatedBefore,
    ClosedAfter,
    ClosedBefore,
    Callsign,
    Channel,
    RuleSection,
    PageNumber,
    PerPage,
}

/// Static table of every recognized constraint: (key, logical name, wire name)
pub const CONSTRAINT_DICTIONARY: [(ConstraintKey, &str, &str); 17] = [
    (ConstraintKey::DocketNumber, "docket_number", "name"),
    (ConstraintKey::BureauCode, "bureau_code", "bureauCode"),
    (ConstraintKey::Subject, "subject", "subject"),
    (ConstraintKey::BureauId, "bureau_id", "bureauIdentificationNumber"),
    (ConstraintKey::Applicant, "applicant", "application"),
    (ConstraintKey::FiledBy, "filed_by", "filedBy"),
    (
        ConstraintKey::RecentFilings,
        "recent_filings",
        "__checkbox_recentFilingsRequired",
    ),
    (ConstraintKey::OpenStatus, "open_status", "openStatus"),
    (ConstraintKey::CreatedAfter, "created_after", "created.minDate"),
    (ConstraintKey::CreatedBefore, "created_before", "created.maxDate"),
    (ConstraintKey::ClosedAfter, "closed_after", "closed.minDate"),
    (ConstraintKey::ClosedBefore, "closed_before", "closed.maxDate"),
    (ConstraintKey::Callsign, "callsign", "callsign"),
    (ConstraintKey::Channel, "channel", "channel"),
    (ConstraintKey::RuleSection, "rule_section", "ruleSection"),
    (ConstraintKey::PageNumber, "page_number", "pageNumber"),
    (ConstraintKey::PerPage, "per_page", "pageSize"),
];

impl ConstraintKey {
    /// Returns every recognized key in dictionary order
    pub fn all() -> impl Iterator<Item = ConstraintKey> {
        CONSTRAINT_DICTIONARY.iter().map(|(key, _, _)| *key)
    }

    /// The caller-facing name (e.g. `created_after`)
    pub fn logical_name(&self) -> &'static str {
        self.entry().1
    }

    /// The query parameter name the search endpoint expects (e.g. `created.minDate`)
    pub fn wire_name(&self) -> &'static str {
        self.entry().2
    }

    fn entry(&self) -> &'static (ConstraintKey, &'static str, &'static str) {
        // Variants are declared in dictionary order
        &CONSTRAINT_DICTIONARY[*self as usize]
    }
}

impl fmt::Display for ConstraintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.logical_name())
    }
}

impl FromStr for ConstraintKey {
    type Err = EcfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CONSTRAINT_DICTIONARY
            .iter()
            .find(|(_, name, _)| *name == s)
            .map(|(key, _, _)| *key)
            .ok_or_else(|| EcfsError::Validation(s.to_string()))
    }
}

/// Insertion-ordered set of constraint values
///
/// Values are kept as strings; no numeric or date typing happens here.
/// Overwriting a key keeps its original position so the generated query
/// string stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    entries: Vec<(ConstraintKey, String)>,
}

impl ConstraintStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a constraint by its logical name
    ///
    /// # Errors
    ///
    /// Returns `EcfsError::Validation` if `key` is not a recognized constraint.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), EcfsError> {
        let key: ConstraintKey = key.parse()?;
        self.insert(key, value);
        Ok(())
    }

    /// Gets a constraint by its logical name
    ///
    /// Returns `Ok(None)` for a recognized key that has not been set.
    pub fn get(&self, key: &str) -> Result<Option<&str>, EcfsError> {
        let key: ConstraintKey = key.parse()?;
        Ok(self.value(key))
    }

    /// Sets a constraint, overwriting any earlier value in place
    pub fn insert(&mut self, key: ConstraintKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored for `key`, if any
    pub fn value(&self, key: ConstraintKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes a constraint, returning its previous value
    pub fn remove(&mut self, key: ConstraintKey) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns true if `key` has a value
    pub fn contains(&self, key: ConstraintKey) -> bool {
        self.value(key).is_some()
    }

    /// Iterates over set constraints in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Iterates over set keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = ConstraintKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of constraints set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
