use std::collections::BTreeMap;

/// Raw label → value mapping scraped from a page
pub type Fields = BTreeMap<String, String>;

/// A regulatory proceeding
///
/// Summary rows from a results page carry `docket_number`, `bureau` and `subject`.
/// Detail pages carry whatever label/value pairs the page lists, so there is no
/// fixed schema beyond the named accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proceeding {
    fields: Fields,
}

impl Proceeding {
    /// Returns the value of an attribute by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn docket_number(&self) -> Option<&str> {
        self.get("docket_number")
    }

    pub fn bureau(&self) -> Option<&str> {
        self.get("bureau")
    }

    pub fn subject(&self) -> Option<&str> {
        self.get("subject")
    }

    /// Iterates over all attributes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Unwraps back into the raw mapping
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl From<Fields> for Proceeding {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}
