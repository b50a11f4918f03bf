use std::collections::HashMap;

/// JSON field holding the count of people who moved from the reference region.
pub const COMING_FIELD: &str = "coming_from_california";

/// JSON field holding the count of people who moved to the reference region.
pub const GOING_FIELD: &str = "going_to_california";

/// Per-state counts of people moving to and from the reference region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MigrationRecord {
    pub coming_from_reference: f64,
    pub going_to_reference: f64,
}

impl MigrationRecord {
    pub fn new(coming_from_reference: f64, going_to_reference: f64) -> Self {
        Self { coming_from_reference, going_to_reference }
    }

    /// Net migration. NaN if either count is malformed.
    #[inline]
    pub fn difference(&self) -> f64 { self.coming_from_reference - self.going_to_reference }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.coming_from_reference.is_nan() || self.going_to_reference.is_nan()
    }
}

/// Migration records keyed by state name.
#[derive(Clone, Debug, Default)]
pub struct MigrationTable {
    records: HashMap<String, MigrationRecord>,
}

impl MigrationTable {
    pub fn get(&self, name: &str) -> Option<&MigrationRecord> { self.records.get(name) }

    pub fn insert(&mut self, name: impl Into<String>, record: MigrationRecord) {
        self.records.insert(name.into(), record);
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.records.keys().map(String::as_str) }
}

impl FromIterator<(String, MigrationRecord)> for MigrationTable {
    fn from_iter<I: IntoIterator<Item = (String, MigrationRecord)>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}
