use std::collections::HashSet;

use tracing::debug;

use crate::data::{Flow, MigrationTable, StateFeature};

/// What the join matched, for logging and diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinSummary {
    /// Features that received a record.
    pub matched: usize,
    /// Feature names with no record (left unset, not zero).
    pub unmatched: Vec<String>,
    /// Record names with no feature, sorted.
    pub orphaned: Vec<String>,
}

/// Attach migration counts to every feature whose name has a record.
/// Features without a record keep `flow == None`.
pub fn join(features: &mut [StateFeature], table: &MigrationTable) -> JoinSummary {
    let mut summary = JoinSummary::default();
    let mut seen = HashSet::with_capacity(features.len());

    for feature in features.iter_mut() {
        seen.insert(feature.name.clone());
        match table.get(&feature.name) {
            Some(record) => {
                feature.flow = Some(Flow::from_record(record));
                summary.matched += 1;
            }
            None => summary.unmatched.push(feature.name.clone()),
        }
    }

    summary.orphaned = table.names()
        .filter(|name| !seen.contains(*name))
        .map(str::to_string)
        .collect();
    summary.orphaned.sort();

    debug!(
        matched = summary.matched,
        unmatched = ?summary.unmatched,
        orphaned = ?summary.orphaned,
        "joined migration records onto boundaries"
    );

    summary
}
