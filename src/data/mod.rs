mod feature;
mod join;
mod migration;
mod source;

pub use feature::{Flow, StateFeature};
pub use join::{join, JoinSummary};
pub use migration::{MigrationRecord, MigrationTable, COMING_FIELD, GOING_FIELD};
pub use source::{AutoSource, DatasetSource, Datasets, DiskSource, LoadError, MemSource};

#[cfg(feature = "download")]
pub use source::HttpSource;
