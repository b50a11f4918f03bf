//! Net-migration logic: fill classification, arc filters, arc geometry and stroke scaling.

mod arc;
mod classify;
mod filter;
mod scale;

pub use arc::{ArcPath, CURVATURE};
pub use classify::{classify, FillClass, UnmatchedPolicy};
pub use filter::{inbound_set, is_inbound_heavy, is_outbound_heavy, outbound_set, INBOUND_THRESHOLD, OUTBOUND_THRESHOLD};
pub use scale::{stroke_width_scale, LinearScale};

/// Anything carrying a region name and an optional net-migration value.
pub trait NetMigration {
    fn name(&self) -> &str;

    /// `None` when the region has no migration record.
    fn difference(&self) -> Option<f64>;
}
