use geo::MultiPolygon;

use crate::{data::MigrationRecord, flow::NetMigration};

/// Migration counts attached to a feature once it has been joined to a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flow {
    pub coming_from_reference: f64,
    pub going_to_reference: f64,
    /// Net migration: `coming_from_reference - going_to_reference`.
    pub difference: f64,
}

impl Flow {
    pub fn from_record(record: &MigrationRecord) -> Self {
        Self {
            coming_from_reference: record.coming_from_reference,
            going_to_reference: record.going_to_reference,
            difference: record.difference(),
        }
    }
}

/// A named region from the boundary dataset, in lon/lat.
#[derive(Clone, Debug)]
pub struct StateFeature {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
    /// Unset until the join finds a matching record.
    pub flow: Option<Flow>,
}

impl StateFeature {
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self { name: name.into(), geometry, flow: None }
    }

    #[inline]
    pub fn is_joined(&self) -> bool { self.flow.is_some() }
}

impl NetMigration for StateFeature {
    fn name(&self) -> &str { &self.name }

    fn difference(&self) -> Option<f64> { self.flow.map(|flow| flow.difference) }
}
