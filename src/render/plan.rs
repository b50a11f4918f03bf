use geo::Point;
use serde::Serialize;

use crate::flow::{ArcPath, FillClass, NetMigration};

/// One fill-colored shape on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionShape {
    pub name: String,
    /// SVG path data in pixel space.
    pub path: String,
    pub fill: FillClass,
    pub coming_from_reference: Option<f64>,
    pub going_to_reference: Option<f64>,
    pub difference: Option<f64>,
}

/// Representative projected point of a region, used as an arc endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Centroid {
    pub name: String,
    pub point: Point<f64>,
    pub difference: Option<f64>,
}

impl NetMigration for Centroid {
    fn name(&self) -> &str { &self.name }

    fn difference(&self) -> Option<f64> { self.difference }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcDirection {
    /// Reference region → state.
    FromReference,
    /// State → reference region.
    ToReference,
}

/// A curved directional arrow between the reference region and another region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowArc {
    pub name: String,
    pub direction: ArcDirection,
    pub path: ArcPath,
    pub stroke_width: f64,
    pub difference: f64,
}

/// Everything needed to draw the map, already in pixel space.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderPlan {
    /// Region the arcs and tooltip counts are relative to.
    pub reference: String,
    pub width: f64,
    pub height: f64,
    pub regions: Vec<RegionShape>,
    /// Reference → state arcs, drawn first.
    pub outbound_arcs: Vec<FlowArc>,
    /// State → reference arcs.
    pub inbound_arcs: Vec<FlowArc>,
}

impl RenderPlan {
    pub fn region(&self, name: &str) -> Option<&RegionShape> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn arcs(&self) -> impl Iterator<Item = &FlowArc> {
        self.outbound_arcs.iter().chain(&self.inbound_arcs)
    }
}
