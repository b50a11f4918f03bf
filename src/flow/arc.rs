use std::fmt;

use geo::Point;
use serde::{Serialize, Serializer};

/// Arc radius as a multiple of the chord length. Larger is flatter.
pub const CURVATURE: f64 = 1.5;

/// A single circular arc from `source` to `target`, always bending the same way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub source: Point<f64>,
    pub target: Point<f64>,
    pub radius: f64,
}

impl ArcPath {
    pub fn between(source: Point<f64>, target: Point<f64>) -> Self {
        let delta = target - source;
        Self { source, target, radius: delta.x().hypot(delta.y()) * CURVATURE }
    }

    /// Straight-line distance between the endpoints.
    #[inline]
    pub fn chord(&self) -> f64 { self.radius / CURVATURE }
}

impl fmt::Display for ArcPath {
    /// SVG path data: `M sx,sy A r,r 0 0,1 tx,ty` (no rotation, small arc, clockwise sweep).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M{:.3},{:.3}A{r:.3},{r:.3} 0 0,1 {:.3},{:.3}",
            self.source.x(), self.source.y(),
            self.target.x(), self.target.y(),
            r = self.radius,
        )
    }
}

impl Serialize for ArcPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
