//! Render configuration, constructed per render call and passed explicitly.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::flow::UnmatchedPolicy;

/// Region all flow arcs start from or end at.
pub const DEFAULT_REFERENCE: &str = "California";

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 400.0;

// Plot area the projection is centered in: the canvas minus margins.
const PLOT_WIDTH: f64 = CANVAS_WIDTH - 40.0 - 30.0;
const PLOT_HEIGHT: f64 = CANVAS_HEIGHT - 20.0 - 30.0;

/// Albers USA projection parameters, in SVG pixels.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub scale: f64,
    pub translate: [f64; 2],
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { scale: 1000.0, translate: [PLOT_WIDTH / 1.75, PLOT_HEIGHT / 1.45] }
    }
}

/// Everything a [`MigrationFlowRenderer`](crate::MigrationFlowRenderer) needs to know
/// besides the data itself.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Name of the reference region (matched against the GeoJSON `name` property).
    pub reference: String,
    /// SVG canvas width.
    pub width: f64,
    /// SVG canvas height.
    pub height: f64,
    pub projection: ProjectionConfig,
    /// Output range of the arc stroke-width scale.
    pub stroke_range: [f64; 2],
    /// Fill rule for regions with no migration record.
    pub unmatched: UnmatchedPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE.to_string(),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            projection: ProjectionConfig::default(),
            stroke_range: [1.0, 5.0],
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl RenderConfig {
    /// Reject configurations that would produce an unreadable or non-finite SVG.
    pub fn validate(&self) -> Result<()> {
        if self.reference.is_empty() {
            bail!("[RenderConfig] reference region name must not be empty")
        }
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            bail!("[RenderConfig] canvas size must be positive, got {}x{}", self.width, self.height)
        }
        if !(self.projection.scale.is_finite() && self.projection.scale > 0.0) {
            bail!("[RenderConfig] projection scale must be positive, got {}", self.projection.scale)
        }
        if !self.projection.translate.iter().all(|v| v.is_finite()) {
            bail!("[RenderConfig] projection translate must be finite, got {:?}", self.projection.translate)
        }
        let [lo, hi] = self.stroke_range;
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && hi >= lo) {
            bail!("[RenderConfig] stroke range must satisfy 0 <= min <= max, got [{lo}, {hi}]")
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_translate_matches_plot_area() {
        let config = RenderConfig::default();
        assert_eq!(config.reference, "California");
        assert!((config.projection.translate[0] - 730.0 / 1.75).abs() < 1e-9);
        assert!((config.projection.translate[1] - 350.0 / 1.45).abs() < 1e-9);
        assert_eq!(config.stroke_range, [1.0, 5.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{ "reference": "Texas", "unmatched": "neutral" }"#).unwrap();
        assert_eq!(config.reference, "Texas");
        assert_eq!(config.unmatched, UnmatchedPolicy::Neutral);
        assert_eq!(config.projection, ProjectionConfig::default());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = RenderConfig::default();
        config.projection.scale = 0.0;
        assert!(config.validate().is_err());

        let mut config = RenderConfig::default();
        config.stroke_range = [5.0, 1.0];
        assert!(config.validate().is_err());

        let mut config = RenderConfig::default();
        config.reference.clear();
        assert!(config.validate().is_err());
    }
}
