use anyhow::{Context, Result};
use geo::{Centroid as _, MultiPolygon, Point};
use tracing::{debug, warn};

use crate::{
    config::RenderConfig,
    data::StateFeature,
    flow::{classify, inbound_set, outbound_set, stroke_width_scale, ArcPath, LinearScale, NetMigration},
    io::svg::multipolygon_to_path,
    proj::AlbersUsa,
    render::{ArcDirection, Centroid, FlowArc, RegionShape, RenderPlan},
};

/// Turns joined features into a [`RenderPlan`]: one shape per region plus the two arc sets.
pub struct MigrationFlowRenderer {
    config: RenderConfig,
    projection: AlbersUsa,
}

impl MigrationFlowRenderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let projection = AlbersUsa::new(&config.projection)
            .context("[MigrationFlowRenderer] Failed to build Albers USA projection")?;
        Ok(Self { config, projection })
    }

    pub fn config(&self) -> &RenderConfig { &self.config }

    /// Project every feature, keeping input order.
    fn project(&self, features: &[StateFeature]) -> Vec<MultiPolygon<f64>> {
        features.iter().map(|feature| self.projection.project_multipolygon(&feature.geometry)).collect()
    }

    /// Planar centroids of the projected features. Features with no drawable geometry have none.
    pub fn centroids(&self, features: &[StateFeature]) -> Vec<Centroid> {
        centroids_of(features, &self.project(features))
    }

    pub fn render(&self, features: &[StateFeature]) -> RenderPlan {
        let reference = self.config.reference.as_str();
        let projected = self.project(features);

        let regions: Vec<RegionShape> = features.iter().zip(&projected)
            .filter(|(_, shape)| !shape.0.is_empty())
            .map(|(feature, shape)| RegionShape {
                name: feature.name.clone(),
                path: multipolygon_to_path(shape),
                fill: classify(&feature.name, feature.difference(), reference, self.config.unmatched),
                coming_from_reference: feature.flow.map(|flow| flow.coming_from_reference),
                going_to_reference: feature.flow.map(|flow| flow.going_to_reference),
                difference: feature.difference(),
            })
            .collect();

        let centroids = centroids_of(features, &projected);
        let [lo, hi] = self.config.stroke_range;
        let scale = stroke_width_scale(features, (lo, hi));

        let (outbound_arcs, inbound_arcs) = match centroids.iter().find(|c| c.name == reference) {
            Some(anchor) => (
                flow_arcs(&outbound_set(&centroids, reference), anchor.point, ArcDirection::FromReference, &scale),
                flow_arcs(&inbound_set(&centroids, reference), anchor.point, ArcDirection::ToReference, &scale),
            ),
            None => {
                warn!(reference, "reference region has no drawable geometry; no flow arcs will be drawn");
                (Vec::new(), Vec::new())
            }
        };

        debug!(
            regions = regions.len(),
            outbound = outbound_arcs.len(),
            inbound = inbound_arcs.len(),
            max_difference = scale.domain().1,
            "render plan ready"
        );

        RenderPlan {
            reference: reference.to_string(),
            width: self.config.width,
            height: self.config.height,
            regions,
            outbound_arcs,
            inbound_arcs,
        }
    }
}

fn centroids_of(features: &[StateFeature], projected: &[MultiPolygon<f64>]) -> Vec<Centroid> {
    features.iter().zip(projected)
        .filter_map(|(feature, shape)| {
            let point = shape.centroid()?;
            Some(Centroid { name: feature.name.clone(), point, difference: feature.difference() })
        })
        .collect()
}

fn flow_arcs(selected: &[&Centroid], anchor: Point<f64>, direction: ArcDirection, scale: &LinearScale) -> Vec<FlowArc> {
    selected.iter()
        .filter_map(|centroid| {
            // Filters only admit regions with a difference.
            let difference = centroid.difference?;
            let path = match direction {
                ArcDirection::FromReference => ArcPath::between(anchor, centroid.point),
                ArcDirection::ToReference => ArcPath::between(centroid.point, anchor),
            };
            Some(FlowArc {
                name: centroid.name.clone(),
                direction,
                path,
                stroke_width: scale.apply(difference.abs()),
                difference,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::{LineString, Polygon};

    use super::*;
    use crate::{
        data::{join, MigrationRecord, MigrationTable},
        flow::{FillClass, UnmatchedPolicy},
    };

    fn square(name: &str, lon: f64, lat: f64) -> StateFeature {
        let ring = LineString::from(vec![
            (lon, lat), (lon + 2.0, lat), (lon + 2.0, lat + 2.0), (lon, lat + 2.0), (lon, lat),
        ]);
        StateFeature::new(name, MultiPolygon(vec![Polygon::new(ring, vec![])]))
    }

    fn features() -> Vec<StateFeature> {
        let mut features = vec![
            square("California", -121.0, 36.0),
            square("Texas", -100.0, 30.0),
            square("New York", -76.0, 42.0),
            square("Oregon", -122.0, 43.0),
            square("Ohio", -84.0, 39.0),
        ];
        let table: MigrationTable = [
            ("California", MigrationRecord::new(90_000.0, 10_000.0)),
            ("Texas", MigrationRecord::new(50_000.0, 30_000.0)),
            ("New York", MigrationRecord::new(10_000.0, 20_000.0)),
            ("Ohio", MigrationRecord::new(6_000.0, 5_000.0)),
        ].into_iter().map(|(name, record)| (name.to_string(), record)).collect();
        join(&mut features, &table);
        features
    }

    fn renderer() -> MigrationFlowRenderer { MigrationFlowRenderer::new(RenderConfig::default()).unwrap() }

    #[test]
    fn texas_gets_an_outbound_arc_and_inbound_fill() {
        let plan = renderer().render(&features());

        let texas = plan.region("Texas").unwrap();
        assert_eq!(texas.difference, Some(20_000.0));
        assert_eq!(texas.fill, FillClass::Inbound);

        let names: Vec<&str> = plan.outbound_arcs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Texas"]);

        // California's own difference (80000) sets the top of the stroke domain.
        let arc = &plan.outbound_arcs[0];
        assert_eq!(arc.direction, ArcDirection::FromReference);
        assert!((arc.stroke_width - (1.0 + 4.0 * 20_000.0 / 80_000.0)).abs() < 1e-9);
    }

    #[test]
    fn new_york_gets_an_inbound_arc_and_outbound_fill() {
        let plan = renderer().render(&features());

        assert_eq!(plan.region("New York").unwrap().fill, FillClass::Outbound);
        let names: Vec<&str> = plan.inbound_arcs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["New York"]);
        assert_eq!(plan.inbound_arcs[0].direction, ArcDirection::ToReference);
    }

    #[test]
    fn california_is_highlighted_and_never_an_arc() {
        let plan = renderer().render(&features());
        assert_eq!(plan.region("California").unwrap().fill, FillClass::Reference);
        assert!(plan.arcs().all(|arc| arc.name != "California"));
    }

    #[test]
    fn unmatched_region_has_no_arcs_and_default_fill() {
        let plan = renderer().render(&features());
        let oregon = plan.region("Oregon").unwrap();
        assert_eq!(oregon.difference, None);
        assert_eq!(oregon.fill, FillClass::Outbound);
        assert!(plan.arcs().all(|arc| arc.name != "Oregon"));

        let config = RenderConfig { unmatched: UnmatchedPolicy::Neutral, ..RenderConfig::default() };
        let plan = MigrationFlowRenderer::new(config).unwrap().render(&features());
        assert_eq!(plan.region("Oregon").unwrap().fill, FillClass::Neutral);
    }

    #[test]
    fn arcs_connect_reference_and_region_centroids() {
        let renderer = renderer();
        let features = features();
        let centroids = renderer.centroids(&features);
        let plan = renderer.render(&features);

        let ca = centroids.iter().find(|c| c.name == "California").unwrap().point;
        let tx = centroids.iter().find(|c| c.name == "Texas").unwrap().point;
        let ny = centroids.iter().find(|c| c.name == "New York").unwrap().point;

        assert_eq!(plan.outbound_arcs[0].path, ArcPath::between(ca, tx));
        assert_eq!(plan.inbound_arcs[0].path, ArcPath::between(ny, ca));
    }

    #[test]
    fn missing_reference_draws_regions_without_arcs() {
        let features: Vec<StateFeature> = features().into_iter().filter(|f| f.name != "California").collect();
        let plan = renderer().render(&features);
        assert_eq!(plan.regions.len(), 4);
        assert!(plan.outbound_arcs.is_empty() && plan.inbound_arcs.is_empty());
    }

    #[test]
    fn regions_outside_every_inset_are_not_drawn() {
        let mut features = features();
        features.push(square("Atlantis", 10.0, 50.0));
        let plan = renderer().render(&features);
        assert!(plan.region("Atlantis").is_none());
        assert_eq!(plan.regions.len(), 5);
    }
}
