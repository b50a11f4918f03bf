use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;
use tracing::debug;

use crate::data::StateFeature;

/// Read named region boundaries from GeoJSON FeatureCollection bytes.
/// Features whose geometry is not a Polygon or MultiPolygon are skipped.
pub(crate) fn read_boundaries_from_bytes(bytes: &[u8]) -> Result<Vec<StateFeature>> {
    let value: Value = serde_json::from_slice(bytes)
        .context("[read_boundaries] Failed to parse GeoJSON bytes")?;

    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[read_boundaries] Expected a FeatureCollection with a \"features\" array"))?;

    let mut out = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let name = feature["properties"]["name"].as_str().unwrap_or_default();

        let geometry = parse_geometry(&feature["geometry"])
            .with_context(|| format!("[read_boundaries] Invalid geometry for feature {idx} ({name:?})"))?;

        match geometry {
            Some(geometry) => out.push(StateFeature::new(name, geometry)),
            None => debug!(idx, name, "skipping feature without polygonal geometry"),
        }
    }

    Ok(out)
}

/// Parse a GeoJSON geometry object. Polygons are promoted to one-member multipolygons.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = || geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("missing \"coordinates\" array"));

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon_coords(coords()?)?]))),
        Some("MultiPolygon") => {
            let polygons = coords()?.iter()
                .map(|polygon| {
                    let rings = polygon.as_array()
                        .ok_or_else(|| anyhow!("MultiPolygon member must be an array of rings"))?;
                    parse_polygon_coords(rings)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Parse polygon rings: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        let ring = ring.as_array().ok_or_else(|| anyhow!("ring must be an array of positions"))?;
        parse_ring_coords(ring)
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON positions: `[[x, y], [x, y], ...]`.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for position in coords {
        let position = position.as_array()
            .filter(|p| p.len() >= 2)
            .ok_or_else(|| anyhow!("position must be an array of at least two numbers"))?;
        let x = position[0].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = position[1].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    Ok(LineString(points))
}
