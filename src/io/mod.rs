//! IO module for format-specific reading and writing operations.
//!
//! Organized by format type rather than domain:
//!
//! - `geojson` - GeoJSON boundary features (Polygon / MultiPolygon with a `name` property)
//! - `json` - per-state migration counts keyed by state name
//! - `svg` - SVG format for the rendered map

pub(crate) mod geojson;
pub(crate) mod json;
pub(crate) mod svg;
