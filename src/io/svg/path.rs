//! SVG path data for projected geometry.

use geo::{CoordsIter, LineString, MultiPolygon};

/// Build a compact SVG path string for an already-projected MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, &mut out);
        }
    }

    out
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, out: &mut String) {
    let mut coords = ring.coords_iter();
    let Some(first) = coords.next() else { return };

    out.push_str(&format!("M{:.3},{:.3}", first.x, first.y));
    for coord in coords {
        out.push_str(&format!("L{:.3},{:.3}", coord.x, coord.y));
    }
    out.push('Z');
}

/// Escape text for use in SVG/HTML content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
