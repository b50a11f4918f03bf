//! Fill and stroke colors for the migration map.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const REFERENCE_FILL: Rgb = Rgb::new(0x89, 0x53, 0xfc);
pub const INBOUND_FILL: Rgb = Rgb::new(0, 0, 255); // blue
pub const OUTBOUND_FILL: Rgb = Rgb::new(255, 192, 203); // pink
pub const NEUTRAL_FILL: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);
pub const HOVER_FILL: Rgb = Rgb::new(0xff, 0x9e, 0xe7);

pub const REGION_STROKE: Rgb = Rgb::new(255, 255, 255);
pub const OUTBOUND_ARC: Rgb = Rgb::new(255, 255, 0); // yellow
pub const INBOUND_ARC: Rgb = Rgb::new(255, 0, 0); // red

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_css_hex() {
        assert_eq!(HOVER_FILL.to_string(), "#ff9ee7");
        assert_eq!(INBOUND_FILL.to_string(), "#0000ff");
        assert_eq!(serde_json::to_string(&OUTBOUND_FILL).unwrap(), "\"#ffc0cb\"");
    }
}
