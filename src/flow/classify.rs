use serde::{Deserialize, Serialize};

use crate::io::svg::{Rgb, INBOUND_FILL, NEUTRAL_FILL, OUTBOUND_FILL, REFERENCE_FILL};

/// Fill category of a region on the choropleth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillClass {
    /// The reference region itself.
    Reference,
    /// `difference >= 0`: more people arrived from the reference region than left for it.
    Inbound,
    /// `difference < 0`, or a difference that is not a number.
    Outbound,
    /// No migration record, under [`UnmatchedPolicy::Neutral`].
    Neutral,
}

impl FillClass {
    pub fn color(self) -> Rgb {
        match self {
            FillClass::Reference => REFERENCE_FILL,
            FillClass::Inbound => INBOUND_FILL,
            FillClass::Outbound => OUTBOUND_FILL,
            FillClass::Neutral => NEUTRAL_FILL,
        }
    }
}

/// How to fill a region that has no migration record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// An unset difference does not compare as `>= 0`, so it falls into the outbound fill.
    #[default]
    Outbound,
    /// Use a neutral gray.
    Neutral,
}

/// Pick the fill for a region. The reference region wins regardless of its counts.
pub fn classify(name: &str, difference: Option<f64>, reference: &str, unmatched: UnmatchedPolicy) -> FillClass {
    if name == reference { return FillClass::Reference }

    match difference {
        Some(d) if d >= 0.0 => FillClass::Inbound,
        Some(_) => FillClass::Outbound,
        None => match unmatched {
            UnmatchedPolicy::Outbound => FillClass::Outbound,
            UnmatchedPolicy::Neutral => FillClass::Neutral,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CA: &str = "California";

    #[test]
    fn sign_of_difference_picks_fill() {
        assert_eq!(classify("Texas", Some(20_000.0), CA, UnmatchedPolicy::Outbound), FillClass::Inbound);
        assert_eq!(classify("Nevada", Some(0.0), CA, UnmatchedPolicy::Outbound), FillClass::Inbound);
        assert_eq!(classify("New York", Some(-10_000.0), CA, UnmatchedPolicy::Outbound), FillClass::Outbound);
        assert_eq!(classify("Utah", Some(f64::NAN), CA, UnmatchedPolicy::Neutral), FillClass::Outbound);
    }

    #[test]
    fn reference_region_is_highlighted_regardless_of_counts() {
        for d in [Some(1e9), Some(-1e9), Some(f64::NAN), None] {
            assert_eq!(classify(CA, d, CA, UnmatchedPolicy::Outbound), FillClass::Reference);
        }
        assert_eq!(FillClass::Reference.color().to_string(), "#8953fc");
    }

    #[test]
    fn unmatched_region_follows_policy() {
        assert_eq!(classify("Oregon", None, CA, UnmatchedPolicy::default()), FillClass::Outbound);
        assert_eq!(classify("Oregon", None, CA, UnmatchedPolicy::Neutral), FillClass::Neutral);
    }
}
