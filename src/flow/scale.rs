use crate::flow::NetMigration;

/// Linear map from a domain onto a range, optionally clamped to the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range, clamp: false }
    }

    pub fn clamped(self) -> Self { Self { clamp: true, ..self } }

    pub fn domain(&self) -> (f64, f64) { self.domain }

    pub fn range(&self) -> (f64, f64) { self.range }

    /// A zero-width or NaN domain maps every input to the middle of the range.
    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        let span = d1 - d0;
        let t = if span != 0.0 && !span.is_nan() { (x - d0) / span } else { 0.5 };
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };

        r0 + (r1 - r0) * t
    }
}

/// Stroke-width scale over `[0, max |difference|]`, ignoring unset and non-finite differences.
pub fn stroke_width_scale<T: NetMigration>(items: &[T], range: (f64, f64)) -> LinearScale {
    let max = items.iter()
        .filter_map(|item| item.difference())
        .map(f64::abs)
        .filter(|d| d.is_finite())
        .fold(0.0_f64, f64::max);

    LinearScale::new((0.0, max), range).clamped()
}
