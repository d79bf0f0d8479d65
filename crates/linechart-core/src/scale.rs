// File: crates/linechart-core/src/scale.rs
// Summary: Linear domain-to-layout scale used for both axes.

/// Linear mapping from a data domain to a layout range. The vertical axis is
/// built with an inverted range (`plot_h .. 0`) so the domain max lands at
/// the top of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// Build a scale over `[d0, d1] -> [r0, r1]`. A degenerate domain
    /// (d0 == d1) is widened by 1.0 so mapping stays defined.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Build from the min/max of `values`, ignoring non-finite entries.
    /// Fails when no finite value remains to anchor the domain.
    pub fn from_extent(
        values: impl IntoIterator<Item = f64>,
        range: (f64, f64),
    ) -> Result<Self, &'static str> {
        match extent(values) {
            Some(domain) => Ok(Self::new(domain, range)),
            None => Err("empty numeric domain"),
        }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Min/max of the finite entries of `values`, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }
    if any { Some((min, max)) } else { None }
}
