/// Linear mapping from a data domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    /// Map a domain value into the range. A degenerate domain (min == max,
    /// e.g. a perfectly flat series) maps everything to the range midpoint.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        // Inverted range, the usual SVG y orientation
        let scale = LinearScale::new().domain(0.0, 10.0).range(25.0, 0.0);
        assert_eq!(scale.scale(0.0), 25.0);
        assert_eq!(scale.scale(10.0), 0.0);
        assert_eq!(scale.scale(5.0), 12.5);
    }

    #[test]
    fn extrapolates_outside_the_domain() {
        let scale = LinearScale::new().domain(0.0, 10.0).range(0.0, 100.0);
        assert_eq!(scale.scale(-1.0), -10.0);
        assert_eq!(scale.scale(11.0), 110.0);
    }

    #[test]
    fn flat_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new().domain(42.0, 42.0).range(25.0, 0.0);
        assert_eq!(scale.scale(42.0), 12.5);
        assert_eq!(scale.scale(7.0), 12.5);
    }
}
