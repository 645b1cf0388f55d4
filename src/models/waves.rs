use serde::{Deserialize, Serialize};

/// Wave or sea height band in feet. `lo <= hi` always holds; a single
/// observed value has `lo == hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveRange {
    lo: f64,
    hi: f64,
}

impl WaveRange {
    /// Builds a band from two endpoints in either order
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn single(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Synthetic ±0.5 ft band around a called-out height, floored at 0.1 ft
    pub fn around(value: f64) -> Self {
        Self::new((value - 0.5).max(0.1), value + 0.5)
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }
}

impl std::fmt::Display for WaveRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if (self.hi - self.lo).abs() > 0.1 {
            write!(f, "{}–{} ft", self.lo, self.hi)
        } else {
            write!(f, "{} ft", self.lo)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_range_orders_endpoints() {
        let r = WaveRange::new(4.0, 2.0);
        assert_eq!(r.lo(), 2.0);
        assert_eq!(r.hi(), 4.0);
    }

    #[test]
    fn around_band() {
        let r = WaveRange::around(3.0);
        assert!((r.lo() - 2.5).abs() < 1e-9);
        assert!((r.hi() - 3.5).abs() < 1e-9);

        // Floors at 0.1 ft for small call-outs
        let small = WaveRange::around(0.5);
        assert!((small.lo() - 0.1).abs() < 1e-9);
        assert!((small.hi() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn display_collapses_narrow_band() {
        assert_eq!(WaveRange::new(2.0, 4.0).to_string(), "2–4 ft");
        assert_eq!(WaveRange::single(3.0).to_string(), "3 ft");
        assert_eq!(WaveRange::new(1.5, 3.0).to_string(), "1.5–3 ft");
    }
}
