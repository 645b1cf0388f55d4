use serde::{Deserialize, Serialize};

/// 16-point compass bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    /// All points clockwise from north, 22.5° apart
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }

    /// Parse an abbreviation ("sw") or a spelled-out direction ("southwest",
    /// "south-southwest"). Case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_uppercase();

        if let Some(point) = Self::ALL.iter().find(|p| p.as_str() == cleaned) {
            return Some(*point);
        }

        // Spelled out: collapse each word to its initial
        let abbrev = cleaned
            .replace("NORTH", "N")
            .replace("SOUTH", "S")
            .replace("EAST", "E")
            .replace("WEST", "W");
        Self::ALL.iter().find(|p| p.as_str() == abbrev).copied()
    }

    /// Nearest point to a bearing in degrees, wrapping at 360°
    pub fn from_degrees(deg: f64) -> Option<Self> {
        if !deg.is_finite() || deg < 0.0 {
            return None;
        }
        let idx = ((deg / 22.5) + 0.5).floor() as usize % 16;
        Some(Self::ALL[idx])
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive wind speed range in knots. `lo <= hi` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnotRange {
    lo: u32,
    hi: u32,
}

impl KnotRange {
    /// Builds a range from two endpoints in either order
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn single(value: u32) -> Self {
        Self::new(value, value)
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Integer midpoint, floor of the sum halved
    pub fn midpoint(&self) -> u32 {
        self.lo + (self.hi - self.lo) / 2
    }

    /// Smallest range containing both this range and `value`
    pub fn widen_to(&self, value: u32) -> Self {
        Self {
            lo: self.lo.min(value),
            hi: self.hi.max(value),
        }
    }
}

/// Wind signal pulled from text, a grid period or a buoy.
///
/// Both fields empty means no wind signal was found, not calm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindEstimate {
    pub bearing: Option<CompassPoint>,
    pub speed: Option<KnotRange>,
}

impl WindEstimate {
    pub fn new(bearing: Option<CompassPoint>, speed: Option<KnotRange>) -> Self {
        Self { bearing, speed }
    }

    pub fn is_empty(&self) -> bool {
        self.bearing.is_none() && self.speed.is_none()
    }
}

impl std::fmt::Display for WindEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.bearing, self.speed) {
            (Some(b), Some(s)) => write!(f, "{} {}–{} kt", b, s.lo, s.hi),
            (None, Some(s)) => write!(f, "{}–{} kt", s.lo, s.hi),
            (Some(b), None) => write!(f, "{}", b),
            (None, None) => write!(f, "—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_from_abbreviation() {
        assert_eq!(CompassPoint::from_str("sw"), Some(CompassPoint::SW));
        assert_eq!(CompassPoint::from_str("NNE"), Some(CompassPoint::NNE));
        assert_eq!(CompassPoint::from_str(" w "), Some(CompassPoint::W));
        assert_eq!(CompassPoint::from_str("VRB"), None);
        assert_eq!(CompassPoint::from_str(""), None);
    }

    #[test]
    fn compass_from_words() {
        assert_eq!(CompassPoint::from_str("southwest"), Some(CompassPoint::SW));
        assert_eq!(CompassPoint::from_str("North"), Some(CompassPoint::N));
        assert_eq!(
            CompassPoint::from_str("south-southeast"),
            Some(CompassPoint::SSE)
        );
    }

    #[test]
    fn compass_from_degrees_nearest_point() {
        assert_eq!(CompassPoint::from_degrees(0.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(11.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(11.25), Some(CompassPoint::NNE));
        assert_eq!(CompassPoint::from_degrees(90.0), Some(CompassPoint::E));
        assert_eq!(CompassPoint::from_degrees(225.0), Some(CompassPoint::SW));
        assert_eq!(CompassPoint::from_degrees(350.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(360.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(-5.0), None);
        assert_eq!(CompassPoint::from_degrees(f64::NAN), None);
    }

    #[test]
    fn knot_range_never_inverted() {
        let r = KnotRange::new(15, 10);
        assert_eq!((r.lo(), r.hi()), (10, 15));
        assert!(KnotRange::single(7).lo() <= KnotRange::single(7).hi());
    }

    #[test]
    fn knot_range_midpoint_floors() {
        assert_eq!(KnotRange::new(10, 12).midpoint(), 11);
        assert_eq!(KnotRange::new(10, 15).midpoint(), 12);
    }

    #[test]
    fn knot_range_widen() {
        let r = KnotRange::new(10, 12);
        assert_eq!(r.widen_to(20), KnotRange::new(10, 20));
        assert_eq!(r.widen_to(3), KnotRange::new(3, 12));
        assert_eq!(r.widen_to(11), r);
    }

    #[test]
    fn wind_estimate_display() {
        let full = WindEstimate::new(Some(CompassPoint::SW), Some(KnotRange::new(10, 15)));
        assert_eq!(full.to_string(), "SW 10–15 kt");
        let speed_only = WindEstimate::new(None, Some(KnotRange::new(5, 10)));
        assert_eq!(speed_only.to_string(), "5–10 kt");
        assert_eq!(WindEstimate::default().to_string(), "—");
        assert!(WindEstimate::default().is_empty());
    }

    #[test]
    fn midpoint_of_extreme_range() {
        assert_eq!(KnotRange::new(10, 15).midpoint(), 12);
        assert_eq!(KnotRange::new(u32::MAX - 1, u32::MAX).midpoint(), u32::MAX - 1);
        assert_eq!(KnotRange::new(0, u32::MAX).midpoint(), u32::MAX / 2);
    }
}
