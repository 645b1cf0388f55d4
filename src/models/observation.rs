use crate::logic::units::ms_to_knots;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Columns a realtime file must carry for a reading to be usable
const REQUIRED_COLUMNS: [&str; 7] = ["YY", "MM", "DD", "hh", "mm", "WDIR", "WSPD"];

/// NDBC marker for a missing value
const MISSING: &str = "MM";

/// Latest buoy/C-MAN reading, speeds in the feed's m/s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSample {
    pub station: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub wind_direction_deg: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    pub wind_gust_ms: Option<f64>,
}

impl ObservationSample {
    /// Decode the newest row of an NDBC `realtime2` standard meteorological
    /// file. Rows are newest first; the header is the first line with its
    /// `#` stripped and any further `#` lines (units) are skipped.
    pub fn from_realtime_text(station: &str, text: &str) -> Option<Self> {
        let mut header: Option<Vec<&str>> = None;
        let mut row: Option<Vec<&str>> = None;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(rest) = line.strip_prefix('#') {
                if header.is_none() {
                    header = Some(rest.split_whitespace().collect());
                }
                continue;
            }
            if header.is_none() {
                header = Some(line.split_whitespace().collect());
                continue;
            }
            row = Some(line.split_whitespace().collect());
            break;
        }

        let (header, row) = (header?, row?);
        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !header.contains(*c)) {
            tracing::debug!("NDBC {} file has no {} column", station, missing);
            return None;
        }

        let year: i32 = column(&header, &row, "YY")?.parse().ok()?;
        let year = if year < 100 { year + 2000 } else { year };

        Some(Self {
            station: station.to_string(),
            year,
            month: column(&header, &row, "MM")?.parse().ok()?,
            day: column(&header, &row, "DD")?.parse().ok()?,
            hour: column(&header, &row, "hh")?.parse().ok()?,
            minute: column(&header, &row, "mm")?.parse().ok()?,
            wind_direction_deg: reading(column(&header, &row, "WDIR")),
            wind_speed_ms: reading(column(&header, &row, "WSPD")),
            wind_gust_ms: reading(column(&header, &row, "GST")),
        })
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, 0)
            .map(|naive| naive.and_utc())
    }

    /// Sustained wind in knots, one decimal
    pub fn wind_speed_kt(&self) -> Option<f64> {
        self.wind_speed_ms.map(ms_to_knots)
    }

    /// Gust in knots, one decimal
    pub fn wind_gust_kt(&self) -> Option<f64> {
        self.wind_gust_ms.map(ms_to_knots)
    }
}

fn column<'a>(header: &[&str], row: &[&'a str], name: &str) -> Option<&'a str> {
    let index = header.iter().position(|h| *h == name)?;
    row.get(index).copied()
}

fn reading(value: Option<&str>) -> Option<f64> {
    value
        .filter(|v| *v != MISSING)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn sample() -> ObservationSample {
        ObservationSample {
            station: "CHII2".into(),
            year: 2025,
            month: 8,
            day: 15,
            hour: 18,
            minute: 40,
            wind_direction_deg: Some(220.0),
            wind_speed_ms: Some(5.0),
            wind_gust_ms: Some(7.2),
        }
    }

    #[test]
    fn observed_at_utc() {
        let ts = sample().observed_at().unwrap();
        assert_eq!(ts.year(), 2025);
        assert_eq!(ts.hour(), 18);
        assert_eq!(ts.minute(), 40);
    }

    #[test]
    fn invalid_calendar_date_has_no_timestamp() {
        let mut s = sample();
        s.month = 13;
        assert!(s.observed_at().is_none());
    }

    #[test]
    fn speeds_in_knots() {
        let s = sample();
        assert!((s.wind_speed_kt().unwrap() - 9.7).abs() < 1e-9);
        assert!((s.wind_gust_kt().unwrap() - 14.0).abs() < 1e-9);

        let calm = ObservationSample {
            wind_speed_ms: None,
            wind_gust_ms: None,
            ..sample()
        };
        assert!(calm.wind_speed_kt().is_none());
        assert!(calm.wind_gust_kt().is_none());
    }

    const REALTIME: &str = "\
#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE
#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft
2025 08 15 18 40 220  5.0  7.2    MM    MM    MM  MM 1015.2  24.1  23.0  17.9   MM -0.4    MM
2025 08 15 18 30 210  4.6  6.7    MM    MM    MM  MM 1015.3  24.0  23.0  17.8   MM   MM    MM
";

    #[test]
    fn decodes_newest_row() {
        let s = ObservationSample::from_realtime_text("CHII2", REALTIME).unwrap();
        assert_eq!(s, sample());
        assert_eq!(s.station, "CHII2");
    }

    #[test]
    fn two_digit_year_and_no_comment_header() {
        let text = "YY MM DD hh mm WDIR WSPD\n25 08 15 06 00 90 3.0\n";
        let s = ObservationSample::from_realtime_text("X", text).unwrap();
        assert_eq!(s.year, 2025);
        assert_eq!(s.hour, 6);
        assert_eq!(s.wind_direction_deg, Some(90.0));
        assert!(s.wind_gust_ms.is_none());
    }

    #[test]
    fn missing_markers_are_unset() {
        let text = "#YY MM DD hh mm WDIR WSPD GST\n#yr mo dy hr mn degT m/s m/s\n2025 08 15 18 40 MM MM MM\n";
        let s = ObservationSample::from_realtime_text("X", text).unwrap();
        assert!(s.wind_direction_deg.is_none());
        assert!(s.wind_speed_ms.is_none());
        assert!(s.wind_speed_kt().is_none());
    }

    #[test]
    fn required_columns_and_timestamp() {
        // No WSPD column
        let text = "#YY MM DD hh mm WDIR\n2025 08 15 18 40 220\n";
        assert!(ObservationSample::from_realtime_text("X", text).is_none());
        // Unparseable hour
        let text = "#YY MM DD hh mm WDIR WSPD\n2025 08 15 MM 40 220 5.0\n";
        assert!(ObservationSample::from_realtime_text("X", text).is_none());
        // Header only
        let text = "#YY MM DD hh mm WDIR WSPD\n#yr mo dy hr mn degT m/s\n";
        assert!(ObservationSample::from_realtime_text("X", text).is_none());
        assert!(ObservationSample::from_realtime_text("X", "").is_none());
    }
}
