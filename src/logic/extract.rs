//! Field extractors for free-form forecast text.
//!
//! Each extractor is a pure function over a text fragment and knows nothing
//! about bulletin layout. A missing field is `None`, never an error, and an
//! unparseable number inside an otherwise matching phrase only drops that
//! match.

use crate::models::{CompassPoint, KnotRange, SkyDescriptor, WaveRange, WindEstimate};
use once_cell::sync::Lazy;
use regex_lite::Regex;

static DIRECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(NNE|ENE|ESE|SSE|SSW|WSW|WNW|NNW|N|NE|E|SE|S|SW|W|NW)\b")
        .expect("direction pattern")
});

static WIND_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*(?:to|-|–|—)\s*(\d{1,2})\s*(?:kt|knots?)")
        .expect("wind range pattern")
});

static WIND_SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*(?:kt|knots?)").expect("wind single pattern"));

static WAVE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2}(?:\.\d)?)\s*(?:to|-|–|—)\s*(\d{1,2}(?:\.\d)?)\s*(?:ft|feet)\b")
        .expect("wave range pattern")
});

/// Single height with the idioms that change its meaning captured alongside
static WAVE_SINGLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(less\s+than\s+|around\s+)?\b(\d{1,2}(?:\.\d)?)\s*(?:ft|feet)\b(\s+or\s+less)?",
    )
    .expect("wave single pattern")
});

static WAVE_LOW_BAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b1\s*ft\s*or\s*less|less\s*than\s*1\s*ft").expect("wave low band pattern")
});

static WAVE_AROUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\baround\s*(\d{1,2}(?:\.\d)?)\s*(?:ft|feet)").expect("wave around pattern")
});

/// Band used for "1 ft or less" / "less than 1 ft"
const LOW_BAND_FT: (f64, f64) = (0.5, 1.0);

/// Sea-state words, longest first so "very rough" wins over "rough"
static SEA_STATES: Lazy<Vec<(&'static str, WaveRange)>> = Lazy::new(|| {
    let mut table = vec![
        ("smooth", WaveRange::new(0.1, 0.5)),
        ("light chop", WaveRange::new(0.5, 1.5)),
        ("slight chop", WaveRange::new(0.5, 1.5)),
        ("choppy", WaveRange::new(1.5, 3.0)),
        ("moderate chop", WaveRange::new(1.5, 3.0)),
        ("rough", WaveRange::new(3.0, 5.0)),
        ("very rough", WaveRange::new(4.0, 7.0)),
        ("heavy chop", WaveRange::new(3.0, 5.0)),
    ];
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
});

static SKY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(sunny|clear|partly\s+cloudy|mostly\s+sunny|mostly\s+clear|cloudy|showers|thunderstorms?|storms?|thunder|rain|drizzle|overcast)\b",
    )
    .expect("sky pattern")
});

/// Words that mark a text span as a severe-weather hazard
const SEVERE_WORDS: [&str; 7] = [
    "hazard",
    "warning",
    "gale",
    "storm",
    "hurricane",
    "hvy freezing spray",
    "heavy freezing spray",
];

/// Wind bearing and speed found independently in `text`
pub fn extract_wind(text: &str) -> WindEstimate {
    let bearing = DIRECTION_RE
        .find(text)
        .and_then(|m| CompassPoint::from_str(m.as_str()));

    WindEstimate::new(bearing, extract_wind_speed(text))
}

/// "N to M kt" first, then a lone "N kt"
fn extract_wind_speed(text: &str) -> Option<KnotRange> {
    if let Some(caps) = WIND_RANGE_RE.captures(text) {
        return match (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            (Ok(lo), Ok(hi)) => Some(KnotRange::new(lo, hi)),
            _ => None,
        };
    }

    let caps = WIND_SINGLE_RE.captures(text)?;
    caps[1].parse::<u32>().ok().map(KnotRange::single)
}

/// Wave height band; the first rule that matches wins
pub fn extract_waves(text: &str) -> Option<WaveRange> {
    if text.trim().is_empty() {
        return None;
    }

    wave_range(text)
        .or_else(|| wave_single(text))
        .or_else(|| wave_idiom(text))
        .or_else(|| wave_sea_state(text))
}

fn wave_range(text: &str) -> Option<WaveRange> {
    let caps = WAVE_RANGE_RE.captures(text)?;
    let lo = caps[1].parse::<f64>().ok()?;
    let hi = caps[2].parse::<f64>().ok()?;
    Some(WaveRange::new(lo, hi))
}

/// Plain "N ft". Declines when the first height is an "around" call-out or a
/// one-foot low band, which `wave_idiom` handles.
fn wave_single(text: &str) -> Option<WaveRange> {
    let caps = WAVE_SINGLE_RE.captures(text)?;
    let value = caps[2].parse::<f64>().ok()?;

    let prefix = caps.get(1).map(|m| m.as_str().to_lowercase());
    let or_less = caps.get(3).is_some();
    let around = prefix.as_deref().is_some_and(|p| p.starts_with("around"));
    let less_than = prefix.as_deref().is_some_and(|p| p.starts_with("less"));

    if around || ((less_than || or_less) && value == 1.0) {
        return None;
    }
    Some(WaveRange::single(value))
}

fn wave_idiom(text: &str) -> Option<WaveRange> {
    if WAVE_LOW_BAND_RE.is_match(text) {
        return Some(WaveRange::new(LOW_BAND_FT.0, LOW_BAND_FT.1));
    }

    let caps = WAVE_AROUND_RE.captures(text)?;
    caps[1].parse::<f64>().ok().map(WaveRange::around)
}

fn wave_sea_state(text: &str) -> Option<WaveRange> {
    let lower = text.to_lowercase();
    SEA_STATES
        .iter()
        .find(|(phrase, _)| contains_phrase(&lower, phrase))
        .map(|(_, range)| *range)
}

/// Substring match that must start and end on word boundaries
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let is_word = |c: char| c.is_ascii_alphanumeric();
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(is_word) && !after.is_some_and(is_word)
    })
}

/// First sky keyword in `text`, lowercased
pub fn extract_sky(text: &str) -> Option<SkyDescriptor> {
    SKY_RE.find(text).map(|m| SkyDescriptor::new(m.as_str()))
}

/// Whether a text span mentions any severe-weather keyword
pub fn is_severe(text: &str) -> bool {
    let lower = text.to_lowercase();
    SEVERE_WORDS.iter().any(|w| lower.contains(w))
}
