//! Locates the part of a marine bulletin that describes one period.
//!
//! Bulletins are laid out as headings such as `.TODAY...` or `TONIGHT.....`
//! each followed by free text. A section runs from its heading to the next
//! heading line or the end of the bulletin.

use crate::models::PeriodLabel;
use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Any heading line: short run of letters, spaces, slashes or hyphens, then
/// at least three periods
static ANY_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^\s*\.?[A-Z][A-Z /-]{2,}(?:\s+NIGHT)?\.{3,}").expect("heading pattern")
});

static PERIOD_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("period run"));

/// Text of one bulletin period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletinSection {
    /// Label whose heading was found, or the requested label for the
    /// first-paragraph fallback
    pub label: PeriodLabel,
    /// Trimmed span including the heading line
    pub text: String,
    pub from_heading: bool,
}

impl BulletinSection {
    /// Section text after the heading's period run
    pub fn body(&self) -> &str {
        if !self.from_heading {
            return &self.text;
        }
        match PERIOD_RUN_RE.find(&self.text) {
            Some(m) => self.text[m.end()..].trim(),
            None => &self.text,
        }
    }
}

/// Collapse whitespace and uppercase
pub fn normalize_heading(heading: &str) -> String {
    heading
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Span for an arbitrary heading, e.g. "TONIGHT"
pub fn find_heading(bulletin: &str, heading: &str) -> Option<String> {
    let normalized = normalize_heading(heading);
    if normalized.is_empty() {
        return None;
    }
    let text = bulletin.replace('\r', "");

    // Step 1: the requested heading
    let words: Vec<String> = normalized.split(' ').map(regex_lite::escape).collect();
    let pattern = format!(r"(?mi)^\s*\.?{}(?:\s+NIGHT)?\.{{3,}}", words.join(r"\s+"));
    let start_re = Regex::new(&pattern).ok()?;
    let start = start_re.find(&text)?;

    // Step 2: the next heading of any kind, or end of text
    let end = ANY_HEADING_RE
        .find_at(&text, start.end())
        .map(|m| m.start())
        .unwrap_or(text.len());

    let span = text[start.start()..end].trim();
    if span.is_empty() {
        None
    } else {
        Some(span.to_string())
    }
}

/// Section for exactly this label
pub fn locate(bulletin: &str, label: PeriodLabel) -> Option<BulletinSection> {
    find_heading(bulletin, label.heading()).map(|text| BulletinSection {
        label,
        text,
        from_heading: true,
    })
}

/// Section for `label`. Present-day labels fall back through the other
/// present-day headings and finally to the bulletin's first paragraph.
pub fn locate_with_fallback(bulletin: &str, label: PeriodLabel) -> Option<BulletinSection> {
    if let Some(section) = locate(bulletin, label) {
        return Some(section);
    }
    if !label.is_present_day() {
        return None;
    }

    for candidate in PeriodLabel::PRESENT_DAY {
        if let Some(section) = locate(bulletin, candidate) {
            tracing::debug!(
                "No {} section, using {}",
                label.heading(),
                candidate.heading()
            );
            return Some(section);
        }
    }

    tracing::debug!("No present-day heading found, using first paragraph");
    first_paragraph(bulletin).map(|text| BulletinSection {
        label,
        text,
        from_heading: false,
    })
}

/// Text up to the first blank line, ignoring leading blank lines
pub fn first_paragraph(bulletin: &str) -> Option<String> {
    let text = bulletin.replace('\r', "");
    let paragraph: Vec<&str> = text
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty())
        .collect();

    let joined = paragraph.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Best present-day label with a section in the bulletin, TODAY otherwise
pub fn present_day_label(bulletin: &str) -> PeriodLabel {
    if bulletin.trim().is_empty() {
        return PeriodLabel::Today;
    }
    PeriodLabel::PRESENT_DAY
        .into_iter()
        .find(|label| locate(bulletin, *label).is_some())
        .unwrap_or(PeriodLabel::Today)
}
