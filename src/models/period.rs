use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Day/period label a caller asks conditions for
///
/// Serialized as its uppercase heading, e.g. "REST OF TODAY" or "SATURDAY".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PeriodLabel {
    RestOfToday,
    Today,
    Tomorrow,
    ThisAfternoon,
    LateThisAfternoon,
    ThisMorning,
    Daytime,
    Weekday(Weekday),
}

impl PeriodLabel {
    /// Present-day labels in the order bulletins are searched for them
    pub const PRESENT_DAY: [PeriodLabel; 6] = [
        PeriodLabel::RestOfToday,
        PeriodLabel::Today,
        PeriodLabel::ThisAfternoon,
        PeriodLabel::LateThisAfternoon,
        PeriodLabel::ThisMorning,
        PeriodLabel::Daytime,
    ];

    /// Uppercase heading text as it appears in bulletins
    pub fn heading(&self) -> &'static str {
        match self {
            PeriodLabel::RestOfToday => "REST OF TODAY",
            PeriodLabel::Today => "TODAY",
            PeriodLabel::Tomorrow => "TOMORROW",
            PeriodLabel::ThisAfternoon => "THIS AFTERNOON",
            PeriodLabel::LateThisAfternoon => "LATE THIS AFTERNOON",
            PeriodLabel::ThisMorning => "THIS MORNING",
            PeriodLabel::Daytime => "DAYTIME",
            PeriodLabel::Weekday(day) => match day {
                Weekday::Mon => "MONDAY",
                Weekday::Tue => "TUESDAY",
                Weekday::Wed => "WEDNESDAY",
                Weekday::Thu => "THURSDAY",
                Weekday::Fri => "FRIDAY",
                Weekday::Sat => "SATURDAY",
                Weekday::Sun => "SUNDAY",
            },
        }
    }

    /// Case-insensitive; spaces, hyphens and underscores are interchangeable
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        let label = match normalized.as_str() {
            "REST OF TODAY" => PeriodLabel::RestOfToday,
            "TODAY" => PeriodLabel::Today,
            "TOMORROW" => PeriodLabel::Tomorrow,
            "THIS AFTERNOON" => PeriodLabel::ThisAfternoon,
            "LATE THIS AFTERNOON" => PeriodLabel::LateThisAfternoon,
            "THIS MORNING" => PeriodLabel::ThisMorning,
            "DAYTIME" => PeriodLabel::Daytime,
            "MONDAY" => PeriodLabel::Weekday(Weekday::Mon),
            "TUESDAY" => PeriodLabel::Weekday(Weekday::Tue),
            "WEDNESDAY" => PeriodLabel::Weekday(Weekday::Wed),
            "THURSDAY" => PeriodLabel::Weekday(Weekday::Thu),
            "FRIDAY" => PeriodLabel::Weekday(Weekday::Fri),
            "SATURDAY" => PeriodLabel::Weekday(Weekday::Sat),
            "SUNDAY" => PeriodLabel::Weekday(Weekday::Sun),
            _ => return None,
        };
        Some(label)
    }

    /// Whether the label names some part of the current day
    pub fn is_present_day(&self) -> bool {
        Self::PRESENT_DAY.contains(self)
    }
}

impl std::fmt::Display for PeriodLabel {
    /// Title case, e.g. "Rest Of Today"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let titled: Vec<String> = self
            .heading()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            })
            .collect();
        write!(f, "{}", titled.join(" "))
    }
}

impl From<PeriodLabel> for String {
    fn from(label: PeriodLabel) -> Self {
        label.heading().to_string()
    }
}

impl TryFrom<String> for PeriodLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PeriodLabel::from_str(&value).ok_or_else(|| format!("unknown period label '{}'", value))
    }
}
