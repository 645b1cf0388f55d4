use serde::{Deserialize, Serialize};

/// Short lowercase sky phrase, e.g. "partly cloudy" or "showers"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkyDescriptor(String);

impl SkyDescriptor {
    pub fn new(phrase: impl AsRef<str>) -> Self {
        let words: Vec<&str> = phrase.as_ref().split_whitespace().collect();
        Self(words.join(" ").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.0.contains(n))
    }
}

impl std::fmt::Display for SkyDescriptor {
    /// Title case, one capital per word
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let titled: Vec<String> = self
            .0
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect();
        write!(f, "{}", titled.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_lowercase() {
        assert_eq!(SkyDescriptor::new("Partly Cloudy").as_str(), "partly cloudy");
        assert_eq!(SkyDescriptor::new(" Mostly\n sunny ").as_str(), "mostly sunny");
    }

    #[test]
    fn display_title_case() {
        assert_eq!(SkyDescriptor::new("mostly sunny").to_string(), "Mostly Sunny");
        assert_eq!(SkyDescriptor::new("rain").to_string(), "Rain");
    }

    #[test]
    fn contains_any_substring() {
        let sky = SkyDescriptor::new("mostly sunny");
        assert!(sky.contains_any(&["sunny", "clear"]));
        assert!(!sky.contains_any(&["rain"]));
    }
}
