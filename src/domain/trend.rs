//! Per-bar trend classification.

use std::fmt;

/// Directional label a classifier assigns to one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Trend {
    /// Map a numeric trend output: 1 is bullish, -1 is bearish, anything else
    /// (including undefined values) is neutral.
    pub fn from_signal(signal: i64) -> Self {
        match signal {
            1 => Trend::Bullish,
            -1 => Trend::Bearish,
            _ => Trend::Neutral,
        }
    }

    /// Parse a recorded label. Unknown labels are `None` so the caller can
    /// report them before falling back to [`Trend::Neutral`].
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "bullish" | "bull" | "long" | "up" | "1" | "+1" => Some(Trend::Bullish),
            "bearish" | "bear" | "short" | "down" | "-1" => Some(Trend::Bearish),
            "neutral" | "none" | "flat" | "0" | "" => Some(Trend::Neutral),
            _ => None,
        }
    }

    /// Lenient parse: anything unrecognised is neutral.
    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }

    /// Text shown on the chart. Only a bullish bar reads "Bullish"; neutral
    /// bars share the bearish label.
    pub fn display_label(self) -> &'static str {
        match self {
            Trend::Bullish => "Bullish",
            Trend::Bearish | Trend::Neutral => "Bearish",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "bullish"),
            Trend::Bearish => write!(f, "bearish"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_signal_maps_known_values() {
        assert_eq!(Trend::from_signal(1), Trend::Bullish);
        assert_eq!(Trend::from_signal(-1), Trend::Bearish);
        assert_eq!(Trend::from_signal(0), Trend::Neutral);
    }

    #[test]
    fn from_signal_treats_undefined_as_neutral() {
        assert_eq!(Trend::from_signal(2), Trend::Neutral);
        assert_eq!(Trend::from_signal(i64::MIN), Trend::Neutral);
    }

    #[test]
    fn parse_label_is_case_insensitive() {
        assert_eq!(Trend::parse_label("Bullish"), Some(Trend::Bullish));
        assert_eq!(Trend::parse_label(" BEARISH "), Some(Trend::Bearish));
        assert_eq!(Trend::parse_label("-1"), Some(Trend::Bearish));
        assert_eq!(Trend::parse_label(""), Some(Trend::Neutral));
    }

    #[test]
    fn unknown_label_falls_back_to_neutral() {
        assert_eq!(Trend::parse_label("sideways?"), None);
        assert_eq!(Trend::from_label("sideways?"), Trend::Neutral);
    }

    #[test]
    fn display_label_groups_neutral_with_bearish() {
        assert_eq!(Trend::Bullish.display_label(), "Bullish");
        assert_eq!(Trend::Bearish.display_label(), "Bearish");
        assert_eq!(Trend::Neutral.display_label(), "Bearish");
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Trend::default(), Trend::Neutral);
    }
}
