use serde::{Deserialize, Serialize};

/// Usage terms the catalog quotes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermLength {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl TermLength {
    pub const fn label(self) -> &'static str {
        match self {
            TermLength::OneMonth => "1 Month",
            TermLength::ThreeMonths => "3 Months",
            TermLength::SixMonths => "6 Months",
            TermLength::OneYear => "1 Year",
        }
    }

    /// Parse a user-facing term string. Canonical labels are matched first;
    /// descriptive campaign labels fall back to the alias table below.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        let parsed = match normalized.as_str() {
            "1 month" | "one month" | "monthly" => Some(TermLength::OneMonth),
            "3 months" | "three months" | "quarterly" => Some(TermLength::ThreeMonths),
            "6 months" | "six months" => Some(TermLength::SixMonths),
            "1 year" | "one year" | "12 months" | "annual" => Some(TermLength::OneYear),
            _ => None,
        };
        parsed.or_else(|| descriptive_alias(&normalized))
    }
}

/// Broadcast-flight labels mapped onto the nearest standard term.
///
/// These pairings are a best guess carried over from how campaigns are
/// usually booked; they are kept out of the resolver so the table can be
/// corrected in one place once the rate-guide publisher confirms them.
const DESCRIPTIVE_TERM_ALIASES: &[(&str, TermLength)] = &[
    ("4 weeks", TermLength::OneMonth),
    ("13 weeks", TermLength::ThreeMonths),
    ("26 weeks", TermLength::SixMonths),
    ("39 weeks", TermLength::SixMonths),
    ("52 weeks", TermLength::OneYear),
];

fn descriptive_alias(normalized: &str) -> Option<TermLength> {
    DESCRIPTIVE_TERM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, term)| *term)
}

/// Usage-scope tiers used by automotive and similar bracketed campaigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketTier {
    Tier1,
    Tier2,
    Tier3,
}

impl MarketTier {
    pub const fn label(self) -> &'static str {
        match self {
            MarketTier::Tier1 => "Tier 1",
            MarketTier::Tier2 => "Tier 2",
            MarketTier::Tier3 => "Tier 3",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "tier 1" | "tier1" | "1" => Some(MarketTier::Tier1),
            "tier 2" | "tier2" | "2" => Some(MarketTier::Tier2),
            "tier 3" | "tier3" | "3" => Some(MarketTier::Tier3),
            _ => None,
        }
    }
}

/// Market-size brackets for promo and imaging work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSize {
    Small,
    Medium,
    Large,
}

impl MarketSize {
    pub const fn label(self) -> &'static str {
        match self {
            MarketSize::Small => "Small Market",
            MarketSize::Medium => "Medium Market",
            MarketSize::Large => "Large Market",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "small" | "small market" => Some(MarketSize::Small),
            "medium" | "medium market" | "mid" | "mid market" => Some(MarketSize::Medium),
            "large" | "large market" | "major" | "major market" => Some(MarketSize::Large),
            _ => None,
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_term_labels_parse() {
        assert_eq!(TermLength::parse("1 Year"), Some(TermLength::OneYear));
        assert_eq!(TermLength::parse("  3 months "), Some(TermLength::ThreeMonths));
        assert_eq!(TermLength::parse("6 Months"), Some(TermLength::SixMonths));
        assert_eq!(TermLength::parse("weekly"), None);
    }

    #[test]
    fn descriptive_flight_labels_map_to_standard_terms() {
        assert_eq!(TermLength::parse("13 weeks"), Some(TermLength::ThreeMonths));
        assert_eq!(TermLength::parse("52 Weeks"), Some(TermLength::OneYear));
        assert_eq!(TermLength::parse("39 weeks"), Some(TermLength::SixMonths));
    }

    #[test]
    fn tiers_and_markets_parse_loose_spellings() {
        assert_eq!(MarketTier::parse("Tier 2"), Some(MarketTier::Tier2));
        assert_eq!(MarketTier::parse("tier3"), Some(MarketTier::Tier3));
        assert_eq!(MarketSize::parse("LARGE"), Some(MarketSize::Large));
        assert_eq!(MarketSize::parse("mid market"), Some(MarketSize::Medium));
        assert_eq!(MarketSize::parse("galactic"), None);
    }
}
