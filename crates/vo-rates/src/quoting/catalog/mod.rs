//! The static rate catalog.
//!
//! Every quotable (category, sub-type) pair appears exactly once in the rule
//! tables below, tagged with the pricing rule that governs it. The tables are
//! pure data: resolution lives in [`crate::quoting::engine`].

mod broadcast;
mod digital;
mod interactive;
mod narration;
pub mod terms;

use serde::{Deserialize, Serialize};

pub use terms::{MarketSize, MarketTier, TermLength};

/// Service categories offered by the quoting tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Radio,
    Tv,
    DigitalVisual,
    NonBroadcast,
    ELearning,
    Audiobooks,
    Interactive,
    Telephony,
    Tours,
    Promo,
    Podcast,
}

impl Category {
    pub const fn id(self) -> &'static str {
        match self {
            Category::Radio => "radio",
            Category::Tv => "tv",
            Category::DigitalVisual => "digital_visual",
            Category::NonBroadcast => "non_broadcast",
            Category::ELearning => "elearning",
            Category::Audiobooks => "audiobooks",
            Category::Interactive => "interactive",
            Category::Telephony => "telephony",
            Category::Tours => "tours",
            Category::Promo => "promo",
            Category::Podcast => "podcast",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Radio => "Radio",
            Category::Tv => "Television",
            Category::DigitalVisual => "Digital & Web Visual",
            Category::NonBroadcast => "Non-Broadcast",
            Category::ELearning => "E-Learning",
            Category::Audiobooks => "Audiobooks",
            Category::Interactive => "Games & Interactive",
            Category::Telephony => "Telephony",
            Category::Tours => "Tours & Exhibits",
            Category::Promo => "Promo & Imaging",
            Category::Podcast => "Podcast",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|category| category.id() == normalized)
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Radio,
            Category::Tv,
            Category::DigitalVisual,
            Category::NonBroadcast,
            Category::ELearning,
            Category::Audiobooks,
            Category::Interactive,
            Category::Telephony,
            Category::Tours,
            Category::Promo,
            Category::Podcast,
        ]
    }

    /// Sub-type names quotable under this category, in catalog order.
    pub fn sub_types(self) -> Vec<&'static str> {
        rule_tables()
            .iter()
            .flat_map(|table| table.iter())
            .filter(|def| def.category == self)
            .map(|def| def.sub_type)
            .collect()
    }
}

/// Billable unit a quantity-driven rule multiplies against. Several units
/// read the same parameter field; the distinction is how the work is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Tag,
    Spot,
    Word,
    FinishedMinute,
    FinishedHour,
    StudioHour,
    SessionHour,
    Voice,
    Prompt,
    Episode,
}

/// Flat bracket: applies when the quantity is at most `up_to` units.
#[derive(Debug, Clone, Copy)]
pub struct RateBand {
    pub up_to: f64,
    pub low: f64,
    pub high: f64,
}

/// A band whose bounds are interpolated linearly between its endpoints
/// rather than quoted flat.
#[derive(Debug, Clone, Copy)]
pub struct InterpolatedBand {
    pub from: f64,
    pub to: f64,
    pub low_from: f64,
    pub low_to: f64,
    pub high_from: f64,
    pub high_to: f64,
}

/// The closed set of pricing rule shapes. Dispatch over this enum is
/// exhaustive; adding a rule shape is a compile-visible change.
#[derive(Debug, Clone, Copy)]
pub enum PricingRule {
    /// Term selector to display string ("$900–$1,500", "Union Rate").
    TermTable(&'static [(TermLength, &'static str)]),
    /// Usage-tier selector to display string.
    TierTable(&'static [(MarketTier, &'static str)]),
    /// Market-size selector to display string.
    MarketTable(&'static [(MarketSize, &'static str)]),
    /// Selector-less display string.
    Flat(&'static str),
    /// Linear per-unit pricing; quantities below `floor` are raised to it.
    PerUnit {
        unit: Unit,
        low: f64,
        high: f64,
        floor: f64,
    },
    /// Bracketed pricing, with an optional interpolated band above the flat
    /// brackets and an optional flat per-unit extrapolation past the top.
    Banded {
        unit: Unit,
        bands: &'static [RateBand],
        interpolated: Option<InterpolatedBand>,
        overflow_per_unit: Option<f64>,
    },
    /// First-unit price plus per-additional-unit pricing. When
    /// `half_unit_blocks` is set the additional rate is per half unit and
    /// partial halves round up.
    Stepped {
        unit: Unit,
        first_low: f64,
        first_high: f64,
        additional_low: f64,
        additional_high: f64,
        half_unit_blocks: bool,
    },
    /// Per-word subtotal plus per-session-hour subtotal beyond the included
    /// hours, summed elementwise.
    WordsPlusSession {
        per_word_low: f64,
        per_word_high: f64,
        session_hour_low: f64,
        session_hour_high: f64,
        included_hours: f64,
    },
    /// Guidance-only entry with no numeric quote.
    Note(&'static str),
}

/// One quotable (category, sub-type) pair and its governing rule.
#[derive(Debug)]
pub struct RuleDef {
    pub category: Category,
    pub sub_type: &'static str,
    pub rule: PricingRule,
}

fn rule_tables() -> [&'static [RuleDef]; 4] {
    [
        broadcast::RULES,
        digital::RULES,
        narration::RULES,
        interactive::RULES,
    ]
}

/// Look up the rule for a (category, sub-type) pair. Sub-type matching is
/// case-insensitive; absence is the only failure mode.
pub fn find_rule(category: Category, sub_type: &str) -> Option<&'static RuleDef> {
    let wanted = sub_type.trim();
    rule_tables()
        .iter()
        .flat_map(|table| table.iter())
        .find(|def| def.category == category && def.sub_type.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.id()), Some(*category));
        }
        assert_eq!(Category::parse("RADIO"), Some(Category::Radio));
        assert_eq!(Category::parse("broadcast"), None);
    }

    #[test]
    fn every_category_lists_at_least_one_sub_type() {
        for category in Category::all() {
            assert!(
                !category.sub_types().is_empty(),
                "category {} has no catalog entries",
                category.id()
            );
        }
    }

    #[test]
    fn sub_type_lookup_is_case_insensitive() {
        let def = find_rule(Category::DigitalVisual, "digital tags").expect("rule present");
        assert_eq!(def.sub_type, "Digital Tags");
        assert!(find_rule(Category::Radio, "Digital Tags").is_none());
    }

    #[test]
    fn no_duplicate_sub_types_within_a_category() {
        for category in Category::all() {
            let mut names = category.sub_types();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicates under {}", category.id());
        }
    }
}
