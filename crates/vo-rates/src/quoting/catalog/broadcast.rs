//! Terrestrial broadcast rates: radio, television, and promo/imaging work.
//!
//! Range strings follow the rate guide's published format ("$900–$1,500");
//! union-scale work is listed as guidance only.

use super::terms::{MarketSize, MarketTier, TermLength};
use super::{Category, PricingRule, RuleDef, Unit};

pub(super) static RULES: &[RuleDef] = &[
    RuleDef {
        category: Category::Radio,
        sub_type: "Local – Regional (Terrestrial)",
        rule: PricingRule::TermTable(&[
            (TermLength::OneMonth, "$250–$400"),
            (TermLength::ThreeMonths, "$500–$850"),
            (TermLength::SixMonths, "$700–$1,200"),
            (TermLength::OneYear, "$900–$1,500"),
        ]),
    },
    RuleDef {
        category: Category::Radio,
        sub_type: "National (Terrestrial)",
        rule: PricingRule::TermTable(&[
            (TermLength::OneMonth, "$800–$1,200"),
            (TermLength::ThreeMonths, "$1,500–$2,500"),
            (TermLength::SixMonths, "$2,000–$3,250"),
            (TermLength::OneYear, "$2,500–$4,000"),
        ]),
    },
    RuleDef {
        category: Category::Radio,
        sub_type: "Streaming Audio (Digital Only)",
        rule: PricingRule::TermTable(&[
            (TermLength::ThreeMonths, "$350–$600"),
            (TermLength::SixMonths, "$550–$900"),
            (TermLength::OneYear, "$750–$1,250"),
        ]),
    },
    RuleDef {
        category: Category::Radio,
        sub_type: "Additional Spots (Same Session)",
        rule: PricingRule::PerUnit {
            unit: Unit::Spot,
            low: 125.0,
            high: 200.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Radio,
        sub_type: "Tags",
        rule: PricingRule::PerUnit {
            unit: Unit::Tag,
            low: 100.0,
            high: 150.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Radio,
        sub_type: "Network (Union Scale)",
        rule: PricingRule::Note("Union Rate"),
    },
    RuleDef {
        category: Category::Tv,
        sub_type: "Local – Regional (Cable)",
        rule: PricingRule::TermTable(&[
            (TermLength::OneMonth, "$350–$500"),
            (TermLength::ThreeMonths, "$600–$1,000"),
            (TermLength::SixMonths, "$850–$1,400"),
            (TermLength::OneYear, "$1,100–$1,800"),
        ]),
    },
    RuleDef {
        category: Category::Tv,
        sub_type: "National (Cable)",
        rule: PricingRule::TermTable(&[
            (TermLength::ThreeMonths, "$2,000–$3,500"),
            (TermLength::SixMonths, "$2,750–$4,500"),
            (TermLength::OneYear, "$3,500–$6,000"),
        ]),
    },
    RuleDef {
        category: Category::Tv,
        sub_type: "National (Broadcast Network)",
        rule: PricingRule::Note("Union Rate"),
    },
    // Tier 1 manufacturer campaigns are union work; dealer tiers are quoted.
    RuleDef {
        category: Category::Tv,
        sub_type: "Automotive",
        rule: PricingRule::TierTable(&[
            (MarketTier::Tier1, "Union Rate"),
            (MarketTier::Tier2, "$1,500–$2,500"),
            (MarketTier::Tier3, "$800–$1,200"),
        ]),
    },
    RuleDef {
        category: Category::Tv,
        sub_type: "Mnemonics",
        rule: PricingRule::Note("Varies greatly; negotiated per usage with the brand"),
    },
    RuleDef {
        category: Category::Tv,
        sub_type: "Tags",
        rule: PricingRule::PerUnit {
            unit: Unit::Tag,
            low: 150.0,
            high: 250.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Promo,
        sub_type: "TV Promo",
        rule: PricingRule::MarketTable(&[
            (MarketSize::Small, "$350–$500"),
            (MarketSize::Medium, "$500–$850"),
            (MarketSize::Large, "$850–$1,500"),
        ]),
    },
    RuleDef {
        category: Category::Promo,
        sub_type: "Radio Imaging",
        rule: PricingRule::MarketTable(&[
            (MarketSize::Small, "$250–$400"),
            (MarketSize::Medium, "$400–$700"),
            (MarketSize::Large, "$700–$1,200"),
        ]),
    },
];
