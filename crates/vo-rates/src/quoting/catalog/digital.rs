//! Digital visual usage and podcast rates.

use super::terms::TermLength;
use super::{Category, PricingRule, RuleDef, Unit};

pub(super) static RULES: &[RuleDef] = &[
    RuleDef {
        category: Category::DigitalVisual,
        sub_type: "Web Usage (Organic)",
        rule: PricingRule::TermTable(&[
            (TermLength::ThreeMonths, "$400–$700"),
            (TermLength::SixMonths, "$600–$1,000"),
            (TermLength::OneYear, "$800–$1,400"),
        ]),
    },
    RuleDef {
        category: Category::DigitalVisual,
        sub_type: "Paid Placement (Pre-Roll / OTT)",
        rule: PricingRule::TermTable(&[
            (TermLength::ThreeMonths, "$750–$1,250"),
            (TermLength::SixMonths, "$1,100–$1,900"),
            (TermLength::OneYear, "$1,500–$2,500"),
        ]),
    },
    RuleDef {
        category: Category::DigitalVisual,
        sub_type: "Digital Tags",
        rule: PricingRule::PerUnit {
            unit: Unit::Tag,
            low: 175.0,
            high: 225.0,
            floor: 1.0,
        },
    },
    // Point-of-sale placements price like broadcast; not quoted here.
    RuleDef {
        category: Category::DigitalVisual,
        sub_type: "Point of Sale",
        rule: PricingRule::Note("Refer to TV rates"),
    },
    RuleDef {
        category: Category::DigitalVisual,
        sub_type: "Social Media Spokesperson",
        rule: PricingRule::Note("Custom Retainer"),
    },
    RuleDef {
        category: Category::Podcast,
        sub_type: "Intro & Outro Package",
        rule: PricingRule::Flat("$250–$500"),
    },
    RuleDef {
        category: Category::Podcast,
        sub_type: "Host-Read Spots (Per Episode)",
        rule: PricingRule::PerUnit {
            unit: Unit::Episode,
            low: 50.0,
            high: 100.0,
            floor: 1.0,
        },
    },
];
