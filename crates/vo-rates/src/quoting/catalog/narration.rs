//! Long-form narration rates: corporate, e-learning, and audiobooks.

use super::{Category, PricingRule, RuleDef, Unit};

pub(super) static RULES: &[RuleDef] = &[
    // Session work bills flat: the recording-time scale quotes a single
    // amount rather than a range.
    RuleDef {
        category: Category::NonBroadcast,
        sub_type: "Corporate & Industrial Narration – Recording Time Scale",
        rule: PricingRule::Stepped {
            unit: Unit::SessionHour,
            first_low: 525.0,
            first_high: 525.0,
            additional_low: 262.0,
            additional_high: 262.0,
            half_unit_blocks: false,
        },
    },
    RuleDef {
        category: Category::NonBroadcast,
        sub_type: "Corporate & Industrial Narration – Finished Minute Scale",
        rule: PricingRule::PerUnit {
            unit: Unit::FinishedMinute,
            low: 40.0,
            high: 60.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::NonBroadcast,
        sub_type: "Explainer Video (Web, Single Use)",
        rule: PricingRule::Flat("$350–$1,000"),
    },
    RuleDef {
        category: Category::NonBroadcast,
        sub_type: "Medical Narration (Word + Session Scale)",
        rule: PricingRule::WordsPlusSession {
            per_word_low: 0.20,
            per_word_high: 0.30,
            session_hour_low: 250.0,
            session_hour_high: 350.0,
            included_hours: 1.0,
        },
    },
    RuleDef {
        category: Category::ELearning,
        sub_type: "Per Word",
        rule: PricingRule::PerUnit {
            unit: Unit::Word,
            low: 0.15,
            high: 0.25,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::ELearning,
        sub_type: "Per Finished Minute",
        rule: PricingRule::PerUnit {
            unit: Unit::FinishedMinute,
            low: 20.0,
            high: 35.0,
            floor: 1.0,
        },
    },
    // Studio time is bookable in half-hour increments.
    RuleDef {
        category: Category::ELearning,
        sub_type: "Per Raw Studio Hour",
        rule: PricingRule::PerUnit {
            unit: Unit::StudioHour,
            low: 300.0,
            high: 450.0,
            floor: 0.5,
        },
    },
    RuleDef {
        category: Category::Audiobooks,
        sub_type: "Per Finished Hour (Indie)",
        rule: PricingRule::PerUnit {
            unit: Unit::FinishedHour,
            low: 150.0,
            high: 250.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Audiobooks,
        sub_type: "Per Finished Hour (Publisher)",
        rule: PricingRule::PerUnit {
            unit: Unit::FinishedHour,
            low: 225.0,
            high: 350.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Audiobooks,
        sub_type: "Major Publisher (Union Scale)",
        rule: PricingRule::Note("Union Rate"),
    },
];
