//! Interactive, telephony, and tour/exhibit rates.

use super::{Category, InterpolatedBand, PricingRule, RateBand, RuleDef, Unit};

pub(super) static RULES: &[RuleDef] = &[
    RuleDef {
        category: Category::Interactive,
        sub_type: "Console & PC Games (Per Session Hour)",
        rule: PricingRule::PerUnit {
            unit: Unit::SessionHour,
            low: 200.0,
            high: 350.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Interactive,
        sub_type: "Mobile Game – Character Voices",
        rule: PricingRule::PerUnit {
            unit: Unit::Voice,
            low: 100.0,
            high: 200.0,
            floor: 1.0,
        },
    },
    // Educational content scales continuously between five and ten minutes;
    // past ten minutes only a flat per-minute figure is published.
    RuleDef {
        category: Category::Interactive,
        sub_type: "Mobile Game – Educational Content",
        rule: PricingRule::Banded {
            unit: Unit::FinishedMinute,
            bands: &[
                RateBand {
                    up_to: 2.0,
                    low: 250.0,
                    high: 350.0,
                },
                RateBand {
                    up_to: 5.0,
                    low: 350.0,
                    high: 500.0,
                },
            ],
            interpolated: Some(InterpolatedBand {
                from: 5.0,
                to: 10.0,
                low_from: 500.0,
                low_to: 750.0,
                high_from: 650.0,
                high_to: 950.0,
            }),
            overflow_per_unit: Some(95.0),
        },
    },
    RuleDef {
        category: Category::Telephony,
        sub_type: "IVR & Auto Attendant (Per Prompt)",
        rule: PricingRule::PerUnit {
            unit: Unit::Prompt,
            low: 12.0,
            high: 18.0,
            floor: 1.0,
        },
    },
    RuleDef {
        category: Category::Telephony,
        sub_type: "Message On Hold",
        rule: PricingRule::Flat("$200–$350"),
    },
    RuleDef {
        category: Category::Telephony,
        sub_type: "Voicemail Greeting",
        rule: PricingRule::Flat("$100–$150"),
    },
    // First hour booked whole; additional time bills in half-hour blocks.
    RuleDef {
        category: Category::Tours,
        sub_type: "Museum & Exhibit Tours",
        rule: PricingRule::Stepped {
            unit: Unit::SessionHour,
            first_low: 350.0,
            first_high: 450.0,
            additional_low: 100.0,
            additional_high: 150.0,
            half_unit_blocks: true,
        },
    },
    RuleDef {
        category: Category::Tours,
        sub_type: "Walking Tour Apps (Per Finished Minute)",
        rule: PricingRule::PerUnit {
            unit: Unit::FinishedMinute,
            low: 25.0,
            high: 40.0,
            floor: 1.0,
        },
    },
];
