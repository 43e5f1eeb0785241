use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resolved price quotation: display text, numeric bounds, and the label
/// describing the selection that produced it.
///
/// `low == high == 0.0` marks a guidance-only entry ("Union Rate", "Custom
/// Retainer") that carries no numeric quote and cannot join a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub text: String,
    pub low: f64,
    pub high: f64,
    pub description: String,
}

impl RateEntry {
    pub fn numeric(low: f64, high: f64, description: String) -> Self {
        Self {
            text: range_text(low, high),
            low,
            high,
            description,
        }
    }

    pub fn informational(note: &str, description: String) -> Self {
        Self {
            text: note.to_string(),
            low: 0.0,
            high: 0.0,
            description,
        }
    }

    pub fn is_informational(&self) -> bool {
        self.low == 0.0 && self.high == 0.0
    }
}

/// Usage parameters supplied alongside a category/sub-type selection.
///
/// The bag is deliberately open: every field is optional, unknown fields are
/// ignored, and numeric fields accept numbers, numeric strings, or junk
/// (junk lands as `None` and the applicable rule floor takes over). Callers
/// may also use the camelCase spellings common in web front ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteParams {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub term: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub market: Option<String>,
    #[serde(
        default,
        alias = "numberOfTags",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_tags: Option<f64>,
    #[serde(
        default,
        alias = "numberOfSpots",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_spots: Option<f64>,
    #[serde(
        default,
        alias = "wordCount",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub word_count: Option<f64>,
    #[serde(
        default,
        alias = "numberOfMinutes",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_minutes: Option<f64>,
    #[serde(
        default,
        alias = "numberOfHours",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_hours: Option<f64>,
    #[serde(
        default,
        alias = "numberOfVoices",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_voices: Option<f64>,
    #[serde(
        default,
        alias = "numberOfPrompts",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_prompts: Option<f64>,
    #[serde(
        default,
        alias = "numberOfEpisodes",
        deserialize_with = "lenient_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_episodes: Option<f64>,
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }))
}

/// Render a dollar amount: thousands separators, cents only when present.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let dollars = cents / 100;
    let fraction = (cents % 100).abs();
    if fraction == 0 {
        format!("${}", group_thousands(dollars))
    } else {
        format!("${}.{fraction:02}", group_thousands(dollars))
    }
}

/// Render a unitless count for descriptions ("1,500 words").
pub(crate) fn format_count(quantity: f64) -> String {
    let rounded = (quantity * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        group_thousands(rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Range text uses an en dash between bounds and collapses to a single
/// amount when the bounds coincide.
pub(crate) fn range_text(low: f64, high: f64) -> String {
    if (low - high).abs() < f64::EPSILON {
        format_usd(low)
    } else {
        format!("{}\u{2013}{}", format_usd(low), format_usd(high))
    }
}

fn group_thousands(value: i64) -> String {
    let raw = value.abs().to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (index, digit) in raw.chars().enumerate() {
        if index > 0 && (raw.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
