mod parse;

use tracing::debug;

use super::catalog::{
    self, Category, InterpolatedBand, MarketSize, MarketTier, PricingRule, TermLength, Unit,
};
use super::domain::{format_count, QuoteParams, RateEntry};
use parse::ParsedRange;

/// Stateless resolver mapping (category, sub-type, parameters) onto the
/// catalog's pricing rules.
///
/// Resolution never fails loudly: unknown selections, missing selectors, and
/// malformed quantities all collapse to `None` or a floored quantity, so the
/// caller's "no rate shown" state stays intact.
#[derive(Debug, Default)]
pub struct RateEngine;

impl RateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a selection to a concrete rate entry, or nothing when the
    /// selection is unknown or incomplete.
    pub fn resolve(
        &self,
        category: &str,
        sub_type: &str,
        params: &QuoteParams,
    ) -> Option<RateEntry> {
        let category = Category::parse(category)?;
        let def = catalog::find_rule(category, sub_type)?;
        let description = compose_description(def.sub_type, params);
        let entry = apply_rule(&def.rule, params, description);
        if let Some(entry) = &entry {
            debug!(
                category = category.id(),
                sub_type = def.sub_type,
                low = entry.low,
                high = entry.high,
                "rate resolved"
            );
        }
        entry
    }
}

fn apply_rule(rule: &PricingRule, params: &QuoteParams, description: String) -> Option<RateEntry> {
    match rule {
        PricingRule::TermTable(table) => {
            let term = TermLength::parse(params.term.as_deref()?)?;
            let text = table
                .iter()
                .find(|(candidate, _)| *candidate == term)
                .map(|(_, text)| *text)?;
            Some(entry_from_text(text, description))
        }
        PricingRule::TierTable(table) => {
            let tier = MarketTier::parse(params.tier.as_deref()?)?;
            let text = table
                .iter()
                .find(|(candidate, _)| *candidate == tier)
                .map(|(_, text)| *text)?;
            Some(entry_from_text(text, description))
        }
        PricingRule::MarketTable(table) => {
            let market = MarketSize::parse(params.market.as_deref()?)?;
            let text = table
                .iter()
                .find(|(candidate, _)| *candidate == market)
                .map(|(_, text)| *text)?;
            Some(entry_from_text(text, description))
        }
        PricingRule::Flat(text) => Some(entry_from_text(text, description)),
        PricingRule::PerUnit {
            unit,
            low,
            high,
            floor,
        } => {
            let quantity = clamp_quantity(quantity_for(params, *unit), *floor);
            Some(RateEntry::numeric(
                round_cents(low * quantity),
                round_cents(high * quantity),
                description,
            ))
        }
        PricingRule::Banded {
            unit,
            bands,
            interpolated,
            overflow_per_unit,
        } => {
            let quantity = quantity_for(params, *unit)?;
            let quantity = if quantity.is_finite() {
                quantity.max(0.0)
            } else {
                0.0
            };

            if let Some(band) = bands.iter().find(|band| quantity <= band.up_to) {
                return Some(RateEntry::numeric(band.low, band.high, description));
            }
            if let Some(segment) = interpolated {
                if quantity <= segment.to {
                    let (low, high) = interpolate(segment, quantity);
                    return Some(RateEntry::numeric(low, high, description));
                }
            }
            overflow_per_unit.map(|per_unit| {
                let amount = round_cents(per_unit * quantity);
                RateEntry::numeric(amount, amount, description)
            })
        }
        PricingRule::Stepped {
            unit,
            first_low,
            first_high,
            additional_low,
            additional_high,
            half_unit_blocks,
        } => {
            let quantity = clamp_quantity(quantity_for(params, *unit), 1.0);
            let blocks = if *half_unit_blocks {
                ((quantity - 1.0) * 2.0).ceil()
            } else {
                (quantity - 1.0).ceil()
            }
            .max(0.0);
            Some(RateEntry::numeric(
                round_cents(first_low + blocks * additional_low),
                round_cents(first_high + blocks * additional_high),
                description,
            ))
        }
        PricingRule::WordsPlusSession {
            per_word_low,
            per_word_high,
            session_hour_low,
            session_hour_high,
            included_hours,
        } => {
            let words = clamp_quantity(params.word_count, 1.0);
            let hours = params
                .number_of_hours
                .filter(|h| h.is_finite())
                .unwrap_or(*included_hours);
            let extra_hours = (hours - included_hours).ceil().max(0.0);
            Some(RateEntry::numeric(
                round_cents(words * per_word_low + extra_hours * session_hour_low),
                round_cents(words * per_word_high + extra_hours * session_hour_high),
                description,
            ))
        }
        PricingRule::Note(note) => Some(RateEntry::informational(note, description)),
    }
}

fn entry_from_text(text: &str, description: String) -> RateEntry {
    match parse::parse_range_text(text) {
        ParsedRange::Range { low, high } => RateEntry::numeric(low, high, description),
        ParsedRange::Single(value) => RateEntry::numeric(value, value, description),
        ParsedRange::Informational => RateEntry::informational(text, description),
    }
}

/// Quantities default to 1 when unset and never drop below the rule floor.
fn clamp_quantity(quantity: Option<f64>, floor: f64) -> f64 {
    let quantity = quantity.filter(|q| q.is_finite()).unwrap_or(1.0);
    quantity.max(floor)
}

fn quantity_for(params: &QuoteParams, unit: Unit) -> Option<f64> {
    match unit {
        Unit::Tag => params.number_of_tags,
        Unit::Spot => params.number_of_spots,
        Unit::Word => params.word_count,
        Unit::FinishedMinute => params.number_of_minutes,
        Unit::FinishedHour | Unit::StudioHour | Unit::SessionHour => params.number_of_hours,
        Unit::Voice => params.number_of_voices,
        Unit::Prompt => params.number_of_prompts,
        Unit::Episode => params.number_of_episodes,
    }
}

fn interpolate(segment: &InterpolatedBand, quantity: f64) -> (f64, f64) {
    let span = segment.to - segment.from;
    let t = ((quantity - segment.from) / span).clamp(0.0, 1.0);
    let low = segment.low_from + t * (segment.low_to - segment.low_from);
    let high = segment.high_from + t * (segment.high_to - segment.high_from);
    (round_cents(low), round_cents(high))
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Build the human-readable label for a selection: sub-type first, then the
/// parameters that shaped the quote, most significant first.
fn compose_description(sub_type: &'static str, params: &QuoteParams) -> String {
    let mut parts: Vec<String> = vec![sub_type.to_string()];

    if let Some(term) = params.term.as_deref() {
        match TermLength::parse(term) {
            Some(parsed) => parts.push(parsed.label().to_string()),
            None if !term.trim().is_empty() => parts.push(term.trim().to_string()),
            None => {}
        }
    }
    if let Some(tier) = params.tier.as_deref() {
        match MarketTier::parse(tier) {
            Some(parsed) => parts.push(parsed.label().to_string()),
            None if !tier.trim().is_empty() => parts.push(tier.trim().to_string()),
            None => {}
        }
    }
    if let Some(market) = params.market.as_deref() {
        match MarketSize::parse(market) {
            Some(parsed) => parts.push(parsed.label().to_string()),
            None if !market.trim().is_empty() => parts.push(market.trim().to_string()),
            None => {}
        }
    }

    push_count(&mut parts, params.number_of_minutes, "min", "min");
    push_count(&mut parts, params.word_count, "word", "words");
    push_count(&mut parts, params.number_of_hours, "hr", "hr");
    push_count(&mut parts, params.number_of_spots, "spot", "spots");
    push_count(&mut parts, params.number_of_tags, "tag", "tags");
    push_count(&mut parts, params.number_of_voices, "voice", "voices");
    push_count(&mut parts, params.number_of_prompts, "prompt", "prompts");
    push_count(&mut parts, params.number_of_episodes, "episode", "episodes");

    parts.join(" - ")
}

fn push_count(parts: &mut Vec<String>, quantity: Option<f64>, singular: &str, plural: &str) {
    if let Some(quantity) = quantity.filter(|q| q.is_finite() && *q > 0.0) {
        let noun = if (quantity - 1.0).abs() < f64::EPSILON {
            singular
        } else {
            plural
        };
        parts.push(format!("{} {noun}", format_count(quantity)));
    }
}
