//! Parsing for the catalog's published range strings.

/// Outcome of parsing a catalog display string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ParsedRange {
    Range { low: f64, high: f64 },
    Single(f64),
    Informational,
}

/// Parse `"$LOW–$HIGH"` into numeric bounds by stripping everything but
/// digits and decimal points on each side of the dash. A string without a
/// dash is a single amount; a string that yields no number at all is
/// guidance text.
pub(crate) fn parse_range_text(text: &str) -> ParsedRange {
    if let Some((left, right)) = text.split_once(['\u{2013}', '\u{2014}']) {
        match (numeric_part(left), numeric_part(right)) {
            (Some(low), Some(high)) => ParsedRange::Range { low, high },
            _ => ParsedRange::Informational,
        }
    } else {
        match numeric_part(text) {
            Some(value) => ParsedRange::Single(value),
            None => ParsedRange::Informational,
        }
    }
}

fn numeric_part(side: &str) -> Option<f64> {
    let digits: String = side
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_ranges_with_separators() {
        assert_eq!(
            parse_range_text("$900–$1,500"),
            ParsedRange::Range {
                low: 900.0,
                high: 1500.0
            }
        );
        assert_eq!(
            parse_range_text("$2,750–$4,500"),
            ParsedRange::Range {
                low: 2750.0,
                high: 4500.0
            }
        );
    }

    #[test]
    fn em_dash_separators_also_split() {
        assert_eq!(
            parse_range_text("$350\u{2014}$500"),
            ParsedRange::Range {
                low: 350.0,
                high: 500.0
            }
        );
    }

    #[test]
    fn single_amounts_collapse_to_one_value() {
        assert_eq!(parse_range_text("$1,049"), ParsedRange::Single(1049.0));
        assert_eq!(parse_range_text("525"), ParsedRange::Single(525.0));
    }

    #[test]
    fn guidance_strings_are_informational() {
        assert_eq!(parse_range_text("Union Rate"), ParsedRange::Informational);
        assert_eq!(parse_range_text("Custom Retainer"), ParsedRange::Informational);
        assert_eq!(
            parse_range_text("Union Rate – negotiated"),
            ParsedRange::Informational
        );
    }
}
