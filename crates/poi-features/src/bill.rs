//! Average-bill price extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::BillConfig;

lazy_static! {
    static ref NUMBER_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref DEFAULT_PARSER: BillParser = BillParser::default();
}

/// Median of the first two values (their mean), or the only value.
///
/// Values past the second are ignored.
pub fn median_of_first_two(values: &[f64]) -> Option<f64> {
    match values {
        [] => None,
        [only] => Some(*only),
        [a, b, ..] => Some((a + b) / 2.0),
    }
}

/// Beer price extractor bound to a key phrase.
#[derive(Debug, Clone, Default)]
pub struct BillParser {
    config: BillConfig,
}

impl BillParser {
    pub fn new(config: BillConfig) -> Self {
        Self { config }
    }

    /// Read the beer glass price from an `avg_bill` value.
    ///
    /// Requires the key phrase; a `from-to` range collapses to its midpoint.
    pub fn parse(&self, value: Option<&str>) -> Option<f64> {
        let text = value?.trim().to_lowercase();

        if !text.contains(self.config.key_phrase.as_str()) {
            tracing::trace!("No beer price phrase in {:?}", text);
            return None;
        }

        // Digit runs too long for u64 still parse as f64
        let numbers: Vec<f64> = NUMBER_REGEX
            .find_iter(&text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        median_of_first_two(&numbers)
    }
}

/// Extract the beer glass price with the default key phrase.
///
/// # Examples
/// ```
/// use poi_features::parse_middle_beer_cup;
/// assert_eq!(parse_middle_beer_cup(Some("Цена бокала пива: 150 ₽")), Some(150.0));
/// assert_eq!(parse_middle_beer_cup(Some("Средний счёт: 1000 ₽")), None);
/// ```
pub fn parse_middle_beer_cup(value: Option<&str>) -> Option<f64> {
    DEFAULT_PARSER.parse(value)
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn parse_middle_beer_cup_ffi(value: Option<String>) -> Option<f64> {
    parse_middle_beer_cup(value.as_deref())
}
