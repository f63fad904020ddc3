//! Clock time range parsing (`HH:MM-HH:MM`).

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// En dash sometimes used in place of a hyphen between the two clock times.
pub const EN_DASH: char = '\u{2013}';

lazy_static! {
    // Anchored at the start only: trailing text after the range is ignored
    static ref TIME_RANGE_REGEX: Regex =
        Regex::new(r"^([0-9]{1,2}):([0-9]{2})-([0-9]{1,2}):([0-9]{2})").unwrap();

    /// Unanchored form, used to find the first range inside free text.
    pub(crate) static ref TIME_TOKEN_REGEX: Regex =
        Regex::new(r"[0-9]{1,2}:[0-9]{2}-[0-9]{1,2}:[0-9]{2}").unwrap();
}

/// Opening interval in hours since midnight.
///
/// For clock times within a day `end` is always greater than `start`; a range
/// that crosses midnight keeps counting past 24 (`22:00-02:00` is `22.0..26.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct TimeInterval {
    pub start: f64,
    pub end: f64,
}

impl TimeInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval in hours.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl FromStr for TimeInterval {
    type Err = ParseError;

    /// Parse `H:MM-H:MM` (one or two hour digits), accepting an en dash.
    ///
    /// Hour and minute values are not range-checked: `25:00` is read as 25.0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace(EN_DASH, "-");
        let invalid = || ParseError::InvalidTimeRange(s.to_string());

        let caps = TIME_RANGE_REGEX.captures(&normalized).ok_or_else(invalid)?;
        let mut fields = [0u32; 4];
        for (slot, i) in fields.iter_mut().zip(1..=4) {
            *slot = caps[i].parse().map_err(|_| invalid())?;
        }
        let [h1, m1, h2, m2] = fields;

        let start = f64::from(h1) + f64::from(m1) / 60.0;
        let mut end = f64::from(h2) + f64::from(m2) / 60.0;

        // Closing at or before opening means the range runs past midnight
        if end <= start {
            end += 24.0;
        }

        Ok(Self { start, end })
    }
}

/// Parse a time range, returning `None` when the text does not start with one.
///
/// # Examples
/// ```
/// use poi_features::parse_time_range;
/// let iv = parse_time_range("22:00-02:00").unwrap();
/// assert_eq!((iv.start, iv.end), (22.0, 26.0));
/// assert!(parse_time_range("closed").is_none());
/// ```
pub fn parse_time_range(time_range: &str) -> Option<TimeInterval> {
    time_range.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_range() {
        let iv = parse_time_range("10:00-18:30").unwrap();
        assert_eq!(iv, TimeInterval::new(10.0, 18.5));
        assert_eq!(iv.duration(), 8.5);
    }

    #[test]
    fn parse_rollover() {
        let iv = parse_time_range("22:00-02:00").unwrap();
        assert_eq!(iv, TimeInterval::new(22.0, 26.0));
    }

    #[test]
    fn equal_ends_span_full_day() {
        let iv = parse_time_range("00:00-00:00").unwrap();
        assert_eq!(iv, TimeInterval::new(0.0, 24.0));
    }

    #[test]
    fn parse_en_dash() {
        let iv = parse_time_range("9:00\u{2013}21:00").unwrap();
        assert_eq!(iv, TimeInterval::new(9.0, 21.0));
    }

    #[test]
    fn out_of_range_hours_accepted() {
        let iv = parse_time_range("25:00-26:00").unwrap();
        assert_eq!(iv, TimeInterval::new(25.0, 26.0));

        // Rollover only adds one day, so an out-of-range start can outrun the end
        let iv = parse_time_range("31:00-0:00").unwrap();
        assert_eq!(iv, TimeInterval::new(31.0, 24.0));
        assert_eq!(iv.duration(), -7.0);
    }

    #[test]
    fn trailing_text_ignored() {
        let iv = parse_time_range("08:00-20:00, перерыв").unwrap();
        assert_eq!(iv, TimeInterval::new(8.0, 20.0));
    }

    #[test]
    fn reject_non_leading_range() {
        assert!(parse_time_range("с 10:00-20:00").is_none());
        assert!(parse_time_range("10-20").is_none());
        assert!(parse_time_range("").is_none());
    }

    #[test]
    fn strict_parse_reports_input() {
        let err = "closed".parse::<TimeInterval>().unwrap_err();
        assert_eq!(err, ParseError::InvalidTimeRange("closed".to_string()));
    }

    #[test]
    fn token_regex_finds_embedded_range() {
        let m = TIME_TOKEN_REGEX.find("ежедневно с 10:00-22:00").unwrap();
        assert_eq!(m.as_str(), "10:00-22:00");
    }
}
