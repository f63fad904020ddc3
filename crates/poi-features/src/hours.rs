//! Opening-hours feature extraction.
//!
//! A schedule string is matched against increasingly specific shapes; the
//! first shape that matches produces the record:
//!
//! 1. round-the-clock keyword together with the every-day keyword or the
//!    full-week range (`ежедневно, круглосуточно`, `пн-вс круглосуточно`)
//! 2. every-day keyword plus a range starting at midnight and lasting at
//!    least 23.99 hours (`ежедневно 00:00-24:00`)
//! 3. every-day keyword plus any range, repeated on all seven days
//! 4. semicolon-separated `<days> <range>` segments, summed per day
//!
//! Shapes 1 and 2 produce the saturated 24/7 record. Text that matches none
//! of the shapes yields the empty record.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::time_range::TIME_TOKEN_REGEX;
use crate::{expand_days, parse_time_range, HoursConfig, TimeInterval, EN_DASH};

/// Minimum length of a midnight-anchored daily range treated as 24 hours.
///
/// At minute resolution only a full day qualifies (`00:00-24:00`,
/// `00:00-00:00`); `00:00-23:59` stays on the daily path.
pub const NEAR_FULL_DAY_HOURS: f64 = 23.99;

const WEEKDAY_COUNT: f64 = 5.0;
const WEEKEND_DAY_COUNT: f64 = 2.0;

lazy_static! {
    static ref SEGMENT_REGEX: Regex =
        Regex::new(r"^([а-я,\-]+)\s+([0-9]{1,2}:[0-9]{2}-[0-9]{1,2}:[0-9]{2})").unwrap();
    static ref DEFAULT_PARSER: HoursParser = HoursParser::default();
}

/// Features derived from one `hours` value.
///
/// Field names double as the output column names.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct HoursFeatures {
    /// Open around the clock every day
    pub is_24_7: bool,
    /// Open at some point between 22:00 and 06:00
    pub is_night: bool,
    /// Open at some point between 06:00 and 22:00
    pub is_day: bool,
    /// Open on at least one weekday
    pub on_week: bool,
    /// Open on Saturday or Sunday
    pub on_weekend: bool,
    /// Total opening hours Monday through Friday
    pub hours_on_week: f64,
    /// Total opening hours on Saturday and Sunday
    pub hours_on_weekend: f64,
}

impl HoursFeatures {
    /// Output column names, in record order.
    pub const COLUMNS: [&'static str; 7] = [
        "is_24_7",
        "is_night",
        "is_day",
        "on_week",
        "on_weekend",
        "hours_on_week",
        "hours_on_weekend",
    ];

    /// Record for a venue that never closes.
    pub fn round_the_clock() -> Self {
        Self {
            is_24_7: true,
            is_night: true,
            is_day: true,
            on_week: true,
            on_weekend: true,
            hours_on_week: 24.0 * WEEKDAY_COUNT,
            hours_on_weekend: 24.0 * WEEKEND_DAY_COUNT,
        }
    }
}

/// Hours extractor bound to a keyword table and day/night windows.
#[derive(Debug, Clone, Default)]
pub struct HoursParser {
    config: HoursConfig,
}

impl HoursParser {
    /// Keywords in `config` must be lowercase; input text is lowercased before matching.
    pub fn new(config: HoursConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HoursConfig {
        &self.config
    }

    /// Extract features from an optional `hours` value.
    ///
    /// Missing input gives the empty record.
    pub fn parse(&self, hours: Option<&str>) -> HoursFeatures {
        let Some(raw) = hours else {
            return HoursFeatures::default();
        };

        let text = raw.to_lowercase().replace(EN_DASH, "-");
        let keywords = &self.config.keywords;

        if self.has_round_the_clock_phrase(&text) {
            tracing::debug!("Round-the-clock phrase in {:?}", raw);
            return HoursFeatures::round_the_clock();
        }

        if text.starts_with(keywords.every_day.as_str()) {
            if let Some(iv) = first_time_range(&text) {
                if iv.start == 0.0 && iv.duration() >= NEAR_FULL_DAY_HOURS {
                    tracing::debug!("Daily near-24h range in {:?}", raw);
                    return HoursFeatures::round_the_clock();
                }
                tracing::trace!("Daily range {:?} in {:?}", iv, raw);
                return self.daily(&iv);
            }
        }

        tracing::trace!("Parsing {:?} as segmented schedule", raw);
        self.parse_segments(&text)
    }

    fn has_round_the_clock_phrase(&self, text: &str) -> bool {
        let keywords = &self.config.keywords;
        text.contains(keywords.round_the_clock.as_str())
            && (text.contains(keywords.every_day.as_str())
                || text.contains(keywords.full_week.as_str()))
    }

    // One range repeated identically on every day of the week
    fn daily(&self, iv: &TimeInterval) -> HoursFeatures {
        let windows = &self.config.windows;
        let hours = iv.duration();

        HoursFeatures {
            is_24_7: false,
            is_night: windows.intersects_night(iv),
            is_day: windows.intersects_day(iv),
            on_week: true,
            on_weekend: true,
            hours_on_week: hours * WEEKDAY_COUNT,
            hours_on_weekend: hours * WEEKEND_DAY_COUNT,
        }
    }

    fn parse_segments(&self, text: &str) -> HoursFeatures {
        let windows = &self.config.windows;
        let mut features = HoursFeatures::default();

        for segment in text.split(';').map(str::trim) {
            let Some(caps) = SEGMENT_REGEX.captures(segment) else {
                if !segment.is_empty() {
                    tracing::debug!("Skipping unrecognized hours segment: {:?}", segment);
                }
                continue;
            };

            let days = expand_days(&caps[1]);
            let Some(iv) = parse_time_range(&caps[2]) else {
                tracing::debug!("Skipping segment with bad time range: {:?}", segment);
                continue;
            };
            let hours = iv.duration();

            features.is_day |= windows.intersects_day(&iv);
            features.is_night |= windows.intersects_night(&iv);

            // Each listed day gets the full segment duration
            for day in days.iter() {
                if day.is_weekend() {
                    features.on_weekend = true;
                    features.hours_on_weekend += hours;
                } else {
                    features.on_week = true;
                    features.hours_on_week += hours;
                }
            }
        }

        features
    }
}

fn first_time_range(text: &str) -> Option<TimeInterval> {
    TIME_TOKEN_REGEX
        .find(text)
        .and_then(|m| parse_time_range(m.as_str()))
}

/// Extract hours features using the default keyword table and windows.
///
/// # Examples
/// ```
/// use poi_features::hours_parser;
///
/// let daily = hours_parser(Some("ежедневно 10:00-22:00"));
/// assert!(daily.is_day && !daily.is_night);
/// assert_eq!(daily.hours_on_week, 60.0);
///
/// assert!(hours_parser(Some("пн-вс круглосуточно")).is_24_7);
/// assert!(!hours_parser(None).on_week);
/// ```
pub fn hours_parser(hours: Option<&str>) -> HoursFeatures {
    DEFAULT_PARSER.parse(hours)
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn hours_parser_ffi(hours: Option<String>) -> HoursFeatures {
    hours_parser(hours.as_deref())
}
