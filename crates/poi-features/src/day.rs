//! Day-of-week tokens and day-set expansion.

use std::collections::BTreeSet;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ParseError;

lazy_static! {
    static ref DAY_RANGE_REGEX: Regex =
        Regex::new(r"^(пн|вт|ср|чт|пт|сб|вс)-(пн|вт|ср|чт|пт|сб|вс)").unwrap();
    static ref DAY_LIST_SEPARATOR: Regex = Regex::new(r",\s*").unwrap();
}

/// Day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Canonical week order.
    pub const ALL: [Weekday; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Two-letter abbreviation used in the dataset.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Mon => "пн",
            Self::Tue => "вт",
            Self::Wed => "ср",
            Self::Thu => "чт",
            Self::Fri => "пт",
            Self::Sat => "сб",
            Self::Sun => "вс",
        }
    }

    /// Position in [`Weekday::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Self::Sat | Self::Sun)
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    /// Exact token match; callers lowercase first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.token() == s)
            .ok_or_else(|| ParseError::UnknownDay(s.to_string()))
    }
}

/// Set of days iterated in week order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySet(BTreeSet<Weekday>);

impl DaySet {
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Days in the set that fall Monday through Friday.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.iter().filter(|d| !d.is_weekend())
    }

    /// Days in the set that fall on Saturday or Sunday.
    pub fn weekend_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.iter().filter(Weekday::is_weekend)
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Expand a day token into the set of days it names.
///
/// Accepts a range (`пн-пт`) or a comma list (`сб,вс`, `сб, вс`). Unknown
/// list items are dropped. A range is read as a slice of the Monday-first
/// week, so a wrapping range such as `сб-пн` yields an empty set.
///
/// # Examples
/// ```
/// use poi_features::{expand_days, Weekday};
/// assert_eq!(expand_days("пн-пт").len(), 5);
/// assert!(expand_days("СБ,ВС").contains(Weekday::Sun));
/// assert!(expand_days("xx-yy").is_empty());
/// ```
pub fn expand_days(days_part: &str) -> DaySet {
    let days_part = days_part.to_lowercase();

    if let Some(caps) = DAY_RANGE_REGEX.captures(&days_part) {
        let (Ok(first), Ok(last)) = (caps[1].parse::<Weekday>(), caps[2].parse::<Weekday>())
        else {
            return DaySet::default();
        };
        return Weekday::ALL
            .into_iter()
            .filter(|d| (first.index()..=last.index()).contains(&d.index()))
            .collect();
    }

    DAY_LIST_SEPARATOR
        .split(&days_part)
        .filter_map(|token| token.parse::<Weekday>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(day.token().parse::<Weekday>(), Ok(day));
        }
    }

    #[test]
    fn unknown_token() {
        assert_eq!(
            "mon".parse::<Weekday>(),
            Err(ParseError::UnknownDay("mon".to_string()))
        );
    }

    #[test]
    fn weekend_partition() {
        let weekend: Vec<_> = Weekday::ALL.into_iter().filter(Weekday::is_weekend).collect();
        assert_eq!(weekend, vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn expand_range() {
        let days = expand_days("пн-пт");
        assert_eq!(
            days.iter().collect::<Vec<_>>(),
            vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
        );
        assert_eq!(days.weekend_days().count(), 0);
    }

    #[test]
    fn expand_single_day_range() {
        let days = expand_days("ср-ср");
        assert_eq!(days.iter().collect::<Vec<_>>(), vec![Weekday::Wed]);
    }

    #[test]
    fn expand_list() {
        let days = expand_days("сб,вс");
        assert_eq!(days.iter().collect::<Vec<_>>(), vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(expand_days("пн, ср").len(), 2);
    }

    #[test]
    fn list_drops_unknown_items() {
        let days = expand_days("пн,xx,пт");
        assert_eq!(days.iter().collect::<Vec<_>>(), vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn wrapping_range_is_empty() {
        assert!(expand_days("сб-пн").is_empty());
    }

    #[test]
    fn range_ignores_trailing_items() {
        let days = expand_days("пн-ср,сб");
        assert_eq!(days.len(), 3);
        assert!(!days.contains(Weekday::Sat));
    }

    #[test]
    fn case_folded() {
        assert_eq!(expand_days("ПН-ВС").len(), 7);
    }

    #[test]
    fn unknown_input_is_empty() {
        assert!(expand_days("xx-yy").is_empty());
        assert!(expand_days("").is_empty());
    }
}
