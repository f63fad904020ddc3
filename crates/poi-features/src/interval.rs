//! Day/night classification of opening intervals.
//!
//! Windows are compared in absolute hour space, so an interval that rolls
//! past midnight (`end > 24`) still overlaps the late-evening night window.

use serde::{Deserialize, Serialize};

use crate::TimeInterval;

/// Day window boundaries; the night window is the complement within one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct HourWindows {
    /// Start of daytime, inclusive
    pub day_start: f64,
    /// End of daytime, exclusive
    pub day_end: f64,
}

impl Default for HourWindows {
    fn default() -> Self {
        Self {
            day_start: 6.0,
            day_end: 22.0,
        }
    }
}

impl HourWindows {
    /// Night as `[day_end, 24)` and `[0, day_start)`.
    pub fn night_ranges(&self) -> [(f64, f64); 2] {
        [(self.day_end, 24.0), (0.0, self.day_start)]
    }

    /// Whether the interval has a non-empty overlap with the day window.
    pub fn intersects_day(&self, iv: &TimeInterval) -> bool {
        overlaps(iv, self.day_start, self.day_end)
    }

    /// Whether the interval has a non-empty overlap with either night range.
    pub fn intersects_night(&self, iv: &TimeInterval) -> bool {
        self.night_ranges()
            .iter()
            .any(|&(lo, hi)| overlaps(iv, lo, hi))
    }
}

// Touching at a boundary is not an overlap
fn overlaps(iv: &TimeInterval, lo: f64, hi: f64) -> bool {
    iv.start.max(lo) < iv.end.min(hi)
}

/// Day-window check with the default 06:00-22:00 window.
pub fn intersects_day(iv: &TimeInterval) -> bool {
    HourWindows::default().intersects_day(iv)
}

/// Night-window check with the default 22:00-06:00 window.
pub fn intersects_night(iv: &TimeInterval) -> bool {
    HourWindows::default().intersects_night(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> TimeInterval {
        TimeInterval::new(start, end)
    }

    #[test]
    fn day_window_edges() {
        assert!(intersects_day(&iv(6.0, 22.0)));
        assert!(!intersects_day(&iv(0.0, 6.0)));
        assert!(!intersects_day(&iv(22.0, 24.0)));
        assert!(intersects_day(&iv(5.0, 6.5)));
    }

    #[test]
    fn night_window() {
        assert!(intersects_night(&iv(20.0, 23.0)));
        assert!(!intersects_night(&iv(8.0, 18.0)));
        assert!(intersects_night(&iv(3.0, 7.0)));
        assert!(!intersects_night(&iv(10.0, 22.0)));
    }

    #[test]
    fn rollover_counts_as_night() {
        let late = iv(22.0, 26.0);
        assert!(intersects_night(&late));
        assert!(!intersects_day(&late));
    }

    #[test]
    fn custom_windows() {
        let windows = HourWindows {
            day_start: 8.0,
            day_end: 20.0,
        };
        assert!(windows.intersects_night(&iv(7.0, 9.0)));
        assert!(!windows.intersects_day(&iv(20.0, 23.0)));
    }
}
