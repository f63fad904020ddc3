//! Keyword tables and window settings (defaults match the source dataset).

use serde::{Deserialize, Serialize};

use crate::HourWindows;

/// Phrases that mark a schedule as round-the-clock or daily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct HoursKeywords {
    pub round_the_clock: String,
    pub every_day: String,
    /// Day range spelling the whole week
    pub full_week: String,
}

impl Default for HoursKeywords {
    fn default() -> Self {
        Self {
            round_the_clock: "круглосуточно".to_string(),
            every_day: "ежедневно".to_string(),
            full_week: "пн-вс".to_string(),
        }
    }
}

/// Settings for [`crate::HoursParser`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct HoursConfig {
    #[serde(default)]
    pub windows: HourWindows,
    #[serde(default)]
    pub keywords: HoursKeywords,
}

/// Settings for [`crate::BillParser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct BillConfig {
    /// Lowercase phrase that must appear for a price to be read
    pub key_phrase: String,
}

impl Default for BillConfig {
    fn default() -> Self {
        Self {
            key_phrase: "цена бокала пива".to_string(),
        }
    }
}
