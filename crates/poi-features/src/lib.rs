//! poi-features: Business-hours and average-bill feature extraction.
//!
//! Turns the free-text `hours` and `avg_bill` fields of a point-of-interest
//! dataset into fixed-shape feature records. Every extractor is a pure
//! function of its input; unrecognized text degrades to default values and
//! never produces an error.
//!
//! # Hours grammar
//!
//! The source dataset is Russian-language. Recognized shapes, in priority order:
//! - `ежедневно, круглосуточно` / `пн-вс круглосуточно` (24/7)
//! - `ежедневно 00:00-24:00` (near-24h daily range, also 24/7)
//! - `ежедневно 10:00-22:00` (one range repeated every day)
//! - `пн-пт 09:00-18:00; сб,вс 10:00-16:00` (semicolon-separated segments)
//!
//! # Examples
//! ```
//! use poi_features::{hours_parser, parse_middle_beer_cup};
//!
//! let features = hours_parser(Some("пн-пт 09:00-18:00; сб,вс 10:00-16:00"));
//! assert_eq!(features.hours_on_week, 45.0);
//! assert_eq!(features.hours_on_weekend, 12.0);
//!
//! assert_eq!(parse_middle_beer_cup(Some("Цена бокала пива: 100-200")), Some(150.0));
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod bill;
pub mod config;
pub mod day;
pub mod error;
pub mod hours;
pub mod interval;
pub mod time_range;

pub use bill::*;
pub use config::*;
pub use day::*;
pub use error::*;
pub use hours::*;
pub use interval::*;
pub use time_range::*;
