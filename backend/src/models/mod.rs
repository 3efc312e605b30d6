//! Domain models for the comparison engine.
//!
//! This module contains the core types shared by every service:
//! date ranges, locales, reporting granularity, and per-day observation
//! sequences before and after alignment.

pub mod date_range;
pub mod granularity;
pub mod locale;
pub mod observation;

pub use date_range::{iso_date, parse_iso_date, DateRange};
pub use granularity::Granularity;
pub use locale::LocaleId;
pub use observation::{AlignedPair, DailyObservation, ObservationSeries};
