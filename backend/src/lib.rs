//! # Period Compare
//!
//! Calendar-aligned comparison engine for a web-analytics dashboard.
//!
//! Given per-day observations for a current date range and an optional
//! comparison range, this crate computes percent changes, pads the two
//! sequences so calendar months line up, and shapes the result into chart
//! series and comparison tables the UI layer can render directly.
//!
//! ## Features
//!
//! - **Percent change**: zero-safe scalar comparison (`None` instead of `NaN`)
//! - **Calendar padding**: month-stride padding plans for unequal day sequences
//! - **Alignment**: equal-length aligned pairs with explicit padding slots
//! - **Labels**: locale-aware period and point labels without global state
//! - **Charts**: per-period or per-date chart series, plus tabular rows
//! - **Merge**: combined multi-metric charts for custom ranges
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) handed to the UI layer
//! - [`models`]: Date ranges, locales, granularity, observation sequences
//! - [`services`]: Engine components and the overview composition
//! - [`routes`]: Route-specific data types and the bundled overview entry point
//! - [`config`]: TOML configuration for chart thresholds and default locale
//! - [`i18n`]: Translation collaborator for fixed label strings
//!
//! Every operation is a pure function of its inputs. The crate logs through
//! the `log` facade and never installs a logger.

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;

pub mod routes;

pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult, ErrorContext};
pub use i18n::{TranslationTable, Translator};
