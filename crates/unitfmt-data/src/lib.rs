#![forbid(unsafe_code)]

//! Unit and locale data for unitfmt.
//!
//! Provides the measure unit catalogue, the [`LocaleData`] contract the
//! formatter reads patterns through, an immutable [`UnitTable`]
//! implementation with its builder, list and clock patterns, built-in
//! tables for a few locales, and the [`LocaleRegistry`] that publishes them.
//!
//! # How it fits in the system
//! `unitfmt-data` depends only on `unitfmt-core`. The `unitfmt` crate
//! resolves a locale through the registry (or accepts any `LocaleData`
//! directly) and never mutates what it receives.

pub mod builtin;
pub mod clock;
pub mod currency;
pub mod list;
pub mod provider;
pub mod registry;
pub mod table;
pub mod unit;

pub use clock::{ClockField, ClockPatterns, ClockRendering, ClockStyle, ClockTemplate};
pub use currency::CurrencyData;
pub use list::ListPatterns;
pub use provider::LocaleData;
pub use registry::LocaleRegistry;
pub use table::{UnitTable, UnitTableBuilder};
pub use unit::{CurrencyCode, Measure, MeasureUnit, Unit, resolve_unit_per_unit};
