#![forbid(unsafe_code)]

//! Locale-aware measure formatting.
//!
//! [`MeasureFormat`] turns measures into text: a single quantity
//! ("5 hours"), a list of quantities ("2 miles, 1 foot, 2.3 inches"), a rate
//! ("1.5 pounds per second"), a currency amount ("-$1.00"), or a clock
//! duration ("1:00:23.5"). Plural selection, number rendering, and pattern
//! substitution come from [`unitfmt_core`]; locale tables from
//! [`unitfmt_data`].
//!
//! # Example
//!
//! ```
//! use unitfmt::{FormatterConfig, MeasureFormat};
//! use unitfmt_core::{Field, FieldPosition, Width};
//! use unitfmt_data::{Measure, MeasureUnit};
//!
//! let f = MeasureFormat::new(&FormatterConfig::new("en")).unwrap();
//! let text = f
//!     .format(&[
//!         Measure::new(2.0, MeasureUnit::MILE),
//!         Measure::new(1.0, MeasureUnit::FOOT),
//!         Measure::new(2.3, MeasureUnit::INCH),
//!     ])
//!     .unwrap();
//! assert_eq!(text, "2 miles, 1 foot, 2.3 inches");
//!
//! let clock = MeasureFormat::new(&FormatterConfig::new("en").with_width(Width::Numeric)).unwrap();
//! let mut out = String::new();
//! let mut pos = FieldPosition::new(Field::Fraction);
//! clock
//!     .format_measures(
//!         &[Measure::new(1.0, MeasureUnit::MINUTE), Measure::new(5.25, MeasureUnit::SECOND)],
//!         &mut out,
//!         &mut pos,
//!     )
//!     .unwrap();
//! assert_eq!(out, "1:05.25");
//! assert_eq!(pos.span(), Some(5..7));
//! ```

pub mod config;
pub mod duration;
pub mod format;
mod per_unit;

pub use config::FormatterConfig;
pub use duration::{DurationFields, DurationParts};
pub use format::MeasureFormat;
