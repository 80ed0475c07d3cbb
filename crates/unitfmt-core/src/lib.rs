#![forbid(unsafe_code)]

//! Core building blocks for unitfmt.
//!
//! Provides the `{N}` pattern compiler, CLDR plural categories and rules,
//! the plural-variant dispatcher, widths and the width fallback policy,
//! field positions, a locale decimal renderer, and the shared store used to
//! publish immutable locale tables.
//!
//! # Role in unitfmt
//! `unitfmt-core` holds everything that is independent of unit data. The
//! `unitfmt-data` crate builds locale tables out of these pieces and the
//! `unitfmt` crate composes them into measure phrases.
//!
//! # Example
//!
//! ```
//! use unitfmt_core::{CompiledPattern, DecimalFormat, FieldPosition, PluralCategorySet, PluralRule};
//!
//! let mut hours = PluralCategorySet::new();
//! hours.add("one", "{0} hour").unwrap();
//! hours.add("other", "{0} hours").unwrap();
//!
//! let mut out = String::new();
//! hours
//!     .format(2.5, &DecimalFormat::default(), &PluralRule::English, &mut out, &mut FieldPosition::dont_care())
//!     .unwrap();
//! assert_eq!(out, "2.5 hours");
//!
//! let per = CompiledPattern::compile("{0} per {1}");
//! assert_eq!(per.format(&["5 miles", "hour"]).unwrap(), "5 miles per hour");
//! ```

pub mod decimal;
pub mod error;
pub mod field;
pub mod pattern;
pub mod plural;
pub mod quantity;
pub mod read_optimized;
pub mod width;

pub use decimal::{DecimalFormat, DecimalSymbols, RenderedDecimal, RoundingMode};
pub use error::{FormatError, Result};
pub use field::{Field, FieldPosition, FieldSpan};
pub use pattern::{Arg, CompiledPattern, PlaceholderInfo};
pub use plural::{PluralCategory, PluralOperands, PluralRule};
pub use quantity::{MAX_QUANTITY_PLACEHOLDERS, PluralCategorySet, format_quantity};
pub use read_optimized::SharedStore;
pub use width::{FALLBACK_WIDTHS, Width, WidthFallbackTable, fallback_chain, with_fallback};
