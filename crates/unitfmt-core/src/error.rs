#![forbid(unsafe_code)]

//! Error model for unitfmt.
//!
//! Every fallible operation returns [`FormatError`] synchronously. Nothing is
//! retried and no error leaves partial output behind: formatting entry points
//! truncate the caller's buffer back to its length on entry before returning
//! an error.
//!
//! Malformed `{...}` references are not errors; the pattern compiler degrades
//! them to literal text. "Not a clock duration" is not an error either; the
//! duration classifier reports it as `None`.

use std::fmt;

/// Errors produced while building pattern tables or formatting measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer substitution values were supplied than the pattern references.
    InsufficientArguments { required: usize, supplied: usize },
    /// A plural category name outside `zero|one|two|few|many|other`.
    UnknownCategory(String),
    /// A quantity template referenced more placeholders than allowed.
    TooManyPlaceholders { count: usize, limit: usize },
    /// No pattern exists at the requested width or any fallback width.
    MissingFallbackData { key: String },
    /// The locale has no clock templates for numeric durations.
    MissingClockPatterns,
    /// The locale has no data for a currency code.
    MissingCurrencyData { code: String },
    /// No locale table is registered for the tag (or any parent tag).
    UnknownLocale(String),
}

/// Standard result type for unitfmt APIs.
pub type Result<T> = std::result::Result<T, FormatError>;

impl FormatError {
    /// Error type label for tracing fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InsufficientArguments { .. } => "insufficient_arguments",
            Self::UnknownCategory(_) => "unknown_category",
            Self::TooManyPlaceholders { .. } => "too_many_placeholders",
            Self::MissingFallbackData { .. } => "missing_fallback_data",
            Self::MissingClockPatterns => "missing_clock_patterns",
            Self::MissingCurrencyData { .. } => "missing_currency_data",
            Self::UnknownLocale(_) => "unknown_locale",
        }
    }

    /// Whether the error was raised while building data rather than while
    /// formatting a value.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_) | Self::TooManyPlaceholders { .. }
        )
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientArguments { required, supplied } => {
                write!(
                    f,
                    "pattern needs {required} argument(s) but {supplied} were supplied"
                )
            }
            Self::UnknownCategory(name) => write!(f, "unknown plural category: {name:?}"),
            Self::TooManyPlaceholders { count, limit } => {
                write!(f, "pattern has {count} placeholder(s), limit is {limit}")
            }
            Self::MissingFallbackData { key } => {
                write!(f, "no pattern data at any fallback width for {key}")
            }
            Self::MissingClockPatterns => write!(f, "locale has no clock patterns"),
            Self::MissingCurrencyData { code } => write!(f, "no data for currency {code}"),
            Self::UnknownLocale(tag) => write!(f, "no locale data registered for {tag:?}"),
        }
    }
}

impl std::error::Error for FormatError {}
