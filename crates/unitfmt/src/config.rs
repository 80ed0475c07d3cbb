#![forbid(unsafe_code)]

//! Formatter configuration.

use unitfmt_core::{DecimalFormat, DecimalSymbols, RoundingMode, Width};

/// Everything a [`MeasureFormat`](crate::MeasureFormat) is built from.
///
/// ```
/// use unitfmt::FormatterConfig;
/// use unitfmt_core::Width;
///
/// let config = FormatterConfig::new("de")
///     .with_width(Width::Short)
///     .with_fraction_digits(0, 2);
/// assert_eq!(config.locale, "de");
/// assert_eq!(config.max_fraction_digits, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Locale tag, resolved through the locale registry.
    pub locale: String,
    pub width: Width,
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
    pub rounding: RoundingMode,
    /// Group integer digits by thousands.
    pub grouping: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
            width: Width::Wide,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            rounding: RoundingMode::HalfEven,
            grouping: true,
        }
    }
}

impl FormatterConfig {
    /// Defaults for `locale`.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Set the fraction digit range. `max` is raised to `min` if lower.
    #[must_use]
    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max.max(min);
        self
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// The full-precision number renderer for a locale's symbols.
    #[must_use]
    pub fn number_format(&self, symbols: DecimalSymbols) -> DecimalFormat {
        DecimalFormat::new(symbols)
            .with_fraction_digits(self.min_fraction_digits, self.max_fraction_digits)
            .with_rounding(self.rounding)
            .with_grouping(self.grouping)
    }
}
