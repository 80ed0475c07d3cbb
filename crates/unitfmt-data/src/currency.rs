#![forbid(unsafe_code)]

//! Currency display data.

use unitfmt_core::{PluralCategorySet, Result, Width, WidthFallbackTable};

/// How one currency is written in a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyData {
    fraction_digits: u8,
    names: WidthFallbackTable<PluralCategorySet>,
}

impl CurrencyData {
    /// Data for a currency shown with `fraction_digits` decimals.
    #[must_use]
    pub fn new(fraction_digits: u8) -> Self {
        Self {
            fraction_digits,
            names: WidthFallbackTable::new(),
        }
    }

    /// Set the name patterns at `width` from `(category, template)` pairs,
    /// e.g. `[("one", "{0} US dollar"), ("other", "{0} US dollars")]`.
    pub fn with_names(mut self, width: Width, forms: &[(&str, &str)]) -> Result<Self> {
        let mut set = PluralCategorySet::new();
        for (category, template) in forms {
            set.add(category, template)?;
        }
        self.names.set(width, set);
        Ok(self)
    }

    #[must_use]
    pub const fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }

    /// Name patterns stored at exactly `width`.
    #[must_use]
    pub fn names(&self, width: Width) -> Option<&PluralCategorySet> {
        self.names.get_exact(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitfmt_core::{FormatError, PluralCategory};

    #[test]
    fn names_per_width() {
        let usd = CurrencyData::new(2)
            .with_names(Width::Wide, &[("one", "{0} US dollar"), ("other", "{0} US dollars")])
            .unwrap()
            .with_names(Width::Narrow, &[("other", "${0}")])
            .unwrap();
        assert_eq!(usd.fraction_digits(), 2);
        assert_eq!(
            usd.names(Width::Numeric)
                .and_then(|set| set.get(PluralCategory::Other))
                .map(|p| p.literal_text()),
            Some("$")
        );
        assert!(usd.names(Width::Short).is_none());
    }

    #[test]
    fn bad_category_is_rejected() {
        let err = CurrencyData::new(2)
            .with_names(Width::Wide, &[("plenty", "{0} $")])
            .unwrap_err();
        assert_eq!(err, FormatError::UnknownCategory("plenty".into()));
    }
}
