#![forbid(unsafe_code)]

//! The locale data contract consumed by the formatter.
//!
//! Every lookup is exact: it answers for the width it is asked about and
//! nothing else. Width fallback is the caller's policy, applied with
//! [`unitfmt_core::with_fallback`].

use core::fmt;

use unitfmt_core::{CompiledPattern, DecimalSymbols, PluralCategorySet, PluralRule, Width};

use crate::clock::ClockPatterns;
use crate::currency::CurrencyData;
use crate::list::ListPatterns;
use crate::unit::{CurrencyCode, MeasureUnit};

/// Read-only pattern data for one locale.
pub trait LocaleData: Send + Sync + fmt::Debug {
    /// The locale tag, e.g. `"en"`.
    fn locale(&self) -> &str;

    /// How numbers select plural categories.
    fn plural_rule(&self) -> PluralRule;

    /// Decimal, grouping, and minus symbols.
    fn decimal_symbols(&self) -> DecimalSymbols;

    /// Plural forms of `unit` at `width`.
    fn quantity_patterns(&self, unit: MeasureUnit, width: Width) -> Option<&PluralCategorySet>;

    /// A dedicated "per `unit`" pattern at `width`, such as `"{0}/s"`.
    fn per_unit_pattern(&self, unit: MeasureUnit, width: Width) -> Option<&CompiledPattern>;

    /// The generic `"{0} per {1}"` pattern at `width`.
    fn compound_per_pattern(&self, width: Width) -> Option<&CompiledPattern>;

    /// Clock templates for numeric durations.
    fn clock_patterns(&self) -> Option<&ClockPatterns>;

    /// List joining patterns at `width`.
    fn list_patterns(&self, width: Width) -> Option<&ListPatterns>;

    /// Display data for a currency.
    fn currency(&self, code: CurrencyCode) -> Option<&CurrencyData>;

    /// The unit's name at `width`, such as `"hours"` or `"hr"`.
    fn display_name(&self, unit: MeasureUnit, width: Width) -> Option<&str>;
}
