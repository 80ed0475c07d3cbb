#![forbid(unsafe_code)]

//! An immutable in-memory [`LocaleData`] and its builder.
//!
//! Tables are assembled with [`UnitTableBuilder`] and frozen by
//! [`UnitTableBuilder::build`]. A built table has no mutating methods; to
//! change a locale, build a new table and publish it through the
//! [`LocaleRegistry`](crate::LocaleRegistry).
//!
//! # Example
//!
//! ```
//! use unitfmt_core::{PluralCategory, Width};
//! use unitfmt_data::{LocaleData, MeasureUnit, UnitTableBuilder};
//!
//! let mut builder = UnitTableBuilder::new("en");
//! builder.quantity(MeasureUnit::HOUR, Width::Wide, &[("one", "{0} hour"), ("other", "{0} hours")])?;
//! let table = builder.build();
//!
//! let hours = table.quantity_patterns(MeasureUnit::HOUR, Width::Wide).unwrap();
//! assert_eq!(hours.get(PluralCategory::One).unwrap().literal_text(), " hour");
//! assert!(table.quantity_patterns(MeasureUnit::HOUR, Width::Short).is_none());
//! # Ok::<(), unitfmt_core::FormatError>(())
//! ```

use ahash::AHashMap;
use unitfmt_core::{
    CompiledPattern, DecimalSymbols, FormatError, PluralCategorySet, PluralRule, Result, Width,
    WidthFallbackTable,
};

use crate::clock::ClockPatterns;
use crate::currency::CurrencyData;
use crate::list::ListPatterns;
use crate::provider::LocaleData;
use crate::unit::{CurrencyCode, MeasureUnit};

/// Placeholders allowed in a dedicated per-unit pattern.
const PER_UNIT_PLACEHOLDER_LIMIT: usize = 1;
/// Placeholders allowed in the generic compound-per pattern.
const COMPOUND_PER_PLACEHOLDER_LIMIT: usize = 2;

#[derive(Debug, Clone, Default)]
struct UnitEntry {
    quantity: WidthFallbackTable<PluralCategorySet>,
    per_unit: WidthFallbackTable<CompiledPattern>,
    display_name: WidthFallbackTable<String>,
}

/// Pattern data for one locale.
#[derive(Debug, Clone)]
pub struct UnitTable {
    locale: String,
    plural_rule: PluralRule,
    symbols: DecimalSymbols,
    units: Vec<UnitEntry>,
    compound_per: WidthFallbackTable<CompiledPattern>,
    lists: WidthFallbackTable<ListPatterns>,
    clock: Option<ClockPatterns>,
    currencies: AHashMap<CurrencyCode, CurrencyData>,
}

impl UnitTable {
    fn unit(&self, unit: MeasureUnit) -> Option<&UnitEntry> {
        self.units.get(unit.index())
    }
}

impl LocaleData for UnitTable {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    fn decimal_symbols(&self) -> DecimalSymbols {
        self.symbols
    }

    fn quantity_patterns(&self, unit: MeasureUnit, width: Width) -> Option<&PluralCategorySet> {
        self.unit(unit)?.quantity.get_exact(width)
    }

    fn per_unit_pattern(&self, unit: MeasureUnit, width: Width) -> Option<&CompiledPattern> {
        self.unit(unit)?.per_unit.get_exact(width)
    }

    fn compound_per_pattern(&self, width: Width) -> Option<&CompiledPattern> {
        self.compound_per.get_exact(width)
    }

    fn clock_patterns(&self) -> Option<&ClockPatterns> {
        self.clock.as_ref()
    }

    fn list_patterns(&self, width: Width) -> Option<&ListPatterns> {
        self.lists.get_exact(width)
    }

    fn currency(&self, code: CurrencyCode) -> Option<&CurrencyData> {
        self.currencies.get(&code)
    }

    fn display_name(&self, unit: MeasureUnit, width: Width) -> Option<&str> {
        self.unit(unit)?
            .display_name
            .get_exact(width)
            .map(String::as_str)
    }
}

/// Assembles a [`UnitTable`].
///
/// Every fallible method validates its input before touching the table, so
/// a rejected call leaves earlier data intact.
#[derive(Debug, Clone)]
pub struct UnitTableBuilder {
    table: UnitTable,
}

impl UnitTableBuilder {
    /// Start a table for `locale`, with the plural rule of its language and
    /// Latin number symbols.
    #[must_use]
    pub fn new(locale: &str) -> Self {
        Self {
            table: UnitTable {
                locale: locale.to_owned(),
                plural_rule: PluralRule::for_locale(locale),
                symbols: DecimalSymbols::LATIN,
                units: vec![UnitEntry::default(); MeasureUnit::COUNT],
                compound_per: WidthFallbackTable::new(),
                lists: WidthFallbackTable::new(),
                clock: None,
                currencies: AHashMap::new(),
            },
        }
    }

    pub fn plural_rule(&mut self, rule: PluralRule) -> &mut Self {
        self.table.plural_rule = rule;
        self
    }

    pub fn decimal_symbols(&mut self, symbols: DecimalSymbols) -> &mut Self {
        self.table.symbols = symbols;
        self
    }

    /// Set the plural forms of `unit` at `width` from `(category, template)`
    /// pairs, replacing any forms already stored there.
    pub fn quantity(
        &mut self,
        unit: MeasureUnit,
        width: Width,
        forms: &[(&str, &str)],
    ) -> Result<&mut Self> {
        let mut set = PluralCategorySet::new();
        for (category, template) in forms {
            set.add(category, template)?;
        }
        self.entry(unit).quantity.set(width, set);
        Ok(self)
    }

    /// Set the dedicated "per `unit`" pattern at `width`.
    pub fn per_unit(&mut self, unit: MeasureUnit, width: Width, template: &str) -> Result<&mut Self> {
        let pattern = compile_limited(template, PER_UNIT_PLACEHOLDER_LIMIT)?;
        self.entry(unit).per_unit.set(width, pattern);
        Ok(self)
    }

    /// Drop the dedicated "per `unit`" pattern at `width`.
    pub fn clear_per_unit(&mut self, unit: MeasureUnit, width: Width) -> &mut Self {
        *self.entry(unit).per_unit.slot_mut(width) = None;
        self
    }

    /// Set the generic compound-per pattern at `width`.
    pub fn compound_per(&mut self, width: Width, template: &str) -> Result<&mut Self> {
        let pattern = compile_limited(template, COMPOUND_PER_PLACEHOLDER_LIMIT)?;
        self.table.compound_per.set(width, pattern);
        Ok(self)
    }

    pub fn list(&mut self, width: Width, patterns: ListPatterns) -> &mut Self {
        self.table.lists.set(width, patterns);
        self
    }

    pub fn clock(&mut self, patterns: ClockPatterns) -> &mut Self {
        self.table.clock = Some(patterns);
        self
    }

    pub fn currency(&mut self, code: CurrencyCode, data: CurrencyData) -> &mut Self {
        self.table.currencies.insert(code, data);
        self
    }

    pub fn display_name(&mut self, unit: MeasureUnit, width: Width, name: &str) -> &mut Self {
        self.entry(unit).display_name.set(width, name.to_owned());
        self
    }

    /// Freeze the table.
    #[must_use]
    pub fn build(self) -> UnitTable {
        tracing::debug!(
            locale = %self.table.locale,
            currencies = self.table.currencies.len(),
            has_clock = self.table.clock.is_some(),
            "unit table built"
        );
        self.table
    }

    fn entry(&mut self, unit: MeasureUnit) -> &mut UnitEntry {
        &mut self.table.units[unit.index()]
    }
}

fn compile_limited(template: &str, limit: usize) -> Result<CompiledPattern> {
    let pattern = CompiledPattern::compile(template);
    if pattern.placeholder_count() > limit {
        return Err(FormatError::TooManyPlaceholders {
            count: pattern.placeholder_count(),
            limit,
        });
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitfmt_core::PluralCategory;

    fn builder() -> UnitTableBuilder {
        let mut b = UnitTableBuilder::new("en");
        b.quantity(
            MeasureUnit::SECOND,
            Width::Wide,
            &[("one", "{0} second"), ("other", "{0} seconds")],
        )
        .unwrap()
        .per_unit(MeasureUnit::SECOND, Width::Short, "{0}/s")
        .unwrap()
        .compound_per(Width::Wide, "{0} per {1}")
        .unwrap();
        b
    }

    #[test]
    fn lookups_are_exact() {
        let table = builder().build();
        assert!(table.quantity_patterns(MeasureUnit::SECOND, Width::Wide).is_some());
        assert!(table.quantity_patterns(MeasureUnit::SECOND, Width::Short).is_none());
        assert!(table.per_unit_pattern(MeasureUnit::SECOND, Width::Short).is_some());
        assert!(table.per_unit_pattern(MeasureUnit::SECOND, Width::Wide).is_none());
        assert!(table.compound_per_pattern(Width::Wide).is_some());
        assert!(table.compound_per_pattern(Width::Narrow).is_none());
        assert!(table.clock_patterns().is_none());
        assert!(table.currency(CurrencyCode::USD).is_none());
    }

    #[test]
    fn rejected_forms_leave_previous_data() {
        let mut b = builder();
        let err = b
            .quantity(
                MeasureUnit::SECOND,
                Width::Wide,
                &[("one", "{0} sec"), ("sometimes", "{0} secs")],
            )
            .unwrap_err();
        assert_eq!(err, FormatError::UnknownCategory("sometimes".into()));
        let table = b.build();
        let set = table
            .quantity_patterns(MeasureUnit::SECOND, Width::Wide)
            .unwrap();
        assert_eq!(set.get(PluralCategory::One).unwrap().literal_text(), " second");
    }

    #[test]
    fn placeholder_limits() {
        let mut b = UnitTableBuilder::new("en");
        assert_eq!(
            b.per_unit(MeasureUnit::SECOND, Width::Wide, "{0} per {1}")
                .err(),
            Some(FormatError::TooManyPlaceholders { count: 2, limit: 1 })
        );
        assert_eq!(
            b.compound_per(Width::Wide, "{0}{1}{2}").err(),
            Some(FormatError::TooManyPlaceholders { count: 3, limit: 2 })
        );
    }

    #[test]
    fn clear_per_unit_removes_pattern() {
        let mut b = builder();
        b.clear_per_unit(MeasureUnit::SECOND, Width::Short);
        let table = b.build();
        assert!(table.per_unit_pattern(MeasureUnit::SECOND, Width::Short).is_none());
    }

    #[test]
    fn plural_rule_follows_locale() {
        let table = UnitTableBuilder::new("pl").build();
        assert_eq!(
            table.plural_rule().categorize(5),
            PluralCategory::Many
        );
        assert_eq!(table.locale(), "pl");
    }

    #[test]
    fn display_names() {
        let mut b = UnitTableBuilder::new("en");
        b.display_name(MeasureUnit::HOUR, Width::Short, "hr");
        let table = b.build();
        assert_eq!(table.display_name(MeasureUnit::HOUR, Width::Short), Some("hr"));
        assert_eq!(table.display_name(MeasureUnit::HOUR, Width::Wide), None);
    }
}
