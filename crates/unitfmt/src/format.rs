#![forbid(unsafe_code)]

//! The measure formatter.
//!
//! [`MeasureFormat`] binds a locale table, a width, and a number renderer.
//! It formats single measures, lists of measures ("2 miles, 1 foot,
//! 2.3 inches"), and numeric durations ("1:00:23.5"), and can report where a
//! requested number field landed in the output.
//!
//! # Output contract
//! Every entry point appends to a caller-owned `String`. On error the buffer
//! is truncated back to its length on entry. Field positions are byte
//! offsets into the whole buffer, prefix included; `(0, 0)` means the field
//! was not found.

use std::ops::Range;
use std::sync::Arc;

use smallvec::SmallVec;
use unitfmt_core::{
    CompiledPattern, DecimalFormat, Field, FieldPosition, FormatError, PluralCategory, Result,
    Width, format_quantity, with_fallback,
};
use unitfmt_data::{CurrencyCode, LocaleData, LocaleRegistry, Measure, MeasureUnit, Unit};

use crate::config::FormatterConfig;
use crate::duration;

/// Formats measures for one locale and width.
#[derive(Debug, Clone)]
pub struct MeasureFormat {
    data: Arc<dyn LocaleData>,
    width: Width,
    number: DecimalFormat,
    integer: DecimalFormat,
}

impl MeasureFormat {
    /// A formatter for `config.locale`, resolved through the global
    /// [`LocaleRegistry`].
    pub fn new(config: &FormatterConfig) -> Result<Self> {
        let data = LocaleRegistry::global().get(&config.locale)?;
        Ok(Self::with_data(data, config))
    }

    /// A formatter over explicit locale data. `config.locale` is ignored.
    #[must_use]
    pub fn with_data(data: Arc<dyn LocaleData>, config: &FormatterConfig) -> Self {
        let number = config.number_format(data.decimal_symbols());
        let integer = number.integer_style();
        tracing::debug!(
            locale = data.locale(),
            width = %config.width,
            "measure format created"
        );
        Self {
            data,
            width: config.width,
            number,
            integer,
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        self.data.locale()
    }

    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    /// The full-precision number renderer.
    #[must_use]
    pub fn number_format(&self) -> &DecimalFormat {
        &self.number
    }

    /// The locale data this formatter reads.
    #[must_use]
    pub fn data(&self) -> &Arc<dyn LocaleData> {
        &self.data
    }

    /// Format one measure and append it to `out`.
    pub fn format_measure(
        &self,
        measure: &Measure,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        let start = out.len();
        pos.reset();
        let result = self.format_item(measure, &self.number, out, pos);
        discard_on_error(result, out, start, pos)
    }

    /// Format a sequence of measures and append it to `out`.
    ///
    /// Every measure but the last is rendered as a truncated integer. At
    /// [`Width::Numeric`], an hour/minute/second sequence renders as a clock.
    /// A requested field is reported for the first measure that contains it.
    pub fn format_measures(
        &self,
        measures: &[Measure],
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        let start = out.len();
        pos.reset();
        let result = self.format_measures_into(measures, out, pos);
        discard_on_error(result, out, start, pos)
    }

    /// Format a sequence of measures into a new string.
    pub fn format(&self, measures: &[Measure]) -> Result<String> {
        let mut out = String::new();
        self.format_measures(measures, &mut out, &mut FieldPosition::dont_care())?;
        Ok(out)
    }

    /// The unit's display name at this formatter's width, with width
    /// fallback.
    #[must_use]
    pub fn unit_display_name(&self, unit: MeasureUnit) -> Option<&str> {
        let data = &*self.data;
        with_fallback(self.width, |w| data.display_name(unit.base_unit(), w))
    }

    fn format_measures_into(
        &self,
        measures: &[Measure],
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        match measures {
            [] => return Ok(()),
            [single] => return self.format_item(single, &self.number, out, pos),
            _ => {}
        }

        if self.width == Width::Numeric {
            if let Some(parts) = duration::classify(measures) {
                if let Some(style) = parts.clock_style() {
                    let clock = self
                        .data
                        .clock_patterns()
                        .ok_or(FormatError::MissingClockPatterns)?;
                    duration::render(&parts, style, clock, &self.number, out, pos);
                    return Ok(());
                }
            }
        }

        let data = &*self.data;
        let list = with_fallback(self.width, |w| data.list_patterns(w)).ok_or_else(|| {
            FormatError::MissingFallbackData {
                key: format!("list patterns at {}", self.width),
            }
        })?;

        let last = measures.len() - 1;
        let mut items: SmallVec<[String; 4]> = SmallVec::with_capacity(measures.len());
        let mut found: Option<(usize, Range<usize>)> = None;
        for (index, measure) in measures.iter().enumerate() {
            let number = if index == last {
                &self.number
            } else {
                &self.integer
            };
            let mut item = String::new();
            let mut item_pos = match found {
                None => pos.same_field(),
                Some(_) => FieldPosition::dont_care(),
            };
            self.format_item(measure, number, &mut item, &mut item_pos)?;
            if found.is_none() {
                found = item_pos.span().map(|span| (index, span));
            }
            items.push(item);
        }

        let refs: SmallVec<[&str; 4]> = items.iter().map(String::as_str).collect();
        match found {
            Some((index, span)) => {
                if let Some(at) = list.join_with_offset(&refs, index, out)? {
                    pos.set(at + span.start..at + span.end);
                }
            }
            None => list.join(&refs, out)?,
        }
        Ok(())
    }

    fn format_item(
        &self,
        measure: &Measure,
        number: &DecimalFormat,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        match measure.unit {
            Unit::Measure(unit) => self.format_unit_value(measure.value, unit, number, out, pos),
            Unit::Currency(code) => self.format_currency(measure.value, code, out, pos),
        }
    }

    /// Render `value` and substitute it into the plural form of `unit`.
    pub(crate) fn format_unit_value(
        &self,
        value: f64,
        unit: MeasureUnit,
        number: &DecimalFormat,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        let unit = unit.base_unit();
        let rendered = number.render(value);
        let category = self
            .data
            .plural_rule()
            .categorize_operands(&rendered.operands);
        let pattern = self.select_pattern(unit, category)?;
        tracing::trace!(unit = %unit, category = %category, "quantity pattern selected");
        format_quantity(pattern, &rendered, out, pos)
    }

    /// The pattern for `category` at this width or a fallback width, else
    /// the `other` pattern at this width or a fallback width.
    pub(crate) fn select_pattern(
        &self,
        unit: MeasureUnit,
        category: PluralCategory,
    ) -> Result<&CompiledPattern> {
        let data = &*self.data;
        let lookup = |category: PluralCategory| {
            with_fallback(self.width, |w| data.quantity_patterns(unit, w)?.get(category))
        };
        lookup(category)
            .or_else(|| {
                tracing::debug!(
                    unit = %unit,
                    category = %category,
                    "plural category missing at every width, using other"
                );
                lookup(PluralCategory::Other)
            })
            .ok_or_else(|| FormatError::MissingFallbackData {
                key: format!("{unit} at {}", self.width),
            })
    }

    /// Format a currency amount: sign first, then the currency's name
    /// pattern around the absolute value.
    fn format_currency(
        &self,
        amount: f64,
        code: CurrencyCode,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        let missing = || FormatError::MissingCurrencyData {
            code: code.to_string(),
        };
        let currency = self.data.currency(code).ok_or_else(missing)?;
        let digits = currency.fraction_digits();
        let rendered = self
            .number
            .clone()
            .with_fraction_digits(digits, digits)
            .render(amount.abs());
        let category = self
            .data
            .plural_rule()
            .categorize_operands(&rendered.operands);
        let lookup =
            |category: PluralCategory| with_fallback(self.width, |w| currency.names(w)?.get(category));
        let pattern = lookup(category)
            .or_else(|| lookup(PluralCategory::Other))
            .ok_or_else(missing)?;

        let start = out.len();
        if amount < 0.0 {
            out.push(self.number.symbols().minus);
            if pos.field() == Some(Field::Sign) {
                pos.set(start..out.len());
            }
        }
        format_quantity(pattern, &rendered, out, pos)
    }
}

/// Drop partial output and any recorded field when `result` is an error.
pub(crate) fn discard_on_error(
    result: Result<()>,
    out: &mut String,
    start: usize,
    pos: &mut FieldPosition,
) -> Result<()> {
    if let Err(err) = &result {
        out.truncate(start);
        pos.reset();
        tracing::debug!(error_type = err.error_type(), error = %err, "format failed");
    }
    result
}
