#![forbid(unsafe_code)]

//! Rates: "{measure} per {unit}".
//!
//! A rate with a compound unit of its own ("km/h", "psi") formats as that
//! unit when the locale has patterns for it. Otherwise the per-unit's dedicated pattern ("{0} per second") wraps
//! the formatted measure, and failing that the locale's generic compound
//! pattern ("{0} per {1}") joins it with the per-unit's singular noun.

use unitfmt_core::{FieldPosition, FormatError, PluralCategory, Result, with_fallback};
use unitfmt_data::{Measure, MeasureUnit, resolve_unit_per_unit};

use crate::format::{MeasureFormat, discard_on_error};

impl MeasureFormat {
    /// Format `value unit` per `per_unit` and append it to `out`.
    ///
    /// ```
    /// use unitfmt::{FormatterConfig, MeasureFormat};
    /// use unitfmt_core::FieldPosition;
    /// use unitfmt_data::MeasureUnit;
    ///
    /// let f = MeasureFormat::new(&FormatterConfig::new("en")).unwrap();
    /// let mut out = String::new();
    /// f.format_measure_per_unit(
    ///     2.0,
    ///     MeasureUnit::POUND,
    ///     MeasureUnit::SECOND,
    ///     &mut out,
    ///     &mut FieldPosition::dont_care(),
    /// )
    /// .unwrap();
    /// assert_eq!(out, "2 pounds per second");
    /// ```
    pub fn format_measure_per_unit(
        &self,
        value: f64,
        unit: MeasureUnit,
        per_unit: MeasureUnit,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        if let Some(compound) = resolve_unit_per_unit(unit, per_unit) {
            let data = &**self.data();
            if with_fallback(self.width(), |w| data.quantity_patterns(compound, w)).is_some() {
                tracing::debug!(
                    unit = %unit,
                    per_unit = %per_unit,
                    compound = %compound,
                    "rate resolved to compound unit"
                );
                return self.format_measure(&Measure::new(value, compound), out, pos);
            }
            tracing::debug!(
                compound = %compound,
                locale = self.locale(),
                "compound unit has no patterns, composing rate"
            );
        }

        let start = out.len();
        pos.reset();
        let result = self.format_rate(value, unit, per_unit, out, pos);
        discard_on_error(result, out, start, pos)
    }

    fn format_rate(
        &self,
        value: f64,
        unit: MeasureUnit,
        per_unit: MeasureUnit,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        let mut phrase = String::new();
        let mut inner = pos.same_field();
        self.format_unit_value(value, unit, self.number_format(), &mut phrase, &mut inner)?;
        let inserted = self.format_per_unit_phrase(&phrase, per_unit, out)?;
        if let (Some(at), Some(span)) = (inserted, inner.span()) {
            pos.set(at + span.start..at + span.end);
        }
        Ok(())
    }

    /// Wrap an already formatted `phrase` in the "per `per_unit`" pattern
    /// and append it to `out`.
    ///
    /// Returns the byte offset in `out` where `phrase` landed, or `None` if
    /// the pattern drops it. On error `out` is unchanged.
    pub fn format_per_unit_phrase(
        &self,
        phrase: &str,
        per_unit: MeasureUnit,
        out: &mut String,
    ) -> Result<Option<usize>> {
        let per_unit = per_unit.base_unit();
        let width = self.width();
        let data = &**self.data();

        if let Some(pattern) = with_fallback(width, |w| data.per_unit_pattern(per_unit, w)) {
            tracing::trace!(per_unit = %per_unit, "dedicated per-unit pattern");
            let mut offsets = [None];
            pattern.format_and_append(&[phrase], out, &mut offsets)?;
            return Ok(offsets[0]);
        }

        let compound = with_fallback(width, |w| data.compound_per_pattern(w)).ok_or_else(|| {
            FormatError::MissingFallbackData {
                key: format!("compound per pattern at {width}"),
            }
        })?;
        let noun = with_fallback(width, |w| {
            data.quantity_patterns(per_unit, w)?
                .select(PluralCategory::One)
        })
        .ok_or_else(|| FormatError::MissingFallbackData {
            key: format!("{per_unit} at {width}"),
        })?
        .strip_placeholders();
        tracing::debug!(per_unit = %per_unit, noun = %noun, "generic compound per pattern");

        let mut offsets = [None, None];
        compound.format_and_append(&[phrase, noun], out, &mut offsets)?;
        Ok(offsets[0])
    }
}
