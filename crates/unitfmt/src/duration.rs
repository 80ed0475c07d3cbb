#![forbid(unsafe_code)]

//! Numeric (clock-style) durations.
//!
//! A measure list that is exactly hours, minutes, and/or seconds, in that
//! order, each at most once and none negative, renders as a clock string
//! ("1:00:23.5") at [`Width::Numeric`](unitfmt_core::Width::Numeric).
//! Anything else is reported as `None` by [`classify`] and formats as a
//! plain narrow list.

use bitflags::bitflags;
use unitfmt_core::{DecimalFormat, Field, FieldPosition};
use unitfmt_data::{ClockField, ClockPatterns, ClockStyle, Measure, MeasureUnit, Unit};

bitflags! {
    /// Which clock fields a duration carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DurationFields: u8 {
        const HOUR   = 0b001;
        const MINUTE = 0b010;
        const SECOND = 0b100;
    }
}

/// A measure list recognized as a clock duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationParts {
    pub fields: DurationFields,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DurationParts {
    /// The clock template this duration uses. A single field has none.
    #[must_use]
    pub fn clock_style(&self) -> Option<ClockStyle> {
        const HM: u8 = DurationFields::HOUR.bits() | DurationFields::MINUTE.bits();
        const MS: u8 = DurationFields::MINUTE.bits() | DurationFields::SECOND.bits();
        const HS: u8 = DurationFields::HOUR.bits() | DurationFields::SECOND.bits();
        match self.fields.bits() {
            HM => Some(ClockStyle::HourMinute),
            MS => Some(ClockStyle::MinuteSecond),
            HS => Some(ClockStyle::HourMinuteSecond),
            bits if bits == DurationFields::all().bits() => Some(ClockStyle::HourMinuteSecond),
            _ => None,
        }
    }

    /// The smallest field present and its value.
    fn smallest(&self) -> (ClockField, f64) {
        if self.fields.contains(DurationFields::SECOND) {
            (ClockField::Second, self.seconds)
        } else if self.fields.contains(DurationFields::MINUTE) {
            (ClockField::Minute, self.minutes)
        } else {
            (ClockField::Hour, self.hours)
        }
    }

    /// Whole milliseconds, truncating each component first.
    fn total_millis(&self) -> u64 {
        let whole = |v: f64| v.trunc() as u64;
        whole(self.hours)
            .saturating_mul(3600)
            .saturating_add(whole(self.minutes).saturating_mul(60))
            .saturating_add(whole(self.seconds))
            .saturating_mul(1000)
    }
}

/// Recognize a clock duration, or `None` to use the plain list path.
#[must_use]
pub fn classify(measures: &[Measure]) -> Option<DurationParts> {
    let mut parts = DurationParts {
        fields: DurationFields::empty(),
        hours: 0.0,
        minutes: 0.0,
        seconds: 0.0,
    };
    if measures.is_empty() {
        return None;
    }
    for measure in measures {
        let field = match measure.unit {
            Unit::Measure(MeasureUnit::HOUR) => DurationFields::HOUR,
            Unit::Measure(MeasureUnit::MINUTE) => DurationFields::MINUTE,
            Unit::Measure(MeasureUnit::SECOND) => DurationFields::SECOND,
            other => return reject("not an hour, minute, or second", other),
        };
        if !(measure.value >= 0.0 && measure.value.is_finite()) {
            return reject("negative or non-finite value", measure.unit);
        }
        // Larger units have lower bits; each must arrive before smaller ones.
        if parts.fields.bits() >= field.bits() {
            return reject("out of order or repeated", measure.unit);
        }
        parts.fields |= field;
        if field == DurationFields::HOUR {
            parts.hours = measure.value;
        } else if field == DurationFields::MINUTE {
            parts.minutes = measure.value;
        } else {
            parts.seconds = measure.value;
        }
    }
    Some(parts)
}

fn reject(reason: &'static str, unit: Unit) -> Option<DurationParts> {
    tracing::debug!(reason, unit = %unit, "not a clock duration");
    None
}

/// Render `parts` with the `style` template, splicing the fraction digits
/// of the smallest field from `number` after that field's clock digits.
///
/// A requested field is reported in `out` coordinates: the clock digits of
/// the smallest field for [`Field::Integer`], the spliced digits for the
/// decimal separator and fraction.
pub fn render(
    parts: &DurationParts,
    style: ClockStyle,
    clock: &ClockPatterns,
    number: &DecimalFormat,
    out: &mut String,
    pos: &mut FieldPosition,
) {
    let rendering = clock.get(style).format(parts.total_millis());
    let (smallest, value) = parts.smallest();
    let precise = number.render(value);
    let int_end = precise
        .span(Field::Integer)
        .map_or(precise.text.len(), |span| span.end);
    let suffix = &precise.text[int_end..];

    let base = out.len();
    let Some(slot) = rendering.span(smallest) else {
        // Template without this field: no place to splice the fraction.
        out.push_str(&rendering.text);
        return;
    };
    let insert_at = slot.end;
    out.push_str(&rendering.text[..insert_at]);
    out.push_str(suffix);
    out.push_str(&rendering.text[insert_at..]);

    let shift = |span: core::ops::Range<usize>| {
        base + insert_at + span.start - int_end..base + insert_at + span.end - int_end
    };
    match pos.field() {
        Some(Field::Integer) => pos.set(base + slot.start..base + slot.end),
        Some(field @ (Field::DecimalSeparator | Field::Fraction)) => {
            if let Some(span) = precise.span(field) {
                pos.set(shift(span));
            }
        }
        _ => {}
    }
    let rendered = &out[base..];
    tracing::trace!(?style, rendered, "clock duration rendered");
}
