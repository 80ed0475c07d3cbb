//! Property-based invariant tests for the measure formatter.
//!
//! 1.  Formatting is total over the built-in English units at every width
//! 2.  A prefix shifts output and field spans without changing them
//! 3.  Reported integer spans cover digits only
//! 4.  Integer clock durations render as zero-padded clocks
//! 5.  Failed formatting leaves the buffer untouched
//! 6.  Rates contain the formatted numerator

use std::sync::Arc;

use proptest::prelude::*;
use unitfmt::{FormatterConfig, MeasureFormat};
use unitfmt_core::{Field, FieldPosition, Width};
use unitfmt_data::{LocaleData, Measure, MeasureUnit, UnitTableBuilder};

// ── Helpers ──────────────────────────────────────────────────────────

fn width_strategy() -> impl Strategy<Value = Width> {
    prop_oneof![
        Just(Width::Wide),
        Just(Width::Short),
        Just(Width::Narrow),
        Just(Width::Numeric),
    ]
}

fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Integer),
        Just(Field::Fraction),
        Just(Field::DecimalSeparator),
        Just(Field::GroupingSeparator),
        Just(Field::Sign),
    ]
}

fn unit_strategy() -> impl Strategy<Value = MeasureUnit> {
    let units: Vec<MeasureUnit> = MeasureUnit::all().collect();
    prop::sample::select(units)
}

fn measure_strategy() -> impl Strategy<Value = Measure> {
    (-1.0e7f64..1.0e7, unit_strategy()).prop_map(|(v, u)| Measure::new(v, u))
}

fn en(width: Width) -> MeasureFormat {
    MeasureFormat::new(&FormatterConfig::new("en").with_width(width)).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Totality over built-in units
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn builtin_units_always_format(
        measures in prop::collection::vec(measure_strategy(), 0..5),
        width in width_strategy(),
    ) {
        let text = en(width).format(&measures);
        prop_assert!(text.is_ok(), "{measures:?} at {width}: {text:?}");
        prop_assert_eq!(text.unwrap().is_empty(), measures.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Prefix invariance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prefix_shifts_spans(
        measures in prop::collection::vec(measure_strategy(), 1..4),
        width in width_strategy(),
        field in field_strategy(),
        prefix in "[a-zé: ]{0,8}",
    ) {
        let f = en(width);
        let mut bare = String::new();
        let mut bare_pos = FieldPosition::new(field);
        f.format_measures(&measures, &mut bare, &mut bare_pos).unwrap();

        let mut prefixed = prefix.clone();
        let mut prefixed_pos = FieldPosition::new(field);
        f.format_measures(&measures, &mut prefixed, &mut prefixed_pos).unwrap();

        prop_assert_eq!(&prefixed[prefix.len()..], bare.as_str());
        let shifted = bare_pos
            .span()
            .map(|s| s.start + prefix.len()..s.end + prefix.len());
        prop_assert_eq!(prefixed_pos.span(), shifted);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Integer spans cover digits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn integer_span_is_digits(
        measures in prop::collection::vec(measure_strategy(), 1..4),
        width in width_strategy(),
    ) {
        let f = en(width);
        let mut out = String::new();
        let mut pos = FieldPosition::new(Field::Integer);
        f.format_measures(&measures, &mut out, &mut pos).unwrap();
        let span = pos.span();
        prop_assert!(span.is_some(), "no integer in {out}");
        let span = span.unwrap();
        prop_assert!(span.end <= out.len());
        prop_assert!(
            out[span.clone()].chars().all(|c| c.is_ascii_digit() || c == ','),
            "{out} at {span:?}"
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Clock durations
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn integer_clocks(hours in 0u32..1000, minutes in 0u32..60, seconds in 0u32..60) {
        let f = en(Width::Numeric);
        let text = f
            .format(&[
                Measure::new(f64::from(hours), MeasureUnit::HOUR),
                Measure::new(f64::from(minutes), MeasureUnit::MINUTE),
                Measure::new(f64::from(seconds), MeasureUnit::SECOND),
            ])
            .unwrap();
        prop_assert_eq!(text, format!("{hours}:{minutes:02}:{seconds:02}"));

        let ms = f
            .format(&[
                Measure::new(f64::from(minutes), MeasureUnit::MINUTE),
                Measure::new(f64::from(seconds), MeasureUnit::SECOND),
            ])
            .unwrap();
        prop_assert_eq!(ms, format!("{minutes}:{seconds:02}"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Errors leave the buffer untouched
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn errors_do_not_write(
        measures in prop::collection::vec(measure_strategy(), 1..4),
        width in width_strategy(),
        prefix in "[a-z]{0,6}",
    ) {
        let data: Arc<dyn LocaleData> = Arc::new(UnitTableBuilder::new("en").build());
        let f = MeasureFormat::with_data(data, &FormatterConfig::default().with_width(width));
        let mut out = prefix.clone();
        let mut pos = FieldPosition::new(Field::Integer);
        let result = f.format_measures(&measures, &mut out, &mut pos);
        prop_assert!(result.is_err());
        prop_assert_eq!(out, prefix);
        prop_assert!(!pos.is_found());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Rates contain their numerator
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rate_contains_numerator(
        value in 0.0f64..10_000.0,
        unit in unit_strategy(),
        per in unit_strategy(),
        width in prop_oneof![Just(Width::Wide), Just(Width::Short), Just(Width::Narrow)],
    ) {
        let f = en(width);
        let mut numerator = String::new();
        f.format_measure(&Measure::new(value, unit), &mut numerator, &mut FieldPosition::dont_care())
            .unwrap();

        let mut out = String::new();
        f.format_measure_per_unit(value, unit, per, &mut out, &mut FieldPosition::dont_care())
            .unwrap();
        if unitfmt_data::resolve_unit_per_unit(unit, per).is_none() {
            prop_assert!(out.contains(&numerator), "{out} lacks {numerator}");
        }
    }
}
