//! Property-based invariant tests for the core building blocks.
//!
//! 1.  `compile` is total: it never panics on arbitrary input
//! 2.  Text without quotes or braces compiles to itself
//! 3.  Placeholder offsets are ascending and inside the literal
//! 4.  `placeholder_count` is one plus the largest id
//! 5.  Every recorded offset points at the inserted value
//! 6.  Too few values fail and leave the output unchanged
//! 7.  `format_and_replace` with an existing head equals a manual prepend
//! 8.  A set holding only `other` answers every lookup with it
//! 9.  Rendered decimals report the integer field and matching operands
//! 10. Truncating renderers never move away from zero
//! 11. Fallback chains start at the pattern width and never repeat

use proptest::prelude::*;
use unitfmt_core::{
    Arg, CompiledPattern, DecimalFormat, Field, FormatError, PluralCategory, PluralCategorySet,
    RoundingMode, Width, fallback_chain,
};

// ── Helpers ──────────────────────────────────────────────────────────

/// A template made of literal runs and `{id}` references, plus the values
/// `"<0>"`, `"<1>"`, ... for every id it can reference.
fn template_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec(("[a-z ,.]{0,6}", prop::option::of(0usize..5)), 0..8).prop_map(
        |parts| {
            let mut template = String::new();
            for (text, id) in &parts {
                template.push_str(text);
                if let Some(id) = id {
                    template.push_str(&format!("{{{id}}}"));
                }
            }
            let values = (0..5).map(|i| format!("<{i}>")).collect();
            (template, values)
        },
    )
}

fn widths() -> [Width; 4] {
    [Width::Wide, Width::Short, Width::Narrow, Width::Numeric]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. compile is total
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn compile_never_panics(template in ".*") {
        let pattern = CompiledPattern::compile(&template);
        prop_assert!(pattern.literal_text().len() <= template.len() + 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Plain text is its own pattern
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plain_text_is_identity(text in "[^'{]*") {
        let pattern = CompiledPattern::compile(&text);
        prop_assert_eq!(pattern.placeholder_count(), 0);
        prop_assert_eq!(pattern.format(&[]).unwrap(), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Offsets are ascending and in bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_ascending((template, _) in template_strategy()) {
        let pattern = CompiledPattern::compile(&template);
        let offsets: Vec<usize> = pattern.placeholders().iter().map(|p| p.offset).collect();
        prop_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(offsets.iter().all(|&o| o <= pattern.literal_text().len()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. placeholder_count is one plus the largest id
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn count_is_max_id_plus_one((template, _) in template_strategy()) {
        let pattern = CompiledPattern::compile(&template);
        let expected = pattern
            .placeholders()
            .iter()
            .map(|p| p.id + 1)
            .max()
            .unwrap_or(0);
        prop_assert_eq!(pattern.placeholder_count(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Offsets point at the inserted values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_locate_values(
        (template, values) in template_strategy(),
        prefix in "[a-z]{0,5}",
    ) {
        let pattern = CompiledPattern::compile(&template);
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let mut out = prefix.clone();
        let mut offsets = [None; 5];
        pattern.format_and_append(&refs, &mut out, &mut offsets).unwrap();

        prop_assert!(out.starts_with(&prefix));
        for (id, offset) in offsets.iter().enumerate() {
            let used = pattern.placeholders().iter().any(|p| p.id == id);
            match offset {
                Some(at) => {
                    prop_assert!(used);
                    prop_assert_eq!(&out[*at..*at + refs[id].len()], refs[id]);
                }
                None => prop_assert!(!used),
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Arity failures leave the output untouched
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn too_few_values_is_an_error(
        head in "[a-z ]{0,8}",
        id in 1usize..6,
        before in "[a-z]{0,8}",
    ) {
        let pattern = CompiledPattern::compile(&format!("{head}{{{id}}}"));
        let values = vec!["v"; id];
        let mut out = before.clone();
        let err = pattern.format_and_append(&values, &mut out, &mut []).unwrap_err();
        prop_assert_eq!(
            err,
            FormatError::InsufficientArguments { required: id + 1, supplied: id }
        );
        prop_assert_eq!(out, before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Replace with an existing head equals a manual prepend
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replace_equals_prepend(
        existing in "[a-z0-9 ]{0,40}",
        sep in "[,; ]{0,3}",
        tail in "[a-z]{0,8}",
    ) {
        let pattern = CompiledPattern::compile(&format!("{{0}}{sep}{{1}}"));
        let mut replaced = existing.clone();
        let mut offsets = [None; 2];
        pattern
            .format_and_replace(&[Arg::Existing, Arg::Text(&tail)], &mut replaced, &mut offsets)
            .unwrap();

        let mut manual = existing.clone();
        let mut fresh = String::new();
        pattern.format_and_append(&["", &tail], &mut fresh, &mut []).unwrap();
        manual.push_str(&fresh);

        prop_assert_eq!(&replaced, &manual);
        prop_assert_eq!(offsets[0], Some(0));
        prop_assert_eq!(offsets[1], Some(existing.len() + sep.len()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. `other` answers every lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn other_only_set_answers_everything(name in "[a-z]{0,10}") {
        let mut set = PluralCategorySet::new();
        set.add("other", "{0} units").unwrap();
        prop_assert!(set.is_valid());
        let other = set.get(PluralCategory::Other).cloned();
        prop_assert_eq!(set.get_by_category(&name).cloned(), other.clone());
        for category in PluralCategory::ALL {
            prop_assert_eq!(set.select(category).cloned(), other.clone());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Rendered decimals expose the integer field and operands
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn integer_field_matches_operands(value in 0u32..10_000_000) {
        let rendered = DecimalFormat::default().render(f64::from(value));
        let span = rendered.span(Field::Integer).unwrap();
        let digits: String = rendered.text[span].chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(digits, value.to_string());
        prop_assert_eq!(rendered.operands.i, u64::from(value));
        prop_assert_eq!(rendered.operands.v, 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Truncation never moves away from zero
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn truncation_never_grows(value in -1.0e6f64..1.0e6, digits in 0u8..4) {
        let format = DecimalFormat::default()
            .with_grouping(false)
            .with_fraction_digits(0, digits)
            .with_rounding(RoundingMode::Down);
        let text = format.render(value).text;
        let parsed: f64 = text.parse().unwrap();
        prop_assert!(parsed.abs() <= value.abs());
        prop_assert!(value.abs() - parsed.abs() < 10f64.powi(-i32::from(digits)) + 1e-9);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. Fallback chains
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn fallback_chains_are_distinct_and_end_in_data_widths() {
    for width in widths() {
        let chain: Vec<Width> = fallback_chain(width).collect();
        assert_eq!(chain[0], width.pattern_width());
        let mut dedup = chain.clone();
        dedup.sort_by_key(|w| w.as_str());
        dedup.dedup();
        assert_eq!(dedup.len(), chain.len(), "{width}: {chain:?}");
        assert!(chain.iter().all(|w| *w != Width::Numeric));
        assert!(chain.contains(&Width::Wide) && chain.contains(&Width::Short));
    }
}
