#![forbid(unsafe_code)]

//! Plural-variant dispatch: one compiled pattern per plural category.
//!
//! A [`PluralCategorySet`] holds up to six single-placeholder patterns
//! ("{0} hour", "{0} hours", ...). Formatting renders the number once,
//! classifies the rendered digits, picks the category's pattern (or `other`)
//! and substitutes the number as placeholder 0.

use crate::decimal::{DecimalFormat, RenderedDecimal};
use crate::error::{FormatError, Result};
use crate::field::FieldPosition;
use crate::pattern::CompiledPattern;
use crate::plural::{PluralCategory, PluralRule};

/// Quantity templates may only reference the number itself.
pub const MAX_QUANTITY_PLACEHOLDERS: usize = 1;

/// Compiled patterns keyed by plural category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralCategorySet {
    patterns: [Option<CompiledPattern>; 6],
}

impl PluralCategorySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `template` for the category named `category`.
    ///
    /// Rejects unknown category names and templates with more than one
    /// placeholder; a rejected add leaves the set unchanged.
    pub fn add(&mut self, category: &str, template: &str) -> Result<()> {
        let category = category.parse::<PluralCategory>()?;
        self.add_category(category, template)
    }

    /// Compile `template` for `category`, replacing any previous pattern.
    pub fn add_category(&mut self, category: PluralCategory, template: &str) -> Result<()> {
        let pattern = CompiledPattern::compile(template);
        if pattern.placeholder_count() > MAX_QUANTITY_PLACEHOLDERS {
            return Err(FormatError::TooManyPlaceholders {
                count: pattern.placeholder_count(),
                limit: MAX_QUANTITY_PLACEHOLDERS,
            });
        }
        self.patterns[category.index()] = Some(pattern);
        Ok(())
    }

    /// The pattern stored for exactly `category`.
    #[must_use]
    pub fn get(&self, category: PluralCategory) -> Option<&CompiledPattern> {
        self.patterns[category.index()].as_ref()
    }

    /// The pattern for `category`, or the `other` pattern when the category
    /// is unset.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> Option<&CompiledPattern> {
        self.get(category)
            .or_else(|| self.get(PluralCategory::Other))
    }

    /// The pattern for a category name, or the `other` pattern when the name
    /// is unknown or its category is unset.
    #[must_use]
    pub fn get_by_category(&self, category: &str) -> Option<&CompiledPattern> {
        match category.parse::<PluralCategory>() {
            Ok(category) => self.select(category),
            Err(_) => self.get(PluralCategory::Other),
        }
    }

    /// Usable only once `other` is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.get(PluralCategory::Other).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.iter().all(Option::is_none)
    }

    /// Drop every pattern.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render `value` with `number`, select by `rule`, and append to `out`.
    ///
    /// A requested field in `pos` is reported in `out` coordinates.
    pub fn format(
        &self,
        value: f64,
        number: &DecimalFormat,
        rule: &PluralRule,
        out: &mut String,
        pos: &mut FieldPosition,
    ) -> Result<()> {
        let rendered = number.render(value);
        let category = rule.categorize_operands(&rendered.operands);
        let pattern = self
            .select(category)
            .ok_or_else(|| FormatError::MissingFallbackData {
                key: format!("plural category {category}"),
            })?;
        if self.get(category).is_none() {
            tracing::debug!(category = %category, "plural category fell back to other");
        }
        format_quantity(pattern, &rendered, out, pos)
    }
}

/// Substitute a rendered number into a quantity pattern, translating the
/// requested field from number coordinates into `out` coordinates.
pub fn format_quantity(
    pattern: &CompiledPattern,
    rendered: &RenderedDecimal,
    out: &mut String,
    pos: &mut FieldPosition,
) -> Result<()> {
    let mut offsets = [None];
    pattern.format_and_append(&[rendered.text.as_str()], out, &mut offsets)?;
    if let (Some(field), Some(inserted)) = (pos.field(), offsets[0]) {
        if let Some(span) = rendered.span(field) {
            pos.set(inserted + span.start..inserted + span.end);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::DecimalSymbols;
    use crate::field::Field;

    fn hours() -> PluralCategorySet {
        let mut set = PluralCategorySet::new();
        set.add("one", "{0} hour").unwrap();
        set.add("other", "{0} hours").unwrap();
        set
    }

    #[test]
    fn validity_requires_other() {
        let mut set = PluralCategorySet::new();
        assert!(!set.is_valid());
        set.add("one", "{0} hour").unwrap();
        assert!(!set.is_valid());
        set.add("other", "{0} hours").unwrap();
        assert!(set.is_valid());
    }

    #[test]
    fn lookups_fall_back_to_other() {
        let mut set = PluralCategorySet::new();
        set.add("other", "{0} things").unwrap();
        let other = set.get(PluralCategory::Other).cloned();
        assert_eq!(set.get_by_category("one").cloned(), other);
        assert_eq!(set.get_by_category("few").cloned(), other);
        assert_eq!(set.get_by_category("bogus").cloned(), other);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut set = hours();
        let before = set.clone();
        assert_eq!(
            set.add("several", "{0} x"),
            Err(FormatError::UnknownCategory("several".into()))
        );
        assert_eq!(set, before);
    }

    #[test]
    fn two_placeholders_are_rejected() {
        let mut set = hours();
        let before = set.clone();
        assert_eq!(
            set.add("few", "{0} of {1}"),
            Err(FormatError::TooManyPlaceholders { count: 2, limit: 1 })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn placeholder_free_template_is_allowed() {
        let mut set = PluralCategorySet::new();
        set.add("one", "an hour").unwrap();
        assert_eq!(
            set.get(PluralCategory::One).unwrap().placeholder_count(),
            0
        );
    }

    #[test]
    fn re_add_replaces() {
        let mut set = hours();
        set.add("one", "{0} hr").unwrap();
        assert_eq!(set.get(PluralCategory::One).unwrap().literal_text(), " hr");
    }

    #[test]
    fn reset_empties() {
        let mut set = hours();
        set.reset();
        assert!(set.is_empty());
        assert!(!set.is_valid());
    }

    #[test]
    fn format_picks_category_from_rendered_digits() {
        let set = hours();
        let rule = PluralRule::English;
        let mut out = String::new();
        let mut pos = FieldPosition::dont_care();

        let whole = DecimalFormat::new(DecimalSymbols::LATIN);
        set.format(1.0, &whole, &rule, &mut out, &mut pos).unwrap();
        assert_eq!(out, "1 hour");

        out.clear();
        let fixed = whole.clone().with_fraction_digits(1, 1);
        set.format(1.0, &fixed, &rule, &mut out, &mut pos).unwrap();
        assert_eq!(out, "1.0 hours");
    }

    #[test]
    fn format_reports_field_in_output_coordinates() {
        let mut set = PluralCategorySet::new();
        set.add("other", "about {0} ft").unwrap();
        let mut out = String::from("12: ");
        let mut pos = FieldPosition::new(Field::DecimalSeparator);
        set.format(
            43.5,
            &DecimalFormat::default(),
            &PluralRule::English,
            &mut out,
            &mut pos,
        )
        .unwrap();
        assert_eq!(out, "12: about 43.5 ft");
        assert_eq!(pos.span(), Some(12..13));
    }

    #[test]
    fn format_without_other_fails() {
        let mut set = PluralCategorySet::new();
        set.add("one", "{0} hour").unwrap();
        let mut out = String::new();
        let err = set
            .format(
                5.0,
                &DecimalFormat::default(),
                &PluralRule::English,
                &mut out,
                &mut FieldPosition::dont_care(),
            )
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingFallbackData { .. }));
        assert!(out.is_empty());
    }
}
