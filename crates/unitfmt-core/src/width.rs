#![forbid(unsafe_code)]

//! Formatting widths and the width fallback policy.
//!
//! Pattern data exists for three widths: [`Width::Wide`], [`Width::Short`]
//! and [`Width::Narrow`]. [`Width::Numeric`] borrows narrow unit patterns
//! whenever a measure is not rendered as a clock duration.
//!
//! When data is missing at the requested width, lookups try
//! [`FALLBACK_WIDTHS`] in order: short first, then wide.

use core::fmt;

/// How verbose rendered unit names are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Width {
    /// "5 hours"
    #[default]
    Wide,
    /// "5 hr"
    Short,
    /// "5h"
    Narrow,
    /// "5:37" for hour/minute/second sequences, narrow otherwise.
    Numeric,
}

impl Width {
    /// The width whose pattern data serves this width.
    #[must_use]
    pub const fn pattern_width(self) -> Self {
        match self {
            Self::Numeric => Self::Narrow,
            other => other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Short => "short",
            Self::Narrow => "narrow",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widths tried, in order, after the requested width has no data.
pub const FALLBACK_WIDTHS: [Width; 2] = [Width::Short, Width::Wide];

/// The requested width (resolved through [`Width::pattern_width`]) followed
/// by the fallback widths it is not already equal to.
pub fn fallback_chain(width: Width) -> impl Iterator<Item = Width> {
    let first = width.pattern_width();
    core::iter::once(first).chain(FALLBACK_WIDTHS.into_iter().filter(move |w| *w != first))
}

/// Look up data along the fallback chain, logging when a fallback width is
/// used.
pub fn with_fallback<T>(width: Width, mut lookup: impl FnMut(Width) -> Option<T>) -> Option<T> {
    let requested = width.pattern_width();
    fallback_chain(width).find_map(|w| {
        let found = lookup(w)?;
        if w != requested {
            tracing::debug!(
                requested = %requested,
                used = %w,
                "width fallback"
            );
        }
        Some(found)
    })
}

/// Three optional slots (narrow, short, wide) with the fallback policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthFallbackTable<T> {
    narrow: Option<T>,
    short: Option<T>,
    wide: Option<T>,
}

impl<T> Default for WidthFallbackTable<T> {
    fn default() -> Self {
        Self {
            narrow: None,
            short: None,
            wide: None,
        }
    }
}

impl<T> WidthFallbackTable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry stored at exactly this width.
    #[must_use]
    pub fn get_exact(&self, width: Width) -> Option<&T> {
        match width.pattern_width() {
            Width::Narrow | Width::Numeric => self.narrow.as_ref(),
            Width::Short => self.short.as_ref(),
            Width::Wide => self.wide.as_ref(),
        }
    }

    /// The entry at `width`, else at the first fallback width that has one.
    #[must_use]
    pub fn get(&self, width: Width) -> Option<&T> {
        with_fallback(width, |w| self.get_exact(w))
    }

    /// Mutable access to the slot for `width`.
    pub fn slot_mut(&mut self, width: Width) -> &mut Option<T> {
        match width.pattern_width() {
            Width::Narrow | Width::Numeric => &mut self.narrow,
            Width::Short => &mut self.short,
            Width::Wide => &mut self.wide,
        }
    }

    /// Store `value` at `width`, replacing any previous entry.
    pub fn set(&mut self, width: Width, value: T) {
        *self.slot_mut(width) = Some(value);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.narrow.is_none() && self.short.is_none() && self.wide.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_uses_narrow_data() {
        assert_eq!(Width::Numeric.pattern_width(), Width::Narrow);
        assert_eq!(Width::Short.pattern_width(), Width::Short);
    }

    #[test]
    fn chain_orders() {
        let chain = |w| fallback_chain(w).collect::<Vec<_>>();
        assert_eq!(
            chain(Width::Narrow),
            [Width::Narrow, Width::Short, Width::Wide]
        );
        assert_eq!(chain(Width::Short), [Width::Short, Width::Wide]);
        assert_eq!(chain(Width::Wide), [Width::Wide, Width::Short]);
        assert_eq!(
            chain(Width::Numeric),
            [Width::Narrow, Width::Short, Width::Wide]
        );
    }

    #[test]
    fn exact_hit() {
        let mut table = WidthFallbackTable::new();
        table.set(Width::Narrow, "n");
        table.set(Width::Wide, "w");
        assert_eq!(table.get(Width::Narrow), Some(&"n"));
        assert_eq!(table.get(Width::Numeric), Some(&"n"));
    }

    #[test]
    fn narrow_falls_back_to_short_then_wide() {
        let mut table = WidthFallbackTable::new();
        table.set(Width::Wide, "w");
        assert_eq!(table.get(Width::Narrow), Some(&"w"));
        table.set(Width::Short, "s");
        assert_eq!(table.get(Width::Narrow), Some(&"s"));
    }

    #[test]
    fn wide_falls_back_to_short() {
        let mut table = WidthFallbackTable::new();
        table.set(Width::Short, "s");
        assert_eq!(table.get(Width::Wide), Some(&"s"));
        assert_eq!(table.get_exact(Width::Wide), None);
    }

    #[test]
    fn empty_table_fails() {
        let table: WidthFallbackTable<&str> = WidthFallbackTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(Width::Short), None);
    }
}
