#![forbid(unsafe_code)]

//! CLDR plural rules over exact decimal operands.
//!
//! A [`PluralRule`] classifies a number into a [`PluralCategory`]. Rules see
//! the number as it was rendered, through [`PluralOperands`], so that `"1"`
//! and `"1.0"` can select different categories (English uses `one` for the
//! former and `other` for the latter).
//!
//! # Invariants
//!
//! 1. Every `PluralRule` maps any operands to exactly one `PluralCategory`.
//! 2. The `Other` category is always the catch-all fallback.
//! 3. Rules are pure functions: same operands always yield same category.

use core::fmt;
use core::str::FromStr;

use crate::error::FormatError;

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in slot order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Dense slot index in `0..6`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// CLDR keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FormatError::UnknownCategory(s.to_owned()))
    }
}

/// CLDR plural operands of a rendered decimal.
///
/// | Operand | Meaning |
/// |---------|---------|
/// | `n` | absolute value |
/// | `i` | integer digits |
/// | `v` | number of visible fraction digits, trailing zeros included |
/// | `f` | visible fraction digits as an integer, trailing zeros included |
/// | `t` | visible fraction digits as an integer, trailing zeros removed |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PluralOperands {
    pub n: f64,
    pub i: u64,
    pub v: usize,
    pub f: u64,
    pub t: u64,
}

impl PluralOperands {
    /// Operands of an integer count.
    #[must_use]
    pub fn from_integer(count: i64) -> Self {
        let i = count.unsigned_abs();
        Self {
            n: i as f64,
            i,
            ..Self::default()
        }
    }

    /// Operands from the integer and fraction digit strings of a rendered
    /// decimal (ASCII digits, no separators, no sign).
    #[must_use]
    pub fn from_digits(integer: &str, fraction: &str) -> Self {
        let i = saturating_digits(integer);
        let f = saturating_digits(fraction);
        let t = saturating_digits(fraction.trim_end_matches('0'));
        let n = if fraction.is_empty() {
            i as f64
        } else {
            format!("{integer}.{fraction}").parse().unwrap_or(i as f64)
        };
        Self {
            n,
            i,
            v: fraction.len(),
            f,
            t,
        }
    }

    /// Operands of a binary floating-point value, using its shortest
    /// round-trip decimal form.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self {
                n: value.abs(),
                ..Self::default()
            };
        }
        let text = format!("{}", value.abs());
        match text.split_once('.') {
            Some((integer, fraction)) => Self::from_digits(integer, fraction),
            None => Self::from_digits(&text, ""),
        }
    }

    fn is_integer(&self) -> bool {
        self.t == 0
    }
}

fn saturating_digits(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(b.wrapping_sub(b'0')))
    })
}

/// A plural rule function that maps operands to a plural category.
///
/// Built-in rules cover the most common CLDR language groups.
/// Custom rules can be provided via the function pointer variant.
#[derive(Clone, Copy)]
pub enum PluralRule {
    /// English-like: `one` for exactly 1 with no visible fraction digits.
    English,
    /// Russian/Slavic: `one`, `few`, `many` by last digits of integers,
    /// `other` for decimals.
    Russian,
    /// Arabic: `zero`, `one`, `two`, `few` for 3-10, `many` for 11-99
    /// (by last two digits), `other` otherwise.
    Arabic,
    /// French-like: `one` when the integer part is 0 or 1.
    French,
    /// Chinese/Japanese/Korean: always `other` (no plural distinction).
    CJK,
    /// Polish: like Russian but `one` only for exactly 1.
    Polish,
    /// Custom rule function.
    Custom(fn(&PluralOperands) -> PluralCategory),
}

impl PluralRule {
    /// Determine the plural category for an integer count.
    #[must_use]
    pub fn categorize(&self, count: i64) -> PluralCategory {
        self.categorize_operands(&PluralOperands::from_integer(count))
    }

    /// Determine the plural category for a rendered decimal.
    #[must_use]
    pub fn categorize_operands(&self, ops: &PluralOperands) -> PluralCategory {
        match self {
            Self::English => english_rule(ops),
            Self::Russian => russian_rule(ops),
            Self::Arabic => arabic_rule(ops),
            Self::French => french_rule(ops),
            Self::CJK => PluralCategory::Other,
            Self::Polish => polish_rule(ops),
            Self::Custom(f) => f(ops),
        }
    }

    /// Select the best rule for a locale tag (e.g., `"en"`, `"ru"`, `"ar"`).
    ///
    /// Falls back to English if the language is unknown.
    #[must_use]
    pub fn for_locale(lang: &str) -> Self {
        let primary = lang.split(['-', '_']).next().unwrap_or(lang);

        match primary.to_ascii_lowercase().as_str() {
            "en" | "de" | "nl" | "sv" | "da" | "no" | "nb" | "nn" | "it" | "es" | "pt" | "el"
            | "hu" | "fi" | "et" | "he" | "tr" | "bg" => Self::English,
            "fr" | "hi" | "bn" => Self::French,
            "ru" | "uk" | "hr" | "sr" | "bs" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => Self::CJK,
            _ => Self::English,
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "PluralRule::English"),
            Self::Russian => write!(f, "PluralRule::Russian"),
            Self::Arabic => write!(f, "PluralRule::Arabic"),
            Self::French => write!(f, "PluralRule::French"),
            Self::CJK => write!(f, "PluralRule::CJK"),
            Self::Polish => write!(f, "PluralRule::Polish"),
            Self::Custom(_) => write!(f, "PluralRule::Custom(...)"),
        }
    }
}

// ── Rule implementations ────────────────────────────────────────────

fn english_rule(ops: &PluralOperands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french_rule(ops: &PluralOperands) -> PluralCategory {
    if ops.i <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn russian_rule(ops: &PluralOperands) -> PluralCategory {
    if ops.v != 0 {
        return PluralCategory::Other;
    }
    let mod10 = ops.i % 10;
    let mod100 = ops.i % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

fn polish_rule(ops: &PluralOperands) -> PluralCategory {
    if ops.v != 0 {
        return PluralCategory::Other;
    }
    let mod10 = ops.i % 10;
    let mod100 = ops.i % 100;

    if ops.i == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn arabic_rule(ops: &PluralOperands) -> PluralCategory {
    if !ops.is_integer() {
        return PluralCategory::Other;
    }
    let mod100 = ops.i % 100;
    match ops.i {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&mod100) => PluralCategory::Few,
        _ if (11..=99).contains(&mod100) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}
