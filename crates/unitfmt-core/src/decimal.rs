#![forbid(unsafe_code)]

//! Locale decimal rendering with field spans and exact plural operands.
//!
//! [`DecimalFormat`] renders an `f64` from its shortest round-trip decimal
//! form, so rounding happens on decimal digits and `2.675` rounded to two
//! places is `2.68` under half-up, as a reader would expect.
//!
//! The result, [`RenderedDecimal`], carries the text, the spans of every
//! [`Field`] present, and the [`PluralOperands`] of the digits actually shown.

use smallvec::SmallVec;

use crate::field::{Field, FieldSpan};
use crate::plural::PluralOperands;

/// Locale number symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalSymbols {
    pub decimal: char,
    pub grouping: char,
    pub minus: char,
}

impl DecimalSymbols {
    /// `1,234.5`
    pub const LATIN: Self = Self {
        decimal: '.',
        grouping: ',',
        minus: '-',
    };
}

impl Default for DecimalSymbols {
    fn default() -> Self {
        Self::LATIN
    }
}

/// How digits beyond the maximum fraction digits are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Truncate toward zero.
    Down,
}

/// A rendered number.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDecimal {
    pub text: String,
    pub spans: SmallVec<[FieldSpan; 4]>,
    pub operands: PluralOperands,
    pub negative: bool,
}

impl RenderedDecimal {
    /// Byte span of `field` inside `text`.
    #[must_use]
    pub fn span(&self, field: Field) -> Option<core::ops::Range<usize>> {
        self.spans
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.span.clone())
    }
}

/// A decimal number renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormat {
    symbols: DecimalSymbols,
    min_fraction_digits: u8,
    max_fraction_digits: u8,
    grouping: bool,
    rounding: RoundingMode,
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::new(DecimalSymbols::LATIN)
    }
}

impl DecimalFormat {
    /// 0 to 3 fraction digits, half-even rounding, grouping on.
    #[must_use]
    pub const fn new(symbols: DecimalSymbols) -> Self {
        Self {
            symbols,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping: true,
            rounding: RoundingMode::HalfEven,
        }
    }

    /// Set the fraction digit range. `max` is raised to `min` if lower.
    #[must_use]
    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max.max(min);
        self
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// The renderer used for every item but the last in a measure list:
    /// same symbols, no fraction digits, truncation toward zero.
    #[must_use]
    pub fn integer_style(&self) -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            rounding: RoundingMode::Down,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn symbols(&self) -> DecimalSymbols {
        self.symbols
    }

    #[must_use]
    pub const fn max_fraction_digits(&self) -> u8 {
        self.max_fraction_digits
    }

    /// Render `value`.
    #[must_use]
    pub fn render(&self, value: f64) -> RenderedDecimal {
        let negative = value < 0.0;
        let mut text = String::with_capacity(24);
        let mut spans = SmallVec::new();

        if negative {
            text.push(self.symbols.minus);
            spans.push(FieldSpan {
                field: Field::Sign,
                span: 0..text.len(),
            });
        }

        if !value.is_finite() {
            text.push_str(if value.is_nan() { "NaN" } else { "∞" });
            return RenderedDecimal {
                text,
                spans,
                operands: PluralOperands::from_f64(value),
                negative,
            };
        }

        let shortest = format!("{}", value.abs());
        let (int_part, frac_part) = shortest
            .split_once('.')
            .unwrap_or((shortest.as_str(), ""));
        let mut integer: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
        let mut fraction: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();

        self.round(&mut integer, &mut fraction);

        let min = usize::from(self.min_fraction_digits);
        while fraction.len() > min && fraction.last() == Some(&0) {
            fraction.pop();
        }
        fraction.resize(fraction.len().max(min), 0);

        const ZERO: &[u8] = &[0];
        let integer = match integer.iter().position(|&d| d != 0) {
            Some(start) => &integer[start..],
            None => ZERO,
        };

        let int_start = text.len();
        let mut first_grouping = None;
        for (idx, digit) in integer.iter().enumerate() {
            let remaining = integer.len() - idx;
            if self.grouping && idx > 0 && remaining % 3 == 0 {
                let at = text.len();
                text.push(self.symbols.grouping);
                first_grouping.get_or_insert(at..text.len());
            }
            text.push(char::from(b'0' + digit));
        }
        spans.push(FieldSpan {
            field: Field::Integer,
            span: int_start..text.len(),
        });
        if let Some(span) = first_grouping {
            spans.push(FieldSpan {
                field: Field::GroupingSeparator,
                span,
            });
        }

        if !fraction.is_empty() {
            let sep_start = text.len();
            text.push(self.symbols.decimal);
            spans.push(FieldSpan {
                field: Field::DecimalSeparator,
                span: sep_start..text.len(),
            });
            let frac_start = text.len();
            text.extend(fraction.iter().map(|d| char::from(b'0' + d)));
            spans.push(FieldSpan {
                field: Field::Fraction,
                span: frac_start..text.len(),
            });
        }

        let int_digits: String = integer.iter().map(|d| char::from(b'0' + d)).collect();
        let frac_digits: String = fraction.iter().map(|d| char::from(b'0' + d)).collect();

        RenderedDecimal {
            text,
            spans,
            operands: PluralOperands::from_digits(&int_digits, &frac_digits),
            negative,
        }
    }

    /// Cut `fraction` to the maximum digits, carrying into `integer`.
    fn round(&self, integer: &mut Vec<u8>, fraction: &mut Vec<u8>) {
        let keep = usize::from(self.max_fraction_digits);
        if fraction.len() <= keep {
            return;
        }
        let dropped = fraction.split_off(keep);
        let round_up = match self.rounding {
            RoundingMode::Down => false,
            RoundingMode::HalfUp => dropped[0] >= 5,
            RoundingMode::HalfEven => match dropped[0] {
                0..=4 => false,
                6..=9 => true,
                _ => {
                    let tail_nonzero = dropped[1..].iter().any(|&d| d != 0);
                    let last_kept = fraction.last().or(integer.last()).copied().unwrap_or(0);
                    tail_nonzero || last_kept % 2 == 1
                }
            },
        };
        if !round_up {
            return;
        }
        for digit in fraction.iter_mut().rev().chain(integer.iter_mut().rev()) {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return;
            }
        }
        integer.insert(0, 1);
    }
}
