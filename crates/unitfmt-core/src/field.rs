#![forbid(unsafe_code)]

//! Field positions: where a part of a rendered number landed in the output.
//!
//! A caller asks for one [`Field`] and receives byte offsets into its own
//! output buffer. `(0, 0)` means "not found", which cannot be told apart from
//! an empty span at the very start of the buffer.

use core::ops::Range;

/// A part of a rendered decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The integer digits, grouping separators included.
    Integer,
    /// The fraction digits.
    Fraction,
    /// The decimal separator.
    DecimalSeparator,
    /// The first grouping separator.
    GroupingSeparator,
    /// The minus sign.
    Sign,
}

/// A requested field and the span where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldPosition {
    field: Option<Field>,
    begin: usize,
    end: usize,
}

impl FieldPosition {
    /// Track `field`.
    #[must_use]
    pub const fn new(field: Field) -> Self {
        Self {
            field: Some(field),
            begin: 0,
            end: 0,
        }
    }

    /// Track nothing.
    #[must_use]
    pub const fn dont_care() -> Self {
        Self {
            field: None,
            begin: 0,
            end: 0,
        }
    }

    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        self.field
    }

    #[must_use]
    pub const fn begin(&self) -> usize {
        self.begin
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Whether a non-trivial span has been recorded.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !(self.begin == 0 && self.end == 0)
    }

    /// The recorded span, if any.
    #[must_use]
    pub fn span(&self) -> Option<Range<usize>> {
        self.is_found().then_some(self.begin..self.end)
    }

    pub fn set(&mut self, span: Range<usize>) {
        self.begin = span.start;
        self.end = span.end;
    }

    /// Forget the recorded span, keeping the requested field.
    pub fn reset(&mut self) {
        self.begin = 0;
        self.end = 0;
    }

    /// A fresh position tracking the same field.
    #[must_use]
    pub const fn same_field(&self) -> Self {
        Self {
            field: self.field,
            begin: 0,
            end: 0,
        }
    }
}

/// A field and its byte span inside a rendered string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpan {
    pub field: Field,
    pub span: Range<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_position_is_not_found() {
        let pos = FieldPosition::new(Field::Integer);
        assert_eq!(pos.field(), Some(Field::Integer));
        assert!(!pos.is_found());
        assert_eq!(pos.span(), None);
    }

    #[test]
    fn set_and_reset() {
        let mut pos = FieldPosition::new(Field::DecimalSeparator);
        pos.set(10..11);
        assert!(pos.is_found());
        assert_eq!((pos.begin(), pos.end()), (10, 11));
        pos.reset();
        assert!(!pos.is_found());
        assert_eq!(pos.field(), Some(Field::DecimalSeparator));
    }

    #[test]
    fn span_at_origin_reads_as_not_found() {
        let mut pos = FieldPosition::new(Field::Fraction);
        pos.set(0..0);
        assert!(!pos.is_found());
    }

    #[test]
    fn dont_care_has_no_field() {
        assert_eq!(FieldPosition::dont_care().field(), None);
        assert_eq!(
            FieldPosition::new(Field::Sign).same_field().field(),
            Some(Field::Sign)
        );
    }
}
