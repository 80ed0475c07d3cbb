#![forbid(unsafe_code)]

//! Clock templates for numeric durations ("h:mm:ss").
//!
//! A template is a sequence of fields and literals:
//!
//! - A run of `h` or `H` is hours, `m` is minutes, `s` is seconds. The run
//!   length is the minimum number of digits; shorter values are zero-padded.
//! - Text inside `'...'` is literal; `''` is one apostrophe, inside or
//!   outside quotes.
//! - Any other character is literal.
//!
//! The first field in a template carries the whole duration in its unit, so
//! `h:mm` renders 30 hours as `30:00`. Later fields are taken modulo 60.

use core::fmt::Write as _;
use core::ops::Range;

use smallvec::SmallVec;

/// A field of a clock template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockField {
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field { field: ClockField, digits: usize },
    Literal(String),
}

/// A parsed clock template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTemplate {
    source: String,
    tokens: SmallVec<[Token; 5]>,
}

/// A formatted clock string with the span of every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockRendering {
    pub text: String,
    pub fields: SmallVec<[(ClockField, Range<usize>); 3]>,
}

impl ClockRendering {
    /// Byte span of `field` in `text`.
    #[must_use]
    pub fn span(&self, field: ClockField) -> Option<Range<usize>> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, span)| span.clone())
    }
}

impl ClockTemplate {
    /// Parse a template. Never fails; unknown letters are literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut tokens = SmallVec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\'' if chars.peek() == Some(&'\'') => {
                    chars.next();
                    literal.push('\'');
                }
                '\'' => loop {
                    match chars.next() {
                        None => break,
                        Some('\'') if chars.peek() == Some(&'\'') => {
                            chars.next();
                            literal.push('\'');
                        }
                        Some('\'') => break,
                        Some(c) => literal.push(c),
                    }
                },
                'h' | 'H' | 'm' | 's' => {
                    let field = match ch {
                        'm' => ClockField::Minute,
                        's' => ClockField::Second,
                        _ => ClockField::Hour,
                    };
                    let mut digits = 1;
                    while chars.peek() == Some(&ch) {
                        chars.next();
                        digits += 1;
                    }
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Field { field, digits });
                }
                _ => literal.push(ch),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self {
            source: template.to_owned(),
            tokens,
        }
    }

    /// The template as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Fields in template order.
    pub fn fields(&self) -> impl Iterator<Item = ClockField> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Field { field, .. } => Some(*field),
            Token::Literal(_) => None,
        })
    }

    /// Format a duration of `millis` milliseconds. Sub-second precision is
    /// dropped.
    #[must_use]
    pub fn format(&self, millis: u64) -> ClockRendering {
        let total_seconds = millis / 1000;
        let leading = self.fields().next();
        let mut text = String::with_capacity(self.source.len() + 4);
        let mut fields = SmallVec::new();

        for token in &self.tokens {
            match token {
                Token::Literal(literal) => text.push_str(literal),
                Token::Field { field, digits } => {
                    let is_leading = leading == Some(*field);
                    let value = match field {
                        ClockField::Hour => total_seconds / 3600,
                        ClockField::Minute if is_leading => total_seconds / 60,
                        ClockField::Minute => total_seconds / 60 % 60,
                        ClockField::Second if is_leading => total_seconds,
                        ClockField::Second => total_seconds % 60,
                    };
                    let start = text.len();
                    // Writing into a String cannot fail.
                    let _ = write!(text, "{value:0digits$}");
                    fields.push((*field, start..text.len()));
                }
            }
        }

        ClockRendering { text, fields }
    }
}

/// Which clock template a duration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockStyle {
    HourMinute,
    MinuteSecond,
    HourMinuteSecond,
}

/// The three clock templates of a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockPatterns {
    hour_minute: ClockTemplate,
    minute_second: ClockTemplate,
    hour_minute_second: ClockTemplate,
}

impl ClockPatterns {
    #[must_use]
    pub fn new(hour_minute: &str, minute_second: &str, hour_minute_second: &str) -> Self {
        Self {
            hour_minute: ClockTemplate::parse(hour_minute),
            minute_second: ClockTemplate::parse(minute_second),
            hour_minute_second: ClockTemplate::parse(hour_minute_second),
        }
    }

    #[must_use]
    pub fn get(&self, style: ClockStyle) -> &ClockTemplate {
        match style {
            ClockStyle::HourMinute => &self.hour_minute,
            ClockStyle::MinuteSecond => &self.minute_second,
            ClockStyle::HourMinuteSecond => &self.hour_minute_second,
        }
    }
}

impl Default for ClockPatterns {
    fn default() -> Self {
        Self::new("h:mm", "m:ss", "h:mm:ss")
    }
}
