#![forbid(unsafe_code)]

//! Compiled `{N}` substitution templates.
//!
//! A template such as `"{0} per {1}"` is compiled once into a
//! [`CompiledPattern`]: the literal text with every placeholder removed, plus
//! an ordered table of `(id, offset)` pairs saying where each value goes.
//!
//! # Escaping
//!
//! - `''` is one literal apostrophe.
//! - `'{` is one literal brace.
//! - An apostrophe before any other character is not an escape; both
//!   characters are copied.
//! - A `{` that is not followed by one or more ASCII digits and a `}` is
//!   literal text (`{}`, `{abc}`, `{012d` and an unterminated `{12` all pass
//!   through unchanged).
//!
//! # Offsets
//!
//! All offsets are byte offsets into UTF-8 strings.

use smallvec::SmallVec;

use crate::error::{FormatError, Result};

/// One placeholder in a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderInfo {
    /// Index into the substitution values.
    pub id: usize,
    /// Byte offset into the literal text where the value is inserted.
    pub offset: usize,
}

/// A substitution argument for [`CompiledPattern::format_and_replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Borrowed text.
    Text(&'a str),
    /// The current contents of the output buffer.
    Existing,
}

/// An immutable compiled template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompiledPattern {
    literal: String,
    placeholders: SmallVec<[PlaceholderInfo; 2]>,
    placeholder_count: usize,
}

#[derive(Clone, Copy)]
enum Scan {
    Normal,
    AfterQuote,
    InPlaceholder { start: usize, id: usize, digits: usize },
}

impl CompiledPattern {
    /// Compile a template. Never fails: malformed references become literal
    /// text.
    #[must_use]
    pub fn compile(template: &str) -> Self {
        let mut literal = String::with_capacity(template.len());
        let mut placeholders: SmallVec<[PlaceholderInfo; 2]> = SmallVec::new();
        let mut placeholder_count = 0usize;
        let mut state = Scan::Normal;

        for (idx, ch) in template.char_indices() {
            state = match state {
                Scan::Normal => match ch {
                    '\'' => Scan::AfterQuote,
                    '{' => Scan::InPlaceholder {
                        start: idx,
                        id: 0,
                        digits: 0,
                    },
                    _ => {
                        literal.push(ch);
                        Scan::Normal
                    }
                },
                Scan::AfterQuote => {
                    if ch != '\'' && ch != '{' {
                        literal.push('\'');
                    }
                    literal.push(ch);
                    Scan::Normal
                }
                Scan::InPlaceholder { start, id, digits } => {
                    let next_id = ch
                        .to_digit(10)
                        .and_then(|d| id.checked_mul(10)?.checked_add(d as usize));
                    match (ch, next_id) {
                        (_, Some(id)) => Scan::InPlaceholder {
                            start,
                            id,
                            digits: digits + 1,
                        },
                        ('}', None) if digits > 0 => {
                            placeholders.push(PlaceholderInfo {
                                id,
                                offset: literal.len(),
                            });
                            placeholder_count = placeholder_count.max(id + 1);
                            Scan::Normal
                        }
                        _ => {
                            literal.push_str(&template[start..idx + ch.len_utf8()]);
                            Scan::Normal
                        }
                    }
                }
            };
        }

        match state {
            Scan::Normal => {}
            Scan::AfterQuote => literal.push('\''),
            Scan::InPlaceholder { start, .. } => literal.push_str(&template[start..]),
        }

        Self {
            literal,
            placeholders,
            placeholder_count,
        }
    }

    /// The literal text with every placeholder removed.
    #[must_use]
    pub fn literal_text(&self) -> &str {
        &self.literal
    }

    /// Placeholders in ascending offset order.
    #[must_use]
    pub fn placeholders(&self) -> &[PlaceholderInfo] {
        &self.placeholders
    }

    /// One plus the largest placeholder id (0 without placeholders).
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// True when the first placeholder sits at offset 0 and has `id`.
    #[must_use]
    pub fn starts_with_placeholder(&self, id: usize) -> bool {
        self.placeholders
            .first()
            .is_some_and(|p| p.offset == 0 && p.id == id)
    }

    /// Substitute `values` into a new string.
    pub fn format(&self, values: &[&str]) -> Result<String> {
        let mut out = String::with_capacity(self.literal.len() + 16);
        self.format_and_append(values, &mut out, &mut [])?;
        Ok(out)
    }

    /// Substitute `values` and append the result to `out`.
    ///
    /// `offsets[i]` receives the byte offset in `out` at which `values[i]`
    /// was inserted, or `None` when the pattern does not use it. `offsets`
    /// may be shorter than `values`. On error `out` is left untouched.
    pub fn format_and_append(
        &self,
        values: &[&str],
        out: &mut String,
        offsets: &mut [Option<usize>],
    ) -> Result<()> {
        self.check_arity(values.len())?;
        offsets.fill(None);
        self.append_from(0, 0, values, out, offsets);
        Ok(())
    }

    /// Substitute `args` and replace the contents of `out` with the result.
    ///
    /// [`Arg::Existing`] stands for the contents `out` held on entry. When the
    /// pattern starts with a placeholder bound to `Arg::Existing`, those
    /// contents stay in place and are not copied again; only the remainder of
    /// the pattern is appended.
    pub fn format_and_replace(
        &self,
        args: &[Arg<'_>],
        out: &mut String,
        offsets: &mut [Option<usize>],
    ) -> Result<()> {
        self.check_arity(args.len())?;
        offsets.fill(None);

        let existing_uses = self
            .placeholders
            .iter()
            .filter(|p| args[p.id] == Arg::Existing)
            .count();
        let keeps_head = self
            .placeholders
            .first()
            .is_some_and(|p| p.offset == 0 && args[p.id] == Arg::Existing);

        if keeps_head && existing_uses == 1 {
            let head = self.placeholders[0];
            if let Some(slot) = offsets.get_mut(head.id) {
                *slot = Some(0);
            }
            let values: SmallVec<[&str; 4]> = args
                .iter()
                .map(|arg| match arg {
                    Arg::Text(text) => *text,
                    Arg::Existing => "",
                })
                .collect();
            self.append_from(1, 0, &values, out, offsets);
            return Ok(());
        }

        let existing = std::mem::take(out);
        let values: SmallVec<[&str; 4]> = args
            .iter()
            .map(|arg| match arg {
                Arg::Text(text) => *text,
                Arg::Existing => existing.as_str(),
            })
            .collect();
        out.reserve(self.literal.len() + values.iter().map(|v| v.len()).sum::<usize>());
        self.append_from(0, 0, &values, out, offsets);
        Ok(())
    }

    /// The literal text with surrounding whitespace trimmed; used to recover a
    /// bare noun such as `"second"` from `"{0} second"`.
    #[must_use]
    pub fn strip_placeholders(&self) -> &str {
        self.literal.trim()
    }

    fn check_arity(&self, supplied: usize) -> Result<()> {
        if supplied < self.placeholder_count {
            return Err(FormatError::InsufficientArguments {
                required: self.placeholder_count,
                supplied,
            });
        }
        Ok(())
    }

    /// Emit placeholders `first..` and the literal text from `literal_from`.
    fn append_from(
        &self,
        first: usize,
        literal_from: usize,
        values: &[&str],
        out: &mut String,
        offsets: &mut [Option<usize>],
    ) {
        let mut cursor = literal_from;
        for placeholder in &self.placeholders[first..] {
            out.push_str(&self.literal[cursor..placeholder.offset]);
            if let Some(slot) = offsets.get_mut(placeholder.id) {
                *slot = Some(out.len());
            }
            out.push_str(values[placeholder.id]);
            cursor = placeholder.offset;
        }
        out.push_str(&self.literal[cursor..]);
    }
}
