#![forbid(unsafe_code)]

//! Locale list joining ("a, b und c").
//!
//! Two items use the `two` pattern. Longer lists start with `start`, grow
//! with `middle`, and close with `end`. Each step substitutes the text built
//! so far as `{0}` and the next item as `{1}`, so the accumulated head is
//! extended in place rather than copied at every step.

use unitfmt_core::{Arg, CompiledPattern, FormatError, Result};

/// Most placeholders a list pattern may reference.
const LIST_PLACEHOLDER_LIMIT: usize = 2;

/// The four patterns of one list style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPatterns {
    two: CompiledPattern,
    start: CompiledPattern,
    middle: CompiledPattern,
    end: CompiledPattern,
}

impl ListPatterns {
    /// Compile the four patterns.
    pub fn new(two: &str, start: &str, middle: &str, end: &str) -> Result<Self> {
        Ok(Self {
            two: compile_list_pattern(two)?,
            start: compile_list_pattern(start)?,
            middle: compile_list_pattern(middle)?,
            end: compile_list_pattern(end)?,
        })
    }

    /// One pattern for every position, e.g. `"{0} {1}"`.
    pub fn uniform(pattern: &str) -> Result<Self> {
        let compiled = compile_list_pattern(pattern)?;
        Ok(Self {
            two: compiled.clone(),
            start: compiled.clone(),
            middle: compiled.clone(),
            end: compiled,
        })
    }

    /// Join `items` and append the result to `out`.
    pub fn join(&self, items: &[&str], out: &mut String) -> Result<()> {
        self.join_tracking(items, None, out).map(|_| ())
    }

    /// Join `items`, append the result to `out`, and report the byte offset
    /// in `out` at which `items[index]` begins.
    pub fn join_with_offset(
        &self,
        items: &[&str],
        index: usize,
        out: &mut String,
    ) -> Result<Option<usize>> {
        self.join_tracking(items, Some(index), out)
    }

    fn join_tracking(
        &self,
        items: &[&str],
        index: Option<usize>,
        out: &mut String,
    ) -> Result<Option<usize>> {
        let Some((first, rest)) = items.split_first() else {
            return Ok(None);
        };
        let mut joined = String::with_capacity(items.iter().map(|i| i.len() + 2).sum());
        joined.push_str(first);
        let mut tracked = (index == Some(0)).then_some(0);

        let last = rest.len();
        for (step, item) in rest.iter().enumerate() {
            let pattern = match (items.len(), step + 1) {
                (2, _) => &self.two,
                (_, 1) => &self.start,
                (_, n) if n == last => &self.end,
                _ => &self.middle,
            };
            let mut offsets = [None; 2];
            pattern.format_and_replace(&[Arg::Existing, Arg::Text(item)], &mut joined, &mut offsets)?;
            tracked = match tracked {
                Some(at) => offsets[0].map(|head| head + at),
                None if index == Some(step + 1) => offsets[1],
                None => None,
            };
        }

        let base = out.len();
        out.push_str(&joined);
        Ok(tracked.map(|at| base + at))
    }
}

fn compile_list_pattern(template: &str) -> Result<CompiledPattern> {
    let pattern = CompiledPattern::compile(template);
    if pattern.placeholder_count() > LIST_PLACEHOLDER_LIMIT {
        return Err(FormatError::TooManyPlaceholders {
            count: pattern.placeholder_count(),
            limit: LIST_PLACEHOLDER_LIMIT,
        });
    }
    Ok(pattern)
}
