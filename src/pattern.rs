//! Decimal range to regular expression conversion.
//!
//! Given two digit strings `A` and `B`, produce a pattern matching exactly the
//! decimal strings of every integer in `[A, B]`.
//!
//! ## How the pieces fit
//!
//! ```text
//! (A, B) ── validate ── normalize (swap, width rules)
//!                             │
//!          same width ────────┼──────── different widths
//!              │              │              │
//!              │              │   one sub-range per width:
//!              │              │   A..99, 100..999, ..., 10^k..B
//!              ▼              ▼              ▼
//!                  split_same_width (carry boundaries)
//!                             │
//!                             ▼
//!                   Vec<PatternFragment>
//!                             │
//!                  render: fold [0-9] runs, merge {m,n},
//!                  factor the shared prefix, alternate
//! ```
//!
//! ## Width rules
//!
//! - Bounds of equal length are fixed width: `0099..0150` matches only four
//!   digit strings, leading zeros included, and the shared leading digits are
//!   rendered once as a literal prefix.
//! - Bounds of different length are free-width integers: the zero padding is
//!   stripped and the range is decomposed per digit count, so `5..25` matches
//!   `5` and `25` but not `05`.
//!
//! ## Fragments
//!
//! Every [`PatternFragment`] is a pair of equal-length digit strings where each
//! position is either fixed (`low == high`) or a contiguous class. The
//! fragments returned by [`pattern_fragments`] are ordered, disjoint, and cover
//! the input range exactly.
//!
//! ```text
//! 123..999 ─▶ 123-129  130-199  200-999
//!             12[3-9]  1[3-9][0-9]  [2-9][0-9]{2}
//! ```

use crate::Result;
use crate::digits::Decimal;
use std::fmt::Write;

bitflags::bitflags! {
    /// Rendering switches for generated patterns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        /// Render the alternation group as `(?:...)` instead of `(...)`.
        const NON_CAPTURING = 1 << 0;
        /// Wrap the pattern in `^...$`.
        const ANCHORED      = 1 << 1;
    }
}

/// One position-aligned piece of a range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternFragment {
    low: String,
    high: String,
}

impl PatternFragment {
    fn from_bytes(low: &[u8], high: &[u8]) -> Self {
        PatternFragment {
            low: low.iter().copied().map(char::from).collect(),
            high: high.iter().copied().map(char::from).collect(),
        }
    }

    fn prefixed(&self, prefix: &[u8], digit: u8) -> Self {
        let mut low = prefix.to_vec();
        low.push(digit);
        low.extend_from_slice(self.low.as_bytes());
        let mut high = prefix.to_vec();
        high.push(digit);
        high.extend_from_slice(self.high.as_bytes());
        PatternFragment::from_bytes(&low, &high)
    }

    pub fn low(&self) -> &str {
        &self.low
    }

    pub fn high(&self) -> &str {
        &self.high
    }

    pub fn width(&self) -> usize {
        self.low.len()
    }

    /// `(low, high)` digit values per position.
    pub fn classes(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.low.bytes().zip(self.high.bytes()).map(|(l, h)| (l - b'0', h - b'0'))
    }
}

/// Regular expression for the inclusive range between `a` and `b`.
///
/// # Example
/// ```
/// use dialrange::range_to_pattern;
///
/// assert_eq!(range_to_pattern("10", "99").unwrap(), "[1-9][0-9]");
/// assert_eq!(range_to_pattern("5", "25").unwrap(), "([5-9]|1[0-9]|2[0-5])");
/// assert_eq!(range_to_pattern("4711", "4711").unwrap(), "4711");
/// ```
pub fn range_to_pattern(a: &str, b: &str) -> Result<String> {
    range_to_pattern_with(a, b, PatternFlags::empty())
}

/// [`range_to_pattern`] with rendering flags.
pub fn range_to_pattern_with(a: &str, b: &str, flags: PatternFlags) -> Result<String> {
    let fragments = pattern_fragments(a, b)?;
    let pattern = render(&fragments, flags);
    tracing::trace!(low = a, high = b, fragments = fragments.len(), %pattern, "rendered range pattern");
    Ok(pattern)
}

/// Decompose `[a, b]` into ordered, disjoint, position-aligned fragments.
pub fn pattern_fragments(a: &str, b: &str) -> Result<Vec<PatternFragment>> {
    let (low, high) = normalize(a, b)?;
    if low.len() == high.len() {
        return Ok(split_same_width(low.as_bytes(), high.as_bytes()));
    }

    let mut fragments = Vec::new();
    for width in low.len()..=high.len() {
        let floor = if width == low.len() { low.clone() } else { smallest_of_width(width) };
        let ceiling = if width == high.len() { high.clone() } else { "9".repeat(width) };
        fragments.extend(split_same_width(floor.as_bytes(), ceiling.as_bytes()));
    }
    Ok(fragments)
}

/// Validate, order, and apply the width rules. Returns `(low, high)`.
fn normalize(a: &str, b: &str) -> Result<(String, String)> {
    let a_value = Decimal::parse(a)?;
    let b_value = Decimal::parse(b)?;

    let ((low, low_value), (high, high_value)) =
        if a_value > b_value { ((b, b_value), (a, a_value)) } else { ((a, a_value), (b, b_value)) };

    if low.len() == high.len() {
        Ok((low.to_string(), high.to_string()))
    } else {
        Ok((low_value.to_string(), high_value.to_string()))
    }
}

fn smallest_of_width(width: usize) -> String {
    let mut s = String::with_capacity(width);
    s.push('1');
    s.push_str(&"0".repeat(width.saturating_sub(1)));
    s
}

/// Split an equal-width range at carry boundaries.
///
/// ```text
/// 1500..2500
///   1 + split(500, 999)   -> 1[5-9][0-9]{2}
///   middle digits 2..1    -> (empty)
///   2 + split(000, 500)   -> 2[0-4][0-9]{2}, 2500
/// ```
fn split_same_width(low: &[u8], high: &[u8]) -> Vec<PatternFragment> {
    let shared = low.iter().zip(high).take_while(|(l, h)| l == h).count();
    if shared == low.len() {
        return vec![PatternFragment::from_bytes(low, high)];
    }

    let prefix = &low[..shared];
    let (low_head, low_tail) = (low[shared], &low[shared + 1..]);
    let (high_head, high_tail) = (high[shared], &high[shared + 1..]);
    let tail_len = low_tail.len();

    let mut fragments = Vec::new();
    let mut first = low_head;
    let mut last = high_head;

    if low_tail.iter().any(|&d| d != b'0') {
        let nines = vec![b'9'; tail_len];
        fragments.extend(split_same_width(low_tail, &nines).iter().map(|f| f.prefixed(prefix, low_head)));
        first += 1;
    }

    let mut upper = Vec::new();
    if high_tail.iter().any(|&d| d != b'9') {
        let zeros = vec![b'0'; tail_len];
        upper.extend(split_same_width(&zeros, high_tail).iter().map(|f| f.prefixed(prefix, high_head)));
        last -= 1;
    }

    if first <= last {
        let mut lo = prefix.to_vec();
        lo.push(first);
        lo.extend_from_slice(&vec![b'0'; tail_len]);
        let mut hi = prefix.to_vec();
        hi.push(last);
        hi.extend_from_slice(&vec![b'9'; tail_len]);
        fragments.push(PatternFragment::from_bytes(&lo, &hi));
    }

    fragments.extend(upper);
    fragments
}

// --- Rendering ---------------------------------------------------------------

const ANY: (u8, u8) = (0, 9);

/// A rendered alternative: leading classes plus a `[0-9]{min,max}` tail.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Branch {
    head: Vec<(u8, u8)>,
    min_any: usize,
    max_any: usize,
}

impl Branch {
    fn fixed_prefix_len(&self) -> usize {
        self.head.iter().take_while(|(lo, hi)| lo == hi).count()
    }

    /// Smallest number of leading positions that must stay in the branch.
    fn keeps(&self) -> usize {
        if self.max_any == 0 { 1 } else { 0 }
    }

    fn render(&self, skip: usize, out: &mut String) {
        render_classes(&self.head[skip..], out);
        push_any(out, self.min_any, self.max_any);
    }
}

/// Turn fragments into branches, merging neighbours that differ only by the
/// length of their trailing `[0-9]` run.
fn branches(fragments: &[PatternFragment]) -> Vec<Branch> {
    let mut out: Vec<Branch> = Vec::new();
    for fragment in fragments {
        let classes: Vec<(u8, u8)> = fragment.classes().collect();
        let any = classes.iter().rev().take_while(|&&c| c == ANY).count();
        let head = classes[..classes.len() - any].to_vec();

        if let Some(prev) = out.last_mut() {
            if prev.head == head && prev.max_any + 1 == any {
                prev.max_any = any;
                continue;
            }
        }
        out.push(Branch { head, min_any: any, max_any: any });
    }
    out
}

fn render(fragments: &[PatternFragment], flags: PatternFlags) -> String {
    let branches = branches(fragments);
    let mut out = String::new();

    if flags.contains(PatternFlags::ANCHORED) {
        out.push('^');
    }

    match branches.as_slice() {
        [] => {}
        [single] => single.render(0, &mut out),
        [first, rest @ ..] => {
            let prefix_len = shared_prefix_len(first, rest, &branches);
            render_classes(&first.head[..prefix_len], &mut out);
            out.push_str(if flags.contains(PatternFlags::NON_CAPTURING) { "(?:" } else { "(" });
            for (i, branch) in branches.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                branch.render(prefix_len, &mut out);
            }
            out.push(')');
        }
    }

    if flags.contains(PatternFlags::ANCHORED) {
        out.push('$');
    }
    out
}

/// Length of the literal prefix shared by every branch, leaving each branch
/// with something to match.
fn shared_prefix_len(first: &Branch, rest: &[Branch], all: &[Branch]) -> usize {
    let mut len = first.fixed_prefix_len();
    for branch in rest {
        let common = first.head.iter().zip(&branch.head).take(len).take_while(|(a, b)| a == b).count();
        len = len.min(common);
    }
    all.iter().fold(len, |len, b| len.min(b.head.len().saturating_sub(b.keeps())))
}

fn render_classes(classes: &[(u8, u8)], out: &mut String) {
    let mut i = 0;
    while i < classes.len() {
        let (lo, hi) = classes[i];
        if (lo, hi) == ANY {
            let run = classes[i..].iter().take_while(|&&c| c == ANY).count();
            push_any(out, run, run);
            i += run;
            continue;
        }
        if lo == hi {
            out.push(char::from(b'0' + lo));
        } else {
            let _ = write!(out, "[{lo}-{hi}]");
        }
        i += 1;
    }
}

fn push_any(out: &mut String, min: usize, max: usize) {
    match (min, max) {
        (_, 0) => {}
        (1, 1) => out.push_str("[0-9]"),
        (m, n) if m == n => {
            let _ = write!(out, "[0-9]{{{m}}}");
        }
        (m, n) => {
            let _ = write!(out, "[0-9]{{{m},{n}}}");
        }
    }
}

#[cfg(test)]
mod tests;
