// Edit operations and the edit script value type.
//
// An `EditScript` is an ordered list of `Op`s. Replaying it against the two
// input sequences advances A on Keep/Deletion and B on Keep/Addition, so the
// Keep+Deletion count is always `len(A)` and Keep+Addition is `len(B)`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// A single edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// The current elements of A and B match; advance both.
    Keep,
    /// Insert the current element of B; advance B only.
    Addition,
    /// Drop the current element of A; advance A only.
    Deletion,
}

impl Op {
    pub const KEEP: char = '=';
    pub const ADDITION: char = '+';
    pub const DELETION: char = '-';

    /// Display symbol for this operation.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Keep => Self::KEEP,
            Self::Addition => Self::ADDITION,
            Self::Deletion => Self::DELETION,
        }
    }

    /// Inverse of [`Op::symbol`].
    #[inline]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            Self::KEEP => Some(Self::Keep),
            Self::ADDITION => Some(Self::Addition),
            Self::DELETION => Some(Self::Deletion),
            _ => None,
        }
    }

    /// Whether replaying this op consumes an element of A.
    #[inline]
    pub const fn advances_a(self) -> bool {
        matches!(self, Self::Keep | Self::Deletion)
    }

    /// Whether replaying this op consumes an element of B.
    #[inline]
    pub const fn advances_b(self) -> bool {
        matches!(self, Self::Keep | Self::Addition)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error returned when parsing a rendered script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseScriptError {
    #[error("invalid edit symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Error returned by [`EditScript::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("op {op_index} consumes past the end of the source sequence")]
    SourceExhausted { op_index: usize },
    #[error("op {op_index} consumes past the end of the target sequence")]
    TargetExhausted { op_index: usize },
    #[error("op {op_index} keeps a[{a_index}] and b[{b_index}], which are not equivalent")]
    Mismatch {
        op_index: usize,
        a_index: usize,
        b_index: usize,
    },
    #[error(
        "script ends with {a_remaining} source and {b_remaining} target elements unconsumed"
    )]
    Trailing {
        a_remaining: usize,
        b_remaining: usize,
    },
}

// ---------------------------------------------------------------------------
// Edit script
// ---------------------------------------------------------------------------

/// Ordered sequence of edit operations transforming A into B.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EditScript {
    ops: Vec<Op>,
}

impl EditScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-Keep operations.
    pub fn distance(&self) -> usize {
        self.ops.iter().filter(|op| **op != Op::Keep).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn keeps(&self) -> usize {
        self.count(Op::Keep)
    }

    pub fn additions(&self) -> usize {
        self.count(Op::Addition)
    }

    pub fn deletions(&self) -> usize {
        self.count(Op::Deletion)
    }

    /// Length of the sequence this script consumes from A.
    pub fn source_len(&self) -> usize {
        self.ops.iter().filter(|op| op.advances_a()).count()
    }

    /// Length of the sequence this script consumes from B.
    pub fn target_len(&self) -> usize {
        self.ops.iter().filter(|op| op.advances_b()).count()
    }

    /// Consecutive identical operations grouped into runs.
    pub fn runs(&self) -> Runs<'_> {
        Runs { rest: &self.ops }
    }

    /// Replay the script against `a` and `b`.
    ///
    /// Succeeds when the script consumes exactly both sequences and every
    /// Keep lands on a pair accepted by `eq`.
    pub fn validate<A, B, F>(&self, a: &[A], b: &[B], eq: F) -> Result<(), ReplayError>
    where
        F: Fn(&A, &B) -> bool,
    {
        let (mut i, mut j) = (0usize, 0usize);

        for (op_index, op) in self.ops.iter().enumerate() {
            if op.advances_a() && i >= a.len() {
                return Err(ReplayError::SourceExhausted { op_index });
            }
            if op.advances_b() && j >= b.len() {
                return Err(ReplayError::TargetExhausted { op_index });
            }
            match op {
                Op::Keep => {
                    if !eq(&a[i], &b[j]) {
                        return Err(ReplayError::Mismatch {
                            op_index,
                            a_index: i,
                            b_index: j,
                        });
                    }
                    i += 1;
                    j += 1;
                }
                Op::Deletion => i += 1,
                Op::Addition => j += 1,
            }
        }

        if i != a.len() || j != b.len() {
            return Err(ReplayError::Trailing {
                a_remaining: a.len() - i,
                b_remaining: b.len() - j,
            });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub(crate) fn push_n(&mut self, op: Op, n: usize) {
        self.ops.extend(std::iter::repeat_n(op, n));
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            ops: Vec::with_capacity(cap),
        }
    }

    fn count(&self, op: Op) -> usize {
        self.ops.iter().filter(|o| **o == op).count()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            fmt::Display::fmt(op, f)?;
        }
        Ok(())
    }
}

impl FromStr for EditScript {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Op::from_symbol(symbol).ok_or(ParseScriptError::InvalidSymbol { symbol, position })
            })
            .collect()
    }
}

impl From<Vec<Op>> for EditScript {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}

impl FromIterator<Op> for EditScript {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Op]> for EditScript {
    fn as_ref(&self) -> &[Op] {
        &self.ops
    }
}

impl IntoIterator for EditScript {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// A maximal group of consecutive identical operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub op: Op,
    pub len: usize,
}

/// Iterator returned by [`EditScript::runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a [Op],
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let op = *self.rest.first()?;
        let len = self.rest.iter().take_while(|o| **o == op).count();
        self.rest = &self.rest[len..];
        Some(Run { op, len })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
