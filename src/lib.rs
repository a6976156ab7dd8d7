//! Anydiff: Myers shortest edit scripts between sequences of unrelated types.
//!
//! The crate provides:
//! - The diff engine (`diff`), generic over two element types and an
//!   equivalence predicate
//! - The edit script value type (`EditScript`, `Op`)
//! - Stock predicates (`equal`, `diff_eq`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use anydiff::{diff, equal, Op};
//!
//! let script = diff(b"abcdefg", b"abXceZg", equal);
//! assert_eq!(script.to_string(), "==+=-=-+=");
//! assert_eq!(script.distance(), 4);
//! assert_eq!(script.ops()[2], Op::Addition);
//! ```
//!
//! The predicate does not need both sides to share a type:
//!
//! ```
//! use anydiff::diff;
//!
//! struct Line {
//!     num: u32,
//!     text: &'static str,
//! }
//!
//! let old = [Line { num: 1, text: "foo" }, Line { num: 2, text: "bar" }];
//! let new = [(1u32, "FOO"), (3u32, "bar")];
//! let script = diff(&old, &new, |a, b| {
//!     a.num == b.0 && a.text.eq_ignore_ascii_case(b.1)
//! });
//! assert_eq!(script.to_string(), "=-+");
//! ```

pub mod compare;
pub mod edit;
pub mod myers;

#[cfg(feature = "cli")]
pub mod cli;

pub use compare::{diff_eq, equal};
pub use edit::{EditScript, Op, ParseScriptError, ReplayError, Run, Runs};
pub use myers::diff;
