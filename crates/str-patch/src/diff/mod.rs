//! Character-level string diff.
//!
//! [`str::diff`] strips common affixes, then tries progressively more
//! expensive strategies on the remaining middle: containment, the
//! [`half_match`] heuristic and finally Myers [`bisect`]ion.

pub mod affix;
pub mod bisect;
pub mod half_match;
pub mod ops;
pub mod str;

pub use ops::{dst, invert, normalize, src, Op};
