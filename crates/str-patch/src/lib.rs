//! str-patch — character-level string diff and compact patches.
//!
//! [`diff`] computes a [`Patch`] that turns a source string into a
//! destination string; [`patch`] replays it against the same source.
//!
//! ```
//! let p = str_patch::diff("The quick brown fox", "The slow brown fox");
//! assert_eq!(str_patch::patch("The quick brown fox", &p), "The slow brown fox");
//! ```
//!
//! The edit operation stream behind a patch is available from
//! [`diff::str::diff`]. All lengths and offsets are counted in Unicode
//! scalar values (`char`s).

mod logging;

pub mod diff;
pub mod error;
pub mod options;
pub mod patch;

pub use diff::ops::Op;
pub use error::{Error, Result};
pub use options::DiffOptions;
pub use patch::{Patch, Triplet, MIN_EQUAL_LEN};

/// Computes a patch transforming `src` into `dst`.
pub fn diff(src: &str, dst: &str) -> Patch {
    patch::diff(src, dst)
}

/// Computes a patch under the limits in `opts`.
pub fn try_diff(src: &str, dst: &str, opts: &DiffOptions) -> Result<Patch> {
    patch::try_diff(src, dst, opts)
}

/// Applies `patch` to `src`.
///
/// `src` must be the exact string the patch was computed from. Any other
/// source yields an unspecified (but never panicking) result.
pub fn patch(src: &str, patch: &Patch) -> String {
    patch.apply(src)
}
