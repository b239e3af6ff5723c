//! String diff driver.
//!
//! All positions are in Unicode scalar values (`char`s). The driver works on
//! char slices internally and only materialises `String`s for the emitted
//! operations.

use std::time::Instant;

use super::affix::{common_prefix, common_suffix};
use super::bisect::bisect;
use super::half_match::{find, half_match};
use super::ops::{normalize, Op};
use crate::error::{Error, Result};
use crate::logging::debug;
use crate::options::DiffOptions;

/// State carried through one top-level diff call.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Ctx {
    pub deadline: Option<Instant>,
}

impl Ctx {
    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Compute the edit operations turning `src` into `dst`.
///
/// Equal operations are included, so the stream describes both strings in
/// full: see [`src`](super::ops::src) and [`dst`](super::ops::dst).
pub fn diff(src: &str, dst: &str) -> Vec<Op> {
    let c_src: Vec<char> = src.chars().collect();
    let c_dst: Vec<char> = dst.chars().collect();
    normalize(diff_chars(&c_src, &c_dst, &Ctx::default()))
}

/// Like [`diff`], but enforcing the limits in `opts`.
pub fn diff_with(src: &str, dst: &str, opts: &DiffOptions) -> Result<Vec<Op>> {
    let c_src: Vec<char> = src.chars().collect();
    let c_dst: Vec<char> = dst.chars().collect();
    check_len(c_src.len() + c_dst.len(), opts)?;
    let ctx = Ctx {
        deadline: opts.deadline(),
    };
    Ok(normalize(diff_chars(&c_src, &c_dst, &ctx)))
}

fn check_len(len: usize, opts: &DiffOptions) -> Result<()> {
    match opts.max_len {
        Some(limit) if len > limit => {
            debug!(len, limit, "diff input exceeds size cap");
            Err(Error::ResourceExceeded { len, limit })
        }
        _ => Ok(()),
    }
}

fn chars_to_string(chars: &[char]) -> String {
    chars.iter().collect()
}

// ── Core diff algorithm ───────────────────────────────────────────────────

pub(crate) fn diff_chars(c1: &[char], c2: &[char], ctx: &Ctx) -> Vec<Op> {
    if c1 == c2 {
        return if c1.is_empty() {
            vec![]
        } else {
            vec![Op::Equal(chars_to_string(c1))]
        };
    }

    // Strip common prefix
    let prefix_len = common_prefix(c1, c2);
    let (prefix, c1, c2) = (&c1[..prefix_len], &c1[prefix_len..], &c2[prefix_len..]);

    // Strip common suffix
    let suffix_len = common_suffix(c1, c2);
    let suffix = &c1[c1.len() - suffix_len..];
    let c1 = &c1[..c1.len() - suffix_len];
    let c2 = &c2[..c2.len() - suffix_len];

    // Compute diff on the middle block
    let middle = compute(c1, c2, ctx);
    let mut result = Vec::with_capacity(middle.len() + 2);
    if !prefix.is_empty() {
        result.push(Op::Equal(chars_to_string(prefix)));
    }
    result.extend(middle);
    if !suffix.is_empty() {
        result.push(Op::Equal(chars_to_string(suffix)));
    }
    result
}

/// Diff two texts that share no common prefix or suffix.
fn compute(c1: &[char], c2: &[char], ctx: &Ctx) -> Vec<Op> {
    if c1.is_empty() {
        return vec![Op::Insert(chars_to_string(c2))];
    }
    if c2.is_empty() {
        return vec![Op::Delete(chars_to_string(c1))];
    }

    let long_is_src = c1.len() > c2.len();
    let (long, short) = if long_is_src { (c1, c2) } else { (c2, c1) };

    // Shorter text is inside the longer text
    if let Some(idx) = find(long, short) {
        let edit = |chars: &[char]| {
            let s = chars_to_string(chars);
            if long_is_src {
                Op::Delete(s)
            } else {
                Op::Insert(s)
            }
        };
        let mut ops = Vec::with_capacity(3);
        if idx > 0 {
            ops.push(edit(&long[..idx]));
        }
        ops.push(Op::Equal(chars_to_string(short)));
        if idx + short.len() < long.len() {
            ops.push(edit(&long[idx + short.len()..]));
        }
        return ops;
    }

    // Single char that is not inside the other text: no equality possible
    if short.len() == 1 {
        return vec![
            Op::Delete(chars_to_string(c1)),
            Op::Insert(chars_to_string(c2)),
        ];
    }

    if let Some(hm) = half_match(c1, c2) {
        let mut ops = diff_chars(hm.prefix1, hm.prefix2, ctx);
        ops.push(Op::Equal(chars_to_string(hm.common)));
        ops.extend(diff_chars(hm.suffix1, hm.suffix2, ctx));
        return ops;
    }

    bisect(c1, c2, ctx)
}
