//! Myers O(ND) middle-snake bisection.
//!
//! See E. Myers, "An O(ND) Difference Algorithm and Its Variations" (1986).
//! Forward and reverse frontiers are advanced one edit at a time until they
//! overlap; the overlap point splits the problem in two.

use super::ops::Op;
use super::str::{diff_chars, Ctx};
use crate::logging::trace;

/// Find the middle snake of `c1`/`c2` and diff the two halves around it.
///
/// Falls back to a delete+insert pair when no overlap is found, which only
/// happens for texts without any char in common or once `ctx`'s deadline
/// has passed.
pub(crate) fn bisect(c1: &[char], c2: &[char], ctx: &Ctx) -> Vec<Op> {
    let n1 = c1.len() as isize;
    let n2 = c2.len() as isize;
    let max_d = (c1.len() + c2.len()).div_ceil(2) as isize + 1;
    let v_offset = max_d;
    let v_length = 2 * max_d;

    let mut v1: Vec<isize> = vec![-1; v_length as usize];
    let mut v2: Vec<isize> = vec![-1; v_length as usize];
    v1[(v_offset + 1) as usize] = 0;
    v2[(v_offset + 1) as usize] = 0;

    let delta = n1 - n2;
    // With an odd delta the forward pass detects the overlap, otherwise the
    // reverse pass does.
    let front = delta % 2 != 0;

    // Trim diagonals that ran off the edit graph.
    let mut k1start = 0isize;
    let mut k1end = 0isize;
    let mut k2start = 0isize;
    let mut k2end = 0isize;

    for d in 0..max_d {
        if ctx.expired() {
            trace!(d, "bisect deadline reached");
            break;
        }

        // Forward path
        let mut k1 = -d + k1start;
        while k1 <= d - k1end {
            let k1_offset = (v_offset + k1) as usize;
            let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                v1[k1_offset + 1]
            } else {
                v1[k1_offset - 1] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < n1 && y1 < n2 && c1[x1 as usize] == c2[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            v1[k1_offset] = x1;
            if x1 > n1 {
                k1end += 2;
            } else if y1 > n2 {
                k1start += 2;
            } else if front {
                let k2_offset = v_offset + delta - k1;
                if k2_offset >= 0 && k2_offset < v_length && v2[k2_offset as usize] != -1 {
                    // Mirror x2 onto the top-left coordinate system.
                    let x2 = n1 - v2[k2_offset as usize];
                    if x1 >= x2 {
                        return split(c1, c2, x1 as usize, y1 as usize, ctx);
                    }
                }
            }
            k1 += 2;
        }

        // Reverse path
        let mut k2 = -d + k2start;
        while k2 <= d - k2end {
            let k2_offset = (v_offset + k2) as usize;
            let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                v2[k2_offset + 1]
            } else {
                v2[k2_offset - 1] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < n1
                && y2 < n2
                && c1[(n1 - 1 - x2) as usize] == c2[(n2 - 1 - y2) as usize]
            {
                x2 += 1;
                y2 += 1;
            }
            v2[k2_offset] = x2;
            if x2 > n1 {
                k2end += 2;
            } else if y2 > n2 {
                k2start += 2;
            } else if !front {
                let k1_offset = v_offset + delta - k2;
                if k1_offset >= 0 && k1_offset < v_length && v1[k1_offset as usize] != -1 {
                    let x1 = v1[k1_offset as usize];
                    let y1 = v_offset + x1 - k1_offset;
                    // Mirror x2 onto the top-left coordinate system.
                    if x1 >= n1 - x2 {
                        return split(c1, c2, x1 as usize, y1 as usize, ctx);
                    }
                }
            }
            k2 += 2;
        }
    }

    trace!(len1 = c1.len(), len2 = c2.len(), "bisect found no overlap");
    vec![
        Op::Delete(c1.iter().collect()),
        Op::Insert(c2.iter().collect()),
    ]
}

/// Diff `c1[..x]`/`c2[..y]` and `c1[x..]`/`c2[y..]` independently.
fn split(c1: &[char], c2: &[char], x: usize, y: usize, ctx: &Ctx) -> Vec<Op> {
    let mut ops = diff_chars(&c1[..x], &c2[..y], ctx);
    ops.extend(diff_chars(&c1[x..], &c2[y..], ctx));
    ops
}
