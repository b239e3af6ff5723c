//! Common prefix / suffix lengths.
//!
//! Both searches halve the candidate range on every step by comparing whole
//! slices, which is cheaper than a char-by-char scan on long shared runs.

/// Number of chars in the common prefix of `txt1` and `txt2`.
pub fn pfx(txt1: &str, txt2: &str) -> usize {
    common_prefix(
        &txt1.chars().collect::<Vec<_>>(),
        &txt2.chars().collect::<Vec<_>>(),
    )
}

/// Number of chars in the common suffix of `txt1` and `txt2`.
pub fn sfx(txt1: &str, txt2: &str) -> usize {
    common_suffix(
        &txt1.chars().collect::<Vec<_>>(),
        &txt2.chars().collect::<Vec<_>>(),
    )
}

pub fn common_prefix(c1: &[char], c2: &[char]) -> usize {
    if c1.is_empty() || c2.is_empty() || c1[0] != c2[0] {
        return 0;
    }
    let mut min = 0usize;
    let mut max = c1.len().min(c2.len());
    let mut mid = max;
    let mut start = 0;
    while min < mid {
        if c1[start..mid] == c2[start..mid] {
            min = mid;
            start = min;
        } else {
            max = mid;
        }
        mid = (max - min) / 2 + min;
    }
    mid
}

pub fn common_suffix(c1: &[char], c2: &[char]) -> usize {
    let n1 = c1.len();
    let n2 = c2.len();
    if n1 == 0 || n2 == 0 || c1[n1 - 1] != c2[n2 - 1] {
        return 0;
    }
    let mut min = 0usize;
    let mut max = n1.min(n2);
    let mut mid = max;
    let mut end = 0;
    while min < mid {
        if c1[n1 - mid..n1 - end] == c2[n2 - mid..n2 - end] {
            min = mid;
            end = min;
        } else {
            max = mid;
        }
        mid = (max - min) / 2 + min;
    }
    mid
}
