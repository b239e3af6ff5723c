//! Half-match speedup.
//!
//! Looks for a substring shared by both texts that is at least half as long
//! as the longer text. When one exists the diff can be split around it
//! without running the full bisection. The resulting diff is correct but not
//! necessarily minimal.

use super::affix::{common_prefix, common_suffix};

/// A split of both texts around a shared middle.
///
/// `prefix1 + common + suffix1` is the first text and
/// `prefix2 + common + suffix2` is the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfMatch<T> {
    pub prefix1: T,
    pub suffix1: T,
    pub prefix2: T,
    pub suffix2: T,
    pub common: T,
}

impl<T> HalfMatch<T> {
    fn swap_sides(self) -> Self {
        HalfMatch {
            prefix1: self.prefix2,
            suffix1: self.suffix2,
            prefix2: self.prefix1,
            suffix2: self.suffix1,
            common: self.common,
        }
    }
}

/// [`half_match`] over `&str`, returning owned strings.
pub fn half_match_str(text1: &str, text2: &str) -> Option<HalfMatch<String>> {
    let c1: Vec<char> = text1.chars().collect();
    let c2: Vec<char> = text2.chars().collect();
    let hm = half_match(&c1, &c2)?;
    Some(HalfMatch {
        prefix1: hm.prefix1.iter().collect(),
        suffix1: hm.suffix1.iter().collect(),
        prefix2: hm.prefix2.iter().collect(),
        suffix2: hm.suffix2.iter().collect(),
        common: hm.common.iter().collect(),
    })
}

/// Finds a common middle covering at least half of the longer text.
pub fn half_match<'a>(text1: &'a [char], text2: &'a [char]) -> Option<HalfMatch<&'a [char]>> {
    let text1_longer = text1.len() > text2.len();
    let (long, short) = if text1_longer {
        (text1, text2)
    } else {
        (text2, text1)
    };
    if long.len() < 4 || short.len() * 2 < long.len() {
        return None;
    }

    // Seeds at the second and third quarters of the longer text.
    let hm1 = half_match_at(long, short, long.len().div_ceil(4));
    let hm2 = half_match_at(long, short, long.len().div_ceil(2));
    let hm = match (hm1, hm2) {
        (None, None) => return None,
        (Some(hm), None) | (None, Some(hm)) => hm,
        (Some(a), Some(b)) => {
            if a.common.len() > b.common.len() {
                a
            } else {
                b
            }
        }
    };

    // `hm` is laid out as (long, short); put text1 first.
    Some(if text1_longer { hm } else { hm.swap_sides() })
}

/// Probes the seed `long[i..i + long.len() / 4]` against every occurrence in
/// `short`, returning the longest extension if it covers half of `long`.
fn half_match_at<'a>(
    long: &'a [char],
    short: &'a [char],
    i: usize,
) -> Option<HalfMatch<&'a [char]>> {
    let seed = &long[i..i + long.len() / 4];
    let mut best: Option<HalfMatch<&'a [char]>> = None;
    let mut best_len = 0usize;
    let mut from = 0usize;
    while let Some(found) = find(&short[from..], seed) {
        let j = from + found;
        let prefix_len = common_prefix(&long[i..], &short[j..]);
        let suffix_len = common_suffix(&long[..i], &short[..j]);
        if best_len < prefix_len + suffix_len {
            best_len = prefix_len + suffix_len;
            best = Some(HalfMatch {
                prefix1: &long[..i - suffix_len],
                suffix1: &long[i + prefix_len..],
                prefix2: &short[..j - suffix_len],
                suffix2: &short[j + prefix_len..],
                common: &short[j - suffix_len..j + prefix_len],
            });
        }
        from = j + 1;
    }
    best.filter(|hm| hm.common.len() * 2 >= long.len())
}

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
