//! Compacted triplet patches.
//!
//! A [`Patch`] is a list of `(insert, skip, delete)` triplets. Applying a
//! triplet copies `skip` chars from the source cursor, appends `insert`, then
//! moves the cursor past `delete` more chars. Whatever is left of the source
//! after the last triplet is copied verbatim.
//!
//! Short equalities between two edits are folded into the preceding triplet
//! (re-inserted and deleted) instead of opening a new one, so a patch is
//! smaller than the edit stream it was built from but no longer minimal.

pub mod codec;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::diff::ops::Op;
use crate::diff::str as str_diff;
use crate::error::Result;
use crate::logging::debug;
use crate::options::DiffOptions;

/// Equal runs shorter than this (in chars) are merged into the neighbouring
/// edit rather than emitted as a separate triplet.
pub const MIN_EQUAL_LEN: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triplet {
    pub insert: String,
    pub skip: usize,
    pub delete: usize,
}

impl Triplet {
    pub fn new(insert: impl Into<String>, skip: usize, delete: usize) -> Self {
        Self {
            insert: insert.into(),
            skip,
            delete,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch(Vec<Triplet>);

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes an edit operation stream.
    pub fn from_ops(ops: &[Op]) -> Self {
        let mut builder = PatchBuilder::default();
        for op in ops {
            builder.push(op);
        }
        builder.finish()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triplet> {
        self.0.iter()
    }

    pub fn triplets(&self) -> &[Triplet] {
        &self.0
    }

    pub fn into_triplets(self) -> Vec<Triplet> {
        self.0
    }

    /// Replays the patch against `src`.
    ///
    /// `src` must be the string the patch was computed from. This is not
    /// checked: with any other source the output is unspecified, though
    /// out-of-range skips are clamped rather than panicking.
    pub fn apply(&self, src: &str) -> String {
        let chars: Vec<char> = src.chars().collect();
        let n = chars.len();
        let mut out = String::with_capacity(src.len());
        let mut cursor = 0usize;
        for t in &self.0 {
            let end = cursor.saturating_add(t.skip).min(n);
            out.extend(&chars[cursor.min(n)..end]);
            out.push_str(&t.insert);
            cursor = cursor.saturating_add(t.skip).saturating_add(t.delete);
        }
        if cursor < n {
            out.extend(&chars[cursor..]);
        }
        out
    }
}

impl From<Vec<Triplet>> for Patch {
    fn from(triplets: Vec<Triplet>) -> Self {
        Patch(triplets)
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Triplet;
    type IntoIter = std::slice::Iter<'a, Triplet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────

/// Push-or-merge accumulator turning edit operations into triplets.
#[derive(Debug, Default)]
struct PatchBuilder {
    triplets: Vec<Triplet>,
    /// Equal run since the last edit.
    eq_text: String,
    eq_len: usize,
}

impl PatchBuilder {
    fn push(&mut self, op: &Op) {
        match op {
            Op::Equal(text) => {
                self.eq_text.push_str(text);
                self.eq_len += op.len();
            }
            Op::Insert(text) => self.edit(text, 0),
            Op::Delete(_) => self.edit("", op.len()),
        }
    }

    fn edit(&mut self, insert: &str, delete: usize) {
        match self.triplets.last_mut() {
            Some(last) if self.eq_len < MIN_EQUAL_LEN => {
                // Re-insert the short equality and delete it from the source.
                last.insert.push_str(&self.eq_text);
                last.insert.push_str(insert);
                last.delete += self.eq_len + delete;
            }
            _ => self.triplets.push(Triplet::new(insert, self.eq_len, delete)),
        }
        self.eq_text.clear();
        self.eq_len = 0;
    }

    fn finish(self) -> Patch {
        Patch(self.triplets)
    }
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Computes a patch transforming `src` into `dst`.
pub fn diff(src: &str, dst: &str) -> Patch {
    Patch::from_ops(&str_diff::diff(src, dst))
}

/// Computes a patch under the limits in `opts`.
pub fn try_diff(src: &str, dst: &str, opts: &DiffOptions) -> Result<Patch> {
    debug!(src_len = src.len(), dst_len = dst.len(), "computing patch");
    let ops = str_diff::diff_with(src, dst, opts)?;
    let patch = Patch::from_ops(&ops);
    debug!(ops = ops.len(), triplets = patch.len(), "patch computed");
    Ok(patch)
}

/// Applies `patch` to `src`. See [`Patch::apply`].
pub fn apply(src: &str, patch: &Patch) -> String {
    patch.apply(src)
}

// ── serde ─────────────────────────────────────────────────────────────────

impl Serialize for Patch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len() * 3))?;
        for t in &self.0 {
            seq.serialize_element(&t.insert)?;
            seq.serialize_element(&t.skip)?;
            seq.serialize_element(&t.delete)?;
        }
        seq.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlatItem {
    Count(usize),
    Text(String),
}

impl<'de> Deserialize<'de> for Patch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<FlatItem>::deserialize(deserializer)?;
        if items.len() % 3 != 0 {
            return Err(de::Error::custom(format!(
                "patch length {} is not a multiple of 3",
                items.len()
            )));
        }
        let mut triplets = Vec::with_capacity(items.len() / 3);
        let mut iter = items.into_iter();
        while let (Some(a), Some(b), Some(c)) = (iter.next(), iter.next(), iter.next()) {
            match (a, b, c) {
                (FlatItem::Text(insert), FlatItem::Count(skip), FlatItem::Count(delete)) => {
                    triplets.push(Triplet {
                        insert,
                        skip,
                        delete,
                    })
                }
                _ => {
                    return Err(de::Error::custom(
                        "expected [insert: string, skip: uint, delete: uint]",
                    ))
                }
            }
        }
        Ok(Patch(triplets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(insert: &str, skip: usize, delete: usize) -> Triplet {
        Triplet::new(insert, skip, delete)
    }

    #[test]
    fn identity_is_empty() {
        assert!(diff("", "").is_empty());
        let p = diff("hello", "hello");
        assert!(p.is_empty());
        assert_eq!(p.apply("hello"), "hello");
    }

    #[test]
    fn empty_source_inserts_everything() {
        let p = diff("", "hello");
        assert_eq!(p.triplets(), &[t("hello", 0, 0)]);
        assert_eq!(p.apply(""), "hello");
    }

    #[test]
    fn empty_destination_deletes_everything() {
        let p = diff("hello", "");
        assert_eq!(p.triplets(), &[t("", 0, 5)]);
        assert_eq!(p.apply("hello"), "");
    }

    #[test]
    fn shared_prefix_becomes_skip() {
        let p = diff("abc", "abd");
        assert_eq!(p.triplets(), &[t("d", 2, 1)]);
        assert_eq!(p.apply("abc"), "abd");
    }

    #[test]
    fn short_equality_is_merged() {
        let ops = vec![
            Op::Delete("12".into()),
            Op::Insert("a".into()),
            Op::Equal("3456".into()),
            Op::Delete("90".into()),
            Op::Insert("z".into()),
        ];
        let p = Patch::from_ops(&ops);
        assert_eq!(p.triplets(), &[t("a3456z", 0, 8)]);
        assert_eq!(p.apply("12345690"), "a3456z");
    }

    #[test]
    fn long_equality_starts_new_triplet() {
        let p = diff("1234567890", "a345678z");
        assert_eq!(p.triplets(), &[t("a", 0, 2), t("z", 6, 2)]);
        assert_eq!(p.apply("1234567890"), "a345678z");
    }

    #[test]
    fn leading_equality_is_skipped_even_if_short() {
        let ops = vec![Op::Equal("ab".into()), Op::Insert("X".into())];
        assert_eq!(Patch::from_ops(&ops).triplets(), &[t("X", 2, 0)]);
    }

    #[test]
    fn trailing_equality_is_implicit() {
        let ops = vec![
            Op::Insert("X".into()),
            Op::Equal("ab".into()),
        ];
        let p = Patch::from_ops(&ops);
        assert_eq!(p.triplets(), &[t("X", 0, 0)]);
        assert_eq!(p.apply("ab"), "Xab");
    }

    #[test]
    fn apply_counts_chars() {
        let p = diff("👨‍🍳chef", "👨‍🍳chief");
        assert_eq!(p.triplets(), &[t("i", "👨‍🍳ch".chars().count(), 0)]);
        assert_eq!(p.apply("👨‍🍳chef"), "👨‍🍳chief");
    }

    #[test]
    fn apply_mismatched_source_does_not_panic() {
        let p = Patch::from(vec![t("x", 100, 3), t("y", 2, 50)]);
        assert_eq!(p.apply("abc"), "abcxy");
        assert_eq!(apply("", &p), "xy");
    }

    #[test]
    fn try_diff_enforces_max_len() {
        let opts = DiffOptions::default().with_max_len(4);
        assert!(try_diff("ab", "cd", &opts).is_ok());
        assert!(try_diff("abc", "cd", &opts).is_err());
    }

    #[test]
    fn serde_flat_array() {
        let p = Patch::from(vec![t("a", 0, 2), t("z", 6, 2)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"["a",0,2,"z",6,2]"#);
        let back: Patch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<Patch>(r#"["a",0]"#).is_err());
        assert!(serde_json::from_str::<Patch>(r#"[0,"a",0]"#).is_err());
        assert!(serde_json::from_str::<Patch>(r#"["a",-1,0]"#).is_err());
        assert!(serde_json::from_str::<Patch>(r#"{"a":1}"#).is_err());
    }
}
