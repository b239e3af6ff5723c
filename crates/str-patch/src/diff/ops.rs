//! Edit operations and helpers over operation streams.

// ── Types ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Equal(String),
    Insert(String),
    Delete(String),
}

impl Op {
    pub fn text(&self) -> &str {
        match self {
            Op::Equal(s) | Op::Insert(s) | Op::Delete(s) => s,
        }
    }

    /// Length of the op text in chars.
    pub fn len(&self) -> usize {
        self.text().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    fn same_kind(&self, other: &Op) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            Op::Equal(s) | Op::Insert(s) | Op::Delete(s) => s,
        }
    }
}

// ── Public utilities ──────────────────────────────────────────────────────

/// Merge consecutive operations of the same kind; discard empty operations.
pub fn normalize(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());
    for op in ops {
        if op.is_empty() {
            continue;
        }
        match result.last_mut() {
            Some(last) if last.same_kind(&op) => last.text_mut().push_str(op.text()),
            _ => result.push(op),
        }
    }
    result
}

/// Reconstruct the source string from an operation stream.
pub fn src(ops: &[Op]) -> String {
    let mut txt = String::new();
    for op in ops {
        if !matches!(op, Op::Insert(_)) {
            txt.push_str(op.text());
        }
    }
    txt
}

/// Reconstruct the destination string from an operation stream.
pub fn dst(ops: &[Op]) -> String {
    let mut txt = String::new();
    for op in ops {
        if !matches!(op, Op::Delete(_)) {
            txt.push_str(op.text());
        }
    }
    txt
}

/// Invert a stream so it transforms dst → src instead of src → dst.
pub fn invert(ops: Vec<Op>) -> Vec<Op> {
    ops.into_iter()
        .map(|op| match op {
            Op::Equal(s) => Op::Equal(s),
            Op::Insert(s) => Op::Delete(s),
            Op::Delete(s) => Op::Insert(s),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_merges_consecutive() {
        let ops = vec![Op::Insert("hello".into()), Op::Insert(" world".into())];
        assert_eq!(normalize(ops), vec![Op::Insert("hello world".into())]);
    }

    #[test]
    fn normalize_drops_empty() {
        let ops = vec![
            Op::Equal(String::new()),
            Op::Insert("a".into()),
            Op::Delete(String::new()),
            Op::Insert("b".into()),
            Op::Equal("c".into()),
        ];
        assert_eq!(
            normalize(ops),
            vec![Op::Insert("ab".into()), Op::Equal("c".into())]
        );
    }

    #[test]
    fn src_and_dst() {
        let ops = vec![
            Op::Equal("a".into()),
            Op::Delete("b".into()),
            Op::Insert("X".into()),
            Op::Equal("c".into()),
        ];
        assert_eq!(src(&ops), "abc");
        assert_eq!(dst(&ops), "aXc");
    }

    #[test]
    fn invert_swaps_sides() {
        let ops = vec![
            Op::Equal("a".into()),
            Op::Delete("b".into()),
            Op::Insert("X".into()),
        ];
        let inv = invert(ops);
        assert_eq!(src(&inv), "aX");
        assert_eq!(dst(&inv), "ab");
    }

    #[test]
    fn len_counts_chars() {
        assert_eq!(Op::Equal("héllo".into()).len(), 5);
        assert!(Op::Delete(String::new()).is_empty());
    }
}
