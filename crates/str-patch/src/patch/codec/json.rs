//! Flat JSON array codec for patches.
//!
//! Each triplet is stored inline as three consecutive array entries:
//!   `[insert, skip, delete, insert, skip, delete, ...]`
//!
//! where `insert` is a string and `skip`/`delete` are non-negative integer
//! char counts. An empty patch encodes as `[]`.

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::patch::{Patch, Triplet};

pub fn encode(patch: &Patch) -> Value {
    let mut arr = Vec::with_capacity(patch.len() * 3);
    for t in patch {
        arr.push(json!(t.insert));
        arr.push(json!(t.skip));
        arr.push(json!(t.delete));
    }
    Value::Array(arr)
}

pub fn decode(value: &Value) -> Result<Patch> {
    let arr = value
        .as_array()
        .ok_or_else(|| Error::InvalidPatch("expected array".into()))?;
    if arr.len() % 3 != 0 {
        return Err(Error::InvalidPatch(format!(
            "length {} is not a multiple of 3",
            arr.len()
        )));
    }
    arr.chunks_exact(3)
        .enumerate()
        .map(|(i, chunk)| -> Result<Triplet> {
            let insert = chunk[0].as_str().ok_or_else(|| {
                Error::InvalidPatch(format!("triplet {i}: insert must be a string"))
            })?;
            let skip = decode_count(&chunk[1], i, "skip")?;
            let delete = decode_count(&chunk[2], i, "delete")?;
            Ok(Triplet::new(insert, skip, delete))
        })
        .collect::<Result<Vec<_>>>()
        .map(Patch::from)
}

fn decode_count(v: &Value, i: usize, field: &str) -> Result<usize> {
    v.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            Error::InvalidPatch(format!("triplet {i}: {field} must be an unsigned integer"))
        })
}

pub fn to_string(patch: &Patch) -> String {
    encode(patch).to_string()
}

pub fn from_str(s: &str) -> Result<Patch> {
    let value: Value =
        serde_json::from_str(s).map_err(|e| Error::InvalidPatch(e.to_string()))?;
    decode(&value)
}
