//! Per-call diff configuration.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Limits applied by [`try_diff`](crate::try_diff).
///
/// The default imposes no limit at all, which is also how [`diff`](crate::diff)
/// behaves. Deserializes from JSON such as `{"max_len": 65536, "timeout_ms": 250}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Maximum combined length of source and destination, in chars.
    pub max_len: Option<usize>,
    /// Wall-clock budget for the whole diff. Once spent, bisection stops
    /// searching and emits a delete+insert pair for the remaining region.
    #[serde(rename = "timeout_ms", with = "millis")]
    pub timeout: Option<Duration>,
}

impl DiffOptions {
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.timeout.and_then(|t| Instant::now().checked_add(t))
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&(d.as_millis() as u64)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
