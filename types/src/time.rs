//! Timestamp type used for transaction validity windows.
//!
//! Seconds and nanoseconds since the Unix epoch (UTC), matching the
//! resolution the network uses for `transactionValidStart`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// A point in time with nanosecond precision.
///
/// `nanos` is always below one second; deserialized input is normalised the
/// same way [`Timestamp::new`] normalises it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawTimestamp")]
pub struct Timestamp {
    seconds: i64,
    nanos: u32,
}

/// Wire shape of a [`Timestamp`] before normalisation.
#[derive(Deserialize)]
struct RawTimestamp {
    seconds: i64,
    nanos: u32,
}

impl From<RawTimestamp> for Timestamp {
    fn from(raw: RawTimestamp) -> Self {
        Self::new(raw.seconds, raw.nanos)
    }
}

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self { seconds: 0, nanos: 0 };

    /// Build a timestamp; `nanos` beyond one second carry into `seconds`.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let carry = i64::from(nanos / 1_000_000_000);
        Self { seconds: seconds.saturating_add(carry), nanos: nanos % 1_000_000_000 }
    }

    pub fn from_unix_nanos(total: i128) -> Self {
        let seconds = total.div_euclid(NANOS_PER_SEC);
        let nanos = total.rem_euclid(NANOS_PER_SEC) as u32;
        let seconds = seconds.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        Self { seconds, nanos }
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch");
        Self::new(elapsed.as_secs() as i64, elapsed.subsec_nanos())
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn as_unix_nanos(&self) -> i128 {
        i128::from(self.seconds) * NANOS_PER_SEC + i128::from(self.nanos)
    }

    /// Move this timestamp `nanos` nanoseconds into the past.
    pub fn saturating_sub_nanos(&self, nanos: u64) -> Self {
        Self::from_unix_nanos(self.as_unix_nanos() - i128::from(nanos))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}
