//! Transaction identifiers
//!
//! Ids are integers so that files written by earlier versions (which used
//! the creation time in epoch milliseconds) load unchanged. New ids still
//! start from the wall clock, but the generator never hands out the same
//! value twice, even for inserts within the same millisecond.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Largest id ever issued or accepted from disk: the biggest integer a
    /// JSON number holds exactly in every reader (2^53 - 1)
    pub const MAX: TransactionId = TransactionId(9_007_199_254_740_991);

    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the underlying integer
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Ids are positive and at most `TransactionId::MAX`
    pub const fn is_valid(&self) -> bool {
        self.0 > 0 && self.0 <= Self::MAX.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for TransactionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Hands out strictly increasing transaction ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that already exists so it is never issued again
    pub fn observe(&mut self, id: TransactionId) {
        self.last = self.last.max(id.0);
    }

    /// Issue the next id: the current epoch milliseconds, or one past the
    /// last issued id when the clock has not moved forward. `None` once
    /// `TransactionId::MAX` has been reached.
    pub fn next_id(&mut self) -> Option<TransactionId> {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> Option<TransactionId> {
        let id = if now_millis > self.last {
            now_millis
        } else {
            self.last.checked_add(1)?
        };
        if id > TransactionId::MAX.0 {
            return None;
        }
        self.last = id;
        Some(TransactionId(id))
    }
}
