//! Millisecond-precision temporal wrappers
//!
//! These mirror the legacy driver representations where both dates and
//! timestamps are carried as milliseconds since the Unix epoch.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date stored as epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SqlDate {
    millis: i64,
}

impl SqlDate {
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn epoch_millis(&self) -> i64 {
        self.millis
    }

    /// UTC calendar date containing this instant
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(self.millis).map(|dt| dt.date_naive())
    }
}

impl From<NaiveDate> for SqlDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_epoch_millis(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
    }
}

impl fmt::Display for SqlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive_date() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "{}ms", self.millis),
        }
    }
}

/// Instant stored as epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SqlTimestamp {
    millis: i64,
}

impl SqlTimestamp {
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn epoch_millis(&self) -> i64 {
        self.millis
    }

    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.millis)
    }
}

impl From<DateTime<Utc>> for SqlTimestamp {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(ts.timestamp_millis())
    }
}

impl fmt::Display for SqlTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Some(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.3f")),
            None => write!(f, "{}ms", self.millis),
        }
    }
}
