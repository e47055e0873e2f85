//! Type mapping definitions
//!
//! This module provides the wire-level SQL type tags and runtime values
//! exchanged with the database driver in both directions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire type tag attached to every bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlType {
    /// Untyped null, the driver infers the type from the statement
    Null,
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Numeric,
    Char,
    Varchar,
    Binary,
    Date,
    Time,
    Timestamp,
    Uuid,
    Json,
    /// Driver specific types bound through their textual form (inet, ...)
    Other,
}

/// SQL values crossing the host/database boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
    Decimal(Decimal),
    Text(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
}

impl SqlValue {
    /// Natural wire type of this value
    pub fn sql_type(&self) -> SqlType {
        match self {
            SqlValue::Null => SqlType::Null,
            SqlValue::Boolean(_) => SqlType::Boolean,
            SqlValue::TinyInt(_) => SqlType::TinyInt,
            SqlValue::SmallInt(_) => SqlType::SmallInt,
            SqlValue::Integer(_) => SqlType::Integer,
            SqlValue::BigInt(_) => SqlType::BigInt,
            SqlValue::Real(_) => SqlType::Real,
            SqlValue::Double(_) => SqlType::Double,
            SqlValue::Decimal(_) => SqlType::Numeric,
            SqlValue::Text(_) => SqlType::Varchar,
            SqlValue::Bytes(_) => SqlType::Binary,
            SqlValue::Uuid(_) => SqlType::Uuid,
            SqlValue::Date(_) => SqlType::Date,
            SqlValue::Time(_) => SqlType::Time,
            SqlValue::Timestamp(_) => SqlType::Timestamp,
            SqlValue::Json(_) => SqlType::Json,
        }
    }

    /// Descriptive name of the stored variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "Null",
            SqlValue::Boolean(_) => "Boolean",
            SqlValue::TinyInt(_) => "TinyInt",
            SqlValue::SmallInt(_) => "SmallInt",
            SqlValue::Integer(_) => "Integer",
            SqlValue::BigInt(_) => "BigInt",
            SqlValue::Real(_) => "Real",
            SqlValue::Double(_) => "Double",
            SqlValue::Decimal(_) => "Decimal",
            SqlValue::Text(_) => "Text",
            SqlValue::Bytes(_) => "Bytes",
            SqlValue::Uuid(_) => "Uuid",
            SqlValue::Date(_) => "Date",
            SqlValue::Time(_) => "Time",
            SqlValue::Timestamp(_) => "Timestamp",
            SqlValue::Json(_) => "Json",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SqlValue::TinyInt(_)
                | SqlValue::SmallInt(_)
                | SqlValue::Integer(_)
                | SqlValue::BigInt(_)
                | SqlValue::Real(_)
                | SqlValue::Double(_)
                | SqlValue::Decimal(_)
        )
    }

    pub fn is_temporal(&self) -> bool {
        self.epoch_millis().is_some()
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SqlValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Milliseconds since the Unix epoch for temporal values.
    ///
    /// Dates are taken at UTC midnight and times on 1970-01-01, so every
    /// temporal variant lands on the same millisecond scale.
    pub fn epoch_millis(&self) -> Option<i64> {
        match self {
            SqlValue::Timestamp(ts) => Some(ts.timestamp_millis()),
            SqlValue::Date(date) => Some(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()),
            SqlValue::Time(time) => Some(
                NaiveDate::from_ymd_opt(1970, 1, 1)?
                    .and_time(*time)
                    .and_utc()
                    .timestamp_millis(),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Boolean(b) => write!(f, "{}", b),
            SqlValue::TinyInt(n) => write!(f, "{}", n),
            SqlValue::SmallInt(n) => write!(f, "{}", n),
            SqlValue::Integer(n) => write!(f, "{}", n),
            SqlValue::BigInt(n) => write!(f, "{}", n),
            SqlValue::Real(n) => write!(f, "{}", n),
            SqlValue::Double(n) => write!(f, "{}", n),
            SqlValue::Decimal(d) => write!(f, "{}", d),
            SqlValue::Text(s) => f.write_str(s),
            // PostgreSQL bytea hex output format
            SqlValue::Bytes(bytes) => {
                f.write_str("\\x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            SqlValue::Uuid(uuid) => write!(f, "{}", uuid),
            SqlValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            SqlValue::Time(time) => write!(f, "{}", time.format("%H:%M:%S%.f")),
            SqlValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.3f")),
            SqlValue::Json(json) => write!(f, "{}", json),
        }
    }
}

/// Convert basic Rust types to SqlValue
impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<i8> for SqlValue {
    fn from(val: i8) -> Self {
        SqlValue::TinyInt(val)
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::SmallInt(val)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::BigInt(val)
    }
}

impl From<f32> for SqlValue {
    fn from(val: f32) -> Self {
        SqlValue::Real(val)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Double(val)
    }
}

impl From<Decimal> for SqlValue {
    fn from(val: Decimal) -> Self {
        SqlValue::Decimal(val)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(val: Vec<u8>) -> Self {
        SqlValue::Bytes(val)
    }
}

impl From<Uuid> for SqlValue {
    fn from(val: Uuid) -> Self {
        SqlValue::Uuid(val)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(val: NaiveDate) -> Self {
        SqlValue::Date(val)
    }
}

impl From<NaiveTime> for SqlValue {
    fn from(val: NaiveTime) -> Self {
        SqlValue::Time(val)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(val: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(val)
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(val: serde_json::Value) -> Self {
        SqlValue::Json(val)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_millis_agrees_across_temporal_variants() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let date = SqlValue::Date(midnight.date_naive());
        let ts = SqlValue::Timestamp(midnight);
        assert_eq!(date.epoch_millis(), ts.epoch_millis());
        assert_eq!(ts.epoch_millis(), Some(1_710_460_800_000));
    }

    #[test]
    fn test_time_is_measured_from_epoch_day() {
        let time = SqlValue::Time(NaiveTime::from_hms_milli_opt(0, 0, 1, 500).unwrap());
        assert_eq!(time.epoch_millis(), Some(1_500));
    }

    #[test]
    fn test_non_temporal_has_no_epoch() {
        assert_eq!(SqlValue::BigInt(42).epoch_millis(), None);
        assert!(!SqlValue::Text("2024-01-01".into()).is_temporal());
    }

    #[test]
    fn test_bytes_display_as_bytea_hex() {
        let value = SqlValue::Bytes(vec![0x01, 0xab, 0xff]);
        assert_eq!(value.to_string(), "\\x01abff");
        assert_eq!(SqlValue::Bytes(vec![]).to_string(), "\\x");
    }

    #[test]
    fn test_option_into_value() {
        let none: Option<i32> = None;
        assert_eq!(SqlValue::from(none), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(7i64)), SqlValue::BigInt(7));
    }

    #[test]
    fn test_numeric_classification() {
        assert!(SqlValue::Decimal(Decimal::new(123459, 1)).is_numeric());
        assert!(SqlValue::Real(1.5).is_numeric());
        assert!(!SqlValue::Boolean(true).is_numeric());
        assert!(!SqlValue::Bytes(vec![1]).is_numeric());
    }
}
