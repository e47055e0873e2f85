//! Output parameter container
//!
//! Holds the values returned by a call, addressed either by parameter name
//! or by 1-based position. Both addressing modes are independent: whoever
//! fills the container decides whether a value is reachable both ways.
//!
//! Typed accessors never coerce across categories. A missing entry (or a
//! stored SQL NULL) is [`OutParameterError::ParameterNotFound`], a present
//! entry of the wrong kind is [`OutParameterError::TypeMismatch`].

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use type_mapping::{SqlDate, SqlTimestamp, SqlValue};
use uuid::Uuid;

use crate::errors::OutParameterError;
use crate::number::Number;

/// Address of an output parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Name(String),
    /// 1-based position
    Position(usize),
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Name(name) => f.write_str(name),
            ParamKey::Position(position) => write!(f, "at {}", position),
        }
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::Name(name.to_string())
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        ParamKey::Name(name)
    }
}

impl From<&String> for ParamKey {
    fn from(name: &String) -> Self {
        ParamKey::Name(name.clone())
    }
}

impl From<usize> for ParamKey {
    fn from(position: usize) -> Self {
        ParamKey::Position(position)
    }
}

/// Negative positions map to 0, which never addresses a parameter
impl From<i32> for ParamKey {
    fn from(position: i32) -> Self {
        ParamKey::Position(usize::try_from(position).unwrap_or(0))
    }
}

/// Typed extraction of a stored value without cross-category coercion
pub trait FromSqlValue: Sized {
    /// Category name reported in [`OutParameterError::TypeMismatch`]
    const EXPECTED: &'static str;

    fn from_sql_value(value: &SqlValue) -> Option<Self>;
}

macro_rules! impl_from_sql_value {
    ($ty:ty, $expected:literal, { $($pattern:pat => $converted:expr),+ $(,)? }) => {
        impl FromSqlValue for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_sql_value(value: &SqlValue) -> Option<Self> {
                match value {
                    $($pattern => Some($converted),)+
                    _ => None,
                }
            }
        }
    };
}

impl_from_sql_value!(bool, "Boolean", { SqlValue::Boolean(b) => *b });
impl_from_sql_value!(i16, "SmallInt", {
    SqlValue::TinyInt(n) => i16::from(*n),
    SqlValue::SmallInt(n) => *n,
});
impl_from_sql_value!(i32, "Integer", {
    SqlValue::TinyInt(n) => i32::from(*n),
    SqlValue::SmallInt(n) => i32::from(*n),
    SqlValue::Integer(n) => *n,
});
impl_from_sql_value!(i64, "BigInt", {
    SqlValue::TinyInt(n) => i64::from(*n),
    SqlValue::SmallInt(n) => i64::from(*n),
    SqlValue::Integer(n) => i64::from(*n),
    SqlValue::BigInt(n) => *n,
});
impl_from_sql_value!(f32, "Real", { SqlValue::Real(n) => *n });
impl_from_sql_value!(f64, "Double", {
    SqlValue::Real(n) => f64::from(*n),
    SqlValue::Double(n) => *n,
});
impl_from_sql_value!(Decimal, "Decimal", { SqlValue::Decimal(d) => *d });
impl_from_sql_value!(String, "Text", { SqlValue::Text(s) => s.clone() });
impl_from_sql_value!(Vec<u8>, "Bytes", { SqlValue::Bytes(bytes) => bytes.clone() });
impl_from_sql_value!(Uuid, "Uuid", { SqlValue::Uuid(uuid) => *uuid });
impl_from_sql_value!(NaiveDate, "Date", { SqlValue::Date(date) => *date });
impl_from_sql_value!(NaiveTime, "Time", { SqlValue::Time(time) => *time });
impl_from_sql_value!(DateTime<Utc>, "Timestamp", { SqlValue::Timestamp(ts) => *ts });
impl_from_sql_value!(serde_json::Value, "Json", { SqlValue::Json(json) => json.clone() });

/// Output values of one call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutParameters {
    values: HashMap<ParamKey, SqlValue>,
}

impl OutParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous value under the same key
    pub fn put(&mut self, key: impl Into<ParamKey>, value: impl Into<SqlValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw stored value, including a stored SQL NULL
    pub fn get(&self, key: impl Into<ParamKey>) -> Option<&SqlValue> {
        self.values.get(&key.into())
    }

    pub fn get_object(&self, key: impl Into<ParamKey>) -> Option<&SqlValue> {
        self.get(key)
    }

    pub fn contains(&self, key: impl Into<ParamKey>) -> bool {
        self.values.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &SqlValue)> {
        self.values.iter()
    }

    /// Textual form of any stored value; binary values render as hex bytea
    pub fn get_string(&self, key: impl Into<ParamKey>) -> Result<String, OutParameterError> {
        let key = key.into();
        self.present(&key).map(|value| value.to_string())
    }

    pub fn get_bytes(&self, key: impl Into<ParamKey>) -> Result<&[u8], OutParameterError> {
        let key = key.into();
        let value = self.present(&key)?;
        value
            .as_bytes()
            .ok_or_else(|| mismatch(&key, "Bytes", value))
    }

    pub fn get_int(&self, key: impl Into<ParamKey>) -> Result<i32, OutParameterError> {
        self.number(key.into()).map(Number::int_value)
    }

    pub fn get_long(&self, key: impl Into<ParamKey>) -> Result<i64, OutParameterError> {
        self.number(key.into()).map(Number::long_value)
    }

    pub fn get_short(&self, key: impl Into<ParamKey>) -> Result<i16, OutParameterError> {
        self.number(key.into()).map(Number::short_value)
    }

    pub fn get_double(&self, key: impl Into<ParamKey>) -> Result<f64, OutParameterError> {
        self.number(key.into()).map(Number::double_value)
    }

    pub fn get_float(&self, key: impl Into<ParamKey>) -> Result<f32, OutParameterError> {
        self.number(key.into()).map(Number::float_value)
    }

    pub fn get_date(&self, key: impl Into<ParamKey>) -> Result<SqlDate, OutParameterError> {
        self.epoch_millis(key.into()).map(SqlDate::from_epoch_millis)
    }

    pub fn get_timestamp(
        &self,
        key: impl Into<ParamKey>,
    ) -> Result<SqlTimestamp, OutParameterError> {
        self.epoch_millis(key.into())
            .map(SqlTimestamp::from_epoch_millis)
    }

    /// Exact typed extraction, e.g. `get_as::<Uuid>("id")`
    pub fn get_as<T: FromSqlValue>(&self, key: impl Into<ParamKey>) -> Result<T, OutParameterError> {
        let key = key.into();
        let value = self.present(&key)?;
        T::from_sql_value(value).ok_or_else(|| mismatch(&key, T::EXPECTED, value))
    }

    fn present(&self, key: &ParamKey) -> Result<&SqlValue, OutParameterError> {
        self.values
            .get(key)
            .filter(|value| !value.is_null())
            .ok_or_else(|| OutParameterError::ParameterNotFound(key.clone()))
    }

    fn number(&self, key: ParamKey) -> Result<Number, OutParameterError> {
        let value = self.present(&key)?;
        Number::from_value(value).ok_or_else(|| mismatch(&key, "a number", value))
    }

    fn epoch_millis(&self, key: ParamKey) -> Result<i64, OutParameterError> {
        let value = self.present(&key)?;
        value
            .epoch_millis()
            .ok_or_else(|| mismatch(&key, "a date", value))
    }
}

impl<'a> IntoIterator for &'a OutParameters {
    type Item = (&'a ParamKey, &'a SqlValue);
    type IntoIter = std::collections::hash_map::Iter<'a, ParamKey, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn mismatch(key: &ParamKey, expected: &'static str, actual: &SqlValue) -> OutParameterError {
    OutParameterError::TypeMismatch {
        key: key.clone(),
        expected,
        actual: actual.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_value_and_int_narrowing() {
        let mut out = OutParameters::new();
        out.put("ALong", 4_815_162_342i64);

        assert_eq!(out.get_long("ALong").unwrap(), 4_815_162_342);
        assert_eq!(out.get_int("ALong").unwrap(), 520_195_046);
        assert_eq!(out.get_double("ALong").unwrap(), 4_815_162_342.0);
    }

    #[test]
    fn test_bytes_by_position() {
        let mut out = OutParameters::new();
        out.put(1, vec![0x01u8, 0xab, 0xff]);

        assert_eq!(out.get_bytes(1).unwrap(), &[0x01, 0xab, 0xff]);
        assert_eq!(out.get_string(1).unwrap(), "\\x01abff");
        assert!(!out.contains("1"));
    }

    #[test]
    fn test_missing_parameter() {
        let out = OutParameters::new();
        let err = out.get_string("missing").unwrap_err();
        assert_eq!(
            err,
            OutParameterError::ParameterNotFound(ParamKey::Name("missing".into()))
        );
        assert_eq!(err.to_string(), "Parameter missing does not exist");
        assert_eq!(
            out.get_int(3).unwrap_err().to_string(),
            "Parameter at 3 does not exist"
        );
    }

    #[test]
    fn test_stored_null_counts_as_missing() {
        let mut out = OutParameters::new();
        out.put("empty", SqlValue::Null);

        assert!(out.contains("empty"));
        assert_eq!(out.get("empty"), Some(&SqlValue::Null));
        assert!(matches!(
            out.get_long("empty"),
            Err(OutParameterError::ParameterNotFound(_))
        ));
    }

    #[test]
    fn test_type_mismatch_names_key_and_stored_type() {
        let mut out = OutParameters::new();
        out.put("name", "Ada");
        out.put(2, 7i32);

        let err = out.get_int("name").unwrap_err();
        assert_eq!(err.to_string(), "Parameter name is not a number but Text");
        let err = out.get_bytes(2).unwrap_err();
        assert_eq!(err.to_string(), "Parameter at 2 is not Bytes but Integer");
        assert!(matches!(
            out.get_date("name"),
            Err(OutParameterError::TypeMismatch { expected: "a date", .. })
        ));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut out = OutParameters::new();
        out.put("Total", 1i16);
        assert!(out.get_short("total").is_err());
        assert_eq!(out.get_short("Total").unwrap(), 1);
    }

    #[test]
    fn test_temporal_accessors_share_epoch_millis() {
        let ts = Utc.with_ymd_and_hms(2020, 2, 29, 12, 30, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let mut out = OutParameters::new();
        out.put("at", ts);
        out.put("on", date);

        assert_eq!(
            out.get_timestamp("at").unwrap().epoch_millis(),
            ts.timestamp_millis()
        );
        assert_eq!(out.get_date("on").unwrap().to_naive_date(), Some(date));
        assert_eq!(
            out.get_timestamp("on").unwrap().epoch_millis(),
            out.get_date("on").unwrap().epoch_millis()
        );
    }

    #[test]
    fn test_numeric_accessors_truncate() {
        let mut out = OutParameters::new();
        out.put("amount", Decimal::new(-123_459, 1));
        out.put("ratio", 2.75f64);

        assert_eq!(out.get_long("amount").unwrap(), -12_345);
        assert_eq!(out.get_short("ratio").unwrap(), 2);
        assert_eq!(out.get_float("ratio").unwrap(), 2.75);
    }

    #[test]
    fn test_get_as_is_exact() {
        let id = Uuid::new_v4();
        let mut out = OutParameters::new();
        out.put("id", id);
        out.put("count", 5i32);

        assert_eq!(out.get_as::<Uuid>("id").unwrap(), id);
        assert_eq!(out.get_as::<i64>("count").unwrap(), 5);
        let err = out.get_as::<String>("count").unwrap_err();
        assert_eq!(err.to_string(), "Parameter count is not Text but Integer");
    }

    #[test]
    fn test_iteration_and_len() {
        let mut out = OutParameters::new();
        assert!(out.is_empty());
        out.put("a", 1i32);
        out.put(1, 1i32);
        out.put("a", 2i32);

        assert_eq!(out.len(), 2);
        assert_eq!(out.get_object("a"), Some(&SqlValue::Integer(2)));
        let positions = out
            .iter()
            .filter(|(key, _)| matches!(key, ParamKey::Position(_)))
            .count();
        assert_eq!(positions, 1);
    }
}
