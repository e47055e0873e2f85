//! Builder registry
//!
//! Exact-type keyed constructors for the temporal types. Lookup is by
//! `TypeId` identity only: a wrapper or newtype around a registered type
//! does not match its entry and must be registered on its own.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use type_mapping::{Bindable, SqlDate, SqlTimestamp, SqlType, SqlValue, TypeToken};

use crate::argument::Argument;
use crate::errors::ArgumentError;

type Convert = Box<dyn Fn(&dyn Bindable) -> Option<SqlValue> + Send + Sync>;

/// Constructor of arguments for one registered type
pub struct ArgBuilder {
    sql_type: SqlType,
    convert: Convert,
}

impl ArgBuilder {
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    /// Build an argument; a missing value binds a null of the registered wire type
    pub fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
    ) -> Result<Argument, ArgumentError> {
        match value {
            None => Ok(Argument::null(self.sql_type)),
            Some(v) => (self.convert)(v)
                .map(|converted| Argument::new(self.sql_type, converted))
                .ok_or_else(|| ArgumentError::unsupported(expected, value)),
        }
    }
}

impl fmt::Debug for ArgBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgBuilder")
            .field("sql_type", &self.sql_type)
            .finish()
    }
}

/// Registry of argument builders keyed by exact type identity
#[derive(Debug, Default)]
pub struct ArgumentBuilders {
    builders: HashMap<TypeId, ArgBuilder>,
}

impl ArgumentBuilders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in temporal conversion
    pub fn builtin() -> Self {
        let mut builders = Self::new();

        // Legacy instant, normalized to a millisecond timestamp
        builders.register::<SystemTime, _>(SqlType::Timestamp, |v| {
            system_time_millis(v)
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(SqlValue::Timestamp)
        });
        builders.register::<SqlDate, _>(SqlType::Date, |v| v.to_naive_date().map(SqlValue::Date));
        builders.register::<SqlTimestamp, _>(SqlType::Timestamp, |v| {
            v.to_date_time().map(SqlValue::Timestamp)
        });

        builders.register::<NaiveTime, _>(SqlType::Time, |v| Some(SqlValue::Time(*v)));
        builders.register::<NaiveDate, _>(SqlType::Date, |v| Some(SqlValue::Date(*v)));
        // Zone-less date-times are taken as UTC wall clock
        builders.register::<NaiveDateTime, _>(SqlType::Timestamp, |v| {
            Some(SqlValue::Timestamp(v.and_utc()))
        });
        builders.register::<DateTime<Utc>, _>(SqlType::Timestamp, |v| {
            Some(SqlValue::Timestamp(*v))
        });
        builders.register::<DateTime<FixedOffset>, _>(SqlType::Timestamp, |v| {
            Some(SqlValue::Timestamp(v.with_timezone(&Utc)))
        });
        builders.register::<DateTime<Local>, _>(SqlType::Timestamp, |v| {
            Some(SqlValue::Timestamp(v.with_timezone(&Utc)))
        });

        builders
    }

    /// Register a conversion for exactly `T`, replacing any previous entry
    pub fn register<T, F>(&mut self, sql_type: SqlType, convert: F)
    where
        T: Bindable,
        F: Fn(&T) -> Option<SqlValue> + Send + Sync + 'static,
    {
        let convert: Convert = Box::new(move |value: &dyn Bindable| {
            value.as_any().downcast_ref::<T>().and_then(&convert)
        });
        self.builders
            .insert(TypeId::of::<T>(), ArgBuilder { sql_type, convert });
    }

    pub fn get(&self, token: &TypeToken) -> Option<&ArgBuilder> {
        self.builders.get(&token.id())
    }

    pub fn contains(&self, token: &TypeToken) -> bool {
        self.builders.contains_key(&token.id())
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

/// Milliseconds since the epoch, floored for instants before it; `None`
/// outside the `i64` range
fn system_time_millis(time: &SystemTime) -> Option<i64> {
    let nanos = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_nanos() as i128,
        Err(before) => -(before.duration().as_nanos() as i128),
    };
    i64::try_from(nanos.div_euclid(1_000_000)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    fn wire(builders: &ArgumentBuilders, value: &dyn Bindable) -> Argument {
        let token = value.runtime_type();
        builders
            .get(&token)
            .expect("registered")
            .build(&token, Some(value))
            .unwrap()
    }

    #[test]
    fn test_builtin_registrations() {
        let builders = ArgumentBuilders::builtin();
        assert_eq!(builders.len(), 9);
        assert!(builders.contains(&TypeToken::of::<SystemTime>()));
        assert!(builders.contains(&TypeToken::of::<DateTime<Local>>()));
        assert!(!builders.contains(&TypeToken::of::<String>()));
    }

    #[test]
    fn test_lookup_is_exact() {
        let builders = ArgumentBuilders::builtin();
        assert!(builders.get(&TypeToken::of::<Option<NaiveDate>>()).is_none());
        assert!(builders.get(&TypeToken::of::<NaiveDate>()).is_some());
    }

    #[test]
    fn test_same_instant_same_wire_millis() {
        let builders = ArgumentBuilders::builtin();
        let utc = Utc.with_ymd_and_hms(2021, 6, 30, 18, 45, 12).unwrap()
            + chrono::Duration::milliseconds(345);
        let offset = utc.with_timezone(&FixedOffset::east_opt(5 * 3600).unwrap());
        let local = utc.with_timezone(&Local);
        let naive = utc.naive_utc();
        let legacy = UNIX_EPOCH + Duration::from_millis(utc.timestamp_millis() as u64);
        let wrapped = SqlTimestamp::from(utc);

        let expected = Some(utc.timestamp_millis());
        let values: Vec<&dyn Bindable> = vec![&utc, &offset, &local, &naive, &legacy, &wrapped];
        for value in values {
            let arg = wire(&builders, value);
            assert_eq!(arg.sql_type(), SqlType::Timestamp);
            assert_eq!(arg.value().epoch_millis(), expected, "{:?}", value);
        }
    }

    #[test]
    fn test_dates_agree() {
        let builders = ArgumentBuilders::builtin();
        let date = NaiveDate::from_ymd_opt(2022, 1, 2).unwrap();
        let legacy = SqlDate::from(date);
        assert_eq!(wire(&builders, &date), wire(&builders, &legacy));
        assert_eq!(wire(&builders, &date).value(), &SqlValue::Date(date));
    }

    #[test]
    fn test_null_binds_registered_type() {
        let builders = ArgumentBuilders::builtin();
        let token = TypeToken::of::<NaiveTime>();
        let arg = builders.get(&token).unwrap().build(&token, None).unwrap();
        assert_eq!(arg, Argument::null(SqlType::Time));
    }

    #[test]
    fn test_mismatched_value_is_unsupported() {
        let builders = ArgumentBuilders::builtin();
        let token = TypeToken::of::<NaiveDate>();
        let err = builders
            .get(&token)
            .unwrap()
            .build(&token, Some(&"2022-01-02"))
            .unwrap_err();
        assert!(matches!(err, ArgumentError::UnsupportedConversion { .. }));
    }

    #[test]
    fn test_system_time_before_epoch_floors() {
        let before = UNIX_EPOCH - Duration::from_micros(1_500);
        assert_eq!(system_time_millis(&before), Some(-2));
        let after = UNIX_EPOCH + Duration::from_micros(1_500);
        assert_eq!(system_time_millis(&after), Some(1));
    }

    #[test]
    fn test_system_time_out_of_range_is_unsupported() {
        let far = UNIX_EPOCH
            .checked_add(Duration::from_secs(1 << 62))
            .expect("representable instant");
        assert_eq!(system_time_millis(&far), None);

        let builders = ArgumentBuilders::builtin();
        let token = TypeToken::of::<SystemTime>();
        let err = builders
            .get(&token)
            .unwrap()
            .build(&token, Some(&far))
            .unwrap_err();
        assert!(matches!(err, ArgumentError::UnsupportedConversion { .. }));
    }
}
