//! In-memory call handle
//!
//! [`CallParameters`] records what arguments write onto a call and turns
//! the result into sqlx [`PgArguments`] for execution.

use std::collections::BTreeMap;

use argument_system::{Argument, ArgumentError, CallHandle};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgArguments, PgTypeInfo};
use sqlx::{Arguments, Encode, Postgres, Type};
use type_mapping::{pg_type_size_hint, SqlType, SqlValue};

/// Positional parameters of one outbound call, 1-based
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallParameters {
    slots: BTreeMap<usize, (SqlType, SqlValue)>,
}

impl CallParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters with `arguments` applied at positions 1..=n
    pub fn from_arguments(arguments: &[Argument]) -> Result<Self, ArgumentError> {
        let mut parameters = Self::new();
        parameters.bind_all(arguments)?;
        Ok(parameters)
    }

    /// Apply `arguments` in order, starting at position 1
    pub fn bind_all(&mut self, arguments: &[Argument]) -> Result<(), ArgumentError> {
        for (index, argument) in (1..).zip(arguments) {
            argument.apply(self, index)?;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<(SqlType, &SqlValue)> {
        self.slots
            .get(&index)
            .map(|(sql_type, value)| (*sql_type, value))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Encode every slot for PostgreSQL; positions must run 1..=n without gaps
    pub fn to_pg_arguments(&self) -> Result<PgArguments, ArgumentError> {
        let mut arguments = PgArguments::default();
        let size = self
            .slots
            .values()
            .filter_map(|(sql_type, _)| pg_type_size_hint(*sql_type))
            .sum();
        arguments.reserve(self.slots.len(), size);

        for (expected, (&index, (sql_type, value))) in (1..).zip(&self.slots) {
            if index != expected {
                return Err(ArgumentError::rejected(
                    expected,
                    "no value bound at this position",
                ));
            }
            encode(&mut arguments, *sql_type, value)
                .map_err(|e| ArgumentError::rejected(index, e.to_string()))?;
        }
        Ok(arguments)
    }

    fn slot(&mut self, index: usize, sql_type: SqlType, value: SqlValue) -> Result<(), ArgumentError> {
        if index == 0 {
            return Err(ArgumentError::rejected(index, "parameter indexes are 1-based"));
        }
        self.slots.insert(index, (sql_type, value));
        Ok(())
    }
}

impl CallHandle for CallParameters {
    fn set_value(
        &mut self,
        index: usize,
        sql_type: SqlType,
        value: &SqlValue,
    ) -> Result<(), ArgumentError> {
        self.slot(index, sql_type, value.clone())
    }

    fn set_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), ArgumentError> {
        self.slot(index, sql_type, SqlValue::Null)
    }
}

/// Null declared with the unspecified type (OID 0); the server infers the
/// parameter type from the statement
#[derive(Debug, Clone, Copy)]
struct UntypedNull;

impl Type<Postgres> for UntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

impl Encode<'_, Postgres> for UntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}

fn encode(arguments: &mut PgArguments, sql_type: SqlType, value: &SqlValue) -> Result<(), BoxDynError> {
    match value {
        SqlValue::Null => encode_null(arguments, sql_type),
        SqlValue::Boolean(b) => arguments.add(*b),
        // PostgreSQL has no single byte integer
        SqlValue::TinyInt(n) => arguments.add(i16::from(*n)),
        SqlValue::SmallInt(n) => arguments.add(*n),
        SqlValue::Integer(n) => arguments.add(*n),
        SqlValue::BigInt(n) => arguments.add(*n),
        SqlValue::Real(n) => arguments.add(*n),
        SqlValue::Double(n) => arguments.add(*n),
        SqlValue::Decimal(d) => arguments.add(*d),
        SqlValue::Text(s) => arguments.add(s.as_str()),
        SqlValue::Bytes(bytes) => arguments.add(bytes.as_slice()),
        SqlValue::Uuid(uuid) => arguments.add(*uuid),
        SqlValue::Date(date) => arguments.add(*date),
        SqlValue::Time(time) => arguments.add(*time),
        SqlValue::Timestamp(ts) => arguments.add(*ts),
        SqlValue::Json(json) => arguments.add(json),
    }
}

/// Null typed after the declared wire type; textual nulls go as TEXT
fn encode_null(arguments: &mut PgArguments, sql_type: SqlType) -> Result<(), BoxDynError> {
    match sql_type {
        SqlType::Boolean => arguments.add(None::<bool>),
        SqlType::TinyInt | SqlType::SmallInt => arguments.add(None::<i16>),
        SqlType::Integer => arguments.add(None::<i32>),
        SqlType::BigInt => arguments.add(None::<i64>),
        SqlType::Real => arguments.add(None::<f32>),
        SqlType::Double => arguments.add(None::<f64>),
        SqlType::Numeric => arguments.add(None::<rust_decimal::Decimal>),
        SqlType::Binary => arguments.add(None::<Vec<u8>>),
        SqlType::Date => arguments.add(None::<chrono::NaiveDate>),
        SqlType::Time => arguments.add(None::<chrono::NaiveTime>),
        SqlType::Timestamp => arguments.add(None::<chrono::DateTime<chrono::Utc>>),
        SqlType::Uuid => arguments.add(None::<uuid::Uuid>),
        SqlType::Json => arguments.add(None::<serde_json::Value>),
        SqlType::Null => arguments.add(UntypedNull),
        SqlType::Char | SqlType::Varchar | SqlType::Other => arguments.add(None::<String>),
    }
}
