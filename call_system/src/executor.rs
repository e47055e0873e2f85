//! Call execution
//!
//! Runs a statement with resolved arguments and collects the first returned
//! row as output parameters, each column reachable by name and by 1-based
//! position.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use type_mapping::SqlValue;
use uuid::Uuid;

use argument_system::Argument;

use crate::errors::CallError;
use crate::out_parameters::OutParameters;
use crate::parameters::CallParameters;

/// Output column families the collector can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Void,
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Numeric,
    Text,
    Bytes,
    Uuid,
    Date,
    Time,
    Timestamp,
    TimestampTz,
    Json,
}

impl ColumnKind {
    fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name {
            "VOID" => ColumnKind::Void,
            "BOOL" => ColumnKind::Boolean,
            "INT2" => ColumnKind::SmallInt,
            "INT4" => ColumnKind::Integer,
            "INT8" => ColumnKind::BigInt,
            "FLOAT4" => ColumnKind::Real,
            "FLOAT8" => ColumnKind::Double,
            "NUMERIC" => ColumnKind::Numeric,
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "UNKNOWN" => ColumnKind::Text,
            "BYTEA" => ColumnKind::Bytes,
            "UUID" => ColumnKind::Uuid,
            "DATE" => ColumnKind::Date,
            "TIME" => ColumnKind::Time,
            "TIMESTAMP" => ColumnKind::Timestamp,
            "TIMESTAMPTZ" => ColumnKind::TimestampTz,
            "JSON" | "JSONB" => ColumnKind::Json,
            _ => return None,
        };
        Some(kind)
    }
}

fn decode_column(row: &PgRow, index: usize, kind: ColumnKind) -> Result<SqlValue, sqlx::Error> {
    if kind == ColumnKind::Void || row.try_get_raw(index)?.is_null() {
        return Ok(SqlValue::Null);
    }

    let value = match kind {
        ColumnKind::Void => SqlValue::Null,
        ColumnKind::Boolean => SqlValue::Boolean(row.try_get::<bool, _>(index)?),
        ColumnKind::SmallInt => SqlValue::SmallInt(row.try_get::<i16, _>(index)?),
        ColumnKind::Integer => SqlValue::Integer(row.try_get::<i32, _>(index)?),
        ColumnKind::BigInt => SqlValue::BigInt(row.try_get::<i64, _>(index)?),
        ColumnKind::Real => SqlValue::Real(row.try_get::<f32, _>(index)?),
        ColumnKind::Double => SqlValue::Double(row.try_get::<f64, _>(index)?),
        ColumnKind::Numeric => SqlValue::Decimal(row.try_get::<Decimal, _>(index)?),
        ColumnKind::Text => SqlValue::Text(row.try_get::<String, _>(index)?),
        ColumnKind::Bytes => SqlValue::Bytes(row.try_get::<Vec<u8>, _>(index)?),
        ColumnKind::Uuid => SqlValue::Uuid(row.try_get::<Uuid, _>(index)?),
        ColumnKind::Date => SqlValue::Date(row.try_get::<NaiveDate, _>(index)?),
        ColumnKind::Time => SqlValue::Time(row.try_get::<NaiveTime, _>(index)?),
        // Zone-less timestamps are read as UTC wall clock
        ColumnKind::Timestamp => {
            SqlValue::Timestamp(row.try_get::<NaiveDateTime, _>(index)?.and_utc())
        }
        ColumnKind::TimestampTz => SqlValue::Timestamp(row.try_get::<DateTime<Utc>, _>(index)?),
        ColumnKind::Json => SqlValue::Json(row.try_get::<serde_json::Value, _>(index)?),
    };
    Ok(value)
}

/// Collect every column of `row` by name and by 1-based position
pub fn collect_out_parameters(row: &PgRow) -> Result<OutParameters, CallError> {
    let mut out = OutParameters::new();

    for column in row.columns() {
        let position = column.ordinal() + 1;
        let type_name = column.type_info().name();
        let kind = ColumnKind::from_type_name(type_name).ok_or_else(|| {
            CallError::UnsupportedColumnType {
                position,
                type_name: type_name.to_string(),
            }
        })?;

        let value = decode_column(row, column.ordinal(), kind)?;
        out.put(column.name(), value.clone());
        out.put(position, value);
    }

    Ok(out)
}

/// Run `sql` with `arguments` bound at $1..$n and collect its output.
///
/// A statement returning no row yields an empty container.
pub async fn execute_call(
    pool: &PgPool,
    sql: &str,
    arguments: &[Argument],
) -> Result<OutParameters, CallError> {
    let parameters = CallParameters::from_arguments(arguments)?;
    let pg_arguments = parameters.to_pg_arguments()?;

    tracing::debug!("[CALL] SQL: {}", sql);
    tracing::debug!("[CALL] params count: {}", parameters.len());

    let row = sqlx::query_with(sql, pg_arguments)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let out = collect_out_parameters(&row)?;
            tracing::debug!("[CALL] output values: {}", out.len());
            Ok(out)
        }
        None => Ok(OutParameters::new()),
    }
}
