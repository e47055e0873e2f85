//! SQL type conversion utilities
//!
//! This module maps wire type tags to their PostgreSQL equivalents.

use crate::types::SqlType;

/// Map a wire type tag to the PostgreSQL type used for casts and diagnostics
pub fn sql_type_to_pg_type(sql_type: SqlType) -> &'static str {
    match sql_type {
        SqlType::Null => "UNKNOWN",
        SqlType::Boolean => "BOOLEAN",
        // PostgreSQL has no TINYINT
        SqlType::TinyInt | SqlType::SmallInt => "SMALLINT",
        SqlType::Integer => "INTEGER",
        SqlType::BigInt => "BIGINT",
        SqlType::Real => "REAL",
        SqlType::Double => "DOUBLE PRECISION",
        SqlType::Numeric => "NUMERIC",
        SqlType::Char => "CHAR(1)",
        SqlType::Varchar => "VARCHAR",
        SqlType::Binary => "BYTEA",
        SqlType::Date => "DATE",
        SqlType::Time => "TIME",
        SqlType::Timestamp => "TIMESTAMP WITH TIME ZONE",
        SqlType::Uuid => "UUID",
        SqlType::Json => "JSONB",
        SqlType::Other => "TEXT",
    }
}

/// Get size hint for a wire type (for buffer sizing)
pub fn pg_type_size_hint(sql_type: SqlType) -> Option<usize> {
    match sql_type {
        SqlType::Boolean => Some(1),
        SqlType::TinyInt | SqlType::SmallInt => Some(2),
        SqlType::Integer => Some(4),
        SqlType::BigInt => Some(8),
        SqlType::Real => Some(4),
        SqlType::Double => Some(8),
        SqlType::Uuid => Some(16),
        SqlType::Date => Some(4),
        SqlType::Time => Some(8),
        SqlType::Timestamp => Some(8),
        _ => None, // Variable size types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pg_type_names() {
        assert_eq!(sql_type_to_pg_type(SqlType::BigInt), "BIGINT");
        assert_eq!(sql_type_to_pg_type(SqlType::TinyInt), "SMALLINT");
        assert_eq!(sql_type_to_pg_type(SqlType::Binary), "BYTEA");
    }

    #[test]
    fn test_size_hints() {
        assert_eq!(pg_type_size_hint(SqlType::BigInt), Some(8));
        assert_eq!(pg_type_size_hint(SqlType::Varchar), None);
        assert_eq!(pg_type_size_hint(SqlType::Null), None);
    }
}
