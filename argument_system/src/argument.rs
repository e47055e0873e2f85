//! Resolved statement arguments
//!
//! An [`Argument`] pairs a wire type tag with an already converted value.
//! Applying it writes the value, or a typed null, at one parameter index.

use std::fmt;

use type_mapping::{sql_type_to_pg_type, SqlType, SqlValue};

use crate::errors::ArgumentError;

/// Outbound call accepting positional parameters (1-based)
pub trait CallHandle {
    fn set_value(
        &mut self,
        index: usize,
        sql_type: SqlType,
        value: &SqlValue,
    ) -> Result<(), ArgumentError>;

    fn set_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), ArgumentError>;
}

/// A single statement argument ready to be written onto a call
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    sql_type: SqlType,
    value: SqlValue,
}

impl Argument {
    pub fn new(sql_type: SqlType, value: SqlValue) -> Self {
        Self { sql_type, value }
    }

    /// Argument writing a null of the given wire type
    pub fn null(sql_type: SqlType) -> Self {
        Self {
            sql_type,
            value: SqlValue::Null,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn value(&self) -> &SqlValue {
        &self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Write this argument at `index` of the call
    pub fn apply(&self, handle: &mut dyn CallHandle, index: usize) -> Result<(), ArgumentError> {
        if self.value.is_null() {
            handle.set_null(index, self.sql_type)
        } else {
            handle.set_value(index, self.sql_type, &self.value)
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", sql_type_to_pg_type(self.sql_type), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(usize, SqlType, Option<SqlValue>)>,
    }

    impl CallHandle for Recorder {
        fn set_value(
            &mut self,
            index: usize,
            sql_type: SqlType,
            value: &SqlValue,
        ) -> Result<(), ArgumentError> {
            if let SqlValue::Text(s) = value {
                if s.is_empty() {
                    return Err(ArgumentError::rejected(index, "empty text"));
                }
            }
            self.calls.push((index, sql_type, Some(value.clone())));
            Ok(())
        }

        fn set_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), ArgumentError> {
            self.calls.push((index, sql_type, None));
            Ok(())
        }
    }

    #[test]
    fn test_apply_writes_value_at_index() {
        let mut recorder = Recorder::default();
        Argument::new(SqlType::BigInt, SqlValue::BigInt(42))
            .apply(&mut recorder, 3)
            .unwrap();
        assert_eq!(
            recorder.calls,
            vec![(3, SqlType::BigInt, Some(SqlValue::BigInt(42)))]
        );
    }

    #[test]
    fn test_apply_null_uses_set_null() {
        let mut recorder = Recorder::default();
        Argument::null(SqlType::Integer).apply(&mut recorder, 1).unwrap();
        assert_eq!(recorder.calls, vec![(1, SqlType::Integer, None)]);
    }

    #[test]
    fn test_rejection_is_surfaced_verbatim() {
        let mut recorder = Recorder::default();
        let err = Argument::new(SqlType::Varchar, SqlValue::Text(String::new()))
            .apply(&mut recorder, 2)
            .unwrap_err();
        assert_eq!(err, ArgumentError::rejected(2, "empty text"));
        assert_eq!(err.to_string(), "Binding rejected for parameter at 2: empty text");
    }

    #[test]
    fn test_display() {
        let arg = Argument::new(SqlType::BigInt, SqlValue::BigInt(7));
        assert_eq!(arg.to_string(), "BIGINT 7");
        assert_eq!(Argument::null(SqlType::Varchar).to_string(), "VARCHAR NULL");
    }
}
