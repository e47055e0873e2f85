use config::BindingConfig;
use rust_decimal::Decimal;
use type_mapping::{Bindable, SqlType, SqlValue, TypeToken};

use super::{downcast, ArgumentFactory};
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Non-null scalars: booleans, integers, floats and `char`.
///
/// Unsigned integers widen to the next signed type that holds them; `u64`
/// goes to NUMERIC.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimitivesArgumentFactory;

/// Wire type of a primitive descriptor, `None` for anything else
pub(crate) fn primitive_sql_type(token: &TypeToken) -> Option<SqlType> {
    let sql_type = if token.is::<bool>() {
        SqlType::Boolean
    } else if token.is::<i8>() {
        SqlType::TinyInt
    } else if token.is::<i16>() || token.is::<u8>() {
        SqlType::SmallInt
    } else if token.is::<i32>() || token.is::<u16>() {
        SqlType::Integer
    } else if token.is::<i64>() || token.is::<u32>() {
        SqlType::BigInt
    } else if token.is::<u64>() {
        SqlType::Numeric
    } else if token.is::<f32>() {
        SqlType::Real
    } else if token.is::<f64>() {
        SqlType::Double
    } else if token.is::<char>() {
        SqlType::Char
    } else {
        return None;
    };
    Some(sql_type)
}

fn primitive_value(expected: &TypeToken, value: &dyn Bindable) -> Result<SqlValue, ArgumentError> {
    let converted = if expected.is::<bool>() {
        SqlValue::Boolean(*downcast::<bool>(expected, value)?)
    } else if expected.is::<i8>() {
        SqlValue::TinyInt(*downcast::<i8>(expected, value)?)
    } else if expected.is::<i16>() {
        SqlValue::SmallInt(*downcast::<i16>(expected, value)?)
    } else if expected.is::<u8>() {
        SqlValue::SmallInt(i16::from(*downcast::<u8>(expected, value)?))
    } else if expected.is::<i32>() {
        SqlValue::Integer(*downcast::<i32>(expected, value)?)
    } else if expected.is::<u16>() {
        SqlValue::Integer(i32::from(*downcast::<u16>(expected, value)?))
    } else if expected.is::<i64>() {
        SqlValue::BigInt(*downcast::<i64>(expected, value)?)
    } else if expected.is::<u32>() {
        SqlValue::BigInt(i64::from(*downcast::<u32>(expected, value)?))
    } else if expected.is::<u64>() {
        SqlValue::Decimal(Decimal::from(*downcast::<u64>(expected, value)?))
    } else if expected.is::<f32>() {
        SqlValue::Real(*downcast::<f32>(expected, value)?)
    } else if expected.is::<f64>() {
        SqlValue::Double(*downcast::<f64>(expected, value)?)
    } else {
        SqlValue::Text(downcast::<char>(expected, value)?.to_string())
    };
    Ok(converted)
}

impl ArgumentFactory for PrimitivesArgumentFactory {
    fn name(&self) -> &'static str {
        "primitives"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        _config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        let (Some(sql_type), Some(value)) = (primitive_sql_type(expected), value) else {
            return Ok(None);
        };
        let converted = primitive_value(expected, value)?;
        Ok(Some(Argument::new(sql_type, converted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(expected: TypeToken, value: &dyn Bindable) -> Result<Option<Argument>, ArgumentError> {
        PrimitivesArgumentFactory.build(&expected, Some(value), &BindingConfig::default())
    }

    #[test]
    fn test_signed_integers_keep_width() {
        let arg = build(TypeToken::of::<i64>(), &42i64).unwrap().unwrap();
        assert_eq!(arg, Argument::new(SqlType::BigInt, SqlValue::BigInt(42)));
        let arg = build(TypeToken::of::<i16>(), &-3i16).unwrap().unwrap();
        assert_eq!(arg.value(), &SqlValue::SmallInt(-3));
    }

    #[test]
    fn test_unsigned_integers_widen() {
        let arg = build(TypeToken::of::<u32>(), &u32::MAX).unwrap().unwrap();
        assert_eq!(arg, Argument::new(SqlType::BigInt, SqlValue::BigInt(4_294_967_295)));
        let arg = build(TypeToken::of::<u64>(), &u64::MAX).unwrap().unwrap();
        assert_eq!(arg.sql_type(), SqlType::Numeric);
        assert_eq!(arg.value(), &SqlValue::Decimal(Decimal::from(u64::MAX)));
    }

    #[test]
    fn test_char_binds_as_text() {
        let arg = build(TypeToken::of::<char>(), &'x').unwrap().unwrap();
        assert_eq!(arg, Argument::new(SqlType::Char, SqlValue::Text("x".into())));
    }

    #[test]
    fn test_declared_type_must_match_value() {
        let err = build(TypeToken::of::<i64>(), &42i32).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::UnsupportedConversion {
                expected: "i64".into(),
                actual: "i32".into()
            }
        );
    }

    #[test]
    fn test_null_and_non_primitives_pass() {
        let config = BindingConfig::default();
        let expected = TypeToken::of::<i32>();
        assert_eq!(PrimitivesArgumentFactory.build(&expected, None, &config), Ok(None));
        assert_eq!(build(TypeToken::of::<String>(), &String::new()), Ok(None));
    }
}
