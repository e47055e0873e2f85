use config::BindingConfig;
use rust_decimal::Decimal;
use type_mapping::{Bindable, SqlType, SqlValue, TypeToken};
use uuid::Uuid;

use super::{downcast, ArgumentFactory};
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Text, binary, decimal and UUID values
#[derive(Debug, Default, Clone, Copy)]
pub struct EssentialsArgumentFactory;

fn essential_sql_type(token: &TypeToken) -> Option<SqlType> {
    if token.is::<String>() || token.is::<&'static str>() {
        Some(SqlType::Varchar)
    } else if token.is::<Vec<u8>>() {
        Some(SqlType::Binary)
    } else if token.is::<Decimal>() {
        Some(SqlType::Numeric)
    } else if token.is::<Uuid>() {
        Some(SqlType::Uuid)
    } else {
        None
    }
}

fn essential_value(expected: &TypeToken, value: &dyn Bindable) -> Result<SqlValue, ArgumentError> {
    let converted = if expected.is::<String>() {
        SqlValue::Text(downcast::<String>(expected, value)?.clone())
    } else if expected.is::<&'static str>() {
        SqlValue::Text(downcast::<&'static str>(expected, value)?.to_string())
    } else if expected.is::<Vec<u8>>() {
        SqlValue::Bytes(downcast::<Vec<u8>>(expected, value)?.clone())
    } else if expected.is::<Decimal>() {
        SqlValue::Decimal(*downcast::<Decimal>(expected, value)?)
    } else {
        SqlValue::Uuid(*downcast::<Uuid>(expected, value)?)
    };
    Ok(converted)
}

impl ArgumentFactory for EssentialsArgumentFactory {
    fn name(&self) -> &'static str {
        "essentials"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        _config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        let Some(sql_type) = essential_sql_type(expected) else {
            return Ok(None);
        };
        let argument = match value {
            Some(v) => Argument::new(sql_type, essential_value(expected, v)?),
            None => Argument::null(sql_type),
        };
        Ok(Some(argument))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(expected: TypeToken, value: Option<&dyn Bindable>) -> Option<Argument> {
        EssentialsArgumentFactory
            .build(&expected, value, &BindingConfig::default())
            .unwrap()
    }

    #[test]
    fn test_strings() {
        let owned = String::from("hello");
        let arg = build(TypeToken::of::<String>(), Some(&owned)).unwrap();
        assert_eq!(arg, Argument::new(SqlType::Varchar, SqlValue::Text("hello".into())));
        let arg = build(TypeToken::of::<&'static str>(), Some(&"hi")).unwrap();
        assert_eq!(arg.value(), &SqlValue::Text("hi".into()));
    }

    #[test]
    fn test_bytes_decimal_uuid() {
        let bytes = vec![1u8, 2, 3];
        let arg = build(TypeToken::of::<Vec<u8>>(), Some(&bytes)).unwrap();
        assert_eq!(arg, Argument::new(SqlType::Binary, SqlValue::Bytes(bytes.clone())));

        let amount = Decimal::new(12345, 2);
        let arg = build(TypeToken::of::<Decimal>(), Some(&amount)).unwrap();
        assert_eq!(arg.value(), &SqlValue::Decimal(amount));

        let id = Uuid::nil();
        let arg = build(TypeToken::of::<Uuid>(), Some(&id)).unwrap();
        assert_eq!(arg, Argument::new(SqlType::Uuid, SqlValue::Uuid(id)));
    }

    #[test]
    fn test_typed_null() {
        let arg = build(TypeToken::of::<String>(), None).unwrap();
        assert_eq!(arg, Argument::null(SqlType::Varchar));
    }

    #[test]
    fn test_other_types_pass() {
        assert_eq!(build(TypeToken::of::<i64>(), Some(&1i64)), None);
    }
}
