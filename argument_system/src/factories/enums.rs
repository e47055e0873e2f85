use config::{BindingConfig, EnumStrategy};
use type_mapping::{Bindable, SqlType, SqlValue, TypeToken};

use super::ArgumentFactory;
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Enumerations, bound by variant name unless configured for ordinals
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumArgumentFactory;

impl ArgumentFactory for EnumArgumentFactory {
    fn name(&self) -> &'static str {
        "enums"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        if !expected.is_enum() {
            return Ok(None);
        }

        let sql_type = match config.enum_strategy {
            EnumStrategy::ByName => SqlType::Varchar,
            EnumStrategy::ByOrdinal => SqlType::Integer,
        };

        let Some(v) = value else {
            return Ok(Some(Argument::null(sql_type)));
        };
        let variant = v
            .as_sql_enum()
            .ok_or_else(|| ArgumentError::unsupported(expected, value))?;

        let converted = match config.enum_strategy {
            EnumStrategy::ByName => SqlValue::Text(variant.variant_name().to_string()),
            EnumStrategy::ByOrdinal => SqlValue::Integer(
                i32::try_from(variant.ordinal())
                    .map_err(|_| ArgumentError::unsupported(expected, value))?,
            ),
        };
        Ok(Some(Argument::new(sql_type, converted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use type_mapping::impl_sql_enum;

    #[derive(Debug, Clone, Copy)]
    enum Level {
        Low,
        High,
    }

    impl_sql_enum!(Level { Low, High });

    #[test]
    fn test_binds_variant_name() {
        let arg = EnumArgumentFactory
            .build(&Level::type_token(), Some(&Level::High), &BindingConfig::default())
            .unwrap();
        assert_eq!(arg, Some(Argument::new(SqlType::Varchar, SqlValue::Text("High".into()))));
    }

    #[test]
    fn test_binds_ordinal_when_configured() {
        let config = BindingConfig::default().with_enum_strategy(EnumStrategy::ByOrdinal);
        let arg = EnumArgumentFactory
            .build(&Level::type_token(), Some(&Level::High), &config)
            .unwrap();
        assert_eq!(arg, Some(Argument::new(SqlType::Integer, SqlValue::Integer(1))));
        let arg = EnumArgumentFactory
            .build(&Level::type_token(), Some(&Level::Low), &config)
            .unwrap();
        assert_eq!(arg.unwrap().value(), &SqlValue::Integer(0));
    }

    #[test]
    fn test_null_enum() {
        let arg = EnumArgumentFactory
            .build(&Level::type_token(), None, &BindingConfig::default())
            .unwrap();
        assert_eq!(arg, Some(Argument::null(SqlType::Varchar)));
    }

    #[test]
    fn test_non_enum_descriptor_passes() {
        let arg = EnumArgumentFactory
            .build(&TypeToken::of::<i32>(), Some(&1i32), &BindingConfig::default())
            .unwrap();
        assert_eq!(arg, None);
    }
}
