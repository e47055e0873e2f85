use config::BindingConfig;
use type_mapping::{Bindable, TypeToken};

use super::primitives::primitive_sql_type;
use super::ArgumentFactory;
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Nulls declared with a primitive type, bound as a typed null
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxedArgumentFactory;

impl ArgumentFactory for BoxedArgumentFactory {
    fn name(&self) -> &'static str {
        "boxed"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        _config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        if value.is_some() {
            return Ok(None);
        }
        Ok(primitive_sql_type(expected).map(Argument::null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use type_mapping::SqlType;

    #[test]
    fn test_typed_null_for_primitive() {
        let arg = BoxedArgumentFactory
            .build(&TypeToken::of::<f64>(), None, &BindingConfig::default())
            .unwrap();
        assert_eq!(arg, Some(Argument::null(SqlType::Double)));
    }

    #[test]
    fn test_present_values_pass() {
        let arg = BoxedArgumentFactory
            .build(&TypeToken::of::<i32>(), Some(&1i32), &BindingConfig::default())
            .unwrap();
        assert_eq!(arg, None);
    }
}
