use config::BindingConfig;
use type_mapping::{Bindable, TypeToken};

use super::ArgumentFactory;
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Last resort: a null with no usable type information.
///
/// Anything that still carries a value at this point has no conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct UntypedNullArgumentFactory;

impl ArgumentFactory for UntypedNullArgumentFactory {
    fn name(&self) -> &'static str {
        "untyped_null"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        match value {
            None => Ok(Some(Argument::null(config.untyped_null_type))),
            Some(_) => Err(ArgumentError::unsupported(expected, value)),
        }
    }
}
