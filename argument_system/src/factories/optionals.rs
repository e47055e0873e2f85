use config::BindingConfig;
use type_mapping::{Bindable, TypeToken};

use crate::argument::Argument;
use crate::errors::ArgumentError;
use crate::resolver::ArgumentResolver;

/// `Option<T>` values: the contents are resolved as `T`, an empty option
/// as a null of `T`.
///
/// Unlike the other factories this one recurses into the root resolver, so
/// it is not part of the plain [`ArgumentFactory`](super::ArgumentFactory) chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionalArgumentFactory;

impl OptionalArgumentFactory {
    pub fn name(&self) -> &'static str {
        "optionals"
    }

    pub fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        config: &BindingConfig,
        resolver: &ArgumentResolver,
    ) -> Result<Option<Argument>, ArgumentError> {
        let Some(inner) = expected.optional_inner() else {
            return Ok(None);
        };

        let contained = match value {
            None => None,
            Some(v) => match v.as_optional() {
                Some(contents) => contents,
                // A bare value declared as Option<T> is resolved as T
                None => Some(v),
            },
        };

        resolver.resolve(&inner, contained, config).map(Some)
    }
}
