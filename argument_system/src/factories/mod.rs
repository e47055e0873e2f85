//! Argument factories
//!
//! Each factory claims a family of types and turns matching values into
//! arguments. The chain returned by [`default_chain`] is offered every
//! value before the builder registry is consulted; its order is a priority
//! list and must not change between releases.

mod boxed;
mod enums;
mod essentials;
mod internet;
mod optionals;
mod primitives;
mod sql;
mod untyped_null;

pub use boxed::BoxedArgumentFactory;
pub use enums::EnumArgumentFactory;
pub use essentials::EssentialsArgumentFactory;
pub use internet::InternetArgumentFactory;
pub use optionals::OptionalArgumentFactory;
pub use primitives::PrimitivesArgumentFactory;
pub use sql::SqlArgumentFactory;
pub use untyped_null::UntypedNullArgumentFactory;

use config::BindingConfig;
use type_mapping::{Bindable, TypeToken};

use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Resolver for one family of host types.
///
/// `Ok(None)` passes the value on to the next resolver; an error aborts
/// resolution altogether.
pub trait ArgumentFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError>;
}

/// The built-in factory chain, in priority order
pub fn default_chain() -> Vec<Box<dyn ArgumentFactory>> {
    vec![
        Box::new(PrimitivesArgumentFactory),
        Box::new(BoxedArgumentFactory),
        Box::new(EssentialsArgumentFactory),
        Box::new(SqlArgumentFactory),
        Box::new(InternetArgumentFactory),
    ]
}

/// Downcast a value to the type its descriptor promised
pub(crate) fn downcast<'a, T: 'static>(
    expected: &TypeToken,
    value: &'a dyn Bindable,
) -> Result<&'a T, ArgumentError> {
    value
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| ArgumentError::unsupported(expected, Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let names: Vec<_> = default_chain().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["primitives", "boxed", "essentials", "sql", "internet"]
        );
    }
}
