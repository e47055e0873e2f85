//! Root argument resolver
//!
//! Orchestrates the factory chain and the builder registry. The order is:
//!
//! 1. an open or matching expected type is replaced by the runtime type of a
//!    present value
//! 2. the factory chain, first match wins
//! 3. the exact-type builder registry
//! 4. enumerations (after the registry so a concrete registration always wins)
//! 5. optionals, recursing on the contained type
//! 6. untyped null, or [`ArgumentError::UnsupportedConversion`]

use std::fmt;
use std::sync::OnceLock;

use config::BindingConfig;
use type_mapping::{Bindable, TypeToken};

use crate::argument::Argument;
use crate::builders::ArgumentBuilders;
use crate::errors::ArgumentError;
use crate::factories::{
    default_chain, ArgumentFactory, EnumArgumentFactory, OptionalArgumentFactory,
    UntypedNullArgumentFactory,
};

static GLOBAL: OnceLock<ArgumentResolver> = OnceLock::new();

/// Resolves host values into statement arguments
pub struct ArgumentResolver {
    chain: Vec<Box<dyn ArgumentFactory>>,
    builders: ArgumentBuilders,
    enums: EnumArgumentFactory,
    optionals: OptionalArgumentFactory,
    untyped_null: UntypedNullArgumentFactory,
}

impl fmt::Debug for ArgumentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<&str> = self.chain.iter().map(|factory| factory.name()).collect();
        f.debug_struct("ArgumentResolver")
            .field("chain", &chain)
            .field("builders", &self.builders.len())
            .finish()
    }
}

impl Default for ArgumentResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentResolver {
    /// Resolver with the built-in chain and registry
    pub fn new() -> Self {
        Self::from_parts(default_chain(), ArgumentBuilders::builtin())
    }

    /// Resolver with a custom chain and registry; both are frozen from here on
    pub fn from_parts(chain: Vec<Box<dyn ArgumentFactory>>, builders: ArgumentBuilders) -> Self {
        Self {
            chain,
            builders,
            enums: EnumArgumentFactory,
            optionals: OptionalArgumentFactory,
            untyped_null: UntypedNullArgumentFactory,
        }
    }

    /// Process-wide built-in resolver, constructed on first use
    pub fn global() -> &'static ArgumentResolver {
        GLOBAL.get_or_init(ArgumentResolver::new)
    }

    pub fn builders(&self) -> &ArgumentBuilders {
        &self.builders
    }

    /// Resolve `value` declared as `expected` into an argument
    pub fn resolve(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        config: &BindingConfig,
    ) -> Result<Argument, ArgumentError> {
        // The runtime token carries the enum/optional kind a bare token lacks
        let expected = match value {
            Some(v) if expected.is_open() || v.runtime_type() == *expected => v.runtime_type(),
            _ => *expected,
        };

        for factory in &self.chain {
            if let Some(argument) = factory.build(&expected, value, config)? {
                tracing::trace!(factory = factory.name(), expected = %expected, "argument resolved");
                return Ok(argument);
            }
        }

        if let Some(builder) = self.builders.get(&expected) {
            tracing::trace!(expected = %expected, "argument resolved from registry");
            return builder.build(&expected, value);
        }

        if let Some(argument) = self.enums.build(&expected, value, config)? {
            tracing::trace!(factory = self.enums.name(), expected = %expected, "argument resolved");
            return Ok(argument);
        }

        if let Some(argument) = self.optionals.build(&expected, value, config, self)? {
            tracing::trace!(factory = self.optionals.name(), expected = %expected, "argument resolved");
            return Ok(argument);
        }

        let resolved = self.untyped_null.build(&expected, value, config);
        if let Err(err) = &resolved {
            tracing::debug!(error = %err, "no argument conversion");
        }
        resolved?.ok_or_else(|| ArgumentError::unsupported(&expected, value))
    }

    /// Resolve a value declared with its own static type
    pub fn resolve_value<T: Bindable>(
        &self,
        value: &T,
        config: &BindingConfig,
    ) -> Result<Argument, ArgumentError> {
        self.resolve(&T::type_token(), Some(value), config)
    }

    /// Resolve a list of values declared as open, in order
    pub fn resolve_all(
        &self,
        values: &[Option<&dyn Bindable>],
        config: &BindingConfig,
    ) -> Result<Vec<Argument>, ArgumentError> {
        let open = TypeToken::open();
        values
            .iter()
            .map(|value| self.resolve(&open, *value, config))
            .collect()
    }
}
