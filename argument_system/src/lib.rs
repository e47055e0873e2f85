//! Argument system for statement parameter binding
//!
//! This crate resolves host values into [`Argument`]s, the single-use units
//! that write one value onto one parameter slot of an outbound call.
//!
//! Resolution order is fixed: the factory chain first, then the exact-type
//! builder registry, then enums, optionals and finally the untyped null.

pub mod argument;
pub mod builders;
pub mod errors;
pub mod factories;
pub mod prelude;
pub mod resolver;

// Re-export centralized config
pub use config::{BindingConfig, EnumStrategy};

pub use argument::{Argument, CallHandle};
pub use builders::{ArgBuilder, ArgumentBuilders};
pub use errors::ArgumentError;
pub use factories::{default_chain, ArgumentFactory};
pub use resolver::ArgumentResolver;
