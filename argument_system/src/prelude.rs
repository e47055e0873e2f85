//! Convenience re-exports for common argument-system usage

// Core argument system components
pub use crate::argument::{Argument, CallHandle};
pub use crate::builders::ArgumentBuilders;
pub use crate::errors::ArgumentError;
pub use crate::factories::ArgumentFactory;
pub use crate::resolver::ArgumentResolver;

// Re-export centralized config
pub use config::{BindingConfig, EnumStrategy};

// Type vocabulary
pub use type_mapping::{impl_sql_enum, Bindable, SqlEnum, SqlType, SqlValue, TypeToken};
