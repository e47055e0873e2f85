//! Convenience re-exports for common ParamHaus usage
//!
//! This prelude module re-exports the most commonly used items from the ParamHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use paramhaus::prelude::*;
//!
//! let arg = ArgumentResolver::global()
//!     .resolve_value(&42i64, &BindingConfig::default())
//!     .unwrap();
//! assert_eq!(arg.sql_type(), SqlType::BigInt);
//! ```

// Core ParamHaus components
pub use crate::core::ParamHaus;
pub use crate::errors::ParamHausError;

// Re-export centralized config
pub use config::{AppConfig, BindingConfig, ConfigError, DatabaseConfig, EnumStrategy};

// Argument resolution
pub use argument_system::prelude::*;

// Call execution and output parameters
pub use call_system::prelude::*;

// Common external dependencies
pub use anyhow;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{PgPool, Postgres, Row};
