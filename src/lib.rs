//! # ParamHaus
//!
//! Type resolution and value conversion for PostgreSQL calls: host values are
//! resolved into typed statement arguments, and the values a call returns are
//! read back through coercing output parameter accessors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paramhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "paramhaus".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let haus = ParamHaus::new(config, BindingConfig::default()).await?;
//!
//!     let amount: i64 = 4_815_162_342;
//!     let note: Option<String> = None;
//!     let values: [Option<&dyn Bindable>; 2] = [Some(&amount), Some(&note)];
//!     let out = haus
//!         .call("SELECT $1::bigint AS \"ALong\", $2::text AS note", &values)
//!         .await?;
//!
//!     println!("ALong = {}", out.get_long("ALong")?);
//!     println!("as int = {}", out.get_int(1)?);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::ParamHaus;
pub use errors::ParamHausError;

// Re-export centralized config
pub use config::{AppConfig, BindingConfig, DatabaseConfig, EnumStrategy};

// Re-export internal crates used by macros and public API
// These MUST be public for the exported macros to resolve in callers
pub use argument_system;
pub use call_system;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
