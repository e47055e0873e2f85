//! Unified type mapping between Rust host values and SQL wire values
//! This crate provides the type vocabulary shared across the paramhaus ecosystem

pub mod bindable;
pub mod sql;
pub mod temporal;
pub mod token;
pub mod types;

pub use bindable::{Bindable, SqlEnum};
pub use sql::{pg_type_size_hint, sql_type_to_pg_type};
pub use temporal::{SqlDate, SqlTimestamp};
pub use token::{TypeKind, TypeToken};
pub use types::{SqlType, SqlValue};

// Re-exported so the exported macros resolve without extra dependencies in callers
pub use rust_decimal::Decimal;
