//! Convenience re-exports for common call-system usage

// Core call system components
pub use crate::errors::{CallError, OutParameterError};
pub use crate::executor::{collect_out_parameters, execute_call};
pub use crate::out_parameters::{FromSqlValue, OutParameters, ParamKey};
pub use crate::parameters::CallParameters;

// Common external dependencies
pub use sqlx;
pub use type_mapping::{SqlDate, SqlTimestamp, SqlType, SqlValue};
