//! Call system for stored-procedure style calls
//!
//! This crate collects positional parameters for an outbound call, runs it
//! through sqlx and exposes the returned output values through
//! [`OutParameters`] with typed, coercing accessors.

pub mod errors;
pub mod executor;
pub mod number;
pub mod out_parameters;
pub mod parameters;
pub mod prelude;

pub use errors::{CallError, OutParameterError};
pub use executor::{collect_out_parameters, execute_call};
pub use number::Number;
pub use out_parameters::{FromSqlValue, OutParameters, ParamKey};
pub use parameters::CallParameters;
