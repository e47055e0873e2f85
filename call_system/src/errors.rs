//! Error types for call execution and output parameter access
//!
//! This module defines all error types that can occur while running
//! a call and while reading its output values.

use argument_system::ArgumentError;
use thiserror::Error;

use crate::out_parameters::ParamKey;

/// Output parameter access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutParameterError {
    #[error("Parameter {0} does not exist")]
    ParameterNotFound(ParamKey),

    #[error("Parameter {key} is not {expected} but {actual}")]
    TypeMismatch {
        key: ParamKey,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Call execution errors
#[derive(Error, Debug)]
pub enum CallError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Unsupported output column type {type_name} for parameter at {position}")]
    UnsupportedColumnType { position: usize, type_name: String },
}
