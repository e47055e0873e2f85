//! Error types for the ParamHaus crate
//!
//! This module contains all error types that can be returned by ParamHaus operations.

use argument_system::ArgumentError;
use call_system::{CallError, OutParameterError};
use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Output parameter error: {0}")]
    OutParameter(#[from] OutParameterError),

    #[error("Call error: {0}")]
    Call(#[from] CallError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
