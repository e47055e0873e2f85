//! Error types for argument resolution and binding
//!
//! This module defines the errors surfaced while turning host values
//! into arguments and while writing them onto a call.

use thiserror::Error;
use type_mapping::{Bindable, TypeToken};

/// Argument system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("No argument conversion for expected type {expected} and value of type {actual}")]
    UnsupportedConversion { expected: String, actual: String },

    #[error("Binding rejected for parameter at {index}: {reason}")]
    BindingRejected { index: usize, reason: String },
}

impl ArgumentError {
    pub fn unsupported(expected: &TypeToken, value: Option<&dyn Bindable>) -> Self {
        ArgumentError::UnsupportedConversion {
            expected: expected.name().to_string(),
            actual: value
                .map(|v| v.runtime_type().name().to_string())
                .unwrap_or_else(|| "null".to_string()),
        }
    }

    pub fn rejected(index: usize, reason: impl Into<String>) -> Self {
        ArgumentError::BindingRejected {
            index,
            reason: reason.into(),
        }
    }
}
