// ABOUTME: Unified error handling with standard error codes and response formatting
// ABOUTME: Defines AppError, ErrorCode, ErrorContext, the JSON error body and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every fallible operation in the workspace reports an [`AppError`]. Metric
//! derivation only ever produces [`ErrorCode::InvalidInput`]; the remaining
//! codes belong to the data-store boundary, configuration loading and the CLI.
//!
//! Errors carry an [`ErrorContext`] that callers enrich as the error travels
//! outward (the offending field, the record index) and render as an
//! [`ErrorResponse`] at the edge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Boxed source error kept for chaining
pub type BoxedSource = Box<dyn StdError + Send + Sync>;

/// Machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input value is non-positive, non-finite or otherwise unusable
    InvalidInput,
    /// Required field absent from a data-store record
    MissingRequiredField,
    /// Field present but not parseable (timestamps, numeric strings)
    InvalidFormat,
    /// Value outside the physiologically plausible range
    ValueOutOfRange,
    /// Configuration failed validation or could not be read
    ConfigInvalid,
    /// Serialization or deserialization failure
    SerializationError,
}

impl ErrorCode {
    /// Short user-facing description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::MissingRequiredField => "Missing required field",
            Self::InvalidFormat => "Invalid format",
            Self::ValueOutOfRange => "Value out of range",
            Self::ConfigInvalid => "Invalid configuration",
            Self::SerializationError => "Serialization failed",
        }
    }
}

/// Context accumulated while an error propagates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Offending field
    pub field: Option<String>,
    /// Free-form details; `Null` until something is attached
    pub details: Value,
}

impl ErrorContext {
    /// Merge `details` into the existing details
    ///
    /// Object keys are merged with the newer value winning; anything else
    /// replaces what was there.
    fn merge_details(&mut self, details: Value) {
        match (&mut self.details, details) {
            (Value::Object(existing), Value::Object(incoming)) => existing.extend(incoming),
            (slot, other) => *slot = other,
        }
    }
}

/// Error type shared by every crate in the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Classification
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Accumulated context
    pub context: ErrorContext,
    /// Underlying cause
    #[source]
    pub source: Option<BoxedSource>,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

// Constructors
impl AppError {
    /// Error with an empty context
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Unusable input value
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing from a record
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
        .with_field(field)
    }

    /// Field present but unparseable
    pub fn invalid_format(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message).with_field(field)
    }

    /// Value outside the accepted range
    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_field(field)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

// Context builders
impl AppError {
    /// Name the offending field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Merge extra details into the context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.merge_details(details);
        self
    }

    /// Keep the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let mut details = Map::new();
        details.insert("line".into(), Value::from(error.line()));
        details.insert("column".into(), Value::from(error.column()));
        Self::new(ErrorCode::SerializationError, error.to_string())
            .with_details(Value::Object(details))
            .with_source(error)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body: `{ "error": { "code": ..., "message": ..., ... } }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorBody,
}

/// Payload inside [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending field when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Extra details when any were attached
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let AppError {
            code,
            message,
            context,
            ..
        } = error;
        Self {
            error: ErrorBody {
                code,
                message,
                field: context.field,
                details: context.details,
            },
        }
    }
}
