//! Error types for the kitchen planner library.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for all kitchen operations.
#[derive(Error, Debug)]
pub enum KitchenError {
    /// Transport or remote failure while reading the recipe collection
    #[error("Recipe store unavailable: {message}")]
    StoreUnavailable { message: String },
    /// No recipe exists with the given ID
    #[error("Recipe with ID '{id}' not found")]
    NotFound { id: String },
    /// A stored recipe document could not be decoded
    #[error("Recipe '{id}' has an unexpected shape: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    /// The generative service failed or replied with something unparsable
    #[error("Plan generation failed: {message}")]
    Generation { message: String },
    /// The user asked for something the current state does not allow
    #[error("Invalid request: {reason}")]
    Validation { reason: String },
    /// Missing credentials or unreadable configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl KitchenError {
    /// Creates a store error from a message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Creates a not-found error for a recipe ID.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a generation error from a message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a validation error from a reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true for failures caused by a missing record rather than by
    /// the transport.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extension trait mapping transport errors into store errors with context.
pub trait StoreResultExt<T> {
    /// Map any error into `StoreUnavailable`, prefixed with `context`.
    fn store_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

/// Extension trait mapping transport errors into generation errors with
/// context.
pub trait GenerationResultExt<T> {
    /// Map any error into `Generation`, prefixed with `context`.
    fn generation_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> StoreResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn store_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| KitchenError::store(format!("{context}: {e}")))
    }
}

impl<T, E> GenerationResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn generation_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| KitchenError::generation(format!("{context}: {e}")))
    }
}

/// Result type alias for kitchen operations
pub type Result<T> = std::result::Result<T, KitchenError>;
