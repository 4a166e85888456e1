// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use crate::validation::FieldsErrors;
use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A caller-supplied identifier string is not a well-formed UUID
    #[error("ID must be a valid UUID: {0}")]
    InvalidId(String),

    /// One or more field rules were violated
    ///
    /// Carries the complete field-to-messages mapping so the caller can
    /// report every violation at once, not just the first.
    #[error("Validation error: {0}")]
    Validation(FieldsErrors),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound {
        /// Type of entity that wasn't found
        entity_type: String,
        /// ID that was searched for
        id: String,
    },

    /// An entity with the same identifier is already stored
    #[error("Entity already exists: {entity_type} with id {id}")]
    AlreadyExists {
        /// Type of the conflicting entity
        entity_type: String,
        /// Identifier already present in the record set
        id: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl DomainError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::EntityNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_) | DomainError::InvalidId(_)
        )
    }

    /// The field-to-messages mapping, when this is a validation error
    pub fn fields_errors(&self) -> Option<&FieldsErrors> {
        match self {
            DomainError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
