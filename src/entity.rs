// Copyright 2025 Cowboy AI, LLC.

//! Entity identity types
//!
//! Entities are domain objects with identity that persists across mutations.
//! Their identifiers are value objects: immutable, compared by underlying
//! value, and validated at construction.

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed entity ID using phantom types for type safety
///
/// IDs are globally unique UUIDs. The phantom type parameter ensures that
/// IDs for different entity types cannot be mixed up at compile time.
///
/// # Examples
///
/// ```rust
/// use catalog_domain::EntityId;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Customer;
///
/// // Generate a fresh random ID
/// let id = EntityId::<Customer>::new();
///
/// // Or construct one from a caller-supplied string
/// let parsed = EntityId::<Customer>::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
///
/// // Malformed strings are rejected
/// assert!(EntityId::<Customer>::parse("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId<T> {
    id: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID (UUID v4)
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            _phantom: PhantomData,
        }
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Parse an entity ID from its string form
    ///
    /// Fails with [`DomainError::InvalidId`] when the string is not a
    /// well-formed UUID. The check is version-agnostic.
    pub fn parse(s: &str) -> DomainResult<Self> {
        let id = Uuid::parse_str(s).map_err(|_| DomainError::InvalidId(s.to_string()))?;
        Ok(Self::from_uuid(id))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EntityId<T>> for Uuid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

impl<T> From<&EntityId<T>> for Uuid {
    fn from(id: &EntityId<T>) -> Self {
        id.id
    }
}

/// Trait for domain entities with identity
///
/// Repositories are generic over this trait: it provides the key by which
/// records are stored and a type name for diagnostics in not-found errors.
pub trait DomainEntity: Sized + Send + Sync {
    /// The marker type for this entity
    type IdType;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::IdType>;

    /// Human-readable type name, used in error diagnostics
    fn entity_type() -> &'static str;
}
