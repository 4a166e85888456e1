// Copyright 2025 Cowboy AI, LLC.

//! Repository contract and in-memory reference implementation
//!
//! The contract is async so that implementations backed by real storage can
//! slot in behind the same trait; the in-memory implementation completes
//! every operation without blocking and exists as the reference behavior
//! and test double for persistence abstractions.

use crate::entity::{DomainEntity, EntityId};
use crate::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, trace};

/// CRUD contract over entities keyed by identifier
///
/// `find_by_id` never fails on absence: looking something up and expecting
/// to mutate it are different intents, so only [`Repository::update`] and
/// [`Repository::delete`] raise [`DomainError::EntityNotFound`].
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: DomainEntity,
    E::IdType: Send + Sync,
{
    /// Store a new entity
    async fn insert(&self, entity: E) -> DomainResult<()>;

    /// Store a sequence of entities, all-or-nothing
    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()>;

    /// Look up an entity; absence is a normal return, not an error
    async fn find_by_id(&self, id: &EntityId<E::IdType>) -> DomainResult<Option<E>>;

    /// All stored entities, in insertion order
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Replace the stored entity with the same identifier
    async fn update(&self, entity: E) -> DomainResult<()>;

    /// Remove the entity with this identifier
    async fn delete(&self, id: &EntityId<E::IdType>) -> DomainResult<()>;
}

fn not_found<E: DomainEntity>(id: &EntityId<E::IdType>) -> DomainError {
    DomainError::EntityNotFound {
        entity_type: E::entity_type().to_string(),
        id: id.to_string(),
    }
}

fn already_exists<E: DomainEntity>(id: &EntityId<E::IdType>) -> DomainError {
    DomainError::AlreadyExists {
        entity_type: E::entity_type().to_string(),
        id: id.to_string(),
    }
}

/// In-memory repository used as reference implementation and test double
///
/// Keeps an ordered record set, unique by identifier. Cloning the
/// repository shares the underlying store.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Arc<RwLock<Vec<E>>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryRepository<E> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored entities
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// True when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: DomainEntity + Clone + Send + Sync,
    E::IdType: PartialEq + Send + Sync,
{
    async fn insert(&self, entity: E) -> DomainResult<()> {
        let mut items = self.items.write().await;
        let id = entity.id();
        if items.iter().any(|stored| stored.id() == id) {
            return Err(already_exists::<E>(&id));
        }
        items.push(entity);
        debug!(entity_type = E::entity_type(), %id, "inserted entity");
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        let mut items = self.items.write().await;
        // Check the whole batch before touching the record set, so a
        // conflict partway through leaves no partial state.
        for (index, entity) in entities.iter().enumerate() {
            let id = entity.id();
            let conflict = items.iter().any(|stored| stored.id() == id)
                || entities[..index].iter().any(|earlier| earlier.id() == id);
            if conflict {
                return Err(already_exists::<E>(&id));
            }
        }
        let count = entities.len();
        items.extend(entities);
        debug!(entity_type = E::entity_type(), count, "bulk inserted entities");
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId<E::IdType>) -> DomainResult<Option<E>> {
        let items = self.items.read().await;
        let found = items.iter().find(|stored| stored.id() == *id).cloned();
        trace!(
            entity_type = E::entity_type(),
            %id,
            found = found.is_some(),
            "looked up entity"
        );
        Ok(found)
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        let mut items = self.items.write().await;
        let id = entity.id();
        let position = items
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or_else(|| not_found::<E>(&id))?;
        items[position] = entity;
        debug!(entity_type = E::entity_type(), %id, "updated entity");
        Ok(())
    }

    async fn delete(&self, id: &EntityId<E::IdType>) -> DomainResult<()> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|stored| stored.id() == *id)
            .ok_or_else(|| not_found::<E>(id))?;
        items.remove(position);
        debug!(entity_type = E::entity_type(), %id, "deleted entity");
        Ok(())
    }
}
