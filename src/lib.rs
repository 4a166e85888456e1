// Copyright 2025 Cowboy AI, LLC.

//! # Catalog Domain
//!
//! Core Domain-Driven Design (DDD) building blocks for a media catalog,
//! centered on the Category aggregate.
//!
//! This crate provides the entity + validation + repository triad:
//! - **Entity identity**: phantom-typed UUID identifiers, validated at
//!   construction ([`EntityId`])
//! - **Validation**: pure field rules that collect every violation in one
//!   pass ([`EntityValidator`], [`FieldsErrors`])
//! - **Aggregate**: the [`Category`] entity with lifecycle operations that
//!   re-validate at mutation boundaries
//! - **Repositories**: an async CRUD contract keyed by identifier
//!   ([`Repository`]) with an ordered in-memory reference implementation
//!   ([`InMemoryRepository`])
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: phantom types keep identifiers of different entities
//!    apart at compile time
//! 2. **Identity**: entities have globally unique, persistent identities
//! 3. **Explicit Validation**: rules run imperatively at construction and
//!    validated mutations, and report all violations at once
//! 4. **Absence Is Not Failure**: lookups return options; only mutating
//!    operations raise not-found errors
//!
//! ## Example
//!
//! ```rust
//! use catalog_domain::{
//!     Category, CreateCategory, DomainEntity, InMemoryRepository, Repository,
//! };
//!
//! # tokio_test::block_on(async {
//! let repo = InMemoryRepository::new();
//!
//! let mut category = Category::create(CreateCategory::new("Movie")).unwrap();
//! repo.insert(category.clone()).await.unwrap();
//!
//! category.change_name("Series").unwrap();
//! repo.update(category.clone()).await.unwrap();
//!
//! let stored = repo.find_by_id(&category.id()).await.unwrap();
//! assert_eq!(stored.unwrap().name(), "Series");
//! # });
//! ```

#![warn(missing_docs)]

mod category;
mod entity;
mod errors;
mod repository;
mod validation;

pub use category::{Category, CategoryId, CategoryMarker, CategorySnapshot, CreateCategory};
pub use entity::{DomainEntity, EntityId};
pub use errors::{DomainError, DomainResult};
pub use repository::{InMemoryRepository, Repository};
pub use validation::{EntityValidator, FieldRule, FieldRules, FieldsErrors};
