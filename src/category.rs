// Copyright 2025 Cowboy AI, LLC.

//! Category aggregate
//!
//! A Category is the unit of validation and storage for the catalog: a name,
//! an optional description, an activation flag, and a creation timestamp,
//! all behind a validated identity.
//!
//! Validation runs at the boundaries that can introduce invalid state
//! (construction and mutations of validated fields). The activation flag is
//! structurally a boolean and cannot become invalid through `activate` /
//! `deactivate`, so those skip re-validation.

use crate::entity::{DomainEntity, EntityId};
use crate::errors::{DomainError, DomainResult};
use crate::validation::{EntityValidator, FieldRule, FieldRules};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker type for Category entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryMarker;

/// Identifier for Category aggregates
pub type CategoryId = EntityId<CategoryMarker>;

/// Category aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

/// Input for [`Category::create`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category name, required
    pub name: String,
    /// Optional description, defaults to none
    pub description: Option<String>,
    /// Activation flag, defaults to active when omitted
    pub is_active: Option<bool>,
}

impl CreateCategory {
    /// Create a command with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the activation flag
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Plain structural snapshot of a [`Category`] for transport or storage
///
/// The identifier is carried as its raw string form, decoupled from the
/// [`CategoryId`] wrapper type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    /// Identifier in raw string form
    pub category_id: String,
    /// Category name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Activation flag
    pub is_active: bool,
    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a category with a generated identifier and defaults applied
    ///
    /// Description defaults to none, the activation flag to `true`, and the
    /// creation timestamp to now. Fails with [`DomainError::Validation`]
    /// carrying the complete field-to-messages mapping when any rule is
    /// violated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_domain::{Category, CreateCategory};
    ///
    /// let category = Category::create(CreateCategory::new("Movie")).unwrap();
    /// assert_eq!(category.name(), "Movie");
    /// assert_eq!(category.description(), None);
    /// assert!(category.is_active());
    /// ```
    pub fn create(command: CreateCategory) -> DomainResult<Self> {
        let category = Self {
            id: CategoryId::new(),
            name: command.name,
            description: command.description,
            is_active: command.is_active.unwrap_or(true),
            created_at: Utc::now(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Create a category from a loosely-typed JSON object
    ///
    /// This is the deserialization-boundary path: the raw object is checked
    /// against the field rules first, so a caller handing over e.g. a null
    /// name gets every violation reported at once rather than a decode
    /// error on the first bad field.
    pub fn create_from_value(input: Value) -> DomainResult<Self> {
        Self::validator()
            .validate(&input)
            .map_err(DomainError::Validation)?;
        let command: CreateCategory = serde_json::from_value(input)?;
        Self::create(command)
    }

    /// Change the name, then re-validate the whole entity
    pub fn change_name(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        self.name = new_name.into();
        self.validate()
    }

    /// Change the description, then re-validate the whole entity
    pub fn change_description(&mut self, new_description: Option<String>) -> DomainResult<()> {
        self.description = new_description;
        self.validate()
    }

    /// Mark the category active; idempotent, never fails validation
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Mark the category inactive; idempotent, never fails validation
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the category is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the category was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Produce a structural snapshot for transport or storage
    pub fn snapshot(&self) -> CategorySnapshot {
        CategorySnapshot {
            category_id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    /// Reconstruct a category from a snapshot
    ///
    /// The identifier string and the field rules are both re-checked, so a
    /// snapshot tampered with in storage cannot smuggle invalid state back
    /// into the domain.
    pub fn from_snapshot(snapshot: CategorySnapshot) -> DomainResult<Self> {
        let category = Self {
            id: CategoryId::parse(&snapshot.category_id)?,
            name: snapshot.name,
            description: snapshot.description,
            is_active: snapshot.is_active,
            created_at: snapshot.created_at,
        };
        category.validate()?;
        Ok(category)
    }

    /// The rule set for Category fields
    fn validator() -> EntityValidator {
        EntityValidator::new()
            .field(
                FieldRules::required("name")
                    .rule(FieldRule::NotEmpty)
                    .rule(FieldRule::IsString)
                    .rule(FieldRule::MaxLength(255)),
            )
            .field(FieldRules::optional("description").rule(FieldRule::IsString))
            .field(FieldRules::optional("is_active").rule(FieldRule::IsBoolean))
    }

    /// Re-check all field rules against the entity's current state
    fn validate(&self) -> DomainResult<()> {
        let value = serde_json::to_value(self.snapshot())?;
        Self::validator()
            .validate(&value)
            .map_err(DomainError::Validation)
    }
}

impl DomainEntity for Category {
    type IdType = CategoryMarker;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn entity_type() -> &'static str {
        "Category"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_create_with_default_values() {
        let start = Utc::now();
        let category = Category::create(CreateCategory::new("Movie")).unwrap();

        assert!(!category.id().as_uuid().is_nil());
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert!(category.created_at() >= start);
    }

    #[test]
    fn test_create_with_description() {
        let category = Category::create(
            CreateCategory::new("Series").description("Series description"),
        )
        .unwrap();

        assert_eq!(category.name(), "Series");
        assert_eq!(category.description(), Some("Series description"));
        assert!(category.is_active());
    }

    #[test]
    fn test_create_inactive() {
        let category = Category::create(CreateCategory::new("Series").active(false)).unwrap();

        assert_eq!(category.name(), "Series");
        assert_eq!(category.description(), None);
        assert!(!category.is_active());
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let first = Category::create(CreateCategory::new("Movie")).unwrap();
        let second = Category::create(CreateCategory::new("Movie")).unwrap();

        assert_ne!(first.id(), second.id());
    }

    #[test_case("" => vec!["name should not be empty".to_string()]; "empty name")]
    #[test_case("a".repeat(256).as_str()
        => vec!["name must be shorter than or equal to 255 characters".to_string()];
        "name longer than 255 characters")]
    fn test_create_with_invalid_name(name: &str) -> Vec<String> {
        let err = Category::create(CreateCategory::new(name)).unwrap_err();

        let errors = err.fields_errors().expect("expected a validation error");
        assert_eq!(errors.count(), 1);
        errors.messages("name").unwrap().to_vec()
    }

    #[test]
    fn test_create_from_value_with_null_name() {
        let err = Category::create_from_value(json!({ "name": null })).unwrap_err();

        let errors = err.fields_errors().expect("expected a validation error");
        assert_eq!(
            errors.messages("name").unwrap(),
            [
                "name should not be empty",
                "name must be a string",
                "name must be shorter than or equal to 255 characters",
            ]
        );
    }

    #[test]
    fn test_create_from_value_with_non_string_description() {
        let err =
            Category::create_from_value(json!({ "name": "Movie", "description": 5 })).unwrap_err();

        let errors = err.fields_errors().expect("expected a validation error");
        assert_eq!(errors.count(), 1);
        assert_eq!(
            errors.messages("description").unwrap(),
            ["description must be a string"]
        );
    }

    #[test]
    fn test_create_from_value_with_valid_object() {
        let category = Category::create_from_value(json!({
            "name": "Series",
            "description": "Series description",
            "is_active": false,
        }))
        .unwrap();

        assert_eq!(category.name(), "Series");
        assert_eq!(category.description(), Some("Series description"));
        assert!(!category.is_active());
    }

    #[test]
    fn test_change_name() {
        let mut category = Category::create(CreateCategory::new("Movie")).unwrap();

        category.change_name("Series").unwrap();
        assert_eq!(category.name(), "Series");
    }

    #[test]
    fn test_change_name_rejects_empty() {
        let mut category = Category::create(CreateCategory::new("Movie")).unwrap();

        let err = category.change_name("").unwrap_err();
        let errors = err.fields_errors().expect("expected a validation error");
        assert_eq!(errors.messages("name").unwrap(), ["name should not be empty"]);
    }

    #[test]
    fn test_change_description() {
        let mut category = Category::create(CreateCategory::new("Movie")).unwrap();

        category
            .change_description(Some("Movie description".to_string()))
            .unwrap();
        assert_eq!(category.description(), Some("Movie description"));

        category.change_description(None).unwrap();
        assert_eq!(category.description(), None);
    }

    #[test]
    fn test_activate_and_deactivate_are_idempotent() {
        let mut category = Category::create(CreateCategory::new("Movie").active(false)).unwrap();

        category.activate();
        assert!(category.is_active());
        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());
        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn test_snapshot_exposes_raw_id_string() {
        let category = Category::create(
            CreateCategory::new("Movie").description("Movie description"),
        )
        .unwrap();
        let snapshot = category.snapshot();

        assert_eq!(snapshot.category_id, category.id().to_string());
        assert_eq!(snapshot.name, "Movie");
        assert_eq!(snapshot.description.as_deref(), Some("Movie description"));
        assert!(snapshot.is_active);
        assert_eq!(snapshot.created_at, category.created_at());
    }

    #[test]
    fn test_from_snapshot_rejects_malformed_id() {
        let category = Category::create(CreateCategory::new("Movie")).unwrap();
        let mut snapshot = category.snapshot();
        snapshot.category_id = "not-a-uuid".to_string();

        let err = Category::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn test_from_snapshot_rejects_invalid_fields() {
        let category = Category::create(CreateCategory::new("Movie")).unwrap();
        let mut snapshot = category.snapshot();
        snapshot.name = String::new();

        let err = Category::from_snapshot(snapshot).unwrap_err();
        assert!(err.is_validation());
    }

    proptest! {
        /// Snapshot round-trip reproduces every field value
        #[test]
        fn prop_snapshot_round_trip(
            name in "[a-zA-Z0-9 ]{1,255}",
            description in proptest::option::of("[a-zA-Z0-9 ]{0,100}"),
            is_active in any::<bool>(),
        ) {
            let mut command = CreateCategory::new(name).active(is_active);
            command.description = description;

            let category = Category::create(command).unwrap();
            let restored = Category::from_snapshot(category.snapshot()).unwrap();

            prop_assert_eq!(restored, category);
        }
    }
}
