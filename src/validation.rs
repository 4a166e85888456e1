// Copyright 2025 Cowboy AI, LLC.

//! Field validation for domain entities
//!
//! Validation is a pure function over a loosely-typed view of an entity:
//! a rule set is applied to a JSON object and either passes or produces a
//! [`FieldsErrors`] mapping listing every violation in one pass. Entities
//! invoke it at the boundaries that can introduce invalid state, i.e.
//! construction and mutations of validated fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Ordered mapping from field name to the violation messages for that field
///
/// Fields that pass validation produce no entry. Insertion order follows
/// rule declaration order, so error output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldsErrors(IndexMap<String, Vec<String>>);

impl FieldsErrors {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation message for a field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Number of distinct invalid fields
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// True when no field has violations
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Iterate over fields and their messages
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for FieldsErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldsErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

/// A single rule applied to one field value
///
/// Rules operate on [`serde_json::Value`] so that type-level checks still
/// fire for values of the wrong shape: a type-agnostic check (such as
/// not-empty) reports alongside the type check instead of being skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must not be null or an empty string
    NotEmpty,
    /// Value must be a string
    IsString,
    /// Value must be a string of at most this many characters
    MaxLength(usize),
    /// Value must be a boolean
    IsBoolean,
}

impl FieldRule {
    /// The violation message for this rule on `field`, or `None` if it passes
    fn violation(&self, field: &str, value: &Value) -> Option<String> {
        match self {
            FieldRule::NotEmpty => {
                let empty = match value {
                    Value::Null => true,
                    Value::String(s) => s.is_empty(),
                    _ => false,
                };
                empty.then(|| format!("{field} should not be empty"))
            }
            FieldRule::IsString => {
                (!value.is_string()).then(|| format!("{field} must be a string"))
            }
            FieldRule::MaxLength(max) => {
                // Length cannot be measured on a non-string, so the rule
                // fires for those values as well.
                let within = matches!(value, Value::String(s) if s.chars().count() <= *max);
                (!within).then(|| {
                    format!("{field} must be shorter than or equal to {max} characters")
                })
            }
            FieldRule::IsBoolean => {
                (!value.is_boolean()).then(|| format!("{field} must be a boolean"))
            }
        }
    }
}

/// How a rule set treats an absent or null value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    /// Rules run regardless of presence; a missing value is validated as null
    Required,
    /// Rules are skipped when the value is absent or null
    Optional,
}

/// Declarative rule set for a single field
#[derive(Debug, Clone)]
pub struct FieldRules {
    field: String,
    presence: Presence,
    rules: Vec<FieldRule>,
}

impl FieldRules {
    /// Rules for a field that must be present
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            presence: Presence::Required,
            rules: Vec::new(),
        }
    }

    /// Rules for a field that may be absent or null
    pub fn optional(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            presence: Presence::Optional,
            rules: Vec::new(),
        }
    }

    /// Add a rule; rules report in the order they are added
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    fn check(&self, object: &serde_json::Map<String, Value>, errors: &mut FieldsErrors) {
        let value = object.get(&self.field).unwrap_or(&Value::Null);
        if self.presence == Presence::Optional && value.is_null() {
            return;
        }
        for rule in &self.rules {
            if let Some(message) = rule.violation(&self.field, value) {
                errors.push(&self.field, message);
            }
        }
    }
}

/// Applies a set of field rules to the JSON form of an entity
#[derive(Debug, Clone, Default)]
pub struct EntityValidator {
    fields: Vec<FieldRules>,
}

impl EntityValidator {
    /// Create an empty validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rules for one field
    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// Validate a JSON object against the registered rules
    ///
    /// All violations for all fields are collected in the same call. A
    /// non-object value is treated as an object with every field absent.
    pub fn validate(&self, value: &Value) -> Result<(), FieldsErrors> {
        let empty = serde_json::Map::new();
        let object = value.as_object().unwrap_or(&empty);

        let mut errors = FieldsErrors::new();
        for field in &self.fields {
            field.check(object, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
