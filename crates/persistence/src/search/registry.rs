//! Field registry.
//!
//! The registry maps external filter keys to [`FieldDefinition`]s. It is built
//! once at startup and only read afterwards, so it can be shared freely across
//! request tasks.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{SearchError, ValidationError};
use crate::types::{FieldDefinition, FieldKind};

/// Immutable lookup table of searchable fields.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: HashMap<String, FieldDefinition>,
}

/// Registry contents as read from configuration.
#[derive(Debug, Clone, Deserialize)]
struct RegistryConfig {
    fields: Vec<FieldDefinition>,
}

impl FieldRegistry {
    /// Builds a registry from explicit definitions.
    ///
    /// Keys must be unique and non-empty, and every field needs a target name.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = FieldDefinition>,
    ) -> Result<Self, ValidationError> {
        let mut fields = HashMap::new();
        for def in definitions {
            if def.key.trim().is_empty() {
                return Err(ValidationError::InvalidFieldDefinition {
                    key: def.key,
                    message: "key cannot be empty".to_string(),
                });
            }
            if def.name.trim().is_empty() {
                return Err(ValidationError::InvalidFieldDefinition {
                    key: def.key,
                    message: "target field name cannot be empty".to_string(),
                });
            }
            if fields.contains_key(&def.key) {
                return Err(ValidationError::InvalidFieldDefinition {
                    key: def.key,
                    message: "duplicate key".to_string(),
                });
            }
            fields.insert(def.key.clone(), def);
        }
        Ok(Self { fields })
    }

    /// Builds a registry from a JSON document of the form
    /// `{"fields": [{"key": .., "name": .., "kind": ..}, ..]}`.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let config: RegistryConfig =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFieldDefinition {
                key: "<registry>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_definitions(config.fields)
    }

    /// Resolves a filter key.
    pub fn resolve(&self, key: &str) -> Result<&FieldDefinition, SearchError> {
        self.fields
            .get(key)
            .ok_or_else(|| SearchError::UnknownField {
                key: key.to_string(),
            })
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for FieldRegistry {
    /// The idea index field table.
    fn default() -> Self {
        let fields = [
            FieldDefinition::new("keyword", "*", FieldKind::FullText),
            FieldDefinition::new("tags", "tags", FieldKind::TextMatch),
            FieldDefinition::new("rewilding_mode", "wild_mode", FieldKind::Attribute),
            FieldDefinition::new(
                "rewilding_location",
                "attraction_location",
                FieldKind::Attribute,
            ),
            FieldDefinition::new("experience_hours", "experience_duration", FieldKind::Range),
        ];
        Self {
            fields: fields.into_iter().map(|f| (f.key.clone(), f)).collect(),
        }
    }
}
