//! model.json parsing
//!
//! Raw, unvalidated shape of an exported model. Scalar types and
//! multiplicities stay as strings here; [`InMemoryModel`](crate::InMemoryModel)
//! resolves them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exported model document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Classes in declaration order
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

impl ModelDocument {
    /// Load a model document from file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModelError::IoError(path.display().to_string(), e.to_string()))?;

        Self::from_str(&contents)
    }

    /// Parse a model document from a JSON string
    pub fn from_str(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json)
            .map_err(|e| ModelError::ParseError(e.to_string()))
    }
}

/// A class in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,

    /// Package chain, outermost first
    #[serde(default)]
    pub package: Vec<String>,

    /// Documentation notes, reproduced verbatim
    #[serde(default)]
    pub documentation: Vec<String>,

    #[serde(default)]
    pub stereotypes: Vec<StereotypeEntry>,

    #[serde(default)]
    pub tags: Vec<TagEntry>,

    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,

    #[serde(default)]
    pub association_ends: Vec<AssociationEndEntry>,
}

/// Applied stereotype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StereotypeEntry {
    pub name: String,

    /// Owning profile (module) name
    pub profile: String,
}

/// Tagged value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagEntry {
    pub definition: String,

    #[serde(default)]
    pub values: Vec<String>,
}

/// Constraint definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintEntry {
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

/// Owned attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub name: String,

    /// Scalar type name (STRING, LONG, ...)
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub stereotypes: Vec<StereotypeEntry>,

    #[serde(default)]
    pub constraints: Vec<ConstraintEntry>,

    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

/// Owned association end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationEndEntry {
    pub name: String,

    /// Target class name
    pub target: String,

    #[serde(default = "default_min")]
    pub multiplicity_min: String,

    #[serde(default = "default_max")]
    pub multiplicity_max: String,

    /// Name of the opposite end
    #[serde(default)]
    pub opposite: Option<String>,

    /// Tags of the owning association
    #[serde(default)]
    pub association_tags: Vec<TagEntry>,
}

fn default_min() -> String {
    "0".to_string()
}

fn default_max() -> String {
    "1".to_string()
}

/// Model loading errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model file {0}: {1}")]
    IoError(String, String),

    #[error("Failed to parse model JSON: {0}")]
    ParseError(String),

    #[error("Class '{class}' declared more than once")]
    DuplicateClass { class: String },

    #[error("Attribute '{class}.{attribute}' has unsupported type '{type_name}'")]
    UnsupportedType {
        class: String,
        attribute: String,
        type_name: String,
    },

    #[error("Association end '{class}.{end}' has unsupported upper bound '{value}' (expected \"1\" or \"*\")")]
    UnsupportedMultiplicity {
        class: String,
        end: String,
        value: String,
    },
}
