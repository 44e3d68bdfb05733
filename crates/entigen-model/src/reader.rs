//! Validated in-memory model
//!
//! Converts a [`ModelDocument`] into core descriptors. Type names and
//! multiplicities are resolved once here, so the generator only ever sees
//! closed enums.

use entigen_core::{
    AssociationEndDescriptor, AttributeDescriptor, ClassDescriptor, ConstraintDefinition, ModelReader,
    ScalarType, Stereotype, Tag, Upper,
};
use std::collections::HashSet;
use std::path::Path;

use crate::document::{
    AssociationEndEntry, AttributeEntry, ClassEntry, ModelDocument, ModelError, StereotypeEntry, TagEntry,
};

/// Model reader backed by an owned list of classes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryModel {
    classes: Vec<ClassDescriptor>,
}

impl InMemoryModel {
    /// Build from already-constructed descriptors (fixtures, tests)
    pub fn from_classes(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    /// Load and validate a model.json file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        Self::from_document(ModelDocument::from_file(path)?)
    }

    /// Validate a parsed document
    pub fn from_document(doc: ModelDocument) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        let mut classes = Vec::with_capacity(doc.classes.len());

        for entry in doc.classes {
            if !seen.insert(entry.name.clone()) {
                return Err(ModelError::DuplicateClass { class: entry.name });
            }
            classes.push(convert_class(entry)?);
        }

        Ok(Self { classes })
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ModelReader for InMemoryModel {
    fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }
}

fn convert_class(entry: ClassEntry) -> Result<ClassDescriptor, ModelError> {
    let attributes = entry
        .attributes
        .into_iter()
        .map(|a| convert_attribute(&entry.name, a))
        .collect::<Result<Vec<_>, _>>()?;

    let association_ends = entry
        .association_ends
        .into_iter()
        .map(|e| convert_end(&entry.name, e))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ClassDescriptor {
        name: entry.name,
        package: entry.package,
        documentation: entry.documentation,
        attributes,
        association_ends,
        stereotypes: convert_stereotypes(entry.stereotypes),
        tags: convert_tags(entry.tags),
    })
}

fn convert_attribute(class: &str, entry: AttributeEntry) -> Result<AttributeDescriptor, ModelError> {
    let scalar_type = ScalarType::from_model_name(&entry.type_name).ok_or_else(|| ModelError::UnsupportedType {
        class: class.to_string(),
        attribute: entry.name.clone(),
        type_name: entry.type_name.clone(),
    })?;

    Ok(AttributeDescriptor {
        name: entry.name,
        scalar_type,
        stereotypes: convert_stereotypes(entry.stereotypes),
        constraints: entry
            .constraints
            .into_iter()
            .map(|c| ConstraintDefinition::new(convert_tags(c.tags)))
            .collect(),
        tags: convert_tags(entry.tags),
    })
}

fn convert_end(class: &str, entry: AssociationEndEntry) -> Result<AssociationEndDescriptor, ModelError> {
    let upper = Upper::from_model_value(&entry.multiplicity_max).ok_or_else(|| ModelError::UnsupportedMultiplicity {
        class: class.to_string(),
        end: entry.name.clone(),
        value: entry.multiplicity_max.clone(),
    })?;

    Ok(AssociationEndDescriptor {
        name: entry.name,
        target: entry.target,
        multiplicity_min: entry.multiplicity_min,
        upper,
        opposite: entry.opposite,
        association_tags: convert_tags(entry.association_tags),
    })
}

fn convert_stereotypes(entries: Vec<StereotypeEntry>) -> Vec<Stereotype> {
    entries.into_iter().map(|s| Stereotype::new(s.name, s.profile)).collect()
}

fn convert_tags(entries: Vec<TagEntry>) -> Vec<Tag> {
    entries.into_iter().map(|t| Tag::new(t.definition, t.values)).collect()
}
