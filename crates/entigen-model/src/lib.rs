//! Model document parsing
//!
//! This crate handles:
//! - Parsing model.json (an exported class model)
//! - Resolving scalar types and multiplicities into closed enums
//! - Serving the result through the `ModelReader` capability

pub mod document;
pub mod reader;

pub use document::{
    AssociationEndEntry, AttributeEntry, ClassEntry, ConstraintEntry, ModelDocument, ModelError, StereotypeEntry,
    TagEntry,
};
pub use reader::InMemoryModel;
