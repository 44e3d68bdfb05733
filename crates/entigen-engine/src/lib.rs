//! Entigen engine - persistence-annotated source generation
//!
//! This crate implements the generation core:
//! - Identifier case conversion and persistent-name resolution
//! - Scalar type mapping and column constraint extraction
//! - Attribute and association end mapping
//! - Class emission and the batch driver

pub mod association;
pub mod attribute;
pub mod constraints;
pub mod emitter;
pub mod error;
pub mod fragments;
pub mod generator;
pub mod naming;
pub mod output;
pub mod types;

pub use association::map_association;
pub use attribute::map_attribute;
pub use constraints::ColumnConstraints;
pub use emitter::ClassEmitter;
pub use error::GenerateError;
pub use fragments::Fragments;
pub use generator::Generator;
pub use naming::{capitalize, identifier_attribute, is_identifier, to_db_name, NameResolver};
pub use output::{FileHeader, FsSink, HeaderProvider, MemorySink, OutputSink, StaticHeader};
pub use types::java_type;
