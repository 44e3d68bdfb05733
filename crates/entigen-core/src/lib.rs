//! Entigen Core
//!
//! Read-only model descriptors, the model reader capability,
//! configuration and the generation report schema.

pub mod model;
pub mod reader;
pub mod report;
pub mod config;

pub use model::{
    has_stereotype, tag_value, AssociationEndDescriptor, AttributeDescriptor, ClassDescriptor,
    ConstraintDefinition, ScalarType, Stereotype, Tag, Upper,
};
pub use reader::ModelReader;
pub use report::{ClassOutcome, GenerationReport, GenerationSummary, ReportVersion};
pub use config::{BlankOverridePolicy, Config, ConfigError, OutputConfig, PolicyConfig, TagKeys, UniqueFalsePolicy};
