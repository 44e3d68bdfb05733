//! Column constraint extraction
//!
//! Identifiers are never scanned: they are always unique and not nullable.
//! Every other attribute starts out nullable and non-unique, then each
//! constraint flag tag is applied in declaration order, last write wins.

use entigen_core::{AttributeDescriptor, Config, UniqueFalsePolicy};

/// Nullability and uniqueness of a mapped column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConstraints {
    pub nullable: bool,
    pub unique: bool,
}

impl ColumnConstraints {
    /// Defaults for an identifier column
    pub const IDENTIFIER: Self = Self {
        nullable: false,
        unique: true,
    };

    /// Defaults for any other column
    pub const PLAIN: Self = Self {
        nullable: true,
        unique: false,
    };

    /// Derive constraints for `attribute`
    pub fn extract(attribute: &AttributeDescriptor, identifier: bool, config: &Config) -> Self {
        if identifier {
            return Self::IDENTIFIER;
        }

        let mut constraints = Self::PLAIN;
        let tags = attribute.constraints.iter().flat_map(|c| c.tags.iter());

        for tag in tags {
            for value in &tag.values {
                let flag = is_true(value);

                if tag.definition == config.tags.not_null {
                    constraints.nullable = !flag;
                } else if tag.definition == config.tags.unique {
                    match (flag, config.policy.unique_false) {
                        (true, _) => constraints.unique = true,
                        (false, UniqueFalsePolicy::Legacy) => constraints.nullable = false,
                        (false, UniqueFalsePolicy::Strict) => constraints.unique = false,
                    }
                }
            }
        }

        constraints
    }
}

fn is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
