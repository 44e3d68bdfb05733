//! Attribute mapping: field, column annotation and accessors

use entigen_core::{tag_value, AttributeDescriptor, Config};

use crate::constraints::ColumnConstraints;
use crate::fragments::{field_declaration, getter_setter, Fragments};
use crate::naming::{is_identifier, to_db_name};
use crate::types::{java_type, DATE_TYPE};

/// Map one owned attribute, appending to `out`
pub fn map_attribute(attribute: &AttributeDescriptor, config: &Config, out: &mut Fragments) {
    let identifier = is_identifier(attribute, &config.profile);
    let constraints = ColumnConstraints::extract(attribute, identifier, config);
    let ty = java_type(attribute.scalar_type, constraints.nullable);
    let length = tag_value(&attribute.tags, &config.tags.length).filter(|v| !v.trim().is_empty());

    tracing::debug!(
        attribute = %attribute.name,
        java_type = ty,
        identifier,
        nullable = constraints.nullable,
        unique = constraints.unique,
        "mapping attribute"
    );

    let mut accessor = String::new();
    if identifier {
        accessor.push_str("\t@Id\n");
        accessor.push_str("\t@GeneratedValue(strategy = GenerationType.IDENTITY)\n\n");
    }
    if ty == DATE_TYPE {
        accessor.push_str("\t@Temporal(TemporalType.TIMESTAMP)\n");
    }
    accessor.push_str(&column_annotation(&attribute.name, constraints, length));
    accessor.push_str(&getter_setter(ty, &attribute.name));

    out.push_field(field_declaration(ty, &attribute.name));
    out.push_accessor(accessor);
}

/// `@Column(name = ..., unique = ..., nullable = ..., length = ...)`
///
/// Clauses appear only when they differ from the JPA defaults.
fn column_annotation(name: &str, constraints: ColumnConstraints, length: Option<&str>) -> String {
    let mut column = format!("\t@Column(name = \"{}\"", to_db_name(name));

    if constraints.unique {
        column.push_str(", unique = true");
    }
    if !constraints.nullable {
        column.push_str(", nullable = false");
    }
    if let Some(length) = length {
        column.push_str(&format!(", length = {length}"));
    }

    column.push_str(")\n");
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use entigen_core::{ConstraintDefinition, ScalarType, Stereotype, Tag};

    fn map(attribute: &AttributeDescriptor) -> Fragments {
        let mut out = Fragments::new();
        map_attribute(attribute, &Config::default(), &mut out);
        out
    }

    #[test]
    fn plain_string_attribute() {
        let out = map(&AttributeDescriptor::new("firstName", ScalarType::String));

        assert_eq!(out.fields, vec!["\tprivate String firstName;\n".to_string()]);
        assert!(out.accessors[0].starts_with("\t@Column(name = \"first_name\")\n\tpublic String getFirstName() {\n"));
    }

    #[test]
    fn identifier_gets_identity_annotations() {
        let attribute = AttributeDescriptor::new("id", ScalarType::Long)
            .with_stereotype(Stereotype::new("Identifier", "PersistentProfile"));
        let out = map(&attribute);

        assert_eq!(out.fields[0], "\tprivate long id;\n");
        assert!(out.accessors[0].starts_with(
            "\t@Id\n\t@GeneratedValue(strategy = GenerationType.IDENTITY)\n\n\t@Column(name = \"id\", unique = true, nullable = false)\n"
        ));
    }

    #[test]
    fn column_clause_order() {
        let attribute = AttributeDescriptor::new("email", ScalarType::String)
            .with_constraint(ConstraintDefinition::new(vec![
                Tag::single("SQLConstraint.isNotNull", "TRUE"),
                Tag::single("SQLConstraint.isUnique", "TRUE"),
            ]))
            .with_tag(Tag::single("persistent.property.length", "120"));
        let out = map(&attribute);

        assert!(out.accessors[0].starts_with("\t@Column(name = \"email\", unique = true, nullable = false, length = 120)\n"));
    }

    #[test]
    fn empty_length_is_absent() {
        let attribute = AttributeDescriptor::new("code", ScalarType::String)
            .with_tag(Tag::single("persistent.property.length", ""));
        let out = map(&attribute);

        assert!(out.accessors[0].starts_with("\t@Column(name = \"code\")\n"));
        assert!(!out.accessors[0].contains("length"));
    }

    #[test]
    fn date_gets_temporal_marker() {
        let out = map(&AttributeDescriptor::new("createdAt", ScalarType::Date));

        assert_eq!(out.fields[0], "\tprivate Date createdAt;\n");
        assert!(out.accessors[0].starts_with("\t@Temporal(TemporalType.TIMESTAMP)\n\t@Column(name = \"created_at\")\n"));
    }

    #[test]
    fn not_null_integer_is_primitive() {
        let attribute = AttributeDescriptor::new("quantity", ScalarType::Integer)
            .with_constraint(ConstraintDefinition::new(vec![Tag::single("SQLConstraint.isNotNull", "TRUE")]));
        let out = map(&attribute);

        assert_eq!(out.fields[0], "\tprivate int quantity;\n");
        assert!(out.accessors[0].contains("\tpublic void setQuantity(int quantity) {\n\t\tthis.quantity=quantity;\n"));
    }

    #[test]
    fn column_name_ignores_persistent_name_override() {
        let attribute = AttributeDescriptor::new("lastName", ScalarType::String)
            .with_tag(Tag::single("persistent.entity.persistentName", "SURNAME"));
        let out = map(&attribute);

        assert!(out.accessors[0].starts_with("\t@Column(name = \"last_name\")\n"));
    }
}
