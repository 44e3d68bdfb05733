//! Identifier case conversion and persistent-name resolution
//!
//! Persistent names are the table/column names that end up in annotations.
//! An explicit tag override wins; otherwise the name is derived from the
//! element's programmatic name with [`to_db_name`].

use entigen_core::{
    has_stereotype, tag_value, AssociationEndDescriptor, AttributeDescriptor, BlankOverridePolicy, ClassDescriptor,
    Config, ModelReader, Tag,
};

use crate::error::GenerateError;

/// Stereotype marking a class's primary-key attribute
pub const IDENTIFIER_STEREOTYPE: &str = "Identifier";

/// Convert a medial-capitalized identifier to lower snake case
///
/// A separator is inserted only at a lower-to-upper transition, so acronym
/// runs stay together (`parseHTTPRequest` -> `parse_httprequest`). Non-ASCII
/// characters are dropped before conversion.
pub fn to_db_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().filter(char::is_ascii).collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for pair in chars.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        out.push(current.to_ascii_lowercase());
        if !current.is_ascii_uppercase() && !next.is_ascii_lowercase() {
            out.push('_');
        }
    }

    if let Some(last) = chars.last() {
        out.push(last.to_ascii_lowercase());
    }

    out
}

/// Upper-case the first character (`firstName` -> `FirstName`), dropping non-ASCII
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars().filter(char::is_ascii);
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.collect::<String>(),
        None => String::new(),
    }
}

/// A model element that can carry a persistent-name override
pub trait PersistentElement {
    fn element_name(&self) -> &str;
    fn element_tags(&self) -> &[Tag];
}

impl PersistentElement for ClassDescriptor {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn element_tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl PersistentElement for AttributeDescriptor {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn element_tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// True when the attribute carries the identifier stereotype of `profile`
pub fn is_identifier(attribute: &AttributeDescriptor, profile: &str) -> bool {
    has_stereotype(&attribute.stereotypes, IDENTIFIER_STEREOTYPE, profile)
}

/// First attribute of `class` marked as identifier
pub fn identifier_attribute<'a>(class: &'a ClassDescriptor, profile: &str) -> Option<&'a AttributeDescriptor> {
    class.attributes.iter().find(|a| is_identifier(a, profile))
}

/// Resolves persistent names against the configured tag keys and policies
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    config: &'a Config,
}

impl<'a> NameResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Persistent name of a class or attribute
    pub fn persistent_name(&self, element: &impl PersistentElement) -> String {
        let tagged = tag_value(element.element_tags(), &self.config.tags.entity_persistent_name);

        match self.usable_override(tagged) {
            Some(name) => name.to_string(),
            None => to_db_name(element.element_name()),
        }
    }

    /// Join-column name for a to-one association end
    ///
    /// Without an override on the owning association this is the persistent
    /// name of the target class's identifier attribute.
    pub fn persistent_relationship_name(
        &self,
        reader: &(impl ModelReader + ?Sized),
        owner: &ClassDescriptor,
        end: &AssociationEndDescriptor,
    ) -> Result<String, GenerateError> {
        let tagged = tag_value(&end.association_tags, &self.config.tags.relationship_persistent_name);
        if let Some(name) = self.usable_override(tagged) {
            return Ok(name.to_string());
        }

        let target = target_class(reader, owner, end)?;
        let identifier = identifier_attribute(target, &self.config.profile).ok_or_else(|| {
            GenerateError::MissingIdentifier {
                class: owner.name.clone(),
                end: end.name.clone(),
                target: target.name.clone(),
            }
        })?;

        Ok(self.persistent_name(identifier))
    }

    fn usable_override<'v>(&self, value: Option<&'v str>) -> Option<&'v str> {
        value.filter(|v| match self.config.policy.blank_override {
            BlankOverridePolicy::Fallback => !v.trim().is_empty(),
            BlankOverridePolicy::Verbatim => !v.is_empty(),
        })
    }
}

/// Resolve the target class of an association end
pub fn target_class<'r>(
    reader: &'r (impl ModelReader + ?Sized),
    owner: &ClassDescriptor,
    end: &AssociationEndDescriptor,
) -> Result<&'r ClassDescriptor, GenerateError> {
    reader.class(&end.target).ok_or_else(|| GenerateError::UnknownClass {
        class: owner.name.clone(),
        end: end.name.clone(),
        target: end.target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use entigen_core::{ScalarType, Stereotype, Upper};

    struct Classes(Vec<ClassDescriptor>);

    impl ModelReader for Classes {
        fn classes(&self) -> &[ClassDescriptor] {
            &self.0
        }
    }

    fn identifier(name: &str) -> AttributeDescriptor {
        AttributeDescriptor::new(name, ScalarType::Long)
            .with_stereotype(Stereotype::new(IDENTIFIER_STEREOTYPE, "PersistentProfile"))
    }

    fn override_tag(value: &str) -> Tag {
        Tag::single("persistent.entity.persistentName", value)
    }

    #[test]
    fn converts_camel_case() {
        assert_eq!(to_db_name("orderLineItem"), "order_line_item");
        assert_eq!(to_db_name("Person"), "person");
        assert_eq!(to_db_name("x"), "x");
        assert_eq!(to_db_name(""), "");
    }

    #[test]
    fn acronyms_are_not_split() {
        assert_eq!(to_db_name("parseHTTPRequest"), "parse_httprequest");
        assert_eq!(to_db_name("ID"), "id");
        assert_eq!(to_db_name("userID"), "user_id");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(to_db_name("größeWert"), "gre_wert");
        assert_eq!(capitalize("ñame"), "Ame");
    }

    #[test]
    fn digits_count_as_boundaries() {
        assert_eq!(to_db_name("address2"), "address_2");
    }

    #[test]
    fn capitalizes_first_character() {
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn persistent_name_prefers_override() {
        let config = Config::default();
        let names = NameResolver::new(&config);

        let class = ClassDescriptor::new("OrderLine", Vec::new()).with_tag(override_tag("T_ORDER_LINE"));
        assert_eq!(names.persistent_name(&class), "T_ORDER_LINE");

        let class = ClassDescriptor::new("OrderLine", Vec::new());
        assert_eq!(names.persistent_name(&class), "order_line");
    }

    #[test]
    fn empty_override_falls_back() {
        let config = Config::default();
        let names = NameResolver::new(&config);

        let attribute = AttributeDescriptor::new("createdAt", ScalarType::Date).with_tag(override_tag(""));
        assert_eq!(names.persistent_name(&attribute), "created_at");
    }

    #[test]
    fn whitespace_override_falls_back_by_default() {
        let config = Config::default();
        let names = NameResolver::new(&config);

        let attribute = AttributeDescriptor::new("createdAt", ScalarType::Date).with_tag(override_tag("  "));
        assert_eq!(names.persistent_name(&attribute), "created_at");
    }

    #[test]
    fn whitespace_override_is_kept_when_verbatim() {
        let mut config = Config::default();
        config.policy.blank_override = BlankOverridePolicy::Verbatim;
        let names = NameResolver::new(&config);

        let attribute = AttributeDescriptor::new("createdAt", ScalarType::Date).with_tag(override_tag("  "));
        assert_eq!(names.persistent_name(&attribute), "  ");

        let attribute = AttributeDescriptor::new("createdAt", ScalarType::Date).with_tag(override_tag(""));
        assert_eq!(names.persistent_name(&attribute), "created_at");
    }

    #[test]
    fn relationship_name_uses_target_identifier() {
        let config = Config::default();
        let names = NameResolver::new(&config);

        let customer = ClassDescriptor::new("Customer", Vec::new())
            .with_attribute(AttributeDescriptor::new("name", ScalarType::String))
            .with_attribute(identifier("customerNo").with_tag(override_tag("cust_pk")));
        let order = ClassDescriptor::new("Order", Vec::new());
        let end = AssociationEndDescriptor::new("customer", "Customer", "0", Upper::One);
        let reader = Classes(vec![customer, order.clone()]);

        assert_eq!(names.persistent_relationship_name(&reader, &order, &end).unwrap(), "cust_pk");

        let end = end.with_association_tag(Tag::single("persistent.relationship.persistentName", "buyer_id"));
        assert_eq!(names.persistent_relationship_name(&reader, &order, &end).unwrap(), "buyer_id");
    }

    #[test]
    fn relationship_override_does_not_need_identifier() {
        let config = Config::default();
        let names = NameResolver::new(&config);

        let order = ClassDescriptor::new("Order", Vec::new());
        let end = AssociationEndDescriptor::new("customer", "Customer", "0", Upper::One)
            .with_association_tag(Tag::single("persistent.relationship.persistentName", "buyer_id"));
        let reader = Classes(Vec::new());

        assert_eq!(names.persistent_relationship_name(&reader, &order, &end).unwrap(), "buyer_id");
    }

    #[test]
    fn missing_identifier_is_an_error() {
        let config = Config::default();
        let names = NameResolver::new(&config);

        let customer = ClassDescriptor::new("Customer", Vec::new())
            .with_attribute(AttributeDescriptor::new("name", ScalarType::String));
        let order = ClassDescriptor::new("Order", Vec::new());
        let end = AssociationEndDescriptor::new("customer", "Customer", "0", Upper::One);
        let reader = Classes(vec![customer]);

        let err = names.persistent_relationship_name(&reader, &order, &end).unwrap_err();
        assert!(matches!(err, GenerateError::MissingIdentifier { ref class, ref end, ref target }
            if class == "Order" && end == "customer" && target == "Customer"));
    }

    #[test]
    fn identifier_must_come_from_profile() {
        let attribute = AttributeDescriptor::new("id", ScalarType::Long)
            .with_stereotype(Stereotype::new(IDENTIFIER_STEREOTYPE, "SomeOtherProfile"));

        assert!(!is_identifier(&attribute, "PersistentProfile"));
        assert!(is_identifier(&identifier("id"), "PersistentProfile"));
    }
}
