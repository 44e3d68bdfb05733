//! Shared model fixtures for generator integration tests
//!
//! A small shop domain: customers place orders, orders hold line items.

#![allow(dead_code)]

use entigen_core::{
    AssociationEndDescriptor, AttributeDescriptor, ClassDescriptor, ConstraintDefinition, ScalarType, Stereotype, Tag,
    Upper,
};
use entigen_model::InMemoryModel;

pub const PROFILE: &str = "PersistentProfile";

pub fn package() -> Vec<String> {
    vec!["com".to_string(), "acme".to_string(), "shop".to_string()]
}

pub fn entity(name: &str) -> ClassDescriptor {
    ClassDescriptor::new(name, package()).with_stereotype(Stereotype::new("Entity", PROFILE))
}

pub fn identifier(name: &str, scalar: ScalarType) -> AttributeDescriptor {
    AttributeDescriptor::new(name, scalar).with_stereotype(Stereotype::new("Identifier", PROFILE))
}

pub fn not_null() -> ConstraintDefinition {
    ConstraintDefinition::new(vec![Tag::single("SQLConstraint.isNotNull", "TRUE")])
}

/// `Person { firstName: STRING, id: LONG <<Identifier>> }`
pub fn person() -> ClassDescriptor {
    entity("Person")
        .with_documentation("A person known to the shop.")
        .with_tag(Tag::single("persistent.entity.schema", "crm"))
        .with_attribute(AttributeDescriptor::new("firstName", ScalarType::String))
        .with_attribute(identifier("id", ScalarType::Long))
}

/// Customer with a to-many end towards its orders
pub fn customer() -> ClassDescriptor {
    entity("Customer")
        .with_tag(Tag::single("persistent.entity.schema", "sales"))
        .with_attribute(identifier("id", ScalarType::Long))
        .with_attribute(
            AttributeDescriptor::new("email", ScalarType::String)
                .with_constraint(not_null())
                .with_tag(Tag::single("persistent.property.length", "120")),
        )
        .with_association_end(AssociationEndDescriptor::new("orders", "Order", "0", Upper::Many).with_opposite("customer"))
}

/// Order with an optional to-one end towards its customer
pub fn order() -> ClassDescriptor {
    entity("Order")
        .with_tag(Tag::single("persistent.entity.schema", "sales"))
        .with_attribute(identifier("id", ScalarType::Long))
        .with_attribute(AttributeDescriptor::new("placedAt", ScalarType::Date).with_constraint(not_null()))
        .with_association_end(AssociationEndDescriptor::new("customer", "Customer", "0", Upper::One).with_opposite("orders"))
}

pub fn shop() -> InMemoryModel {
    InMemoryModel::from_classes(vec![person(), customer(), order()])
}

/// The same shop as an exported model document
pub const SHOP_JSON: &str = r#"{
  "classes": [
    {
      "name": "Customer",
      "package": ["com", "acme", "shop"],
      "stereotypes": [{ "name": "Entity", "profile": "PersistentProfile" }],
      "tags": [{ "definition": "persistent.entity.schema", "values": ["sales"] }],
      "attributes": [
        { "name": "id", "type": "LONG", "stereotypes": [{ "name": "Identifier", "profile": "PersistentProfile" }] }
      ],
      "association_ends": [
        { "name": "orders", "target": "Order", "multiplicity_min": "0", "multiplicity_max": "*", "opposite": "customer" }
      ]
    },
    {
      "name": "Order",
      "package": ["com", "acme", "shop"],
      "stereotypes": [{ "name": "Entity", "profile": "PersistentProfile" }],
      "attributes": [
        { "name": "id", "type": "LONG", "stereotypes": [{ "name": "Identifier", "profile": "PersistentProfile" }] },
        { "name": "note", "type": "STRING" }
      ],
      "association_ends": [
        { "name": "customer", "target": "Customer", "multiplicity_min": "1", "multiplicity_max": "1", "opposite": "orders" }
      ]
    }
  ]
}"#;
