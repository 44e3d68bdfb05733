//! Read-only model descriptors
//!
//! Snapshot views of classes, attributes and association ends as supplied by a
//! [`ModelReader`](crate::ModelReader). The generator never mutates them.

use std::fmt;

/// Closed set of scalar attribute types understood by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Character string
    String,

    /// 64-bit integer
    Long,

    /// Boolean flag
    Boolean,

    /// Calendar date with time component
    Date,

    /// Floating point
    Float,

    /// 32-bit integer
    Integer,

    /// Raw byte array
    ByteArray,
}

impl ScalarType {
    /// Resolve a model type name (e.g. `"INTEGER"`) into a scalar type
    pub fn from_model_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "STRING" => Some(Self::String),
            "LONG" => Some(Self::Long),
            "BOOLEAN" => Some(Self::Boolean),
            "DATE" => Some(Self::Date),
            "FLOAT" => Some(Self::Float),
            "INTEGER" => Some(Self::Integer),
            "BYTE" | "BYTE-ARRAY" | "BYTE_ARRAY" => Some(Self::ByteArray),
            _ => None,
        }
    }

    /// Canonical model type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Long => "LONG",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::ByteArray => "BYTE-ARRAY",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stereotype applied to a model element, scoped to the profile that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stereotype {
    pub name: String,
    pub profile: String,
}

impl Stereotype {
    pub fn new(name: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: profile.into(),
        }
    }

    /// True when this is stereotype `name` from profile `profile`
    pub fn is(&self, name: &str, profile: &str) -> bool {
        self.name == name && self.profile == profile
    }
}

/// A tagged value: definition name plus its actual values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag definition name (e.g. `persistent.entity.schema`)
    pub definition: String,

    /// Actual values, in model order
    pub values: Vec<String>,
}

impl Tag {
    pub fn new(definition: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            definition: definition.into(),
            values,
        }
    }

    /// Tag with exactly one actual value
    pub fn single(definition: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(definition, vec![value.into()])
    }

    /// First actual value, if any
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Value of the last tag named `definition` that carries at least one actual value
pub fn tag_value<'a>(tags: &'a [Tag], definition: &str) -> Option<&'a str> {
    tags.iter()
        .filter(|tag| tag.definition == definition)
        .filter_map(Tag::first_value)
        .last()
}

/// True when any stereotype matches `name` within `profile`
pub fn has_stereotype(stereotypes: &[Stereotype], name: &str, profile: &str) -> bool {
    stereotypes.iter().any(|s| s.is(name, profile))
}

/// A constraint attached to an attribute, expressed as flag tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintDefinition {
    pub tags: Vec<Tag>,
}

impl ConstraintDefinition {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

/// An owned attribute of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Programmatic attribute name
    pub name: String,

    /// Scalar type
    pub scalar_type: ScalarType,

    /// Applied stereotypes (used to detect the identifier)
    pub stereotypes: Vec<Stereotype>,

    /// Constraint definitions (not-null / uniqueness flags)
    pub constraints: Vec<ConstraintDefinition>,

    /// Tagged values (length, persistent name)
    pub tags: Vec<Tag>,
}

impl AttributeDescriptor {
    /// Create an attribute with no stereotypes, constraints or tags
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
            stereotypes: Vec::new(),
            constraints: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
        self.stereotypes.push(stereotype);
        self
    }

    pub fn with_constraint(mut self, constraint: ConstraintDefinition) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// Upper bound of an association end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upper {
    /// Exactly one (`"1"`): single-valued, owns the foreign key
    One,

    /// Unbounded (`"*"`): collection-valued, inverse side
    Many,
}

impl Upper {
    /// Parse a model multiplicity upper bound
    pub fn from_model_value(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::One),
            "*" => Some(Self::Many),
            _ => None,
        }
    }
}

/// One navigable end of a binary association, owned by the source class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationEndDescriptor {
    /// End (role) name
    pub name: String,

    /// Name of the target class
    pub target: String,

    /// Multiplicity lower bound as written in the model (`"0"`, `"1"`, ...)
    pub multiplicity_min: String,

    /// Multiplicity upper bound
    pub upper: Upper,

    /// Name of the opposite end, if the association is navigable both ways
    pub opposite: Option<String>,

    /// Tags of the owning association
    pub association_tags: Vec<Tag>,
}

impl AssociationEndDescriptor {
    pub fn new(name: impl Into<String>, target: impl Into<String>, multiplicity_min: impl Into<String>, upper: Upper) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            multiplicity_min: multiplicity_min.into(),
            upper,
            opposite: None,
            association_tags: Vec::new(),
        }
    }

    pub fn with_opposite(mut self, opposite: impl Into<String>) -> Self {
        self.opposite = Some(opposite.into());
        self
    }

    pub fn with_association_tag(mut self, tag: Tag) -> Self {
        self.association_tags.push(tag);
        self
    }

    /// A lower bound of `"0"` makes the end optional
    pub fn is_optional(&self) -> bool {
        self.multiplicity_min.trim() == "0"
    }
}

/// A class-like model element selected for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class name
    pub name: String,

    /// Owning package chain, outermost first
    pub package: Vec<String>,

    /// Free-text documentation, one entry per descriptor note
    pub documentation: Vec<String>,

    /// Owned attributes in declaration order
    pub attributes: Vec<AttributeDescriptor>,

    /// Owned association ends in declaration order
    pub association_ends: Vec<AssociationEndDescriptor>,

    /// Applied stereotypes
    pub stereotypes: Vec<Stereotype>,

    /// Tagged values (schema, persistent name)
    pub tags: Vec<Tag>,
}

impl ClassDescriptor {
    /// Create an empty class in the given package chain
    pub fn new(name: impl Into<String>, package: Vec<String>) -> Self {
        Self {
            name: name.into(),
            package,
            documentation: Vec::new(),
            attributes: Vec::new(),
            association_ends: Vec::new(),
            stereotypes: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_documentation(mut self, note: impl Into<String>) -> Self {
        self.documentation.push(note.into());
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_association_end(mut self, end: AssociationEndDescriptor) -> Self {
        self.association_ends.push(end);
        self
    }

    pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
        self.stereotypes.push(stereotype);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Dotted package name (`com.acme.shop`)
    pub fn package_name(&self) -> String {
        self.package.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_type_names() {
        assert_eq!(ScalarType::from_model_name("integer"), Some(ScalarType::Integer));
        assert_eq!(ScalarType::from_model_name("BYTE"), Some(ScalarType::ByteArray));
        assert_eq!(ScalarType::from_model_name("DECIMAL"), None);
        assert_eq!(ScalarType::ByteArray.to_string(), "BYTE-ARRAY");
    }

    #[test]
    fn tag_value_is_last_wins() {
        let tags = vec![
            Tag::single("persistent.entity.schema", "first"),
            Tag::new("persistent.entity.schema", Vec::new()),
            Tag::single("other", "x"),
            Tag::single("persistent.entity.schema", "second"),
        ];

        assert_eq!(tag_value(&tags, "persistent.entity.schema"), Some("second"));
        assert_eq!(tag_value(&tags, "missing"), None);
    }

    #[test]
    fn stereotype_requires_profile() {
        let stereotypes = vec![Stereotype::new("Identifier", "OtherProfile")];

        assert!(!has_stereotype(&stereotypes, "Identifier", "PersistentProfile"));
        assert!(has_stereotype(&stereotypes, "Identifier", "OtherProfile"));
    }

    #[test]
    fn upper_bounds() {
        assert_eq!(Upper::from_model_value("1"), Some(Upper::One));
        assert_eq!(Upper::from_model_value("*"), Some(Upper::Many));
        assert_eq!(Upper::from_model_value("2"), None);
    }

    #[test]
    fn class_builder() {
        let class = ClassDescriptor::new("Order", vec!["com".into(), "acme".into()])
            .with_attribute(AttributeDescriptor::new("id", ScalarType::Long));

        assert_eq!(class.package_name(), "com.acme");
        assert_eq!(class.attributes[0].name, "id");
    }
}
