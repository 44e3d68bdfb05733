//! Ordered output buffers for a class body

use crate::naming::capitalize;

/// Field declarations and accessor blocks, each in member encounter order
///
/// The two sequences are only joined when the class is emitted: all fields,
/// a blank separator, then all accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub fields: Vec<String>,
    pub accessors: Vec<String>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_field(&mut self, field: String) {
        self.fields.push(field);
    }

    pub fn push_accessor(&mut self, accessor: String) {
        self.accessors.push(accessor);
    }

    /// Number of mapped members
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `private <ty> <name>;`
pub fn field_declaration(java_type: &str, name: &str) -> String {
    format!("\tprivate {java_type} {name};\n")
}

/// Getter and setter pair for a property
pub fn getter_setter(java_type: &str, name: &str) -> String {
    let property = capitalize(name);
    let mut out = String::new();

    out.push_str(&format!("\tpublic {java_type} get{property}() {{\n"));
    out.push_str(&format!("\t\treturn this.{name};\n"));
    out.push_str("\t}\n\n");
    out.push_str(&format!("\tpublic void set{property}({java_type} {name}) {{\n"));
    out.push_str(&format!("\t\tthis.{name}={name};\n"));
    out.push_str("\t}\n\n");

    out
}
