//! Class emission
//!
//! Assembles one complete source file: header, package, imports, the
//! documentation block, the entity annotations, then all fields followed by
//! all accessors.

use entigen_core::{has_stereotype, tag_value, ClassDescriptor, Config, ModelReader};

use crate::association::map_association;
use crate::attribute::map_attribute;
use crate::error::GenerateError;
use crate::fragments::Fragments;
use crate::naming::NameResolver;

/// Stereotype marking a class as a persistent entity
pub const ENTITY_STEREOTYPE: &str = "Entity";

const IMPORTS: &str = "import java.util.*;\nimport javax.persistence.*;\n\n";

/// Emits annotated entity source for a class
#[derive(Debug, Clone, Copy)]
pub struct ClassEmitter<'a> {
    config: &'a Config,
}

impl<'a> ClassEmitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Map every member of `class` in declaration order: attributes, then association ends
    pub fn map_members(
        &self,
        reader: &(impl ModelReader + ?Sized),
        class: &ClassDescriptor,
    ) -> Result<Fragments, GenerateError> {
        let mut fragments = Fragments::new();

        for attribute in &class.attributes {
            map_attribute(attribute, self.config, &mut fragments);
        }
        for end in &class.association_ends {
            map_association(reader, class, end, self.config, &mut fragments)?;
        }

        Ok(fragments)
    }

    /// Full source text for `class`, starting with `header` verbatim
    pub fn emit(
        &self,
        reader: &(impl ModelReader + ?Sized),
        class: &ClassDescriptor,
        header: &str,
    ) -> Result<String, GenerateError> {
        let fragments = self.map_members(reader, class)?;
        let mut out = String::from(header);

        if !class.package.is_empty() {
            out.push_str(&format!("package {};\n\n", class.package_name()));
        }
        out.push_str(IMPORTS);

        out.push_str("/*\n");
        for note in &class.documentation {
            out.push_str(note);
            out.push('\n');
        }
        out.push_str("*/\n");

        out.push_str(&self.entity_block(class));
        out.push_str(&format!("public class {} implements java.io.Serializable {{\n", class.name));
        out.extend(fragments.fields);
        out.push_str("\n\n");
        out.extend(fragments.accessors);
        out.push_str("}\n");

        Ok(out)
    }

    /// `@Entity` and `@Table` lines, or nothing for non-entity classes
    fn entity_block(&self, class: &ClassDescriptor) -> String {
        if !has_stereotype(&class.stereotypes, ENTITY_STEREOTYPE, &self.config.profile) {
            return String::new();
        }

        let schema = tag_value(&class.tags, &self.config.tags.schema).unwrap_or_default();
        let name = NameResolver::new(self.config).persistent_name(class);

        format!("@Entity\n@Table (schema=\"{schema}\", name=\"{name}\")\n")
    }
}
