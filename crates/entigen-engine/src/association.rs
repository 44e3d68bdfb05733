//! Association end mapping
//!
//! A to-one end owns the foreign key and becomes a lazily fetched
//! `@ManyToOne` with a named join column. A to-many end is the inverse side:
//! a list field mapped by the opposite end's name. Many-to-many is not
//! supported.

use entigen_core::{AssociationEndDescriptor, ClassDescriptor, Config, ModelReader, Upper};

use crate::error::GenerateError;
use crate::fragments::{field_declaration, getter_setter, Fragments};
use crate::naming::{target_class, NameResolver};

/// Map one owned association end of `owner`, appending to `out`
pub fn map_association(
    reader: &(impl ModelReader + ?Sized),
    owner: &ClassDescriptor,
    end: &AssociationEndDescriptor,
    config: &Config,
    out: &mut Fragments,
) -> Result<(), GenerateError> {
    let target = target_class(reader, owner, end)?;
    let nullable = end.is_optional();

    tracing::debug!(
        association = %end.name,
        target = %target.name,
        upper = ?end.upper,
        nullable,
        "mapping association end"
    );

    match end.upper {
        Upper::One => {
            let names = NameResolver::new(config);
            let join_column = names.persistent_relationship_name(reader, owner, end)?;
            let foreign_key = format!("fk_{}_{}", names.persistent_name(owner), names.persistent_name(target));

            let mut accessor = String::new();
            accessor.push_str("\t@ManyToOne(fetch = FetchType.LAZY)\n");
            accessor.push_str(&format!(
                "\t@JoinColumn(name = \"{join_column}\", nullable = {nullable}, foreignKey = @ForeignKey(name = \"{foreign_key}\"))\n"
            ));
            accessor.push_str(&getter_setter(&target.name, &end.name));

            out.push_field(field_declaration(&target.name, &end.name));
            out.push_accessor(accessor);
        }
        Upper::Many => {
            let opposite = end.opposite.as_deref().ok_or_else(|| GenerateError::MissingOpposite {
                class: owner.name.clone(),
                end: end.name.clone(),
            })?;
            let list = format!("List<{}>", target.name);

            let mut accessor = String::new();
            accessor.push_str(&format!("\t@OneToMany(fetch = FetchType.LAZY, mappedBy = \"{opposite}\")\n"));
            accessor.push_str(&getter_setter(&list, &end.name));

            out.push_field(format!(
                "\tprivate {list} {} = new ArrayList<{}>();\n",
                end.name, target.name
            ));
            out.push_accessor(accessor);
        }
    }

    Ok(())
}
