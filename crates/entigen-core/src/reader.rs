//! Model reader capability
//!
//! The generator never reaches into a host modeling environment directly.
//! Every mapping function receives a reader explicitly.

use crate::model::ClassDescriptor;

/// Read-only access to the classes of a materialized model
pub trait ModelReader {
    /// All classes, in stable declaration order
    fn classes(&self) -> &[ClassDescriptor];

    /// Look up a class by name
    fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes().iter().find(|c| c.name == name)
    }
}
