//! Scalar type to Java type mapping

use entigen_core::ScalarType;

/// Java type name used for the temporal marker check
pub const DATE_TYPE: &str = "Date";

/// Java field type for a scalar attribute
///
/// Only `LONG` and `INTEGER` collapse to primitives when the column is not
/// nullable. `BOOLEAN` and `FLOAT` stay boxed either way.
pub fn java_type(scalar: ScalarType, nullable: bool) -> &'static str {
    match scalar {
        ScalarType::String => "String",
        ScalarType::Long if nullable => "Long",
        ScalarType::Long => "long",
        ScalarType::Boolean => "Boolean",
        ScalarType::Date => DATE_TYPE,
        ScalarType::Float => "Float",
        ScalarType::Integer if nullable => "Integer",
        ScalarType::Integer => "int",
        ScalarType::ByteArray => "byte[]",
    }
}
