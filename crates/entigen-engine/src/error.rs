//! Generation errors
//!
//! Every variant names the class (and member) to fix in the source model.

use std::path::PathBuf;

/// Errors that abort generation of a single class
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Class '{0}' is not in the model")]
    ClassNotFound(String),

    #[error("Association end '{class}.{end}' targets unknown class '{target}'")]
    UnknownClass {
        class: String,
        end: String,
        target: String,
    },

    #[error("Association end '{class}.{end}' needs an identifier attribute on '{target}' to name its join column")]
    MissingIdentifier {
        class: String,
        end: String,
        target: String,
    },

    #[error("Collection end '{class}.{end}' has no opposite end to map it by")]
    MissingOpposite { class: String, end: String },

    #[error("Failed to read header {path}: {source}")]
    Header {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write class '{class}': {source}")]
    Io {
        class: String,
        #[source]
        source: std::io::Error,
    },
}
