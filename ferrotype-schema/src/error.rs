//! Error types for schema loading and reference resolution.

use thiserror::Error;

/// Error type for loading a schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the schema file failed.
    #[error("failed to read schema file '{path}': {source}")]
    Io {
        /// Path of the schema file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON or not a valid schema.
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type for `$ref` resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The reference uses a form other than `#/$defs/<name>`.
    #[error(
        "unsupported reference '{reference}': only local '#/$defs/<name>' references are supported"
    )]
    UnsupportedReference {
        /// The offending reference string.
        reference: String,
    },

    /// The reference names a definition that does not exist.
    #[error("reference '{reference}' does not match any definition in $defs")]
    DanglingReference {
        /// The offending reference string.
        reference: String,
    },

    /// Following a chain of references revisited a definition.
    #[error("reference cycle detected: {path}")]
    ReferenceCycle {
        /// Path of the cycle, definition names joined by arrows.
        path: String,
    },
}

impl LoadError {
    /// Creates an IO error carrying the offending path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl ResolveError {
    /// Creates an unsupported-reference error.
    pub fn unsupported(reference: impl Into<String>) -> Self {
        Self::UnsupportedReference {
            reference: reference.into(),
        }
    }

    /// Creates a dangling-reference error.
    pub fn dangling(reference: impl Into<String>) -> Self {
        Self::DanglingReference {
            reference: reference.into(),
        }
    }

    /// Creates a reference-cycle error from the visited definition names.
    pub fn cycle(names: &[&str]) -> Self {
        Self::ReferenceCycle {
            path: names.join(" -> "),
        }
    }
}
