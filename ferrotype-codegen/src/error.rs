//! Error types for code generation.

use ferrotype_schema::{LoadError, ResolveError};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Loading the schema document failed.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Resolving a reference failed.
    #[error("reference error: {0}")]
    Resolve(#[from] ResolveError),

    /// Writing the generated source file failed.
    #[error("failed to write generated code to '{path}': {source}")]
    OutputWrite {
        /// Path of the output file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates an output-write error carrying the offending path.
    pub fn output_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
