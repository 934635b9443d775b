//! Schema document loading.
//!
//! The loader is the only place a schema document enters the system. After
//! it returns, boolean schemas are already normalized (see
//! [`crate::model`]) and every later stage works on borrowed
//! [`SchemaNode`] trees.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::model::SchemaNode;

/// Parses a schema document from a JSON string.
///
/// # Arguments
/// * `input` - JSON text of the schema document
///
/// # Returns
/// The parsed root node.
///
/// # Errors
/// Returns `LoadError::Json` if the document is not valid JSON or uses an
/// unknown type name.
pub fn parse_schema(input: &str) -> Result<SchemaNode, LoadError> {
    Ok(serde_json::from_str(input)?)
}

/// Loads and parses a schema document from a file.
///
/// # Arguments
/// * `path` - Path to the schema file
///
/// # Returns
/// The parsed root node.
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::Json`
/// if its contents are not a valid schema document.
pub fn load_schema(path: &Path) -> Result<SchemaNode, LoadError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| LoadError::io(path.display().to_string(), source))?;
    parse_schema(&contents)
}
