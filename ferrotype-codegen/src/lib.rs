//! # Ferrotype Codegen
//!
//! Rust code generation for JSON Schema documents:
//!
//! - Recursive schema-to-descriptor mapping with nullable-union unwrap
//! - Deterministic naming and structural deduplication of nested types
//! - Struct, alias and envelope rendering with serde attributes
//! - File conveniences that write output only after the whole document
//!   has mapped successfully

pub mod descriptor;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod naming;
pub mod registry;
pub mod rust;

pub use descriptor::{FieldDescriptor, ScalarKind, TypeDescriptor};
pub use error::CodegenError;
pub use generator::Generator;
pub use mapper::Mapper;
pub use registry::{Declaration, TypeRegistry};

use std::fs;
use std::path::Path;

/// Generates module source from schema text.
///
/// # Arguments
/// * `input` - JSON Schema document text
/// * `package` - Package label written into the module docs
///
/// # Returns
/// The generated Rust source.
///
/// # Errors
/// Returns `CodegenError::Load` for malformed documents and
/// `CodegenError::Resolve` for reference errors.
pub fn generate_from_json(input: &str, package: &str) -> Result<String, CodegenError> {
    let root = ferrotype_schema::parse_schema(input)?;
    Generator::new(&root, package).generate()
}

/// Generates module source from a schema file.
///
/// # Errors
/// Returns `CodegenError::Load` when the file is unreadable or
/// malformed and `CodegenError::Resolve` for reference errors.
pub fn generate_from_file(schema: &Path, package: &str) -> Result<String, CodegenError> {
    let root = ferrotype_schema::load_schema(schema)?;
    Generator::new(&root, package).generate()
}

/// Generates module source from a schema file and writes it to `out`.
///
/// The output file is touched only after the whole document has mapped,
/// so a failed run never leaves partial output behind.
///
/// # Errors
/// Returns `CodegenError::OutputWrite` when the destination cannot be
/// written, in addition to the load and reference errors of
/// [`generate_from_file`].
pub fn generate_to_file(schema: &Path, out: &Path, package: &str) -> Result<(), CodegenError> {
    let generated = generate_from_file(schema, package)?;
    fs::write(out, &generated)
        .map_err(|err| CodegenError::output_write(out.display().to_string(), err))?;
    Ok(())
}
