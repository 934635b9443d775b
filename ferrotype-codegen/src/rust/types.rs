//! Rust type text for descriptors and alias declarations.

use crate::descriptor::{ScalarKind, TypeDescriptor};
use crate::rust::push_doc;

/// Returns the Rust type for a scalar kind.
#[must_use]
pub fn scalar_text(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Unit => "()",
        ScalarKind::Bool => "bool",
        ScalarKind::Int64 => "i64",
        ScalarKind::Number => "serde_json::Number",
        ScalarKind::Str => "String",
        ScalarKind::Raw => "Box<serde_json::value::RawValue>",
    }
}

/// Returns the Rust type text for a descriptor.
///
/// Optional named references box their target so that self-referential
/// shapes stay finite.
#[must_use]
pub fn type_text(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::Scalar(kind) => scalar_text(*kind).to_string(),
        TypeDescriptor::Sequence(element) => format!("Vec<{}>", type_text(element)),
        TypeDescriptor::Mapping(value) => {
            format!("std::collections::BTreeMap<String, {}>", type_text(value))
        }
        TypeDescriptor::NamedReference(name) => name.clone(),
        TypeDescriptor::Optional(inner) => match inner.as_ref() {
            TypeDescriptor::NamedReference(name) => format!("Option<Box<{name}>>"),
            other => format!("Option<{}>", type_text(other)),
        },
    }
}

/// Renders a `pub type` alias declaration.
#[must_use]
pub fn generate_alias(name: &str, doc: Option<&str>, descriptor: &TypeDescriptor) -> String {
    let mut out = String::new();
    push_doc(&mut out, "", doc);
    out.push_str(&format!("pub type {name} = {};\n", type_text(descriptor)));
    out
}
