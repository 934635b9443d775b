//! Rust source rendering for registered declarations.
//!
//! [`render_module`] assembles one self-contained source file: a
//! generated-code marker, module docs naming the schema package, a serde
//! import when any declaration derives it, every declaration in registry
//! order, and the default-value helpers the declarations referenced.

pub mod envelopes;
pub mod structs;
pub mod types;

pub use structs::StructGenerator;

use crate::registry::{Declaration, TypeRegistry};

/// Tracks which generated helper functions the declarations need.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelperSet {
    /// Emit `raw_null` for absent raw payload fields and envelope
    /// defaults.
    pub raw_null: bool,
    /// Emit `number_zero` for absent decimal fields.
    pub number_zero: bool,
}

/// Renders the registry into one Rust module.
#[must_use]
pub fn render_module(registry: &TypeRegistry, package: &str) -> String {
    let mut helpers = HelperSet::default();
    let mut any_derives = false;
    let mut body = String::new();
    let struct_generator = StructGenerator::new(registry);

    for declaration in registry.declarations() {
        body.push('\n');
        match declaration {
            Declaration::Struct { name, doc, fields } => {
                any_derives = true;
                body.push_str(&struct_generator.generate(
                    name,
                    doc.as_deref(),
                    fields,
                    &mut helpers,
                ));
            }
            Declaration::Alias {
                name,
                doc,
                descriptor,
            } => {
                body.push_str(&types::generate_alias(name, doc.as_deref(), descriptor));
            }
            Declaration::Envelope { name, doc, targets } => {
                any_derives = true;
                helpers.raw_null = true;
                body.push_str(&envelopes::generate_envelope(name, doc.as_deref(), targets));
            }
        }
    }

    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("// Code generated by ferrotype. DO NOT EDIT.\n\n");
    out.push_str(&format!(
        "//! Generated types for the `{package}` schema package.\n"
    ));
    out.push_str("//!\n");
    out.push_str("//! Decimal numbers decode as [`serde_json::Number`]; serde_json's\n");
    out.push_str("//! `arbitrary_precision` feature preserves their full precision. Raw\n");
    out.push_str("//! payload carriers rely on the `raw_value` feature.\n");
    if any_derives {
        out.push_str("\nuse serde::{Deserialize, Serialize};\n");
    }
    out.push_str(&body);
    if helpers.raw_null {
        out.push('\n');
        push_raw_null_helper(&mut out);
    }
    if helpers.number_zero {
        out.push('\n');
        push_number_zero_helper(&mut out);
    }
    out
}

/// Pushes doc-comment lines for `doc`, one `///` line per input line.
pub(crate) fn push_doc(out: &mut String, indent: &str, doc: Option<&str>) {
    let Some(text) = doc else {
        return;
    };
    for line in text.lines() {
        if line.is_empty() {
            out.push_str(&format!("{indent}///\n"));
        } else {
            out.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}

fn push_raw_null_helper(out: &mut String) {
    out.push_str("/// Default value for raw payload fields absent from the input.\n");
    out.push_str("fn raw_null() -> Box<serde_json::value::RawValue> {\n");
    out.push_str("    serde_json::value::RawValue::from_string(\"null\".to_owned())\n");
    out.push_str("        .expect(\"null is valid JSON\")\n");
    out.push_str("}\n");
}

fn push_number_zero_helper(out: &mut String) {
    out.push_str("/// Default value for absent decimal fields.\n");
    out.push_str("fn number_zero() -> serde_json::Number {\n");
    out.push_str("    serde_json::Number::from(0)\n");
    out.push_str("}\n");
}
