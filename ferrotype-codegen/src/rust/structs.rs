//! Struct declaration rendering.
//!
//! Closed objects become owned structs with `deny_unknown_fields`, one
//! serde `rename` per field carrying the wire name verbatim, and a
//! `FIELD_BINDINGS` table pairing wire names with rule-binding keys.
//! Non-required fields tolerate absence through serde `default` and drop
//! empty values on serialization where the field type has a std empty
//! predicate.

use crate::descriptor::{FieldDescriptor, ScalarKind, TypeDescriptor};
use crate::registry::{Declaration, TypeRegistry};
use crate::rust::{HelperSet, push_doc};
use crate::rust::types::type_text;

/// Renders struct declarations against a registry.
///
/// The registry is consulted to see through alias declarations when
/// choosing default and skip behavior for non-required fields.
pub struct StructGenerator<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> StructGenerator<'a> {
    /// Creates a generator over `registry`.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Renders one struct declaration and its `FIELD_BINDINGS` table.
    #[must_use]
    pub fn generate(
        &self,
        name: &str,
        doc: Option<&str>,
        fields: &[FieldDescriptor],
        helpers: &mut HelperSet,
    ) -> String {
        let mut out = String::new();
        push_doc(&mut out, "", doc);
        out.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
        out.push_str("#[serde(deny_unknown_fields)]\n");

        if fields.is_empty() {
            out.push_str(&format!("pub struct {name} {{}}\n"));
        } else {
            out.push_str(&format!("pub struct {name} {{\n"));
            for field in fields {
                push_doc(&mut out, "    ", field.doc.as_deref());
                out.push_str(&format!("    #[serde({})]\n", self.field_attrs(field, helpers)));
                out.push_str(&format!(
                    "    pub {}: {},\n",
                    field.name,
                    type_text(&field.descriptor)
                ));
            }
            out.push_str("}\n");
        }

        out.push('\n');
        out.push_str(&format!("impl {name} {{\n"));
        out.push_str("    /// Wire name to rule-binding key, in field order.\n");
        if fields.is_empty() {
            out.push_str("    pub const FIELD_BINDINGS: &[(&str, &str)] = &[];\n");
        } else {
            out.push_str("    pub const FIELD_BINDINGS: &[(&str, &str)] = &[\n");
            for field in fields {
                out.push_str(&format!(
                    "        (\"{}\", \"{}\"),\n",
                    field.wire_name, field.binding_name
                ));
            }
            out.push_str("    ];\n");
        }
        out.push_str("}\n");
        out
    }

    fn field_attrs(&self, field: &FieldDescriptor, helpers: &mut HelperSet) -> String {
        let mut attrs = vec![format!("rename = \"{}\"", field.wire_name)];
        if !field.required {
            let resolved = self.resolved(&field.descriptor);
            attrs.push(default_clause(resolved, helpers).to_string());
            if let Some(predicate) = skip_predicate(resolved) {
                attrs.push(format!("skip_serializing_if = \"{predicate}\""));
            }
        }
        attrs.join(", ")
    }

    /// Sees through alias declarations to the shape serde works with.
    fn resolved<'d>(&'d self, descriptor: &'d TypeDescriptor) -> &'d TypeDescriptor {
        let mut current = descriptor;
        while let TypeDescriptor::NamedReference(name) = current {
            match self.registry.lookup(name) {
                Some(Declaration::Alias { descriptor, .. }) => current = descriptor,
                _ => break,
            }
        }
        current
    }
}

fn default_clause(resolved: &TypeDescriptor, helpers: &mut HelperSet) -> &'static str {
    match resolved {
        TypeDescriptor::Scalar(ScalarKind::Number) => {
            helpers.number_zero = true;
            "default = \"number_zero\""
        }
        TypeDescriptor::Scalar(ScalarKind::Raw) => {
            helpers.raw_null = true;
            "default = \"raw_null\""
        }
        _ => "default",
    }
}

fn skip_predicate(resolved: &TypeDescriptor) -> Option<&'static str> {
    match resolved {
        TypeDescriptor::Optional(_) => Some("Option::is_none"),
        TypeDescriptor::Sequence(_) => Some("Vec::is_empty"),
        TypeDescriptor::Mapping(_) => Some("std::collections::BTreeMap::is_empty"),
        TypeDescriptor::Scalar(ScalarKind::Str) => Some("String::is_empty"),
        _ => None,
    }
}
