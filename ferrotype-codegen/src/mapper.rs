//! Recursive schema-to-descriptor mapping.
//!
//! [`Mapper::map`] lowers one schema node into a [`TypeDescriptor`],
//! registering synthesized struct declarations along the way. Rule order
//! is fixed: reference, then nullable-union unwrap, then dispatch on the
//! effective kind. The `required` flag influences exactly two things:
//! `Optional` wrapping of struct-shaped results and the flag recorded on
//! struct fields. Sequence elements and mapping values always recurse as
//! required.

use ferrotype_schema::{Resolver, SchemaNode, TypeKind};

use crate::descriptor::{FieldDescriptor, ScalarKind, TypeDescriptor};
use crate::error::CodegenError;
use crate::naming;
use crate::registry::TypeRegistry;

/// Maps schema nodes into type descriptors against one document.
pub struct Mapper<'a> {
    resolver: Resolver<'a>,
}

impl<'a> Mapper<'a> {
    /// Creates a mapper for the document rooted at `root`.
    #[must_use]
    pub fn new(root: &'a SchemaNode) -> Self {
        Self {
            resolver: Resolver::new(root),
        }
    }

    /// Maps one schema node.
    ///
    /// # Arguments
    /// * `node` - The node to map
    /// * `required` - Whether the surrounding context guarantees presence
    /// * `path` - Access-path segments used to name synthesized structs
    /// * `registry` - Declaration registry for synthesized structs
    ///
    /// # Errors
    /// Returns `CodegenError::Resolve` when a reference is unsupported,
    /// dangling or cyclic.
    pub fn map(
        &self,
        node: &'a SchemaNode,
        required: bool,
        path: &[&str],
        registry: &mut TypeRegistry,
    ) -> Result<TypeDescriptor, CodegenError> {
        if let Some(reference) = node.reference() {
            let (name, terminal) = self.resolver.terminal(reference)?;
            let descriptor = TypeDescriptor::NamedReference(naming::type_name(name));
            return Ok(if !required && terminal.is_closed_object() {
                TypeDescriptor::optional(descriptor)
            } else {
                descriptor
            });
        }

        if let Some(inner) = nullable_branch(node) {
            let descriptor = self.map(inner, true, path, registry)?;
            return Ok(TypeDescriptor::optional(descriptor));
        }

        match node.effective_kind() {
            Some(TypeKind::Null) => Ok(TypeDescriptor::Scalar(ScalarKind::Unit)),
            Some(TypeKind::Boolean) => Ok(TypeDescriptor::Scalar(ScalarKind::Bool)),
            Some(TypeKind::Integer) => Ok(TypeDescriptor::Scalar(ScalarKind::Int64)),
            Some(TypeKind::Number) => Ok(TypeDescriptor::Scalar(ScalarKind::Number)),
            Some(TypeKind::String) => Ok(TypeDescriptor::Scalar(ScalarKind::Str)),
            Some(TypeKind::Array) => {
                let element = match node.items() {
                    Some(items) => self.map(items, true, path, registry)?,
                    None => TypeDescriptor::Scalar(ScalarKind::Raw),
                };
                Ok(TypeDescriptor::Sequence(Box::new(element)))
            }
            Some(TypeKind::Object) => self.map_object(node, required, path, registry),
            None => Ok(TypeDescriptor::Scalar(ScalarKind::Raw)),
        }
    }

    /// Maps the fields of a closed object, in lexicographic property
    /// order.
    ///
    /// # Errors
    /// Propagates reference errors from field schemas.
    pub fn struct_fields(
        &self,
        node: &'a SchemaNode,
        path: &[&str],
        registry: &mut TypeRegistry,
    ) -> Result<Vec<FieldDescriptor>, CodegenError> {
        let mut fields = Vec::with_capacity(node.properties().len());
        for (property, schema) in node.properties() {
            let required = node.is_required(property);
            let mut child_path = path.to_vec();
            child_path.push(property.as_str());
            let descriptor = self.map(schema, required, &child_path, registry)?;
            fields.push(FieldDescriptor {
                name: naming::field_name(property),
                wire_name: property.clone(),
                binding_name: naming::binding_name(property),
                descriptor,
                required,
                doc: schema.description().map(str::to_owned),
            });
        }
        Ok(fields)
    }

    fn map_object(
        &self,
        node: &'a SchemaNode,
        required: bool,
        path: &[&str],
        registry: &mut TypeRegistry,
    ) -> Result<TypeDescriptor, CodegenError> {
        if node.is_closed_object() {
            let fields = self.struct_fields(node, path, registry)?;
            let name = registry.intern_nested(
                naming::path_type_name(path),
                node.description().map(str::to_owned),
                fields,
            );
            let reference = TypeDescriptor::NamedReference(name);
            return Ok(if required {
                reference
            } else {
                TypeDescriptor::optional(reference)
            });
        }

        if node.forbids_additional_properties() {
            if let Some(pattern_value) = node.single_pattern_property() {
                let value = self.map(pattern_value, true, path, registry)?;
                return Ok(TypeDescriptor::Mapping(Box::new(value)));
            }
        }

        let value = match node.additional_properties() {
            Some(additional) => self.map(additional, true, path, registry)?,
            None => TypeDescriptor::Scalar(ScalarKind::Raw),
        };
        Ok(TypeDescriptor::Mapping(Box::new(value)))
    }
}

/// Returns the non-null branch of a two-branch nullable union.
///
/// Checks `anyOf` first, then `oneOf`. A union qualifies only with
/// exactly two branches of which exactly one has effective kind `null`.
/// `allOf` never unwraps.
fn nullable_branch(node: &SchemaNode) -> Option<&SchemaNode> {
    for branches in [node.any_of(), node.one_of()] {
        if let [first, second] = branches {
            match (first.is_null_kind(), second.is_null_kind()) {
                (true, false) => return Some(second),
                (false, true) => return Some(first),
                _ => {}
            }
        }
    }
    None
}
