//! Language-neutral type descriptors.
//!
//! The mapper lowers schema nodes into [`TypeDescriptor`] values; the Rust
//! renderers turn them into declaration text. Struct bodies live in the
//! registry's declarations, so a descriptor refers to them by name.

/// Scalar leaf of a mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// The unit type, for `null`-typed nodes.
    Unit,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int64,
    /// Decimal-preserving number.
    Number,
    /// UTF-8 string.
    Str,
    /// Raw, undecoded payload for untyped nodes.
    Raw,
}

/// Shape of a mapped type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A scalar leaf.
    Scalar(ScalarKind),
    /// An ordered sequence of one element type.
    Sequence(Box<TypeDescriptor>),
    /// A string-keyed mapping of one value type.
    Mapping(Box<TypeDescriptor>),
    /// A reference to a named declaration.
    NamedReference(String),
    /// An explicitly absent-or-present wrapper.
    Optional(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Wraps `inner` in `Optional`.
    ///
    /// Idempotent: an already optional descriptor is returned unchanged,
    /// so nested wrapping never produces `Optional(Optional(..))`.
    #[must_use]
    pub fn optional(inner: TypeDescriptor) -> TypeDescriptor {
        match inner {
            already @ TypeDescriptor::Optional(_) => already,
            other => TypeDescriptor::Optional(Box::new(other)),
        }
    }

    /// Returns true for `Optional` descriptors.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeDescriptor::Optional(_))
    }
}

/// One field of a generated struct declaration.
#[derive(Debug, Clone, Eq)]
pub struct FieldDescriptor {
    /// Rust field identifier.
    pub name: String,
    /// Property name verbatim; the serialization tag.
    pub wire_name: String,
    /// Rule-binding key: the property name lowercased with all
    /// non-alphanumerics stripped.
    pub binding_name: String,
    /// Shape of the field's type.
    pub descriptor: TypeDescriptor,
    /// Whether the property is listed in `required`.
    pub required: bool,
    /// Doc text from the property's `description`, if any.
    pub doc: Option<String>,
}

// Structural equality drives declaration dedup; `doc` is an annotation
// and does not participate.
impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.wire_name == other.wire_name
            && self.binding_name == other.binding_name
            && self.descriptor == other.descriptor
            && self.required == other.required
    }
}
