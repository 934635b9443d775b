//! Declaration registry: emission order and structural dedup.

use crate::descriptor::{FieldDescriptor, TypeDescriptor};

/// One generated declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A struct declaration for a closed object.
    Struct {
        /// Type name.
        name: String,
        /// Doc text, if any.
        doc: Option<String>,
        /// Fields in lexicographic property order.
        fields: Vec<FieldDescriptor>,
    },
    /// A `pub type` alias.
    Alias {
        /// Type name.
        name: String,
        /// Doc text, if any.
        doc: Option<String>,
        /// Shape the alias points at.
        descriptor: TypeDescriptor,
    },
    /// A combinator envelope carrying a raw payload.
    Envelope {
        /// Type name.
        name: String,
        /// Doc text, if any.
        doc: Option<String>,
        /// Referenced definitions decodable from the payload, in
        /// combinator-branch order with duplicates dropped.
        targets: Vec<String>,
    },
}

impl Declaration {
    /// Name of the declared type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Struct { name, .. } | Self::Alias { name, .. } | Self::Envelope { name, .. } => {
                name
            }
        }
    }
}

/// Registry of declarations in emission order.
///
/// The driver pushes the root and definition declarations in emission
/// order; synthesized nested structs are interned into a second list that
/// is emitted after them, in first-registration order.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    named: Vec<Declaration>,
    nested: Vec<Declaration>,
    reserved: Vec<String>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `name` for an upcoming root or definition declaration.
    ///
    /// A reserved name is off limits to synthesized nested structs even
    /// before its declaration is pushed, so a definition whose body maps
    /// an inline object at the definition's own path cannot lose its
    /// name to that object.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.reserved.push(name.into());
    }

    /// Adds a root or definition declaration under its own name.
    ///
    /// Definitions are never deduplicated: a definition keeps its name
    /// even when another declaration has an identical shape.
    pub fn push_declaration(&mut self, declaration: Declaration) {
        self.named.push(declaration);
    }

    /// Interns a synthesized nested struct.
    ///
    /// When a previously registered struct declaration (definition or
    /// nested alike) has a structurally identical shape, its name is
    /// reused and nothing new is registered. Otherwise the struct is
    /// registered under `name`, suffixed with a counter if that name is
    /// already taken by a different shape or reserved for a pending
    /// declaration.
    ///
    /// # Returns
    /// The name the struct is known under.
    pub fn intern_nested(
        &mut self,
        name: String,
        doc: Option<String>,
        fields: Vec<FieldDescriptor>,
    ) -> String {
        for declaration in self.declarations() {
            if let Declaration::Struct {
                name: existing,
                fields: existing_fields,
                ..
            } = declaration
            {
                if *existing_fields == fields {
                    return existing.clone();
                }
            }
        }

        let mut unique = name.clone();
        let mut counter = 2;
        while self.is_taken(&unique) {
            unique = format!("{name}{counter}");
            counter += 1;
        }

        self.nested.push(Declaration::Struct {
            name: unique.clone(),
            doc,
            fields,
        });
        unique
    }

    fn is_taken(&self, name: &str) -> bool {
        self.lookup(name).is_some() || self.reserved.iter().any(|reserved| reserved == name)
    }

    /// Looks up a declaration by type name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Declaration> {
        self.declarations()
            .find(|declaration| declaration.name() == name)
    }

    /// All declarations in emission order: root and definitions first,
    /// then synthesized nested structs in first-registration order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.named.iter().chain(self.nested.iter())
    }

    /// Number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.named.len() + self.nested.len()
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.nested.is_empty()
    }
}
