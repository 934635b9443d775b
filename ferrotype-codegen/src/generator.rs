//! Whole-document generation.
//!
//! [`Generator`] walks one schema document and fills a [`TypeRegistry`]:
//! the root first, then every `$defs` entry in sorted order. Each
//! top-level node becomes exactly one named declaration:
//!
//! - untyped nodes carrying applicator keywords become envelopes,
//! - closed objects become structs named after the definition,
//! - everything else becomes a `pub type` alias of its mapped shape.
//!
//! Rendering happens only after the whole document has mapped, so a
//! resolution failure never produces partial output.

use ferrotype_schema::{Resolver, SchemaNode};
use tracing::{debug, info};

use crate::error::CodegenError;
use crate::mapper::Mapper;
use crate::naming;
use crate::registry::{Declaration, TypeRegistry};
use crate::rust;

/// Generates Rust declarations for one schema document.
pub struct Generator<'a> {
    root: &'a SchemaNode,
    package: String,
}

impl<'a> Generator<'a> {
    /// Creates a generator for `root`, labelling output with `package`.
    #[must_use]
    pub fn new(root: &'a SchemaNode, package: impl Into<String>) -> Self {
        Self {
            root,
            package: package.into(),
        }
    }

    /// Maps the document and renders the generated module source.
    ///
    /// # Errors
    /// Returns `CodegenError::Resolve` when any reference in the
    /// document is unsupported, dangling or cyclic.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut registry = TypeRegistry::new();
        let mapper = Mapper::new(self.root);
        let resolver = Resolver::new(self.root);

        // Root and definition names are spoken for before anything maps,
        // so a nested struct synthesized at a definition's own path
        // cannot take the name its declaration needs.
        registry.reserve(naming::type_name("root"));
        for name in self.root.defs().keys() {
            registry.reserve(naming::type_name(name));
        }

        self.declare(&mapper, &resolver, &mut registry, "root", self.root)?;
        for (name, node) in self.root.defs() {
            debug!(definition = %name, "mapping definition");
            self.declare(&mapper, &resolver, &mut registry, name, node)?;
        }

        let source = rust::render_module(&registry, &self.package);
        info!(
            declarations = registry.len(),
            package = %self.package,
            "generated type declarations"
        );
        Ok(source)
    }

    /// Declares one top-level node under `raw_name`.
    ///
    /// The envelope check runs before everything else: an untyped node
    /// carrying applicator keywords keeps its payload raw even when one
    /// of its branches would unwrap during recursive mapping.
    fn declare(
        &self,
        mapper: &Mapper<'a>,
        resolver: &Resolver<'a>,
        registry: &mut TypeRegistry,
        raw_name: &str,
        node: &'a SchemaNode,
    ) -> Result<(), CodegenError> {
        let name = naming::type_name(raw_name);
        let doc = node.description().map(str::to_owned);

        if node.reference().is_none() && node.effective_kind().is_none() && node.has_combinators()
        {
            let mut targets = Vec::new();
            for branch in node.combinator_branches() {
                if let Some(reference) = branch.reference() {
                    let (target_name, _) = resolver.terminal(reference)?;
                    let target = naming::type_name(target_name);
                    if !targets.contains(&target) {
                        targets.push(target);
                    }
                }
            }
            registry.push_declaration(Declaration::Envelope { name, doc, targets });
            return Ok(());
        }

        if node.is_closed_object() {
            let fields = mapper.struct_fields(node, &[raw_name], registry)?;
            registry.push_declaration(Declaration::Struct { name, doc, fields });
            return Ok(());
        }

        let descriptor = mapper.map(node, true, &[raw_name], registry)?;
        registry.push_declaration(Declaration::Alias {
            name,
            doc,
            descriptor,
        });
        Ok(())
    }
}
