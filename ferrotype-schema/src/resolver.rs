//! Local `$defs` reference resolution.
//!
//! The supported reference syntax is exactly `#/$defs/<name>` with a
//! single path segment. The resolver answers what schema a reference
//! denotes; recursion into the target's contents belongs to the mapper.
//! Chains of pure references (a definition that is itself only a `$ref`)
//! are followed eagerly with an ordered visited list, so cycles surface
//! as errors instead of unbounded walks.

use std::collections::BTreeMap;

use crate::error::ResolveError;
use crate::model::SchemaNode;

/// Prefix of every supported reference form.
const DEFS_PREFIX: &str = "#/$defs/";

/// Extracts the definition name from a reference string.
///
/// # Arguments
/// * `reference` - The `$ref` value, verbatim
///
/// # Returns
/// The bare definition name.
///
/// # Errors
/// Returns `ResolveError::UnsupportedReference` for absolute URIs,
/// anchors, non-`$defs` pointers, and multi-segment pointers.
pub fn def_name(reference: &str) -> Result<&str, ResolveError> {
    let name = reference
        .strip_prefix(DEFS_PREFIX)
        .ok_or_else(|| ResolveError::unsupported(reference))?;
    if name.is_empty() || name.contains('/') {
        return Err(ResolveError::unsupported(reference));
    }
    Ok(name)
}

/// Resolves references against one document's `$defs` map.
pub struct Resolver<'a> {
    defs: &'a BTreeMap<String, SchemaNode>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver for the document rooted at `root`.
    #[must_use]
    pub fn new(root: &'a SchemaNode) -> Self {
        Self { defs: root.defs() }
    }

    /// Resolves a reference one hop to its definition.
    ///
    /// # Errors
    /// Returns `ResolveError::UnsupportedReference` for unsupported
    /// syntax and `ResolveError::DanglingReference` when no definition
    /// with that name exists.
    pub fn target(&self, reference: &str) -> Result<&'a SchemaNode, ResolveError> {
        let name = def_name(reference)?;
        self.defs
            .get(name)
            .ok_or_else(|| ResolveError::dangling(reference))
    }

    /// Follows a chain of pure references to the first node that is not
    /// itself a reference.
    ///
    /// # Arguments
    /// * `reference` - The `$ref` value at the start of the chain
    ///
    /// # Returns
    /// The first-hop definition name together with the terminal node. The
    /// name is what a generated declaration refers to; the terminal node
    /// is what shape queries run against.
    ///
    /// # Errors
    /// Returns `ResolveError::ReferenceCycle` when the chain revisits a
    /// definition, plus the one-hop errors of [`Resolver::target`].
    pub fn terminal(
        &self,
        reference: &'a str,
    ) -> Result<(&'a str, &'a SchemaNode), ResolveError> {
        let first = def_name(reference)?;
        let mut visited = vec![first];
        let mut node = self
            .defs
            .get(first)
            .ok_or_else(|| ResolveError::dangling(reference))?;

        while let Some(next) = node.reference() {
            let name = def_name(next)?;
            if visited.contains(&name) {
                visited.push(name);
                return Err(ResolveError::cycle(&visited));
            }
            visited.push(name);
            node = self
                .defs
                .get(name)
                .ok_or_else(|| ResolveError::dangling(next))?;
        }

        Ok((first, node))
    }
}
