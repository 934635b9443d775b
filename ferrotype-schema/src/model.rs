//! JSON Schema document model.
//!
//! [`SchemaNode`] is one node of a parsed schema tree. It accepts the full
//! keyword set of the supported 2020-12 subset so that loading a
//! contract-bearing schema never fails, but only the structural keywords
//! drive generation; validation keywords (`pattern`, `minimum`, ...) belong
//! to the runtime rule engine and are retained without being consulted.
//!
//! Boolean schemas are normalized at parse time: `true` becomes the empty
//! node (matches anything) and `false` becomes a node whose `not` list
//! contains the empty node (matches nothing). Everything downstream sees
//! only [`SchemaNode`] values.
//!
//! All keyword maps are ordered maps, so the in-memory document is
//! independent of JSON key order. This is the root of the generator's
//! byte-determinism guarantee.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde_json::{Number, Value};

/// The type names of the supported dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// The `null` type.
    Null,
    /// The `boolean` type.
    Boolean,
    /// The `object` type.
    Object,
    /// The `array` type.
    Array,
    /// The `number` type.
    Number,
    /// The `string` type.
    String,
    /// The `integer` type.
    Integer,
}

impl TypeKind {
    /// Returns the JSON Schema name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Number => "number",
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// One node of a schema document.
///
/// Constructed only by deserialization (see [`crate::loader`]). Accessors
/// expose the structural keywords the generator consults; validation
/// keywords are parsed but have no accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    kw: Box<Keywords>,
}

/// The raw keyword set of a schema object.
///
/// Unknown keywords are ignored, matching the dialect's treatment of
/// unrecognized annotations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Keywords {
    // Identity and reference keywords.
    #[serde(rename = "$schema")]
    schema: Option<String>,
    #[serde(rename = "$id")]
    id: Option<String>,
    #[serde(rename = "$ref")]
    ref_: Option<String>,
    #[serde(rename = "$defs")]
    defs: BTreeMap<String, SchemaNode>,
    #[serde(rename = "$comment")]
    comment: Option<String>,

    // Type and literal keywords.
    #[serde(rename = "type", deserialize_with = "one_or_many")]
    types: Vec<TypeKind>,
    #[serde(rename = "enum")]
    enum_: Vec<Value>,
    #[serde(rename = "const")]
    const_: Option<Value>,

    // Object keywords.
    properties: BTreeMap<String, SchemaNode>,
    pattern_properties: BTreeMap<String, SchemaNode>,
    additional_properties: Option<SchemaNode>,
    unevaluated_properties: Option<SchemaNode>,
    property_names: Option<SchemaNode>,
    required: BTreeSet<String>,

    // Array keywords.
    items: Option<SchemaNode>,
    prefix_items: Vec<SchemaNode>,
    unevaluated_items: Option<SchemaNode>,
    contains: Option<SchemaNode>,

    // Combinator keywords.
    all_of: Vec<SchemaNode>,
    any_of: Vec<SchemaNode>,
    one_of: Vec<SchemaNode>,
    #[serde(deserialize_with = "one_or_many")]
    not: Vec<SchemaNode>,
    #[serde(rename = "if")]
    if_: Option<SchemaNode>,
    #[serde(rename = "then")]
    then_: Option<SchemaNode>,
    #[serde(rename = "else")]
    else_: Option<SchemaNode>,
    dependent_schemas: BTreeMap<String, SchemaNode>,

    // Annotation keywords.
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "default")]
    default_: Option<Value>,
    examples: Vec<Value>,
    deprecated: Option<bool>,
    read_only: Option<bool>,
    write_only: Option<bool>,

    // Validation keywords, enforced by the runtime rule engine, never
    // consulted here.
    format: Option<String>,
    pattern: Option<String>,
    minimum: Option<Number>,
    maximum: Option<Number>,
    exclusive_minimum: Option<Number>,
    exclusive_maximum: Option<Number>,
    multiple_of: Option<Number>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    min_items: Option<u64>,
    max_items: Option<u64>,
    unique_items: Option<bool>,
    min_properties: Option<u64>,
    max_properties: Option<u64>,
    min_contains: Option<u64>,
    max_contains: Option<u64>,
    dependent_required: BTreeMap<String, Vec<String>>,
}

/// Accepts either a single value or a list of values for a keyword.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = SchemaNode;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a schema object or boolean")
            }

            fn visit_bool<E>(self, matches_anything: bool) -> Result<SchemaNode, E>
            where
                E: de::Error,
            {
                Ok(if matches_anything {
                    SchemaNode::default()
                } else {
                    SchemaNode::never()
                })
            }

            fn visit_map<A>(self, map: A) -> Result<SchemaNode, A::Error>
            where
                A: MapAccess<'de>,
            {
                let kw = Keywords::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(SchemaNode { kw: Box::new(kw) })
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

impl SchemaNode {
    /// The normalized form of the `false` schema.
    fn never() -> Self {
        let kw = Keywords {
            not: vec![SchemaNode::default()],
            ..Keywords::default()
        };
        Self { kw: Box::new(kw) }
    }

    /// Returns true if this is the empty node, i.e. the normalized `true`
    /// schema that matches anything.
    #[must_use]
    pub fn is_true(&self) -> bool {
        *self.kw == Keywords::default()
    }

    /// Returns true if this node matches nothing, i.e. the normalized
    /// `false` schema (or any node with a `not` branch matching anything).
    #[must_use]
    pub fn is_false(&self) -> bool {
        self.kw.not.iter().any(SchemaNode::is_true)
    }

    /// The `$ref` keyword, verbatim.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.kw.ref_.as_deref()
    }

    /// The `$defs` map.
    #[must_use]
    pub fn defs(&self) -> &BTreeMap<String, SchemaNode> {
        &self.kw.defs
    }

    /// The `properties` map, in lexicographic key order.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, SchemaNode> {
        &self.kw.properties
    }

    /// The `patternProperties` map.
    #[must_use]
    pub fn pattern_properties(&self) -> &BTreeMap<String, SchemaNode> {
        &self.kw.pattern_properties
    }

    /// The `additionalProperties` schema, if present.
    #[must_use]
    pub fn additional_properties(&self) -> Option<&SchemaNode> {
        self.kw.additional_properties.as_ref()
    }

    /// The `items` schema, if present.
    #[must_use]
    pub fn items(&self) -> Option<&SchemaNode> {
        self.kw.items.as_ref()
    }

    /// The `required` property names.
    #[must_use]
    pub fn required(&self) -> &BTreeSet<String> {
        &self.kw.required
    }

    /// Returns true if `name` is listed in `required`.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.kw.required.contains(name)
    }

    /// The `anyOf` branches.
    #[must_use]
    pub fn any_of(&self) -> &[SchemaNode] {
        &self.kw.any_of
    }

    /// The `oneOf` branches.
    #[must_use]
    pub fn one_of(&self) -> &[SchemaNode] {
        &self.kw.one_of
    }

    /// The `description` annotation, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.kw.description.as_deref()
    }

    /// Classifies this node into its effective type kind.
    ///
    /// Returns the kind named by `type` when it names exactly one; `None`
    /// (untyped) when it names several. With no `type`, the kind is
    /// inferred from the `const` value, else from the first `enum`
    /// literal; a `null` `const` falls through to `enum`. A `null`
    /// literal and an empty `enum` infer nothing.
    #[must_use]
    pub fn effective_kind(&self) -> Option<TypeKind> {
        match self.kw.types.as_slice() {
            [single] => Some(*single),
            [] => self
                .kw
                .const_
                .as_ref()
                .and_then(literal_kind)
                .or_else(|| self.kw.enum_.first().and_then(literal_kind)),
            _ => None,
        }
    }

    /// Returns true if this node's effective kind is `null`.
    #[must_use]
    pub fn is_null_kind(&self) -> bool {
        self.effective_kind() == Some(TypeKind::Null)
    }

    /// Returns true if `additionalProperties` is present and is the
    /// normalized `false` schema.
    #[must_use]
    pub fn forbids_additional_properties(&self) -> bool {
        self.kw
            .additional_properties
            .as_ref()
            .is_some_and(SchemaNode::is_false)
    }

    /// Returns true for a closed object: effective kind `object`,
    /// additional properties forbidden and no pattern properties. Closed
    /// objects are the only nodes that become struct declarations.
    #[must_use]
    pub fn is_closed_object(&self) -> bool {
        self.effective_kind() == Some(TypeKind::Object)
            && self.forbids_additional_properties()
            && self.kw.pattern_properties.is_empty()
    }

    /// Returns the value schema of `patternProperties` when it has exactly
    /// one entry. The pattern itself is never consulted.
    #[must_use]
    pub fn single_pattern_property(&self) -> Option<&SchemaNode> {
        if self.kw.pattern_properties.len() == 1 {
            self.kw.pattern_properties.values().next()
        } else {
            None
        }
    }

    /// Returns true if this node carries any combinator keyword relevant
    /// to envelope detection (`allOf`, `anyOf`, `oneOf`, `then`, `else`,
    /// `dependentSchemas`).
    #[must_use]
    pub fn has_combinators(&self) -> bool {
        !self.kw.all_of.is_empty()
            || !self.kw.any_of.is_empty()
            || !self.kw.one_of.is_empty()
            || self.kw.then_.is_some()
            || self.kw.else_.is_some()
            || !self.kw.dependent_schemas.is_empty()
    }

    /// All combinator branches in fixed order: `allOf`, `anyOf`, `oneOf`,
    /// `then`, `else`, then `dependentSchemas` values in key order.
    #[must_use]
    pub fn combinator_branches(&self) -> Vec<&SchemaNode> {
        let mut branches = Vec::new();
        branches.extend(self.kw.all_of.iter());
        branches.extend(self.kw.any_of.iter());
        branches.extend(self.kw.one_of.iter());
        if let Some(then) = &self.kw.then_ {
            branches.push(then);
        }
        if let Some(else_) = &self.kw.else_ {
            branches.push(else_);
        }
        branches.extend(self.kw.dependent_schemas.values());
        branches
    }
}

/// Kind implied by a `const` or `enum` literal.
fn literal_kind(value: &Value) -> Option<TypeKind> {
    match value {
        Value::Bool(_) => Some(TypeKind::Boolean),
        Value::Object(_) => Some(TypeKind::Object),
        Value::Array(_) => Some(TypeKind::Array),
        Value::Number(_) => Some(TypeKind::Number),
        Value::String(_) => Some(TypeKind::String),
        Value::Null => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> SchemaNode {
        serde_json::from_str(input).expect("Failed to parse schema")
    }

    #[test]
    fn test_boolean_schemas_normalize() {
        let always = parse("true");
        assert!(always.is_true());
        assert!(!always.is_false());

        let never = parse("false");
        assert!(never.is_false());
        assert!(!never.is_true());
        assert_eq!(never.effective_kind(), None);
    }

    #[test]
    fn test_type_accepts_single_name_and_list() {
        assert_eq!(
            parse(r#"{"type": "string"}"#).effective_kind(),
            Some(TypeKind::String)
        );
        assert_eq!(parse(r#"{"type": ["string", "null"]}"#).effective_kind(), None);
        assert_eq!(parse(r#"{"type": []}"#).effective_kind(), None);
    }

    #[test]
    fn test_kind_inferred_from_const_then_enum() {
        assert_eq!(
            parse(r#"{"const": true}"#).effective_kind(),
            Some(TypeKind::Boolean)
        );
        assert_eq!(
            parse(r#"{"const": {"a": 1}}"#).effective_kind(),
            Some(TypeKind::Object)
        );
        assert_eq!(
            parse(r#"{"enum": [[1, 2], "x"]}"#).effective_kind(),
            Some(TypeKind::Array)
        );
        assert_eq!(
            parse(r#"{"enum": [3.5]}"#).effective_kind(),
            Some(TypeKind::Number)
        );
        assert_eq!(
            parse(r#"{"enum": ["a", "b"]}"#).effective_kind(),
            Some(TypeKind::String)
        );
        assert_eq!(
            parse(r#"{"const": "x", "enum": [1]}"#).effective_kind(),
            Some(TypeKind::String)
        );
        assert_eq!(
            parse(r#"{"const": null, "enum": ["a"]}"#).effective_kind(),
            Some(TypeKind::String)
        );
    }

    #[test]
    fn test_untyped_nodes() {
        assert_eq!(parse("{}").effective_kind(), None);
        assert_eq!(parse(r#"{"const": null}"#).effective_kind(), None);
        assert_eq!(parse(r#"{"enum": []}"#).effective_kind(), None);
        assert_eq!(parse(r#"{"enum": [null, "a"]}"#).effective_kind(), None);
    }

    #[test]
    fn test_explicit_type_wins_over_literals() {
        let node = parse(r#"{"type": "integer", "enum": ["1", "2"]}"#);
        assert_eq!(node.effective_kind(), Some(TypeKind::Integer));
    }

    #[test]
    fn test_null_kind() {
        assert!(parse(r#"{"type": "null"}"#).is_null_kind());
        assert!(!parse(r#"{"const": null}"#).is_null_kind());
        assert!(!parse(r#"{"type": ["null", "string"]}"#).is_null_kind());
    }

    #[test]
    fn test_closed_object_detection() {
        let closed = parse(r#"{"type": "object", "additionalProperties": false}"#);
        assert!(closed.is_closed_object());
        assert!(closed.forbids_additional_properties());

        let open = parse(r#"{"type": "object"}"#);
        assert!(!open.is_closed_object());
        assert!(!open.forbids_additional_properties());

        let typed_additionals = parse(
            r#"{"type": "object", "additionalProperties": {"type": "string"}}"#,
        );
        assert!(!typed_additionals.is_closed_object());

        let with_patterns = parse(
            r#"{"type": "object", "additionalProperties": false, "patternProperties": {"^x": {}}}"#,
        );
        assert!(!with_patterns.is_closed_object());
    }

    #[test]
    fn test_single_pattern_property() {
        let one = parse(r#"{"patternProperties": {"^[a-z]+$": {"type": "integer"}}}"#);
        let value = one.single_pattern_property().expect("Failed to get pattern schema");
        assert_eq!(value.effective_kind(), Some(TypeKind::Integer));

        let two = parse(r#"{"patternProperties": {"^a": {}, "^b": {}}}"#);
        assert!(two.single_pattern_property().is_none());
        assert!(parse("{}").single_pattern_property().is_none());
    }

    #[test]
    fn test_combinator_branches_in_fixed_order() {
        let node = parse(
            r#"{
                "dependentSchemas": {"z": {"description": "e"}, "a": {"description": "d"}},
                "oneOf": [{"description": "b"}],
                "then": {"description": "c"},
                "allOf": [{"description": "a"}]
            }"#,
        );
        assert!(node.has_combinators());
        let order: Vec<_> = node
            .combinator_branches()
            .iter()
            .map(|branch| branch.description().expect("Failed to get description"))
            .collect();
        assert_eq!(order, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_if_alone_is_not_a_combinator() {
        let node = parse(r#"{"if": {"type": "string"}}"#);
        assert!(!node.has_combinators());
        assert!(node.combinator_branches().is_empty());
    }

    #[test]
    fn test_boolean_subschemas_normalize_in_place() {
        let node = parse(r#"{"additionalProperties": false, "items": true}"#);
        assert!(
            node.additional_properties()
                .expect("Failed to get additionalProperties")
                .is_false()
        );
        assert!(node.items().expect("Failed to get items").is_true());
    }

    #[test]
    fn test_not_accepts_single_schema_and_list() {
        assert!(parse(r#"{"not": {}}"#).is_false());
        assert!(parse(r#"{"not": [{}]}"#).is_false());
        assert!(!parse(r#"{"not": {"type": "string"}}"#).is_false());
    }

    #[test]
    fn test_required_membership() {
        let node = parse(r#"{"required": ["b", "a"]}"#);
        assert!(node.is_required("a"));
        assert!(node.is_required("b"));
        assert!(!node.is_required("c"));
    }

    #[test]
    fn test_unknown_keywords_ignored() {
        let node = parse(r#"{"type": "string", "x-vendor": {"anything": [1]}}"#);
        assert_eq!(node.effective_kind(), Some(TypeKind::String));
    }

    #[test]
    fn test_validation_keywords_parse_without_effect() {
        let node = parse(
            r#"{
                "type": "string",
                "pattern": "^evt_[a-zA-Z0-9]+$",
                "minLength": 5,
                "format": "date-time"
            }"#,
        );
        assert_eq!(node.effective_kind(), Some(TypeKind::String));
    }

    #[test]
    fn test_defs_and_description() {
        let node = parse(
            r#"{
                "description": "top",
                "$defs": {"a": {"type": "integer"}, "b": {"type": "string"}}
            }"#,
        );
        assert_eq!(node.description(), Some("top"));
        let names: Vec<_> = node.defs().keys().cloned().collect();
        assert_eq!(names, ["a", "b"]);
    }
}
