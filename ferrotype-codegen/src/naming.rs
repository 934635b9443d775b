//! Identifier formatting for generated declarations.
//!
//! Type names split the raw name on runs of non-alphanumeric characters,
//! capitalize each word's first letter and concatenate, so `order.created`
//! becomes `OrderCreated` and `shipping-address` becomes `ShippingAddress`.
//! Field names take the lowercase snake form of the property name; binding
//! names strip separators entirely, matching how the runtime rule engine
//! addresses fields.

/// Rust keywords that cannot name a field without escaping.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "do", "dyn", "else", "enum", "extern", "false", "final",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Formats a raw schema name as a type name.
///
/// Splits on runs of non-alphanumeric characters, capitalizes the first
/// letter of each word and concatenates. Names that would start with a
/// digit get a leading underscore; an empty result becomes `Unnamed`.
#[must_use]
pub fn type_name(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut capitalize_next = true;

    for c in raw.chars() {
        if c.is_alphanumeric() {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else {
            capitalize_next = true;
        }
    }

    if result.is_empty() {
        return "Unnamed".to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Formats an access path as a type name for a synthesized nested struct.
///
/// The segments are the property names from the root down to the struct,
/// so `["root", "data", "items"]` becomes `RootDataItems`.
#[must_use]
pub fn path_type_name(segments: &[&str]) -> String {
    type_name(&segments.join("_"))
}

/// Converts a raw name to lowercase snake form.
///
/// Splits on non-alphanumeric characters and on case boundaries, so both
/// `total_price` and `totalPrice` become `total_price`.
#[must_use]
pub fn snake_name(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + 4);

    for c in raw.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else if !result.is_empty() && !result.ends_with('_') {
            result.push('_');
        }
    }

    while result.ends_with('_') {
        result.pop();
    }
    result
}

/// Formats a property name as a Rust field identifier.
///
/// Keywords are escaped with a raw-identifier prefix; the few names a raw
/// identifier cannot express get a trailing underscore instead. Names that
/// would start with a digit get a leading underscore; an empty result
/// becomes `unnamed`.
#[must_use]
pub fn field_name(raw: &str) -> String {
    let mut name = snake_name(raw);
    if name.is_empty() {
        return "unnamed".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    match name.as_str() {
        "self" | "super" | "crate" => {
            name.push('_');
            name
        }
        _ if KEYWORDS.contains(&name.as_str()) => format!("r#{name}"),
        _ => name,
    }
}

/// Formats a property name as its rule-binding key: lowercased with all
/// non-alphanumerics stripped.
#[must_use]
pub fn binding_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
