//! Envelope declaration rendering.
//!
//! Untyped definitions built from applicator keywords keep their payload
//! raw and expose one fallible decode accessor per referenced branch.

use crate::naming;
use crate::rust::push_doc;

/// Renders one transparent envelope declaration.
///
/// # Arguments
/// * `name` - Declaration name
/// * `doc` - Optional doc text taken from the schema description
/// * `targets` - Referenced branch type names, in branch order
#[must_use]
pub fn generate_envelope(name: &str, doc: Option<&str>, targets: &[String]) -> String {
    let mut out = String::new();
    push_doc(&mut out, "", doc);
    out.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
    out.push_str("#[serde(transparent)]\n");
    out.push_str(&format!("pub struct {name} {{\n"));
    out.push_str("    /// Raw, undecoded payload.\n");
    out.push_str("    pub raw: Box<serde_json::value::RawValue>,\n");
    out.push_str("}\n");

    out.push('\n');
    out.push_str(&format!("impl Default for {name} {{\n"));
    out.push_str("    fn default() -> Self {\n");
    out.push_str("        Self { raw: raw_null() }\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    if !targets.is_empty() {
        out.push('\n');
        out.push_str(&format!("impl {name} {{\n"));
        for (index, target) in targets.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!(
                "    /// Attempts to decode the payload as [`{target}`].\n"
            ));
            out.push_str(&format!(
                "    pub fn decode_{}(&self) -> Result<{target}, serde_json::Error> {{\n",
                naming::snake_name(target)
            ));
            out.push_str("        serde_json::from_str(self.raw.get())\n");
            out.push_str("    }\n");
        }
        out.push_str("}\n");
    }
    out
}
