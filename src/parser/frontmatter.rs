//! Frontmatter splitting.
//!
//! Separates a fenced YAML header (lines of three hyphens) from the Markdown
//! body. Total by design: malformed input degrades to an empty mapping and
//! the parse continues with whatever body text remains.

use serde_yaml::Value;

/// Split a document into its frontmatter mapping and Markdown body.
///
/// Returns `Value::Null` and the whole input when no opening fence is
/// present or the fence is never closed. YAML that fails to parse is
/// logged and treated as absent, keeping the pipeline total.
pub fn split(content: &str) -> (Value, &str) {
    let Some(after_open) = content.strip_prefix("---\n") else {
        return (Value::Null, content);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            let raw_yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            if raw_yaml.trim().is_empty() {
                return (Value::Null, body);
            }
            return match serde_yaml::from_str::<Value>(raw_yaml) {
                Ok(value) => (value, body),
                Err(e) => {
                    tracing::warn!("Ignoring malformed frontmatter YAML: {e}");
                    (Value::Null, body)
                }
            };
        }
        offset += line.len();
    }

    // Opening fence with no closing fence: treat the input as plain body
    (Value::Null, content)
}
