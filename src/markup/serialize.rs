use crate::document::node::{Node, NodeType};
use crate::markup::scan::toggles_quote;

/// Write `node` back to markup; [`crate::parse`] on the output yields an equal tree.
///
/// The root is written bare, every child as a `[...]` block. Children come before the node's
/// own text so an open quote in prose cannot swallow them on re-parse.
pub fn to_markup(node: &Node) -> String {
    let mut parts = Vec::new();

    if needs_directive(node) {
        let mut directive = format!("%{}", node.node_type.name());
        for (key, value) in &node.params {
            directive.push_str(&format!(" {key}:'{value}'"));
        }
        directive.push('%');
        parts.push(directive);
    }

    for (key, value) in &node.styling {
        parts.push(match value.as_str() {
            "" => format!("!{key}"),
            v if v.contains(' ') => format!("!{key}='{v}'"),
            v => format!("!{key}={v}"),
        });
    }

    for child in &node.children {
        parts.push(block(&to_markup(child)));
    }

    if !node.text.is_empty() {
        parts.push(escape_text(&node.text));
    }

    parts.join(" ")
}

fn needs_directive(node: &Node) -> bool {
    if !node.params.is_empty() {
        return true;
    }
    match node.node_type {
        NodeType::Panel => false,
        NodeType::Text => node.text.is_empty(),
        _ => true,
    }
}

fn block(body: &str) -> String {
    let lead = if body.starts_with('[') { " " } else { "" };
    let trail = if body.ends_with(']') { " " } else { "" };
    format!("[{lead}{body}{trail}]")
}

/// Double every bracket outside single-quoted literals.
fn escape_text(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut quoted = false;
    for (i, c) in text.char_indices() {
        match c {
            '\'' if toggles_quote(bytes, i, quoted) => quoted = !quoted,
            '[' | ']' if !quoted => out.push(c),
            _ => {}
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/markup/serialize.rs"]
mod tests;
