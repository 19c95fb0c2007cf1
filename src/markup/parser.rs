use std::collections::BTreeMap;

use crate::document::node::{Node, NodeType};
use crate::foundation::error::{DinkyError, DinkyResult};
use crate::markup::scan::{
    find_block_end, find_unquoted, parse_literal_param, split_unquoted, toggles_quote, unquote,
};

/// Parse markup into a single root [`Node`].
///
/// Newlines are removed first; error offsets refer to the input without them. Input that is
/// empty or only whitespace has no root and is rejected.
#[tracing::instrument(level = "debug", skip(src), fields(len = src.len()))]
pub fn parse(src: &str) -> DinkyResult<Node> {
    let input: String = src.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

    let mut roots = Vec::new();
    if !input.trim().is_empty() {
        roots.push(read_node(&input, 0)?);
    }
    if roots.len() != 1 {
        return Err(DinkyError::parse(
            0,
            format!("expected exactly one root node, got {}", roots.len()),
        ));
    }
    Ok(roots.remove(0))
}

/// Scan one node body. `base` is the offset of `input` inside the full document.
fn read_node(input: &str, base: usize) -> DinkyResult<Node> {
    let mut node = Node::default();
    let mut text = String::new();
    let mut last = None;
    let mut quoted = false;

    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if toggles_quote(bytes, i, quoted) {
            quoted = !quoted;
        } else if !quoted {
            match b {
                b'%' => {
                    let close = find_unquoted(input, b'%', i + 1).ok_or_else(|| {
                        DinkyError::parse(base + i, "unterminated '%' directive")
                    })?;
                    apply_directive(&mut node, &input[i + 1..close]);
                    i = close + 1;
                    continue;
                }
                b'!' => {
                    let end = find_unquoted(input, b' ', i + 1).unwrap_or(input.len());
                    let (key, value) = match input[i + 1..end].split_once('=') {
                        Some((k, v)) => (k, unquote(v)),
                        None => (&input[i + 1..end], ""),
                    };
                    node.styling.insert(key.to_owned(), value.to_owned());
                    i = end + 1;
                    continue;
                }
                b'[' | b']' if bytes.get(i + 1) == Some(&b) => {
                    push_text(&mut text, &mut last, char::from(b));
                    i += 2;
                    continue;
                }
                b'[' => {
                    let close = find_block_end(input, i).ok_or_else(|| {
                        DinkyError::parse(base + i, "unmatched '[' child block")
                    })?;
                    node.children.push(read_node(&input[i + 1..close], base + i + 1)?);
                    i = close + 1;
                    continue;
                }
                b']' => return Err(DinkyError::parse(base + i, "unexpected ']'")),
                _ => {}
            }
        }

        let Some(c) = input[i..].chars().next() else {
            break;
        };
        push_text(&mut text, &mut last, c);
        i += c.len_utf8();
    }

    node.text = text.trim().to_owned();
    if !node.text.is_empty() && node.node_type == NodeType::Panel {
        node.node_type = NodeType::Text;
    }
    Ok(node)
}

fn push_text(text: &mut String, last: &mut Option<char>, c: char) {
    if c == ' ' && *last == Some(' ') {
        return;
    }
    text.push(c);
    *last = Some(c);
}

/// `TYPE key:value key2:'literal'` between a pair of `%`.
fn apply_directive(node: &mut Node, body: &str) {
    let (token, literal) = match find_unquoted(body, b' ', 0) {
        Some(at) => (&body[..at], &body[at + 1..]),
        None => (body, ""),
    };
    node.node_type = NodeType::from_name(token);
    node.params = media_params(literal);
    tracing::debug!(kind = ?node.node_type, params = node.params.len(), "directive");
}

fn media_params(literal: &str) -> BTreeMap<String, String> {
    split_unquoted(literal, b' ')
        .into_iter()
        .map(|item| match find_unquoted(item, b':', 0) {
            Some(at) => (item[..at].to_owned(), parse_literal_param(&item[at + 1..])),
            None => (item.to_owned(), String::new()),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/parser.rs"]
mod tests;
