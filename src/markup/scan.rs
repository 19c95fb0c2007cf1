//! Quote-aware scanning helpers shared by the parser.
//!
//! A single quote opens a literal only where a token starts (start of input, after a space or
//! after one of `[ : = %`) and a later quote exists to close it; any quote closes an open
//! literal. Apostrophes inside words (`don't`) are plain text. While inside a literal no
//! structural byte matches. All delimiters are ASCII so every returned offset is a char
//! boundary.

const QUOTE: u8 = b'\'';

/// `true` when the byte at `i` flips literal mode, given whether a literal is open.
pub(crate) fn toggles_quote(bytes: &[u8], i: usize, quoted: bool) -> bool {
    if bytes[i] != QUOTE {
        return false;
    }
    if quoted {
        return true;
    }
    let token_start = i == 0 || matches!(bytes[i - 1], b' ' | b'[' | b':' | b'=' | b'%');
    token_start && bytes[i + 1..].contains(&QUOTE)
}

/// Byte offset of the first unquoted `needle` at or after `from`.
pub fn find_unquoted(input: &str, needle: u8, from: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut quoted = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if toggles_quote(bytes, i, quoted) {
            quoted = !quoted;
            continue;
        }
        if !quoted && b == needle {
            return Some(i);
        }
    }
    None
}

/// Split at every unquoted `sep`, dropping empty fragments.
pub fn split_unquoted(input: &str, sep: u8) -> Vec<&str> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut quoted = false;
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if toggles_quote(bytes, i, quoted) {
            quoted = !quoted;
        } else if !quoted && b == sep {
            out.push(&input[start..i]);
            start = i + 1;
        }
    }
    out.push(&input[start..]);
    out.retain(|s| !s.is_empty());
    out
}

/// Offset of the `]` closing the block opened at `open_at`.
///
/// Nested blocks are depth-counted. A doubled `[[` or `]]` is a literal bracket pair and
/// neither opens nor closes anything.
pub fn find_block_end(input: &str, open_at: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut i = open_at;
    while i < bytes.len() {
        let b = bytes[i];
        let doubled = bytes.get(i + 1) == Some(&b);
        match b {
            QUOTE if toggles_quote(bytes, i, quoted) => quoted = !quoted,
            _ if quoted => {}
            b'[' | b']' if doubled && i != open_at => {
                i += 2;
                continue;
            }
            b'[' => depth += 1,
            b']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Strip one pair of surrounding single quotes, if present.
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
}

/// Directive parameter value: unquoted, with `rem` appended to bare numbers.
///
/// `'12'` and `12` become `12rem`; `50%`, `2px` and text stay as written.
pub fn parse_literal_param(value: &str) -> String {
    let value = unquote(value);
    let numeric = !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite);
    if numeric {
        format!("{value}rem")
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/scan.rs"]
mod tests;
