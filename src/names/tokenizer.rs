//! Bracket-aware scanning over identifier strings.
//!
//! Every identifier in the naming grammar nests type names inside `[...]`, parameter lists inside
//! `(...)` and type-parameter lists inside `[[...]]`. The functions in this module find the split
//! points of such strings without ever allocating: they work on byte offsets and return slices of
//! the input.
//!
//! All structural characters of the grammar are ASCII, so byte offsets returned here are always
//! valid `char` boundaries of the scanned `&str`.
//!
//! # Key Components
//!
//! - [`find_corresponding_close_bracket`] / [`find_corresponding_open_bracket`] - Bracket matching
//! - [`find_next`] / [`find_previous`] / [`find_next_top_level`] - Character scans
//! - [`split_top_level`] - Splitting a region on a delimiter outside nested brackets
//! - [`parse_bracketed_list`] - The entries of a `[[a],[b]]` type-parameter list
//! - [`parse_parameter_list`] - The entries of a `( ... )` parameter list
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::tokenizer;
//!
//! let id = "n.C`2[[T1],[T2 -> p:int]], P";
//! let open = tokenizer::find_next(id, 0, b"[").unwrap();
//! let close = tokenizer::find_corresponding_close_bracket(id, open)?;
//! let entries = tokenizer::parse_bracketed_list(id, open, close)?;
//! assert_eq!(entries, vec!["T1", "T2 -> p:int"]);
//! # Ok::<(), namescope::Error>(())
//! ```

use crate::Result;

/// All opening brackets known to the grammar, paired with their closing counterpart.
const BRACKET_PAIRS: [(u8, u8); 4] = [(b'(', b')'), (b'[', b']'), (b'<', b'>'), (b'{', b'}')];

/// Returns the closing counterpart of an opening bracket.
fn closer_of(open: u8) -> Option<u8> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, c)| *c)
}

/// Returns the opening counterpart of a closing bracket.
fn opener_of(close: u8) -> Option<u8> {
    BRACKET_PAIRS
        .iter()
        .find(|(_, c)| *c == close)
        .map(|(o, _)| *o)
}

/// Find the bracket that closes the one opened at `open`.
///
/// Only brackets of the same kind are counted, so `[` matched against `]` ignores any
/// parentheses in between.
///
/// # Arguments
///
/// * `text` - The identifier to scan
/// * `open` - Byte offset of one of `(`, `[`, `<`, `{`
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] if `open` is out of range, does not point at an opening
/// bracket, or the bracket is never closed.
pub fn find_corresponding_close_bracket(text: &str, open: usize) -> Result<usize> {
    let bytes = text.as_bytes();
    let Some(&open_char) = bytes.get(open) else {
        return Err(malformed_error!(
            "Index {} is out of range for '{}'",
            open,
            text
        ));
    };
    let Some(close_char) = closer_of(open_char) else {
        return Err(malformed_error!(
            "Index {} of '{}' is not an opening bracket",
            open,
            text
        ));
    };

    let mut depth = 0usize;
    for (idx, &byte) in bytes.iter().enumerate().skip(open) {
        if byte == open_char {
            depth += 1;
        } else if byte == close_char {
            depth -= 1;
            if depth == 0 {
                return Ok(idx);
            }
        }
    }

    Err(malformed_error!(
        "Bracket at {} of '{}' is never closed",
        open,
        text
    ))
}

/// Find the bracket that opens the one closed at `close`.
///
/// The inverse of [`find_corresponding_close_bracket`].
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] if `close` is out of range, does not point at a closing
/// bracket, or the bracket is never opened.
pub fn find_corresponding_open_bracket(text: &str, close: usize) -> Result<usize> {
    let bytes = text.as_bytes();
    let Some(&close_char) = bytes.get(close) else {
        return Err(malformed_error!(
            "Index {} is out of range for '{}'",
            close,
            text
        ));
    };
    let Some(open_char) = opener_of(close_char) else {
        return Err(malformed_error!(
            "Index {} of '{}' is not a closing bracket",
            close,
            text
        ));
    };

    let mut depth = 0usize;
    for idx in (0..=close).rev() {
        let byte = bytes[idx];
        if byte == close_char {
            depth += 1;
        } else if byte == open_char {
            depth -= 1;
            if depth == 0 {
                return Ok(idx);
            }
        }
    }

    Err(malformed_error!(
        "Bracket at {} of '{}' is never opened",
        close,
        text
    ))
}

/// Find the first occurrence of any of `needles` at or after `from`.
#[must_use]
pub fn find_next(text: &str, from: usize, needles: &[u8]) -> Option<usize> {
    text.as_bytes()
        .get(from..)?
        .iter()
        .position(|b| needles.contains(b))
        .map(|pos| pos + from)
}

/// Find the last occurrence of any of `needles` at or before `from`.
///
/// A `from` past the end of `text` scans from the last byte.
#[must_use]
pub fn find_previous(text: &str, from: usize, needles: &[u8]) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let start = from.min(bytes.len() - 1);
    bytes[..=start].iter().rposition(|b| needles.contains(b))
}

/// Find the first occurrence of any of `needles` at or after `from` that is not nested inside
/// a bracket group opened after `from`.
///
/// Nesting is tracked over `()`, `[]` and `{}`. Angle brackets are deliberately not tracked,
/// since the type-parameter arrow `->` contains a `>`.
#[must_use]
pub fn find_next_top_level(text: &str, from: usize, needles: &[u8]) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    for (idx, byte) in bytes.iter().enumerate().skip(from) {
        if depth == 0 && needles.contains(byte) {
            return Some(idx);
        }
        match byte {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Split `text[start..end]` on `delimiter`, treating nested bracket groups as opaque.
///
/// The returned slices are not trimmed. An empty region yields an empty list.
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] if the region is out of range or its brackets do not
/// balance.
pub fn split_top_level(text: &str, start: usize, end: usize, delimiter: u8) -> Result<Vec<&str>> {
    let Some(region) = text.get(start..end) else {
        return Err(malformed_error!(
            "Region {}..{} is out of range for '{}'",
            start,
            end,
            text
        ));
    };
    if region.is_empty() {
        return Ok(Vec::new());
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut part_start = 0usize;
    for (idx, &byte) in region.as_bytes().iter().enumerate() {
        match byte {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    malformed_error!("Unbalanced '{}' at {} in '{}'", byte as char, idx, text)
                })?;
            }
            _ if byte == delimiter && depth == 0 => {
                parts.push(&region[part_start..idx]);
                part_start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(malformed_error!("Unbalanced brackets in '{}'", region));
    }
    parts.push(&region[part_start..]);

    Ok(parts)
}

/// Return the entries of a bracketed list such as `[[T1],[T2 -> X]]`.
///
/// `open` and `close` point at the outer brackets. Every entry is returned without its own
/// brackets.
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] if `open`/`close` do not point at `[`/`]` or an entry is
/// not closed.
pub fn parse_bracketed_list(text: &str, open: usize, close: usize) -> Result<Vec<&str>> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'[') || bytes.get(close) != Some(&b']') || close < open {
        return Err(malformed_error!(
            "{}..{} of '{}' is not a bracketed list",
            open,
            close,
            text
        ));
    }

    let mut entries = Vec::new();
    let mut current = open + 1;
    while current < close {
        let Some(entry_open) = find_next(text, current, b"[]") else {
            break;
        };
        if bytes[entry_open] == b']' || entry_open >= close {
            break;
        }
        let entry_close = find_corresponding_close_bracket(text, entry_open)?;
        if entry_close > close {
            return Err(malformed_error!(
                "List entry at {} of '{}' overruns its list",
                entry_open,
                text
            ));
        }
        entries.push(&text[entry_open + 1..entry_close]);
        current = entry_close + 1;
    }

    Ok(entries)
}

/// Return the trimmed entries of a parameter list such as `([T] a, out [U] b)`.
///
/// `open` and `close` point at the parentheses. Whitespace around entries is tolerated. Every
/// entry must carry a bracketed value type; commas inside value types do not split.
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] if `open`/`close` do not point at `(`/`)` or an entry has
/// no (balanced) value type.
pub fn parse_parameter_list(text: &str, open: usize, close: usize) -> Result<Vec<&str>> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') || bytes.get(close) != Some(&b')') || close < open {
        return Err(malformed_error!(
            "{}..{} of '{}' is not a parameter list",
            open,
            close,
            text
        ));
    }

    let mut current = open + 1;
    while current < close && bytes[current] == b' ' {
        current += 1;
    }

    let mut parameters = Vec::new();
    while current < close {
        let start = current;
        let value_open = match find_next(text, current, b"[") {
            Some(idx) if idx < close => idx,
            _ => {
                return Err(malformed_error!(
                    "Parameter at {} of '{}' has no value type",
                    start,
                    text
                ))
            }
        };
        let value_close = find_corresponding_close_bracket(text, value_open)?;
        if value_close >= close {
            return Err(malformed_error!(
                "Parameter at {} of '{}' overruns the parameter list",
                start,
                text
            ));
        }
        let end = match find_next(text, value_close, b",)") {
            Some(idx) if idx < close => idx,
            _ => close,
        };

        parameters.push(text[start..end].trim());
        current = end + 1;
    }

    Ok(parameters)
}

/// Returns the rank of the array suffix (`[]`, `[,]`, ...) starting at `open`, together with
/// the offset one past its closing bracket.
pub(crate) fn array_suffix_at(text: &str, open: usize) -> Option<(i32, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'[') {
        return None;
    }
    let mut rank = 1;
    let mut idx = open + 1;
    while let Some(&byte) = bytes.get(idx) {
        match byte {
            b',' => rank += 1,
            b']' => return Some((rank, idx + 1)),
            _ => return None,
        }
        idx += 1;
    }
    None
}

/// Returns `true` if `text` is exactly one array suffix such as `[]` or `[,,]`.
pub(crate) fn is_array_suffix(text: &str) -> bool {
    matches!(array_suffix_at(text, 0), Some((_, end)) if end == text.len())
}

/// Builds the array suffix for `rank` (`1` -> `[]`, `2` -> `[,]`).
pub(crate) fn array_suffix(rank: i32) -> String {
    let commas = usize::try_from(rank.saturating_sub(1)).unwrap_or(0);
    let mut suffix = String::with_capacity(commas + 2);
    suffix.push('[');
    suffix.extend(std::iter::repeat(',').take(commas));
    suffix.push(']');
    suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_bracket_simple() {
        assert_eq!(find_corresponding_close_bracket("[]", 0).unwrap(), 1);
        assert_eq!(find_corresponding_close_bracket("a(b)c", 1).unwrap(), 3);
        assert_eq!(find_corresponding_close_bracket("{<>}", 1).unwrap(), 2);
    }

    #[test]
    fn test_close_bracket_nested() {
        let id = "[[T1],[T2 -> C`1[[U]]]]";
        assert_eq!(find_corresponding_close_bracket(id, 0).unwrap(), id.len() - 1);
        assert_eq!(find_corresponding_close_bracket(id, 1).unwrap(), 4);
        assert_eq!(find_corresponding_close_bracket(id, 6).unwrap(), id.len() - 2);
    }

    #[test]
    fn test_close_bracket_ignores_other_kinds() {
        assert_eq!(find_corresponding_close_bracket("[(])", 0).unwrap(), 2);
    }

    #[test]
    fn test_close_bracket_invalid() {
        assert!(find_corresponding_close_bracket("", 0).is_err());
        assert!(find_corresponding_close_bracket("a]", 0).is_err());
        assert!(find_corresponding_close_bracket("[b", 0).is_err());
        assert!(find_corresponding_close_bracket("[]", 2).is_err());
        assert!(find_corresponding_close_bracket("][", 0).is_err());
    }

    #[test]
    fn test_open_bracket() {
        let id = "[[T1],[T2]]";
        assert_eq!(find_corresponding_open_bracket(id, id.len() - 1).unwrap(), 0);
        assert_eq!(find_corresponding_open_bracket(id, 4).unwrap(), 1);
        assert_eq!(find_corresponding_open_bracket("(a)", 2).unwrap(), 0);
    }

    #[test]
    fn test_open_bracket_invalid() {
        assert!(find_corresponding_open_bracket("", 0).is_err());
        assert!(find_corresponding_open_bracket("a]", 0).is_err());
        assert!(find_corresponding_open_bracket("b]", 1).is_err());
        assert!(find_corresponding_open_bracket("[]", 5).is_err());
    }

    #[test]
    fn test_find_next_and_previous() {
        let id = "a,b)c,d";
        assert_eq!(find_next(id, 0, b",)"), Some(1));
        assert_eq!(find_next(id, 2, b",)"), Some(3));
        assert_eq!(find_next(id, 6, b",)"), None);
        assert_eq!(find_next(id, 100, b","), None);

        assert_eq!(find_previous(id, 6, b","), Some(5));
        assert_eq!(find_previous(id, 4, b","), Some(1));
        assert_eq!(find_previous(id, 0, b","), None);
        assert_eq!(find_previous(id, 100, b"d"), Some(6));
        assert_eq!(find_previous("", 0, b"d"), None);
    }

    #[test]
    fn test_find_next_top_level() {
        let id = "n.C`1[[T -> A, B]], P";
        assert_eq!(find_next_top_level(id, 0, b","), Some(18));
        assert_eq!(find_next_top_level("d:[?] [?].([?] a, [?] b)", 0, b","), None);
        assert_eq!(find_next_top_level("T -> X", 0, b">"), Some(3));
    }

    #[test]
    fn test_split_top_level() {
        let id = "A`1[[T]]+B+C`2[[U],[V]]";
        let parts = split_top_level(id, 0, id.len(), b'+').unwrap();
        assert_eq!(parts, vec!["A`1[[T]]", "B", "C`2[[U],[V]]"]);

        assert!(split_top_level("", 0, 0, b'+').unwrap().is_empty());
        assert!(split_top_level("A]+B", 0, 4, b'+').is_err());
        assert!(split_top_level("A[+B", 0, 4, b'+').is_err());
        assert!(split_top_level("AB", 1, 5, b'+').is_err());
    }

    #[test]
    fn test_parse_bracketed_list() {
        let id = "C`3[[A],[B -> p:int],[D -> E`1[[F]], P]]";
        let open = id.find('[').unwrap();
        let close = id.len() - 1;
        let entries = parse_bracketed_list(id, open, close).unwrap();
        assert_eq!(entries, vec!["A", "B -> p:int", "D -> E`1[[F]], P"]);
    }

    #[test]
    fn test_parse_bracketed_list_invalid() {
        assert!(parse_bracketed_list("(a)", 0, 2).is_err());
        assert!(parse_bracketed_list("[[a", 0, 2).is_err());
    }

    #[test]
    fn test_parse_parameter_list_empty() {
        let id = "...()";
        assert!(parse_parameter_list(id, 3, 4).unwrap().is_empty());
        let id = "...(   )";
        assert!(parse_parameter_list(id, 3, 7).unwrap().is_empty());
    }

    #[test]
    fn test_parse_parameter_list_single() {
        for (params, expected) in [
            ("([A`1[[B, P]], P] p)", "[A`1[[B, P]], P] p"),
            ("([d:[?] [?].()] p)", "[d:[?] [?].()] p"),
            ("(  out [T,P] p   )", "out [T,P] p"),
        ] {
            let id = format!("...{}", params);
            let entries = parse_parameter_list(&id, 3, id.len() - 1).unwrap();
            assert_eq!(entries, vec![expected]);
        }
    }

    #[test]
    fn test_parse_parameter_list_multiple() {
        let id = "...( [T1,P] a , out [T2,P] b )";
        let entries = parse_parameter_list(id, 3, id.len() - 1).unwrap();
        assert_eq!(entries, vec!["[T1,P] a", "out [T2,P] b"]);
    }

    #[test]
    fn test_parse_parameter_list_invalid() {
        assert!(parse_parameter_list("(a b)", 0, 4).is_err());
        assert!(parse_parameter_list("([a b)", 0, 5).is_err());
        assert!(parse_parameter_list("[a]", 0, 2).is_err());
    }

    #[test]
    fn test_array_suffix() {
        assert_eq!(array_suffix_at("T[]", 1), Some((1, 3)));
        assert_eq!(array_suffix_at("T[,,]x", 1), Some((3, 5)));
        assert_eq!(array_suffix_at("T[[A]]", 1), None);
        assert_eq!(array_suffix_at("T[", 1), None);
        assert!(is_array_suffix("[,]"));
        assert!(!is_array_suffix("[,]x"));
        assert_eq!(array_suffix(1), "[]");
        assert_eq!(array_suffix(3), "[,,]");
    }
}
