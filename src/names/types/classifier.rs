//! Variant resolution for type identifiers.
//!
//! Every type identifier denotes exactly one of six shapes. [`classify`] finds that shape with
//! cheap prefix and suffix rules, and the `is_*_type_identifier` predicates answer the same
//! question strictly: a string that no grammar rule accepts is rejected by all of them, although
//! [`classify`] still maps it to [`TypeNameKind::Regular`] so that construction stays total.
//!
//! The shape parsers in this module are shared with the variant implementations, which keep the
//! resulting offsets instead of scanning the identifier again.
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{classify, TypeNameKind};
//!
//! assert_eq!(classify("?"), TypeNameKind::Unknown);
//! assert_eq!(classify("p:int"), TypeNameKind::Predefined);
//! assert_eq!(classify("n.C`1[][[T]], P"), TypeNameKind::Array);
//! assert_eq!(classify("d:[?] [n.D, P].()"), TypeNameKind::Delegate);
//! assert_eq!(classify("T -> p:int"), TypeNameKind::TypeParameter);
//! assert_eq!(classify("n.C+D, P"), TypeNameKind::Regular);
//! ```

use crate::names::{
    tokenizer::{
        array_suffix_at, find_corresponding_close_bracket, find_next_top_level, is_array_suffix,
        parse_parameter_list, split_top_level,
    },
    types::{predefined, TypeNameKind},
};

/// Offsets of a `d:[R] [D].(P)` identifier, with an optional trailing array suffix.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DelegateShape {
    pub return_open: usize,
    pub return_close: usize,
    pub declaring_open: usize,
    pub declaring_close: usize,
    pub params_open: usize,
    pub params_close: usize,
    /// Start offset and rank of a trailing array suffix
    pub array: Option<(usize, i32)>,
}

impl DelegateShape {
    pub fn return_id<'a>(&self, id: &'a str) -> &'a str {
        &id[self.return_open + 1..self.return_close]
    }

    pub fn declaring_id<'a>(&self, id: &'a str) -> &'a str {
        &id[self.declaring_open + 1..self.declaring_close]
    }
}

/// Offsets of a `T`, `T[]` or `T -> X` identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeParameterShape {
    /// End of the short name without array suffix
    pub short_end: usize,
    /// End of the short name including its array suffix
    pub head_end: usize,
    pub rank: Option<i32>,
    /// Start of the bound type after the arrow
    pub bound_start: Option<usize>,
}

/// One `+`-separated segment of a regular type identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SegmentShape {
    pub start: usize,
    pub end: usize,
    /// End of the (namespace-qualified) simple name
    pub name_end: usize,
    pub has_tick: bool,
    /// Start, end and rank of an array suffix after name and tick
    pub array: Option<(usize, usize, i32)>,
    /// Outer brackets of the `[[...]]` type-parameter list
    pub list: Option<(usize, usize)>,
}

/// Offsets of a regular type identifier.
#[derive(Debug, Clone)]
pub(crate) struct RegularShape {
    pub prefix_len: usize,
    /// Offset of the top-level comma that starts the assembly, or the identifier length
    pub type_end: usize,
    pub segments: Vec<SegmentShape>,
}

/// Decide which variant `identifier` denotes.
///
/// Decision order: unknown, delegate (and delegate arrays), type parameter, predefined,
/// regular arrays and unknown arrays, regular. Strings matching no rule classify as
/// [`TypeNameKind::Regular`].
#[must_use]
pub fn classify(identifier: &str) -> TypeNameKind {
    if identifier.is_empty() || identifier == "?" {
        return TypeNameKind::Unknown;
    }
    if let Some(rest) = identifier.strip_prefix('?') {
        if is_array_suffix(rest) {
            return TypeNameKind::Array;
        }
        return TypeNameKind::Regular;
    }
    if identifier.starts_with("d:") {
        if let Some(shape) = delegate_shape(identifier) {
            return if shape.array.is_some() {
                TypeNameKind::Array
            } else {
                TypeNameKind::Delegate
            };
        }
    }
    if type_parameter_shape(identifier).is_some() {
        return TypeNameKind::TypeParameter;
    }
    if identifier.starts_with("p:") && predefined_shape(identifier).is_some() {
        return TypeNameKind::Predefined;
    }
    match regular_shape(identifier) {
        Some(shape) if shape.segments.last().is_some_and(|s| s.array.is_some()) => {
            TypeNameKind::Array
        }
        _ => TypeNameKind::Regular,
    }
}

/// Returns `true` for `""` and `"?"`.
#[must_use]
pub fn is_unknown_type_identifier(identifier: &str) -> bool {
    classify(identifier) == TypeNameKind::Unknown
}

/// Returns `true` for array identifiers of regular, delegate and unknown base types.
///
/// Arrays of type parameters and predefined types stay in their own variant and are not
/// matched here.
#[must_use]
pub fn is_array_type_identifier(identifier: &str) -> bool {
    classify(identifier) == TypeNameKind::Array
}

/// Returns `true` for delegate identifiers, including delegate arrays.
#[must_use]
pub fn is_delegate_type_identifier(identifier: &str) -> bool {
    identifier.starts_with("d:") && delegate_shape(identifier).is_some()
}

/// Returns `true` for bound and unbound type parameters, including `T[]`.
#[must_use]
pub fn is_type_parameter_identifier(identifier: &str) -> bool {
    classify(identifier) == TypeNameKind::TypeParameter
}

/// Returns `true` for `p:<alias>` with a known alias and an optional array suffix.
#[must_use]
pub fn is_predefined_type_identifier(identifier: &str) -> bool {
    classify(identifier) == TypeNameKind::Predefined
}

/// Returns `true` for well-formed, non-array regular type identifiers.
#[must_use]
pub fn is_regular_type_identifier(identifier: &str) -> bool {
    classify(identifier) == TypeNameKind::Regular && regular_shape(identifier).is_some()
}

pub(crate) fn delegate_shape(id: &str) -> Option<DelegateShape> {
    let bytes = id.as_bytes();
    if !id.starts_with("d:[") {
        return None;
    }

    let return_open = 2;
    let return_close = find_corresponding_close_bracket(id, return_open).ok()?;

    let mut declaring_open = return_close + 1;
    while bytes.get(declaring_open) == Some(&b' ') {
        declaring_open += 1;
    }
    if bytes.get(declaring_open) != Some(&b'[') {
        return None;
    }
    let declaring_close = find_corresponding_close_bracket(id, declaring_open).ok()?;

    if bytes.get(declaring_close + 1) != Some(&b'.') {
        return None;
    }
    let params_open = declaring_close + 2;
    if bytes.get(params_open) != Some(&b'(') {
        return None;
    }
    let params_close = find_corresponding_close_bracket(id, params_open).ok()?;
    parse_parameter_list(id, params_open, params_close).ok()?;

    let rest = &id[params_close + 1..];
    let array = if rest.is_empty() {
        None
    } else {
        let (rank, end) = array_suffix_at(id, params_close + 1)?;
        if end != id.len() {
            return None;
        }
        Some((params_close + 1, rank))
    };

    Some(DelegateShape {
        return_open,
        return_close,
        declaring_open,
        declaring_close,
        params_open,
        params_close,
        array,
    })
}

pub(crate) fn type_parameter_shape(id: &str) -> Option<TypeParameterShape> {
    let (head, bound_start) = match id.find("->") {
        Some(arrow) => {
            let after = arrow + 2;
            let skipped = id[after..].len() - id[after..].trim_start().len();
            if after + skipped >= id.len() {
                return None;
            }
            (&id[..arrow], Some(after + skipped))
        }
        None => (id, None),
    };

    let head_end = head.trim_end().len();
    let bytes = id.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return None,
    }
    let mut short_end = 1;
    while short_end < head_end
        && (bytes[short_end].is_ascii_alphanumeric() || bytes[short_end] == b'_')
    {
        short_end += 1;
    }

    let rank = if short_end == head_end {
        None
    } else {
        let (rank, end) = array_suffix_at(id, short_end)?;
        if end != head_end {
            return None;
        }
        Some(rank)
    };

    Some(TypeParameterShape {
        short_end,
        head_end,
        rank,
        bound_start,
    })
}

/// Returns the table entry and the array rank of a `p:` identifier.
pub(crate) fn predefined_shape(
    id: &str,
) -> Option<(&'static predefined::PredefinedEntry, Option<i32>)> {
    let rest = id.strip_prefix("p:")?;
    let alias_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    let entry = predefined::lookup(&rest[..alias_len])?;
    let suffix = &rest[alias_len..];
    if suffix.is_empty() {
        return Some((entry, None));
    }
    match array_suffix_at(suffix, 0) {
        Some((rank, end)) if end == suffix.len() => Some((entry, Some(rank))),
        _ => None,
    }
}

pub(crate) fn regular_kind_prefix_len(id: &str) -> usize {
    match id.get(..2) {
        Some("s:" | "e:" | "i:") => 2,
        _ => 0,
    }
}

/// Strictly parse a regular type identifier.
pub(crate) fn regular_shape(id: &str) -> Option<RegularShape> {
    let prefix_len = regular_kind_prefix_len(id);
    let type_end = find_next_top_level(id, prefix_len, b",").unwrap_or(id.len());
    if type_end == prefix_len {
        return None;
    }

    let parts = split_top_level(id, prefix_len, type_end, b'+').ok()?;
    let last = parts.len() - 1;
    let mut segments = Vec::with_capacity(parts.len());
    let mut start = prefix_len;
    for (idx, part) in parts.iter().enumerate() {
        let end = start + part.len();
        segments.push(segment_shape(id, start, end, idx == last)?);
        start = end + 1;
    }

    Some(RegularShape {
        prefix_len,
        type_end,
        segments,
    })
}

/// Parse a regular type identifier, degrading to a single opaque segment when it is malformed.
pub(crate) fn regular_shape_lenient(id: &str) -> RegularShape {
    regular_shape(id).unwrap_or_else(|| {
        let prefix_len = regular_kind_prefix_len(id);
        let type_end = find_next_top_level(id, prefix_len, b",").unwrap_or(id.len());
        RegularShape {
            prefix_len,
            type_end,
            segments: vec![SegmentShape {
                start: prefix_len,
                end: type_end,
                name_end: type_end,
                has_tick: false,
                array: None,
                list: None,
            }],
        }
    })
}

fn segment_shape(id: &str, start: usize, end: usize, is_last: bool) -> Option<SegmentShape> {
    let bytes = id.as_bytes();
    let mut idx = start;
    while idx < end && bytes[idx] != b'`' && bytes[idx] != b'[' {
        if matches!(bytes[idx], b']' | b'(' | b')' | b',' | b':' | b'?')
            || bytes[idx].is_ascii_whitespace()
        {
            return None;
        }
        idx += 1;
    }
    let name_end = idx;
    if name_end == start {
        return None;
    }

    let mut has_tick = false;
    if idx < end && bytes[idx] == b'`' {
        idx += 1;
        let digits_start = idx;
        while idx < end && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == digits_start {
            return None;
        }
        has_tick = true;
    }

    let mut array = None;
    if let Some((rank, array_end)) = array_suffix_at(id, idx) {
        if !is_last || array_end > end {
            return None;
        }
        array = Some((idx, array_end, rank));
        idx = array_end;
    }

    let mut list = None;
    if idx < end {
        if !has_tick || bytes[idx] != b'[' || bytes.get(idx + 1) != Some(&b'[') {
            return None;
        }
        let close = find_corresponding_close_bracket(id, idx).ok()?;
        if close + 1 != end {
            return None;
        }
        list = Some((idx, close));
        idx = end;
    }

    (idx == end).then_some(SegmentShape {
        start,
        end,
        name_end,
        has_tick,
        array,
        list,
    })
}
