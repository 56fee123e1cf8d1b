//! Normalization of legacy identifier spellings.
//!
//! The identifier grammar changed several times while data was already being recorded. Every
//! older spelling that is still found in stored data is rewritten into the current grammar here,
//! before any classification happens. The rules are applied in a fixed order and each rule is a
//! no-op on current-format input. The chain is repeated until a pass changes nothing, so applying
//! [`fix_legacy_formats`] twice yields the same result as applying it once.
//!
//! # Rules
//!
//! 1. Predefined types captured as regular types: `System.Int32, mscorlib, 4.0.0.0` → `p:int`
//! 2. Nullables without struct prefix: `System.Nullable`1[` → `s:System.Nullable`1[`
//! 3. A single type-parameter list for all ticked segments: `n.T1`1+T2`1[[G1],[G2]], P` →
//!    `n.T1`1[[G1]]+T2`1[[G2]], P`
//! 4. Delegates stored as plain types: `d:n.D, P` → `d:[?] [n.D, P].()`
//! 5. Jagged arrays: `A[][,], B` → `A[,,], B`
//! 6. Missing arity ticks: `n.C1`1[[T1]]+C2[[T2]], P` → `n.C1`1[[T1]]+C2`1[[T2]], P`
//! 7. Property accessors without parameter list: `get [?] [?].P` → `get [?] [?].P()`
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::fixes::{fix_identifiers, fix_legacy_formats};
//!
//! assert_eq!(fix_legacy_formats("System.Int32[], mscorlib, 4.0.0.0"), "p:int[]");
//! assert_eq!(fix_legacy_formats("d:n.D,P"), "d:[?] [n.D,P].()");
//! assert_eq!(fix_identifiers("[?] [?].P", Some("0P")), "set get [?] [?].P()");
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::names::{
    tokenizer::{
        find_corresponding_close_bracket, find_corresponding_open_bracket, find_next,
        parse_bracketed_list,
    },
    types::alias_for_full_name,
};

/// Upper bound for the rules that rewrite one occurrence per pass.
const MAX_REWRITES: usize = 256;

/// Upper bound for passes over the whole rule chain.
const MAX_PASSES: usize = 16;

static PREDEFINED_TYPES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:s:)?System\.(Boolean|Byte|Char|Decimal|Double|Int16|Int32|Int64|Object|SByte|Single|String|UInt16|UInt32|UInt64|Void)((?:\[,*\])?),\smscorlib,\s\d+\.\d+\.\d+\.\d+",
    )
    .expect("predefined type pattern is valid")
});

static LEGACY_NULLABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^:])System\.Nullable`1\[").expect("nullable pattern is valid")
});

// The trailing character class stops the tick digits from matching only partially.
static IS_LEGACY_TYPE_PARAMETER_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^+.]+`([0-9]+))[^0-9\[]").expect("legacy list detection pattern is valid")
});

static ALL_LEGACY_TYPE_PARAMETER_LISTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^+.]+`([0-9]+))[^0-9]").expect("legacy list pattern is valid")
});

static LEGACY_DELEGATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"d:[^\[]").expect("legacy delegate pattern is valid"));

static MISSING_TICKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+|^|\.)([a-zA-Z0-9_]+)(\[,*\])?(\[\[.*)").expect("missing tick pattern is valid")
});

static JAGGED_ARRAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[,*\](?:\[,*\])+").expect("jagged array pattern is valid"));

static MISSING_PARENTHESES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(get|set) .*[^)]$").expect("property parenthesis pattern is valid")
});

static NO_ACCESSOR_MODIFIERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(static)?\s*\[").expect("property modifier pattern is valid")
});

/// Framework types whose type-parameter lists were never recorded.
const MANUAL_TYPE_PARAMETER_FIXES: [(&str, &str); 12] = [
    (
        "s:System.Data.Entity.Core.Metadata.Edm.ReadOnlyMetadataCollection`1+Enumerator, EntityFramework, 6.0.0.0",
        "s:System.Data.Entity.Core.Metadata.Edm.ReadOnlyMetadataCollection`1[[T]]+Enumerator, EntityFramework, 6.0.0.0",
    ),
    (
        "System.Collections.Generic.Dictionary`2+KeyCollection, mscorlib, 4.0.0.0",
        "System.Collections.Generic.Dictionary`2[[TKey],[TValue]]+KeyCollection, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.Generic.Dictionary`2+ValueCollection, mscorlib, 4.0.0.0",
        "System.Collections.Generic.Dictionary`2[[TKey],[TValue]]+ValueCollection, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.ObjectModel.ReadOnlyDictionary`2+KeyCollection, mscorlib, 4.0.0.0",
        "System.Collections.ObjectModel.ReadOnlyDictionary`2[[TKey],[TValue]]+KeyCollection, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.ObjectModel.ReadOnlyDictionary`2+ValueCollection, mscorlib, 4.0.0.0",
        "System.Collections.ObjectModel.ReadOnlyDictionary`2[[TKey],[TValue]]+ValueCollection, mscorlib, 4.0.0.0",
    ),
    (
        "s:System.Collections.Generic.Dictionary`2+Enumerator, mscorlib, 4.0.0.0",
        "s:System.Collections.Generic.Dictionary`2[[TKey],[TValue]]+Enumerator, mscorlib, 4.0.0.0",
    ),
    (
        "s:System.Collections.Immutable.ImmutableArray`1+Enumerator, System.Collections.Immutable, 1.1.37.0",
        "s:System.Collections.Immutable.ImmutableArray`1[[T]]+Enumerator, System.Collections.Immutable, 1.1.37.0",
    ),
    (
        "d:[TValue] [System.Runtime.CompilerServices.ConditionalWeakTable`2+CreateValueCallback, mscorlib, 4.0.0.0].([TKey] key)",
        "d:[TValue] [System.Runtime.CompilerServices.ConditionalWeakTable`2[[TKey],[TValue]]+CreateValueCallback, mscorlib, 4.0.0.0].([TKey] key)",
    ),
    (
        "s:System.Collections.Generic.List`1+Enumerator, mscorlib, 4.0.0.0",
        "s:System.Collections.Generic.List`1[[T]]+Enumerator, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.Generic.List`1+SynchronizedList, mscorlib, 4.0.0.0",
        "System.Collections.Generic.List`1[[T]]+SynchronizedList, mscorlib, 4.0.0.0",
    ),
    (
        "s:System.Collections.Generic.LinkedList`1+Enumerator, System, 4.0.0.0",
        "s:System.Collections.Generic.LinkedList`1[[T]]+Enumerator, System, 4.0.0.0",
    ),
    (
        "System.Collections.Generic.SortedDictionary`2+KeyCollection, System, 4.0.0.0",
        "System.Collections.Generic.SortedDictionary`2[[TKey],[TValue]]+KeyCollection, System, 4.0.0.0",
    ),
];

/// Method identifiers that an earlier, broken normalizer produced.
const BROKEN_METHOD_FIXES: [(&str, &str); 3] = [
    (
        "[d:[TResult] [System.Func`10[[T9]][[TResult],[System.Func`10[[T9]][[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0],[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8]][[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0].([T1] arg1, [T2] arg2, [T3] arg3, [T4] arg4, [T5] arg5, [T6] arg6, [T7] arg7, [T8] arg8, [T9] arg9)] ..ctor()",
        "[d:[TResult] [System.Func`10[[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0].([T1] arg1, [T2] arg2, [T3] arg3, [T4] arg4, [T5] arg5, [T6] arg6, [T7] arg7, [T8] arg8, [T9] arg9)] [d:[TResult] [System.Func`10[[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0].([T1] arg1, [T2] arg2, [T3] arg3, [T4] arg4, [T5] arg5, [T6] arg6, [T7] arg7, [T8] arg8, [T9] arg9)]..ctor()",
    ),
    (
        "[s:System.Collections.Generic.List`1[][[[T -> T]]]+Enumerator, mscorlib, 4.0.0.0] .GetEnumerator()",
        "[s:System.Collections.Generic.List`1[[T -> T]]+Enumerator, mscorlib, 4.0.0.0] [System.Collections.Generic.List`1[[T -> T]], mscorlib, 4.0.0.0].GetEnumerator()",
    ),
    ("[p:void] ..ctor()", "[?] [?].???()"),
];

/// Repair a serialized identifier whose wire prefix is known.
///
/// Besides the general rules of [`fix_legacy_formats`], this repairs method identifiers broken
/// by an earlier normalizer (prefix `0M`) and properties recorded without accessor modifiers
/// (prefixes `0P` and `CSharp.PropertyName`).
#[must_use]
pub fn fix_identifiers(identifier: &str, prefix: Option<&str>) -> String {
    match prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => {
            let repaired = fix_broken_methods(identifier, prefix);
            let repaired = fix_properties_without_accessors(&repaired, prefix);
            fix_legacy_formats(&repaired)
        }
        None => fix_legacy_formats(identifier),
    }
}

/// Rewrite every legacy spelling in `text` into the current grammar.
///
/// The result is a fixpoint of the rule chain: `fix_legacy_formats(fix_legacy_formats(x))`
/// equals `fix_legacy_formats(x)`.
#[must_use]
pub fn fix_legacy_formats(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_PASSES {
        let next = apply_rules(&current);
        if next == current {
            return next;
        }
        current = next;
    }
    log::warn!("Legacy fixes did not settle: '{}'", text);
    current
}

fn apply_rules(text: &str) -> String {
    let fixed = fix_predefined_types(text);
    let fixed = fix_legacy_nullable(&fixed);
    let fixed = fix_legacy_type_parameter_lists(&fixed);
    let fixed = fix_legacy_delegates(&fixed);
    let fixed = fix_jagged_arrays(&fixed);
    let fixed = fix_missing_generic_ticks(&fixed);
    fix_missing_parentheses(&fixed)
}

fn log_rewrite(rule: &str, before: &str, after: &str) {
    if before != after {
        log::debug!("Fixed {}: '{}' -> '{}'", rule, before, after);
    }
}

fn fix_broken_methods(identifier: &str, prefix: &str) -> String {
    if prefix != "0M" {
        return identifier.to_string();
    }
    match BROKEN_METHOD_FIXES.iter().find(|(broken, _)| *broken == identifier) {
        Some((_, fixed)) => {
            log_rewrite("broken method", identifier, fixed);
            (*fixed).to_string()
        }
        None => identifier.to_string(),
    }
}

fn fix_properties_without_accessors(identifier: &str, prefix: &str) -> String {
    if !(prefix == "0P" || prefix == "CSharp.PropertyName") || identifier == "[?] [?].???" {
        return identifier.to_string();
    }
    let Some(caps) = NO_ACCESSOR_MODIFIERS.captures(identifier) else {
        return identifier.to_string();
    };
    let Some(open) = identifier.find('[') else {
        return identifier.to_string();
    };
    let modifier = if caps.get(1).is_some() { "static " } else { "" };
    let fixed = format!("set get {}{}", modifier, &identifier[open..]);
    log_rewrite("property accessors", identifier, &fixed);
    fixed
}

fn fix_predefined_types(text: &str) -> String {
    let fixed = PREDEFINED_TYPES.replace_all(text, |caps: &Captures| {
        match alias_for_full_name(&format!("System.{}", &caps[1])) {
            Some(alias) => format!("p:{}{}", alias, &caps[2]),
            None => caps[0].to_string(),
        }
    });
    log_rewrite("predefined types", text, &fixed);
    fixed.into_owned()
}

fn fix_legacy_nullable(text: &str) -> String {
    let fixed = LEGACY_NULLABLE.replace_all(text, "${1}s:System.Nullable`1[");
    log_rewrite("nullable", text, &fixed);
    fixed.into_owned()
}

fn is_no_legacy_type_parameter_list(text: &str) -> bool {
    text.starts_with("vsWindowTypeDocument ")
        || text.starts_with("CSharp ")
        || text.ends_with(".cs")
        || !IS_LEGACY_TYPE_PARAMETER_LIST.is_match(text)
}

fn fix_legacy_type_parameter_lists(text: &str) -> String {
    if is_no_legacy_type_parameter_list(text) {
        return text.to_string();
    }

    let mut id = text.to_string();
    for (invalid, valid) in MANUAL_TYPE_PARAMETER_FIXES {
        id = id.replace(invalid, valid);
    }
    if is_no_legacy_type_parameter_list(&id) {
        log_rewrite("framework type parameters", text, &id);
        return id;
    }

    let Some(last) = id.rfind("]]") else {
        log::warn!("Identifier has tick, but no type parameters: '{}'", id);
        return id;
    };
    let close = last + 1;
    let Ok(open) = find_corresponding_open_bracket(&id, close) else {
        return id;
    };
    let Ok(parameters) = parse_bracketed_list(&id, open, close) else {
        return id;
    };

    let mut before = id[..open].to_string();
    let after = &id[close + 1..];
    let mut taken = 0usize;
    for caps in ALL_LEGACY_TYPE_PARAMETER_LISTS.captures_iter(&id) {
        let hit = &caps[1];
        let ticks: usize = caps[2].parse().unwrap_or(0);
        let until = taken.saturating_add(ticks).min(parameters.len());
        let entries: Vec<String> = parameters[taken..until]
            .iter()
            .map(|p| format!("[{}]", p))
            .collect();
        taken = until;
        before = before.replace(hit, &format!("{}[{}]", hit, entries.join(",")));
    }

    let fixed = format!("{}{}", before, after);
    log_rewrite("legacy type parameter list", text, &fixed);
    fixed
}

fn fix_legacy_delegates(text: &str) -> String {
    let mut id = text.to_string();
    for _ in 0..MAX_REWRITES {
        let Some(found) = LEGACY_DELEGATE.find(&id) else {
            break;
        };
        let start = found.start();
        let end = find_next(&id, start, b"]").unwrap_or(id.len());
        let old = id[start + 2..end].to_string();
        id = id.replace(&format!("d:{}", old), &format!("d:[?] [{}].()", old));
    }
    log_rewrite("legacy delegate", text, &id);
    id
}

/// Count the entries of the `[[...]]` list that starts `rest`.
fn count_list_entries(rest: &str) -> Option<usize> {
    let end = find_corresponding_close_bracket(rest, 0).ok()?;
    let mut count = 0;
    let mut current = 1;
    while current < end {
        count += 1;
        let open = find_next(rest, current, b"[")?;
        let close = find_corresponding_close_bracket(rest, open).ok()?;
        current = find_next(rest, close + 1, b",]")?;
    }
    Some(count)
}

fn fix_missing_generic_ticks(text: &str) -> String {
    let mut id = text.to_string();
    for _ in 0..MAX_REWRITES {
        let Some(caps) = MISSING_TICKS.captures(&id) else {
            break;
        };
        let name = &caps[1];
        let array = caps.get(2).map_or("", |m| m.as_str());
        let Some(ticks) = count_list_entries(&caps[3]) else {
            break;
        };
        let from = format!("{}{}[[", name, array);
        let to = format!("{}`{}{}[[", name, ticks, array);
        let next = id.replace(&from, &to);
        if next == id {
            break;
        }
        id = next;
    }
    log_rewrite("missing generic tick", text, &id);
    id
}

fn fix_jagged_arrays(text: &str) -> String {
    let fixed = JAGGED_ARRAYS.replace_all(text, |caps: &Captures| {
        let rank = caps[0].bytes().filter(|b| *b == b'[' || *b == b',').count();
        format!("[{}]", ",".repeat(rank.saturating_sub(1)))
    });
    log_rewrite("jagged array", text, &fixed);
    fixed.into_owned()
}

fn fix_missing_parentheses(text: &str) -> String {
    if MISSING_PARENTHESES.is_match(text) {
        let fixed = format!("{}()", text);
        log_rewrite("property parentheses", text, &fixed);
        return fixed;
    }
    text.to_string()
}
