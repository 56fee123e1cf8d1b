//! Removal of type-parameter bindings.
//!
//! Usages of a generic entity carry the types its parameters are bound to, so
//! ``List`1[[T -> p:int]]`` and ``List`1[[T -> p:string]]`` are different names. Statistics over
//! API usage usually want to count them as one. [`RemoveGenerics::remove_generics`] rewrites
//! every bound list entry `[T -> X]` back to its short name `[T]`, leaving the rest of the
//! identifier untouched.
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{generics::RemoveGenerics, MethodName, TypeName};
//!
//! let list = TypeName::new("System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0");
//! assert_eq!(
//!     list.remove_generics(),
//!     TypeName::new("System.Collections.Generic.List`1[[T]], mscorlib, 4.0.0.0")
//! );
//!
//! let method = MethodName::new("[p:void] [n.C`1[[T -> p:int]], P].M`1[[U -> p:bool]]([U] u)")?;
//! assert_eq!(
//!     method.remove_generics().identifier(),
//!     "[p:void] [n.C`1[[T]], P].M`1[[U]]([U] u)"
//! );
//! # Ok::<(), namescope::Error>(())
//! ```

use crate::{
    names::{
        tokenizer::{
            array_suffix_at, find_corresponding_close_bracket, find_next, parse_bracketed_list,
        },
        FieldName, MethodName, PropertyName, TypeInfo, TypeName,
    },
    Result,
};

/// Names whose type-parameter bindings can be removed.
pub trait RemoveGenerics: Sized {
    /// The same name with every `[T -> X]` list entry reduced to `[T]`.
    fn remove_generics(&self) -> Self;
}

impl RemoveGenerics for TypeName {
    fn remove_generics(&self) -> Self {
        TypeName::new(&remove_bindings(self.identifier()))
    }
}

impl RemoveGenerics for MethodName {
    fn remove_generics(&self) -> Self {
        reparse(self, self.identifier(), MethodName::new)
    }
}

impl RemoveGenerics for FieldName {
    fn remove_generics(&self) -> Self {
        reparse(self, self.identifier(), FieldName::new)
    }
}

impl RemoveGenerics for PropertyName {
    fn remove_generics(&self) -> Self {
        reparse(self, self.identifier(), PropertyName::new)
    }
}

fn reparse<T: Clone>(original: &T, identifier: &str, parse: impl FnOnce(&str) -> Result<T>) -> T {
    let stripped = remove_bindings(identifier);
    if stripped == identifier {
        return original.clone();
    }
    parse(&stripped).unwrap_or_else(|err| {
        log::warn!(
            "Removing generics from '{}' produced '{}': {}",
            identifier,
            stripped,
            err
        );
        original.clone()
    })
}

/// Rewrite every type-parameter list that follows an arity tick.
///
/// Bound types are dropped as a whole, so lists nested inside them disappear with them.
/// Malformed lists are copied unchanged.
#[must_use]
pub fn remove_bindings(identifier: &str) -> String {
    let bytes = identifier.as_bytes();
    let mut out = String::with_capacity(identifier.len());
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(tick) = find_next(identifier, cursor, b"`") {
        let mut open = tick + 1;
        while bytes.get(open).is_some_and(u8::is_ascii_digit) {
            open += 1;
        }
        while let Some((_, end)) = array_suffix_at(identifier, open) {
            open = end;
        }
        cursor = open;
        if !identifier[open..].starts_with("[[") {
            continue;
        }

        let Ok(close) = find_corresponding_close_bracket(identifier, open) else {
            break;
        };
        let Ok(entries) = parse_bracketed_list(identifier, open, close) else {
            cursor = close + 1;
            continue;
        };

        out.push_str(&identifier[copied..open]);
        out.push('[');
        for (idx, entry) in entries.iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            out.push('[');
            out.push_str(short_name(entry));
            out.push(']');
        }
        out.push(']');
        copied = close + 1;
        cursor = close + 1;
    }

    out.push_str(&identifier[copied..]);
    out
}

fn short_name(entry: &str) -> &str {
    match entry.find("->") {
        Some(arrow) => entry[..arrow].trim(),
        None => entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_bindings() {
        assert_eq!(remove_bindings("n.C`1[[T -> p:int]], P"), "n.C`1[[T]], P");
        assert_eq!(remove_bindings("n.C`2[[T -> p:int],[U]], P"), "n.C`2[[T],[U]], P");
        assert_eq!(
            remove_bindings("n.C`1[[T -> p:int]]+D`1[[U -> p:bool]], P"),
            "n.C`1[[T]]+D`1[[U]], P"
        );
    }

    #[test]
    fn test_nested_bindings_are_dropped_with_their_parent() {
        assert_eq!(
            remove_bindings("n.C`2[[T -> n.D`1[[U -> p:int]], P],[V]], P"),
            "n.C`2[[T],[V]], P"
        );
    }

    #[test]
    fn test_array_suffix_before_list() {
        assert_eq!(
            remove_bindings("n.C`1[,][[T -> p:int]], P"),
            "n.C`1[,][[T]], P"
        );
    }

    #[test]
    fn test_untouched_identifiers() {
        for id in ["n.C, P", "p:int[]", "T`1,P", "n.C`1[[T]], P", "[?] [?].???()"] {
            assert_eq!(remove_bindings(id), id);
        }
    }

    #[test]
    fn test_malformed_list_is_copied() {
        assert_eq!(remove_bindings("n.C`1[[T -> p:int"), "n.C`1[[T -> p:int");
    }

    #[test]
    fn test_remove_generics_on_members() {
        let method = MethodName::new(
            "[n.C`1[[T -> p:int]], P] [n.D, P].M`1[[U -> p:string]]([n.E`1[[X -> p:int]], P] e)",
        )
        .unwrap();
        assert_eq!(
            method.remove_generics().identifier(),
            "[n.C`1[[T]], P] [n.D, P].M`1[[U]]([n.E`1[[X]], P] e)"
        );

        let field = FieldName::new("[T -> p:int] [n.C`1[[T -> p:int]], P]._f").unwrap();
        assert_eq!(
            field.remove_generics().identifier(),
            "[T -> p:int] [n.C`1[[T]], P]._f"
        );

        let property = PropertyName::new("get [p:int] [n.C`1[[T -> p:int]], P].P()").unwrap();
        assert_eq!(
            property.remove_generics().identifier(),
            "get [p:int] [n.C`1[[T]], P].P()"
        );
    }

    #[test]
    fn test_remove_generics_shares_unchanged_instance() {
        let method = MethodName::new("[p:void] [n.C, P].M([p:int] i)").unwrap();
        let stripped = method.remove_generics();
        assert!(std::ptr::eq(method.parameters(), stripped.parameters()));
    }
}
