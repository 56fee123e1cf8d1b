use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        organization::{AssemblyName, NamespaceName},
        tokenizer::{array_suffix, array_suffix_at},
        types::{
            classifier::{delegate_shape, regular_shape},
            ArrayType, TypeInfo, TypeName, TypeNameKind, TypeParameterName,
        },
    },
    Error, Result,
};

struct ArrayInner {
    identifier: String,
    suffix_start: usize,
    suffix_end: usize,
    rank: i32,
    /// End of the type part when the base is a regular type
    regular_type_end: Option<(usize, usize)>,
    base: OnceLock<TypeName>,
    name: OnceLock<String>,
    full_name: OnceLock<String>,
}

/// An array of a regular, delegate or unknown element type.
///
/// The suffix position depends on the element type: `T[],P` and `n.C`1[][[T]], P` for regular
/// types, `d:[?] [?].()[]` for delegates and `?[]` for the unknown type. Arrays of type
/// parameters and predefined types are represented by those variants instead.
#[derive(Clone)]
pub struct ArrayTypeName {
    inner: Arc<ArrayInner>,
}

impl ArrayTypeName {
    /// Parse an array identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `identifier` does not classify as an array.
    pub fn new(identifier: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentifier {
            kind: "array type",
            identifier: identifier.to_string(),
        };
        if super::classify(identifier) != TypeNameKind::Array {
            return Err(invalid());
        }

        let mut regular_type_end = None;
        let (suffix_start, suffix_end, rank) = if identifier.starts_with('?') {
            let (rank, end) = array_suffix_at(identifier, 1).ok_or_else(invalid)?;
            (1, end, rank)
        } else if let Some(shape) = delegate_shape(identifier) {
            let (start, rank) = shape.array.ok_or_else(invalid)?;
            (start, identifier.len(), rank)
        } else {
            let shape = regular_shape(identifier).ok_or_else(invalid)?;
            let (start, end, rank) = shape
                .segments
                .last()
                .and_then(|s| s.array)
                .ok_or_else(invalid)?;
            regular_type_end = Some((shape.prefix_len, shape.type_end));
            (start, end, rank)
        };

        Ok(ArrayTypeName {
            inner: Arc::new(ArrayInner {
                identifier: identifier.to_string(),
                suffix_start,
                suffix_end,
                rank,
                regular_type_end,
                base: OnceLock::new(),
                name: OnceLock::new(),
                full_name: OnceLock::new(),
            }),
        })
    }

    /// Derive the array of `base` with `rank` dimensions.
    ///
    /// Arrays of arrays compose their ranks: `from(p:int[], 1)` is `p:int[,]`. Type-parameter and
    /// predefined element types keep their own variant.
    ///
    /// ```rust
    /// use namescope::names::{ArrayTypeName, TypeName};
    ///
    /// let ints = ArrayTypeName::from(&TypeName::new("p:int"), 1)?;
    /// assert_eq!(ints, TypeName::new("p:int[]"));
    ///
    /// let nested = ArrayTypeName::from(&TypeName::new("n.C`1[[T]]+D, P"), 2)?;
    /// assert_eq!(nested, TypeName::new("n.C`1[[T]]+D[,], P"));
    /// # Ok::<(), namescope::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRank`] if `rank` is smaller than 1, or if the combined rank of an
    /// array base does not fit an `i32`.
    pub fn from(base: &TypeName, rank: i32) -> Result<TypeName> {
        if rank < 1 {
            return Err(Error::InvalidRank(rank));
        }
        if let Ok(array) = base.as_array_type() {
            let element = array.array_base_type();
            let combined = array
                .rank()
                .checked_add(rank)
                .ok_or(Error::InvalidRank(rank))?;
            return Self::from(&element, combined);
        }

        let id = base.identifier();
        let suffix = array_suffix(rank);
        let composed = match base {
            TypeName::Unknown(_) => format!("?{}", suffix),
            TypeName::TypeParameter(tp) => insert_at(id, tp.short_end(), &suffix),
            TypeName::Regular(regular) => {
                let at = regular
                    .shape()
                    .segments
                    .last()
                    .map(|s| s.list.map_or(s.end, |(open, _)| open))
                    .unwrap_or(id.len());
                insert_at(id, at, &suffix)
            }
            _ => format!("{}{}", id, suffix),
        };
        Ok(TypeName::new(&composed))
    }

    fn suffix(&self) -> &str {
        &self.inner.identifier[self.inner.suffix_start..self.inner.suffix_end]
    }

    fn base(&self) -> &TypeName {
        self.inner.base.get_or_init(|| {
            let id = &self.inner.identifier;
            TypeName::new(&format!(
                "{}{}",
                &id[..self.inner.suffix_start],
                &id[self.inner.suffix_end..]
            ))
        })
    }
}

fn insert_at(id: &str, at: usize, suffix: &str) -> String {
    format!("{}{}{}", &id[..at], suffix, &id[at..])
}

impl_name_identity!(ArrayTypeName);

impl TypeInfo for ArrayTypeName {
    fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    fn name(&self) -> &str {
        self.inner
            .name
            .get_or_init(|| format!("{}{}", self.base().name(), self.suffix()))
    }

    fn full_name(&self) -> &str {
        if let Some((start, end)) = self.inner.regular_type_end {
            return &self.inner.identifier[start..end];
        }
        self.inner
            .full_name
            .get_or_init(|| format!("{}{}", self.base().full_name(), self.suffix()))
    }

    fn namespace(&self) -> NamespaceName {
        self.base().namespace()
    }

    fn assembly(&self) -> AssemblyName {
        self.base().assembly()
    }

    fn declaring_type(&self) -> Option<TypeName> {
        self.base().declaring_type()
    }

    fn is_nested_type(&self) -> bool {
        self.base().is_nested_type()
    }

    fn is_enum_type(&self) -> bool {
        self.base().is_enum_type()
    }

    fn is_reference_type(&self) -> bool {
        true
    }

    fn is_interface_type(&self) -> bool {
        self.base().is_interface_type()
    }

    fn is_delegate_type(&self) -> bool {
        self.base().is_delegate_type()
    }

    fn is_array(&self) -> bool {
        true
    }

    fn is_generic_entity(&self) -> bool {
        self.base().is_generic_entity()
    }

    fn type_parameters(&self) -> &[TypeParameterName] {
        self.base().type_parameters()
    }
}

impl ArrayType for ArrayTypeName {
    fn rank(&self) -> i32 {
        self.inner.rank
    }

    fn array_base_type(&self) -> TypeName {
        self.base().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(id: &str) -> ArrayTypeName {
        ArrayTypeName::new(id).unwrap()
    }

    #[test]
    fn test_regular_array() {
        let a = array("T[],P");
        assert_eq!(a.rank(), 1);
        assert_eq!(a.array_base_type().identifier(), "T,P");
        assert_eq!(a.name(), "T[]");
        assert_eq!(a.full_name(), "T[]");
        assert_eq!(a.assembly().identifier(), "P");
        assert!(a.is_array());
        assert!(a.is_reference_type());
        assert!(!a.is_class_type());
        assert!(!a.is_struct_type());
    }

    #[test]
    fn test_generic_array() {
        let a = array("n.C`1[,][[T -> p:int]], P");
        assert_eq!(a.rank(), 2);
        assert_eq!(
            a.array_base_type().identifier(),
            "n.C`1[[T -> p:int]], P"
        );
        assert_eq!(a.name(), "C[,]");
        assert_eq!(a.full_name(), "n.C`1[,][[T -> p:int]]");
        assert_eq!(a.namespace().identifier(), "n");
        assert!(a.is_generic_entity());
        assert_eq!(a.type_parameters().len(), 1);
        assert!(std::ptr::eq(a.type_parameters(), a.type_parameters()));
    }

    #[test]
    fn test_nested_array() {
        let a = array("n.C`1[[T]]+D[], P");
        assert!(a.is_nested_type());
        assert_eq!(a.name(), "D[]");
        assert_eq!(a.declaring_type().unwrap().identifier(), "n.C`1[[T]], P");
    }

    #[test]
    fn test_kind_comes_from_base() {
        assert!(array("e:n.E[], P").is_enum_type());
        assert!(array("i:n.I[], P").is_interface_type());
        assert!(!array("s:n.S[], P").is_struct_type());
        assert!(!array("s:n.S[], P").is_value_type());
    }

    #[test]
    fn test_delegate_array() {
        let a = array("d:[?] [n.D, P].()[]");
        assert!(a.is_delegate_type());
        assert_eq!(a.array_base_type().identifier(), "d:[?] [n.D, P].()");
        assert_eq!(a.name(), "D[]");
        assert_eq!(a.full_name(), "n.D[]");
    }

    #[test]
    fn test_unknown_array() {
        let a = array("?[,]");
        assert_eq!(a.rank(), 2);
        assert!(a.array_base_type().is_unknown());
        assert!(!a.is_unknown());
        assert_eq!(a.name(), "?[,]");
    }

    #[test]
    fn test_from_inserts_suffix_per_shape() {
        let cases = [
            ("?", 1, "?[]"),
            ("p:int", 1, "p:int[]"),
            ("T", 2, "T[,]"),
            ("T -> p:int", 1, "T[] -> p:int"),
            ("T,P", 1, "T[],P"),
            ("n.C`1[[T]], P", 1, "n.C`1[][[T]], P"),
            ("n.C`1[[T]]+D, P", 1, "n.C`1[[T]]+D[], P"),
            ("d:[?] [n.D, P].()", 1, "d:[?] [n.D, P].()[]"),
        ];
        for (base, rank, expected) in cases {
            let derived = ArrayTypeName::from(&TypeName::new(base), rank).unwrap();
            assert_eq!(derived.identifier(), expected, "{}", base);
            assert_eq!(derived, TypeName::new(expected));
            assert_eq!(derived.as_array_type().unwrap().rank(), rank);
            assert_eq!(
                derived.as_array_type().unwrap().array_base_type(),
                TypeName::new(base)
            );
        }
    }

    #[test]
    fn test_from_composes_ranks() {
        let cases = [
            ("p:int[]", "p:int[,]"),
            ("T[] -> p:int", "T[,] -> p:int"),
            ("T[],P", "T[,],P"),
            ("?[]", "?[,]"),
        ];
        for (base, expected) in cases {
            let derived = ArrayTypeName::from(&TypeName::new(base), 1).unwrap();
            assert_eq!(derived.identifier(), expected);
        }
    }

    #[test]
    fn test_from_rejects_invalid_rank() {
        let base = TypeName::new("T,P");
        assert_eq!(ArrayTypeName::from(&base, 0), Err(Error::InvalidRank(0)));
        assert_eq!(ArrayTypeName::from(&base, -3), Err(Error::InvalidRank(-3)));
    }

    #[test]
    fn test_from_rejects_rank_overflow() {
        for base in ["p:int[]", "T[]", "n.C[,], P"] {
            assert_eq!(
                ArrayTypeName::from(&TypeName::new(base), i32::MAX),
                Err(Error::InvalidRank(i32::MAX)),
                "{}",
                base
            );
        }
    }

    #[test]
    fn test_new_rejects_non_arrays() {
        assert!(ArrayTypeName::new("T,P").is_err());
        assert!(ArrayTypeName::new("p:int[]").is_err());
        assert!(ArrayTypeName::new("T[]").is_err());
    }
}
