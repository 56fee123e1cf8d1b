use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        organization::{AssemblyName, NamespaceName},
        tokenizer::array_suffix,
        types::{classifier::predefined_shape, ArrayType, TypeInfo, TypeName},
    },
    Error, Result,
};

/// Assembly that defines every predefined type.
pub const PREDEFINED_ASSEMBLY: &str = "mscorlib, 4.0.0.0";

/// One row of the alias table.
#[derive(Debug)]
pub(crate) struct PredefinedEntry {
    pub alias: &'static str,
    pub full_name: &'static str,
    pub is_simple: bool,
}

impl PredefinedEntry {
    fn is_void(&self) -> bool {
        self.alias == "void"
    }

    fn is_struct(&self) -> bool {
        self.is_simple || self.is_void()
    }
}

const fn entry(alias: &'static str, full_name: &'static str, is_simple: bool) -> PredefinedEntry {
    PredefinedEntry {
        alias,
        full_name,
        is_simple,
    }
}

static PREDEFINED_TYPES: [PredefinedEntry; 16] = [
    entry("sbyte", "System.SByte", true),
    entry("byte", "System.Byte", true),
    entry("short", "System.Int16", true),
    entry("ushort", "System.UInt16", true),
    entry("int", "System.Int32", true),
    entry("uint", "System.UInt32", true),
    entry("long", "System.Int64", true),
    entry("ulong", "System.UInt64", true),
    entry("char", "System.Char", true),
    entry("float", "System.Single", true),
    entry("double", "System.Double", true),
    entry("bool", "System.Boolean", true),
    entry("decimal", "System.Decimal", true),
    entry("void", "System.Void", false),
    entry("object", "System.Object", false),
    entry("string", "System.String", false),
];

pub(crate) fn lookup(alias: &str) -> Option<&'static PredefinedEntry> {
    PREDEFINED_TYPES.iter().find(|e| e.alias == alias)
}

/// All `(alias, full name)` pairs, in table order.
pub fn predefined_aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    PREDEFINED_TYPES.iter().map(|e| (e.alias, e.full_name))
}

/// Returns the alias for a full name such as `System.Int32`.
#[must_use]
pub fn alias_for_full_name(full_name: &str) -> Option<&'static str> {
    PREDEFINED_TYPES
        .iter()
        .find(|e| e.full_name == full_name)
        .map(|e| e.alias)
}

struct PredefinedInner {
    identifier: String,
    entry: &'static PredefinedEntry,
    rank: Option<i32>,
    full_name: OnceLock<String>,
}

/// A built-in type spelled with its language alias, `p:int` or `p:string[]`.
#[derive(Clone)]
pub struct PredefinedTypeName {
    inner: Arc<PredefinedInner>,
}

impl PredefinedTypeName {
    /// Parse a `p:<alias>` identifier with an optional array suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for unknown aliases and malformed suffixes.
    pub fn new(identifier: &str) -> Result<Self> {
        let (entry, rank) =
            predefined_shape(identifier).ok_or_else(|| Error::InvalidIdentifier {
                kind: "predefined type",
                identifier: identifier.to_string(),
            })?;

        Ok(PredefinedTypeName {
            inner: Arc::new(PredefinedInner {
                identifier: identifier.to_string(),
                entry,
                rank,
                full_name: OnceLock::new(),
            }),
        })
    }

    /// The language alias without prefix and suffix, `int` for `p:int[]`.
    #[must_use]
    pub fn alias(&self) -> &'static str {
        self.inner.entry.alias
    }

    /// The equivalent regular type name of the runtime type.
    ///
    /// Value types carry the `s:` prefix. Reference types and arrays carry none.
    ///
    /// ```rust
    /// use namescope::names::{PredefinedTypeName, TypeInfo};
    ///
    /// let int = PredefinedTypeName::new("p:int")?;
    /// assert_eq!(int.full_type().identifier(), "s:System.Int32, mscorlib, 4.0.0.0");
    ///
    /// let ints = PredefinedTypeName::new("p:int[]")?;
    /// assert_eq!(ints.full_type().identifier(), "System.Int32[], mscorlib, 4.0.0.0");
    /// # Ok::<(), namescope::Error>(())
    /// ```
    #[must_use]
    pub fn full_type(&self) -> TypeName {
        let prefix = if self.is_array() || !self.inner.entry.is_struct() {
            ""
        } else {
            "s:"
        };
        TypeName::new(&format!(
            "{}{}, {}",
            prefix,
            self.full_name(),
            PREDEFINED_ASSEMBLY
        ))
    }

    fn is_plain(&self) -> bool {
        self.inner.rank.is_none()
    }
}

impl_name_identity!(PredefinedTypeName);

impl TypeInfo for PredefinedTypeName {
    fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    fn name(&self) -> &str {
        &self.inner.identifier[2..]
    }

    fn full_name(&self) -> &str {
        self.inner.full_name.get_or_init(|| match self.inner.rank {
            Some(rank) => format!("{}{}", self.inner.entry.full_name, array_suffix(rank)),
            None => self.inner.entry.full_name.to_string(),
        })
    }

    fn namespace(&self) -> NamespaceName {
        NamespaceName::new("System")
    }

    fn assembly(&self) -> AssemblyName {
        AssemblyName::new(PREDEFINED_ASSEMBLY)
    }

    fn declaring_type(&self) -> Option<TypeName> {
        None
    }

    fn is_void_type(&self) -> bool {
        self.is_plain() && self.inner.entry.is_void()
    }

    fn is_value_type(&self) -> bool {
        self.is_struct_type()
    }

    fn is_simple_type(&self) -> bool {
        self.is_plain() && self.inner.entry.is_simple
    }

    fn is_struct_type(&self) -> bool {
        self.is_plain() && self.inner.entry.is_struct()
    }

    fn is_reference_type(&self) -> bool {
        !self.is_plain() || !self.inner.entry.is_struct()
    }

    fn is_class_type(&self) -> bool {
        self.is_plain() && !self.inner.entry.is_struct()
    }

    fn is_array(&self) -> bool {
        !self.is_plain()
    }

    fn is_predefined(&self) -> bool {
        true
    }
}

impl ArrayType for PredefinedTypeName {
    fn rank(&self) -> i32 {
        self.inner.rank.unwrap_or(0)
    }

    fn array_base_type(&self) -> TypeName {
        TypeName::new(&format!("p:{}", self.inner.entry.alias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_table_is_complete() {
        assert_eq!(predefined_aliases().count(), 16);
        for (alias, full_name) in predefined_aliases() {
            let name = PredefinedTypeName::new(&format!("p:{}", alias)).unwrap();
            assert_eq!(name.full_name(), full_name);
            assert_eq!(alias_for_full_name(full_name), Some(alias));
        }
    }

    #[test]
    fn test_predefined_accessors() {
        let int = PredefinedTypeName::new("p:int").unwrap();
        assert_eq!(int.name(), "int");
        assert_eq!(int.alias(), "int");
        assert_eq!(int.full_name(), "System.Int32");
        assert_eq!(int.namespace().identifier(), "System");
        assert_eq!(int.assembly().identifier(), "mscorlib, 4.0.0.0");
        assert!(int.declaring_type().is_none());
        assert!(int.is_predefined());
    }

    #[test]
    fn test_predefined_value_types() {
        for alias in ["int", "bool", "char", "decimal", "double"] {
            let name = PredefinedTypeName::new(&format!("p:{}", alias)).unwrap();
            assert!(name.is_simple_type(), "{}", alias);
            assert!(name.is_struct_type(), "{}", alias);
            assert!(name.is_value_type(), "{}", alias);
            assert!(!name.is_reference_type(), "{}", alias);
            assert!(!name.is_class_type(), "{}", alias);
            assert!(!name.is_void_type(), "{}", alias);
        }
    }

    #[test]
    fn test_predefined_void() {
        let void = PredefinedTypeName::new("p:void").unwrap();
        assert!(void.is_void_type());
        assert!(void.is_value_type());
        assert!(void.is_struct_type());
        assert!(!void.is_simple_type());
        assert!(!void.is_reference_type());
    }

    #[test]
    fn test_predefined_reference_types() {
        for alias in ["object", "string"] {
            let name = PredefinedTypeName::new(&format!("p:{}", alias)).unwrap();
            assert!(name.is_class_type());
            assert!(name.is_reference_type());
            assert!(!name.is_value_type());
            assert!(!name.is_struct_type());
        }
    }

    #[test]
    fn test_predefined_arrays() {
        let ints = PredefinedTypeName::new("p:int[,]").unwrap();
        assert!(ints.is_array());
        assert!(ints.is_reference_type());
        assert!(!ints.is_simple_type());
        assert!(!ints.is_struct_type());
        assert!(!ints.is_class_type());
        assert_eq!(ints.rank(), 2);
        assert_eq!(ints.name(), "int[,]");
        assert_eq!(ints.full_name(), "System.Int32[,]");
        assert_eq!(ints.array_base_type().identifier(), "p:int");
    }

    #[test]
    fn test_predefined_full_type() {
        let string = PredefinedTypeName::new("p:string").unwrap();
        assert_eq!(
            string.full_type().identifier(),
            "System.String, mscorlib, 4.0.0.0"
        );
        let void = PredefinedTypeName::new("p:void").unwrap();
        assert_eq!(
            void.full_type().identifier(),
            "s:System.Void, mscorlib, 4.0.0.0"
        );
    }

    #[test]
    fn test_predefined_invalid() {
        assert!(PredefinedTypeName::new("p:integer").is_err());
        assert!(PredefinedTypeName::new("int").is_err());
        assert!(PredefinedTypeName::new("p:int[").is_err());
    }
}
