//! Type names: six identifier shapes behind one capability surface.
//!
//! [`TypeName`] is a closed sum over the variants a type identifier can denote. Each variant
//! wraps its identifier together with lazily filled caches, so cloning is cheap and derived
//! parts (type parameters, base types, return types) are parsed at most once per instance.
//! The shared surface lives in [`TypeInfo`]; every variant and [`TypeName`] itself implement it.
//!
//! # Key Components
//!
//! - [`TypeName`] - The sum type, constructed with [`TypeName::new`] or [`TypeName::parse`]
//! - [`TypeInfo`] - Accessors, classification predicates and type-parameter lists
//! - [`ArrayType`] - Rank and base type of anything that can carry an array suffix
//! - [`TypeNameKind`] - The variant tag produced by [`classify`]
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{TypeInfo, TypeName};
//!
//! let nested = TypeName::parse("n.T1+T2, P");
//! assert!(nested.is_nested_type());
//! assert_eq!(nested.declaring_type(), Some(TypeName::parse("n.T1, P")));
//!
//! let list = TypeName::parse("System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0");
//! assert_eq!(list.name(), "List");
//! assert_eq!(list.namespace().identifier(), "System.Collections.Generic");
//! assert_eq!(list.type_parameters()[0].type_parameter_type(), TypeName::parse("p:int"));
//! ```

mod array;
mod classifier;
mod delegate;
mod predefined;
mod regular;
mod typeparameter;
mod unknown;

pub use array::ArrayTypeName;
pub use classifier::{
    classify, is_array_type_identifier, is_delegate_type_identifier,
    is_predefined_type_identifier, is_regular_type_identifier, is_type_parameter_identifier,
    is_unknown_type_identifier,
};
pub use delegate::DelegateTypeName;
pub use predefined::{
    alias_for_full_name, predefined_aliases, PredefinedTypeName, PREDEFINED_ASSEMBLY,
};
pub use regular::RegularTypeName;
pub use typeparameter::TypeParameterName;
pub use unknown::UnknownTypeName;

use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{
    names::{fixes::fix_legacy_formats, AssemblyName, NamespaceName},
    Error, Result,
};

/// The variant a type identifier denotes.
#[derive(
    Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, EnumIter, EnumCount, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TypeNameKind {
    /// `?` or the empty string
    Unknown,
    /// `p:<alias>`, optionally with an array suffix
    Predefined,
    /// A regular, delegate or unknown base type with an array suffix
    Array,
    /// `d:[R] [D].(P)`
    Delegate,
    /// `T`, `T[]` or `T -> X`
    TypeParameter,
    /// Everything else
    Regular,
}

/// The capability surface shared by every type name.
///
/// Predicates default to `false`; each variant overrides the ones that apply to it.
pub trait TypeInfo {
    /// The canonical identifier, the sole source of truth of the name.
    fn identifier(&self) -> &str;

    /// Returns `true` for the unknown type.
    fn is_unknown(&self) -> bool {
        false
    }

    /// Returns `true` if the identifier contains anonymized (hashed) parts.
    fn is_hashed(&self) -> bool {
        self.identifier().contains("==")
    }

    /// The simple name, without namespace, arity tick or type-parameter list.
    fn name(&self) -> &str;

    /// The namespace-qualified name without kind prefix and assembly.
    fn full_name(&self) -> &str;

    /// The namespace of the (outermost declaring) type.
    fn namespace(&self) -> NamespaceName;

    /// The assembly that defines the type.
    fn assembly(&self) -> AssemblyName;

    /// The enclosing type of a nested type.
    fn declaring_type(&self) -> Option<TypeName>;

    /// Returns `true` for nested types such as `n.Outer+Inner, P`.
    fn is_nested_type(&self) -> bool {
        false
    }

    /// Returns `true` for `System.Void`.
    fn is_void_type(&self) -> bool {
        false
    }

    /// Returns `true` for structs, enums and void.
    fn is_value_type(&self) -> bool {
        false
    }

    /// Returns `true` for the built-in numeric types, `char` and `bool`.
    fn is_simple_type(&self) -> bool {
        false
    }

    /// Returns `true` for enums.
    fn is_enum_type(&self) -> bool {
        false
    }

    /// Returns `true` for structs, including simple types, void and nullables.
    fn is_struct_type(&self) -> bool {
        false
    }

    /// Returns `true` for `System.Nullable`1`.
    fn is_nullable_type(&self) -> bool {
        false
    }

    /// Returns `true` for classes, interfaces, arrays and delegates.
    fn is_reference_type(&self) -> bool {
        false
    }

    /// Returns `true` for classes.
    fn is_class_type(&self) -> bool {
        false
    }

    /// Returns `true` for interfaces.
    fn is_interface_type(&self) -> bool {
        false
    }

    /// Returns `true` for delegates.
    fn is_delegate_type(&self) -> bool {
        false
    }

    /// Returns `true` if the identifier carries an array suffix.
    fn is_array(&self) -> bool {
        false
    }

    /// Returns `true` for `p:` types.
    fn is_predefined(&self) -> bool {
        false
    }

    /// Returns `true` for (non-array) type parameters.
    fn is_type_parameter(&self) -> bool {
        false
    }

    /// Returns `true` if the type has an arity tick, with or without a parameter list.
    fn is_generic_entity(&self) -> bool {
        false
    }

    /// Returns `true` if [`TypeInfo::type_parameters`] is not empty.
    fn has_type_parameters(&self) -> bool {
        !self.type_parameters().is_empty()
    }

    /// The type parameters of all segments, in order.
    ///
    /// The list is computed once; repeated calls return the same slice.
    fn type_parameters(&self) -> &[TypeParameterName] {
        &[]
    }
}

/// Anything that can carry an array suffix.
pub trait ArrayType: TypeInfo {
    /// Number of dimensions: `[]` is 1, `[,]` is 2.
    fn rank(&self) -> i32;

    /// The element type, the identifier without its array suffix.
    fn array_base_type(&self) -> TypeName;
}

/// A type identifier, resolved into one of six variants.
///
/// Equality, ordering and hashing use the identifier only.
#[derive(Clone)]
pub enum TypeName {
    /// See [`UnknownTypeName`]
    Unknown(UnknownTypeName),
    /// See [`PredefinedTypeName`]
    Predefined(PredefinedTypeName),
    /// See [`ArrayTypeName`]
    Array(ArrayTypeName),
    /// See [`DelegateTypeName`]
    Delegate(DelegateTypeName),
    /// See [`TypeParameterName`]
    TypeParameter(TypeParameterName),
    /// See [`RegularTypeName`]
    Regular(RegularTypeName),
}

impl TypeName {
    /// Classify `identifier` and wrap it in the matching variant.
    ///
    /// Construction is total: identifiers that fit no grammar rule become
    /// [`TypeName::Regular`] with best-effort accessors. Legacy spellings are not rewritten;
    /// use [`TypeName::parse`] for input of unknown provenance.
    #[must_use]
    pub fn new(identifier: &str) -> TypeName {
        let fallback = || TypeName::Regular(RegularTypeName::from_classified(identifier));
        match classify(identifier) {
            TypeNameKind::Unknown => {
                TypeName::Unknown(UnknownTypeName::from_classified(identifier))
            }
            TypeNameKind::Predefined => PredefinedTypeName::new(identifier)
                .map(TypeName::Predefined)
                .unwrap_or_else(|_| fallback()),
            TypeNameKind::Array => ArrayTypeName::new(identifier)
                .map(TypeName::Array)
                .unwrap_or_else(|_| fallback()),
            TypeNameKind::Delegate => DelegateTypeName::new(identifier)
                .map(TypeName::Delegate)
                .unwrap_or_else(|_| fallback()),
            TypeNameKind::TypeParameter => TypeParameterName::new(identifier)
                .map(TypeName::TypeParameter)
                .unwrap_or_else(|_| fallback()),
            TypeNameKind::Regular => fallback(),
        }
    }

    /// Normalize legacy spellings with [`fix_legacy_formats`], then classify.
    #[must_use]
    pub fn parse(raw: &str) -> TypeName {
        TypeName::new(&fix_legacy_formats(raw))
    }

    /// The unknown type, `?`.
    #[must_use]
    pub fn unknown() -> TypeName {
        TypeName::Unknown(UnknownTypeName::default())
    }

    /// The variant tag of this name.
    #[must_use]
    pub fn kind(&self) -> TypeNameKind {
        match self {
            TypeName::Unknown(_) => TypeNameKind::Unknown,
            TypeName::Predefined(_) => TypeNameKind::Predefined,
            TypeName::Array(_) => TypeNameKind::Array,
            TypeName::Delegate(_) => TypeNameKind::Delegate,
            TypeName::TypeParameter(_) => TypeNameKind::TypeParameter,
            TypeName::Regular(_) => TypeNameKind::Regular,
        }
    }

    fn kind_name(&self) -> &'static str {
        self.kind().into()
    }

    /// View this name as an array.
    ///
    /// Succeeds for array names and for type-parameter and predefined names that carry an
    /// array suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConversion`] for every other name.
    pub fn as_array_type(&self) -> Result<&dyn ArrayType> {
        match self {
            TypeName::Array(array) => Ok(array),
            TypeName::TypeParameter(tp) if tp.is_array() => Ok(tp),
            TypeName::Predefined(p) if p.is_array() => Ok(p),
            _ => Err(Error::InvalidConversion {
                from: self.kind_name(),
                to: "array",
            }),
        }
    }

    /// View this name as a delegate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConversion`] unless this is a [`TypeName::Delegate`].
    pub fn as_delegate_type(&self) -> Result<&DelegateTypeName> {
        match self {
            TypeName::Delegate(delegate) => Ok(delegate),
            _ => Err(Error::InvalidConversion {
                from: self.kind_name(),
                to: "delegate",
            }),
        }
    }

    /// View this name as a type parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConversion`] unless this is a [`TypeName::TypeParameter`]
    /// without array suffix. `T[]` converts with [`TypeName::as_array_type`] instead.
    pub fn as_type_parameter(&self) -> Result<&TypeParameterName> {
        match self {
            TypeName::TypeParameter(tp) if !tp.is_array() => Ok(tp),
            TypeName::TypeParameter(_) => Err(Error::InvalidConversion {
                from: "array",
                to: "type_parameter",
            }),
            _ => Err(Error::InvalidConversion {
                from: self.kind_name(),
                to: "type_parameter",
            }),
        }
    }

    /// View this name as a predefined type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConversion`] unless this is a [`TypeName::Predefined`].
    pub fn as_predefined_type(&self) -> Result<&PredefinedTypeName> {
        match self {
            TypeName::Predefined(p) => Ok(p),
            _ => Err(Error::InvalidConversion {
                from: self.kind_name(),
                to: "predefined",
            }),
        }
    }
}

impl Default for TypeName {
    fn default() -> Self {
        TypeName::unknown()
    }
}

impl From<TypeParameterName> for TypeName {
    fn from(value: TypeParameterName) -> Self {
        TypeName::TypeParameter(value)
    }
}

impl TypeInfo for TypeName {
    fn identifier(&self) -> &str {
        dispatch_type!(self, t => t.identifier())
    }

    fn is_unknown(&self) -> bool {
        dispatch_type!(self, t => t.is_unknown())
    }

    fn is_hashed(&self) -> bool {
        dispatch_type!(self, t => t.is_hashed())
    }

    fn name(&self) -> &str {
        dispatch_type!(self, t => t.name())
    }

    fn full_name(&self) -> &str {
        dispatch_type!(self, t => t.full_name())
    }

    fn namespace(&self) -> NamespaceName {
        dispatch_type!(self, t => t.namespace())
    }

    fn assembly(&self) -> AssemblyName {
        dispatch_type!(self, t => t.assembly())
    }

    fn declaring_type(&self) -> Option<TypeName> {
        dispatch_type!(self, t => t.declaring_type())
    }

    fn is_nested_type(&self) -> bool {
        dispatch_type!(self, t => t.is_nested_type())
    }

    fn is_void_type(&self) -> bool {
        dispatch_type!(self, t => t.is_void_type())
    }

    fn is_value_type(&self) -> bool {
        dispatch_type!(self, t => t.is_value_type())
    }

    fn is_simple_type(&self) -> bool {
        dispatch_type!(self, t => t.is_simple_type())
    }

    fn is_enum_type(&self) -> bool {
        dispatch_type!(self, t => t.is_enum_type())
    }

    fn is_struct_type(&self) -> bool {
        dispatch_type!(self, t => t.is_struct_type())
    }

    fn is_nullable_type(&self) -> bool {
        dispatch_type!(self, t => t.is_nullable_type())
    }

    fn is_reference_type(&self) -> bool {
        dispatch_type!(self, t => t.is_reference_type())
    }

    fn is_class_type(&self) -> bool {
        dispatch_type!(self, t => t.is_class_type())
    }

    fn is_interface_type(&self) -> bool {
        dispatch_type!(self, t => t.is_interface_type())
    }

    fn is_delegate_type(&self) -> bool {
        dispatch_type!(self, t => t.is_delegate_type())
    }

    fn is_array(&self) -> bool {
        dispatch_type!(self, t => t.is_array())
    }

    fn is_predefined(&self) -> bool {
        dispatch_type!(self, t => t.is_predefined())
    }

    fn is_type_parameter(&self) -> bool {
        dispatch_type!(self, t => t.is_type_parameter())
    }

    fn is_generic_entity(&self) -> bool {
        dispatch_type!(self, t => t.is_generic_entity())
    }

    fn has_type_parameters(&self) -> bool {
        dispatch_type!(self, t => t.has_type_parameters())
    }

    fn type_parameters(&self) -> &[TypeParameterName] {
        dispatch_type!(self, t => t.type_parameters())
    }
}

impl_name_identity!(TypeName);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_new_picks_variant() {
        assert_eq!(TypeName::new("?").kind(), TypeNameKind::Unknown);
        assert_eq!(TypeName::new("p:int").kind(), TypeNameKind::Predefined);
        assert_eq!(TypeName::new("T[],P").kind(), TypeNameKind::Array);
        assert_eq!(TypeName::new("d:[?] [?].()").kind(), TypeNameKind::Delegate);
        assert_eq!(TypeName::new("T").kind(), TypeNameKind::TypeParameter);
        assert_eq!(TypeName::new("T,P").kind(), TypeNameKind::Regular);
        assert_eq!(TypeNameKind::iter().count(), TypeNameKind::COUNT);
    }

    #[test]
    fn test_parse_applies_fixes() {
        let fixed = TypeName::parse("n.C1`1[[T1]]+C2[[T2]], P");
        assert_eq!(fixed, TypeName::new("n.C1`1[[T1]]+C2`1[[T2]], P"));
        assert_eq!(TypeName::parse("d:n.D, P").kind(), TypeNameKind::Delegate);
    }

    #[test]
    fn test_identity_uses_identifier() {
        let mut set = HashSet::new();
        set.insert(TypeName::new("n.C, P"));
        set.insert(TypeName::new("n.C, P"));
        set.insert(TypeName::new("n.D, P"));
        assert_eq!(set.len(), 2);
        assert!(TypeName::new("A, P") < TypeName::new("B, P"));
        assert_eq!(TypeName::new("n.C, P").to_string(), "n.C, P");
        assert_eq!(
            format!("{:?}", TypeName::new("n.C, P")),
            "TypeName(\"n.C, P\")"
        );
    }

    #[test]
    fn test_conversions() {
        let array = TypeName::new("T[],P");
        assert!(array.as_array_type().is_ok());
        assert!(array.as_delegate_type().is_err());

        let tp_array = TypeName::new("T[]");
        assert_eq!(tp_array.as_array_type().unwrap().rank(), 1);
        assert!(!tp_array.is_type_parameter());
        assert_eq!(
            tp_array.as_type_parameter().err(),
            Some(Error::InvalidConversion {
                from: "array",
                to: "type_parameter"
            })
        );
        assert!(TypeName::new("T").as_type_parameter().is_ok());
        assert!(TypeName::new("T -> p:int").as_type_parameter().is_ok());

        let predefined = TypeName::new("p:int");
        assert!(predefined.as_predefined_type().is_ok());
        assert_eq!(
            predefined.as_array_type().err(),
            Some(Error::InvalidConversion {
                from: "predefined",
                to: "array"
            })
        );

        let regular = TypeName::new("n.C, P");
        assert!(regular.as_type_parameter().is_err());
        assert!(regular.as_predefined_type().is_err());
        assert!(TypeName::new("d:[?] [?].()").as_delegate_type().is_ok());
    }

    #[test]
    fn test_is_hashed() {
        assert!(TypeName::new("5TEfRdZBhGQY3JybERVp-w==, zRLpydQJBMrk8DCiP3BwEQ==").is_hashed());
        assert!(!TypeName::new("n.C, P").is_hashed());
    }

    #[test]
    fn test_default_is_unknown() {
        let unknown = TypeName::default();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.identifier(), "?");
    }
}
