//! The `<prefix>:<identifier>` wire format.
//!
//! Stored data references names as tokens: a short prefix that selects the name kind, a colon,
//! and the canonical identifier. [`serialize`] always writes the current prefixes;
//! [`deserialize`] additionally accepts the historical `CSharp.*` prefixes and repairs legacy
//! identifier spellings on the way in, so tokens recorded by older tooling still load.
//!
//! # Prefixes
//!
//! | Kind            | Prefix      | Historical prefixes                                   |
//! |-----------------|-------------|-------------------------------------------------------|
//! | Type            | `0T`        | `CSharp.TypeName` and the per-variant `CSharp.*TypeName` |
//! | Method          | `0M`        | `CSharp.MethodName`                                   |
//! | Field           | `0F`        | `CSharp.FieldName`                                    |
//! | Property        | `0P`        | `CSharp.PropertyName`                                 |
//! | Event           | `0E`        | `CSharp.EventName`                                    |
//! | Parameter       | `0Param`    | `CSharp.ParameterName`                                |
//! | Assembly        | `0A`        | `CSharp.AssemblyName`                                 |
//! | Version         | `0V`        | `CSharp.AssemblyVersion`                              |
//! | Namespace       | `0N`        | `CSharp.NamespaceName`                                |
//! | Local variable  | `0LocalVar` | `CSharp.LocalVariableName`                            |
//! | Lambda          | `0L`        | `CSharp.LambdaName`                                   |
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{
//!     serialization::{deserialize, serialize, Name},
//!     TypeInfo,
//! };
//!
//! let name = deserialize("CSharp.UnknownTypeName:?")?;
//! assert_eq!(serialize(&name), "0T:?");
//!
//! let Name::Type(delegate) = deserialize("0T:d:T,P")? else { unreachable!() };
//! assert_eq!(delegate.identifier(), "d:[?] [T,P].()");
//! # Ok::<(), namescope::Error>(())
//! ```

use std::fmt;

use strum::IntoStaticStr;

use crate::{
    names::{
        fixes::fix_identifiers, AssemblyName, AssemblyVersion, EventName, FieldName, LambdaName,
        LocalVariableName, MethodName, NamespaceName, ParameterName, PropertyName, TypeInfo,
        TypeName,
    },
    Error, Result,
};

/// Any name that can be written as a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Name {
    /// A type of any variant
    Type(TypeName),
    /// A method or constructor
    Method(MethodName),
    /// A field
    Field(FieldName),
    /// A property or indexer
    Property(PropertyName),
    /// An event
    Event(EventName),
    /// A method parameter
    Parameter(ParameterName),
    /// An assembly
    Assembly(AssemblyName),
    /// An assembly version
    Version(AssemblyVersion),
    /// A namespace
    Namespace(NamespaceName),
    /// A local variable
    LocalVariable(LocalVariableName),
    /// A lambda expression
    Lambda(LambdaName),
}

/// The kind of a token, as selected by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Type,
    Method,
    Field,
    Property,
    Event,
    Parameter,
    Assembly,
    Version,
    Namespace,
    LocalVariable,
    Lambda,
}

/// Every accepted prefix and the kind it selects. Current prefixes come first.
const PREFIXES: [(&str, Kind); 30] = [
    ("0T", Kind::Type),
    ("0M", Kind::Method),
    ("0F", Kind::Field),
    ("0P", Kind::Property),
    ("0E", Kind::Event),
    ("0Param", Kind::Parameter),
    ("0A", Kind::Assembly),
    ("0V", Kind::Version),
    ("0N", Kind::Namespace),
    ("0LocalVar", Kind::LocalVariable),
    ("0L", Kind::Lambda),
    ("CSharp.TypeName", Kind::Type),
    ("CSharp.PredefinedTypeName", Kind::Type),
    ("CSharp.TypeParameterName", Kind::Type),
    ("CSharp.ArrayTypeName", Kind::Type),
    ("CSharp.DelegateTypeName", Kind::Type),
    ("CSharp.EnumTypeName", Kind::Type),
    ("CSharp.InterfaceTypeName", Kind::Type),
    ("CSharp.StructTypeName", Kind::Type),
    ("CSharp.UnknownTypeName", Kind::Type),
    ("CSharp.MethodName", Kind::Method),
    ("CSharp.FieldName", Kind::Field),
    ("CSharp.PropertyName", Kind::Property),
    ("CSharp.EventName", Kind::Event),
    ("CSharp.ParameterName", Kind::Parameter),
    ("CSharp.AssemblyName", Kind::Assembly),
    ("CSharp.AssemblyVersion", Kind::Version),
    ("CSharp.NamespaceName", Kind::Namespace),
    ("CSharp.LocalVariableName", Kind::LocalVariable),
    ("CSharp.LambdaName", Kind::Lambda),
];

impl Name {
    /// The prefix [`serialize`] writes for this name.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Name::Type(_) => "0T",
            Name::Method(_) => "0M",
            Name::Field(_) => "0F",
            Name::Property(_) => "0P",
            Name::Event(_) => "0E",
            Name::Parameter(_) => "0Param",
            Name::Assembly(_) => "0A",
            Name::Version(_) => "0V",
            Name::Namespace(_) => "0N",
            Name::LocalVariable(_) => "0LocalVar",
            Name::Lambda(_) => "0L",
        }
    }

    /// The kind as a lowercase word, `"type"`, `"method"`, `"local_variable"`, ...
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.into()
    }

    /// The canonical identifier of the wrapped name.
    ///
    /// Versions have no stored identifier, so this allocates.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Name::Type(name) => name.identifier().to_string(),
            Name::Method(name) => name.identifier().to_string(),
            Name::Field(name) => name.identifier().to_string(),
            Name::Property(name) => name.identifier().to_string(),
            Name::Event(name) => name.identifier().to_string(),
            Name::Parameter(name) => name.identifier().to_string(),
            Name::Assembly(name) => name.identifier().to_string(),
            Name::Version(version) => version.to_string(),
            Name::Namespace(name) => name.identifier().to_string(),
            Name::LocalVariable(name) => name.identifier().to_string(),
            Name::Lambda(name) => name.identifier().to_string(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix(), self.identifier())
    }
}

macro_rules! impl_from_for_name {
    ($($name:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$name> for Name {
                fn from(value: $name) -> Self {
                    Name::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_name!(
    TypeName => Type,
    MethodName => Method,
    FieldName => Field,
    PropertyName => Property,
    EventName => Event,
    ParameterName => Parameter,
    AssemblyName => Assembly,
    AssemblyVersion => Version,
    NamespaceName => Namespace,
    LocalVariableName => LocalVariable,
    LambdaName => Lambda,
);

/// Write `name` as `<prefix>:<identifier>`.
#[must_use]
pub fn serialize(name: &Name) -> String {
    name.to_string()
}

/// Read a `<prefix>:<identifier>` token.
///
/// The token is split at its first colon. Identifiers are passed through
/// [`fix_identifiers`] with the token's prefix before they are parsed, so both historical
/// prefixes and historical identifier spellings are accepted.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if the token has no colon or an unrecognized prefix, and
/// [`Error::InvalidIdentifier`] if the identifier does not parse as the selected kind.
pub fn deserialize(token: &str) -> Result<Name> {
    let Some((prefix, identifier)) = token.split_once(':') else {
        return Err(Error::UnknownPrefix(token.to_string()));
    };
    let kind = PREFIXES
        .iter()
        .find(|(candidate, _)| *candidate == prefix)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;

    let fixed = fix_identifiers(identifier, Some(prefix));
    let id = fixed.as_str();
    Ok(match kind {
        Kind::Type => Name::Type(TypeName::new(id)),
        Kind::Method => Name::Method(MethodName::new(id)?),
        Kind::Field => Name::Field(FieldName::new(id)?),
        Kind::Property => Name::Property(PropertyName::new(id)?),
        Kind::Event => Name::Event(EventName::new(id)?),
        Kind::Parameter => Name::Parameter(ParameterName::new(id)?),
        Kind::Assembly => Name::Assembly(AssemblyName::new(id)),
        Kind::Version => Name::Version(AssemblyVersion::parse(id)),
        Kind::Namespace => Name::Namespace(NamespaceName::new(id)),
        Kind::LocalVariable => Name::LocalVariable(LocalVariableName::new(id)?),
        Kind::Lambda => Name::Lambda(LambdaName::new(id)?),
    })
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{deserialize, serialize, Name};
    use crate::names::{
        AssemblyName, AssemblyVersion, EventName, FieldName, LambdaName, LocalVariableName,
        MethodName, NamespaceName, ParameterName, PropertyName, TypeName,
    };

    impl serde::Serialize for Name {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&serialize(self))
        }
    }

    impl<'de> serde::Deserialize<'de> for Name {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let token = <String as serde::Deserialize>::deserialize(deserializer)?;
            deserialize(&token).map_err(serde::de::Error::custom)
        }
    }

    impl_serde_via_token!(TypeName, Type);
    impl_serde_via_token!(MethodName, Method);
    impl_serde_via_token!(FieldName, Field);
    impl_serde_via_token!(PropertyName, Property);
    impl_serde_via_token!(EventName, Event);
    impl_serde_via_token!(ParameterName, Parameter);
    impl_serde_via_token!(AssemblyName, Assembly);
    impl_serde_via_token!(AssemblyVersion, Version);
    impl_serde_via_token!(NamespaceName, Namespace);
    impl_serde_via_token!(LocalVariableName, LocalVariable);
    impl_serde_via_token!(LambdaName, Lambda);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{MemberInfo, TypeNameKind};

    #[test]
    fn test_legacy_delegate_is_fixed() {
        let Name::Type(name) = deserialize("0T:d:T,P").unwrap() else {
            panic!("expected a type");
        };
        assert_eq!(name.kind(), TypeNameKind::Delegate);
        assert_eq!(name.identifier(), "d:[?] [T,P].()");
    }

    #[test]
    fn test_historical_type_prefixes() {
        let cases = [
            ("T,P", "CSharp.TypeName", TypeNameKind::Regular),
            ("T[],P", "CSharp.TypeName", TypeNameKind::Array),
            ("p:int", "CSharp.PredefinedTypeName", TypeNameKind::Predefined),
            ("p:int[]", "CSharp.PredefinedTypeName", TypeNameKind::Predefined),
            ("T", "CSharp.TypeName", TypeNameKind::TypeParameter),
            ("T", "CSharp.TypeParameterName", TypeNameKind::TypeParameter),
            ("T -> T,P", "CSharp.TypeName", TypeNameKind::TypeParameter),
            ("e:n.E,P", "CSharp.EnumTypeName", TypeNameKind::Regular),
            ("i:n.I,P", "CSharp.InterfaceTypeName", TypeNameKind::Regular),
            ("s:n.S,P", "CSharp.StructTypeName", TypeNameKind::Regular),
            ("d:[?] [T,P].()", "CSharp.TypeName", TypeNameKind::Delegate),
            ("d:[?] [T,P].()", "CSharp.DelegateTypeName", TypeNameKind::Delegate),
        ];
        for (id, old_prefix, kind) in cases {
            for prefix in [old_prefix, "0T"] {
                let name = deserialize(&format!("{}:{}", prefix, id)).unwrap();
                let Name::Type(ref type_name) = name else {
                    panic!("expected a type for {}", id);
                };
                assert_eq!(type_name.kind(), kind, "{}", id);
                assert_eq!(serialize(&name), format!("0T:{}", id));
            }
        }
    }

    #[test]
    fn test_unknown_type_prefix() {
        let name = deserialize("CSharp.UnknownTypeName:?").unwrap();
        assert_eq!(name, Name::Type(TypeName::unknown()));
        assert_eq!(serialize(&name), "0T:?");
    }

    #[test]
    fn test_historical_member_prefixes() {
        let cases = [
            ("[VT,P] [DT,P]._e", "CSharp.EventName", "0E"),
            ("[VT,P] [DT,P]._f", "CSharp.FieldName", "0F"),
            ("[RT,P] ()", "CSharp.LambdaName", "0L"),
            ("[T,P] v", "CSharp.LocalVariableName", "0LocalVar"),
            ("[RT,P] [DT,P].M()", "CSharp.MethodName", "0M"),
            ("[PT,P] p", "CSharp.ParameterName", "0Param"),
            ("get [VT,P] [DT,P].P()", "CSharp.PropertyName", "0P"),
            ("A, 1.2.3.4", "CSharp.AssemblyName", "0A"),
            ("1.2.3.4", "CSharp.AssemblyVersion", "0V"),
            ("a.b.c", "CSharp.NamespaceName", "0N"),
        ];
        for (id, old_prefix, new_prefix) in cases {
            for prefix in [old_prefix, new_prefix] {
                let name = deserialize(&format!("{}:{}", prefix, id)).unwrap();
                assert_eq!(name.prefix(), new_prefix);
                assert_eq!(serialize(&name), format!("{}:{}", new_prefix, id));
            }
        }
    }

    #[test]
    fn test_property_fixes_use_prefix() {
        let name = deserialize("0P:[?] [?].P()").unwrap();
        assert_eq!(serialize(&name), "0P:set get [?] [?].P()");

        let name = deserialize("0P:set [?] [?].P").unwrap();
        assert_eq!(serialize(&name), "0P:set [?] [?].P()");
    }

    #[test]
    fn test_identifier_may_contain_colons() {
        let Name::Method(method) = deserialize("0M:[p:void] [s:n.S, P].M([p:int] i)").unwrap()
        else {
            panic!("expected a method");
        };
        assert_eq!(method.return_type().identifier(), "p:void");
        assert_eq!(method.declaring_type().identifier(), "s:n.S, P");
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(
            deserialize("x:n.C, P"),
            Err(Error::UnknownPrefix("x".to_string()))
        );
        assert!(matches!(deserialize("no colon"), Err(Error::UnknownPrefix(_))));
        assert!(matches!(
            deserialize("0Win:someType someCaption"),
            Err(Error::UnknownPrefix(_))
        ));
    }

    #[test]
    fn test_invalid_member_identifier() {
        assert!(matches!(
            deserialize("0M:not a method"),
            Err(Error::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_name_conversions() {
        let name: Name = AssemblyVersion::new(1, 2, 3, 4).into();
        assert_eq!(name.kind_name(), "version");
        assert_eq!(name.identifier(), "1.2.3.4");
        assert_eq!(name.to_string(), "0V:1.2.3.4");

        let name: Name = LocalVariableName::unknown().into();
        assert_eq!(name.kind_name(), "local_variable");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_tokens() {
        let method = MethodName::new("[p:void] [n.C, P].M()").unwrap();
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, "\"0M:[p:void] [n.C, P].M()\"");
        let back: MethodName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, method);

        let names = vec![
            Name::Type(TypeName::new("p:int")),
            Name::Namespace(NamespaceName::new("a.b")),
        ];
        let json = serde_json::to_string(&names).unwrap();
        assert_eq!(json, "[\"0T:p:int\",\"0N:a.b\"]");
        let back: Vec<Name> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, names);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_wrong_kind() {
        let err = serde_json::from_str::<FieldName>("\"0T:p:int\"").unwrap_err();
        assert!(err.to_string().contains("expected FieldName"));
    }
}
