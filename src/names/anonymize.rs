//! Anonymization of project-specific names.
//!
//! Names recorded inside a developer's own project reveal private information (class names,
//! namespaces, method names), while names from versioned framework and library assemblies do
//! not. [`Anonymize::to_anonymous`] replaces every part that belongs to a *local project*
//! assembly (one without version) with its [`to_hash`], and keeps everything else readable, so
//! API usage can still be analysed after anonymization.
//!
//! # Rules
//!
//! - Unknown and predefined types are never changed.
//! - Regular types from a local project hash their namespace, every simple name and the short
//!   names of their type parameters; the assembly is hashed as a whole.
//! - Bound types of type parameters are anonymized recursively; a binding to an unbound type
//!   parameter hashes that parameter's short name.
//! - Member names are hashed unless their declaring type is known and not local, or the member
//!   is a constructor. Parameter names are hashed under the same condition.
//! - Namespaces, local variables and lambda parameters are always hashed.
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{anonymize::{to_hash, Anonymize}, TypeName};
//!
//! assert_eq!(to_hash("a"), "QUThlfRt54o2I9pzZNBPEQ==");
//!
//! let local = TypeName::new("SomeType, MyProject");
//! assert_eq!(
//!     local.to_anonymous(),
//!     TypeName::new("5TEfRdZBhGQY3JybERVp-w==, zRLpydQJBMrk8DCiP3BwEQ==")
//! );
//!
//! let framework = TypeName::new("SomeType, MyProject, 1.2.3.4");
//! assert_eq!(framework.to_anonymous(), framework);
//! ```

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use md5::{Digest, Md5};

use crate::names::{
    serialization::Name, ArrayType, ArrayTypeName, AssemblyName, AssemblyVersion,
    DelegateTypeName, EventName, FieldName, LambdaName, LocalVariableName, MemberInfo, MethodName,
    NamespaceName, ParameterModifiers, ParameterName, PropertyName, RegularTypeName, TypeInfo,
    TypeName, TypeParameterName,
};

/// Hash `value` into a 24 character token.
///
/// The digest is MD5 over the UTF-16LE encoding, written as URL-safe base64 with padding.
/// The empty string hashes to itself.
#[must_use]
pub fn to_hash(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let bytes: Vec<u8> = value.encode_utf16().flat_map(u16::to_le_bytes).collect();
    URL_SAFE.encode(Md5::digest(&bytes))
}

/// Names that can be stripped of project-specific information.
pub trait Anonymize: Sized {
    /// The anonymized name. Unknown names are returned unchanged.
    fn to_anonymous(&self) -> Self;
}

/// Parse an anonymized identifier, falling back to the unknown name.
///
/// Falling back keeps private information out of the result if the rebuilt identifier is
/// rejected.
fn rebuild<T>(
    kind: &str,
    identifier: &str,
    parse: impl FnOnce(&str) -> crate::Result<T>,
    unknown: impl FnOnce() -> T,
) -> T {
    parse(identifier).unwrap_or_else(|err| {
        log::warn!("Anonymized {} '{}' is invalid: {}", kind, identifier, err);
        unknown()
    })
}

fn is_local(assembly: &AssemblyName) -> bool {
    assembly.is_local_project()
}

/// Whether members of `declaring` get their names hashed.
fn hashes_members_of(declaring: &TypeName) -> bool {
    declaring.is_unknown() || is_local(&declaring.assembly())
}

impl Anonymize for TypeName {
    fn to_anonymous(&self) -> Self {
        match self {
            TypeName::Unknown(_) | TypeName::Predefined(_) => self.clone(),
            TypeName::Array(array) => anonymous_array(array),
            TypeName::Delegate(delegate) => anonymous_delegate(delegate),
            TypeName::TypeParameter(tp) => TypeName::new(&anonymous_type_parameter(tp, false)),
            TypeName::Regular(regular) => anonymous_regular(regular),
        }
    }
}

fn anonymous_array(array: &ArrayTypeName) -> TypeName {
    let base = array.array_base_type().to_anonymous();
    ArrayTypeName::from(&base, array.rank()).unwrap_or_else(|err| {
        log::warn!("Cannot rebuild array of '{}': {}", base, err);
        TypeName::unknown()
    })
}

fn anonymous_delegate(delegate: &DelegateTypeName) -> TypeName {
    let declaring = delegate.delegate_type();
    let returns = delegate.return_type();
    // A self-returning delegate would recurse forever; its return type is spelled as the
    // declaring type anyway.
    let returns = if returns.identifier() == delegate.identifier() {
        declaring.clone()
    } else {
        returns
    };
    let hash_names = hashes_members_of(declaring);
    TypeName::new(&format!(
        "d:[{}] [{}].{}",
        returns.to_anonymous(),
        declaring.to_anonymous(),
        anonymous_parameter_list(delegate.parameters(), hash_names)
    ))
}

fn anonymous_regular(regular: &RegularTypeName) -> TypeName {
    let assembly = regular.assembly();
    let local = is_local(&assembly);
    let id = regular.identifier();
    let shape = regular.shape();

    let mut out = String::with_capacity(id.len());
    out.push_str(regular.kind_prefix());
    for (idx, segment) in shape.segments.iter().enumerate() {
        if idx > 0 {
            out.push('+');
        }
        let qualified = &id[segment.start..segment.name_end];
        if local {
            match qualified.rfind('.').filter(|_| idx == 0) {
                Some(dot) => {
                    out.push_str(&to_hash(&qualified[..dot]));
                    out.push('.');
                    out.push_str(&to_hash(&qualified[dot + 1..]));
                }
                None => out.push_str(&to_hash(qualified)),
            }
        } else {
            out.push_str(qualified);
        }

        let list_start = segment.list.map_or(segment.end, |(open, _)| open);
        out.push_str(&id[segment.name_end..list_start]);
        if let Some((open, close)) = segment.list {
            let entries =
                crate::names::tokenizer::parse_bracketed_list(id, open, close).unwrap_or_default();
            let anonymized: Vec<String> = entries
                .into_iter()
                .map(|entry| {
                    let tp = TypeParameterName::from_classified(entry);
                    format!("[{}]", anonymous_type_parameter(&tp, local))
                })
                .collect();
            out.push('[');
            out.push_str(&anonymized.join(","));
            out.push(']');
        }
    }

    if shape.type_end < id.len() {
        out.push_str(", ");
        out.push_str(assembly.to_anonymous().identifier());
    }
    TypeName::new(&out)
}

/// The identifier of an anonymized type parameter, with its short name hashed on request.
fn anonymous_type_parameter(tp: &TypeParameterName, hash_short_name: bool) -> String {
    let short = tp.type_parameter_short_name();
    let suffix = &tp.name()[short.len()..];
    let head = if hash_short_name {
        format!("{}{}", to_hash(short), suffix)
    } else {
        format!("{}{}", short, suffix)
    };
    if !tp.is_bound() {
        return head;
    }

    let bound = tp.type_parameter_type();
    let bound = match &bound {
        TypeName::TypeParameter(inner) if !inner.is_bound() && !inner.is_array() => {
            to_hash(inner.type_parameter_short_name())
        }
        other => other.to_anonymous().identifier().to_string(),
    };
    format!("{} -> {}", head, bound)
}

/// `[<type>]` of a parameter or member, hashing unbound type parameters on request.
fn anonymous_value_type(value_type: &TypeName, hash_type_parameters: bool) -> String {
    match value_type {
        TypeName::TypeParameter(tp) if hash_type_parameters && !tp.is_bound() => {
            format!("[{}]", anonymous_type_parameter(tp, true))
        }
        other => format!("[{}]", other.to_anonymous()),
    }
}

fn anonymous_parameter(parameter: &ParameterName, hash_names: bool) -> ParameterName {
    let mut modifiers = parameter.modifiers();
    if parameter.value_type().is_reference_type() {
        modifiers.remove(ParameterModifiers::REF);
    }
    let prefix: String = ParameterModifiers::ORDERED
        .iter()
        .filter(|(flag, _)| modifiers.contains(*flag))
        .map(|(_, word)| format!("{} ", word))
        .collect();
    let name = if hash_names {
        to_hash(parameter.name())
    } else {
        parameter.name().to_string()
    };
    let identifier = format!(
        "{}{} {}",
        prefix,
        anonymous_value_type(parameter.value_type(), hash_names),
        name
    );
    rebuild("parameter", &identifier, ParameterName::new, ParameterName::unknown)
}

fn anonymous_parameter_list(parameters: &[ParameterName], hash_names: bool) -> String {
    let entries: Vec<String> = parameters
        .iter()
        .map(|p| anonymous_parameter(p, hash_names).identifier().to_string())
        .collect();
    format!("({})", entries.join(", "))
}

/// `[static ][V] [D].name` with the name hashed unless it is public API or a constructor.
fn anonymous_member_head(member: &impl MemberInfo, value_type: &TypeName) -> String {
    let declaring = member.declaring_type();
    let name = member.name();
    let keeps_name = (!declaring.is_unknown() && !is_local(&declaring.assembly()))
        || name == ".ctor"
        || name == ".cctor";
    format!(
        "{}{} {}.{}",
        if member.is_static() { "static " } else { "" },
        anonymous_value_type(value_type, false),
        anonymous_value_type(declaring, false),
        if keeps_name {
            name.to_string()
        } else {
            to_hash(name)
        }
    )
}

impl Anonymize for MethodName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let hash_names = hashes_members_of(self.declaring_type());
        let mut identifier = anonymous_member_head(self, self.return_type());
        if self.has_type_parameters() {
            let entries: Vec<String> = self
                .type_parameters()
                .iter()
                .map(|tp| format!("[{}]", anonymous_type_parameter(tp, hash_names)))
                .collect();
            identifier.push_str(&format!(
                "`{}[{}]",
                self.type_parameters().len(),
                entries.join(",")
            ));
        }
        identifier.push_str(&anonymous_parameter_list(self.parameters(), hash_names));
        rebuild("method", &identifier, MethodName::new, MethodName::unknown)
    }
}

impl Anonymize for PropertyName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let hash_names = hashes_members_of(self.declaring_type());
        let mut identifier = String::new();
        if self.has_setter() {
            identifier.push_str("set ");
        }
        if self.has_getter() {
            identifier.push_str("get ");
        }
        identifier.push_str(&anonymous_member_head(self, self.value_type()));
        identifier.push_str(&anonymous_parameter_list(self.parameters(), hash_names));
        rebuild("property", &identifier, PropertyName::new, PropertyName::unknown)
    }
}

impl Anonymize for FieldName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let identifier = anonymous_member_head(self, self.value_type());
        rebuild("field", &identifier, FieldName::new, FieldName::unknown)
    }
}

impl Anonymize for EventName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let identifier = anonymous_member_head(self, self.handler_type());
        rebuild("event", &identifier, EventName::new, EventName::unknown)
    }
}

impl Anonymize for ParameterName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        anonymous_parameter(self, true)
    }
}

impl Anonymize for LocalVariableName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let identifier = format!(
            "{} {}",
            anonymous_value_type(self.value_type(), false),
            to_hash(self.name())
        );
        rebuild(
            "local variable",
            &identifier,
            LocalVariableName::new,
            LocalVariableName::unknown,
        )
    }
}

impl Anonymize for LambdaName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let identifier = format!(
            "{} {}",
            anonymous_value_type(self.return_type(), false),
            anonymous_parameter_list(self.parameters(), true)
        );
        rebuild("lambda", &identifier, LambdaName::new, LambdaName::unknown)
    }
}

impl Anonymize for NamespaceName {
    fn to_anonymous(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        NamespaceName::new(&to_hash(self.identifier()))
    }
}

impl Anonymize for AssemblyName {
    fn to_anonymous(&self) -> Self {
        if is_local(self) {
            AssemblyName::new(&to_hash(self.identifier()))
        } else {
            self.clone()
        }
    }
}

impl Anonymize for AssemblyVersion {
    fn to_anonymous(&self) -> Self {
        *self
    }
}

impl Anonymize for Name {
    fn to_anonymous(&self) -> Self {
        match self {
            Name::Type(name) => Name::Type(name.to_anonymous()),
            Name::Method(name) => Name::Method(name.to_anonymous()),
            Name::Field(name) => Name::Field(name.to_anonymous()),
            Name::Property(name) => Name::Property(name.to_anonymous()),
            Name::Event(name) => Name::Event(name.to_anonymous()),
            Name::Parameter(name) => Name::Parameter(name.to_anonymous()),
            Name::Assembly(name) => Name::Assembly(name.to_anonymous()),
            Name::Version(version) => Name::Version(version.to_anonymous()),
            Name::Namespace(name) => Name::Namespace(name.to_anonymous()),
            Name::LocalVariable(name) => Name::LocalVariable(name.to_anonymous()),
            Name::Lambda(name) => Name::Lambda(name.to_anonymous()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous_type(id: &str) -> String {
        TypeName::new(id).to_anonymous().identifier().to_string()
    }

    fn anonymous_method(id: &str) -> String {
        MethodName::new(id).unwrap().to_anonymous().identifier().to_string()
    }

    #[test]
    fn test_to_hash() {
        assert_eq!(to_hash("a"), "QUThlfRt54o2I9pzZNBPEQ==");
        assert_eq!(to_hash(""), "");
        assert_eq!(to_hash("MyProject"), "zRLpydQJBMrk8DCiP3BwEQ==");
        assert!(to_hash("G2").contains('_'));
        assert!(to_hash("G2").contains('-'));
    }

    #[test]
    fn test_unknown_names_are_kept() {
        assert!(TypeName::unknown().to_anonymous().is_unknown());
        assert!(MethodName::unknown().to_anonymous().is_unknown());
        assert!(NamespaceName::unknown().to_anonymous().is_unknown());
    }

    #[test]
    fn test_assemblies() {
        assert_eq!(
            AssemblyName::new("MyProject").to_anonymous().identifier(),
            "zRLpydQJBMrk8DCiP3BwEQ=="
        );
        let versioned = AssemblyName::new("SomeAssembly, 1.5.6.3");
        assert_eq!(versioned.to_anonymous(), versioned);
    }

    #[test]
    fn test_types_that_stay() {
        for id in ["p:int", "p:int[]", "?", "SomeType, MyProject, 1.2.3.4"] {
            assert_eq!(anonymous_type(id), id);
        }
    }

    #[test]
    fn test_local_regular_types() {
        assert_eq!(
            anonymous_type("My.Namespace.MyType, MyProject"),
            "L5-7Qmufwl5lDD-ks5-QzQ==.Q-vTVCo_g8yayGGoDdH7BA==, zRLpydQJBMrk8DCiP3BwEQ=="
        );
        assert_eq!(
            anonymous_type("Outer+Intermediate+Inner, MyProject"),
            "vWJW7HmayjJvbX16XC9VnQ==+471REvNW-WCCyW7mDRT4EA==+YDcvejSpfAK3U9T4L-U5Ng==, zRLpydQJBMrk8DCiP3BwEQ=="
        );
        assert_eq!(
            anonymous_type("i:My.Interface, EnclosingProject"),
            "i:S7JFQ1Qpzr6dQZksNAcR7A==.A5028p0XwGGVTyGQASY_Xw==, qfFVtSOtve-XEFJXWTbfXw=="
        );
        assert_eq!(
            anonymous_type("s:My.Struct, EnclosingProject"),
            "s:S7JFQ1Qpzr6dQZksNAcR7A==.pPXyIgQrF3lffm_A0yqnCw==, qfFVtSOtve-XEFJXWTbfXw=="
        );
    }

    #[test]
    fn test_type_parameters() {
        assert_eq!(
            anonymous_type("TT -> AType, MyProject"),
            "TT -> S8jqvjvDTBSSXY7BIBFNOQ==, zRLpydQJBMrk8DCiP3BwEQ=="
        );
        assert_eq!(
            anonymous_type("TT -> TU -> TV -> AType, MyProject"),
            "TT -> TU -> TV -> S8jqvjvDTBSSXY7BIBFNOQ==, zRLpydQJBMrk8DCiP3BwEQ=="
        );
        assert_eq!(
            anonymous_type("Some.Type`1[[T -> OtherType, A]], B, 1.2.3.4"),
            "Some.Type`1[[T -> xJGI74kh-RBFid7-a1wFlg==, ghTRAD9op9mwNWwMvX7uGg==]], B, 1.2.3.4"
        );
        assert_eq!(
            anonymous_type(
                "MyTypeFromEnclosingProject`1[[T -> System.X, mscorlib, 4.0.0.0]], EnclosingProject"
            ),
            "yqUUbRFTqfCBIMxMRH-qDA==`1[[TM6pgLI0nE5n0EEgAKIIFw== -> System.X, mscorlib, 4.0.0.0]], qfFVtSOtve-XEFJXWTbfXw=="
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            anonymous_type("SomeType[], EnclosingProject"),
            "5TEfRdZBhGQY3JybERVp-w==[], qfFVtSOtve-XEFJXWTbfXw=="
        );
        assert_eq!(
            anonymous_type("d:[VT, A] [ConsoleApplication1.Program+TestDelegate, A].()[]"),
            "d:[3sO2hZAKj3g4-Zk_E0A-_w==, ghTRAD9op9mwNWwMvX7uGg==] [IJXZZxKP9BYUXNF-zFV4Mg==.3hvdSyh3QO13K3vH3w7KxA==+qXAvOqA3UCqSEhbDeHkp3A==, ghTRAD9op9mwNWwMvX7uGg==].()[]"
        );
    }

    #[test]
    fn test_delegates() {
        assert_eq!(
            anonymous_type("d:[Void, CL, 4.0.0.0] [My.Delegate, EnclosingProject].()"),
            "d:[Void, CL, 4.0.0.0] [S7JFQ1Qpzr6dQZksNAcR7A==.lE454GH4mIh5XOQtJhX9ng==, qfFVtSOtve-XEFJXWTbfXw==].()"
        );
        assert_eq!(
            anonymous_type("d:[Void, CL, 4.0.0.0] [D, E, 1.2.3.4].([P, A] p)"),
            "d:[Void, CL, 4.0.0.0] [D, E, 1.2.3.4].([aUaDMpYpDqsiSh5nQjiWFw==, ghTRAD9op9mwNWwMvX7uGg==] p)"
        );
        assert_eq!(
            anonymous_type("d:[Void, CL, 4.0.0.0] [P, A].([D, E, 1.2.3.4] p)"),
            "d:[Void, CL, 4.0.0.0] [aUaDMpYpDqsiSh5nQjiWFw==, ghTRAD9op9mwNWwMvX7uGg==].([D, E, 1.2.3.4] xBzbwjgZ_3fD0cNcmbedKA==)"
        );
    }

    #[test]
    fn test_recursive_delegate() {
        let anonymous = format!("{}.{}, {}", to_hash("N"), to_hash("D"), to_hash("P"));
        assert_eq!(
            anonymous_type("d:[N.D, P] [N.D, P].([N.D, P] p)"),
            format!(
                "d:[{0}] [{0}].([{0}] {1})",
                anonymous,
                to_hash("p")
            )
        );
    }

    #[test]
    fn test_members() {
        assert_eq!(
            FieldName::new("[?] [?].field").unwrap().to_anonymous().identifier(),
            "[?] [?].uH-HUtyKzOVVTdxGpUvTRg=="
        );
        let field = FieldName::new("static [System.X, mscorlib, 4.0.0.0] [AClass, AnAssembly, 1.2.3.4]._field")
            .unwrap();
        assert_eq!(field.to_anonymous(), field);

        assert_eq!(
            EventName::new("[ChangeEventHandler, Assembly, 6.3.5.2] [A, Foo].Event")
                .unwrap()
                .to_anonymous()
                .identifier(),
            "[ChangeEventHandler, Assembly, 6.3.5.2] [ghTRAD9op9mwNWwMvX7uGg==, sl_wrZDQnTlQkOiin_TGPA==].Ryz5fpCQs0Nwm_x0Vy4cQg=="
        );

        assert_eq!(
            PropertyName::new("get [System.X, mscorlib, 4.0.0.0] [Declarator, MyProject].Property()")
                .unwrap()
                .to_anonymous()
                .identifier(),
            "get [System.X, mscorlib, 4.0.0.0] [UFthX8igK4OWY-bjuPcWaA==, zRLpydQJBMrk8DCiP3BwEQ==].3_9-BEZu3bkEMnTfk5eHKw==()"
        );
        let indexer = PropertyName::new("get [p:int] [p:int].P([p:int] p)").unwrap();
        assert_eq!(indexer.to_anonymous(), indexer);
    }

    #[test]
    fn test_methods() {
        assert_eq!(
            anonymous_method("[?] [?].method([?] arg)"),
            "[?] [?].S2MqM0cJGKIdPyRb46oevg==([?] cjjZM6DVkmp283JnWfyH_A==)"
        );
        assert_eq!(
            anonymous_method("[ReturnType, EP] [DT, A, 1.2.3.4].M()"),
            "[a6Ix9ar6tahkEo1TOfBLwg==, vW8RYxLbF7t21szDOJMe_w==] [DT, A, 1.2.3.4].M()"
        );
        assert_eq!(
            anonymous_method("[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M`2[[T -> Foo, EP],[E -> Bar, A, 1.2.3.4]]()"),
            "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M`2[[T -> sl_wrZDQnTlQkOiin_TGPA==, vW8RYxLbF7t21szDOJMe_w==],[E -> Bar, A, 1.2.3.4]]()"
        );
        let external = "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M([System.String, mscorlib, 4.0.0.0] p)";
        assert_eq!(anonymous_method(external), external);
    }

    #[test]
    fn test_constructor_names_are_kept() {
        assert_eq!(
            anonymous_method("[p:void] [DT, P]..ctor([T,P] p, [T,A,4.0.0.0] p2)"),
            "[p:void] [UP5Ipka5g2hTcMU6LNvz2A==, aUaDMpYpDqsiSh5nQjiWFw==]..ctor([TM6pgLI0nE5n0EEgAKIIFw==, aUaDMpYpDqsiSh5nQjiWFw==] xBzbwjgZ_3fD0cNcmbedKA==, [T, A,4.0.0.0] UIuXc44R1FaeNKJ8ldQB7A==)"
        );
    }

    #[test]
    fn test_generic_methods() {
        assert_eq!(
            anonymous_method("[T, A, 1.2.3.4] [C`1[[G2]], P].M([G2] p)"),
            "[T, A, 1.2.3.4] [3Rx860ySZTppa3kHpN1N8Q==`1[[HAqGEOJc_-qPti2JYHwR3Q==]], aUaDMpYpDqsiSh5nQjiWFw==].lNSAgClcjc9lDeUkXybdNQ==([HAqGEOJc_-qPti2JYHwR3Q==] xBzbwjgZ_3fD0cNcmbedKA==)"
        );
        assert_eq!(
            anonymous_method("[T, A, 1.2.3.4] [A`1[[G1 -> G2]], A, 0.0.0.0].M([G1] p)"),
            "[T, A, 1.2.3.4] [A`1[[G1 -> HAqGEOJc_-qPti2JYHwR3Q==]], A, 0.0.0.0].M([G1] p)"
        );
        let bound = "[T, A, 1.2.3.4] [A`1[[G1 -> T, A, 0.0.0.0]], A, 0.0.0.0].M([G1] p)";
        assert_eq!(anonymous_method(bound), bound);
    }

    #[test]
    fn test_parameters() {
        let anonymize = |id: &str| {
            ParameterName::new(id)
                .unwrap()
                .to_anonymous()
                .identifier()
                .to_string()
        };
        assert_eq!(
            anonymize("out [ParamType, A, 1.2.3.4] parameter"),
            "out [ParamType, A, 1.2.3.4] jaWpYMumKzk5dZafVWTD1A=="
        );
        assert_eq!(
            anonymize("ref [p:int] name"),
            "ref [p:int] mT62IUL9_OAA7vtSkeTMzg=="
        );
        assert_eq!(
            anonymize("[Type, Project] name"),
            "[aSO4V69Y4hQtcEQCnqsGww==, Mxp53D4r1Kx8kPEM01ySAA==] mT62IUL9_OAA7vtSkeTMzg=="
        );
    }

    #[test]
    fn test_locals_lambdas_and_namespaces() {
        assert_eq!(
            LocalVariableName::new("[ValueType, EnclosingProject] variable")
                .unwrap()
                .to_anonymous()
                .identifier(),
            "[K6-3xDZUlJ-Wew_p0xcfQg==, qfFVtSOtve-XEFJXWTbfXw==] ex1ycJF4ixZdevwEdEfKcQ=="
        );
        assert_eq!(
            LambdaName::new("[A, B, 1.2.3.4] ([T, EP] p)")
                .unwrap()
                .to_anonymous()
                .identifier(),
            "[A, B, 1.2.3.4] ([TM6pgLI0nE5n0EEgAKIIFw==, vW8RYxLbF7t21szDOJMe_w==] xBzbwjgZ_3fD0cNcmbedKA==)"
        );
        assert_eq!(
            NamespaceName::new("Some.Arbitrary.Namespace")
                .to_anonymous()
                .identifier(),
            "PU4V3sU7dhVQzcD16BGtuw=="
        );
        assert!(NamespaceName::global().to_anonymous().is_global_namespace());
    }

    #[test]
    fn test_name_dispatch() {
        let name = Name::Type(TypeName::new("SomeType, MyProject"));
        assert!(name.to_anonymous().identifier().contains("=="));
        let version = Name::Version(AssemblyVersion::new(1, 2, 3, 4));
        assert_eq!(version.to_anonymous(), version);
    }
}
