use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        members::{
            format_member_head, format_parameters, impl_member_info, parse_parameters,
            MemberCore, MemberInfo, MemberModifiers, ParameterName,
        },
        tokenizer::{find_corresponding_close_bracket, find_next, parse_bracketed_list},
        TypeInfo, TypeName, TypeParameterName,
    },
    Error, Result,
};

/// Identifier of the unknown method.
pub const UNKNOWN_METHOD_IDENTIFIER: &str = "[?] [?].???()";

struct MethodInner {
    core: MemberCore,
    has_tick: bool,
    list: Option<(usize, usize)>,
    params: Option<(usize, usize)>,
    type_parameters: OnceLock<Vec<TypeParameterName>>,
    parameters: OnceLock<Vec<ParameterName>>,
}

/// A method, constructor or initializer:
/// `[static ][<return type>] [<declaring type>].<name>[`N[[<type parameters>]]](<parameters>)`.
#[derive(Clone)]
pub struct MethodName {
    inner: Arc<MethodInner>,
}

impl MethodName {
    /// Parse a method identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for malformed identifiers and for constructors with a
    /// return type other than void.
    pub fn new(identifier: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentifier {
            kind: "method",
            identifier: identifier.to_string(),
        };
        let core = MemberCore::parse("method", identifier, MemberModifiers::STATIC, |id, from| {
            find_next(id, from, b"`([").unwrap_or(id.len())
        })?;

        let bytes = identifier.as_bytes();
        let mut idx = core.name_end();
        let mut has_tick = false;
        if bytes.get(idx) == Some(&b'`') {
            let digits = bytes[idx + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits == 0 {
                return Err(invalid());
            }
            has_tick = true;
            idx += 1 + digits;
        }

        let mut list = None;
        if bytes.get(idx) == Some(&b'[') {
            if bytes.get(idx + 1) != Some(&b'[') {
                return Err(invalid());
            }
            let close = find_corresponding_close_bracket(identifier, idx).map_err(|_| invalid())?;
            parse_bracketed_list(identifier, idx, close).map_err(|_| invalid())?;
            list = Some((idx, close));
            idx = close + 1;
        }

        let mut params = None;
        if idx < identifier.len() {
            if bytes[idx] != b'(' {
                return Err(invalid());
            }
            let close = find_corresponding_close_bracket(identifier, idx).map_err(|_| invalid())?;
            if close + 1 != identifier.len() {
                return Err(invalid());
            }
            params = Some((idx, close));
        }

        let method = MethodName {
            inner: Arc::new(MethodInner {
                core,
                has_tick,
                list,
                params,
                type_parameters: OnceLock::new(),
                parameters: OnceLock::new(),
            }),
        };
        if method.is_constructor() {
            let returns = method.return_type();
            if !returns.is_unknown() && !returns.is_void_type() {
                return Err(invalid());
            }
        }
        Ok(method)
    }

    /// The unknown method, `[?] [?].???()`.
    #[must_use]
    pub fn unknown() -> Self {
        let name_end = UNKNOWN_METHOD_IDENTIFIER.len() - 2;
        MethodName {
            inner: Arc::new(MethodInner {
                core: MemberCore::unknown(UNKNOWN_METHOD_IDENTIFIER, name_end),
                has_tick: false,
                list: None,
                params: Some((name_end, name_end + 1)),
                type_parameters: OnceLock::new(),
                parameters: OnceLock::new(),
            }),
        }
    }

    /// Build the canonical identifier from its parts.
    ///
    /// ```rust
    /// use namescope::names::{MethodName, ParameterName, TypeName};
    ///
    /// let method = MethodName::from_parts(
    ///     false,
    ///     &TypeName::new("p:void"),
    ///     &TypeName::new("n.C, P"),
    ///     "M",
    ///     &[],
    ///     &[ParameterName::new("[p:int] i")?],
    /// )?;
    /// assert_eq!(method.identifier(), "[p:void] [n.C, P].M([p:int] i)");
    /// # Ok::<(), namescope::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if the parts do not form a valid method.
    pub fn from_parts(
        is_static: bool,
        return_type: &TypeName,
        declaring_type: &TypeName,
        name: &str,
        type_parameters: &[TypeParameterName],
        parameters: &[ParameterName],
    ) -> Result<Self> {
        let mut identifier = format_member_head(
            if is_static { "static " } else { "" },
            return_type,
            declaring_type,
        );
        identifier.push_str(name);
        if !type_parameters.is_empty() {
            let entries: Vec<String> = type_parameters
                .iter()
                .map(|tp| format!("[{}]", tp.identifier()))
                .collect();
            identifier.push_str(&format!(
                "`{}[{}]",
                type_parameters.len(),
                entries.join(",")
            ));
        }
        identifier.push_str(&format_parameters(parameters));
        Self::new(&identifier)
    }

    fn core(&self) -> &MemberCore {
        &self.inner.core
    }

    /// The return type, the same as [`MemberInfo::value_type`].
    #[must_use]
    pub fn return_type(&self) -> &TypeName {
        self.core().value_type()
    }

    /// The name with type parameters and parameter list, `M`1[[T]]([T] t)`.
    #[must_use]
    pub fn signature(&self) -> &str {
        self.core().signature()
    }

    /// The method parameters, parsed once.
    pub fn parameters(&self) -> &[ParameterName] {
        self.inner.parameters.get_or_init(|| match self.inner.params {
            Some((open, close)) => parse_parameters(self.identifier(), open, close),
            None => Vec::new(),
        })
    }

    /// Returns `true` if the method takes at least one parameter.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }

    /// Returns `true` for instance (`.ctor`) and static (`.cctor`) constructors.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        matches!(self.name(), ".ctor" | ".cctor")
    }

    /// Returns `true` for field initializers, `.init` and `.cinit`.
    #[must_use]
    pub fn is_init(&self) -> bool {
        matches!(self.name(), ".init" | ".cinit")
    }

    /// Returns `true` for static methods whose first parameter carries `this`.
    #[must_use]
    pub fn is_extension_method(&self) -> bool {
        self.is_static()
            && self
                .parameters()
                .first()
                .is_some_and(ParameterName::is_extension_method_parameter)
    }

    /// Returns `true` if the method carries an arity tick or a type-parameter list.
    #[must_use]
    pub fn is_generic_entity(&self) -> bool {
        self.inner.has_tick || self.inner.list.is_some()
    }

    /// Returns `true` if the method declares or binds type parameters.
    #[must_use]
    pub fn has_type_parameters(&self) -> bool {
        !self.type_parameters().is_empty()
    }

    /// The method's own type parameters, parsed once.
    pub fn type_parameters(&self) -> &[TypeParameterName] {
        self.inner.type_parameters.get_or_init(|| match self.inner.list {
            Some((open, close)) => parse_bracketed_list(self.identifier(), open, close)
                .unwrap_or_default()
                .into_iter()
                .map(TypeParameterName::from_classified)
                .collect(),
            None => Vec::new(),
        })
    }
}

impl_member_info!(MethodName, UNKNOWN_METHOD_IDENTIFIER);

#[cfg(test)]
mod tests {
    use super::*;

    fn method(id: &str) -> MethodName {
        MethodName::new(id).unwrap()
    }

    #[test]
    fn test_method_accessors() {
        let m = method("[p:void] [n.C, P].M([p:int] i, [n.D, P] d)");
        assert_eq!(m.name(), "M");
        assert_eq!(m.full_name(), "n.C.M");
        assert!(m.return_type().is_void_type());
        assert_eq!(m.declaring_type().identifier(), "n.C, P");
        assert!(!m.is_static());
        assert!(m.has_parameters());
        assert_eq!(m.parameters().len(), 2);
        assert_eq!(m.parameters()[1].name(), "d");
        assert_eq!(m.signature(), "M([p:int] i, [n.D, P] d)");
        assert!(!m.is_generic_entity());
        assert!(!m.is_unknown());
    }

    #[test]
    fn test_method_without_parentheses_has_no_parameters() {
        let m = method("[p:void] [n.C, P].M");
        assert_eq!(m.name(), "M");
        assert!(!m.has_parameters());
    }

    #[test]
    fn test_generic_method() {
        let m = method("[T] [n.C, P].M`2[[T -> p:int],[U]]([U] u)");
        assert_eq!(m.name(), "M");
        assert!(m.is_generic_entity());
        assert!(m.has_type_parameters());
        let tps = m.type_parameters();
        assert_eq!(tps.len(), 2);
        assert!(tps[0].is_bound());
        assert_eq!(tps[1].identifier(), "U");
        assert!(std::ptr::eq(m.type_parameters(), tps));
        assert_eq!(m.signature(), "M`2[[T -> p:int],[U]]([U] u)");
    }

    #[test]
    fn test_constructors() {
        let ctor = method("[p:void] [n.C, P]..ctor()");
        assert!(ctor.is_constructor());
        assert_eq!(ctor.name(), ".ctor");
        assert!(method("static [?] [n.C, P]..cctor()").is_constructor());
        assert!(method("[System.Void, mscorlib, 4.0.0.0] [n.C, P]..ctor()").is_constructor());
        assert!(MethodName::new("[p:int] [n.C, P]..ctor()").is_err());
        assert!(MethodName::new("[p:int] [T, P]..ctor()").is_err());
    }

    #[test]
    fn test_initializers() {
        assert!(method("[p:void] [n.C, P]..init()").is_init());
        assert!(method("static [p:void] [n.C, P]..cinit()").is_init());
        assert!(!method("[p:void] [n.C, P].init()").is_init());
    }

    #[test]
    fn test_extension_method() {
        assert!(method("static [p:void] [n.C, P].M(this [n.D, P] d)").is_extension_method());
        assert!(!method("[p:void] [n.C, P].M(this [n.D, P] d)").is_extension_method());
        assert!(!method("static [p:void] [n.C, P].M([n.D, P] d)").is_extension_method());
    }

    #[test]
    fn test_unknown_method() {
        let unknown = MethodName::unknown();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.name(), "???");
        assert!(unknown.return_type().is_unknown());
        assert!(!unknown.has_parameters());
    }

    #[test]
    fn test_from_parts_round_trip() {
        let id = "static [T] [n.C, P].M`2[[T],[U -> p:int]]([T] t, out [U] u)";
        let parsed = method(id);
        let rebuilt = MethodName::from_parts(
            parsed.is_static(),
            parsed.return_type(),
            parsed.declaring_type(),
            parsed.name(),
            parsed.type_parameters(),
            parsed.parameters(),
        )
        .unwrap();
        assert_eq!(rebuilt, parsed);
    }

    #[test]
    fn test_invalid_methods() {
        for id in [
            "M()",
            "[p:void] [n.C, P].()",
            "[p:void] [n.C, P].M(",
            "[p:void] [n.C, P].M()x",
            "[p:void] [n.C, P].M`()",
            "public [p:void] [n.C, P].M()",
            "get [p:void] [n.C, P].M()",
        ] {
            assert!(MethodName::new(id).is_err(), "{}", id);
        }
    }
}
