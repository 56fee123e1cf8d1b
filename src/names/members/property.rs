use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        members::{
            format_member_head, format_parameters, impl_member_info, parse_parameters,
            MemberCore, MemberModifiers, ParameterName,
        },
        tokenizer::{find_corresponding_close_bracket, find_next},
        TypeName,
    },
    Error, Result,
};

/// Identifier of the unknown property.
pub const UNKNOWN_PROPERTY_IDENTIFIER: &str = "[?] [?].???";

struct PropertyInner {
    core: MemberCore,
    params: Option<(usize, usize)>,
    parameters: OnceLock<Vec<ParameterName>>,
}

/// A property or indexer,
/// `{get |set |static }*[<value type>] [<declaring type>].<name>(<parameters>)`.
///
/// Accessor modifiers may appear in any order.
#[derive(Clone)]
pub struct PropertyName {
    inner: Arc<PropertyInner>,
}

impl PropertyName {
    /// Parse a property identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for malformed identifiers.
    pub fn new(identifier: &str) -> Result<Self> {
        let core = MemberCore::parse("property", identifier, MemberModifiers::all(), |id, from| {
            find_next(id, from, b"(").unwrap_or(id.len())
        })?;

        let invalid = || Error::InvalidIdentifier {
            kind: "property",
            identifier: identifier.to_string(),
        };
        let open = core.name_end();
        let params = if open < identifier.len() {
            let close =
                find_corresponding_close_bracket(identifier, open).map_err(|_| invalid())?;
            if close + 1 != identifier.len() {
                return Err(invalid());
            }
            Some((open, close))
        } else {
            None
        };

        Ok(PropertyName {
            inner: Arc::new(PropertyInner {
                core,
                params,
                parameters: OnceLock::new(),
            }),
        })
    }

    /// The unknown property, `[?] [?].???`.
    #[must_use]
    pub fn unknown() -> Self {
        PropertyName {
            inner: Arc::new(PropertyInner {
                core: MemberCore::unknown(
                    UNKNOWN_PROPERTY_IDENTIFIER,
                    UNKNOWN_PROPERTY_IDENTIFIER.len(),
                ),
                params: None,
                parameters: OnceLock::new(),
            }),
        }
    }

    /// Build the canonical identifier, modifiers in the order `set get static`.
    ///
    /// ```rust
    /// use namescope::names::{MemberModifiers, PropertyName, TypeName};
    ///
    /// let property = PropertyName::from_parts(
    ///     MemberModifiers::GET | MemberModifiers::SET,
    ///     &TypeName::new("p:int"),
    ///     &TypeName::new("n.C, P"),
    ///     "Count",
    ///     &[],
    /// )?;
    /// assert_eq!(property.identifier(), "set get [p:int] [n.C, P].Count()");
    /// # Ok::<(), namescope::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if the parts do not form a valid property.
    pub fn from_parts(
        modifiers: MemberModifiers,
        value_type: &TypeName,
        declaring_type: &TypeName,
        name: &str,
        parameters: &[ParameterName],
    ) -> Result<Self> {
        let mut prefix = String::new();
        for (flag, word) in [
            (MemberModifiers::SET, "set "),
            (MemberModifiers::GET, "get "),
            (MemberModifiers::STATIC, "static "),
        ] {
            if modifiers.contains(flag) {
                prefix.push_str(word);
            }
        }
        let mut identifier = format_member_head(&prefix, value_type, declaring_type);
        identifier.push_str(name);
        identifier.push_str(&format_parameters(parameters));
        Self::new(&identifier)
    }

    fn core(&self) -> &MemberCore {
        &self.inner.core
    }

    /// The parsed `get`/`set`/`static` modifiers.
    #[must_use]
    pub fn modifiers(&self) -> MemberModifiers {
        self.core().modifiers()
    }

    /// Returns `true` if the property has a `get` accessor.
    #[must_use]
    pub fn has_getter(&self) -> bool {
        self.modifiers().contains(MemberModifiers::GET)
    }

    /// Returns `true` if the property has a `set` accessor.
    #[must_use]
    pub fn has_setter(&self) -> bool {
        self.modifiers().contains(MemberModifiers::SET)
    }

    /// The indexer parameters, empty for plain properties.
    pub fn parameters(&self) -> &[ParameterName] {
        self.inner.parameters.get_or_init(|| match self.inner.params {
            Some((open, close)) => parse_parameters(self.identifier(), open, close),
            None => Vec::new(),
        })
    }

    /// Returns `true` if the property takes parameters.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }

    /// Returns `true` for indexers, properties with parameters.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.has_parameters()
    }
}

impl_member_info!(PropertyName, UNKNOWN_PROPERTY_IDENTIFIER);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{MemberInfo, TypeInfo};

    fn property(id: &str) -> PropertyName {
        PropertyName::new(id).unwrap()
    }

    #[test]
    fn test_property_accessors() {
        let p = property("get set [p:int] [n.C, P].Count()");
        assert!(p.has_getter());
        assert!(p.has_setter());
        assert!(!p.is_static());
        assert!(!p.is_indexer());
        assert_eq!(p.name(), "Count");
        assert_eq!(p.full_name(), "n.C.Count");
        assert!(p.value_type().is_simple_type());
    }

    #[test]
    fn test_modifier_order_is_free() {
        for id in [
            "static get [p:int] [n.C, P].P()",
            "get static [p:int] [n.C, P].P()",
            "set get static [p:int] [n.C, P].P()",
        ] {
            let p = property(id);
            assert!(p.is_static(), "{}", id);
            assert!(p.has_getter(), "{}", id);
        }
        assert!(!property("set [p:int] [n.C, P].P()").has_getter());
    }

    #[test]
    fn test_indexer() {
        let p = property("get [p:string] [n.C, P].Item([p:int] index)");
        assert!(p.is_indexer());
        assert_eq!(p.parameters().len(), 1);
        assert_eq!(p.parameters()[0].name(), "index");
    }

    #[test]
    fn test_property_without_parentheses() {
        let p = property("[p:int] [n.C, P].P");
        assert_eq!(p.name(), "P");
        assert!(!p.has_getter());
        assert!(!p.has_parameters());
    }

    #[test]
    fn test_unknown_property() {
        assert!(PropertyName::unknown().is_unknown());
        assert_eq!(PropertyName::unknown().name(), "???");
    }

    #[test]
    fn test_property_from_parts_round_trip() {
        let id = "set get static [p:int] [n.C, P].Item([p:int] i)";
        let p = property(id);
        let rebuilt = PropertyName::from_parts(
            p.modifiers(),
            p.value_type(),
            p.declaring_type(),
            p.name(),
            p.parameters(),
        )
        .unwrap();
        assert_eq!(rebuilt.identifier(), id);
    }

    #[test]
    fn test_invalid_properties() {
        assert!(PropertyName::new("add [p:int] [n.C, P].P()").is_err());
        assert!(PropertyName::new("get [p:int] [n.C, P].P()x").is_err());
        assert!(PropertyName::new("get [p:int] [n.C, P].P(").is_err());
    }
}
