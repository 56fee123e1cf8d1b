use std::sync::{Arc, OnceLock};

use bitflags::bitflags;

use crate::{
    names::{tokenizer::find_corresponding_close_bracket, TypeInfo, TypeName},
    Error, Result,
};

/// Identifier of the unknown parameter.
pub const UNKNOWN_PARAMETER_IDENTIFIER: &str = "[?] ???";

bitflags! {
    /// Modifiers that precede the value type of a parameter.
    #[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
    pub struct ParameterModifiers: u8 {
        /// `params`, a variadic parameter array
        const PARAMS = 0x01;
        /// `out`
        const OUT = 0x02;
        /// `ref`
        const REF = 0x04;
        /// `opt`, a parameter with a default value
        const OPT = 0x08;
        /// `this`, the receiver of an extension method
        const THIS = 0x10;
    }
}

impl ParameterModifiers {
    /// The only modifier order a parameter identifier may use.
    pub(crate) const ORDERED: [(ParameterModifiers, &'static str); 5] = [
        (ParameterModifiers::PARAMS, "params"),
        (ParameterModifiers::OUT, "out"),
        (ParameterModifiers::THIS, "this"),
        (ParameterModifiers::OPT, "opt"),
        (ParameterModifiers::REF, "ref"),
    ];

    /// Parse the modifier words in front of the value type. Each word may appear at most once,
    /// in [`Self::ORDERED`] order.
    fn parse_ordered(prefix: &str) -> Option<Self> {
        let mut modifiers = ParameterModifiers::empty();
        let mut next = 0;
        for word in prefix.split_whitespace() {
            let offset = Self::ORDERED[next..].iter().position(|(_, w)| *w == word)?;
            modifiers |= Self::ORDERED[next + offset].0;
            next += offset + 1;
        }
        Some(modifiers)
    }
}

struct ParameterInner {
    identifier: String,
    modifiers: ParameterModifiers,
    value_open: usize,
    value_close: usize,
    name_start: usize,
    value_type: OnceLock<TypeName>,
}

/// A method, property or delegate parameter,
/// `[params ][out ][this ][opt ][ref ][<value type>] <name>`.
#[derive(Clone)]
pub struct ParameterName {
    inner: Arc<ParameterInner>,
}

impl ParameterName {
    /// Parse a parameter identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for malformed identifiers and for unknown, repeated
    /// or out-of-order modifiers.
    pub fn new(identifier: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentifier {
            kind: "parameter",
            identifier: identifier.to_string(),
        };
        let value_open = identifier.find('[').ok_or_else(invalid)?;
        let modifiers =
            ParameterModifiers::parse_ordered(&identifier[..value_open]).ok_or_else(invalid)?;
        let value_close =
            find_corresponding_close_bracket(identifier, value_open).map_err(|_| invalid())?;
        if identifier.as_bytes().get(value_close + 1) != Some(&b' ') {
            return Err(invalid());
        }
        let name_start = value_close + 2;
        if identifier[name_start..].trim().is_empty() {
            return Err(invalid());
        }

        Ok(ParameterName {
            inner: Arc::new(ParameterInner {
                identifier: identifier.to_string(),
                modifiers,
                value_open,
                value_close,
                name_start,
                value_type: OnceLock::new(),
            }),
        })
    }

    /// The unknown parameter, `[?] ???`.
    #[must_use]
    pub fn unknown() -> Self {
        ParameterName {
            inner: Arc::new(ParameterInner {
                identifier: UNKNOWN_PARAMETER_IDENTIFIER.to_string(),
                modifiers: ParameterModifiers::empty(),
                value_open: 0,
                value_close: 2,
                name_start: 4,
                value_type: OnceLock::new(),
            }),
        }
    }

    /// Build the canonical identifier, modifiers in the order `params out this opt ref`.
    ///
    /// ```rust
    /// use namescope::names::{ParameterModifiers, ParameterName, TypeName};
    ///
    /// let p = ParameterName::from_parts(
    ///     ParameterModifiers::THIS | ParameterModifiers::REF,
    ///     &TypeName::new("s:n.S, P"),
    ///     "value",
    /// )?;
    /// assert_eq!(p.identifier(), "this ref [s:n.S, P] value");
    /// # Ok::<(), namescope::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if the parts do not form a valid parameter.
    pub fn from_parts(
        modifiers: ParameterModifiers,
        value_type: &TypeName,
        name: &str,
    ) -> Result<Self> {
        let mut identifier = String::new();
        for (flag, word) in ParameterModifiers::ORDERED {
            if modifiers.contains(flag) {
                identifier.push_str(word);
                identifier.push(' ');
            }
        }
        identifier.push_str(&format!("[{}] {}", value_type.identifier(), name));
        Self::new(&identifier)
    }

    /// The canonical identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    /// Returns `true` for `[?] ???`.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.identifier() == UNKNOWN_PARAMETER_IDENTIFIER
    }

    /// Returns `true` if the identifier contains anonymized (hashed) parts.
    #[must_use]
    pub fn is_hashed(&self) -> bool {
        self.identifier().contains("==")
    }

    /// The parsed modifiers.
    #[must_use]
    pub fn modifiers(&self) -> ParameterModifiers {
        self.inner.modifiers
    }

    /// The parameter type.
    #[must_use]
    pub fn value_type(&self) -> &TypeName {
        self.inner.value_type.get_or_init(|| {
            TypeName::new(&self.inner.identifier[self.inner.value_open + 1..self.inner.value_close])
        })
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.identifier[self.inner.name_start..].trim()
    }

    /// Returns `true` for `params` arrays.
    #[must_use]
    pub fn is_parameter_array(&self) -> bool {
        self.modifiers().contains(ParameterModifiers::PARAMS)
    }

    /// Returns `true` for `out` parameters.
    #[must_use]
    pub fn is_output(&self) -> bool {
        self.modifiers().contains(ParameterModifiers::OUT)
    }

    /// Returns `true` for `ref` parameters and for parameters of reference types.
    #[must_use]
    pub fn is_passed_by_reference(&self) -> bool {
        self.modifiers().contains(ParameterModifiers::REF) || self.value_type().is_reference_type()
    }

    /// Returns `true` for parameters with a default value.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.modifiers().contains(ParameterModifiers::OPT)
    }

    /// Returns `true` for the `this` receiver of an extension method.
    #[must_use]
    pub fn is_extension_method_parameter(&self) -> bool {
        self.modifiers().contains(ParameterModifiers::THIS)
    }
}

impl_name_identity!(ParameterName);
