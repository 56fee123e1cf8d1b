//! Member names: methods, fields, properties, events and their parameters.
//!
//! Every member identifier follows the same scheme,
//! `<modifiers> [<value type>] [<declaring type>].<name><suffix>`, where the member kind
//! decides which modifiers are allowed and what may follow the name. Value and declaring type
//! are parsed into [`TypeName`]s on first access.
//!
//! # Key Components
//!
//! - [`MemberInfo`] - Accessors shared by all members
//! - [`MethodName`] - `[R] [D].M`1[[T]]([P] p)`, including constructors
//! - [`FieldName`] / [`EventName`] - `[T] [D].f`
//! - [`PropertyName`] - `get set [T] [D].P()`, including indexers
//! - [`ParameterName`] - `ref [T] p`, with [`ParameterModifiers`]
//! - [`LocalVariableName`] / [`LambdaName`] - Names that appear inside method bodies
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{MemberInfo, MethodName, TypeInfo};
//!
//! let method = MethodName::new("static [p:bool] [n.Ext, P].IsEmpty(this [p:string] s)")?;
//! assert!(method.is_static());
//! assert!(method.is_extension_method());
//! assert_eq!(method.name(), "IsEmpty");
//! assert_eq!(method.full_name(), "n.Ext.IsEmpty");
//! assert!(method.return_type().is_simple_type());
//! # Ok::<(), namescope::Error>(())
//! ```

mod event;
mod field;
mod local;
mod method;
mod parameter;
mod property;

pub use event::EventName;
pub use field::FieldName;
pub use local::{LambdaName, LocalVariableName};
pub use method::MethodName;
pub use parameter::{ParameterModifiers, ParameterName};
pub use property::PropertyName;

use std::sync::OnceLock;

use bitflags::bitflags;

use crate::{
    names::{
        tokenizer::{find_corresponding_close_bracket, parse_parameter_list},
        TypeInfo, TypeName,
    },
    Error, Result,
};

bitflags! {
    /// Modifiers that precede the value type of a member.
    #[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
    pub struct MemberModifiers: u8 {
        /// `static`
        const STATIC = 0x01;
        /// `get`, properties only
        const GET = 0x02;
        /// `set`, properties only
        const SET = 0x04;
    }
}

/// Accessors shared by all member names.
pub trait MemberInfo {
    /// The canonical identifier.
    fn identifier(&self) -> &str;

    /// Returns `true` for the unknown member of this kind.
    fn is_unknown(&self) -> bool;

    /// Returns `true` if the identifier contains anonymized (hashed) parts.
    fn is_hashed(&self) -> bool {
        self.identifier().contains("==")
    }

    /// Returns `true` for static members.
    fn is_static(&self) -> bool;

    /// The field, property or handler type, or the return type of a method.
    fn value_type(&self) -> &TypeName;

    /// The type that declares the member.
    fn declaring_type(&self) -> &TypeName;

    /// The simple member name, `.ctor` for constructors.
    fn name(&self) -> &str;

    /// The declaring type's full name and the member name, joined by `.`.
    fn full_name(&self) -> &str;
}

/// Offsets of `<modifiers> [V] [D].<name...>`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MemberShape {
    pub value_open: usize,
    pub value_close: usize,
    pub declaring_open: usize,
    pub declaring_close: usize,
    pub name_start: usize,
}

pub(crate) fn member_shape(id: &str) -> Option<MemberShape> {
    let bytes = id.as_bytes();
    let value_open = id.find('[')?;
    let value_close = find_corresponding_close_bracket(id, value_open).ok()?;

    let mut declaring_open = value_close + 1;
    while bytes.get(declaring_open) == Some(&b' ') {
        declaring_open += 1;
    }
    if declaring_open == value_close + 1 || bytes.get(declaring_open) != Some(&b'[') {
        return None;
    }
    let declaring_close = find_corresponding_close_bracket(id, declaring_open).ok()?;
    if bytes.get(declaring_close + 1) != Some(&b'.') {
        return None;
    }

    Some(MemberShape {
        value_open,
        value_close,
        declaring_open,
        declaring_close,
        name_start: declaring_close + 2,
    })
}

/// Parse the whitespace-separated modifiers in front of the first `[`.
pub(crate) fn parse_member_modifiers(text: &str) -> Option<MemberModifiers> {
    text.split_whitespace()
        .try_fold(MemberModifiers::empty(), |acc, word| {
            let flag = match word {
                "static" => MemberModifiers::STATIC,
                "get" => MemberModifiers::GET,
                "set" => MemberModifiers::SET,
                _ => return None,
            };
            Some(acc | flag)
        })
}

/// The parsed common part of a member identifier.
pub(crate) struct MemberCore {
    identifier: String,
    shape: MemberShape,
    name_end: usize,
    modifiers: MemberModifiers,
    value_type: OnceLock<TypeName>,
    declaring_type: OnceLock<TypeName>,
    full_name: OnceLock<String>,
}

impl MemberCore {
    /// Parse the common member part of `identifier`.
    ///
    /// `name_end` receives the identifier and the start of the name and returns where the name
    /// ends. Modifiers outside of `allowed` and empty names are rejected.
    pub fn parse(
        kind: &'static str,
        identifier: &str,
        allowed: MemberModifiers,
        name_end: impl FnOnce(&str, usize) -> usize,
    ) -> Result<Self> {
        let invalid = || Error::InvalidIdentifier {
            kind,
            identifier: identifier.to_string(),
        };
        let shape = member_shape(identifier).ok_or_else(invalid)?;
        let modifiers = parse_member_modifiers(&identifier[..shape.value_open])
            .filter(|m| allowed.contains(*m))
            .ok_or_else(invalid)?;
        let name_end = name_end(identifier, shape.name_start);
        if name_end <= shape.name_start || name_end > identifier.len() {
            return Err(invalid());
        }

        Ok(MemberCore {
            identifier: identifier.to_string(),
            shape,
            name_end,
            modifiers,
            value_type: OnceLock::new(),
            declaring_type: OnceLock::new(),
            full_name: OnceLock::new(),
        })
    }

    /// The core of an unknown member, an identifier starting with `[?] [?].`.
    pub fn unknown(identifier: &'static str, name_end: usize) -> Self {
        MemberCore {
            identifier: identifier.to_string(),
            shape: MemberShape {
                value_open: 0,
                value_close: 2,
                declaring_open: 4,
                declaring_close: 6,
                name_start: 8,
            },
            name_end,
            modifiers: MemberModifiers::empty(),
            value_type: OnceLock::new(),
            declaring_type: OnceLock::new(),
            full_name: OnceLock::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn modifiers(&self) -> MemberModifiers {
        self.modifiers
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MemberModifiers::STATIC)
    }

    pub fn value_id(&self) -> &str {
        &self.identifier[self.shape.value_open + 1..self.shape.value_close]
    }

    pub fn value_type(&self) -> &TypeName {
        self.value_type
            .get_or_init(|| TypeName::new(self.value_id()))
    }

    pub fn declaring_type(&self) -> &TypeName {
        self.declaring_type.get_or_init(|| {
            TypeName::new(
                &self.identifier[self.shape.declaring_open + 1..self.shape.declaring_close],
            )
        })
    }

    pub fn name(&self) -> &str {
        &self.identifier[self.shape.name_start..self.name_end]
    }

    pub fn full_name(&self) -> &str {
        self.full_name
            .get_or_init(|| format!("{}.{}", self.declaring_type().full_name(), self.name()))
    }

    pub fn name_start(&self) -> usize {
        self.shape.name_start
    }

    pub fn name_end(&self) -> usize {
        self.name_end
    }

    /// Everything after the declaring type, `M`1[[T]]([T] t)`.
    pub fn signature(&self) -> &str {
        &self.identifier[self.shape.name_start..]
    }
}

/// Parse a `( ... )` list that ends the identifier into parameter names.
///
/// Entries that are not valid parameters become [`ParameterName::unknown`].
pub(crate) fn parse_parameters(identifier: &str, open: usize, close: usize) -> Vec<ParameterName> {
    parse_parameter_list(identifier, open, close)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| {
            ParameterName::new(entry).unwrap_or_else(|err| {
                log::warn!("Unparseable parameter '{}' in '{}': {}", entry, identifier, err);
                ParameterName::unknown()
            })
        })
        .collect()
}

/// Join parameter identifiers into a canonical `(a, b)` list.
pub(crate) fn format_parameters(parameters: &[ParameterName]) -> String {
    let entries: Vec<&str> = parameters.iter().map(ParameterName::identifier).collect();
    format!("({})", entries.join(", "))
}

/// Format `[V] [D].` with an optional `static ` in front.
pub(crate) fn format_member_head(
    modifiers: &str,
    value_type: &TypeName,
    declaring_type: &TypeName,
) -> String {
    format!(
        "{}[{}] [{}].",
        modifiers,
        value_type.identifier(),
        declaring_type.identifier()
    )
}

/// Implements [`MemberInfo`] for a member whose `core()` returns its [`MemberCore`].
macro_rules! impl_member_info {
    ($name:ident, $unknown:expr) => {
        impl crate::names::members::MemberInfo for $name {
            fn identifier(&self) -> &str {
                self.core().identifier()
            }

            fn is_unknown(&self) -> bool {
                self.core().identifier() == $unknown
            }

            fn is_static(&self) -> bool {
                self.core().is_static()
            }

            fn value_type(&self) -> &crate::names::TypeName {
                self.core().value_type()
            }

            fn declaring_type(&self) -> &crate::names::TypeName {
                self.core().declaring_type()
            }

            fn name(&self) -> &str {
                self.core().name()
            }

            fn full_name(&self) -> &str {
                self.core().full_name()
            }
        }

        impl $name {
            /// The canonical identifier.
            #[must_use]
            pub fn identifier(&self) -> &str {
                self.core().identifier()
            }
        }

        impl_name_identity!($name);
    };
}
pub(crate) use impl_member_info;
