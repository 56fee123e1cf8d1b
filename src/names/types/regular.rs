use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        organization::{AssemblyName, NamespaceName},
        tokenizer::parse_bracketed_list,
        types::{
            classifier::{is_regular_type_identifier, regular_shape_lenient, RegularShape},
            TypeInfo, TypeName, TypeParameterName,
        },
    },
    Error, Result,
};

/// Full names of the built-in simple value types.
const SIMPLE_TYPES: [&str; 13] = [
    "System.SByte",
    "System.Byte",
    "System.Int16",
    "System.UInt16",
    "System.Int32",
    "System.UInt32",
    "System.Int64",
    "System.UInt64",
    "System.Char",
    "System.Single",
    "System.Double",
    "System.Decimal",
    "System.Boolean",
];

struct RegularInner {
    identifier: String,
    shape: RegularShape,
    type_parameters: OnceLock<Vec<TypeParameterName>>,
}

/// A class, struct, enum or interface: `[s:|e:|i:]Namespace.Name[`N[[...]]][+Nested...][, Assembly]`.
///
/// Nesting splits on `+` outside of type-parameter lists; every segment may carry its own arity
/// tick and list. The kind prefix marks structs (`s:`), enums (`e:`) and interfaces (`i:`); no
/// prefix means class.
#[derive(Clone)]
pub struct RegularTypeName {
    inner: Arc<RegularInner>,
}

impl RegularTypeName {
    /// Parse a well-formed, non-array regular type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `identifier` is not a regular type.
    pub fn new(identifier: &str) -> Result<Self> {
        if !is_regular_type_identifier(identifier) {
            return Err(Error::InvalidIdentifier {
                kind: "regular type",
                identifier: identifier.to_string(),
            });
        }
        Ok(Self::from_classified(identifier))
    }

    /// Wrap an identifier that classified as regular, tolerating malformed input.
    pub(crate) fn from_classified(identifier: &str) -> Self {
        RegularTypeName {
            inner: Arc::new(RegularInner {
                identifier: identifier.to_string(),
                shape: regular_shape_lenient(identifier),
                type_parameters: OnceLock::new(),
            }),
        }
    }

    /// The kind prefix (`s:`, `e:`, `i:`) or `""` for classes.
    #[must_use]
    pub fn kind_prefix(&self) -> &str {
        &self.inner.identifier[..self.inner.shape.prefix_len]
    }

    /// The text after the type part, e.g. `mscorlib, 4.0.0.0`, or `None` without assembly.
    fn assembly_text(&self) -> Option<&str> {
        let id = &self.inner.identifier;
        let type_end = self.inner.shape.type_end;
        (type_end < id.len()).then(|| id[type_end..].trim_matches(|c| c == ',' || c == ' '))
    }

    /// The `+`-separated segments of the type part, without kind prefix.
    pub(crate) fn segments(&self) -> impl Iterator<Item = &str> {
        let id = &self.inner.identifier;
        self.inner
            .shape
            .segments
            .iter()
            .map(move |s| &id[s.start..s.end])
    }

    pub(crate) fn shape(&self) -> &RegularShape {
        &self.inner.shape
    }
}

impl_name_identity!(RegularTypeName);

impl TypeInfo for RegularTypeName {
    fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    fn name(&self) -> &str {
        let shape = &self.inner.shape;
        let Some(last) = shape.segments.last() else {
            return "";
        };
        let qualified = &self.inner.identifier[last.start..last.name_end];
        match qualified.rfind('.') {
            Some(dot) if shape.segments.len() == 1 => &qualified[dot + 1..],
            _ => qualified,
        }
    }

    fn full_name(&self) -> &str {
        &self.inner.identifier[self.inner.shape.prefix_len..self.inner.shape.type_end]
    }

    fn namespace(&self) -> NamespaceName {
        let Some(first) = self.inner.shape.segments.first() else {
            return NamespaceName::global();
        };
        let qualified = &self.inner.identifier[first.start..first.name_end];
        match qualified.rfind('.') {
            Some(dot) => NamespaceName::new(&qualified[..dot]),
            None => NamespaceName::global(),
        }
    }

    fn assembly(&self) -> AssemblyName {
        match self.assembly_text() {
            Some(text) => AssemblyName::new(text),
            None => AssemblyName::unknown(),
        }
    }

    fn declaring_type(&self) -> Option<TypeName> {
        if !self.is_nested_type() {
            return None;
        }
        let shape = &self.inner.shape;
        let last = shape.segments.last()?;
        let outer = &self.inner.identifier[shape.prefix_len..last.start - 1];
        let assembly = self
            .assembly_text()
            .unwrap_or(AssemblyName::UNKNOWN_IDENTIFIER);
        Some(TypeName::new(&format!("{}, {}", outer, assembly)))
    }

    fn is_nested_type(&self) -> bool {
        self.inner.shape.segments.len() > 1
    }

    fn is_void_type(&self) -> bool {
        self.full_name() == "System.Void"
    }

    fn is_value_type(&self) -> bool {
        self.is_struct_type() || self.is_enum_type() || self.is_void_type()
    }

    fn is_simple_type(&self) -> bool {
        SIMPLE_TYPES.contains(&self.full_name())
    }

    fn is_enum_type(&self) -> bool {
        self.kind_prefix() == "e:"
    }

    fn is_struct_type(&self) -> bool {
        self.kind_prefix() == "s:"
            || self.is_simple_type()
            || self.is_void_type()
            || self.is_nullable_type()
    }

    fn is_nullable_type(&self) -> bool {
        !self.is_nested_type() && self.full_name().starts_with("System.Nullable`1[[")
    }

    fn is_reference_type(&self) -> bool {
        self.is_class_type() || self.is_interface_type()
    }

    fn is_class_type(&self) -> bool {
        !self.is_value_type() && !self.is_interface_type()
    }

    fn is_interface_type(&self) -> bool {
        self.kind_prefix() == "i:"
    }

    fn is_generic_entity(&self) -> bool {
        self.inner.shape.segments.iter().any(|s| s.has_tick)
    }

    fn type_parameters(&self) -> &[TypeParameterName] {
        self.inner.type_parameters.get_or_init(|| {
            let id = &self.inner.identifier;
            self.inner
                .shape
                .segments
                .iter()
                .filter_map(|s| s.list)
                .filter_map(|(open, close)| parse_bracketed_list(id, open, close).ok())
                .flatten()
                .map(TypeParameterName::from_classified)
                .collect()
        })
    }
}
