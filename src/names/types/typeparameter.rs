use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        organization::{AssemblyName, NamespaceName},
        types::{
            classifier::{type_parameter_shape, TypeParameterShape},
            ArrayType, TypeInfo, TypeName, TypeNameKind,
        },
    },
    Error, Result,
};

/// The separator between short name and bound type.
pub const PARAMETER_NAME_TYPE_SEPARATOR: &str = " -> ";

struct TypeParameterInner {
    identifier: String,
    shape: TypeParameterShape,
    bound: OnceLock<TypeName>,
}

/// A generic type parameter, unbound (`T`) or bound to a type (`T -> p:int`).
///
/// The short name may carry an array suffix (`T[]`, `T[,] -> X`); such names report
/// [`TypeInfo::is_array`] instead of [`TypeInfo::is_type_parameter`].
#[derive(Clone)]
pub struct TypeParameterName {
    inner: Arc<TypeParameterInner>,
}

impl TypeParameterName {
    /// Parse a type-parameter identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `identifier` does not classify as a type
    /// parameter.
    pub fn new(identifier: &str) -> Result<Self> {
        if super::classify(identifier) != TypeNameKind::TypeParameter {
            return Err(Error::InvalidIdentifier {
                kind: "type parameter",
                identifier: identifier.to_string(),
            });
        }
        Ok(Self::from_classified(identifier))
    }

    /// Wrap an entry of a type-parameter list, tolerating malformed input.
    pub(crate) fn from_classified(identifier: &str) -> Self {
        let shape = type_parameter_shape(identifier).unwrap_or_else(|| lenient_shape(identifier));
        TypeParameterName {
            inner: Arc::new(TypeParameterInner {
                identifier: identifier.to_string(),
                shape,
                bound: OnceLock::new(),
            }),
        }
    }

    /// Create the unbound parameter `short_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `short_name` is not a valid parameter name.
    pub fn unbound(short_name: &str) -> Result<Self> {
        let name = Self::new(short_name)?;
        if name.is_bound() {
            return Err(Error::InvalidIdentifier {
                kind: "type parameter short name",
                identifier: short_name.to_string(),
            });
        }
        Ok(name)
    }

    /// Create `short_name -> bound`.
    ///
    /// ```rust
    /// use namescope::names::{TypeInfo, TypeName, TypeParameterName};
    ///
    /// let tp = TypeParameterName::bound("T", &TypeName::new("p:int"))?;
    /// assert_eq!(tp.identifier(), "T -> p:int");
    /// # Ok::<(), namescope::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `short_name` is not a valid parameter name.
    pub fn bound(short_name: &str, bound: &TypeName) -> Result<Self> {
        let short = Self::unbound(short_name)?;
        Self::new(&format!(
            "{}{}{}",
            short.identifier(),
            PARAMETER_NAME_TYPE_SEPARATOR,
            bound.identifier()
        ))
    }

    /// Returns `true` if the parameter carries a bound type.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner.shape.bound_start.is_some()
    }

    /// The name before the arrow, without array suffix.
    #[must_use]
    pub fn type_parameter_short_name(&self) -> &str {
        &self.inner.identifier[..self.inner.shape.short_end]
    }

    /// The bound type, or the unknown type if unbound.
    #[must_use]
    pub fn type_parameter_type(&self) -> TypeName {
        match self.inner.shape.bound_start {
            Some(start) => self
                .inner
                .bound
                .get_or_init(|| TypeName::new(&self.inner.identifier[start..]))
                .clone(),
            None => TypeName::unknown(),
        }
    }

    /// End of the short name, where an array suffix is inserted.
    pub(crate) fn short_end(&self) -> usize {
        self.inner.shape.short_end
    }
}

impl_name_identity!(TypeParameterName);

/// Best-effort offsets for list entries that are not valid type parameters.
fn lenient_shape(identifier: &str) -> TypeParameterShape {
    let (head, bound_start) = match identifier.find("->") {
        Some(arrow) => {
            let after = arrow + 2;
            let skipped = identifier[after..].len() - identifier[after..].trim_start().len();
            (&identifier[..arrow], Some(after + skipped))
        }
        None => (identifier, None),
    };
    let head_end = head.trim_end().len();
    TypeParameterShape {
        short_end: head_end,
        head_end,
        rank: None,
        bound_start: bound_start.filter(|start| *start < identifier.len()),
    }
}

impl TypeInfo for TypeParameterName {
    fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    fn name(&self) -> &str {
        &self.inner.identifier[..self.inner.shape.head_end]
    }

    fn full_name(&self) -> &str {
        self.name()
    }

    fn namespace(&self) -> NamespaceName {
        NamespaceName::unknown()
    }

    fn assembly(&self) -> AssemblyName {
        AssemblyName::unknown()
    }

    fn declaring_type(&self) -> Option<TypeName> {
        None
    }

    fn is_reference_type(&self) -> bool {
        self.is_array()
    }

    fn is_array(&self) -> bool {
        self.inner.shape.rank.is_some()
    }

    fn is_type_parameter(&self) -> bool {
        !self.is_array()
    }
}

impl ArrayType for TypeParameterName {
    fn rank(&self) -> i32 {
        self.inner.shape.rank.unwrap_or(0)
    }

    fn array_base_type(&self) -> TypeName {
        let id = &self.inner.identifier;
        TypeName::new(&format!(
            "{}{}",
            &id[..self.inner.shape.short_end],
            &id[self.inner.shape.head_end..]
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_type_parameter() {
        let tp = TypeParameterName::new("T").unwrap();
        assert!(!tp.is_bound());
        assert_eq!(tp.type_parameter_short_name(), "T");
        assert!(tp.type_parameter_type().is_unknown());
        assert!(tp.is_type_parameter());
        assert!(!tp.is_array());
        assert!(!tp.is_reference_type());
        assert!(!tp.is_class_type());
        assert!(!tp.is_value_type());
        assert_eq!(tp.name(), "T");
        assert!(tp.namespace().is_unknown());
        assert!(tp.assembly().is_unknown());
    }

    #[test]
    fn test_bound_type_parameter() {
        let tp = TypeParameterName::new("T -> System.Int32, mscorlib, 4.0.0.0").unwrap();
        assert!(tp.is_bound());
        assert_eq!(tp.type_parameter_short_name(), "T");
        assert_eq!(
            tp.type_parameter_type().identifier(),
            "System.Int32, mscorlib, 4.0.0.0"
        );
        assert_eq!(tp.name(), "T");
        assert!(tp.is_type_parameter());
    }

    #[test]
    fn test_bound_without_spaces() {
        let tp = TypeParameterName::new("T->p:int").unwrap();
        assert_eq!(tp.type_parameter_short_name(), "T");
        assert_eq!(tp.type_parameter_type().identifier(), "p:int");
    }

    #[test]
    fn test_type_parameter_array() {
        let tp = TypeParameterName::new("T[,] -> p:int").unwrap();
        assert!(tp.is_array());
        assert!(tp.is_reference_type());
        assert!(!tp.is_type_parameter());
        assert_eq!(tp.rank(), 2);
        assert_eq!(tp.name(), "T[,]");
        assert_eq!(tp.type_parameter_short_name(), "T");
        assert_eq!(tp.array_base_type().identifier(), "T -> p:int");
    }

    #[test]
    fn test_type_parameter_builders() {
        let unbound = TypeParameterName::unbound("TKey").unwrap();
        assert_eq!(unbound.identifier(), "TKey");

        let bound = TypeParameterName::bound("T", &TypeName::new("n.C, P")).unwrap();
        assert_eq!(bound.identifier(), "T -> n.C, P");
        assert_eq!(bound.type_parameter_type(), TypeName::new("n.C, P"));

        assert!(TypeParameterName::unbound("T -> X").is_err());
        assert!(TypeParameterName::unbound("1T").is_err());
    }

    #[test]
    fn test_type_parameter_rejects_other_shapes() {
        assert!(TypeParameterName::new("T -> ").is_err());
        assert!(TypeParameterName::new("n.C, P").is_err());
        assert!(TypeParameterName::new("?").is_err());
    }

    #[test]
    fn test_bound_type_is_cached() {
        let tp = TypeParameterName::new("T -> n.C`1[[U]], P").unwrap();
        let first = tp.type_parameter_type();
        let second = tp.type_parameter_type();
        assert!(std::ptr::eq(
            first.type_parameters(),
            tp.type_parameter_type().type_parameters()
        ));
        assert_eq!(first, second);
    }
}
