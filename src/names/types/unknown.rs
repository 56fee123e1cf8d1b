use std::sync::Arc;

use crate::names::{
    organization::{AssemblyName, NamespaceName},
    types::{TypeInfo, TypeName},
};

/// Identifier of the unknown type.
pub const UNKNOWN_TYPE_IDENTIFIER: &str = "?";

/// The type of an entity that could not be resolved, `?`.
#[derive(Clone)]
pub struct UnknownTypeName {
    identifier: Arc<str>,
}

impl UnknownTypeName {
    pub(crate) fn from_classified(identifier: &str) -> Self {
        UnknownTypeName {
            identifier: Arc::from(identifier),
        }
    }
}

impl Default for UnknownTypeName {
    fn default() -> Self {
        Self::from_classified(UNKNOWN_TYPE_IDENTIFIER)
    }
}

impl_name_identity!(UnknownTypeName);

impl TypeInfo for UnknownTypeName {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn is_unknown(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        UNKNOWN_TYPE_IDENTIFIER
    }

    fn full_name(&self) -> &str {
        UNKNOWN_TYPE_IDENTIFIER
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type() {
        let unknown = UnknownTypeName::default();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.identifier(), "?");
        assert_eq!(unknown.name(), "?");
        assert!(unknown.namespace().is_unknown());
        assert!(unknown.assembly().is_unknown());
        assert!(!unknown.is_class_type());
        assert!(!unknown.is_reference_type());
        assert!(!unknown.has_type_parameters());
    }

    #[test]
    fn test_empty_identifier_is_unknown() {
        let empty = TypeName::new("");
        assert!(empty.is_unknown());
        assert_eq!(empty.full_name(), "?");
        assert_ne!(empty, TypeName::unknown());
    }
}
