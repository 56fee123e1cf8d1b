use std::sync::Arc;

/// A dotted namespace such as `System.Collections.Generic`.
///
/// The empty identifier is the global namespace, which is a real, known namespace. The unknown
/// namespace is spelled `???`.
#[derive(Clone)]
pub struct NamespaceName {
    identifier: Arc<str>,
}

impl NamespaceName {
    /// Identifier of the unknown namespace.
    pub const UNKNOWN_IDENTIFIER: &'static str = "???";

    /// Wrap a dotted namespace identifier.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        NamespaceName {
            identifier: Arc::from(identifier),
        }
    }

    /// The unknown namespace, `???`.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN_IDENTIFIER)
    }

    /// The global namespace, `""`.
    #[must_use]
    pub fn global() -> Self {
        Self::new("")
    }

    /// The full dotted identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The last segment, `Generic` for `System.Collections.Generic`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.identifier.rfind('.') {
            Some(dot) => &self.identifier[dot + 1..],
            None => &self.identifier,
        }
    }

    /// The enclosing namespace. `None` for the global and the unknown namespace; a top-level
    /// namespace has the global namespace as its parent.
    #[must_use]
    pub fn parent_namespace(&self) -> Option<NamespaceName> {
        if self.is_global_namespace() || self.is_unknown() {
            return None;
        }
        match self.identifier.rfind('.') {
            Some(dot) => Some(Self::new(&self.identifier[..dot])),
            None => Some(Self::global()),
        }
    }

    /// Returns `true` for the empty identifier.
    #[must_use]
    pub fn is_global_namespace(&self) -> bool {
        self.identifier.is_empty()
    }

    /// Returns `true` for `???`.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        &*self.identifier == Self::UNKNOWN_IDENTIFIER
    }
}

impl_name_identity!(NamespaceName);
