//! Explicit interning of parsed names.
//!
//! Parsing is cheap, but the lazily derived parts of a name (type-parameter lists, parameter
//! lists, base types) are cached per instance. Analyses that see the same identifiers many
//! times can share those instances through a [`NameCache`]: every lookup of an identifier
//! returns a clone of the same instance, so derived parts are computed once per cache instead of
//! once per occurrence.
//!
//! The cache is a plain value that callers create and pass around; there is no process-wide
//! registry. It is `Send + Sync` and can be shared between threads behind an `Arc`.
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{NameCache, TypeInfo};
//!
//! let cache = NameCache::new();
//! let first = cache.type_name("n.C`1[[T -> p:int]], P");
//! let second = cache.type_name("n.C`1[[T -> p:int]], P");
//! assert!(std::ptr::eq(first.type_parameters(), second.type_parameters()));
//! assert_eq!(cache.len(), 1);
//! ```

use dashmap::{mapref::entry::Entry, DashMap};

use crate::{
    names::{
        fixes::fix_legacy_formats, EventName, FieldName, MethodName, ParameterName, PropertyName,
        TypeName,
    },
    Result,
};

/// An interning cache from raw identifiers to parsed names.
///
/// Raw input is normalized with [`fix_legacy_formats`] before it is parsed, and the cache is
/// keyed by the raw input, so legacy and current spellings of the same entity map to equal
/// names. Identifiers that fail to parse are not cached.
#[derive(Default)]
pub struct NameCache {
    types: DashMap<String, TypeName>,
    methods: DashMap<String, MethodName>,
    fields: DashMap<String, FieldName>,
    properties: DashMap<String, PropertyName>,
    events: DashMap<String, EventName>,
    parameters: DashMap<String, ParameterName>,
}

fn intern<T: Clone>(
    map: &DashMap<String, T>,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Result<T> {
    if let Some(cached) = map.get(raw) {
        return Ok(cached.clone());
    }

    let parsed = parse(&fix_legacy_formats(raw))?;
    match map.entry(raw.to_string()) {
        // Another thread won the race; hand out its instance so all callers share one
        Entry::Occupied(occupied) => Ok(occupied.get().clone()),
        Entry::Vacant(vacant) => Ok(vacant.insert(parsed).clone()),
    }
}

impl NameCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The interned type name of `raw`.
    ///
    /// Type-name construction is total, so this never fails.
    pub fn type_name(&self, raw: &str) -> TypeName {
        if let Some(cached) = self.types.get(raw) {
            return cached.clone();
        }
        let parsed = TypeName::new(&fix_legacy_formats(raw));
        self.types
            .entry(raw.to_string())
            .or_insert(parsed)
            .clone()
    }

    /// The interned method name of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if `raw` is not a method identifier.
    pub fn method(&self, raw: &str) -> Result<MethodName> {
        intern(&self.methods, raw, MethodName::new)
    }

    /// The interned field name of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if `raw` is not a field identifier.
    pub fn field(&self, raw: &str) -> Result<FieldName> {
        intern(&self.fields, raw, FieldName::new)
    }

    /// The interned property name of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if `raw` is not a property identifier.
    pub fn property(&self, raw: &str) -> Result<PropertyName> {
        intern(&self.properties, raw, PropertyName::new)
    }

    /// The interned event name of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if `raw` is not an event identifier.
    pub fn event(&self, raw: &str) -> Result<EventName> {
        intern(&self.events, raw, EventName::new)
    }

    /// The interned parameter name of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if `raw` is not a parameter identifier.
    pub fn parameter(&self, raw: &str) -> Result<ParameterName> {
        intern(&self.parameters, raw, ParameterName::new)
    }

    /// Total number of interned names over all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
            + self.methods.len()
            + self.fields.len()
            + self.properties.len()
            + self.events.len()
            + self.parameters.len()
    }

    /// Returns `true` if nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every interned name.
    pub fn clear(&self) {
        self.types.clear();
        self.methods.clear();
        self.fields.clear();
        self.properties.clear();
        self.events.clear();
        self.parameters.clear();
    }
}
