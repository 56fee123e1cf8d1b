/// Implements identity for a name type on top of its `identifier()`.
///
/// Names are equal, hash and order exactly like their identifier strings. `Debug` and
/// `Display` show the identifier instead of the cached internals.
///
/// ```rust, ignore
/// impl_name_identity!(FieldName);
/// assert_eq!(FieldName::new("[?] [?].f")?, FieldName::new("[?] [?].f")?);
/// ```
macro_rules! impl_name_identity {
    ($name:ident) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.identifier() == other.identifier()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.identifier().hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.identifier().cmp(other.identifier())
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.identifier())
                    .finish()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.identifier())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.identifier()
            }
        }
    };
}

/// Forwards a method call to whichever variant a [`crate::names::TypeName`] holds.
///
/// ```rust, ignore
/// fn name(&self) -> &str {
///     dispatch_type!(self, t => t.name())
/// }
/// ```
macro_rules! dispatch_type {
    ($value:expr, $binding:ident => $body:expr) => {
        match $value {
            crate::names::TypeName::Unknown($binding) => $body,
            crate::names::TypeName::Predefined($binding) => $body,
            crate::names::TypeName::Array($binding) => $body,
            crate::names::TypeName::Delegate($binding) => $body,
            crate::names::TypeName::TypeParameter($binding) => $body,
            crate::names::TypeName::Regular($binding) => $body,
        }
    };
}

/// Implements `serde::Serialize`/`Deserialize` for a name through its serialized token.
///
/// The token is the same `<prefix>:<identifier>` string produced by
/// [`crate::names::serialization::serialize`], so serde output and the wire format agree.
///
/// ```rust, ignore
/// impl_serde_via_token!(MethodName, Method);
/// ```
#[cfg(feature = "serde")]
macro_rules! impl_serde_via_token {
    ($name:ident, $variant:ident) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let token = crate::names::serialization::serialize(
                    &crate::names::serialization::Name::$variant(self.clone()),
                );
                serializer.serialize_str(&token)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                match crate::names::serialization::deserialize(&token)
                    .map_err(serde::de::Error::custom)?
                {
                    crate::names::serialization::Name::$variant(name) => Ok(name),
                    other => Err(serde::de::Error::custom(format!(
                        "expected {} but found '{}'",
                        stringify!($name),
                        crate::names::serialization::serialize(&other)
                    ))),
                }
            }
        }
    };
}
