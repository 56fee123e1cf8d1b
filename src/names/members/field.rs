use std::sync::Arc;

use crate::{
    names::{
        members::{format_member_head, impl_member_info, MemberCore, MemberModifiers},
        TypeName,
    },
    Result,
};

/// Identifier of the unknown field.
pub const UNKNOWN_FIELD_IDENTIFIER: &str = "[?] [?].???";

/// A field, `[static ][<value type>] [<declaring type>].<name>`.
#[derive(Clone)]
pub struct FieldName {
    inner: Arc<MemberCore>,
}

impl FieldName {
    /// Parse a field identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] for malformed identifiers.
    pub fn new(identifier: &str) -> Result<Self> {
        let core = MemberCore::parse("field", identifier, MemberModifiers::STATIC, |id, _| {
            id.len()
        })?;
        Ok(FieldName {
            inner: Arc::new(core),
        })
    }

    /// The unknown field, `[?] [?].???`.
    #[must_use]
    pub fn unknown() -> Self {
        FieldName {
            inner: Arc::new(MemberCore::unknown(
                UNKNOWN_FIELD_IDENTIFIER,
                UNKNOWN_FIELD_IDENTIFIER.len(),
            )),
        }
    }

    /// Build the canonical identifier from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if the parts do not form a valid field.
    pub fn from_parts(
        is_static: bool,
        value_type: &TypeName,
        declaring_type: &TypeName,
        name: &str,
    ) -> Result<Self> {
        let mut identifier = format_member_head(
            if is_static { "static " } else { "" },
            value_type,
            declaring_type,
        );
        identifier.push_str(name);
        Self::new(&identifier)
    }

    fn core(&self) -> &MemberCore {
        &self.inner
    }
}

impl_member_info!(FieldName, UNKNOWN_FIELD_IDENTIFIER);
