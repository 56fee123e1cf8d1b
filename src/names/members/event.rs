use std::sync::Arc;

use crate::{
    names::{
        members::{format_member_head, impl_member_info, MemberCore, MemberModifiers},
        TypeName,
    },
    Result,
};

/// Identifier of the unknown event.
pub const UNKNOWN_EVENT_IDENTIFIER: &str = "[?] [?].???";

/// An event, `[static ][<handler type>] [<declaring type>].<name>`.
#[derive(Clone)]
pub struct EventName {
    inner: Arc<MemberCore>,
}

impl EventName {
    /// Parse an event identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] for malformed identifiers.
    pub fn new(identifier: &str) -> Result<Self> {
        let core = MemberCore::parse("event", identifier, MemberModifiers::STATIC, |id, _| {
            id.len()
        })?;
        Ok(EventName {
            inner: Arc::new(core),
        })
    }

    /// The unknown event, `[?] [?].???`.
    #[must_use]
    pub fn unknown() -> Self {
        EventName {
            inner: Arc::new(MemberCore::unknown(
                UNKNOWN_EVENT_IDENTIFIER,
                UNKNOWN_EVENT_IDENTIFIER.len(),
            )),
        }
    }

    /// Build the canonical identifier from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIdentifier`] if the parts do not form a valid event.
    pub fn from_parts(
        is_static: bool,
        handler_type: &TypeName,
        declaring_type: &TypeName,
        name: &str,
    ) -> Result<Self> {
        let mut identifier = format_member_head(
            if is_static { "static " } else { "" },
            handler_type,
            declaring_type,
        );
        identifier.push_str(name);
        Self::new(&identifier)
    }

    /// The delegate type of the event's handlers.
    #[must_use]
    pub fn handler_type(&self) -> &TypeName {
        self.core().value_type()
    }

    fn core(&self) -> &MemberCore {
        &self.inner
    }
}

impl_member_info!(EventName, UNKNOWN_EVENT_IDENTIFIER);
