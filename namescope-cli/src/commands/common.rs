use anyhow::Context;
use namescope::{
    names::{serialization::Name, TypeName},
    prelude::deserialize,
    Error,
};
use serde::Serialize;

/// Decode a serialized name.
pub fn decode_token(token: &str) -> anyhow::Result<Name> {
    deserialize(token.trim()).with_context(|| format!("failed to decode '{token}'"))
}

/// Decode a serialized name, reading input without a known prefix as a type identifier.
pub fn decode_or_type(token: &str) -> anyhow::Result<Name> {
    match deserialize(token.trim()) {
        Err(Error::UnknownPrefix(_)) => {
            log::debug!("'{token}' has no name prefix, reading it as a type");
            Ok(Name::Type(TypeName::parse(token.trim())))
        }
        other => other.with_context(|| format!("failed to decode '{token}'")),
    }
}

/// One decoded input next to the value derived from it.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub input: String,
    pub kind: &'static str,
    pub output: String,
}

/// Print conversions as `input -> output` lines, or only the output for a single input.
pub fn display_conversions(conversions: &[Conversion]) {
    if let [single] = conversions {
        println!("{}", single.output);
        return;
    }
    for conversion in conversions {
        println!("{} -> {}", conversion.input, conversion.output);
    }
}
