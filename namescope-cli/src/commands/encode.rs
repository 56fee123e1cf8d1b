use anyhow::Context;
use namescope::prelude::*;
use serde::Serialize;

use crate::{app::GlobalOptions, app::NameKind, output::print_output};

#[derive(Debug, Serialize)]
struct EncodedName {
    kind: &'static str,
    identifier: String,
    token: String,
}

/// Build the name of `kind` from a raw identifier. Types are normalized on the way.
fn build(kind: NameKind, identifier: &str) -> namescope::Result<Name> {
    Ok(match kind {
        NameKind::Type => Name::Type(TypeName::parse(identifier)),
        NameKind::Method => Name::Method(MethodName::new(identifier)?),
        NameKind::Field => Name::Field(FieldName::new(identifier)?),
        NameKind::Property => Name::Property(PropertyName::new(identifier)?),
        NameKind::Event => Name::Event(EventName::new(identifier)?),
        NameKind::Parameter => Name::Parameter(ParameterName::new(identifier)?),
        NameKind::Assembly => Name::Assembly(AssemblyName::new(identifier)),
        NameKind::Version => Name::Version(AssemblyVersion::parse(identifier)),
        NameKind::Namespace => Name::Namespace(NamespaceName::new(identifier)),
        NameKind::LocalVariable => Name::LocalVariable(LocalVariableName::new(identifier)?),
        NameKind::Lambda => Name::Lambda(LambdaName::new(identifier)?),
    })
}

pub fn run(kind: NameKind, identifier: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let name = build(kind, identifier)
        .with_context(|| format!("'{identifier}' is not a valid {kind:?} identifier"))?;
    let encoded = EncodedName {
        kind: name.kind_name(),
        identifier: name.identifier(),
        token: serialize(&name),
    };

    print_output(&encoded, opts, |encoded| println!("{}", encoded.token))
}
