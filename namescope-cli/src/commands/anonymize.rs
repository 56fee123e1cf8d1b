use namescope::{
    names::serialization::Name,
    prelude::{serialize, Anonymize, RemoveGenerics},
};

use crate::{
    app::GlobalOptions,
    commands::common::{decode_token, display_conversions, Conversion},
    output::print_output,
};

/// Drop type-parameter bindings from the kinds that carry them.
pub fn strip_generics(name: Name) -> Name {
    match name {
        Name::Type(t) => Name::Type(t.remove_generics()),
        Name::Method(m) => Name::Method(m.remove_generics()),
        Name::Field(f) => Name::Field(f.remove_generics()),
        Name::Property(p) => Name::Property(p.remove_generics()),
        other => other,
    }
}

pub fn run(tokens: &[String], remove_generics: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let conversions = tokens
        .iter()
        .map(|token| {
            let mut name = decode_token(token)?;
            if remove_generics {
                name = strip_generics(name);
            }
            let anonymous = name.to_anonymous();
            Ok(Conversion {
                input: token.clone(),
                kind: anonymous.kind_name(),
                output: serialize(&anonymous),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_output(&conversions, opts, |conversions| {
        display_conversions(conversions)
    })
}
