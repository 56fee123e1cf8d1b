use namescope::prelude::Readable;

use crate::{
    app::GlobalOptions,
    commands::common::{decode_or_type, display_conversions, Conversion},
    output::print_output,
};

pub fn run(tokens: &[String], opts: &GlobalOptions) -> anyhow::Result<()> {
    let conversions = tokens
        .iter()
        .map(|token| {
            let name = decode_or_type(token)?;
            Ok(Conversion {
                input: token.clone(),
                kind: name.kind_name(),
                output: name.to_readable(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_output(&conversions, opts, |conversions| {
        display_conversions(conversions)
    })
}
