use namescope::prelude::fix_legacy_formats;

use crate::{
    app::GlobalOptions,
    commands::common::{display_conversions, Conversion},
    output::print_output,
};

pub fn run(identifiers: &[String], opts: &GlobalOptions) -> anyhow::Result<()> {
    let conversions: Vec<Conversion> = identifiers
        .iter()
        .map(|identifier| {
            let fixed = fix_legacy_formats(identifier);
            if fixed != *identifier {
                log::debug!("rewrote '{identifier}' to '{fixed}'");
            }
            Conversion {
                input: identifier.clone(),
                kind: "identifier",
                output: fixed,
            }
        })
        .collect();

    print_output(&conversions, opts, |conversions| {
        display_conversions(conversions)
    })
}
