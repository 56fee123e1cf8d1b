use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::decode_token,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct DecodedName {
    token: String,
    kind: &'static str,
    identifier: String,
}

pub fn run(tokens: &[String], opts: &GlobalOptions) -> anyhow::Result<()> {
    let decoded = tokens
        .iter()
        .map(|token| {
            let name = decode_token(token)?;
            Ok(DecodedName {
                token: token.clone(),
                kind: name.kind_name(),
                identifier: name.identifier(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_output(&decoded, opts, |decoded| {
        let mut writer = TabWriter::new(vec![("KIND", Align::Left), ("IDENTIFIER", Align::Left)]);
        for name in decoded {
            writer.row(vec![name.kind.to_string(), name.identifier.clone()]);
        }
        writer.print();
    })
}
