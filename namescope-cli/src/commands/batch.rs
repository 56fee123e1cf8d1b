use std::{
    collections::BTreeMap,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use anyhow::Context;
use namescope::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct Failure {
    line: usize,
    token: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct BatchSummary {
    total: usize,
    decoded: usize,
    /// Tokens whose legacy spelling was rewritten while decoding
    normalized: usize,
    kinds: BTreeMap<&'static str, usize>,
    /// Type names by variant
    type_variants: BTreeMap<&'static str, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<Failure>,
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Box::new(BufReader::new(file))
    };
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read {}", path.display()))
}

pub fn run(
    path: &Path,
    anonymize_to: Option<&Path>,
    show_failures: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let lines = read_lines(path)?;
    let entries: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    log::debug!("decoding {} tokens from {}", entries.len(), path.display());
    let results: Vec<(usize, &str, namescope::Result<Name>)> = entries
        .par_iter()
        .map(|&(line, token)| (line, token, deserialize(token)))
        .collect();

    let mut summary = BatchSummary {
        total: results.len(),
        decoded: 0,
        normalized: 0,
        kinds: BTreeMap::new(),
        type_variants: BTreeMap::new(),
        failures: Vec::new(),
    };
    let mut decoded = Vec::with_capacity(results.len());
    for (line, token, result) in results {
        match result {
            Ok(name) => {
                summary.decoded += 1;
                if serialize(&name) != token {
                    summary.normalized += 1;
                }
                *summary.kinds.entry(name.kind_name()).or_default() += 1;
                if let Name::Type(t) = &name {
                    *summary.type_variants.entry(t.kind().into()).or_default() += 1;
                }
                decoded.push(name);
            }
            Err(err) => {
                log::warn!("line {line}: {err}");
                summary.failures.push(Failure {
                    line,
                    token: token.to_string(),
                    error: err.to_string(),
                });
            }
        }
    }

    if let Some(target) = anonymize_to {
        let anonymized: Vec<String> = decoded
            .par_iter()
            .map(|name| serialize(&name.to_anonymous()))
            .collect();
        let mut file = std::fs::File::create(target)
            .with_context(|| format!("failed to create {}", target.display()))?;
        for token in &anonymized {
            writeln!(file, "{token}")?;
        }
        log::info!(
            "wrote {} anonymized names to {}",
            anonymized.len(),
            target.display()
        );
    }

    if !show_failures {
        summary.failures.clear();
    }

    print_output(&summary, opts, |summary| {
        let mut writer = TabWriter::new(vec![("KIND", Align::Left), ("COUNT", Align::Right)]);
        for (kind, count) in &summary.kinds {
            writer.row(vec![kind.to_string(), count.to_string()]);
        }
        if !writer.is_empty() {
            writer.print();
            println!();
        }

        let mut writer = TabWriter::new(vec![("TYPE VARIANT", Align::Left), ("COUNT", Align::Right)]);
        for (variant, count) in &summary.type_variants {
            writer.row(vec![variant.to_string(), count.to_string()]);
        }
        if !writer.is_empty() {
            writer.print();
            println!();
        }
        println!(
            "Decoded {} of {} names ({} normalized, {} failed)",
            summary.decoded,
            summary.total,
            summary.normalized,
            summary.total - summary.decoded
        );
        for failure in &summary.failures {
            println!("  line {}: {} ({})", failure.line, failure.token, failure.error);
        }
    })
}
