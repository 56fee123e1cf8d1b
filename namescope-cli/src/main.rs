mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // Show namescope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("namescope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Inspect { token } => commands::inspect::run(token, &cli.global),
        Command::Fix { identifiers } => commands::fix::run(identifiers, &cli.global),
        Command::Decode { tokens } => commands::decode::run(tokens, &cli.global),
        Command::Encode { kind, identifier } => {
            commands::encode::run(*kind, identifier, &cli.global)
        }
        Command::Readable { tokens } => commands::readable::run(tokens, &cli.global),
        Command::Anonymize {
            tokens,
            remove_generics,
        } => commands::anonymize::run(tokens, *remove_generics, &cli.global),
        Command::Batch {
            path,
            anonymize_to,
            show_failures,
        } => commands::batch::run(
            path,
            anonymize_to.as_deref(),
            *show_failures,
            &cli.global,
        ),
    }
}
