use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// namescope - inspection, normalization and anonymization of .NET name identifiers
#[derive(Debug, Parser)]
#[command(name = "namescope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The kinds of name `encode` can build a token for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NameKind {
    Type,
    Method,
    Field,
    Property,
    Event,
    Parameter,
    Assembly,
    Version,
    Namespace,
    LocalVariable,
    Lambda,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the structure of a serialized name: kind, parts, types and parameters.
    Inspect {
        /// A serialized name such as `0T:System.Int32, mscorlib, 4.0.0.0`, or a bare type
        /// identifier.
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Rewrite historical identifier spellings into the current format.
    Fix {
        /// Identifiers to normalize.
        #[arg(value_name = "IDENTIFIER", required = true)]
        identifiers: Vec<String>,
    },

    /// Decode serialized names and print their kind and canonical identifier.
    Decode {
        /// Serialized names such as `0M:[p:void] [n.C, P].M()`.
        #[arg(value_name = "TOKEN", required = true)]
        tokens: Vec<String>,
    },

    /// Build the serialized token of a raw identifier.
    Encode {
        /// The kind of name the identifier denotes.
        #[arg(short, long, value_enum, default_value = "type")]
        kind: NameKind,

        /// The raw identifier.
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
    },

    /// Render serialized names the way they would be written in source.
    Readable {
        /// Serialized names.
        #[arg(value_name = "TOKEN", required = true)]
        tokens: Vec<String>,
    },

    /// Replace project-specific parts of serialized names with hashes.
    Anonymize {
        /// Serialized names.
        #[arg(value_name = "TOKEN", required = true)]
        tokens: Vec<String>,

        /// Also reduce type-parameter bindings to their short names.
        #[arg(long)]
        remove_generics: bool,
    },

    /// Decode a file of serialized names (one per line) in parallel and summarize it.
    Batch {
        /// Input file; `-` reads standard input.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Write the anonymized token of every decoded line to this file.
        #[arg(long, value_name = "FILE")]
        anonymize_to: Option<PathBuf>,

        /// Print every line that failed to decode.
        #[arg(long)]
        show_failures: bool,
    },
}
