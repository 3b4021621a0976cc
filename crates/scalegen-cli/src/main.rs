//! scalegen CLI - Generate codec definitions and RPC stubs from a type registry
//!
//! Commands:
//! - `scalegen generate` - Generate TypeScript from a schema
//! - `scalegen validate` - Report placeholders, cycles and duplicates in a schema

use clap::{Parser, Subcommand};
use scalegen_core::ScalegenError;
use std::path::PathBuf;
use std::process::ExitCode;

mod generate;
mod input;
mod logging;
mod validate;

#[derive(Parser)]
#[command(name = "scalegen")]
#[command(author, version, about = "Code generator for SCALE type registries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate type definitions and function stubs
    Generate {
        /// Schema JSON file (default: stdin, also `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Log every pipeline step
        #[arg(long)]
        debug: bool,

        /// Prepend the import header
        #[arg(long)]
        prelude: bool,

        /// RPC namespace used by the stubs (default: nucleus)
        #[arg(long)]
        namespace: Option<String>,

        /// Path to a scalegen.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check a schema without generating code
    Validate {
        /// Schema JSON file (default: stdin, also `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error when the schema is not clean
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            debug,
            prelude,
            namespace,
            config,
        } => generate::run(generate::GenerateArgs {
            input,
            output,
            debug,
            prelude,
            namespace,
            config,
        }),
        Commands::Validate {
            input,
            json,
            strict,
        } => validate::run(input, json, strict),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Map an error to the process exit status
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ScalegenError>()
        .map_or(1, ScalegenError::error_code)
}
