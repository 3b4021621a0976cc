//! `scalegen generate`

use crate::input::{read_schema, write_output};
use crate::logging;
use anyhow::{Context, Result};
use scalegen::CodeGenerator;
use scalegen_core::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Command-line options of `scalegen generate`
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub debug: bool,
    pub prelude: bool,
    pub namespace: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    logging::init(&config.log_level, config.debug);

    let data = read_schema(args.input.as_deref())?;
    tracing::info!(
        types = data.types.len(),
        functions = data.functions.len(),
        "generating code"
    );

    let code = CodeGenerator::new(config).generate(&data);
    write_output(args.output.as_deref(), &code)?;

    if let Some(output) = &args.output {
        tracing::info!(path = ?output, bytes = code.len(), "wrote generated code");
    }

    Ok(())
}

/// Load the configuration file, if any, then apply command-line overrides
pub fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    if args.debug {
        config = config.with_debug(true);
    }
    if args.prelude {
        config = config.with_prelude(true);
    }
    if let Some(namespace) = &args.namespace {
        config = config.with_rpc_namespace(namespace.clone());
    }

    Ok(config)
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(scalegen_core::ScalegenError::from)
        .with_context(|| format!("Failed to read config: {path:?}"))?;

    GeneratorConfig::from_toml(&text).with_context(|| format!("Failed to parse config: {path:?}"))
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
