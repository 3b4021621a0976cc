//! Schema input and generated output

use anyhow::{Context, Result};
use scalegen_core::{ScalegenError, TypeInfoData};
use std::io::{Read, Write};
use std::path::Path;

/// Whether `path` means standard input/output
fn is_stdio(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Read and parse a schema from `path`, or from stdin
pub fn read_schema(path: Option<&Path>) -> Result<TypeInfoData> {
    let text = match path {
        Some(p) if !is_stdio(path) => std::fs::read_to_string(p)
            .map_err(ScalegenError::from)
            .with_context(|| format!("Failed to read schema: {p:?}"))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(ScalegenError::from)
                .context("Failed to read schema from stdin")?;
            text
        }
    };

    parse_schema(&text)
}

/// Parse schema JSON text
pub fn parse_schema(text: &str) -> Result<TypeInfoData> {
    TypeInfoData::from_json(text).context("Failed to parse schema")
}

/// Write `text` to `path`, or to stdout
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) if !is_stdio(path) => std::fs::write(p, text)
            .map_err(ScalegenError::from)
            .with_context(|| format!("Failed to write {p:?}")),
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(ScalegenError::from)
                .context("Failed to write to stdout")
        }
    }
}
