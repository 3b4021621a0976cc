//! `scalegen validate`

use crate::input::{read_schema, write_output};
use crate::logging;
use anyhow::{Context, Result};
use scalegen::ValidationReport;
use scalegen_core::ScalegenError;
use std::path::PathBuf;

pub fn run(input: Option<PathBuf>, json: bool, strict: bool) -> Result<()> {
    logging::init("info", false);

    let data = read_schema(input.as_deref())?;
    let report = scalegen::validate(&data);

    write_output(None, &render(&report, json)?)?;
    check(&report, strict)
}

/// Render the report as a summary or as pretty JSON
pub fn render(report: &ValidationReport, json: bool) -> Result<String> {
    if json {
        let mut text =
            serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(report.summary())
    }
}

/// In strict mode, fail unless the report is clean
pub fn check(report: &ValidationReport, strict: bool) -> Result<()> {
    if strict && !report.is_clean() {
        tracing::warn!(
            placeholders = report.placeholder_refs.len(),
            cycle_broken = report.cycle_broken.len(),
            "schema is not clean"
        );
        return Err(ScalegenError::ValidationFailed(format!(
            "{} placeholder references, {} cycle-broken ids, {} duplicate type ids, {} duplicate function names",
            report.placeholder_refs.len(),
            report.cycle_broken.len(),
            report.duplicate_type_ids.len(),
            report.duplicate_function_names.len()
        ))
        .into());
    }

    Ok(())
}
