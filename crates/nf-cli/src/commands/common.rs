//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use nf_core::{GeneratorConfig, SuiteKind};
use nf_suite::PlannedCase;
use std::path::Path;

use crate::cli::{GlobalArgs, SelectionArgs};

/// Load the generator config and apply selection flags on top of it
pub(crate) fn load_config(
    global: &GlobalArgs,
    selection: &SelectionArgs,
) -> Result<GeneratorConfig> {
    let mut config = match &global.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GeneratorConfig::load_or_default(Path::new("."))
            .context("Failed to load nullfuzz.yml")?,
    };

    if let Some(kinds) = &selection.kinds {
        config.kinds = split_list(kinds);
    }
    if let Some(suites) = &selection.suites {
        config.suites = split_list(suites)
            .iter()
            .map(|s| s.parse::<SuiteKind>())
            .collect::<Result<_, _>>()
            .context("Invalid --suites")?;
    }

    config.validate().context("Invalid selection")?;
    Ok(config)
}

/// Plan every case selected by `config`
pub(crate) fn plan_cases(config: &GeneratorConfig) -> Result<Vec<PlannedCase>> {
    let kinds = config.selected_kinds()?;
    let suites = config.selected_suites();
    Ok(nf_suite::plan(&suites, &kinds))
}

/// Split a comma-separated flag value, dropping empty items
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
