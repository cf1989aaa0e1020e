//! Generate command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nf_core::CATALOG;
use nf_oracle::{GraphqlJsOracle, Oracle};
use nf_render::{EmitterSettings, LuaEmitter};
use nf_suite::{RunSummary, SuiteRunner};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::cli::{GenerateArgs, GlobalArgs};
use crate::commands::common::{load_config, plan_cases};

/// Execute the generate command
pub async fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = load_config(global, &args.selection)?;
    if let Some(node) = &args.node {
        config.oracle.node = node.clone();
    }
    if let Some(node_path) = &args.node_path {
        config.oracle.node_path = Some(node_path.clone());
    }

    let cases = plan_cases(&config)?;
    log::info!(
        "Planned {} cases across {} suites",
        cases.len(),
        config.selected_suites().len()
    );

    GraphqlJsOracle::probe(&config.oracle)
        .await
        .context("graphql-js is not available")?;
    let oracle = GraphqlJsOracle::spawn(&config.oracle).context("Failed to start graphql-js")?;
    let emitter = LuaEmitter::new(EmitterSettings::from(&config))?;

    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let summary = write_with_progress(&oracle, &emitter, &cases, &mut out).await?;
            log::info!("Wrote {}", path.display());
            summary
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            nf_suite::generate(&oracle, &emitter, &cases, &mut out).await?
        }
    };

    oracle.shutdown().await?;
    print_summary(&summary);
    Ok(())
}

/// Generate into `out`, ticking a progress bar on stderr per case
async fn write_with_progress<W: Write>(
    oracle: &dyn Oracle,
    emitter: &LuaEmitter,
    cases: &[nf_suite::PlannedCase],
    out: &mut W,
) -> Result<RunSummary> {
    let pb = ProgressBar::new(cases.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    writeln!(out, "{}", emitter.render_header(CATALOG)?)?;
    let summary = SuiteRunner::new(oracle, emitter)
        .run(cases, |case| {
            writeln!(out, "{}", case.text)?;
            pb.set_message(case.name.clone());
            pb.inc(1);
            Ok(())
        })
        .await?;
    out.flush()?;

    pb.finish_with_message("Complete");
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    eprintln!(
        "Generated {} cases in {:.1}s: {} data, {} error, {} known divergence, {} empty",
        summary.total,
        summary.duration.as_secs_f64(),
        summary.success,
        summary.error,
        summary.divergent,
        summary.empty
    );
}
