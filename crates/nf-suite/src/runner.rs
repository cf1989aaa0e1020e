//! Sequential generation runner

use crate::error::{SuiteError, SuiteResult};
use crate::plan::PlannedCase;
use nf_core::{OracleRequest, CATALOG};
use nf_oracle::Oracle;
use nf_render::{CaseInput, CaseOutcome, Expectation, LuaEmitter};
use std::io::Write;
use std::time::{Duration, Instant};

/// One generated test function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCase {
    /// Test name without the `test_` prefix
    pub name: String,
    /// Lua source of the test function
    pub text: String,
    pub outcome: CaseOutcome,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases generated
    pub total: usize,

    /// Cases expecting data only
    pub success: usize,

    /// Cases expecting an error only
    pub error: usize,

    /// Cases expecting both, marked as known divergence
    pub divergent: usize,

    /// Cases where the oracle reported neither
    pub empty: usize,

    /// Wall time of the run
    pub duration: Duration,
}

impl RunSummary {
    fn record(&mut self, outcome: CaseOutcome) {
        self.total += 1;
        match outcome {
            CaseOutcome::Success => self.success += 1,
            CaseOutcome::Error => self.error += 1,
            CaseOutcome::Divergent => self.divergent += 1,
            CaseOutcome::Empty => self.empty += 1,
        }
    }
}

/// Drives planned cases through the oracle and the emitter
pub struct SuiteRunner<'a> {
    oracle: &'a dyn Oracle,
    emitter: &'a LuaEmitter,
}

impl<'a> SuiteRunner<'a> {
    /// Create a new runner
    pub fn new(oracle: &'a dyn Oracle, emitter: &'a LuaEmitter) -> Self {
        Self { oracle, emitter }
    }

    /// Build, execute and render a single case
    pub async fn run_case(&self, case: &PlannedCase) -> SuiteResult<RenderedCase> {
        let name = case.name();
        let request = OracleRequest::from_combination(&case.combination);

        let response =
            self.oracle
                .execute(&request)
                .await
                .map_err(|source| SuiteError::Oracle {
                    case: name.clone(),
                    source,
                })?;

        let expectation = Expectation::from_response(&response);
        let outcome = expectation.outcome();
        match outcome {
            CaseOutcome::Divergent => log::warn!(
                "{} reported both data and an error; marking {} as known divergence",
                self.oracle.engine_name(),
                name
            ),
            CaseOutcome::Empty => log::warn!(
                "{} reported neither data nor an error for {}",
                self.oracle.engine_name(),
                name
            ),
            _ => log::debug!("{}: {:?}", name, outcome),
        }

        let text = self.emitter.render_case(&CaseInput {
            name: &name,
            combination: &case.combination,
            schema: &request.schema,
            query: &request.query,
            expectation: &expectation,
        })?;

        Ok(RenderedCase {
            name,
            text,
            outcome,
        })
    }

    /// Run every case in plan order, one oracle call at a time
    pub async fn run(
        &self,
        plan: &[PlannedCase],
        mut on_case: impl FnMut(&RenderedCase) -> SuiteResult<()>,
    ) -> SuiteResult<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::default();
        let mut current = None;

        for case in plan {
            if current != Some((case.suite, case.kind.kind)) {
                current = Some((case.suite, case.kind.kind));
                log::info!("Generating {} for {}", case.suite, case.kind.kind);
            }

            let rendered = self.run_case(case).await?;
            summary.record(rendered.outcome);
            on_case(&rendered)?;
        }

        summary.duration = start.elapsed();
        Ok(summary)
    }
}

/// Write the header and every planned case to `out`
pub async fn generate<W: Write>(
    oracle: &dyn Oracle,
    emitter: &LuaEmitter,
    plan: &[PlannedCase],
    out: &mut W,
) -> SuiteResult<RunSummary> {
    writeln!(out, "{}", emitter.render_header(CATALOG)?)?;

    let runner = SuiteRunner::new(oracle, emitter);
    let summary = runner
        .run(plan, |case| {
            writeln!(out, "{}", case.text)?;
            Ok(())
        })
        .await?;

    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
