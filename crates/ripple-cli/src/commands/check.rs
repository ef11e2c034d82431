//! Check command implementation.

use ripple_analysis::enforcement::guardrails::evaluate_guardrails;
use ripple_analysis::ingest::load_layer_report;
use ripple_core::config::CliOverrides;
use ripple_core::errors::PipelineError;

use super::Context;
use crate::cli::CheckArgs;

/// Execute the check command: load a stored layer report and evaluate the
/// configured guardrails without recomputing anything.
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<(), PipelineError> {
    let config = ctx.load_config(&CliOverrides::default())?;

    let layer = args.layer.as_deref().unwrap_or("layer");
    let report = load_layer_report(layer, &args.report)?;

    ctx.print_document((&report).into(), None)?;

    ctx.enforce(evaluate_guardrails(&report, &config.guardrails))
}
