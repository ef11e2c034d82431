//! Combine command implementation.

use ripple_analysis::enforcement::reporters::write_report;
use ripple_analysis::ingest::load_layer_report;
use ripple_analysis::structural::coupling::combine;
use ripple_core::config::CliOverrides;
use ripple_core::errors::PipelineError;

use super::Context;
use crate::cli::CombineArgs;

/// Execute the combine command. Both layer reports must exist; a missing
/// one is fatal.
pub fn execute(args: CombineArgs, ctx: &Context) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        out_dir: args.out_dir.clone(),
        combined_out: args.out.clone(),
        ..Default::default()
    };
    let config = ctx.load_config(&overrides)?;

    let fe_path = args
        .in_fe
        .unwrap_or_else(|| config.output.default_layer_report_path("frontend"));
    let be_path = args
        .in_be
        .unwrap_or_else(|| config.output.default_layer_report_path("backend"));

    let frontend = load_layer_report("frontend", &fe_path)?;
    let backend = load_layer_report("backend", &be_path)?;

    let combined = combine(frontend, backend);

    let out_path = config.output.combined_report_path();
    write_report(&out_path, &combined)?;

    ctx.print_document((&combined).into(), Some(&out_path))?;
    Ok(())
}
