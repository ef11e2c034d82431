//! Analyze command implementation.

use ripple_analysis::enforcement::guardrails::evaluate_guardrails;
use ripple_analysis::enforcement::reporters::write_report;
use ripple_analysis::ingest::{load_cycles, load_dependency_input, DependencyInput};
use ripple_analysis::structural::coupling::{analyze_layer, detect_cycles, CoreModuleRule};
use ripple_core::config::CliOverrides;
use ripple_core::errors::PipelineError;

use super::Context;
use crate::cli::AnalyzeArgs;

/// Execute the analyze command.
///
/// 1. Resolve configuration (flags > env > ripple.toml > defaults)
/// 2. Read the dependency map; missing input aborts before any computation
/// 3. Take cycles from `--cycles`, else the input document, else detect them
/// 4. Compute and write the layer report
/// 5. Enforce guardrails unless `--no-guardrails`
pub fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        root: args.root.clone(),
        src: args.src.clone(),
        tsconfig: args.tsconfig.clone(),
        skip_unresolved: args.skip_unresolved.then_some(true),
        core_pattern: args.core_re.clone(),
        out_dir: args.out_dir.clone(),
        out: args.out.clone(),
        combined_out: None,
    };
    let config = ctx.load_config(&overrides)?;
    let rule = CoreModuleRule::from_config(&config.analysis)?;

    let DependencyInput {
        dependencies,
        cycles: supplied_cycles,
    } = load_dependency_input(&args.deps)?;

    let cycles = match (&args.cycles, supplied_cycles) {
        (Some(path), _) => load_cycles(path)?,
        (None, Some(cycles)) => cycles,
        (None, None) => {
            tracing::info!("no cycle list supplied; detecting cycles from the dependency map");
            detect_cycles(&dependencies)
        }
    };

    let report = analyze_layer(&dependencies, &rule, &cycles)
        .with_layer(args.layer.as_str())
        .with_root(config.project.effective_src());

    let out_path = config.output.layer_report_path(&args.layer);
    write_report(&out_path, &report)?;

    ctx.print_document((&report).into(), Some(&out_path))?;

    if args.no_guardrails {
        tracing::debug!("guardrails skipped");
        return Ok(());
    }

    ctx.enforce(evaluate_guardrails(&report, &config.guardrails))
}
