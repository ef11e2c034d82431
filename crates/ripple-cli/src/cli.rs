//! Command-line interface definition for Ripple.
//!
//! - `ripple analyze` - compute a layer report from extractor output
//! - `ripple combine` - merge frontend and backend reports
//! - `ripple check` - re-run guardrails on a stored layer report

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use ripple_analysis::enforcement::reporters::available_formats;

/// Ripple - coupling metrics for module dependency graphs
#[derive(Parser, Debug)]
#[command(
    name = "ripple",
    version,
    about = "Coupling metrics and architecture guardrails for module dependency graphs",
    long_about = "Ripple turns a module dependency map into afferent/efferent coupling,\n\
                  instability and ripple-size metrics, grades each layer, and combines\n\
                  frontend and backend reports into one coupling index."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Format of the report printed to stdout
    #[arg(
        long,
        global = true,
        default_value = "console",
        value_parser = PossibleValuesParser::new(available_formats().iter().copied())
    )]
    pub format: String,

    /// Configuration file (default: ripple.toml in the project root, if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available Ripple subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute coupling metrics for one layer
    ///
    /// Reads the dependency map produced by the module-graph extractor,
    /// writes the layer report, and enforces guardrails.
    Analyze(AnalyzeArgs),

    /// Combine frontend and backend layer reports
    ///
    /// Produces node-weighted averages and the overall coupling index.
    Combine(CombineArgs),

    /// Evaluate guardrails against an existing layer report
    Check(CheckArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Dependency map JSON: `{module: [deps]}` or `{dependencies, cycles}`
    #[arg(long, value_name = "FILE")]
    pub deps: PathBuf,

    /// Cycle list JSON (`[[module, ...], ...]`); detected from the map when
    /// neither this nor the dependency document supplies one
    #[arg(long, value_name = "FILE")]
    pub cycles: Option<PathBuf>,

    /// Layer label recorded in the report and used in the default file name
    #[arg(long, default_value = "frontend")]
    pub layer: String,

    /// Regular expression identifying core/domain modules
    #[arg(long = "core-re", value_name = "REGEX")]
    pub core_re: Option<String>,

    /// Explicit report path (overrides --out-dir)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Report directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Project root passed to the extractor
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Source subdirectory under the root
    #[arg(long, value_name = "DIR")]
    pub src: Option<String>,

    /// tsconfig path relative to the root
    #[arg(long, value_name = "FILE")]
    pub tsconfig: Option<PathBuf>,

    /// Skip imports the extractor could not resolve
    #[arg(long)]
    pub skip_unresolved: bool,

    /// Write the report without enforcing guardrails
    #[arg(long)]
    pub no_guardrails: bool,
}

/// Arguments for the combine command
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Frontend layer report (default: <out-dir>/coupling.frontend.json)
    #[arg(long = "in-fe", value_name = "FILE")]
    pub in_fe: Option<PathBuf>,

    /// Backend layer report (default: <out-dir>/coupling.backend.json)
    #[arg(long = "in-be", value_name = "FILE")]
    pub in_be: Option<PathBuf>,

    /// Combined report path (default: <out-dir>/overall.coupling.json)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Report directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Layer report to check
    #[arg(long, value_name = "FILE")]
    pub report: PathBuf,

    /// Layer label used when the report carries none
    #[arg(long)]
    pub layer: Option<String>,
}
