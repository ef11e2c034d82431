//! Command implementations for the Ripple CLI.
//!
//! - [`analyze`] - layer report from a dependency map
//! - [`combine`] - combined cross-layer report
//! - [`check`] - guardrails on a stored layer report
//!
//! Each command provides an `execute` function taking its parsed arguments
//! and the global [`Context`].

pub mod analyze;
pub mod check;
pub mod combine;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ripple_analysis::enforcement::guardrails::GuardrailOutcome;
use ripple_analysis::enforcement::reporters::console::ConsoleReporter;
use ripple_analysis::enforcement::reporters::{create_reporter, ReportDocument, Reporter};
use ripple_core::config::{CliOverrides, RippleConfig};
use ripple_core::errors::{ConfigError, PipelineError, ReportError};

use crate::cli::Cli;

pub use analyze::execute as analyze_execute;
pub use check::execute as check_execute;
pub use combine::execute as combine_execute;

/// Process exit status: success.
pub const EXIT_OK: u8 = 0;
/// Process exit status: a guardrail was breached.
pub const EXIT_GUARDRAIL: u8 = 1;
/// Process exit status: fatal precondition, configuration, or I/O failure.
pub const EXIT_FATAL: u8 = 2;

/// Global flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: Option<PathBuf>,
    pub format: String,
    pub quiet: bool,
    pub use_color: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            format: cli.format.clone(),
            quiet: cli.quiet,
            use_color: crate::logger::use_color(cli.no_color),
        }
    }

    pub fn console(&self) -> ConsoleReporter {
        ConsoleReporter::new(self.use_color)
    }

    /// Reporter for stdout, selected by `--format`. Unknown names fall back
    /// to the console reporter.
    pub fn reporter(&self) -> Box<dyn Reporter> {
        match create_reporter(&self.format, self.use_color) {
            Some(reporter) => reporter,
            None => Box::new(self.console()),
        }
    }

    fn is_console(&self) -> bool {
        self.reporter().name() == "console"
    }

    /// Print `document` in the selected format, followed by the path it was
    /// written to when printing for a terminal.
    pub fn print_document(
        &self,
        document: ReportDocument<'_>,
        written_to: Option<&Path>,
    ) -> Result<(), ReportError> {
        if self.quiet {
            return Ok(());
        }
        let reporter = self.reporter();
        let rendered = reporter.generate(document)?;
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }
        if let (Some(path), "console") = (written_to, reporter.name()) {
            println!("report: {}", path.display());
        }
        Ok(())
    }

    /// Resolve configuration: an explicit `--config` file, else
    /// `ripple.toml` in the project root (`--root`, then `RIPPLE_ROOT`) when
    /// present.
    pub fn load_config(&self, overrides: &CliOverrides) -> Result<RippleConfig, ConfigError> {
        match &self.config {
            Some(path) => RippleConfig::load_file(path, Some(overrides)),
            None => {
                let root = RippleConfig::discover_root(Some(overrides));
                RippleConfig::load(&root, Some(overrides))
            }
        }
    }

    /// Print a guardrail outcome and convert a breach into an error.
    pub fn enforce(&self, outcome: GuardrailOutcome) -> Result<(), PipelineError> {
        if !outcome.passed {
            eprint!("{}", self.console().render_outcome(&outcome));
        } else if !self.quiet && self.is_console() {
            print!("{}", self.console().render_outcome(&outcome));
        }
        outcome.into_result()?;
        Ok(())
    }
}

/// Map a command result to the process exit status.
pub fn exit_code(result: &Result<(), PipelineError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) if e.is_guardrail_failure() => ExitCode::from(EXIT_GUARDRAIL),
        Err(_) => ExitCode::from(EXIT_FATAL),
    }
}
