//! Console reporter: human-readable summary with color codes.

use ripple_core::errors::ReportError;
use ripple_core::types::{round3, HealthGrade};

use super::{ReportDocument, Reporter};
use crate::enforcement::guardrails::GuardrailOutcome;
use crate::structural::coupling::{CombinedReport, LayerReport};

/// Console reporter for terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn grade_color(&self, grade: HealthGrade) -> &'static str {
        if !self.use_color {
            return "";
        }
        match grade {
            HealthGrade::A | HealthGrade::B => "\x1b[32m", // green
            HealthGrade::C => "\x1b[33m",                  // yellow
            HealthGrade::D | HealthGrade::F => "\x1b[31m", // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn grade(&self, grade: HealthGrade) -> String {
        format!("{}{}{}", self.grade_color(grade), grade, self.color_end())
    }

    fn layer_section(&self, report: &LayerReport, output: &mut String) {
        let label = if report.layer.is_empty() {
            "layer"
        } else {
            report.layer.as_str()
        };
        output.push_str(&format!("[{label}]"));
        if let Some(root) = &report.root {
            output.push_str(&format!(" {root}"));
        }
        output.push('\n');
        output.push_str(&format!("  nodes:              {}\n", report.nodes));
        output.push_str(&format!("  edges:              {}\n", report.edges));
        output.push_str(&format!(
            "  cycles:             {} ({}%)\n",
            report.cycles_count,
            round3(report.cycles_pct)
        ));
        output.push_str(&format!("  avg Ce:             {}\n", round3(report.avg_ce)));
        output.push_str(&format!("  avg ripple:         {}\n", round3(report.avg_ripple)));
        output.push_str(&format!(
            "  global instability: {}\n",
            round3(report.global_instability)
        ));
        output.push_str(&format!(
            "  health grade:       {}\n",
            self.grade(report.health_grade)
        ));
        for violation in &report.core_violations {
            output.push_str(&format!(
                "  core violation:     {} (I={})\n",
                violation.module,
                round3(violation.instability)
            ));
        }
    }

    fn combined_section(&self, report: &CombinedReport, output: &mut String) {
        let s = &report.summary;
        output.push_str("[combined]\n");
        output.push_str(&format!("  nodes:              {}\n", s.nodes));
        output.push_str(&format!("  edges:              {}\n", s.edges));
        output.push_str(&format!(
            "  cycles:             {} ({}%)\n",
            s.cycles_count,
            round3(s.cycles_pct)
        ));
        output.push_str(&format!("  avg Ce:             {}\n", round3(s.avg_ce)));
        output.push_str(&format!("  avg ripple:         {}\n", round3(s.avg_ripple)));
        output.push_str(&format!(
            "  coupling index:     {}\n",
            round3(s.coupling_index)
        ));
        output.push_str(&format!("  health grade:       {}\n", self.grade(s.health_grade)));
    }

    /// Render a guardrail outcome, one line per breached guardrail.
    pub fn render_outcome(&self, outcome: &GuardrailOutcome) -> String {
        if outcome.passed {
            return format!("✓ {} guardrails passed\n", outcome.layer);
        }
        let (start, end) = if self.use_color {
            ("\x1b[31m", "\x1b[0m")
        } else {
            ("", "")
        };
        let mut output = format!("{start}✗ {} guardrails failed:{end}\n", outcome.layer);
        for violation in &outcome.violations {
            output.push_str(&format!("  - [{}] {}\n", violation.kind, violation.message));
        }
        output
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, document: ReportDocument<'_>) -> Result<String, ReportError> {
        let mut output = String::new();
        match document {
            ReportDocument::Layer(report) => self.layer_section(report, &mut output),
            ReportDocument::Combined(report) => {
                self.combined_section(report, &mut output);
                output.push('\n');
                self.layer_section(&report.frontend, &mut output);
                output.push('\n');
                self.layer_section(&report.backend, &mut output);
            }
        }
        Ok(output)
    }
}
