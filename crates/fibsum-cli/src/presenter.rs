//! CLI result presenter.

use std::time::Duration;

use clap::ValueEnum;
use fibsum_core::SumReport;
use tracing::debug;

use crate::output::{format_duration, format_number, format_sequence};
use crate::ui::{field, header};

/// Which query results to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// The sum of qualifying terms.
    #[default]
    Sum,
    /// The qualifying terms themselves.
    Sequence,
    /// The human-readable description only.
    Describe,
    /// Description, sum and sequence.
    All,
}

/// Trait for rendering results for the user.
pub trait ResultPresenter {
    /// Render a report for the given mode.
    fn render(&self, report: &SumReport, mode: OutputMode, elapsed: Duration) -> String;

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn render_quiet(report: &SumReport, mode: OutputMode) -> String {
        let sequence = format_sequence(&report.sequence, true);
        match mode {
            OutputMode::Sum => report.sum.to_string(),
            OutputMode::Sequence => sequence,
            OutputMode::Describe => report.description.clone(),
            OutputMode::All => format!("{}\n{}\n{sequence}", report.description, report.sum),
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn render(&self, report: &SumReport, mode: OutputMode, elapsed: Duration) -> String {
        debug!(?mode, quiet = self.quiet, verbose = self.verbose, "rendering report");
        if self.quiet {
            return Self::render_quiet(report, mode);
        }

        let mut lines = Vec::new();
        if mode == OutputMode::All {
            lines.push(header("FibSum"));
        }
        lines.push(report.description.clone());
        if matches!(mode, OutputMode::Sum | OutputMode::All) {
            lines.push(field("Sum", &format_number(&report.sum)));
        }
        if matches!(mode, OutputMode::Sequence | OutputMode::All) {
            lines.push(field(
                "Sequence",
                &format_sequence(&report.sequence, self.verbose),
            ));
        }
        if self.verbose && mode != OutputMode::Describe {
            lines.push(field("Terms", &report.terms.to_string()));
            lines.push(field("Elapsed", &format_duration(elapsed)));
        }
        lines.join("\n")
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}
