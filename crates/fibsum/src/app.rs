//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use fibsum_cli::output::write_to_file;
use fibsum_cli::presenter::{CLIResultPresenter, ResultPresenter};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibsum_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let summer = config.summer()?;
    info!(%summer, mode = ?config.mode, "computing");

    let start = Instant::now();
    let report = summer.report();
    let elapsed = start.elapsed();

    let rendered = if config.json {
        report.to_json().context("failed to serialize report")?
    } else {
        CLIResultPresenter::new(config.verbose, config.quiet).render(&report, config.mode, elapsed)
    };

    match &config.output {
        Some(path) => write_to_file(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
