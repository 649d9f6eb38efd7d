//! Command implementation

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use crate::adapters::exec_ffmpeg::ProcessToolAdapter;
use crate::app::{BatchInteractor, BatchOutcome};
use crate::cli::Cli;
use crate::config_initialization::initialize_configuration;
use crate::error::PrepError;
use crate::output::{Reporter, StyleTable};

/// Exit status when the encoder cannot be run
pub const EXIT_TOOL_UNAVAILABLE: u8 = 1;

/// Pick the console style table from flags, `NO_COLOR` and whether stdout
/// is a terminal
pub fn select_styles(cli: &Cli) -> StyleTable {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if cli.output.no_color || no_color_env || !std::io::stdout().is_terminal() {
        StyleTable::plain()
    } else {
        StyleTable::colored()
    }
}

/// Execute a processing run
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = initialize_configuration(&cli)?;
    let mut reporter = Reporter::stdout(select_styles(&cli));
    let tool = ProcessToolAdapter::new();

    info!(root = %cli.root.display(), "Starting processing run");
    let interactor = BatchInteractor::new(&tool, &config, cli.root.clone());

    match interactor.run(&mut reporter) {
        Ok(BatchOutcome::NothingToDo) => {
            info!("No clips found");
            Ok(ExitCode::SUCCESS)
        }
        Ok(BatchOutcome::Completed { results, .. }) => {
            info!(clips = results.len(), "Processing run completed");
            Ok(ExitCode::SUCCESS)
        }
        Err(PrepError::ToolUnavailable { tool }) => {
            error!(%tool, "Aborting: encoder unavailable");
            Ok(ExitCode::from(EXIT_TOOL_UNAVAILABLE))
        }
        Err(e) => Err(anyhow::Error::new(e).context("Processing run failed")),
    }
}
