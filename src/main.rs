//! ClipPrep
//!
//! Batch-converts raw phone clips into web-optimized derivatives and records
//! them in a JSON manifest.
//!
//! # Features
//!
//! - H.264/MP4 and VP9/WebM encodes scaled to 720p at 24 fps, audio removed
//! - PNG thumbnail per clip
//! - Fixed 5% head/tail trim derived from the probed duration
//! - Manifest of public asset URLs for the web front end
//!
//! # Usage
//!
//! ```bash
//! clipprep --root ./my-app
//! clipprep --root ./my-app --config clipprep.toml --no-color
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use clipprep::adapters::init_logging;
use clipprep::cli::{commands, Cli};

/// Main entry point for the ClipPrep CLI application
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.log_level, cli.log_json);
    info!("Starting ClipPrep");

    commands::run(cli)
}
