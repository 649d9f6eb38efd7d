//! CLI module for ClipPrep
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

use crate::adapters::tracing_log::LogLevel;

/// ClipPrep
///
/// Converts raw clips into web-ready MP4 and WebM encodes plus PNG
/// thumbnails, and writes a JSON manifest of the produced assets.
#[derive(Parser, Debug)]
#[command(name = "clipprep")]
#[command(about = "ClipPrep - Batch-convert raw clips into web-ready video assets")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Project root the configured relative paths resolve against
    #[arg(long, env = "CLIPPREP_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Optional TOML configuration file
    #[arg(long, env = "CLIPPREP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub tools: args::ToolArgs,

    #[command(flatten)]
    pub output: args::OutputArgs,

    /// Diagnostic logging level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Emit diagnostic logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
