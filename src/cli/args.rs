//! Command-line argument groups

use clap::Args;

/// External tool overrides
#[derive(Args, Debug, Default, Clone)]
pub struct ToolArgs {
    /// ffmpeg executable
    #[arg(long, env = "CLIPPREP_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// ffprobe executable
    #[arg(long, env = "CLIPPREP_FFPROBE")]
    pub ffprobe: Option<String>,
}

/// Console output options
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}
