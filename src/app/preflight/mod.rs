// Preflight - Verifies the encoder is reachable before any work starts

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, error};

use crate::error::{PrepError, PrepResult};
use crate::output::Reporter;
use crate::ports::{ToolInvocation, ToolOutcome, ToolPort};

/// A reachable encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// First line of `-version` output
    pub version: String,
    /// Resolved executable, when it can be found on `PATH`
    pub location: Option<PathBuf>,
}

/// Run `<ffmpeg> -version`. Any non-zero exit or spawn failure means the
/// tool is unavailable.
pub fn check_encoder<T: ToolPort + ?Sized>(tool: &T, ffmpeg: &str) -> Option<ToolStatus> {
    match tool.run(&ToolInvocation::new(ffmpeg).arg("-version")) {
        ToolOutcome::Success(output) => {
            let version = output
                .stdout
                .lines()
                .next()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .unwrap_or("unknown version")
                .to_string();
            let location = which::which(ffmpeg).ok();
            debug!(%version, ?location, "Encoder available");
            Some(ToolStatus { version, location })
        }
        ToolOutcome::Failure { code, diagnostics } => {
            error!(tool = ffmpeg, ?code, diagnostics = diagnostics.trim(), "Encoder unavailable");
            None
        }
    }
}

const WINDOWS_INSTALL: &[&str] = &[
    "To install FFmpeg on Windows:",
    "1. Using Chocolatey (recommended):",
    "   choco install ffmpeg",
    "2. Using Scoop:",
    "   scoop install ffmpeg",
    "3. Using winget:",
    "   winget install Gyan.FFmpeg",
    "4. Manual installation:",
    "   a. Download a build from https://www.gyan.dev/ffmpeg/builds/",
    "   b. Extract the archive",
    "   c. Add the 'bin' folder to your PATH",
];

const MACOS_INSTALL: &[&str] = &[
    "To install FFmpeg on macOS:",
    "1. Using Homebrew (recommended):",
    "   brew install ffmpeg",
    "2. Using MacPorts:",
    "   sudo port install ffmpeg",
];

const LINUX_INSTALL: &[&str] = &[
    "To install FFmpeg on Linux, use your distribution's package manager:",
    "   Debian/Ubuntu:  sudo apt install ffmpeg",
    "   Fedora:         sudo dnf install ffmpeg",
    "   Arch:           sudo pacman -S ffmpeg",
];

/// Installation guidance for the current platform
pub fn install_instructions() -> &'static [&'static str] {
    if cfg!(windows) {
        WINDOWS_INSTALL
    } else if cfg!(target_os = "macos") {
        MACOS_INSTALL
    } else {
        LINUX_INSTALL
    }
}

/// Check the encoder and report the result. On failure the guidance is
/// printed and [`PrepError::ToolUnavailable`] is returned.
pub fn run<T: ToolPort + ?Sized, W: Write>(
    tool: &T,
    ffmpeg: &str,
    reporter: &mut Reporter<W>,
) -> PrepResult<ToolStatus> {
    reporter.info("Checking for FFmpeg...");

    match check_encoder(tool, ffmpeg) {
        Some(status) => {
            reporter.success(&format!("FFmpeg found: {}", status.version));
            if let Some(location) = &status.location {
                reporter.info(&format!("Using {}", location.display()));
            }
            Ok(status)
        }
        None => {
            reporter.error("FFmpeg is not installed or not in PATH!");
            reporter.blank();
            for line in install_instructions() {
                reporter.line(line);
            }
            reporter.blank();
            reporter.line("After installation, restart your terminal and run this tool again.");
            Err(PrepError::ToolUnavailable {
                tool: ffmpeg.to_string(),
            })
        }
    }
}
