//! Artifact production engine
//!
//! Builds tool invocations for each derivative and turns the tool's exit
//! status plus the file on disk into an artifact outcome.

use std::path::Path;

use tracing::{debug, error};

use crate::adapters::fs_local;
use crate::domain::model::ArtifactResult;
use crate::ports::{ToolInvocation, ToolOutcome, ToolPort};

pub mod reencode;
pub mod thumbnail;

pub use reencode::{CodecSettings, VideoEncoder};
pub use thumbnail::ThumbnailExtractor;

/// What happened when producing one artifact
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactRun {
    /// Tool succeeded and the output exists
    Created { size: u64 },
    /// Tool exited non-zero or could not be started
    ToolFailed {
        code: Option<i32>,
        diagnostics: String,
    },
    /// Tool reported success but the output cannot be read
    OutputMissing { reason: String },
}

impl ArtifactRun {
    /// Collapse into the per-artifact result record
    pub fn into_result(&self, output: &Path) -> ArtifactResult {
        match self {
            ArtifactRun::Created { size } => ArtifactResult::succeeded(output, *size),
            _ => ArtifactResult::failed(output),
        }
    }
}

/// Run `invocation` and verify that `output` was produced
pub fn produce<T: ToolPort + ?Sized>(
    tool: &T,
    invocation: &ToolInvocation,
    output: &Path,
) -> ArtifactRun {
    match tool.run(invocation) {
        ToolOutcome::Success(_) => match fs_local::file_size(output) {
            Ok(size) => {
                debug!(output = %output.display(), size, "Artifact created");
                ArtifactRun::Created { size }
            }
            Err(e) => {
                error!(output = %output.display(), error = %e, "Tool succeeded but output is unreadable");
                ArtifactRun::OutputMissing {
                    reason: e.to_string(),
                }
            }
        },
        ToolOutcome::Failure { code, diagnostics } => {
            error!(
                output = %output.display(),
                ?code,
                diagnostics = diagnostics.trim(),
                "Tool invocation failed"
            );
            ArtifactRun::ToolFailed { code, diagnostics }
        }
    }
}
