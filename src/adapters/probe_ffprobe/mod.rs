//! FFprobe adapter for reading clip durations

use std::path::Path;

use tracing::{debug, warn};

use crate::ports::{ToolInvocation, ToolOutcome, ToolPort};

/// Returned when the duration cannot be determined
pub const UNKNOWN_DURATION: f64 = 0.0;

/// Reads the container duration through ffprobe
pub struct FfprobeDurationProbe<'a, T: ToolPort + ?Sized> {
    tool: &'a T,
    ffprobe: String,
}

impl<'a, T: ToolPort + ?Sized> FfprobeDurationProbe<'a, T> {
    pub fn new(tool: &'a T, ffprobe: impl Into<String>) -> Self {
        Self {
            tool,
            ffprobe: ffprobe.into(),
        }
    }

    /// Build the ffprobe invocation for `input`
    pub fn invocation(&self, input: &Path) -> ToolInvocation {
        ToolInvocation::new(&self.ffprobe)
            .args(["-v", "error"])
            .args(["-show_entries", "format=duration"])
            .args(["-of", "default=noprint_wrappers=1:nokey=1"])
            .path_arg(input)
    }

    /// Duration of `input` in seconds, or [`UNKNOWN_DURATION`] on any failure
    pub fn duration(&self, input: &Path) -> f64 {
        match self.tool.run(&self.invocation(input)) {
            ToolOutcome::Success(output) => match parse_duration(&output.stdout) {
                Some(seconds) => {
                    debug!(input = %input.display(), seconds, "Probed duration");
                    seconds
                }
                None => {
                    warn!(
                        input = %input.display(),
                        output = output.stdout.trim(),
                        "Unparseable ffprobe duration"
                    );
                    UNKNOWN_DURATION
                }
            },
            ToolOutcome::Failure { code, diagnostics } => {
                warn!(
                    input = %input.display(),
                    ?code,
                    diagnostics = diagnostics.trim(),
                    "ffprobe failed"
                );
                UNKNOWN_DURATION
            }
        }
    }
}

/// Parse ffprobe's bare `format=duration` output
pub fn parse_duration(stdout: &str) -> Option<f64> {
    stdout
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ToolOutput;
    use std::cell::RefCell;

    struct CannedTool {
        outcome: ToolOutcome,
        seen: RefCell<Vec<ToolInvocation>>,
    }

    impl ToolPort for CannedTool {
        fn run(&self, invocation: &ToolInvocation) -> ToolOutcome {
            self.seen.borrow_mut().push(invocation.clone());
            self.outcome.clone()
        }
    }

    fn canned(outcome: ToolOutcome) -> CannedTool {
        CannedTool {
            outcome,
            seen: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("12.345000\n"), Some(12.345));
        assert_eq!(parse_duration("  3\r\n"), Some(3.0));
        assert_eq!(parse_duration("N/A\n"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("inf"), None);
        assert_eq!(parse_duration("NaN"), None);
    }

    #[test]
    fn test_probe_invocation_shape() {
        let tool = canned(ToolOutcome::Success(ToolOutput {
            stdout: "100.000000\n".to_string(),
            stderr: String::new(),
        }));
        let probe = FfprobeDurationProbe::new(&tool, "ffprobe");

        assert_eq!(probe.duration(Path::new("raw/cat.mov")), 100.0);

        let seen = tool.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].program, "ffprobe");
        assert_eq!(
            seen[0].args,
            vec![
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
                "raw/cat.mov",
            ]
        );
    }

    #[test]
    fn test_probe_failure_returns_sentinel() {
        let tool = canned(ToolOutcome::Failure {
            code: Some(1),
            diagnostics: "No such file".to_string(),
        });
        let probe = FfprobeDurationProbe::new(&tool, "ffprobe");
        assert_eq!(probe.duration(Path::new("missing.mov")), UNKNOWN_DURATION);
    }

    #[test]
    fn test_probe_garbage_returns_sentinel() {
        let tool = canned(ToolOutcome::Success(ToolOutput {
            stdout: "N/A".to_string(),
            stderr: String::new(),
        }));
        let probe = FfprobeDurationProbe::new(&tool, "ffprobe");
        assert_eq!(probe.duration(Path::new("odd.mov")), UNKNOWN_DURATION);
    }
}
