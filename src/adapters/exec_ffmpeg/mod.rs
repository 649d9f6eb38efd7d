//! Subprocess execution adapter
//!
//! Runs ffmpeg/ffprobe as blocking child processes and captures their
//! output streams.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::ports::{ToolInvocation, ToolOutcome, ToolOutput, ToolPort};

/// Runs tools with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessToolAdapter;

impl ProcessToolAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ToolPort for ProcessToolAdapter {
    fn run(&self, invocation: &ToolInvocation) -> ToolOutcome {
        debug!(command = %invocation, "Running external tool");

        let result = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output();

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                debug!(program = %invocation.program, error = %e, "Failed to spawn tool");
                return ToolOutcome::Failure {
                    code: None,
                    diagnostics: format!("failed to start {}: {}", invocation.program, e),
                };
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        trace!(status = %output.status, stderr_len = stderr.len(), "Tool exited");

        if output.status.success() {
            ToolOutcome::Success(ToolOutput { stdout, stderr })
        } else {
            ToolOutcome::Failure {
                code: output.status.code(),
                diagnostics: stderr,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_tool_is_failure_without_code() {
        let outcome =
            ProcessToolAdapter::new().run(&ToolInvocation::new("nonexistent_tool_xyz_12345"));
        match outcome {
            ToolOutcome::Failure { code, diagnostics } => {
                assert_eq!(code, None);
                assert!(diagnostics.contains("nonexistent_tool_xyz_12345"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_on_success() {
        let outcome = ProcessToolAdapter::new().run(&ToolInvocation::new("echo").arg("hello"));
        match outcome {
            ToolOutcome::Success(output) => assert_eq!(output.stdout.trim(), "hello"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_reaches_the_process() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempfile::TempDir::new().unwrap();
        let clip = temp.path().join(OsStr::from_bytes(b"caf\xff.mov"));
        std::fs::write(&clip, b"x").unwrap();

        let outcome =
            ProcessToolAdapter::new().run(&ToolInvocation::new("test").arg("-f").path_arg(&clip));
        assert!(outcome.is_success(), "{:?}", outcome);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_reports_code() {
        let outcome = ProcessToolAdapter::new().run(&ToolInvocation::new("false"));
        assert_eq!(
            outcome,
            ToolOutcome::Failure {
                code: Some(1),
                diagnostics: String::new(),
            }
        );
    }
}
