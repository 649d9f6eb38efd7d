// Ports - Interface definitions (contracts)

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

/// A single external tool invocation.
///
/// Arguments are kept as `OsString` so file names reach the tool byte for
/// byte, including names that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument unchanged
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    /// Append multiple arguments
    pub fn args(mut self, iter: impl IntoIterator<Item = impl Into<OsString>>) -> Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// True if `flag` appears as an argument
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|arg| arg == flag)
    }

    /// Value following `flag`, if present and valid UTF-8
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|arg| arg == flag)
            .and_then(|idx| self.args.get(idx + 1))
            .and_then(|arg| arg.to_str())
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Output captured from a successful tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Result of running an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Exit status zero
    Success(ToolOutput),
    /// Non-zero exit, or the process could not be started (`code` is `None`)
    Failure {
        code: Option<i32>,
        diagnostics: String,
    },
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success(_))
    }
}

/// Port for running external media tools.
///
/// Calls block until the subprocess exits. There is no timeout.
pub trait ToolPort {
    fn run(&self, invocation: &ToolInvocation) -> ToolOutcome;
}

impl<T: ToolPort + ?Sized> ToolPort for &T {
    fn run(&self, invocation: &ToolInvocation) -> ToolOutcome {
        (**self).run(invocation)
    }
}

impl<T: ToolPort + ?Sized> ToolPort for Box<T> {
    fn run(&self, invocation: &ToolInvocation) -> ToolOutcome {
        (**self).run(invocation)
    }
}
