// Tracing log adapter - Diagnostic logging using the tracing crate

use tracing_subscriber::EnvFilter;

/// Log level accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr, apart from
/// the console report on stdout. A second call leaves the first
/// subscriber in place.
pub fn init_logging(level: LogLevel, json: bool) {
    let filter = level_filter(level, std::env::var(EnvFilter::DEFAULT_ENV).ok());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Filter from `env_directives` when they are present and parse,
/// otherwise from `level`
pub fn level_filter(level: LogLevel, env_directives: Option<String>) -> EnvFilter {
    env_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_directive()))
}
