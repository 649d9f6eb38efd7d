// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod fs_local;
pub mod probe_ffprobe;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_ffmpeg::ProcessToolAdapter;
pub use probe_ffprobe::FfprobeDurationProbe;
pub use toml_config::PrepConfig;
pub use tracing_log::{init_logging, LogLevel};
