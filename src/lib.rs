//! ClipPrep Library
//!
//! Converts raw clips into web-ready MP4/WebM encodes and PNG thumbnails by
//! driving ffmpeg, then records the produced assets in a JSON manifest.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use adapters::toml_config::PrepConfig;
pub use app::{BatchInteractor, BatchOutcome, ClipInteractor};
pub use domain::errors::DomainError;
pub use domain::model::{ArtifactKind, ArtifactResult, ProcessingResult, SourceClip, TrimWindow};
pub use error::{PrepError, PrepResult};
pub use output::{Manifest, ManifestEntry, Reporter, StyleTable};
pub use ports::{ToolInvocation, ToolOutcome, ToolOutput, ToolPort};
