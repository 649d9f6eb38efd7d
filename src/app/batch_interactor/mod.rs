// Batch interactor - Orchestrates a whole processing run

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::fs_local;
use crate::adapters::toml_config::PrepConfig;
use crate::app::clip_interactor::ClipInteractor;
use crate::app::preflight;
use crate::domain::model::{ArtifactKind, ProcessingResult};
use crate::error::PrepResult;
use crate::output::{Manifest, Reporter, UrlLayout};
use crate::ports::ToolPort;
use crate::utils::path::resolve;
use crate::utils::Utils;

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// No input clips; the manifest was left untouched
    NothingToDo,
    /// Every discovered clip was attempted and the manifest rewritten
    Completed {
        results: Vec<ProcessingResult>,
        manifest: Manifest,
        manifest_path: PathBuf,
    },
}

/// Drives preflight, discovery, per-clip processing, summary and manifest
pub struct BatchInteractor<'a, T: ToolPort + ?Sized> {
    tool: &'a T,
    config: &'a PrepConfig,
    root: PathBuf,
}

impl<'a, T: ToolPort + ?Sized> BatchInteractor<'a, T> {
    pub fn new(tool: &'a T, config: &'a PrepConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            config,
            root: root.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        resolve(&self.root, path)
    }

    /// Execute the run.
    ///
    /// Errors only for an unavailable encoder or a failure outside any
    /// single artifact (creating output directories, writing the manifest).
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> PrepResult<BatchOutcome> {
        let paths = &self.config.paths;
        reporter.header("Clip Processing");

        preflight::run(self.tool, &self.config.tools.ffmpeg, reporter)?;

        reporter.info("Creating output directories...");
        fs_local::ensure_dir(&self.resolve(&paths.processed_dir))?;
        fs_local::ensure_dir(&self.resolve(&paths.thumbnails_dir))?;
        reporter.success("Output directories ready");

        reporter.info("Scanning for raw video files...");
        let raw_dir = self.resolve(&paths.raw_dir);
        let clips = fs_local::discover_clips(&raw_dir, &paths.extensions);

        if clips.is_empty() {
            reporter.warning(&format!(
                "No {} files found in {}",
                extension_list(&paths.extensions),
                paths.raw_dir.display()
            ));
            info!(raw_dir = %raw_dir.display(), "Nothing to process");
            return Ok(BatchOutcome::NothingToDo);
        }

        reporter.success(&format!("Found {} video file(s):", clips.len()));
        for clip in &clips {
            reporter.line(&format!("  - {}", clip.file_name()));
        }

        let interactor = ClipInteractor::new(self.tool, self.config, &self.root)?;
        let results: Vec<ProcessingResult> = clips
            .iter()
            .map(|clip| interactor.process(clip, reporter))
            .collect();

        print_summary(reporter, &results);

        let manifest = Manifest::build(&results, &UrlLayout::from_paths(paths));
        let manifest_path = self.resolve(&paths.manifest);
        manifest.write(&manifest_path)?;
        reporter.blank();
        reporter.success(&format!("Manifest created: {}", manifest_path.display()));

        print_next_steps(reporter, self.config);

        Ok(BatchOutcome::Completed {
            results,
            manifest,
            manifest_path,
        })
    }
}

fn extension_list(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.').to_uppercase()))
        .collect::<Vec<_>>()
        .join("/")
}

/// Per-clip, per-artifact summary
pub fn print_summary<W: Write>(reporter: &mut Reporter<W>, results: &[ProcessingResult]) {
    reporter.header("Processing Complete - Summary");

    for result in results {
        reporter.blank();
        reporter.emphasis(&format!("Clip: {}", result.identifier));

        for kind in ArtifactKind::ALL {
            let artifact = result.artifact(kind);
            if artifact.success {
                let size = match kind {
                    ArtifactKind::Thumbnail => Utils::format_kilobytes(artifact.size),
                    _ => Utils::format_megabytes(artifact.size),
                };
                reporter.success(&format!("{}: {}", kind, size));
            } else {
                reporter.error(&format!("{}: Failed", kind));
            }
        }
    }
}

fn print_next_steps<W: Write>(reporter: &mut Reporter<W>, config: &PrepConfig) {
    reporter.header("Next Steps");
    reporter.line("To add more videos in the future:");
    reporter.line(&format!(
        "1. Place new {} files in {}",
        extension_list(&config.paths.extensions),
        config.paths.raw_dir.display()
    ));
    reporter.line("2. Run this tool again");
    reporter.line(&format!(
        "3. Reference the new entries from {}",
        config.paths.manifest.display()
    ));
}
