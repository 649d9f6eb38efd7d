// Clip interactor - Produces all derivatives for a single clip

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::adapters::probe_ffprobe::FfprobeDurationProbe;
use crate::adapters::toml_config::PrepConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::{ThumbnailPolicy, TrimEstimator};
use crate::engine::{self, ArtifactRun, ThumbnailExtractor, VideoEncoder};
use crate::output::Reporter;
use crate::ports::{ToolInvocation, ToolPort};
use crate::utils::path::resolve;
use crate::utils::Utils;

/// Runs probe, trim, both encodes and the thumbnail for one clip.
///
/// Every artifact is attempted regardless of how the previous ones went.
pub struct ClipInteractor<'a, T: ToolPort + ?Sized> {
    tool: &'a T,
    probe: FfprobeDurationProbe<'a, T>,
    trim: TrimEstimator,
    thumbnail_policy: ThumbnailPolicy,
    primary: VideoEncoder,
    secondary: VideoEncoder,
    extractor: ThumbnailExtractor,
    processed_dir: PathBuf,
    thumbnails_dir: PathBuf,
    size_budget: u64,
}

impl<'a, T: ToolPort + ?Sized> ClipInteractor<'a, T> {
    /// Create new clip interactor; directories are resolved against `root`
    pub fn new(tool: &'a T, config: &PrepConfig, root: &Path) -> Result<Self, DomainError> {
        Ok(Self {
            tool,
            probe: FfprobeDurationProbe::new(tool, &config.tools.ffprobe),
            trim: config.trim_estimator()?,
            thumbnail_policy: config.thumbnail_policy()?,
            primary: VideoEncoder::primary(config),
            secondary: VideoEncoder::secondary(config),
            extractor: ThumbnailExtractor::from_config(config),
            processed_dir: resolve(root, &config.paths.processed_dir),
            thumbnails_dir: resolve(root, &config.paths.thumbnails_dir),
            size_budget: config.encode.size_budget_bytes,
        })
    }

    /// Where `kind` is written for `clip`
    pub fn output_path(&self, clip: &SourceClip, kind: ArtifactKind) -> PathBuf {
        let dir = match kind {
            ArtifactKind::Thumbnail => &self.thumbnails_dir,
            _ => &self.processed_dir,
        };
        dir.join(kind.file_name(&clip.identifier))
    }

    /// Probe the duration and derive the trim window
    pub fn estimate_trim<W: Write>(&self, clip: &SourceClip, reporter: &mut Reporter<W>) -> TrimWindow {
        let duration = self.probe.duration(&clip.path);
        let window = self.trim.estimate(duration);

        if duration <= 0.0 {
            reporter.warning("Could not determine video duration, skipping auto-trim");
        } else {
            reporter.info(&format!("Video duration: {:.2}s", duration));
            reporter.info(&format!("Auto-trim: {}", window));
        }
        window
    }

    /// Process one clip end to end
    pub fn process<W: Write>(&self, clip: &SourceClip, reporter: &mut Reporter<W>) -> ProcessingResult {
        let _span = info_span!("clip", id = %clip.identifier).entered();
        reporter.header(&format!("Processing: {}", clip.identifier));

        let trim = self.estimate_trim(clip, reporter);

        let primary = self.encode(&self.primary, clip, &trim, reporter);
        let secondary = self.encode(&self.secondary, clip, &trim, reporter);

        let timestamp = self.thumbnail_policy.timestamp(&trim);
        let thumbnail = self.extract_thumbnail(clip, timestamp, reporter);

        let result = ProcessingResult::new(clip, primary, secondary, thumbnail);
        info!(
            mp4 = result.primary.success,
            webm = result.secondary.success,
            thumbnail = result.thumbnail.success,
            "Clip processed"
        );
        result
    }

    fn encode<W: Write>(
        &self,
        encoder: &VideoEncoder,
        clip: &SourceClip,
        trim: &TrimWindow,
        reporter: &mut Reporter<W>,
    ) -> ArtifactResult {
        let kind = encoder.kind();
        let output = self.output_path(clip, kind);
        reporter.info(&format!("Processing {}: {}", kind, kind.file_name(&clip.identifier)));

        let invocation = encoder.invocation(&clip.path, &output, trim);
        let run = engine::produce(self.tool, &invocation, &output);

        match &run {
            ArtifactRun::Created { size } if *size > self.size_budget => {
                reporter.warning(&format!(
                    "File size {} exceeds {} target",
                    Utils::format_megabytes(*size),
                    Utils::format_megabytes(self.size_budget)
                ));
            }
            ArtifactRun::Created { size } => {
                reporter.success(&format!("Created {}: {}", kind, Utils::format_megabytes(*size)));
            }
            failed => {
                report_failure(reporter, &format!("Failed to process {}", kind), &invocation, failed)
            }
        }

        run.into_result(&output)
    }

    fn extract_thumbnail<W: Write>(
        &self,
        clip: &SourceClip,
        timestamp: f64,
        reporter: &mut Reporter<W>,
    ) -> ArtifactResult {
        let kind = ArtifactKind::Thumbnail;
        let output = self.output_path(clip, kind);
        reporter.info(&format!("Generating thumbnail: {}", kind.file_name(&clip.identifier)));

        let invocation = self.extractor.invocation(&clip.path, &output, timestamp);
        let run = engine::produce(self.tool, &invocation, &output);

        match &run {
            ArtifactRun::Created { size } => {
                reporter.success(&format!("Created thumbnail: {}", Utils::format_kilobytes(*size)));
            }
            failed => report_failure(reporter, "Failed to generate thumbnail", &invocation, failed),
        }

        run.into_result(&output)
    }
}

fn report_failure<W: Write>(
    reporter: &mut Reporter<W>,
    what: &str,
    invocation: &ToolInvocation,
    run: &ArtifactRun,
) {
    match run {
        ArtifactRun::ToolFailed { code, diagnostics } => {
            let status = match code {
                Some(code) => format!("exit status {}", code),
                None => "could not be started".to_string(),
            };
            reporter.error(&format!("{}: {} {}", what, invocation.program, status));
            if !diagnostics.trim().is_empty() {
                reporter.error(&format!("FFmpeg stderr: {}", diagnostics.trim()));
            }
        }
        ArtifactRun::OutputMissing { reason } => {
            reporter.error(&format!("{}: output not readable ({})", what, reason));
        }
        ArtifactRun::Created { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::StyleTable;
    use crate::ports::{ToolOutcome, ToolOutput};
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// ffprobe answers with a fixed duration, ffmpeg writes `bytes` to the
    /// last argument unless the invocation mentions `fail_on`
    struct ScriptedTool {
        duration: Option<&'static str>,
        bytes: usize,
        fail_on: Option<&'static str>,
        calls: RefCell<Vec<ToolInvocation>>,
    }

    impl ScriptedTool {
        fn new(duration: Option<&'static str>, bytes: usize, fail_on: Option<&'static str>) -> Self {
            Self {
                duration,
                bytes,
                fail_on,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ToolPort for ScriptedTool {
        fn run(&self, invocation: &ToolInvocation) -> ToolOutcome {
            self.calls.borrow_mut().push(invocation.clone());
            if invocation.program == "ffprobe" {
                return match self.duration {
                    Some(stdout) => ToolOutcome::Success(ToolOutput {
                        stdout: stdout.to_string(),
                        stderr: String::new(),
                    }),
                    None => ToolOutcome::Failure {
                        code: Some(1),
                        diagnostics: "Invalid data found when processing input".to_string(),
                    },
                };
            }
            if let Some(needle) = self.fail_on {
                if invocation.has_arg(needle) {
                    return ToolOutcome::Failure {
                        code: Some(1),
                        diagnostics: format!("Unknown encoder '{}'", needle),
                    };
                }
            }
            let output = invocation.args.last().unwrap();
            std::fs::write(output, vec![7u8; self.bytes]).unwrap();
            ToolOutcome::Success(ToolOutput::default())
        }
    }

    fn setup() -> (TempDir, SourceClip) {
        let temp = TempDir::new().unwrap();
        let config = PrepConfig::default();
        std::fs::create_dir_all(temp.path().join(&config.paths.processed_dir)).unwrap();
        std::fs::create_dir_all(temp.path().join(&config.paths.thumbnails_dir)).unwrap();
        let clip = SourceClip::from_path(temp.path().join("Cat.MOV")).unwrap();
        (temp, clip)
    }

    fn output_text(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_known_duration_trims_and_seeks_thumbnail() {
        let (temp, clip) = setup();
        let tool = ScriptedTool::new(Some("100.0\n"), 2048, None);
        let interactor = ClipInteractor::new(&tool, &PrepConfig::default(), temp.path()).unwrap();
        let mut reporter = Reporter::new(Vec::new(), StyleTable::plain());

        let result = interactor.process(&clip, &mut reporter);

        assert!(result.primary.success && result.secondary.success && result.thumbnail.success);
        assert_eq!(result.primary.size, 2048);
        assert_eq!(result.identifier, "cat");

        let calls = tool.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[1].value_of("-ss"), Some("5.0"));
        assert_eq!(calls[1].value_of("-to"), Some("95.0"));
        assert_eq!(calls[2].value_of("-ss"), Some("5.0"));
        assert_eq!(calls[3].value_of("-ss"), Some("5.5"));

        let text = output_text(reporter);
        assert!(text.contains("[INFO] Video duration: 100.00s"));
        assert!(text.contains("[INFO] Auto-trim: 5.00s to 95.00s"));
        assert!(text.contains("[OK] Created MP4: 0.00MB"));
        assert!(text.contains("[OK] Created thumbnail: 2.00KB"));
    }

    #[test]
    fn test_unknown_duration_skips_trim() {
        let (temp, clip) = setup();
        let tool = ScriptedTool::new(None, 10, None);
        let interactor = ClipInteractor::new(&tool, &PrepConfig::default(), temp.path()).unwrap();
        let mut reporter = Reporter::new(Vec::new(), StyleTable::plain());

        let result = interactor.process(&clip, &mut reporter);
        assert!(result.primary.success);

        let calls = tool.calls.borrow();
        for encode in &calls[1..3] {
            assert!(!encode.has_arg("-ss"));
            assert!(!encode.has_arg("-to"));
        }
        assert_eq!(calls[3].value_of("-ss"), Some("1.0"));

        let text = output_text(reporter);
        assert_eq!(
            text.matches("Could not determine video duration, skipping auto-trim")
                .count(),
            1
        );
        assert!(text.contains("[WARN] Could not determine video duration, skipping auto-trim"));
    }

    #[test]
    fn test_failed_encode_does_not_stop_siblings() {
        let (temp, clip) = setup();
        let tool = ScriptedTool::new(Some("10.0"), 10, Some("libvpx-vp9"));
        let interactor = ClipInteractor::new(&tool, &PrepConfig::default(), temp.path()).unwrap();
        let mut reporter = Reporter::new(Vec::new(), StyleTable::plain());

        let result = interactor.process(&clip, &mut reporter);
        assert!(result.primary.success);
        assert!(!result.secondary.success);
        assert_eq!(result.secondary.size, 0);
        assert!(result.thumbnail.success);

        let text = output_text(reporter);
        assert!(text.contains("[ERROR] Failed to process WebM: ffmpeg exit status 1"));
        assert!(text.contains("[ERROR] FFmpeg stderr: Unknown encoder 'libvpx-vp9'"));
    }

    #[test]
    fn test_oversized_output_is_only_a_warning() {
        let (temp, clip) = setup();
        let tool = ScriptedTool::new(Some("10.0"), 1024 * 1024 + 1, None);
        let interactor = ClipInteractor::new(&tool, &PrepConfig::default(), temp.path()).unwrap();
        let mut reporter = Reporter::new(Vec::new(), StyleTable::plain());

        let result = interactor.process(&clip, &mut reporter);
        assert!(result.primary.success);
        assert!(result.secondary.success);

        let text = output_text(reporter);
        assert!(text.contains("[WARN] File size 1.00MB exceeds 1.00MB target"));
    }

    #[test]
    fn test_output_paths() {
        let (temp, clip) = setup();
        let tool = ScriptedTool::new(None, 0, None);
        let interactor = ClipInteractor::new(&tool, &PrepConfig::default(), temp.path()).unwrap();

        assert_eq!(
            interactor.output_path(&clip, ArtifactKind::SecondaryVideo),
            temp.path().join("public/signs/processed/cat.webm")
        );
        assert_eq!(
            interactor.output_path(&clip, ArtifactKind::Thumbnail),
            temp.path().join("public/signs/thumbnails/cat.png")
        );
    }
}
