//! Web encode argument construction for the two video derivatives

use std::path::Path;

use crate::adapters::toml_config::PrepConfig;
use crate::domain::model::{ArtifactKind, TrimWindow};
use crate::ports::ToolInvocation;
use crate::utils::Utils;

/// Codec-specific part of an encode
#[derive(Debug, Clone, PartialEq)]
pub enum CodecSettings {
    /// H.264 with a speed preset, CRF and web fast-start
    H264 { codec: String, preset: String, crf: u8 },
    /// VP9 in constant-quality mode (`-b:v 0`)
    Vp9 { codec: String, crf: u8 },
}

/// Builds ffmpeg invocations for one video derivative
#[derive(Debug, Clone, PartialEq)]
pub struct VideoEncoder {
    ffmpeg: String,
    height: u32,
    fps: u32,
    codec: CodecSettings,
}

impl VideoEncoder {
    pub fn new(ffmpeg: impl Into<String>, height: u32, fps: u32, codec: CodecSettings) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            height,
            fps,
            codec,
        }
    }

    /// MP4/H.264 encoder
    pub fn primary(config: &PrepConfig) -> Self {
        let mp4 = &config.encode.mp4;
        Self::new(
            &config.tools.ffmpeg,
            config.encode.height,
            config.encode.fps,
            CodecSettings::H264 {
                codec: mp4.codec.clone(),
                preset: mp4.preset.clone(),
                crf: mp4.crf,
            },
        )
    }

    /// WebM/VP9 encoder
    pub fn secondary(config: &PrepConfig) -> Self {
        let webm = &config.encode.webm;
        Self::new(
            &config.tools.ffmpeg,
            config.encode.height,
            config.encode.fps,
            CodecSettings::Vp9 {
                codec: webm.codec.clone(),
                crf: webm.crf,
            },
        )
    }

    pub fn kind(&self) -> ArtifactKind {
        match self.codec {
            CodecSettings::H264 { .. } => ArtifactKind::PrimaryVideo,
            CodecSettings::Vp9 { .. } => ArtifactKind::SecondaryVideo,
        }
    }

    /// Full argument list: overwrite, input, optional trim bounds, scale to
    /// the fixed height with an even width, resample, codec settings, no
    /// audio, output.
    pub fn invocation(&self, input: &Path, output: &Path, trim: &TrimWindow) -> ToolInvocation {
        let mut invocation = ToolInvocation::new(&self.ffmpeg)
            .arg("-y")
            .arg("-i")
            .path_arg(input);

        if let Some(start) = trim.start_bound() {
            invocation = invocation.arg("-ss").arg(Utils::format_seconds(start));
        }
        if let Some(end) = trim.end_bound() {
            invocation = invocation.arg("-to").arg(Utils::format_seconds(end));
        }

        invocation = invocation
            .arg("-vf")
            .arg(format!("scale=-2:{}", self.height))
            .arg("-r")
            .arg(self.fps.to_string());

        invocation = match &self.codec {
            CodecSettings::H264 { codec, preset, crf } => invocation
                .args(["-c:v", codec.as_str()])
                .args(["-preset", preset.as_str()])
                .arg("-crf")
                .arg(crf.to_string())
                .arg("-an")
                .args(["-movflags", "+faststart"]),
            CodecSettings::Vp9 { codec, crf } => invocation
                .args(["-c:v", codec.as_str()])
                .arg("-crf")
                .arg(crf.to_string())
                .args(["-b:v", "0"])
                .arg("-an"),
        };

        invocation.path_arg(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(invocation: &ToolInvocation) -> Vec<&str> {
        invocation.args.iter().map(|arg| arg.to_str().unwrap()).collect()
    }

    #[test]
    fn test_primary_untrimmed() {
        let encoder = VideoEncoder::primary(&PrepConfig::default());
        let invocation = encoder.invocation(
            Path::new("raw/cat.mov"),
            Path::new("out/cat.mp4"),
            &TrimWindow::none(),
        );

        assert_eq!(invocation.program, "ffmpeg");
        assert_eq!(
            args(&invocation),
            vec![
                "-y", "-i", "raw/cat.mov", "-vf", "scale=-2:720", "-r", "24", "-c:v", "libx264",
                "-preset", "veryfast", "-crf", "23", "-an", "-movflags", "+faststart",
                "out/cat.mp4",
            ]
        );
        assert_eq!(encoder.kind(), ArtifactKind::PrimaryVideo);
    }

    #[test]
    fn test_secondary_trimmed() {
        let encoder = VideoEncoder::secondary(&PrepConfig::default());
        let invocation = encoder.invocation(
            Path::new("raw/cat.mov"),
            Path::new("out/cat.webm"),
            &TrimWindow::new(5.0, 95.0),
        );

        assert_eq!(
            args(&invocation),
            vec![
                "-y", "-i", "raw/cat.mov", "-ss", "5.0", "-to", "95.0", "-vf", "scale=-2:720",
                "-r", "24", "-c:v", "libvpx-vp9", "-crf", "33", "-b:v", "0", "-an",
                "out/cat.webm",
            ]
        );
        assert_eq!(encoder.kind(), ArtifactKind::SecondaryVideo);
    }

    #[test]
    fn test_trim_bounds_applied_independently() {
        let encoder = VideoEncoder::primary(&PrepConfig::default());
        let input = Path::new("in.mov");
        let output = Path::new("out.mp4");

        let end_only = encoder.invocation(input, output, &TrimWindow::new(0.0, 8.0));
        assert!(!end_only.has_arg("-ss"));
        assert_eq!(end_only.value_of("-to"), Some("8.0"));

        let start_only = encoder.invocation(input, output, &TrimWindow::new(1.25, 0.0));
        assert_eq!(start_only.value_of("-ss"), Some("1.25"));
        assert!(!start_only.has_arg("-to"));
    }

    #[test]
    fn test_overwrite_and_no_audio_always_present() {
        let config = PrepConfig::default();
        for encoder in [VideoEncoder::primary(&config), VideoEncoder::secondary(&config)] {
            for trim in [TrimWindow::none(), TrimWindow::new(2.0, 30.0)] {
                let invocation =
                    encoder.invocation(Path::new("a.mov"), Path::new("b.out"), &trim);
                assert_eq!(invocation.args.first().and_then(|arg| arg.to_str()), Some("-y"));
                assert!(invocation.has_arg("-an"));
                assert_eq!(invocation.args.last().and_then(|arg| arg.to_str()), Some("b.out"));
            }
        }
    }

    #[test]
    fn test_configured_settings_flow_through() {
        let mut config = PrepConfig::default();
        config.tools.ffmpeg = "/usr/local/bin/ffmpeg".to_string();
        config.encode.height = 480;
        config.encode.fps = 30;
        config.encode.mp4.crf = 28;

        let invocation = VideoEncoder::primary(&config).invocation(
            Path::new("a.mov"),
            Path::new("a.mp4"),
            &TrimWindow::none(),
        );
        assert_eq!(invocation.program, "/usr/local/bin/ffmpeg");
        assert_eq!(invocation.value_of("-vf"), Some("scale=-2:480"));
        assert_eq!(invocation.value_of("-r"), Some("30"));
        assert_eq!(invocation.value_of("-crf"), Some("28"));
    }
}
