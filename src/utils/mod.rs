//! Common utilities and helpers

pub mod path;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Utility functions for ClipPrep
pub struct Utils;

impl Utils {
    /// Size in megabytes with two decimals, e.g. `0.84MB`
    pub fn format_megabytes(size: u64) -> String {
        format!("{:.2}MB", size as f64 / MIB)
    }

    /// Size in kilobytes with two decimals, e.g. `41.50KB`
    pub fn format_kilobytes(size: u64) -> String {
        format!("{:.2}KB", size as f64 / KIB)
    }

    /// Render seconds for an ffmpeg time argument.
    ///
    /// Uses the shortest decimal that round-trips and always keeps a
    /// fractional part, so `5.0` stays `5.0` rather than `5`.
    pub fn format_seconds(seconds: f64) -> String {
        let rendered = seconds.to_string();
        if rendered.contains('.') || !seconds.is_finite() {
            rendered
        } else {
            format!("{}.0", rendered)
        }
    }
}
