// Domain rules - Trim and thumbnail policies

use crate::domain::errors::DomainError;
use crate::domain::model::TrimWindow;

/// Fraction of the duration dropped from each end of a clip
pub const DEFAULT_TRIM_FRACTION: f64 = 0.05;

/// Seconds after the trim start at which the thumbnail is taken
pub const DEFAULT_THUMBNAIL_OFFSET: f64 = 0.5;

/// Thumbnail timestamp used when the clip is not trimmed at the start
pub const DEFAULT_THUMBNAIL_TIMESTAMP: f64 = 1.0;

/// Fixed-percentage trim heuristic.
///
/// This is not content aware: it drops the same fraction of the duration
/// from both ends of every clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimEstimator {
    fraction: f64,
}

impl TrimEstimator {
    pub fn new(fraction: f64) -> Result<Self, DomainError> {
        if !(0.0..0.5).contains(&fraction) {
            return Err(DomainError::InvalidSetting(format!(
                "trim fraction must be in [0, 0.5), got {}",
                fraction
            )));
        }
        Ok(Self { fraction })
    }

    /// Compute the trim window for a clip of `duration` seconds.
    ///
    /// A duration of zero or less is the probe's "unknown" sentinel and
    /// yields no trim. Callers report that case to the user.
    pub fn estimate(&self, duration: f64) -> TrimWindow {
        if duration <= 0.0 {
            return TrimWindow::none();
        }

        TrimWindow::new(duration * self.fraction, duration * (1.0 - self.fraction))
    }
}

impl Default for TrimEstimator {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_TRIM_FRACTION,
        }
    }
}

/// Chooses where in the clip the thumbnail frame is taken
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailPolicy {
    pub offset: f64,
    pub default_timestamp: f64,
}

impl ThumbnailPolicy {
    pub fn new(offset: f64, default_timestamp: f64) -> Result<Self, DomainError> {
        if offset < 0.0 || default_timestamp < 0.0 {
            return Err(DomainError::InvalidSetting(
                "thumbnail timestamps cannot be negative".to_string(),
            ));
        }
        Ok(Self {
            offset,
            default_timestamp,
        })
    }

    /// Just past the trim start when there is one, otherwise the default
    pub fn timestamp(&self, trim: &TrimWindow) -> f64 {
        match trim.start_bound() {
            Some(start) => start + self.offset,
            None => self.default_timestamp,
        }
    }
}

impl Default for ThumbnailPolicy {
    fn default() -> Self {
        Self {
            offset: DEFAULT_THUMBNAIL_OFFSET,
            default_timestamp: DEFAULT_THUMBNAIL_TIMESTAMP,
        }
    }
}

#[cfg(test)]
mod tests;
