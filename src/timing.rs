//! Animation duration resolution.

use crate::foundation::core::Framerate;
use crate::foundation::error::LcmResult;

/// Duration used when neither an explicit duration nor a framerate is given.
pub const DEFAULT_DURATION_MS: u32 = 1000;

/// Timing inputs as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingSpec {
    /// Explicit duration in milliseconds.
    pub duration_ms: Option<u32>,
    /// Frames per second; takes precedence over `duration_ms` when set.
    pub framerate: Option<f64>,
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_DURATION_MS),
            framerate: None,
        }
    }
}

/// Effective animation duration in milliseconds.
///
/// With a framerate this is `round(frame_count * 1000 / framerate)` and any explicit duration is
/// ignored. Without one the explicit duration is used, falling back to
/// [`DEFAULT_DURATION_MS`].
pub fn resolve_duration(spec: TimingSpec, frame_count: u32) -> LcmResult<u32> {
    match spec.framerate {
        Some(fps) => Ok(Framerate::new(fps)?.frames_to_ms(frame_count)),
        None => Ok(spec.duration_ms.unwrap_or(DEFAULT_DURATION_MS)),
    }
}

#[cfg(test)]
#[path = "../tests/unit/timing.rs"]
mod tests;
