use std::{fmt, num::NonZeroU32};

use crate::foundation::error::{LcmError, LcmResult};

/// Pixel size of an image or of a single animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> LcmResult<Self> {
        if width == 0 || height == 0 {
            return Err(LcmError::validation(format!(
                "image dimensions must be non-zero, got {width}×{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Size of a strip holding `count` frames of this size side by side.
    pub fn tiled(self, count: u32) -> LcmResult<Self> {
        let width = self.width.checked_mul(count).ok_or_else(|| {
            LcmError::validation(format!(
                "slideshow of {count} frames at width {} overflows",
                self.width
            ))
        })?;
        Ok(Self {
            width,
            height: self.height,
        })
    }

    /// Per-frame size when this image is a strip of `count` frames.
    ///
    /// Integer division; a strip whose width is not a multiple of `count` loses the remainder.
    pub fn split(self, count: NonZeroU32) -> Self {
        Self {
            width: self.width / count,
            height: self.height,
        }
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Frames per second used to derive an animation duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framerate(f64);

impl Framerate {
    pub fn new(fps: f64) -> LcmResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(LcmError::input(format!(
                "framerate must be a positive number, got {fps}"
            )));
        }
        Ok(Self(fps))
    }

    /// Milliseconds needed to play `frames` frames, rounded to the nearest millisecond.
    pub fn frames_to_ms(self, frames: u32) -> u32 {
        let ms = (f64::from(frames) * 1000.0 / self.0).round();
        ms.clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
