use std::{
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use crate::{
    foundation::error::{LcmError, LcmResult},
    ingest::{has_accepted_extension, is_animated_image},
};

/// How an input path is turned into the device asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameSource {
    /// Directory whose image files are the frames, in file-name order.
    ImageSequence { dir: PathBuf },
    /// Multi-page animated image; each page is a frame.
    AnimatedImage { path: PathBuf },
    /// Single still image shown as-is.
    StaticImage { path: PathBuf },
    /// Single still image that already holds `frames` frames side by side.
    TiledImage { path: PathBuf, frames: NonZeroU32 },
}

impl FrameSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::ImageSequence { dir } => dir,
            Self::AnimatedImage { path }
            | Self::StaticImage { path }
            | Self::TiledImage { path, .. } => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ImageSequence { .. } => "image sequence",
            Self::AnimatedImage { .. } => "animated image",
            Self::StaticImage { .. } => "static image",
            Self::TiledImage { .. } => "tiled single image",
        }
    }
}

/// Decide which ingestion strategy applies to `path`.
///
/// Precedence: directory, animated-image extension, still image when `slideshow` is off, then
/// still image tiled into `frames` frames. A frame count of zero counts as absent.
pub fn classify(path: &Path, slideshow: bool, frames: Option<u32>) -> LcmResult<FrameSource> {
    if !path.exists() {
        return Err(LcmError::input(format!(
            "source '{}' does not exist",
            path.display()
        )));
    }

    if path.is_dir() {
        return Ok(FrameSource::ImageSequence {
            dir: path.to_path_buf(),
        });
    }
    if is_animated_image(path) {
        return Ok(FrameSource::AnimatedImage {
            path: path.to_path_buf(),
        });
    }
    if has_accepted_extension(path) {
        if !slideshow {
            return Ok(FrameSource::StaticImage {
                path: path.to_path_buf(),
            });
        }
        let frames = frames.and_then(NonZeroU32::new).ok_or_else(|| {
            LcmError::input(format!(
                "a slideshow from the single image '{}' requires a frame count",
                path.display()
            ))
        })?;
        return Ok(FrameSource::TiledImage {
            path: path.to_path_buf(),
            frames,
        });
    }

    Err(LcmError::input(format!(
        "unrecognized input shape for '{}': expected a directory, a .gif, or a still image",
        path.display()
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/classify.rs"]
mod tests;
