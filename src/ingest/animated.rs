//! Page extraction for animated (GIF) inputs.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use image::{AnimationDecoder as _, ImageDecoder as _, codecs::gif::GifDecoder};
use tracing::debug;

use crate::foundation::{
    core::ImageDimensions,
    error::{LcmError, LcmResult},
};

/// Decoded pages of an animated image, in page order.
#[derive(Clone, Debug)]
pub struct AnimatedFrames {
    pub pages: Vec<image::RgbaImage>,
    /// Logical screen size; every page is rendered at this size.
    pub dimensions: ImageDimensions,
}

impl AnimatedFrames {
    pub fn page_count(&self) -> LcmResult<u32> {
        u32::try_from(self.pages.len()).map_err(|_| {
            LcmError::validation(format!("{} animation pages is too many", self.pages.len()))
        })
    }
}

/// Decode every page of the GIF at `path` as a full-canvas RGBA frame.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn extract_pages(path: &Path) -> LcmResult<AnimatedFrames> {
    let f = File::open(path).with_context(|| format!("open animated image '{}'", path.display()))?;
    let decoder = GifDecoder::new(BufReader::new(f))
        .map_err(|e| LcmError::decode(format!("parse GIF '{}': {e}", path.display())))?;

    let (width, height) = decoder.dimensions();
    let dimensions = ImageDimensions::new(width, height)?;

    let pages = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| LcmError::decode(format!("decode GIF pages of '{}': {e}", path.display())))?
        .into_iter()
        .map(|frame| frame.into_buffer())
        .collect::<Vec<_>>();

    if pages.is_empty() {
        return Err(LcmError::input(format!(
            "animated image '{}' has no pages",
            path.display()
        )));
    }
    if let Some(odd) = pages.iter().find(|p| p.dimensions() != (width, height)) {
        return Err(LcmError::decode(format!(
            "GIF page of {}×{} does not match the {dimensions} canvas",
            odd.width(),
            odd.height()
        )));
    }

    debug!(pages = pages.len(), %dimensions, "extracted animated pages");
    Ok(AnimatedFrames { pages, dimensions })
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/animated.rs"]
mod tests;
