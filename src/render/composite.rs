//! Horizontal slideshow strips.

use std::path::Path;

use anyhow::Context as _;
use image::{Rgb, RgbImage, RgbaImage};
use rayon::prelude::*;

use crate::{
    config::source::ensure_parent_dir,
    foundation::core::ImageDimensions,
    foundation::error::{LcmError, LcmResult},
};

/// Place `frames` side by side on one RGB strip of `frame.width * n` by `frame.height`.
///
/// Frame `i` lands at `(i * frame.width, 0)`. The strip starts fully transparent and has no alpha
/// channel, so frame alpha is flattened over black. Frames are never scaled: every frame must
/// already be `frame` sized.
pub fn composite_slideshow(frames: &[RgbaImage], frame: ImageDimensions) -> LcmResult<RgbImage> {
    if frames.is_empty() {
        return Err(LcmError::validation("slideshow needs at least one frame"));
    }
    if let Some((i, odd)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (frame.width, frame.height))
    {
        return Err(LcmError::validation(format!(
            "frame {i} is {}×{}, expected {frame}",
            odd.width(),
            odd.height()
        )));
    }

    let count = u32::try_from(frames.len())
        .map_err(|_| LcmError::validation("too many frames for one slideshow"))?;
    let strip = frame.tiled(count)?;

    let tiles: Vec<RgbImage> = frames.par_iter().map(flatten_over_black).collect();

    let mut out = RgbImage::new(strip.width, strip.height);
    for (i, tile) in (0u32..).zip(&tiles) {
        image::imageops::replace(&mut out, tile, i64::from(i * frame.width), 0);
    }
    Ok(out)
}

fn flatten_over_black(src: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(src.width(), src.height(), |x, y| {
        let [r, g, b, a] = src.get_pixel(x, y).0;
        let a = u16::from(a);
        Rgb([
            mul_div255(u16::from(r), a),
            mul_div255(u16::from(g), a),
            mul_div255(u16::from(b), a),
        ])
    })
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Encode `img` as PNG at `path`, creating parent directories.
pub fn write_png(img: &RgbImage, path: &Path) -> LcmResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
