pub mod animated;
pub mod classify;
pub mod sequence;

use std::path::Path;

/// Still-image extensions accepted as frames or single images.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "tiff", "tif", "webp"];

/// Extension of the animated (multi-page) input format.
pub const ANIMATED_EXTENSION: &str = "gif";

/// Decoded formats accepted for still frames, whatever the file is called.
pub const ACCEPTED_FORMATS: &[image::ImageFormat] = &[
    image::ImageFormat::Png,
    image::ImageFormat::Jpeg,
    image::ImageFormat::Tiff,
    image::ImageFormat::WebP,
];

/// Text after the last `.` of the file name, if any.
fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// `true` when `path` ends in one of [`ACCEPTED_EXTENSIONS`]. Matching is case-sensitive.
pub fn has_accepted_extension(path: &Path) -> bool {
    extension(path).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext))
}

pub fn is_animated_image(path: &Path) -> bool {
    extension(path) == Some(ANIMATED_EXTENSION)
}

pub fn is_accepted_format(format: image::ImageFormat) -> bool {
    ACCEPTED_FORMATS.contains(&format)
}
