//! Frame validation for directory image sequences.

use std::{
    fmt,
    fs::DirEntry,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    foundation::core::ImageDimensions,
    foundation::error::{LcmError, LcmResult},
    ingest::{has_accepted_extension, is_accepted_format},
};

/// Accepted frames of a directory, in file-name order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    pub frames: Vec<PathBuf>,
    /// Size shared by every frame, fixed by the first accepted one.
    pub dimensions: ImageDimensions,
    /// Entries that were left out, in the same order.
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NotAFile,
    Extension,
    Format(String),
    Unreadable(String),
    Dimensions(ImageDimensions),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFile => f.write_str("it isn't a file"),
            Self::Extension => f.write_str("it doesn't have an acceptable file extension"),
            Self::Format(format) => write!(f, "its image format ({format}) isn't acceptable"),
            Self::Unreadable(err) => write!(f, "it could not be decoded ({err})"),
            Self::Dimensions(dims) => write!(f, "its image dimensions ({dims}) are incompatible"),
        }
    }
}

enum Probe {
    Accepted(ImageDimensions),
    Skipped(SkipReason),
}

/// Collect the usable frames of `dir`.
///
/// Each entry is probed independently (in parallel) for being a regular file, having an accepted
/// extension, and decoding to an accepted format. Survivors are then checked in order against the
/// dimensions of the first survivor. Rejected entries are logged and skipped; an empty result is
/// an error.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_sequence(dir: &Path) -> LcmResult<FrameSequence> {
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("read frame directory '{}'", dir.display()))?
        .collect::<Result<Vec<DirEntry>, _>>()
        .with_context(|| format!("list frame directory '{}'", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    let candidates: Vec<(PathBuf, bool)> = entries
        .iter()
        .map(|entry| {
            let is_file = entry.file_type().is_ok_and(|t| t.is_file());
            (entry.path(), is_file)
        })
        .collect();

    let probes: Vec<(PathBuf, Probe)> = candidates
        .into_par_iter()
        .map(|(path, is_file)| {
            let probe = probe_entry(&path, is_file);
            (path, probe)
        })
        .collect();

    let mut frames = Vec::with_capacity(probes.len());
    let mut skipped = Vec::new();
    let mut canonical: Option<ImageDimensions> = None;

    for (path, probe) in probes {
        let reason = match probe {
            Probe::Skipped(reason) => reason,
            Probe::Accepted(dims) => match canonical {
                None => {
                    canonical = Some(dims);
                    frames.push(path);
                    continue;
                }
                Some(expected) if expected == dims => {
                    frames.push(path);
                    continue;
                }
                Some(_) => SkipReason::Dimensions(dims),
            },
        };
        warn!("skipping '{}' as {reason}", path.display());
        skipped.push(SkippedEntry { path, reason });
    }

    let Some(dimensions) = canonical else {
        return Err(LcmError::input(format!(
            "no suitable frames for an image sequence found in '{}'",
            dir.display()
        )));
    };

    debug!(frames = frames.len(), skipped = skipped.len(), %dimensions, "scanned sequence");
    Ok(FrameSequence {
        frames,
        dimensions,
        skipped,
    })
}

fn probe_entry(path: &Path, is_file: bool) -> Probe {
    if !is_file {
        return Probe::Skipped(SkipReason::NotAFile);
    }
    if !has_accepted_extension(path) {
        return Probe::Skipped(SkipReason::Extension);
    }

    match probe_image(path) {
        Ok(probe) => probe,
        Err(err) => Probe::Skipped(SkipReason::Unreadable(err.to_string())),
    }
}

fn probe_image(path: &Path) -> image::ImageResult<Probe> {
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    match reader.format() {
        Some(format) if is_accepted_format(format) => {}
        Some(format) => {
            let name = format.extensions_str().first().copied().unwrap_or("unknown");
            return Ok(Probe::Skipped(SkipReason::Format(name.to_string())));
        }
        None => return Ok(Probe::Skipped(SkipReason::Format("unknown".to_string()))),
    }

    let (width, height) = reader.into_dimensions()?;
    Ok(match ImageDimensions::new(width, height) {
        Ok(dims) => Probe::Accepted(dims),
        Err(err) => Probe::Skipped(SkipReason::Unreadable(err.to_string())),
    })
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Decode every frame to RGBA8, in parallel, preserving frame order.
    pub fn decode_frames(&self) -> LcmResult<Vec<image::RgbaImage>> {
        self.frames
            .par_iter()
            .map(|path| {
                image::open(path)
                    .map(|img| img.to_rgba8())
                    .map_err(|e| LcmError::decode(format!("decode frame '{}': {e}", path.display())))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/sequence.rs"]
mod tests;
