use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::{Serialize, de::DeserializeOwned};

use crate::foundation::error::{LcmError, LcmResult};

/// GUI configuration shipped with the crate, used when no prior build output exists.
pub const PACKAGED_LCM_GUI: &str = include_str!("../../defaults/ubnt_lcm_gui.json");
/// Sound/LED configuration shipped with the crate.
pub const PACKAGED_SOUNDS: &str = include_str!("../../defaults/ubnt_sounds_leds.json");

/// Where a pipeline gets the document it is about to modify.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigSource {
    /// Read `prior` when it exists, otherwise parse `packaged`.
    PriorOrPackaged {
        prior: PathBuf,
        packaged: &'static str,
    },
    /// Read this file; a missing file is an error.
    File(PathBuf),
    /// Parse the given packaged text.
    Packaged(&'static str),
    /// Use an in-memory document.
    Inline(serde_json::Value),
}

impl ConfigSource {
    pub fn load<T: DeserializeOwned>(&self) -> LcmResult<T> {
        match self {
            Self::PriorOrPackaged { prior, packaged } => {
                if prior.is_file() {
                    read_json(prior)
                } else {
                    parse_packaged(packaged)
                }
            }
            Self::File(path) => read_json(path),
            Self::Packaged(text) => parse_packaged(text),
            Self::Inline(value) => Ok(T::deserialize(value)?),
        }
    }

    /// Human-readable origin, for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::PriorOrPackaged { prior, .. } if prior.is_file() => {
                format!("prior build output '{}'", prior.display())
            }
            Self::PriorOrPackaged { .. } | Self::Packaged(_) => "packaged defaults".to_string(),
            Self::File(path) => format!("'{}'", path.display()),
            Self::Inline(_) => "inline document".to_string(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> LcmResult<T> {
    let f = File::open(path)
        .with_context(|| format!("open configuration document '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).map_err(|e| {
        LcmError::serde(format!(
            "parse configuration document '{}': {e}",
            path.display()
        ))
    })
}

fn parse_packaged<T: DeserializeOwned>(text: &str) -> LcmResult<T> {
    serde_json::from_str(text)
        .map_err(|e| LcmError::serde(format!("parse packaged configuration defaults: {e}")))
}

/// Write `doc` as pretty-printed JSON followed by a newline, creating parent directories.
pub fn write_document<T: Serialize>(path: &Path, doc: &T) -> LcmResult<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path)
        .with_context(|| format!("create configuration document '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, doc)?;
    w.write_all(b"\n")
        .and_then(|()| w.flush())
        .with_context(|| format!("write configuration document '{}'", path.display()))?;
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> LcmResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/source.rs"]
mod tests;
