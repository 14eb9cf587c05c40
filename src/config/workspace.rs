use std::path::{Path, PathBuf};

use crate::{
    config::source::{ConfigSource, PACKAGED_LCM_GUI, PACKAGED_SOUNDS},
    foundation::error::{LcmError, LcmResult},
};

/// File name of the GUI configuration, locally and on the device.
pub const LCM_CONFIG_FILE: &str = "ubnt_lcm_gui.json";
/// File name of the sound/LED configuration written by the chime pipeline.
pub const SOUNDS_CONFIG_FILE: &str = "ubnt_sounds_leds.conf";

/// Local directories the pipelines read from and write to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    /// Root for animation sources (single images, GIFs, frame directories).
    pub animations_root: PathBuf,
    /// Root for chime sound files.
    pub chimes_root: PathBuf,
    /// Build output directory; also holds the accumulated configuration documents.
    pub output_root: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            animations_root: PathBuf::from("src/animations"),
            chimes_root: PathBuf::from("src/chimes"),
            output_root: PathBuf::from("build"),
        }
    }
}

impl Workspace {
    /// Workspace with all three roots under `base`, using the default layout.
    pub fn rooted_at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let defaults = Self::default();
        Self {
            animations_root: base.join(defaults.animations_root),
            chimes_root: base.join(defaults.chimes_root),
            output_root: base.join(defaults.output_root),
        }
    }

    pub fn animation_source(&self, image: &str) -> LcmResult<PathBuf> {
        Ok(self.animations_root.join(normalize_rel_path(image)?))
    }

    pub fn chime_source(&self, filename: &str) -> LcmResult<PathBuf> {
        Ok(self.chimes_root.join(normalize_rel_path(filename)?))
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_root.join(file_name)
    }

    pub fn lcm_config_path(&self) -> PathBuf {
        self.output_path(LCM_CONFIG_FILE)
    }

    pub fn sounds_config_path(&self) -> PathBuf {
        self.output_path(SOUNDS_CONFIG_FILE)
    }

    /// The GUI document accumulates across runs: prior build output first, packaged default
    /// otherwise.
    pub fn lcm_config_source(&self) -> ConfigSource {
        ConfigSource::PriorOrPackaged {
            prior: self.lcm_config_path(),
            packaged: PACKAGED_LCM_GUI,
        }
    }

    /// The sound document is always rebuilt from the packaged default.
    pub fn sounds_config_source(&self) -> ConfigSource {
        ConfigSource::Packaged(PACKAGED_SOUNDS)
    }
}

/// Normalize and validate a source path given relative to a workspace root.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> LcmResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(LcmError::input(format!(
            "source path '{source}' must be relative to the source root"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(LcmError::input(format!(
                "source path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(LcmError::input("source path must name a file or directory"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/config/workspace.rs"]
mod tests;
