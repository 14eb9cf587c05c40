//! Remote work needed to activate a new asset on the device, as data.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    config::workspace::LCM_CONFIG_FILE,
    foundation::error::{LcmError, LcmResult},
};

/// Device-side locations used by the deploy plans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteLayout {
    /// Writable directory that survives reboots.
    pub persistent_dir: String,
    /// Directory the GUI loads screen images from.
    pub image_mount_dir: String,
    /// Read-only GUI configuration path the persistent copy is bind-mounted over.
    pub config_mount_path: String,
    /// GUI process, restarted to pick up changes.
    pub gui_process: String,
    /// Directory holding chime sound files.
    pub sounds_dir: String,
    /// Sound/LED configuration path.
    pub sounds_config_path: String,
    /// Sound/LED process, restarted to pick up changes.
    pub sounds_process: String,
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self {
            persistent_dir: "/var/etc/persistent".to_string(),
            image_mount_dir: "/usr/etc/gui/screen_240x240".to_string(),
            config_mount_path: "/usr/etc/gui/ubnt_lcm_gui_sysid_a575.json".to_string(),
            gui_process: "/bin/ubnt_lcm_gui".to_string(),
            sounds_dir: "/var/etc/sounds".to_string(),
            sounds_config_path: "/var/etc/persistent/ubnt_sounds_leds.conf".to_string(),
            sounds_process: "/bin/ubnt_sounds_leds".to_string(),
        }
    }
}

impl RemoteLayout {
    pub fn persistent_config_path(&self) -> String {
        format!("{}/{LCM_CONFIG_FILE}", self.persistent_dir)
    }
}

/// One remote operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteStep {
    /// Copy a local file to a remote path.
    Copy { local: PathBuf, remote: String },
    /// Run a shell command on the device.
    Exec { command: String },
}

impl fmt::Display for RemoteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy { local, remote } => write!(f, "copy '{}' to {remote}", local.display()),
            Self::Exec { command } => write!(f, "run `{command}`"),
        }
    }
}

/// Copy config and asset, bind-mount both over the firmware copies, restart the GUI.
pub fn animation_plan(
    layout: &RemoteLayout,
    config_path: &Path,
    asset_path: &Path,
) -> LcmResult<Vec<RemoteStep>> {
    let asset_name = file_name(asset_path)?;
    let persistent_config = layout.persistent_config_path();
    let persistent_asset = format!("{}/{asset_name}", layout.persistent_dir);
    let mounted_asset = format!("{}/{asset_name}", layout.image_mount_dir);

    Ok(vec![
        RemoteStep::Copy {
            local: config_path.to_path_buf(),
            remote: persistent_config.clone(),
        },
        RemoteStep::Copy {
            local: asset_path.to_path_buf(),
            remote: format!("{}/", layout.persistent_dir),
        },
        RemoteStep::Exec {
            command: bind_mount(&persistent_asset, &mounted_asset),
        },
        RemoteStep::Exec {
            command: bind_mount(&persistent_config, &layout.config_mount_path),
        },
        RemoteStep::Exec {
            command: format!("killall {}", shell_quote(&layout.gui_process)),
        },
    ])
}

/// Copy the sound config and sound file, restart the sound process.
pub fn chime_plan(
    layout: &RemoteLayout,
    config_path: &Path,
    sound_path: &Path,
) -> LcmResult<Vec<RemoteStep>> {
    file_name(sound_path)?;
    Ok(vec![
        RemoteStep::Copy {
            local: config_path.to_path_buf(),
            remote: layout.sounds_config_path.clone(),
        },
        RemoteStep::Copy {
            local: sound_path.to_path_buf(),
            remote: format!("{}/", layout.sounds_dir),
        },
        RemoteStep::Exec {
            command: format!("killall {}", shell_quote(&layout.sounds_process)),
        },
    ])
}

fn bind_mount(source: &str, target: &str) -> String {
    format!("mount -o bind {} {}", shell_quote(source), shell_quote(target))
}

fn file_name(path: &Path) -> LcmResult<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            LcmError::validation(format!("'{}' has no usable file name", path.display()))
        })
}

/// Quote `s` for a POSIX shell unless it only holds characters that need no quoting.
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:@=,".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deploy/plan.rs"]
mod tests;
