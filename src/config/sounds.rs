//! Sound/LED configuration for the ring chime.

use crate::{
    config::model::Passthrough,
    foundation::error::{LcmError, LcmResult},
};

/// Sound state that plays when the ring button is pressed.
pub const RING_BUTTON_PRESSED: &str = "RING_BUTTON_PRESSED";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundConfig {
    pub custom_sounds: Vec<CustomSound>,
    #[serde(flatten)]
    pub settings: Passthrough,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSound {
    pub enable: bool,
    pub file: String,
    pub repeat_times: u32,
    pub sound_state_name: String,
    pub volume: u8,
    #[serde(flatten)]
    pub extra: Passthrough,
}

/// Chime replacement requested by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChimeSpec {
    /// Sound file name as it will be stored on the device.
    pub file_name: String,
    pub repeat_times: u32,
    pub volume: u8,
}

impl ChimeSpec {
    pub fn validate(&self) -> LcmResult<()> {
        if self.volume > 100 {
            return Err(LcmError::input(format!(
                "chime volume must be within 0..=100, got {}",
                self.volume
            )));
        }
        if self.repeat_times == 0 {
            return Err(LcmError::input("chime repeat count must be at least 1"));
        }
        Ok(())
    }

    /// Path the device resolves the sound file from, relative to its config directory.
    pub fn device_file_ref(&self) -> String {
        format!("../sounds/{}", self.file_name)
    }
}

/// Replace the custom sound list with a single entry for `chime`.
///
/// The first existing entry is used as the template so its extra fields survive; without one a
/// fresh enabled ring-button entry is built. Every other setting is copied unchanged.
pub fn merge_chime(config: &SoundConfig, chime: &ChimeSpec) -> SoundConfig {
    let template = config.custom_sounds.first().cloned().unwrap_or_else(|| CustomSound {
        enable: true,
        file: String::new(),
        repeat_times: 1,
        sound_state_name: RING_BUTTON_PRESSED.to_string(),
        volume: 100,
        extra: Passthrough::new(),
    });

    SoundConfig {
        custom_sounds: vec![CustomSound {
            file: chime.device_file_ref(),
            repeat_times: chime.repeat_times,
            volume: chime.volume,
            ..template
        }],
        settings: config.settings.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/sounds.rs"]
mod tests;
