//! Ring chime replacement.

use std::path::PathBuf;

use tracing::info;

use crate::{
    config::{
        sounds::{ChimeSpec, SoundConfig, merge_chime},
        source::{ConfigSource, write_document},
        workspace::Workspace,
    },
    deploy::gateway::DeployGateway,
    foundation::error::{LcmError, LcmResult},
    pipeline::Outcome,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChimeRequest {
    /// Sound file name, relative to the chimes root.
    pub filename: String,
    pub repeat_times: u32,
    /// Playback volume in percent.
    pub volume: u8,
    pub dry_run: bool,
}

impl ChimeRequest {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            repeat_times: 1,
            volume: 100,
            dry_run: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChimeReport {
    pub outcome: Outcome,
    pub sound_path: PathBuf,
    pub config_path: PathBuf,
    pub document: SoundConfig,
}

/// Point the ring-button sound at a new file and deploy it unless `dry_run`.
#[tracing::instrument(skip_all, fields(filename = %request.filename))]
pub fn run_chime(
    request: &ChimeRequest,
    workspace: &Workspace,
    config: &ConfigSource,
    gateway: &dyn DeployGateway,
) -> LcmResult<ChimeReport> {
    let sound_path = workspace.chime_source(&request.filename)?;
    if !sound_path.is_file() {
        return Err(LcmError::input(format!(
            "chime sound '{}' does not exist",
            sound_path.display()
        )));
    }

    let file_name = sound_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            LcmError::input(format!("'{}' has no usable file name", sound_path.display()))
        })?
        .to_string();
    let spec = ChimeSpec {
        file_name,
        repeat_times: request.repeat_times,
        volume: request.volume,
    };
    spec.validate()?;

    info!("loading sound configuration from {}", config.describe());
    let document: SoundConfig = config.load()?;
    let document = merge_chime(&document, &spec);

    let config_path = workspace.sounds_config_path();
    write_document(&config_path, &document)?;
    info!("wrote sounds config file to '{}'", config_path.display());

    let mut report = ChimeReport {
        outcome: Outcome::DryRun,
        sound_path,
        config_path,
        document,
    };
    if request.dry_run {
        info!("dry run: not sending the new chime to the device");
        return Ok(report);
    }

    gateway.deploy_chime(&report.config_path, &report.sound_path)?;
    report.outcome = Outcome::Deployed;
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/chime.rs"]
mod tests;
