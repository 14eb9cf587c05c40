use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::{error, info};

use crate::{
    config::screen::ScreenName,
    deploy::plan::{RemoteLayout, RemoteStep, animation_plan, chime_plan},
    foundation::error::{LcmError, LcmResult},
};

/// Transfers finished artifacts to the device and activates them.
pub trait DeployGateway {
    /// Ship the GUI configuration and the asset for `screen`, then restart the GUI.
    fn deploy_animation(
        &self,
        config_path: &Path,
        asset_path: &Path,
        screen: ScreenName,
    ) -> LcmResult<()>;

    /// Ship the sound configuration and sound file, then restart the sound process.
    fn deploy_chime(&self, config_path: &Path, sound_path: &Path) -> LcmResult<()>;
}

/// SSH address of the device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceTarget {
    pub host: String,
    pub user: String,
}

impl DeviceTarget {
    pub const DEFAULT_USER: &'static str = "ubnt";

    pub fn new(host: impl Into<String>) -> LcmResult<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(LcmError::input("device host must be non-empty"));
        }
        Ok(Self {
            host,
            user: Self::DEFAULT_USER.to_string(),
        })
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

/// [`DeployGateway`] that drives the system `scp` and `ssh` binaries.
///
/// Authentication is whatever the local ssh setup provides (keys, agent, config). Steps run in
/// order; a failed step is logged and the remaining steps still run.
#[derive(Clone, Debug)]
pub struct SshGateway {
    target: DeviceTarget,
    layout: RemoteLayout,
    scp_program: PathBuf,
    ssh_program: PathBuf,
}

impl SshGateway {
    pub fn new(target: DeviceTarget, layout: RemoteLayout) -> Self {
        Self {
            target,
            layout,
            scp_program: PathBuf::from("scp"),
            ssh_program: PathBuf::from("ssh"),
        }
    }

    /// Use different executables in place of `scp` and `ssh`.
    pub fn with_programs(mut self, scp: impl Into<PathBuf>, ssh: impl Into<PathBuf>) -> Self {
        self.scp_program = scp.into();
        self.ssh_program = ssh.into();
        self
    }

    /// Run every step, then report all failures together.
    pub fn run_steps(&self, steps: &[RemoteStep]) -> LcmResult<()> {
        let mut failures = Vec::new();
        for step in steps {
            info!("{step}");
            if let Err(err) = self.run_step(step) {
                error!("deploy step failed: {step}: {err}");
                failures.push(format!("{step}: {err}"));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LcmError::deploy(format!(
                "{} of {} steps failed: {}",
                failures.len(),
                steps.len(),
                failures.join("; ")
            )))
        }
    }

    fn run_step(&self, step: &RemoteStep) -> anyhow::Result<()> {
        let mut cmd = match step {
            RemoteStep::Copy { local, remote } => {
                let mut cmd = Command::new(&self.scp_program);
                cmd.arg("-O")
                    .arg(local)
                    .arg(format!("{}:{remote}", self.target.destination()));
                cmd
            }
            RemoteStep::Exec { command } => {
                let mut cmd = Command::new(&self.ssh_program);
                cmd.arg(self.target.destination()).arg(command);
                cmd
            }
        };

        let status = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| anyhow::anyhow!("failed to spawn {:?}: {e}", cmd.get_program()))?;
        anyhow::ensure!(status.success(), "exited with {status}");
        Ok(())
    }
}

impl DeployGateway for SshGateway {
    #[tracing::instrument(skip_all, fields(host = %self.target.host, %screen))]
    fn deploy_animation(
        &self,
        config_path: &Path,
        asset_path: &Path,
        screen: ScreenName,
    ) -> LcmResult<()> {
        let steps = animation_plan(&self.layout, config_path, asset_path)?;
        self.run_steps(&steps)
    }

    #[tracing::instrument(skip_all, fields(host = %self.target.host))]
    fn deploy_chime(&self, config_path: &Path, sound_path: &Path) -> LcmResult<()> {
        let steps = chime_plan(&self.layout, config_path, sound_path)?;
        self.run_steps(&steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deploy/gateway.rs"]
mod tests;
