//! Invocation of the external `fping` process.

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::error::ProbeError;

pub const DEFAULT_FPING_PATH: &str = "/usr/bin/fping";

/// Multiplier from the probe interval to the per-target period.
const PERIOD_FACTOR: u64 = 100;

/// Argument shape of the long running `fping` loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    pub program: PathBuf,
    pub interval_secs: u64,
    pub targets: Vec<String>,
}

impl ProbeCommand {
    pub fn new(program: impl Into<PathBuf>, interval_secs: u64, targets: Vec<String>) -> Self {
        Self { program: program.into(), interval_secs, targets }
    }

    /// Backoff 1, timestamps, no retries, no outage reporting, a summary
    /// every `interval` seconds, loop mode, then the targets.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = [
            "-B",
            "1",
            "-D",
            "-r",
            "0",
            "-O",
            "0",
            "-Q",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect();

        args.push(self.interval_secs.to_string());
        args.push("-p".to_owned());
        args.push(self.interval_secs.saturating_mul(PERIOD_FACTOR).to_string());
        args.push("-l".to_owned());
        args.extend(self.targets.iter().cloned());
        args
    }

    /// Start the process with its stderr piped; it is killed when the handle drops.
    pub fn spawn(&self) -> Result<Child, ProbeError> {
        info!(program = %self.program.display(), args = ?self.args(), "starting probe process");

        Command::new(&self.program)
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProbeError::Spawn { path: self.program.clone(), source })
    }
}

/// Check that `program -v` runs and exits successfully.
pub async fn ensure_installed(program: &Path) -> Result<(), ProbeError> {
    let status = Command::new(program)
        .arg("-v")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => {
            debug!(program = %program.display(), "probe tool found");
            Ok(())
        }
        Ok(status) => {
            debug!(program = %program.display(), %status, "probe tool version check failed");
            Err(ProbeError::ToolMissing { path: program.to_path_buf() })
        }
        Err(err) => {
            debug!(program = %program.display(), "cannot run probe tool: {err}");
            Err(ProbeError::ToolMissing { path: program.to_path_buf() })
        }
    }
}
