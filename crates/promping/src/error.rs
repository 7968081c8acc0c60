use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Failures of the probe process. All of them are fatal for the exporter.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("fping is not installed or not executable at {}", .path.display())]
    ToolMissing { path: PathBuf },
    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("probe process has no stderr pipe")]
    MissingPipe,
    #[error("failed to read probe output: {0}")]
    StreamRead(#[source] io::Error),
    #[error("probe output ended after {lines} lines ({})", describe_status(.status))]
    StreamEnded { status: Option<ExitStatus>, lines: u64 },
}

fn describe_status(status: &Option<ExitStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "exit status unknown".to_owned(),
    }
}
