use std::io::Error as IoError;

use promping::{ConfigError, ProbeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0:#}")]
    Io(#[from] IoError),
    #[error("Address parsing error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Probe(#[from] ProbeError),
    #[error("Metrics registry error: {0}")]
    Metrics(#[from] prometheus::Error),
}
