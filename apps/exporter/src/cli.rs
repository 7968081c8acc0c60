use std::path::PathBuf;

use clap::Parser;
use promping::{ConfigError, ExporterConfig, config::parse_targets};

/// Expose fping round-trip times and losses as Prometheus metrics.
///
/// Values are taken from flags, then environment, then the optional config file.
#[derive(Parser, Debug)]
#[command(name = "promping", version, about, long_about = None)]
pub struct Cli {
    /// Expose Prometheus metrics on this port
    #[arg(short = 'p', long, env = "PROMPING_PORT")]
    port: Option<u16>,

    /// Single or comma separated targets
    #[arg(short = 't', long, env = "PROMPING_TARGETS")]
    targets: Option<String>,

    /// Ping interval in seconds
    #[arg(short = 'i', long, env = "PROMPING_INTERVAL", allow_negative_numbers = true)]
    interval: Option<i64>,

    /// Dry mode prints only to console
    #[arg(short = 'd', long, env = "PROMPING_DRY_RUN")]
    dry_run: bool,

    /// Address the metrics server binds to
    #[arg(long, env = "PROMPING_BIND")]
    bind: Option<String>,

    /// Location of the fping binary
    #[arg(long = "fping", env = "PROMPING_FPING")]
    fping_path: Option<PathBuf>,

    /// Optional TOML file with an [exporter] table
    #[arg(short = 'c', long, env = "PROMPING_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Merge the flags over the config file (or the defaults).
    pub fn into_config(self) -> Result<ExporterConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ExporterConfig::from_file(path)?,
            None => ExporterConfig::default(),
        };

        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(targets) = self.targets {
            config.targets = parse_targets(&targets);
        }
        if let Some(interval) = self.interval {
            config.interval = interval;
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(fping_path) = self.fping_path {
            config.fping_path = fping_path;
        }
        config.dry_run |= self.dry_run;

        Ok(config)
    }
}
