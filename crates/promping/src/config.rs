use std::{fmt, fs, io, path};

use serde::Deserialize;
use thiserror::Error;

use crate::probe::DEFAULT_FPING_PATH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFailed {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file: {0}")]
    ParseFailed(#[from] toml::de::Error),
    #[error("please increase your ping interval (got {0}, must be at least 1 second)")]
    InvalidInterval(i64),
    #[error("no targets configured")]
    NoTargets,
}

/// Runtime settings of the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExporterConfig {
    pub bind: String,
    pub port: u16,
    pub targets: Vec<String>,
    /// Probe interval in seconds.
    pub interval: i64,
    pub dry_run: bool,
    pub fping_path: path::PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    exporter: ExporterConfig,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 9876,
            targets: vec!["localhost".into()],
            interval: 1,
            dry_run: false,
            fping_path: DEFAULT_FPING_PATH.into(),
        }
    }
}

impl fmt::Display for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str, value: &dyn fmt::Display| {
                writeln!(f, "  {:indent$}{}: {}", "", label, value, indent = level * 2)
            }
        };
        let write_1 = write_indented(1);

        writeln!(f, "Exporter Configuration:")?;
        write_1(f, "Metrics Address", &format!("{}:{}", self.bind, self.port))?;
        write_1(f, "Targets", &self.targets.join(", "))?;
        write_1(f, "Interval (s)", &self.interval)?;
        write_1(f, "Dry Run", &self.dry_run)?;
        write_1(f, "fping", &self.fping_path.display())?;

        Ok(())
    }
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Split a comma separated target list, dropping blanks.
pub fn parse_targets(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|host| !host.is_empty()).map(str::to_owned).collect()
}

impl ExporterConfig {
    /// Read the `[exporter]` table of a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<path::Path>) -> Result<Self, ConfigError> {
        let path = normalize_toml_path(path.as_ref());
        let raw = fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadFailed { path: path.clone(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(file.exporter)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval <= 0 {
            return Err(ConfigError::InvalidInterval(self.interval));
        }
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        Ok(())
    }

    /// Interval as an unsigned value, only meaningful after [`validate`](Self::validate).
    pub fn interval_secs(&self) -> u64 {
        self.interval.max(0).unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = ExporterConfig::default();
        assert_eq!(config.port, 9876);
        assert_eq!(config.targets, vec!["localhost".to_string()]);
        assert_eq!(config.interval, 1);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_interval() {
        for interval in [0, -5] {
            let config = ExporterConfig { interval, ..Default::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidInterval(i)) if i == interval));
        }
    }

    #[test]
    fn rejects_empty_targets() {
        let config = ExporterConfig { targets: parse_targets(" , ,"), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::NoTargets)));
    }

    #[test]
    fn parses_target_lists() {
        assert_eq!(parse_targets("a.example, 10.0.0.1,,b"), vec!["a.example", "10.0.0.1", "b"]);
        assert_eq!(parse_targets("localhost"), vec!["localhost"]);
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let config = ExporterConfig::from_toml_str("[exporter]\nport = 9100\ndry_run = true\n").unwrap();
        assert_eq!(config.port, 9100);
        assert!(config.dry_run);
        assert_eq!(config.interval, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ExporterConfig::from_toml_str("[exporter]\nportt = 1\n"),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn toml_extension_is_enforced() {
        assert_eq!(normalize_toml_path(path::Path::new("conf")), path::PathBuf::from("conf.toml"));
        assert_eq!(normalize_toml_path(path::Path::new("a.toml")), path::PathBuf::from("a.toml"));
    }

    #[test]
    fn display_lists_targets() {
        let rendered = ExporterConfig::default().to_string();
        assert!(rendered.contains("Targets: localhost"));
        assert!(rendered.contains("Metrics Address: 0.0.0.0:9876"));
    }
}
