use std::env::var;

use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format selected through `RUST_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

impl LogFormat {
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

pub fn init() {
    init_with_level(LevelFilter::INFO);
}

pub fn init_with_level(level: LevelFilter) {
    init_with(level, &[]);
}

/// Build the filter: `level` by default, `RUST_LOG` directives on top, and
/// `pinned` targets always enabled at `info`.
pub fn build_filter(level: LevelFilter, pinned: &[&str]) -> EnvFilter {
    let mut env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    for target in pinned {
        match format!("{target}=info").parse() {
            Ok(directive) => env_filter = env_filter.add_directive(directive),
            Err(error) => eprintln!("ignoring invalid log target {target:?}: {error}"),
        }
    }

    env_filter
}

/// Initialize the global subscriber with [`build_filter`].
pub fn init_with(level: LevelFilter, pinned: &[&str]) {
    let env_filter = build_filter(level, pinned);

    let log_format = var("RUST_LOG_FORMAT")
        .map(|value| LogFormat::from_env_value(&value))
        .unwrap_or_default();

    let log_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().with_filter(env_filter).boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter)
            .boxed(),
    };

    if tracing_subscriber::registry().with(log_layer).try_init().is_err() {
        warn!("tracing subscriber already initialized, keeping the existing one");
    }
}
