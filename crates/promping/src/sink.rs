use tracing::{debug, info};

use crate::{
    coerce::{NotNumeric, to_float},
    metrics::PingMetrics,
    observation::{Field, RawObservation},
};

/// Tracing target of the dry-run console lines; the exporter keeps it
/// enabled at `info` whatever the configured level.
pub const DRY_RUN_TARGET: &str = "promping::dry_run";

/// Where parsed observations go. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkMode {
    #[default]
    Metrics,
    DryRun,
}

impl SinkMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { SinkMode::DryRun } else { SinkMode::Metrics }
    }
}

/// What recording one observation did to the gauges.
#[derive(Debug, Default, PartialEq)]
pub struct RecordOutcome {
    pub updated: Vec<Field>,
    pub rejected: Vec<(Field, NotNumeric)>,
}

pub enum ObservationSink {
    Metrics(PingMetrics),
    Console,
}

impl ObservationSink {
    pub fn new(mode: SinkMode, metrics: PingMetrics) -> Self {
        match mode {
            SinkMode::Metrics => ObservationSink::Metrics(metrics),
            SinkMode::DryRun => ObservationSink::Console,
        }
    }

    pub fn mode(&self) -> SinkMode {
        match self {
            ObservationSink::Metrics(_) => SinkMode::Metrics,
            ObservationSink::Console => SinkMode::DryRun,
        }
    }

    /// Record one observation. Each field is coerced and stored on its own,
    /// a non-numeric field leaves only its own gauge untouched.
    pub fn record(&self, observation: &RawObservation) -> RecordOutcome {
        let mut outcome = RecordOutcome::default();

        match self {
            ObservationSink::Metrics(metrics) => {
                for field in Field::ALL {
                    match to_float(observation.field(field)) {
                        Ok(value) => {
                            metrics.set(field, &observation.host, value);
                            outcome.updated.push(field);
                        }
                        Err(err) => {
                            debug!(host = %observation.host, %field, "{err}");
                            outcome.rejected.push((field, err));
                        }
                    }
                }
            }
            ObservationSink::Console => info!(target: DRY_RUN_TARGET, "{observation}"),
        }

        outcome
    }
}
