//! promping - fping based reachability exporter
//!
//! This library turns the loop output of `fping` into Prometheus gauges:
//! lines are parsed into raw observations, coerced into numbers and stored
//! as the latest value per host. The `promping` binary wires it to an HTTP
//! endpoint.

pub mod coerce;
pub mod config;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod parser;
pub mod probe;
pub mod sink;
pub mod stream;

pub use coerce::{NotNumeric, to_float};
pub use config::{ConfigError, ExporterConfig};
pub use error::ProbeError;
pub use metrics::PingMetrics;
pub use observation::{Field, RawObservation};
pub use parser::{LineParser, ParsedLine, SkipReason};
pub use probe::{DEFAULT_FPING_PATH, ProbeCommand, ensure_installed};
pub use sink::{DRY_RUN_TARGET, ObservationSink, RecordOutcome, SinkMode};
pub use stream::{StreamEnd, StreamLoop, supervise};
