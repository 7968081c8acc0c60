//! Per-host gauges exposed to Prometheus.

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

use crate::observation::Field;

const HOST_LABEL: &str = "host";

/// The four gauge families, registered in a private [`Registry`].
///
/// Clones share the same underlying gauges, so one clone can be written by
/// the stream loop while another is read by the HTTP handler.
#[derive(Clone)]
pub struct PingMetrics {
    registry: Registry,
    min: GaugeVec,
    avg: GaugeVec,
    max: GaugeVec,
    lost: GaugeVec,
}

impl PingMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let gauge = |field: Field| -> prometheus::Result<GaugeVec> {
            let vec = GaugeVec::new(Opts::new(field.metric_name(), field.help()), &[HOST_LABEL])?;
            registry.register(Box::new(vec.clone()))?;
            Ok(vec)
        };

        Ok(Self {
            min: gauge(Field::Min)?,
            avg: gauge(Field::Avg)?,
            max: gauge(Field::Max)?,
            lost: gauge(Field::Lost)?,
            registry,
        })
    }

    fn gauges(&self, field: Field) -> &GaugeVec {
        match field {
            Field::Min => &self.min,
            Field::Avg => &self.avg,
            Field::Max => &self.max,
            Field::Lost => &self.lost,
        }
    }

    /// Overwrite the value of `field` for `host`.
    pub fn set(&self, field: Field, host: &str, value: f64) {
        self.gauges(field).with_label_values(&[host]).set(value);
    }

    /// Current value, `None` if nothing was ever recorded for the pair.
    ///
    /// Meant for tests and diagnostics, not the hot path: it gathers the
    /// whole registry so that querying never creates a series.
    pub fn get(&self, field: Field, host: &str) -> Option<f64> {
        self.registry
            .gather()
            .iter()
            .filter(|family| family.get_name() == field.metric_name())
            .flat_map(|family| family.get_metric())
            .find(|metric| {
                metric
                    .get_label()
                    .iter()
                    .any(|label| label.get_name() == HOST_LABEL && label.get_value() == host)
            })
            .map(|metric| metric.get_gauge().get_value())
    }

    /// Render all gauges in the text exposition format.
    pub fn encode(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_owned()
    }
}
