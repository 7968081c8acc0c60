use std::fmt;

/// One of the four values reported per host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Min,
    Avg,
    Max,
    Lost,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Min, Field::Avg, Field::Max, Field::Lost];

    /// Name of the gauge family the field is exported under.
    pub fn metric_name(self) -> &'static str {
        match self {
            Field::Min => "promping_rtt_min_milliseconds",
            Field::Avg => "promping_rtt_avg_milliseconds",
            Field::Max => "promping_rtt_max_milliseconds",
            Field::Lost => "promping_rtt_lost_total",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Field::Min => "Min RTT time",
            Field::Avg => "Avg RTT time",
            Field::Max => "Max RTT time",
            Field::Lost => "Lost ping responses",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Min => write!(f, "min"),
            Field::Avg => write!(f, "avg"),
            Field::Max => write!(f, "max"),
            Field::Lost => write!(f, "lost"),
        }
    }
}

/// Uncoerced values extracted from one probe line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawObservation {
    pub host: String,
    pub min: String,
    pub avg: String,
    pub max: String,
    pub lost: String,
}

impl RawObservation {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Min => &self.min,
            Field::Avg => &self.avg,
            Field::Max => &self.max,
            Field::Lost => &self.lost,
        }
    }
}

impl fmt::Display for RawObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host: {}, min: {}, avg: {}, max: {}, lost: {}",
            self.host, self.min, self.avg, self.max, self.lost
        )
    }
}
