//! The read loop over the probe output.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::{
    error::ProbeError,
    parser::{LineParser, ParsedLine},
    probe::ProbeCommand,
    sink::ObservationSink,
};

/// Counters of a finished stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamEnd {
    pub lines: u64,
    pub observations: u64,
    pub skipped: u64,
}

/// Feeds lines to the parser one at a time and routes the results to the sink.
pub struct StreamLoop {
    parser: LineParser,
    sink: ObservationSink,
    stats: StreamEnd,
}

impl StreamLoop {
    pub fn new(parser: LineParser, sink: ObservationSink) -> Self {
        Self { parser, sink, stats: StreamEnd::default() }
    }

    pub fn handle_line(&mut self, line: &str) {
        self.stats.lines += 1;
        match self.parser.parse(line) {
            ParsedLine::Observation(observation) => {
                self.sink.record(&observation);
                self.stats.observations += 1;
            }
            ParsedLine::Skipped(_) => self.stats.skipped += 1,
        }
    }

    /// Consume `reader` until end of input.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 only spoil the
    /// line they appear on.
    pub async fn run<R>(&mut self, mut reader: R) -> Result<StreamEnd, ProbeError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).await.map_err(ProbeError::StreamRead)?;
            if read == 0 {
                break;
            }

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            self.handle_line(&String::from_utf8_lossy(raw));
        }

        Ok(self.stats)
    }

    pub fn stats(&self) -> StreamEnd {
        self.stats
    }
}

/// Run the probe process and consume its stderr until it ends.
///
/// Never returns `Ok`: the end of the output is reported as
/// [`ProbeError::StreamEnded`] since the exporter cannot continue without it.
pub async fn supervise(command: &ProbeCommand, sink: ObservationSink) -> Result<(), ProbeError> {
    let mut child = command.spawn()?;
    let stderr = child.stderr.take().ok_or(ProbeError::MissingPipe)?;

    let mut stream = StreamLoop::new(LineParser::new(), sink);
    info!(targets = ?command.targets, mode = ?stream.sink.mode(), "reading probe output");

    let end = stream.run(BufReader::new(stderr)).await;
    if end.is_err() {
        let _ = child.start_kill();
    }
    let status = child.wait().await.ok();

    let end = end?;
    warn!(
        lines = end.lines,
        observations = end.observations,
        skipped = end.skipped,
        "probe output ended"
    );
    Err(ProbeError::StreamEnded { status, lines: end.lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metrics::PingMetrics, observation::Field, sink::SinkMode};

    #[tokio::test]
    async fn counts_observations_and_skips() {
        let metrics = PingMetrics::new().unwrap();
        let mut stream =
            StreamLoop::new(LineParser::new(), ObservationSink::new(SinkMode::Metrics, metrics.clone()));

        let input: &[u8] = b"[10:00:00]\n\
            gw : xmt/rcv/%loss = 5/5/0%, min/avg/max = 1.2/1.5/2.0\n\
            \n\
            bad line here\n";
        let end = stream.run(input).await.unwrap();

        assert_eq!(end, StreamEnd { lines: 4, observations: 1, skipped: 3 });
        assert_eq!(metrics.get(Field::Avg, "gw"), Some(1.5));
    }

    #[tokio::test]
    async fn invalid_utf8_only_spoils_its_line() {
        let metrics = PingMetrics::new().unwrap();
        let mut stream =
            StreamLoop::new(LineParser::new(), ObservationSink::new(SinkMode::Metrics, metrics.clone()));

        let input: &[u8] = b"gw : xmt/rcv/%loss = 5/5/0%, min/avg/max = 1/2/3\n\
            \xff\xfe garbage\n\
            gw : xmt/rcv/%loss = 5/4/20%, min/avg/max = 4/5/6\r\n";
        let end = stream.run(input).await.unwrap();

        assert_eq!(end, StreamEnd { lines: 3, observations: 2, skipped: 1 });
        assert_eq!(metrics.get(Field::Lost, "gw"), Some(20.0));
        assert_eq!(metrics.get(Field::Max, "gw"), Some(6.0));
    }

    #[tokio::test]
    async fn last_line_without_newline_is_read() {
        let metrics = PingMetrics::new().unwrap();
        let mut stream =
            StreamLoop::new(LineParser::new(), ObservationSink::new(SinkMode::Metrics, metrics.clone()));

        let end = stream.run(&b"gw : xmt/rcv/%loss = 5/5/0%"[..]).await.unwrap();

        assert_eq!(end.observations, 1);
        assert_eq!(metrics.get(Field::Lost, "gw"), Some(0.0));
    }

    #[tokio::test]
    async fn empty_input_ends_immediately() {
        let metrics = PingMetrics::new().unwrap();
        let mut stream = StreamLoop::new(LineParser::new(), ObservationSink::new(SinkMode::Metrics, metrics));

        let end = stream.run(&b""[..]).await.unwrap();
        assert_eq!(end, StreamEnd::default());
    }

    #[tokio::test]
    async fn later_lines_win() {
        let metrics = PingMetrics::new().unwrap();
        let mut stream =
            StreamLoop::new(LineParser::new(), ObservationSink::new(SinkMode::Metrics, metrics.clone()));

        let input: &[u8] = b"gw : xmt/rcv/%loss = 5/5/0%, min/avg/max = 1/2/3\n\
            gw : xmt/rcv/%loss = 5/4/20%, min/avg/max = 4/5/6\n";
        stream.run(input).await.unwrap();

        assert_eq!(metrics.get(Field::Min, "gw"), Some(4.0));
        assert_eq!(metrics.get(Field::Lost, "gw"), Some(20.0));
    }
}
