//! Parsing of `fping -l` summary lines.
//!
//! A summary line looks like
//!
//! ```text
//! example.org : xmt/rcv/%loss = 5/5/0%, min/avg/max = 1.2/1.5/2.0
//! ```
//!
//! Token 0 is the host, token 4 the `xmt/rcv/loss` triple and, for lines with
//! more than five tokens, token 7 the `min/avg/max` triple. Hosts that did
//! not answer have no latency segment.

use std::fmt;

use tracing::debug;

use crate::observation::RawObservation;

const HOST_TOKEN: usize = 0;
const LOSS_TOKEN: usize = 4;
const LATENCY_TOKEN: usize = 7;
const LATENCY_MIN_TOKENS: usize = 6;

/// Why a line produced no observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewTokens { found: usize },
    MissingLossField,
    MalformedLoss { field: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewTokens { found } => write!(f, "too few tokens ({found})"),
            SkipReason::MissingLossField => write!(f, "no loss field"),
            SkipReason::MalformedLoss { field } => write!(f, "malformed loss field {field:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Observation(RawObservation),
    Skipped(SkipReason),
}

/// Stateful parser for the probe output.
///
/// The latency texts of the last line that carried a valid `min/avg/max`
/// segment are kept and reused for lines without one, so a host that stops
/// answering keeps reporting its previous latencies next to the new loss.
#[derive(Debug, Default)]
pub struct LineParser {
    min: String,
    avg: String,
    max: String,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, line: &str) -> ParsedLine {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return skip(line, SkipReason::TooFewTokens { found: tokens.len() });
        }

        let Some(loss) = tokens.get(LOSS_TOKEN) else {
            return skip(line, SkipReason::MissingLossField);
        };
        let Some(lost) = third_part(loss) else {
            return skip(line, SkipReason::MalformedLoss { field: (*loss).to_owned() });
        };
        let lost = lost.trim_end_matches(['%', ',']);

        if tokens.len() >= LATENCY_MIN_TOKENS {
            match tokens.get(LATENCY_TOKEN).and_then(|latency| split_triple(latency)) {
                Some([min, avg, max]) => {
                    self.min = min.to_owned();
                    self.avg = avg.to_owned();
                    self.max = max.to_owned();
                }
                None => debug!(line, "latency segment unusable, keeping previous values"),
            }
        }

        ParsedLine::Observation(RawObservation {
            host: tokens[HOST_TOKEN].to_owned(),
            min: self.min.clone(),
            avg: self.avg.clone(),
            max: self.max.clone(),
            lost: lost.to_owned(),
        })
    }
}

fn skip(line: &str, reason: SkipReason) -> ParsedLine {
    debug!(line, %reason, "skipping probe line");
    ParsedLine::Skipped(reason)
}

fn slash_parts(token: &str) -> impl Iterator<Item = &str> {
    token.split('/').filter(|part| !part.is_empty())
}

fn third_part(token: &str) -> Option<&str> {
    slash_parts(token).nth(2)
}

fn split_triple(token: &str) -> Option<[&str; 3]> {
    let mut parts = slash_parts(token);
    Some([parts.next()?, parts.next()?, parts.next()?])
}
