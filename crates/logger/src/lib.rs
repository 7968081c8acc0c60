//! Shared tracing setup for the promping binaries.

mod subscriber;

pub use subscriber::{LogFormat, build_filter, init as init_tracing, init_with, init_with_level};
