//! Observability module
//!
//! Structured logging for `kairos` invocations.

pub mod logging;

pub use logging::{LogFormat, init_logging};
