//! `kairos` - command-line calculator for non-calendar time spans
//!
//! This library holds the argument definitions, command handlers, settings
//! loader and logging setup behind the `kairos` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
