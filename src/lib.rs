//! Multi-faceted teacher evaluation score calculator.
//!
//! [`scoring`] holds the pure score engine. [`config`], [`output`] and
//! [`telemetry`] are the command-line collaborators around it.

pub mod config;
pub mod output;
pub mod scoring;
pub mod telemetry;
