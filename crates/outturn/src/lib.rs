//! Core library for the outturn standings service.
//!
//! Records construction project outturns, rates completed projects
//! against their peers, and orders the full list for presentation. The
//! HTTP process that serves this lives in the `outturn-api` crate.

pub mod config;
pub mod error;
pub mod projects;
pub mod telemetry;
