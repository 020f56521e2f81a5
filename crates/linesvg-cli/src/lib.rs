//! Command-line interface for linesvg
//!
//! This crate provides the `linesvg` binary, which turns every line of a
//! text file into its own SVG image. The pieces live here so the
//! integration tests and the binary share them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod plan;
pub mod writer;

pub use cli::Cli;
pub use commands::convert::{run, RunSummary};
pub use config::Config;
pub use plan::OutputPlan;
