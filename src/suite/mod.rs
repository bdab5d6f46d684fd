//! Perft suites: files of positions with expected leaf counts per depth.
//!
//! Each non-blank, non-comment line reads
//! `<fen>;D1 <count>;D2 <count>;...`. A suite is loaded with [`load_suite`],
//! evaluated with [`run_suite`] and summarised by a [`SuiteReport`].

mod config;
mod error;
mod parse;
mod runner;

pub use config::{Discipline, SuiteConfig, DEFAULT_SUITE_PATH};
pub use error::{ConfigError, SuiteError};
pub use parse::{load_suite, parse_suite, parse_suite_line, SuiteEntry};
pub use runner::{run_line, run_suite, DepthResult, LineResult, SuiteReport};
