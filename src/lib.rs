// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod classify;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod label;
pub mod matter;
pub mod progress;
pub mod runner;
pub mod sink;
pub mod source;

pub use classify::{Classification, Classifier, PracticeArea};
pub use config::CorpusConfig;
pub use error::{CorpusError, Result};
pub use matter::{AggregatorState, Matter, MatterAggregator, MatterEntry};
pub use runner::{RunSummary, run};
