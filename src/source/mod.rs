// src/source/mod.rs
//! Document sources.
//!
//! A source is any iterator of [`Document`]s. The runner pulls one document
//! at a time and never asks for a replay, so sources are free to stream.
//! Per-file and per-record failures are logged and skipped inside the source;
//! only opening a source can fail.

pub mod dir;
pub mod filing;
pub mod jsonl;

pub use dir::DirSource;
pub use filing::{FilingSource, Section, split_submission};
pub use jsonl::JsonlSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    /// Where the text came from (path, `path:line`, …). Only used for logs.
    pub origin: String,
}

impl Document {
    pub fn new(text: impl Into<String>, origin: impl Into<String>) -> Self {
        Self { text: text.into(), origin: origin.into() }
    }
}

pub trait DocumentSource: Iterator<Item = Document> {}

impl<T: Iterator<Item = Document>> DocumentSource for T {}
