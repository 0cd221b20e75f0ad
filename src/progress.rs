// src/progress.rs
use crate::classify::PracticeArea;
use crate::runner::RunSummary;
use crate::sink::SavedMatter;

/// Lightweight progress reporting for a scan.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first document is pulled.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each document, with completed-matter counts per area.
    fn doc_scanned(&mut self, _scanned: u64, _tallies: &[(PracticeArea, usize)]) {}

    fn matter_saved(&mut self, _saved: &SavedMatter) {}

    /// Called at the end, after the partial-matter flush.
    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Logs a tally line every `every` documents.
pub struct LogProgress {
    every: u64,
}

impl LogProgress {
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1) }
    }
}

pub fn format_tallies(tallies: &[(PracticeArea, usize)]) -> String {
    tallies
        .iter()
        .map(|(a, n)| format!("{}: {n}", a.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Progress for LogProgress {
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn doc_scanned(&mut self, scanned: u64, tallies: &[(PracticeArea, usize)]) {
        if scanned % self.every == 0 {
            logf!("[Progress] {scanned} docs scanned | {}", format_tallies(tallies));
        }
    }
}
