// src/source/filing.rs
// EDGAR `full-submission.txt` files: SGML wrappers around one or more
// `<DOCUMENT>` sections (the filing body plus its exhibits).

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::Document;
use crate::config::consts::{MIN_SECTION_LEN, SUBMISSION_FILE};
use crate::core::html::{TagBlocks, tag_value};
use crate::core::sanitize::safe_file_name;
use crate::core::{MarkupSanitizer, TextSanitizer};
use crate::error::{CorpusError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// `<TYPE>` value, e.g. `EX-10.1`.
    pub doc_type: String,
    /// `<FILENAME>` value, e.g. `d123456dex101.htm`.
    pub file_name: String,
    /// Cleaned body.
    pub text: String,
}

impl Section {
    /// `<TYPE>_<FILENAME>` with unsafe characters replaced.
    pub fn name(&self) -> String {
        format!("{}_{}", self.doc_type, safe_file_name(&self.file_name))
    }
}

/// Split a submission into cleaned sections, keeping only those longer than
/// the minimum section length. Sections missing `<TYPE>`/`<FILENAME>` get
/// positional names.
pub fn split_submission(content: &str, sanitizer: &dyn TextSanitizer) -> Vec<Section> {
    TagBlocks::new(content, "<DOCUMENT>", "</DOCUMENT>")
        .enumerate()
        .filter_map(|(i, block)| {
            let text = sanitizer.sanitize(block);
            if text.chars().count() <= MIN_SECTION_LEN {
                return None;
            }
            Some(Section {
                doc_type: tag_value(block, "<TYPE>").map_or_else(|| format!("doc_{i}"), String::from),
                file_name: tag_value(block, "<FILENAME>")
                    .map_or_else(|| format!("document_{i}.txt"), String::from),
                text,
            })
        })
        .collect()
}

/// Walks an EDGAR download tree and yields every qualifying section of every
/// `full-submission.txt`. A submission without sections yields its whole
/// cleaned text instead.
pub struct FilingSource {
    walk: walkdir::IntoIter,
    sanitizer: Box<dyn TextSanitizer>,
    pending: VecDeque<Document>,
}

impl FilingSource {
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(CorpusError::io(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            ));
        }
        Ok(Self {
            walk: WalkDir::new(root).sort_by_file_name().into_iter(),
            sanitizer: Box::new(MarkupSanitizer),
            pending: VecDeque::new(),
        })
    }

    pub fn with_sanitizer(mut self, sanitizer: Box<dyn TextSanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    fn load(&mut self, path: &Path) {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => { loge!("Filing: cannot read {}: {e}", path.display()); return; }
        };
        let content = String::from_utf8_lossy(&bytes);
        let sections = split_submission(&content, self.sanitizer.as_ref());
        let origin = path.display().to_string();

        if sections.is_empty() {
            logd!("Filing: {origin} has no sections, using full submission");
            self.pending.push_back(Document::new(self.sanitizer.sanitize(&content), origin));
            return;
        }
        logd!("Filing: {origin} → {} sections", sections.len());
        for s in sections {
            let name = s.name();
            self.pending.push_back(Document::new(s.text, format!("{origin}#{name}")));
        }
    }
}

impl Iterator for FilingSource {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        loop {
            if let Some(doc) = self.pending.pop_front() {
                return Some(doc);
            }
            let entry = match self.walk.next()? {
                Ok(e) => e,
                Err(e) => { loge!("Filing: {e}"); continue; }
            };
            if entry.file_type().is_file() && entry.file_name() == SUBMISSION_FILE {
                self.load(entry.path());
            }
        }
    }
}
