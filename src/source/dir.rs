// src/source/dir.rs
// Plain text and HTML files under a directory tree.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::Document;
use crate::core::{MarkupSanitizer, TextSanitizer};
use crate::error::{CorpusError, Result};

pub struct DirSource {
    walk: walkdir::IntoIter,
    sanitizer: Box<dyn TextSanitizer>,
}

impl DirSource {
    /// Walks `root` in file-name order. `.txt` files pass through untouched,
    /// `.htm`/`.html` go through the sanitizer.
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
        })
    }

    pub fn with_sanitizer(mut self, sanitizer: Box<dyn TextSanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind { Text, Markup }

fn kind_of(path: &Path) -> Option<Kind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "txt" => Some(Kind::Text),
        "htm" | "html" => Some(Kind::Markup),
        _ => None,
    }
}

impl Iterator for DirSource {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        loop {
            let entry = match self.walk.next()? {
                Ok(e) => e,
                Err(e) => { loge!("Dir: {e}"); continue; }
            };
            if !entry.file_type().is_file() { continue; }
            let Some(kind) = kind_of(entry.path()) else { continue };

            let bytes = match fs::read(entry.path()) {
                Ok(b) => b,
                Err(e) => { loge!("Dir: cannot read {}: {e}", entry.path().display()); continue; }
            };
            let raw = String::from_utf8_lossy(&bytes);
            let text = match kind {
                Kind::Text => raw.into_owned(),
                Kind::Markup => self.sanitizer.sanitize(&raw),
            };
            return Some(Document::new(text, entry.path().display().to_string()));
        }
    }
}
