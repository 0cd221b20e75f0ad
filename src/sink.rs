// src/sink.rs

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::PracticeArea;
use crate::config::consts::DOC_EXT;
use crate::error::{CorpusError, Result};
use crate::label::DocLabel;
use crate::matter::matter_dir_name;

pub struct LabeledDocument<'a> {
    pub text: &'a str,
    pub label: DocLabel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub hero: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedMatter {
    pub area: PracticeArea,
    pub index: usize,
    pub dir: PathBuf,
    pub files: Vec<SavedFile>,
}

/// Where closed matters end up.
pub trait PersistenceSink {
    fn save(&mut self, area: PracticeArea, index: usize, docs: &[LabeledDocument<'_>]) -> Result<SavedMatter>;
}

/// `<root>/<Area>_<n>/<label>.txt`, one file per document.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PersistenceSink for DirectorySink {
    fn save(&mut self, area: PracticeArea, index: usize, docs: &[LabeledDocument<'_>]) -> Result<SavedMatter> {
        let dir = self.root.join(matter_dir_name(area, index));
        ensure_directory(&dir)?;

        let mut taken: HashSet<String> = HashSet::new();
        let mut files = Vec::with_capacity(docs.len());

        for doc in docs {
            let path = resolve_doc_path(&dir, &doc.label, &mut taken);
            fs::write(&path, doc.text).map_err(|e| CorpusError::io(&path, e))?;
            files.push(SavedFile { path, hero: doc.label.is_hero() });
        }

        Ok(SavedMatter { area, index, dir, files })
    }
}

/// `<stem>.txt`, or `<stem>_<index>.txt` when that name was already written in
/// this matter or exists on disk. If the suffixed name is taken too, a counter
/// is appended (`<stem>_<index>_2.txt`, …) until a free name turns up.
pub fn resolve_doc_path(dir: &Path, label: &DocLabel, taken: &mut HashSet<String>) -> PathBuf {
    let is_free = |name: &str, taken: &HashSet<String>| !taken.contains(name) && !dir.join(name).exists();

    let mut name = format!("{}.{DOC_EXT}", label.stem);
    if !is_free(&name, taken) {
        let base = label.suffixed();
        name = format!("{base}.{DOC_EXT}");
        let mut n = 2;
        while !is_free(&name, taken) {
            name = format!("{base}_{n}.{DOC_EXT}");
            n += 1;
        }
    }
    let path = dir.join(&name);
    taken.insert(name);
    path
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CorpusError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    fs::create_dir_all(dir).map_err(|e| CorpusError::io(dir, e))
}
