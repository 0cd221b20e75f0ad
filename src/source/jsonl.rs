// src/source/jsonl.rs
// JSON Lines corpus dumps, one record per line, optionally gzip'd.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use serde_json::{Map, Value};
use walkdir::WalkDir;

use super::Document;
use crate::config::consts::DEFAULT_TEXT_FIELD;
use crate::error::{CorpusError, Result};

pub struct JsonlSource {
    files: std::vec::IntoIter<PathBuf>,
    field: String,
    current: Option<OpenFile>,
}

struct OpenFile {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    line_no: usize,
}

impl JsonlSource {
    /// `path` may be a single file or a directory of `.jsonl` / `.gz` files
    /// (walked in name order).
    pub fn open(path: &Path) -> Result<Self> {
        let files = if path.is_dir() {
            let mut out = Vec::new();
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_jsonl(entry.path()) {
                    out.push(entry.into_path());
                }
            }
            out
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            return Err(CorpusError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            ));
        };

        Ok(Self { files: files.into_iter(), field: s!(DEFAULT_TEXT_FIELD), current: None })
    }

    /// Read the text from `field` instead of `"text"`.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    fn open_next_file(&mut self) -> Option<()> {
        loop {
            let path = self.files.next()?;
            match open_reader(&path) {
                Ok(reader) => {
                    logd!("JSONL: reading {}", path.display());
                    self.current = Some(OpenFile { path, reader, line_no: 0 });
                    return Some(());
                }
                Err(e) => loge!("JSONL: cannot open {}: {e}", path.display()),
            }
        }
    }
}

impl Iterator for JsonlSource {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        let mut buf = Vec::new();
        loop {
            if self.current.is_none() {
                self.open_next_file()?;
            }
            let file = self.current.as_mut()?;

            buf.clear();
            match file.reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.current = None;
                    continue;
                }
                Ok(_) => {
                    file.line_no += 1;
                    if buf.iter().all(|b| b.is_ascii_whitespace()) {
                        continue;
                    }
                    let origin = format!("{}:{}", file.path.display(), file.line_no);
                    match record_text(&buf, &self.field) {
                        Ok(Some(text)) => return Some(Document::new(text, origin)),
                        Ok(None) => logd!("JSONL: {origin} has no string field '{}'", self.field),
                        Err(e) => loge!("JSONL: {origin}: {e}"),
                    }
                }
                Err(e) => {
                    loge!("JSONL: read error in {}: {e}", file.path.display());
                    self.current = None;
                }
            }
        }
    }
}

fn is_jsonl(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    name.ends_with(".jsonl") || name.ends_with(".gz")
}

fn open_reader(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let gz = path.extension().and_then(|e| e.to_str()) == Some("gz");
    Ok(if gz {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    })
}

fn record_text(line: &[u8], field: &str) -> serde_json::Result<Option<String>> {
    let mut obj: Map<String, Value> = serde_json::from_slice(line)?;
    Ok(match obj.remove(field) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
