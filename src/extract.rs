// src/extract.rs
// Turn a raw EDGAR download tree into cleaned text files, one per section:
//   <raw>/<ticker>/<form>/<accession>/full-submission.txt
//     → <out>/<ticker>/<form>_<accession>/<TYPE>_<FILENAME>.txt

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::consts::{DOC_EXT, MAX_SECTION_NAME, SUBMISSION_FILE};
use crate::core::sanitize::truncate_chars;
use crate::core::{MarkupSanitizer, TextSanitizer};
use crate::error::{CorpusError, Result};
use crate::progress::Progress;
use crate::sink::ensure_directory;
use crate::source::split_submission;

const FALLBACK_NAME: &str = "full_submission_cleaned";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub submissions: usize,
    pub files_written: Vec<PathBuf>,
    pub bytes_written: u64,
}

/// Output directory for one submission, from its position in the tree.
/// `None` when the file isn't at least three levels below `raw_root`.
pub fn submission_out_dir(raw_root: &Path, submission: &Path, out_root: &Path) -> Option<PathBuf> {
    let rel = submission.strip_prefix(raw_root).ok()?;
    let parts: Vec<_> = rel.parent()?.components().map(|c| c.as_os_str().to_string_lossy()).collect();
    let [.., ticker, form, accession] = parts.as_slice() else { return None };
    Some(out_root.join(&**ticker).join(format!("{form}_{accession}")))
}

/// `<name>.txt`, name cut to the section-name limit.
pub fn section_file_name(name: &str) -> String {
    format!("{}.{DOC_EXT}", truncate_chars(name, MAX_SECTION_NAME))
}

pub fn extract_filings(
    raw_root: &Path,
    out_root: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ExtractSummary> {
    if !raw_root.is_dir() {
        return Err(CorpusError::io(
            raw_root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }
    ensure_directory(out_root)?;

    let sanitizer = MarkupSanitizer;
    let mut summary = ExtractSummary::default();

    for entry in WalkDir::new(raw_root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => { loge!("Extract: {e}"); continue; }
        };
        if !entry.file_type().is_file() || entry.file_name() != SUBMISSION_FILE {
            continue;
        }
        let Some(out_dir) = submission_out_dir(raw_root, entry.path(), out_root) else {
            logw!("Extract: unexpected layout, skipping {}", entry.path().display());
            continue;
        };

        let bytes = match fs::read(entry.path()) {
            Ok(b) => b,
            Err(e) => { loge!("Extract: cannot read {}: {e}", entry.path().display()); continue; }
        };
        let content = String::from_utf8_lossy(&bytes);
        ensure_directory(&out_dir)?;
        summary.submissions += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("{}:", out_dir.display()));
        }

        let sections = split_submission(&content, &sanitizer);
        let outputs: Vec<(String, String)> = if sections.is_empty() {
            vec![(section_file_name(FALLBACK_NAME), sanitizer.sanitize(&content))]
        } else {
            sections.into_iter().map(|s| (section_file_name(&s.name()), s.text)).collect()
        };

        for (name, text) in outputs {
            let path = out_dir.join(&name);
            fs::write(&path, &text).map_err(|e| CorpusError::io(&path, e))?;
            logf!("    + {} ({:.1} KB)", truncate_chars(&name, 50), text.len() as f64 / 1024.0);
            summary.bytes_written += text.len() as u64;
            summary.files_written.push(path);
        }
    }

    logf!(
        "Extract complete: {} submissions, {} files, {:.1} MB",
        summary.submissions,
        summary.files_written.len(),
        summary.bytes_written as f64 / (1024.0 * 1024.0)
    );
    Ok(summary)
}
