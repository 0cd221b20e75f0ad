// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

/// Raw markup in, plain text out. Best-effort and lossy.
pub trait TextSanitizer {
    fn sanitize(&self, raw: &str) -> String;
}

/// Regex-driven HTML/SGML stripper tuned for EDGAR filings.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupSanitizer;

fn re(pat: &str) -> Regex {
    Regex::new(pat).expect("static sanitizer pattern")
}

// Dropped with their contents
static BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        re(r"(?s)<SEC-HEADER>.*?</SEC-HEADER>"),
        re(r"(?s)<IMS-HEADER>.*?</IMS-HEADER>"),
        re(r"<\?xml[^>]*\?>"),
        re(r"(?is)<script[^>]*>.*?</script>"),
        re(r"(?is)<style[^>]*>.*?</style>"),
    ]
});

static NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| re(r"&#\d+;"));

// Block-level closers become layout whitespace
static BREAKS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (re(r"(?i)<br\s*/?>"), "\n"),
        (re(r"(?i)</p>"), "\n\n"),
        (re(r"(?i)</div>"), "\n"),
        (re(r"(?i)</tr>"), "\n"),
        (re(r"(?i)</td>"), "\t"),
        (re(r"(?i)</li>"), "\n"),
    ]
});

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| re(r"<[^>]+>"));

static WHITESPACE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (re(r"\n\s*\n\s*\n+"), "\n\n"),
        (re(r"[ \t]+"), " "),
        (re(r" +\n"), "\n"),
    ]
});

impl TextSanitizer for MarkupSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let mut text = raw.to_string();

        for r in BLOCKS.iter() {
            text = r.replace_all(&text, "").into_owned();
        }

        text = normalize_entities(&text);
        text = NUMERIC_ENTITY.replace_all(&text, " ").into_owned();

        for (r, with) in BREAKS.iter() {
            text = r.replace_all(&text, *with).into_owned();
        }

        text = ANY_TAG.replace_all(&text, "").into_owned();

        for (r, with) in WHITESPACE.iter() {
            text = r.replace_all(&text, *with).into_owned();
        }

        text.trim().to_string()
    }
}

/// Named entities common in filings. `&amp;` goes first, so `&amp;lt;`
/// decodes all the way to `<`.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// First `n` chars on one line, for log output.
pub fn snippet(s: &str, n: usize) -> String {
    s.chars().take(n).map(|c| if c == '\n' || c == '\r' { ' ' } else { c }).collect()
}

/// Keep `[A-Za-z0-9_.-]`, replace anything else with `_`.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' { c } else { '_' })
        .collect()
}

/// Cut to at most `max` chars.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_file_name_replaces_odd_chars() {
        assert_eq!(safe_file_name("EX-10.1 d12 (final).htm"), "EX-10.1_d12__final_.htm");
    }

    #[test]
    fn snippet_is_single_line() {
        assert_eq!(snippet("CREDIT\nAGREEMENT dated", 16), "CREDIT AGREEMENT");
    }

    #[test]
    fn truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("ééé", 2), "éé");
        assert_eq!(truncate_chars("ab", 5), "ab");
    }
}
