// src/core/html.rs
// Case-insensitive scanning for SGML/HTML blocks such as
// `<DOCUMENT> … </DOCUMENT>` in EDGAR submissions.

/// ASCII-only lowercase. Byte offsets stay valid against the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Iterator over complete `open … close` blocks, case-insensitive on the tag
/// text. Each item is the inner slice (between the opening tag's `>` and the
/// closing tag). Lowercases the haystack once.
pub struct TagBlocks<'a> {
    src: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(src: &'a str, open: &str, close: &str) -> Self {
        Self { src, lc: to_lower(src), open: to_lower(open), close: to_lower(close), pos: 0 }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.lc.get(self.pos..)?.find(&self.open)? + self.pos;
        let after_open = self.src[start..].find('>')? + start + 1;
        let inner_len = self.lc[after_open..].find(&self.close)?;
        self.pos = after_open + inner_len + self.close.len();
        Some(&self.src[after_open..after_open + inner_len])
    }
}

/// Value of an unclosed SGML header tag like `<TYPE>EX-10.1`: the text after
/// the tag up to the next newline or `<`, trimmed.
pub fn tag_value<'a>(block: &'a str, tag: &str) -> Option<&'a str> {
    let at = block.find(tag)? + tag.len();
    let rest = &block[at..];
    let end = rest.find(|c: char| c == '\n' || c == '<').unwrap_or(rest.len());
    let v = rest[..end].trim();
    (!v.is_empty()).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_blocks_case_insensitive() {
        let s = "x<Document>one</DOCUMENT>y<document>two</document>z<DOCUMENT>open";
        let got: Vec<&str> = TagBlocks::new(s, "<DOCUMENT>", "</DOCUMENT>").collect();
        assert_eq!(got, vec!["one", "two"]);
    }

    #[test]
    fn tag_value_stops_at_newline_or_tag() {
        let b = "\n<TYPE>EX-10.1\n<SEQUENCE>2\n<FILENAME>d123.htm<TEXT>";
        assert_eq!(tag_value(b, "<TYPE>"), Some("EX-10.1"));
        assert_eq!(tag_value(b, "<FILENAME>"), Some("d123.htm"));
        assert_eq!(tag_value(b, "<DESCRIPTION>"), None);
    }
}
