// tests/sanitize.rs
use legal_corpus::core::{MarkupSanitizer, TextSanitizer};
use pretty_assertions::assert_eq;

fn clean(s: &str) -> String {
    MarkupSanitizer.sanitize(s)
}

#[test]
fn drops_headers_and_code_blocks_with_contents() {
    let raw = "<SEC-HEADER>FILER: X\nCIK: 1</SEC-HEADER>\
               <?xml version=\"1.0\"?>\
               <SCRIPT type=\"x\">var a = 1;</SCRIPT>\
               <style>p { color: red }</style>\
               Body";
    assert_eq!(clean(raw), "Body");
}

#[test]
fn block_closers_become_layout() {
    assert_eq!(clean("<p>One</p><p>Two</p>"), "One\n\nTwo");
    assert_eq!(clean("a<br>b<BR/>c"), "a\nb\nc");
    assert_eq!(clean("<table><tr><td>x</td><td>y</td></tr></table>"), "x y");
}

#[test]
fn entities_decode() {
    assert_eq!(clean("Smith&nbsp;&amp;&nbsp;Jones"), "Smith & Jones");
    assert_eq!(clean("5 &lt; 6"), "5 < 6");
    assert_eq!(clean("a&#160;b"), "a b");
}

#[test]
fn whitespace_collapses() {
    assert_eq!(clean("a  \t  b   \n\n\n\nc"), "a b\n\nc");
}

#[test]
fn decoded_angle_brackets_are_stripped_as_tags() {
    assert_eq!(clean("Smith &lt;LLP&gt; Jones"), "Smith Jones");
}

#[test]
fn plain_text_is_untouched_apart_from_trim() {
    assert_eq!(clean("  CREDIT AGREEMENT dated as of May 1  "), "CREDIT AGREEMENT dated as of May 1");
}
