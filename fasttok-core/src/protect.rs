//! Protected-span passthrough
//!
//! A span wrapped in a pair of [`PROTECT_DELIMITER`] characters is copied to
//! the output verbatim, with its delimiters stripped, and never reaches the
//! boundary detector. Spans pair up left to right without nesting; a
//! trailing unpaired delimiter is ordinary text.
//!
//! Span interiors are not re-spaced: runs of spaces inside a span survive
//! into the output, so protected text is the one place where tokens may be
//! separated by more than a single space.
//!
//! [`PROTECT_DELIMITER`]: crate::tables::PROTECT_DELIMITER

use crate::boundary::segment_range;
use crate::tables::{tables, PROTECT_DELIMITER};

/// Segment `text` around protected spans, appending to `out`
pub(crate) fn protect_and_segment(text: &str, out: &mut String) {
    let delimiter_len = PROTECT_DELIMITER.len_utf8();
    let mut last = 0;

    for span in tables().protected_span.find_iter(text) {
        segment_range(text, last..span.start(), true, out);

        let interior = &text[span.start() + delimiter_len..span.end() - delimiter_len];
        if !interior.is_empty() {
            out.push_str(interior);
            out.push(' ');
        }
        last = span.end();
    }
    segment_range(text, last..text.len(), true, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        let mut out = String::new();
        protect_and_segment(text, &mut out);
        out.trim_end().to_string()
    }

    #[test]
    fn test_span_is_verbatim() {
        assert_eq!(
            run("see \u{1F}http://x.org/a-b\u{1F} now!"),
            "see http://x.org/a-b now !"
        );
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(
            run("\u{1F}A.B\u{1F} and \u{1F}C,D\u{1F}"),
            "A.B and C,D"
        );
    }

    #[test]
    fn test_unpaired_delimiter_is_text() {
        let out = run("a \u{1F}b\u{1F} c \u{1F}d");
        assert!(out.starts_with("a b c"));
        assert!(out.ends_with('d'));
        assert!(out.contains(PROTECT_DELIMITER));
    }

    #[test]
    fn test_span_interior_spacing_is_kept() {
        assert_eq!(run("\u{1F} a  b \u{1F}x"), " a  b  x");
    }

    #[test]
    fn test_empty_span_emits_nothing() {
        assert_eq!(run("a \u{1F}\u{1F} b"), "a b");
    }

    #[test]
    fn test_without_spans_matches_plain_segmentation() {
        assert_eq!(run("a-b c."), "a @-@ b c .");
    }
}
