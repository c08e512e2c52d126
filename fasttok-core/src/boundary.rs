//! Word-boundary segmentation
//!
//! Text is split into alternating runs: scripts written without word
//! separators (`\p{Lo}` runs) are emitted whole, everything else goes
//! through UAX #29 word-boundary detection. Every emitted token is followed
//! by a single space; the caller trims the final one.

use crate::tables::{tables, DASH, JOIN_MARKER};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Segment `text[range]`, appending space-terminated tokens to `out`
///
/// Neighbor lookups for hyphens see the whole of `text`, so a hyphen at the
/// edge of `range` still joins to whatever precedes or follows it.
pub(crate) fn segment_range(text: &str, range: Range<usize>, join_dashes: bool, out: &mut String) {
    let base = range.start;
    let mut last = 0;

    for run in tables().other_letter_run.find_iter(&text[range.clone()]) {
        break_range(text, base + last..base + run.start(), join_dashes, out);
        out.push_str(run.as_str());
        out.push(' ');
        last = run.end();
    }
    break_range(text, base + last..range.end, join_dashes, out);
}

/// Apply word-boundary detection on `text[range]`
fn break_range(text: &str, range: Range<usize>, join_dashes: bool, out: &mut String) {
    if range.is_empty() {
        return;
    }
    let whitespace = &tables().whitespace;

    for (offset, piece) in text[range.clone()].split_word_bound_indices() {
        let starts_with_space = piece.chars().next().is_some_and(|c| whitespace.contains_char(c));
        if starts_with_space {
            continue;
        }

        if join_dashes && piece == DASH {
            let start = range.start + offset;
            let joins = |c: char| !whitespace.contains_char(c);

            if text[..start].chars().next_back().is_some_and(joins) {
                out.push(JOIN_MARKER);
            }
            out.push_str(DASH);
            if text[start + DASH.len()..].chars().next().is_some_and(joins) {
                out.push(JOIN_MARKER);
            }
            out.push(' ');
            continue;
        }

        let piece = piece.trim();
        if !piece.is_empty() {
            out.push_str(piece);
            out.push(' ');
        }
    }
}
