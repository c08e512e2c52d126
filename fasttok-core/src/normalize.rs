//! Dual-form Unicode normalization
//!
//! The whole buffer is first brought to NFC. Runs of word characters and
//! whitespace are then folded further with NFKC, while punctuation and
//! symbol runs keep their NFC form so that compatibility folding cannot
//! alter them.

use crate::tables::tables;
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::sync::LazyLock;

static NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);
static NFKC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Normalize `text`, appending the result to `out`
///
/// `scratch` holds the intermediate NFC form and is overwritten.
pub(crate) fn normalize_into(text: &str, scratch: &mut String, out: &mut String) {
    scratch.clear();
    scratch.push_str(&NFC.normalize(text));

    let mut last = 0;
    for run in tables().word_and_space.find_iter(scratch) {
        out.push_str(&scratch[last..run.start()]);
        out.push_str(&NFKC.normalize(run.as_str()));
        last = run.end();
    }
    out.push_str(&scratch[last..]);
}
