//! The segmenter engine value
//!
//! A [`Segmenter`] holds one configuration flag and a few scratch buffers
//! reused across calls. The classification tables it reads are process-wide
//! and immutable, so any number of instances can run side by side; a single
//! instance is used by one thread at a time (`&mut self`), and each worker
//! takes its own via [`Clone`].

use crate::{boundary, desegment, normalize, protect};

/// Text normalizer, segmenter and desegmenter
#[derive(Debug, Default)]
pub struct Segmenter {
    protected_dash_split: bool,
    /// Holds normalized text between the two stages of `normalize_and_segment`
    inbuf: String,
    /// Intermediate NFC form used by the normalizer
    tempbuf: String,
}

impl Segmenter {
    /// Create a segmenter
    ///
    /// With `protected_dash_split` enabled, hyphens are annotated with join
    /// markers and delimiter-wrapped spans pass through verbatim.
    pub fn new(protected_dash_split: bool) -> Self {
        Self {
            protected_dash_split,
            inbuf: String::new(),
            tempbuf: String::new(),
        }
    }

    /// Create a builder
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Whether protected dash splitting is enabled
    pub fn protected_dash_split(&self) -> bool {
        self.protected_dash_split
    }

    /// Normalize word runs to NFKC and everything else to NFC
    pub fn normalize(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.normalize_to(text, &mut out);
        out
    }

    /// Like [`normalize`](Self::normalize), writing into `out`
    pub fn normalize_to(&mut self, text: &str, out: &mut String) {
        out.clear();
        normalize::normalize_into(text, &mut self.tempbuf, out);
    }

    /// Split text into space-delimited tokens
    ///
    /// ```
    /// use fasttok_core::Segmenter;
    ///
    /// let mut segmenter = Segmenter::new(true);
    /// assert_eq!(segmenter.segment("Hello World!"), "Hello World !");
    /// assert_eq!(
    ///     segmenter.segment("It's 2.5-3 miles away."),
    ///     "It's 2.5 @-@ 3 miles away ."
    /// );
    /// ```
    pub fn segment(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        self.segment_to(text, &mut out);
        out
    }

    /// Like [`segment`](Self::segment), writing into `out`
    pub fn segment_to(&mut self, text: &str, out: &mut String) {
        out.clear();
        self.segment_append(text, out);
        trim_in_place(out);
    }

    /// Normalize, then segment the normalized text
    pub fn normalize_and_segment(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        self.normalize_and_segment_to(text, &mut out);
        out
    }

    /// Like [`normalize_and_segment`](Self::normalize_and_segment), writing into `out`
    pub fn normalize_and_segment_to(&mut self, text: &str, out: &mut String) {
        let mut normalized = std::mem::take(&mut self.inbuf);
        normalized.clear();
        normalize::normalize_into(text, &mut self.tempbuf, &mut normalized);

        out.clear();
        self.segment_append(&normalized, out);
        trim_in_place(out);
        self.inbuf = normalized;
    }

    /// Rebuild natural spacing from a token stream
    ///
    /// ```
    /// use fasttok_core::Segmenter;
    ///
    /// let mut segmenter = Segmenter::default();
    /// assert_eq!(segmenter.desegment("He said \" hello \" ."), "He said \"hello\".");
    /// ```
    pub fn desegment(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.desegment_to(text, &mut out);
        out
    }

    /// Like [`desegment`](Self::desegment), writing into `out`
    pub fn desegment_to(&mut self, text: &str, out: &mut String) {
        out.clear();
        desegment::desegment_into(text, out);
    }

    fn segment_append(&self, text: &str, out: &mut String) {
        if self.protected_dash_split {
            protect::protect_and_segment(text, out);
        } else {
            boundary::segment_range(text, 0..text.len(), false, out);
        }
    }
}

/// Same configuration, fresh scratch buffers
impl Clone for Segmenter {
    fn clone(&self) -> Self {
        Self::new(self.protected_dash_split)
    }
}

/// Builder for [`Segmenter`]
#[derive(Debug, Default, Clone)]
pub struct SegmenterBuilder {
    protected_dash_split: bool,
}

impl SegmenterBuilder {
    /// Enable join markers and protected spans
    pub fn protected_dash_split(mut self, enabled: bool) -> Self {
        self.protected_dash_split = enabled;
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Segmenter {
        Segmenter::new(self.protected_dash_split)
    }
}

fn trim_in_place(out: &mut String) {
    let end = out.trim_end().len();
    out.truncate(end);
    let leading = out.len() - out.trim_start().len();
    if leading > 0 {
        out.replace_range(..leading, "");
    }
}
