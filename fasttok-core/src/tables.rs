//! Character classification tables
//!
//! All tables are compiled once on first use and shared read-only by every
//! segmenter instance and every worker thread. Nothing here is ever mutated
//! after construction.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel delimiting a protected span (ASCII unit separator)
pub const PROTECT_DELIMITER: char = '\u{1F}';

/// Marker placed next to a hyphen that must rejoin its neighbor
pub const JOIN_MARKER: char = '@';

/// The only punctuation that receives join markers
pub const DASH: &str = "-";

/// A set of code points backed by a single-character pattern
#[derive(Debug)]
pub struct CharClass {
    pattern: Regex,
}

impl CharClass {
    fn new(class: &str) -> Self {
        let pattern = Regex::new(&format!("^{class}$"))
            .unwrap_or_else(|e| panic!("invalid character class {class}: {e}"));
        Self { pattern }
    }

    /// Check whether a code point belongs to this class
    #[inline]
    pub fn contains_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.pattern.is_match(ch.encode_utf8(&mut buf))
    }

    /// Check whether a token is exactly one code point of this class
    ///
    /// Multi-character tokens never match, whatever their content.
    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.contains_char(ch),
            _ => false,
        }
    }
}

/// Shared classification tables and run matchers
#[derive(Debug)]
pub struct Tables {
    /// Closing punctuation that attaches to the token on its left
    pub left_shift: CharClass,
    /// Opening brackets, initial quotes and currency that attach to the right
    pub right_shift: CharClass,
    /// Connectors that attach on both sides
    pub both_shift: CharClass,
    /// Any numeric code point
    pub numeric: CharClass,
    /// Separators plus every White_Space code point
    pub whitespace: CharClass,
    /// Runs of scripts written without word separators
    pub other_letter_run: Regex,
    /// A delimiter pair and everything between it
    pub protected_span: Regex,
    /// Word characters and whitespace, the scope of compatibility folding
    pub word_and_space: Regex,
}

impl Tables {
    fn build() -> Self {
        Self {
            left_shift: CharClass::new(r"[\p{Pf}\p{Pe},.?!:;%]"),
            right_shift: CharClass::new(r"[\p{Sc}\p{Pi}\p{Ps}¿¡]"),
            both_shift: CharClass::new(r"[|/\\]"),
            numeric: CharClass::new(r"\p{N}"),
            whitespace: CharClass::new(r"[\p{Z}\s]"),
            other_letter_run: compile(r"(?:\p{Lo}[\p{Lm}\p{Mn}\p{Sk}]*)+"),
            protected_span: compile(r"\x1F[^\x1F]*\x1F"),
            word_and_space: compile(r"[\w\s]+"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {pattern}: {e}"))
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// Access the process-wide tables, building them on first call
#[inline]
pub fn tables() -> &'static Tables {
    &TABLES
}
