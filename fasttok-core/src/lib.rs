//! Text normalization and tokenization engine
//!
//! Converts raw text into a canonical, space-delimited token stream and
//! approximately inverts that transform. The pieces, leaves first:
//!
//! - [`tables`]: process-wide character classes and run matchers
//! - `normalize`: NFC everywhere, NFKC on word and whitespace runs
//! - `boundary`: UAX #29 word splitting with unsplit `\p{Lo}` runs and
//!   hyphen join markers
//! - `protect`: verbatim passthrough of delimiter-wrapped spans
//! - [`desegment`]: class-driven reconstruction of natural spacing
//!
//! [`Segmenter`] ties them together behind four operations.
//!
//! # Example
//!
//! ```rust
//! use fasttok_core::Segmenter;
//!
//! let mut segmenter = Segmenter::new(true);
//! let tokens = segmenter.normalize_and_segment("A state-of-the-art ﬁx.");
//! assert_eq!(tokens, "A state @-@ of @-@ the @-@ art fix .");
//! assert_eq!(segmenter.desegment(&tokens), "A state-of-the-art fix.");
//! ```

mod boundary;
pub mod desegment;
mod normalize;
mod protect;
pub mod segmenter;
pub mod tables;

pub use desegment::TokenClass;
pub use segmenter::{Segmenter, SegmenterBuilder};
pub use tables::{CharClass, Tables, DASH, JOIN_MARKER, PROTECT_DELIMITER};
