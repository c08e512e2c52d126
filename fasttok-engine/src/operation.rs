//! Operation selection

use crate::error::{EngineError, Result};
use fasttok_core::Segmenter;
use std::fmt;

/// The single-line operation a pipeline applies to every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Normalization only
    Normalize,
    /// Segmentation only
    Segment,
    /// Desegmentation of a token stream
    Desegment,
    /// Normalization followed by segmentation
    #[default]
    NormalizeAndSegment,
}

impl Operation {
    /// Resolve the command-line mode flags
    ///
    /// `norm_only` and `segm_only` conflict. Otherwise `norm_only` wins over
    /// `segm_only`, which wins over `desegment`.
    pub fn from_flags(norm_only: bool, segm_only: bool, desegment: bool) -> Result<Self> {
        if norm_only && segm_only {
            return Err(EngineError::ConfigError(
                "cannot have both norm_only and segm_only".to_string(),
            ));
        }

        Ok(if norm_only {
            Operation::Normalize
        } else if segm_only {
            Operation::Segment
        } else if desegment {
            Operation::Desegment
        } else {
            Operation::NormalizeAndSegment
        })
    }

    /// Apply the operation to `text`, replacing the contents of `out`
    #[inline]
    pub fn apply(self, segmenter: &mut Segmenter, text: &str, out: &mut String) {
        match self {
            Operation::Normalize => segmenter.normalize_to(text, out),
            Operation::Segment => segmenter.segment_to(text, out),
            Operation::Desegment => segmenter.desegment_to(text, out),
            Operation::NormalizeAndSegment => segmenter.normalize_and_segment_to(text, out),
        }
    }

    /// Get a short name for logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Normalize => "normalize",
            Operation::Segment => "segment",
            Operation::Desegment => "desegment",
            Operation::NormalizeAndSegment => "normalize_and_segment",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
