//! Per-line work performed inside chunk tasks

use crate::operation::Operation;
use fasttok_core::Segmenter;

/// Transforms one line at a time
///
/// Every chunk task works on its own clone, so implementations may keep
/// scratch state in `&mut self` without synchronization.
pub trait LineProcessor: Clone + Send + 'static {
    /// Process `line`, replacing the contents of `out`
    fn process_line(&mut self, line: &str, out: &mut String);

    /// Process every line of a chunk in place
    fn process_chunk(&mut self, lines: &mut [String]) {
        let mut out = String::new();
        for line in lines.iter_mut() {
            self.process_line(line, &mut out);
            // The old line buffer becomes the next scratch output
            std::mem::swap(line, &mut out);
        }
    }
}

/// Applies an [`Operation`] through a [`Segmenter`]
#[derive(Debug, Clone)]
pub struct SegmenterTask {
    operation: Operation,
    segmenter: Segmenter,
}

impl SegmenterTask {
    /// Create a task for `operation`
    pub fn new(operation: Operation, protected_dash_split: bool) -> Self {
        Self {
            operation,
            segmenter: Segmenter::new(protected_dash_split),
        }
    }

    /// The operation this task applies
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl LineProcessor for SegmenterTask {
    #[inline]
    fn process_line(&mut self, line: &str, out: &mut String) {
        self.operation.apply(&mut self.segmenter, line, out);
    }
}
