//! Line chunking over a buffered reader
//!
//! Input is consumed as raw bytes up to each `\n`, so a malformed UTF-8
//! sequence affects only its own line: invalid bytes become U+FFFD and
//! the line is counted.

use crate::error::Result;
use std::io::BufRead;

/// Groups input lines into fixed-size chunks
#[derive(Debug)]
pub struct LineChunker<R> {
    reader: R,
    chunk_size: usize,
    buf: Vec<u8>,
    malformed_lines: u64,
}

impl<R: BufRead> LineChunker<R> {
    /// Create a chunker yielding up to `chunk_size` lines at a time
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
            buf: Vec::new(),
            malformed_lines: 0,
        }
    }

    /// Read the next chunk; `None` once the input is exhausted
    ///
    /// Only the final chunk may hold fewer than `chunk_size` lines.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<String>>> {
        let mut lines = Vec::with_capacity(self.chunk_size);
        while lines.len() < self.chunk_size {
            match self.read_line()? {
                Some(line) => lines.push(line),
                None => break,
            }
        }
        Ok((!lines.is_empty()).then_some(lines))
    }

    /// Number of lines that needed replacement characters so far
    pub fn malformed_lines(&self) -> u64 {
        self.malformed_lines
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let line = match String::from_utf8(std::mem::take(&mut self.buf)) {
            Ok(line) => line,
            Err(e) => {
                self.malformed_lines += 1;
                log::warn!("replacing malformed UTF-8 in input line");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for LineChunker<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}
