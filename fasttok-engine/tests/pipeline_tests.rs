//! Ordering, backpressure and failure behavior of the pipeline

use fasttok_engine::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::io::{BufRead, Cursor, Read};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

/// Reverses every line; later chunks finish first when `slow_first` is set
#[derive(Clone)]
struct Reverse {
    slow_first: bool,
}

impl LineProcessor for Reverse {
    fn process_line(&mut self, line: &str, out: &mut String) {
        out.clear();
        out.extend(line.chars().rev());
    }

    fn process_chunk(&mut self, lines: &mut [String]) {
        if self.slow_first && lines.first().is_some_and(|l| l == "line 0") {
            thread::sleep(Duration::from_millis(50));
        }
        for line in lines.iter_mut() {
            *line = line.chars().rev().collect();
        }
    }
}

/// Panics on any line equal to "boom"
#[derive(Clone)]
struct Exploding;

impl LineProcessor for Exploding {
    fn process_line(&mut self, line: &str, out: &mut String) {
        if line == "boom" {
            panic!("exploded on purpose");
        }
        out.clear();
        out.push_str(line);
    }
}

/// Counts newline bytes as they are consumed from the input
struct CountingReader {
    inner: Cursor<Vec<u8>>,
    newlines: Rc<Cell<u64>>,
}

impl Read for CountingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        let count = buf[..n].iter().filter(|&&b| b == b'\n').count() as u64;
        self.newlines.set(self.newlines.get() + count);
        Ok(n)
    }
}

impl BufRead for CountingReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        let pos = self.inner.position() as usize;
        let count = self.inner.get_ref()[pos..pos + amt]
            .iter()
            .filter(|&&b| b == b'\n')
            .count() as u64;
        self.newlines.set(self.newlines.get() + count);
        self.inner.consume(amt);
    }
}

fn numbered_input(lines: usize) -> String {
    (0..lines).map(|i| format!("line {i}\n")).collect()
}

#[test]
fn test_order_survives_out_of_order_completion() {
    let config = PipelineConfig::builder()
        .threads(4)
        .chunk_size(1)
        .build()
        .unwrap();
    let pipeline = Pipeline::with_processor(config, Reverse { slow_first: true }).unwrap();

    let input = numbered_input(40);
    let mut output = Vec::new();
    pipeline.run(Cursor::new(input.as_bytes()), &mut output).unwrap();

    let expected: String = input
        .lines()
        .map(|l| format!("{}\n", l.chars().rev().collect::<String>()))
        .collect();
    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn test_in_flight_cap_is_respected() {
    let config = PipelineConfig::builder()
        .threads(2)
        .chunk_size(5)
        .max_in_flight(3)
        .build()
        .unwrap();
    let bound = config.buffered_line_bound() as u64;
    let pipeline = Pipeline::with_processor(config, Reverse { slow_first: false }).unwrap();

    let newlines = Rc::new(Cell::new(0));
    let reader = CountingReader {
        inner: Cursor::new(numbered_input(500).into_bytes()),
        newlines: Rc::clone(&newlines),
    };

    let mut previous_written = 0;
    let mut output = Vec::new();
    let stats = pipeline
        .run_with_progress(reader, &mut output, |written| {
            // Lines read but not yet written, just before this drain
            let buffered = newlines.get() - previous_written;
            assert!(buffered <= bound, "{buffered} lines buffered, bound {bound}");
            previous_written = written;
        })
        .unwrap();

    assert_eq!(stats.lines, 500);
    assert_eq!(stats.chunks, 100);
    assert!(stats.peak_in_flight <= 3);
}

#[test]
fn test_progress_reports_running_total() {
    let config = PipelineConfig::builder()
        .operation(Operation::Normalize)
        .chunk_size(10)
        .build()
        .unwrap();
    let pipeline = Pipeline::new(config).unwrap();

    let mut reports = Vec::new();
    let mut output = Vec::new();
    pipeline
        .run_with_progress(
            Cursor::new(numbered_input(25).into_bytes()),
            &mut output,
            |n| reports.push(n),
        )
        .unwrap();

    assert_eq!(reports, vec![10, 20, 25]);
}

#[test]
fn test_worker_panic_aborts_run() {
    let config = PipelineConfig::builder()
        .threads(2)
        .chunk_size(2)
        .build()
        .unwrap();
    let pipeline = Pipeline::with_processor(config, Exploding).unwrap();

    let mut output = Vec::new();
    let result = pipeline.run(Cursor::new(b"a\nb\nc\nboom\ne\n"), &mut output);

    match result {
        Err(EngineError::WorkerFailure { chunk, reason }) => {
            assert_eq!(chunk, 1);
            assert!(reason.contains("exploded on purpose"));
        }
        other => panic!("expected worker failure, got {other:?}"),
    }
    // Chunks before the failing one were already written
    assert_eq!(output, b"a\nb\n");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_output_matches_sequential(
        lines in prop::collection::vec("[a-z ,.!-]{0,30}", 0..60),
        threads in prop::sample::select(vec![1usize, 2, 8]),
        chunk_size in 1usize..8,
    ) {
        let input: String = lines.iter().map(|l| format!("{l}\n")).collect();

        let mut segmenter = Segmenter::new(true);
        let expected: String = lines
            .iter()
            .map(|l| format!("{}\n", segmenter.normalize_and_segment(l)))
            .collect();

        let config = PipelineConfig::builder()
            .protected_dash_split(true)
            .threads(threads)
            .chunk_size(chunk_size)
            .build()
            .unwrap();
        let pipeline = Pipeline::new(config).unwrap();
        let mut output = Vec::new();
        let stats = pipeline.run(Cursor::new(input.as_bytes()), &mut output).unwrap();

        prop_assert_eq!(String::from_utf8(output).unwrap(), expected);
        prop_assert_eq!(stats.lines, lines.len() as u64);
    }
}
