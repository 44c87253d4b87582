//! Buffered FizzBuzz Generator
//!
//! Prints a label for every integer from 1 up to a limit, one per line,
//! followed by a final `OK` line.
//!
//! # Output Batching
//!
//! Instead of one write per line, lines are accumulated in an in-memory
//! buffer and handed to the output in a single write once the buffer grows
//! past a threshold:
//!
//! ```text
//! value → Label → buffer (+ '\n') → len > threshold? → write_all + clear
//! ```
//!
//! Batching only changes how many writes are issued. The bytes produced are
//! identical for every threshold.
//!
//! # Example Usage
//!
//! ```rust
//! use buffered_fizzbuzz::FizzBuzz;
//!
//! # fn main() -> anyhow::Result<()> {
//! let generator = FizzBuzz::builder()
//!     .limit(15)
//!     .threshold(16)
//!     .build()?;
//!
//! let mut output = Vec::new();
//! generator.run(&mut output)?;
//!
//! assert_eq!(
//!     String::from_utf8(output)?,
//!     "1\n2\nfizz\n4\nbuzz\nfizz\n7\n8\nfizz\nbuzz\n11\nfizz\n13\n14\nfizzbuzz\nOK\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod label;

// Re-exports for convenience
pub use buffer::{FlushStats, OutputBuffer, STATUS_LINE};
pub use label::Label;

use anyhow::Result;
use std::io::Write;

/// First value processed
pub const START: u64 = 1;

/// Last value processed unless configured otherwise
pub const DEFAULT_LIMIT: u64 = 99_999_999;

/// Buffered bytes that must be exceeded before a write is issued
pub const DEFAULT_THRESHOLD: usize = 4096;

/// Builder for [`FizzBuzz`]
pub struct FizzBuzzBuilder {
    limit: u64,
    threshold: usize,
}

impl FizzBuzzBuilder {
    /// Create a new builder with the default limit and threshold
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the last value to process (inclusive)
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the flush threshold in bytes
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Build the generator
    pub fn build(self) -> Result<FizzBuzz> {
        if self.threshold == 0 {
            anyhow::bail!("Flush threshold must be greater than 0");
        }

        Ok(FizzBuzz {
            limit: self.limit,
            threshold: self.threshold,
        })
    }
}

impl Default for FizzBuzzBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FizzBuzz {
    limit: u64,
    threshold: usize,
}

impl FizzBuzz {
    /// Create a new builder
    pub fn builder() -> FizzBuzzBuilder {
        FizzBuzzBuilder::new()
    }

    /// Last value processed (inclusive)
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Flush threshold in bytes
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of data lines that [`run`](Self::run) emits before the status line
    pub fn line_count(&self) -> u64 {
        if self.limit < START {
            0
        } else {
            self.limit - START + 1
        }
    }

    /// Create an iterator over all labels in order
    pub fn labels(&self) -> LabelIterator {
        LabelIterator {
            values: START..=self.limit,
        }
    }

    /// Write every label line followed by the status line to `sink`
    ///
    /// Returns the flush counters. Any write failure is returned as is and
    /// ends the run; nothing is retried.
    pub fn run<W: Write>(&self, sink: W) -> Result<FlushStats> {
        let mut buffer = OutputBuffer::new(sink, self.threshold);

        for label in self.labels() {
            buffer.push_label(&label)?;
        }

        buffer.finish()
    }
}

impl Default for FizzBuzz {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Iterator over labels from [`START`] to the limit
pub struct LabelIterator {
    values: std::ops::RangeInclusive<u64>,
}

impl Iterator for LabelIterator {
    type Item = Label;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(Label::for_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(limit: u64, threshold: usize) -> String {
        let generator = FizzBuzz::builder()
            .limit(limit)
            .threshold(threshold)
            .build()
            .unwrap();

        let mut output = Vec::new();
        generator.run(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let generator = FizzBuzz::builder().build().unwrap();

        assert_eq!(generator.limit(), 99_999_999);
        assert_eq!(generator.threshold(), 4096);
        assert_eq!(generator.line_count(), 99_999_999);
        assert_eq!(generator, FizzBuzz::default());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = FizzBuzz::builder().threshold(0).build();

        assert!(result.is_err());
    }

    #[test]
    fn test_fizzbuzz_15() {
        let expected = "1\n2\nfizz\n4\nbuzz\nfizz\n7\n8\nfizz\nbuzz\n11\nfizz\n13\n14\nfizzbuzz\nOK\n";
        assert_eq!(output_of(15, DEFAULT_THRESHOLD), expected);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(output_of(1, DEFAULT_THRESHOLD), "1\nOK\n");
    }

    #[test]
    fn test_zero_limit_prints_only_status() {
        assert_eq!(output_of(0, DEFAULT_THRESHOLD), "OK\n");
        assert_eq!(output_of(0, 1), "OK\n");

        let generator = FizzBuzz::builder().limit(0).build().unwrap();
        assert_eq!(generator.line_count(), 0);
        assert_eq!(generator.labels().count(), 0);
    }

    #[test]
    fn test_threshold_does_not_change_output() {
        let reference = output_of(1_000, 1_000_000);

        for threshold in [1, 2, 5, 9, 64, 4096] {
            assert_eq!(output_of(1_000, threshold), reference, "threshold {threshold}");
        }
    }

    #[test]
    fn test_run_stats() {
        let generator = FizzBuzz::builder().limit(100).threshold(1).build().unwrap();
        let mut output = Vec::new();
        let stats = generator.run(&mut output).unwrap();

        assert_eq!(stats.lines, 100);
        assert_eq!(stats.flushes, 100);
        assert_eq!(stats.bytes_written as usize, output.len() - STATUS_LINE.len());
    }

    #[test]
    fn test_label_iterator() {
        let generator = FizzBuzz::builder().limit(6).build().unwrap();
        let labels: Vec<Label> = generator.labels().collect();

        assert_eq!(generator.labels().size_hint(), (6, Some(6)));
        assert_eq!(
            labels,
            vec![
                Label::Number(1),
                Label::Number(2),
                Label::Fizz,
                Label::Number(4),
                Label::Buzz,
                Label::Fizz,
            ]
        );
    }
}
