//! Size-bounded output buffering
//!
//! Lines are accumulated in memory and handed to the sink in a single write
//! once the buffered length strictly exceeds the threshold. A batch can
//! therefore overshoot the threshold by at most one line.
//!
//! ```text
//! ACCUMULATING --push (len <= threshold)--> ACCUMULATING
//! ACCUMULATING --push (len >  threshold)--> FLUSHING --write, clear--> ACCUMULATING
//! ```

use anyhow::{Context, Result};
use std::io::Write;

/// Fixed line written after all data lines
pub const STATUS_LINE: &[u8] = b"OK\n";

/// Counters describing what an [`OutputBuffer`] handed to its sink
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Number of data writes issued (the status line is not counted)
    pub flushes: u64,
    /// Data bytes written (the status line is not counted)
    pub bytes_written: u64,
    /// Data lines appended
    pub lines: u64,
}

/// In-memory accumulator that batches label lines into large writes
pub struct OutputBuffer<W: Write> {
    sink: W,
    buf: Vec<u8>,
    threshold: usize,
    stats: FlushStats,
}

impl<W: Write> OutputBuffer<W> {
    /// Create an empty buffer in front of `sink`
    pub fn new(sink: W, threshold: usize) -> Self {
        Self {
            sink,
            // One line of headroom: a flush only happens after the threshold is passed
            buf: Vec::with_capacity(threshold.saturating_add(32)),
            threshold,
            stats: FlushStats::default(),
        }
    }

    /// Append a label and its newline, flushing if the threshold is exceeded
    #[inline]
    pub fn push_label(&mut self, label: &crate::Label) -> Result<()> {
        label.write_to(&mut self.buf);
        self.buf.push(b'\n');
        self.stats.lines += 1;

        if self.buf.len() > self.threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Write the whole buffer to the sink and reset it to empty
    pub fn flush(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }

        self.sink
            .write_all(&self.buf)
            .with_context(|| format!("Failed to write {} buffered bytes", self.buf.len()))?;

        self.stats.flushes += 1;
        self.stats.bytes_written += self.buf.len() as u64;
        log::trace!(
            "flush #{}: {} bytes after {} lines",
            self.stats.flushes,
            self.buf.len(),
            self.stats.lines
        );

        self.buf.clear();
        Ok(())
    }

    /// Current number of buffered bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing is buffered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Counters so far
    pub fn stats(&self) -> FlushStats {
        self.stats
    }

    /// Flush the remainder, write the status line and flush the sink
    pub fn finish(mut self) -> Result<FlushStats> {
        self.flush()?;

        self.sink
            .write_all(STATUS_LINE)
            .context("Failed to write status line")?;
        self.sink.flush().context("Failed to flush output")?;

        Ok(self.stats)
    }
}
