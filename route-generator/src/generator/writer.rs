//! Batched, line-oriented output of route payloads.
//!
//! Payloads are buffered in memory and written in groups, one payload per
//! line. A record that fails to write is logged and dropped without
//! aborting the rest of the batch.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::RoutePayload;

/// Create the output file, creating its parent directory if needed.
///
/// An existing file is truncated. The file is not buffered, so a failed
/// record write surfaces from that record's own write.
pub fn create_output(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    File::create(path)
}

/// Buffers payloads and writes them to a sink in bounded batches.
pub struct BatchWriter<W: Write> {
    sink: W,
    buffer: Vec<RoutePayload>,
    flush_threshold: usize,
    limit: usize,
    write_failures: usize,
}

impl<W: Write> BatchWriter<W> {
    /// Create a writer flushing every `flush_threshold` payloads, or as
    /// soon as the caller's running count reaches `limit`.
    pub fn new(sink: W, flush_threshold: usize, limit: usize) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
            flush_threshold,
            limit,
            write_failures: 0,
        }
    }

    /// Queue a payload for the next batch.
    pub fn offer(&mut self, payload: RoutePayload) {
        self.buffer.push(payload);
    }

    /// Number of payloads waiting to be written.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Records dropped because they could not be written.
    pub fn write_failures(&self) -> usize {
        self.write_failures
    }

    /// Write the buffer if it is full or `current_count` has reached the
    /// limit.
    ///
    /// Returns the number of records written, which is zero when no batch
    /// was due.
    pub fn maybe_flush(&mut self, current_count: usize) -> usize {
        if self.buffer.len() >= self.flush_threshold || current_count >= self.limit {
            self.write_batch()
        } else {
            0
        }
    }

    /// Write whatever is still buffered.
    pub fn finish(&mut self) -> usize {
        if self.buffer.is_empty() {
            return 0;
        }
        self.write_batch()
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Unwrap the underlying sink. Buffered payloads are discarded.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_batch(&mut self) -> usize {
        let mut written = 0;
        let mut failed = 0;

        for payload in self.buffer.drain(..) {
            match write_record(&mut self.sink, &payload) {
                Ok(()) => written += 1,
                Err(e) => {
                    failed += 1;
                    warn!(error = %e, bytes = payload.len(), "failed to write route record");
                }
            }
        }

        // Records accepted by a buffering sink are lost if the flush fails.
        if let Err(e) = self.sink.flush() {
            warn!(error = %e, records = written, "failed to flush output");
            failed += written;
            written = 0;
        }

        self.write_failures += failed;
        debug!(written, failed, "wrote batch");
        written
    }
}

/// Write one payload as a single newline-terminated line.
fn write_record<W: Write>(sink: &mut W, payload: &RoutePayload) -> io::Result<()> {
    if payload.contains_line_break() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "payload contains a line break",
        ));
    }

    let mut line = Vec::with_capacity(payload.len() + 1);
    line.extend_from_slice(payload.as_bytes());
    line.push(b'\n');
    sink.write_all(&line)
}
