use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::stdout_writer::StdOutWriter;

/// Serializes writes to a shared sink.
///
/// Every call holds the lock across the write and the flush, so the bytes
/// of one call reach the sink as a single contiguous unit. All writers of a
/// sink must go through the same instance for this to hold.
pub struct SerializedWriter<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> SerializedWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Writes `message` as is and flushes.
    ///
    /// # Errors
    ///
    /// - the sink failed to write or flush; the error is returned unchanged
    pub fn print(&self, message: impl AsRef<str>) -> io::Result<()> {
        self.emit(message.as_ref().as_bytes())
    }

    /// Writes `message` followed by `\n` and flushes.
    ///
    /// # Errors
    ///
    /// - the sink failed to write or flush; the error is returned unchanged
    pub fn print_line(&self, message: impl AsRef<str>) -> io::Result<()> {
        let message = message.as_ref();
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        self.emit(line.as_bytes())
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, bytes: &[u8]) -> io::Result<()> {
        // A panicking holder leaves nothing half-updated on our side.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let result = sink.write_all(bytes).and_then(|()| sink.flush());
        match &result {
            Ok(()) => tracing::trace!(bytes = bytes.len(), "Flushed"),
            Err(e) => tracing::warn!(error = %e, "Sink failed"),
        }
        result
    }
}

impl Default for SerializedWriter<StdOutWriter> {
    fn default() -> Self {
        Self::new(StdOutWriter::default())
    }
}
