use std::io::{Stdout, Write};

/// Production sink for [`SerializedWriter`](crate::serialized_writer::SerializedWriter).
///
/// Only forwards to the process's standard output. Serialization is the
/// job of the writer that owns it.
pub struct StdOutWriter {
    stdout: Stdout,
}

impl Default for StdOutWriter {
    fn default() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Write for StdOutWriter {
    fn write_all(&mut self, buf: &[u8]) -> Result<(), std::io::Error> {
        self.stdout.write_all(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, std::io::Error> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> Result<(), std::io::Error> {
        self.stdout.flush()
    }
}
