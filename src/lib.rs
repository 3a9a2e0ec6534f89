pub mod serialized_writer;
pub mod stdout_writer;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr log layer used by the binaries.
///
/// Logs never touch stdout, so they cannot interleave with output written
/// through a [`SerializedWriter`](serialized_writer::SerializedWriter).
/// The filter is read from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_ansi(false)
        .pretty();
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}
