use anyhow::{Context, Result};
use serialized_stdout::serialized_writer::SerializedWriter;

fn main() -> Result<()> {
    serialized_stdout::init_tracing();
    let output = SerializedWriter::default();
    output.print_line("Test").context("Writing to stdout")?;
    Ok(())
}
