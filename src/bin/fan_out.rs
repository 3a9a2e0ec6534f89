use anyhow::{Context, Result};
use serialized_stdout::serialized_writer::SerializedWriter;
use serialized_stdout::stdout_writer::StdOutWriter;
use std::sync::Arc;

const WORKERS: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    serialized_stdout::init_tracing();
    let output = Arc::new(SerializedWriter::default());
    let workers: Vec<_> = (0..WORKERS)
        .map(|id| {
            let output = output.clone();
            tokio::task::spawn_blocking(move || run_worker(id, &output))
        })
        .collect();

    for worker in workers {
        worker.await.context("Worker panicked")??;
    }
    tracing::info!(workers = WORKERS, "All workers done");
    Ok(())
}

fn run_worker(id: usize, output: &SerializedWriter<StdOutWriter>) -> Result<()> {
    output
        .print_line(format!("worker {id}"))
        .with_context(|| format!("Worker {id} writing to stdout"))
}
