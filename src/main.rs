use std::io::{self, Write};

use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

use bubblesort::print;

const SAMPLE: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    // stdout carries the program output, keep diagnostics out of it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn write_sorted(v: &[i32]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Sorted array:")?;
    print::write_array(&mut out, v)?;
    out.flush()
}

fn main() {
    init_tracing();

    let mut arr = SAMPLE;
    debug!(input = ?arr, "sorting sample array");

    let stats = bubblesort::sort_by_with_stats(&mut arr, |a, b| a.cmp(b));
    debug!(
        output = ?arr,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "sorted sample array"
    );

    if let Err(err) = write_sorted(&arr) {
        error!(%err, "failed to write sorted array");
    }
}
