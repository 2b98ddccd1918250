use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frame_benchmarks::dataset::employees;
use frame_benchmarks::ops::methods::FrameMethods;
use frame_benchmarks::BenchSuite;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the timing lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let df = employees()?;
    info!(rows = df.height(), columns = df.width(), "dataset ready");

    let suite = BenchSuite::new(FrameMethods {});
    suite.run(&df)?;

    Ok(())
}
