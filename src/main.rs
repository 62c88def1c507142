use anyhow::Context;
use std::io::{self, Write};
use treevis::evaluate_reader;

/// Reads a tree from standard input and prints leaf-sum, red-product and
/// depth-parity on separate lines.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let aggregates = evaluate_reader(io::stdin().lock()).context("could not evaluate tree from standard input")?;
    log::info!("evaluated tree: {:?}", aggregates);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{aggregates}")?;
    stdout.flush()?;

    Ok(())
}
