use clap::Parser;
use std::io::Write;
use tac_analytics::flight;

/// Sweep the flight auction's price perturbation band across game time
#[derive(Parser, Debug)]
#[command(name = "flight-sweep")]
#[command(about = "Sweep the flight auction's price perturbation band across game time")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    tac_analytics::telemetry::init_logging("warn")?;

    tracing::debug!(
        columns = flight::UPPER_BOUNDS.len(),
        steps = flight::SWEEP_STEPS,
        "rendering perturbation sweep"
    );
    let table = flight::render_table();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(table.as_bytes())?;

    Ok(())
}
