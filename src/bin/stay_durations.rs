use clap::Parser;
use std::io::Write;
use tac_analytics::stays;

/// Tabulate the distribution of client stay durations over the 5-day game
#[derive(Parser, Debug)]
#[command(name = "stay-durations")]
#[command(about = "Tabulate the distribution of client stay durations over the 5-day game")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    tac_analytics::telemetry::init_logging("warn")?;

    let histogram = stays::enumerate_stays();
    let report = stays::render_report(&histogram);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;

    Ok(())
}
