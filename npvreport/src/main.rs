mod output;

use clap::{Parser, ValueEnum};
use npvatlas::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// Monte Carlo NPV of a salaried job versus an independent business.
#[derive(Parser, Debug)]
#[command(name = "npvreport")]
#[command(version)]
struct Cli {
    /// Seed of the random stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Simulated paths per scenario
    #[arg(long, default_value_t = N_SIMULATIONS)]
    simulations: usize,

    /// Horizon in months
    #[arg(long, default_value_t = N_MONTHS)]
    months: usize,

    /// Annual discount rate, compounded monthly
    #[arg(long, default_value_t = ANNUAL_DISCOUNT_RATE)]
    discount_rate: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: Format,

    /// Log filter written to stderr (e.g. "info", "npvatlas=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = SimulationConfig::default()
        .with_seed(cli.seed)
        .with_simulations(cli.simulations)
        .with_months(cli.months)
        .with_discount_rate(cli.discount_rate);

    let report = npv_eval(&config)?;
    info!(
        seed = report.config().seed(),
        rows = report.npvs().len(),
        "report ready"
    );
    match cli.format {
        Format::Table => print!("{}", output::render_table(report.summary())),
        Format::Json => println!("{}", output::render_json(&report)?),
    }
    Ok(())
}
