use anyhow::Result;
use clap::Parser as ClapParser;
use kp_greedy::batch;
use kp_greedy::config::BenchConfig;
use kp_greedy::io;
use kp_greedy::io::cli::Cli;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BenchConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed BenchConfig: {config:?}");

    let stdout = std::io::stdout();
    batch::benchmark(
        &args.data_dir,
        &args.report_file,
        &config,
        &mut stdout.lock(),
    )?;

    Ok(())
}
