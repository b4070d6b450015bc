use anyhow::Result;
use clap::Parser;
use routing_cycle_detector::{init_logging, run_driver, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.into_run_config()?;
    init_logging(config.log_level);

    let result_line = run_driver(&config)?;
    println!("{result_line}");

    Ok(())
}
