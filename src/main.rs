use clap::Parser;
use colored::Colorize;
use secrep::composer;
use secrep::{Cli, ReportConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ReportConfig::from_cli(&cli);
    match composer::compose_and_write(&config) {
        Ok(()) => {
            println!(
                "{} Final security report saved to {}",
                "[✓]".green(),
                config.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "[✗]".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "secrep=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
