use clap::{Parser, Subcommand};
use txfetch::AppError;

#[derive(Parser)]
#[command(name = "txfetch")]
#[command(version)]
#[command(
    about = "Maintain Transifex configuration and fetch translations for host modules",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update the configuration for the translation fetcher
    Config,
    /// Fetch translations from Transifex and generate language files
    Fetch,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Config => txfetch::configure(),
        Commands::Fetch => txfetch::fetch(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
