pub mod commands;

use clap::Parser;
use colored::Colorize;
use commands::Commands;
use log::error;

/// 🌀 Fractal shapes generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() {
    fractals::env::init();
    fractals::logger::init();

    let cli = Cli::parse();

    let outcome: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Render(args) => args.run().map_err(Into::into),
        Commands::Gallery(args) => args.run().map_err(Into::into),
        Commands::View(args) => args.run().map_err(Into::into),
    };

    if let Err(err) = outcome {
        error!("{err}");
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
