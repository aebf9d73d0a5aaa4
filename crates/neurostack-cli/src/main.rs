use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "neurostack", version, about = "NeuroStack supplement schedule CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what is due now (or at a simulated time)
    Due(commands::due::DueArgs),
    /// Walk through the due list and mark what was taken
    Log(commands::log::LogArgs),
    /// Full protocol reference
    Phases {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cycle status (Boron rotation, Ashwagandha, washout)
    Cycle(commands::cycle::CycleArgs),
    /// Risk management notes
    Safety,
    /// Catalog file tools
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // The only clock read; everything below works from this instant.
    let now = Local::now().naive_local();

    let result = match cli.command {
        Commands::Due(args) => commands::due::run(args, now),
        Commands::Log(args) => commands::log::run(args, now),
        Commands::Phases { json } => commands::phases::run(json),
        Commands::Cycle(args) => commands::cycle::run(args, now),
        Commands::Safety => commands::safety::run(),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
