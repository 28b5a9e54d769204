use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "benchload", version, about = "Member capacity and availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate availability across active engagements
    Availability(commands::availability::AvailabilityArgs),
    /// Availability inside a date window
    Period(commands::availability::PeriodArgs),
    /// Check a proposed or edited engagement against capacity
    Validate(commands::validate::ValidateArgs),
    /// Engagements starting soon
    Upcoming(commands::engagements::HorizonArgs),
    /// Engagements ending soon
    Ending(commands::engagements::HorizonArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Availability(args) => commands::availability::run_aggregate(args),
        Commands::Period(args) => commands::availability::run_period(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Upcoming(args) => commands::engagements::run_upcoming(args),
        Commands::Ending(args) => commands::engagements::run_ending(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
