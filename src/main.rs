use clap::Parser;
use tracing_subscriber::EnvFilter;

use precinct::cli::{self, Cli, Commands};
use precinct::config;
use precinct::errors::PrecinctError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                PrecinctError::Config(_) => 2,
                PrecinctError::Validation { .. } => 3,
                PrecinctError::NotFound(_) => 4,
                PrecinctError::Network(_) | PrecinctError::Http { .. } => 5,
                PrecinctError::Persistence(_) => 6,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: Cli) -> Result<(), PrecinctError> {
    let config_path = cli.config.as_ref().map(std::path::PathBuf::from);
    let config = config::load_config(config_path.as_deref()).await?;

    match cli.command {
        Commands::List(args) => cli::list::handle_list(args, &config).await,
        Commands::Show(args) => cli::show::handle_show(args, &config).await,
        Commands::Generate(args) => cli::generate::handle_generate(args, &config).await,
    }
}
