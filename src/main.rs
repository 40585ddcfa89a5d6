use anyhow::Result;
use clap::{Parser, Subcommand};

/// rcoach - Research coaching landing page
#[derive(Parser)]
#[command(name = "rcoach")]
#[command(about = "Single-page site for a research coaching service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = rcoach::Config::load(cli.config)?;
    config.validate()?;

    rcoach::observability::init_observability(
        "rcoach",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => rcoach::server::serve(config, host, port).await,
    }
}
