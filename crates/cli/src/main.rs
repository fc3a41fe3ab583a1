// Comptoir CLI
//
// Design Decision: Use clap derive with env fallbacks for configuration.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: Current-thread runtime — the access layer is event-driven,
// nothing here needs parallelism.

mod commands;
mod output;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use comptoir_client::{ApiClient, RouteCell, Router, DEFAULT_API_URL};
use comptoir_session::{SessionStore, StateBackend};

#[derive(Parser)]
#[command(name = "comptoir")]
#[command(about = "Comptoir CLI - stock, facturation et partenaires")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "COMPTOIR_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long, short)]
        username: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the session and its stored mirrors
    Logout,

    /// Show the stored session
    Whoami,

    /// Print the navigation menu for the stored role
    Nav,

    /// Navigate to a route through the guard
    Open {
        /// Route path, e.g. /facturation
        route: String,
    },

    /// Product pages
    Produits {
        #[command(subcommand)]
        command: commands::produits::ProduitsCommand,
    },

    /// Partner pages
    Partenaires {
        #[command(subcommand)]
        command: commands::partenaires::PartenairesCommand,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cell = Arc::new(RouteCell::new());
    let session = Arc::new(SessionStore::open(StateBackend::file_from_env()?, cell.clone()));
    let client = Arc::new(ApiClient::new(&cli.api_url, session.clone()));
    let router = Router::new(client.clone(), cell);
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&client, &username, password, cli.quiet).await
        }
        Commands::Logout => commands::auth::logout(&session, cli.quiet),
        Commands::Whoami => commands::auth::whoami(&session, output_format),
        Commands::Nav => commands::navigate::nav(&session, output_format),
        Commands::Open { route } => commands::navigate::open(&router, &route).await,
        Commands::Produits { command } => {
            commands::produits::run(command, &client, &router, output_format).await
        }
        Commands::Partenaires { command } => {
            commands::partenaires::run(command, &client, &router, output_format).await
        }
    }
}
