//! REST demo server.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use common::ServiceConfig;
use domain::UserId;
use rest_demo_lib::config::ServerConfig;

#[derive(Parser)]
#[command(name = "rest-demo")]
#[command(about = "Demo REST resource layer")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "SERVER_HOST")]
        host: Option<String>,
        #[arg(long, env = "SERVER_PORT")]
        port: Option<u16>,
    },
    /// Print a bearer token for a seeded account
    Token {
        #[arg(long)]
        user: UserId,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over LOG_LEVEL
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                std::env::var("LOG_LEVEL").unwrap_or_else(|_| ServiceConfig::default().log_level),
            )
        })
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServerConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            rest_demo_lib::run_server(config).await?;
        }
        Commands::Token { user } => {
            let (_, identity) = rest_demo_lib::seed_collaborators(&config)?;
            let account = identity
                .directory()
                .get(user)
                .ok_or_else(|| format!("no seeded account with id {}", user))?;
            let token = identity.issue_token(account)?;
            println!("{}", token.access_token);
        }
    }

    Ok(())
}
