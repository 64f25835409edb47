//! CLI entry point for showcase-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "showcase-rs")]
#[command(version = "0.1.0")]
#[command(about = "Hydrates a showcase page with collections from a remote JSON API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new showcase workspace
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Fetch all collections and hydrate the page
    #[command(alias = "h")]
    Hydrate,

    /// Hydrate the page, then serve the output locally
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// List configured collections and their container status
    List,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "showcase_rs=debug,info"
    } else {
        "showcase_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing showcase workspace in {:?}", target_dir);
            showcase_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized showcase workspace in {:?}", target_dir);
        }

        Commands::Hydrate => {
            let showcase = showcase_rs::Showcase::new(&base_dir)?;
            tracing::info!("Hydrating page...");

            let summary = showcase.hydrate().await?;
            println!(
                "Hydrated {}/{} collections",
                summary.populated(),
                summary.outcomes.len()
            );
        }

        Commands::Serve { port, ip, open } => {
            let showcase = showcase_rs::Showcase::new(&base_dir)?;

            // Hydrate first
            tracing::info!("Hydrating page...");
            showcase.hydrate().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            showcase_rs::server::start(&showcase, &ip, port, open).await?;
        }

        Commands::List => {
            let showcase = showcase_rs::Showcase::new(&base_dir)?;
            showcase_rs::commands::list::run(&showcase)?;
        }

        Commands::Clean => {
            let showcase = showcase_rs::Showcase::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            showcase.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("showcase-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
