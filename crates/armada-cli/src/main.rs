mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "armada", about = "Build and publish a fleet of Python ASGI base images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold armada.toml, the demo application, and pinned requirements
    Init,
    /// List the build matrix
    Matrix,
    /// Build image variants locally
    Build {
        /// Image name, e.g. python3.11-slim
        name: Option<String>,
        /// Build every matrix variant
        #[arg(long, conflicts_with = "name")]
        all: bool,
        /// Override the full image tag (single image only)
        #[arg(long, env = "IMAGE_TAG")]
        tag: Option<String>,
    },
    /// Build and push image variants to the registry
    Publish {
        /// Image name, e.g. python3.11-slim
        name: Option<String>,
        /// Publish every matrix variant
        #[arg(long, conflicts_with = "name")]
        all: bool,
    },
    /// Refresh the registry description from the README
    Describe,
    /// Run a built variant and check health, HTTP, and non-root user
    Verify {
        /// Image name, e.g. python3.11-slim
        name: String,
        /// Host port the container is published on
        #[arg(long, env = "PORT", default_value_t = 8000)]
        port: u16,
        /// Seconds to wait for the container to report healthy
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },
    /// Security-scan a built variant with trivy
    Scan {
        /// Image name, e.g. python3.11-slim
        name: String,
    },
    /// Start a variant locally
    Up {
        /// Image name, e.g. python3.11-slim
        name: String,
        /// Host port to publish the container on
        #[arg(long, env = "PORT", default_value_t = 8000)]
        port: u16,
        /// Override the gunicorn worker count
        #[arg(long, env = "WORKERS")]
        workers: Option<u32>,
        /// Override the server log level
        #[arg(long, env = "LOG_LEVEL")]
        log_level: Option<String>,
    },
    /// Stop and remove the local container
    Down,
    /// Remove local containers and build contexts
    Clean {
        /// Also remove built variant images
        #[arg(long)]
        images: bool,
    },
    /// Save a built variant to a tarball
    Backup {
        /// Image name, e.g. python3.11-slim
        name: String,
        /// Output path (default: <name>.tar)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Load a variant tarball back into docker
    Restore {
        /// Tarball written by `armada backup`
        input: PathBuf,
    },
    /// Publish every variant and push an additional versioned tag
    Release {
        /// Version to tag the release with, e.g. 1.4.0
        version: String,
        /// Allow releasing with uncommitted changes
        #[arg(long)]
        allow_dirty: bool,
        /// Allow releasing with unpinned requirements
        #[arg(long)]
        allow_unpinned: bool,
    },
    /// Eject Dockerfiles for manual customization
    Eject,
    /// Manage CI/CD pipeline
    Ci {
        #[command(subcommand)]
        action: CiAction,
    },
    /// Check local setup and matrix consistency
    Doctor,
}

#[derive(Subcommand)]
enum CiAction {
    /// Generate the deploy workflow from the build matrix
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Registry credentials may live in a local .env
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init_project().await?,
        Commands::Matrix => commands::matrix().await?,
        Commands::Build { name, all, tag } => commands::build(name, all, tag).await?,
        Commands::Publish { name, all } => commands::publish(name, all).await?,
        Commands::Describe => commands::describe().await?,
        Commands::Verify {
            name,
            port,
            timeout,
        } => commands::verify(&name, port, timeout).await?,
        Commands::Scan { name } => commands::scan(&name).await?,
        Commands::Up {
            name,
            port,
            workers,
            log_level,
        } => commands::up(&name, port, workers, log_level).await?,
        Commands::Down => commands::down().await?,
        Commands::Clean { images } => commands::clean(images).await?,
        Commands::Backup { name, output } => commands::backup(&name, output).await?,
        Commands::Restore { input } => commands::restore(&input).await?,
        Commands::Release {
            version,
            allow_dirty,
            allow_unpinned,
        } => commands::release(&version, allow_dirty, allow_unpinned).await?,
        Commands::Eject => commands::eject().await?,
        Commands::Ci { action } => match action {
            CiAction::Init => commands::ci_init().await?,
        },
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
