use anyhow::Result;
use clap::{Parser, Subcommand};
use scout_browser::ReleaseChannel;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "scout")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for discovering locally installed browsers",
    long_about = "Scout resolves executable paths and major version numbers for locally \
                  installed browsers, so an automation harness knows what it can launch \
                  before starting a session."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known browser channel with its path and version
    List {
        /// Managed install directory checked before system locations
        #[arg(long, value_name = "DIR")]
        install_root: Option<PathBuf>,
    },

    /// Print the resolved executable path for one channel
    Path {
        /// Release channel (stable, beta, unstable)
        #[arg(long, value_name = "CHANNEL")]
        channel: ReleaseChannel,

        /// Managed install directory checked before system locations
        #[arg(long, value_name = "DIR")]
        install_root: Option<PathBuf>,
    },

    /// Print the major version number for one channel
    Version {
        /// Release channel (stable, beta, unstable)
        #[arg(long, value_name = "CHANNEL")]
        channel: ReleaseChannel,

        /// Managed install directory checked before system locations
        #[arg(long, value_name = "DIR")]
        install_root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::List { install_root } => commands::list::execute(install_root),
        Commands::Path {
            channel,
            install_root,
        } => commands::path::execute(channel, install_root),
        Commands::Version {
            channel,
            install_root,
        } => commands::version::execute(channel, install_root),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("scout=debug,scout_browser=debug")
    } else {
        EnvFilter::new("scout=info,scout_browser=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
