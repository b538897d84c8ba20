use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{fixtures, serve, FixtureFormat};

#[derive(Parser)]
#[command(name = "nextbanking")]
#[command(about = "NextBanking dashboard preview server and fixture tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built dashboard bundle
    ///
    /// Settings are read from `nextbanking.toml` and `NEXTBANKING_*`
    /// environment variables; flags given here take precedence.
    Serve {
        /// Configuration file to use instead of `./nextbanking.toml`
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding the built frontend (index.html and assets)
        #[arg(short, long)]
        dist_dir: Option<PathBuf>,
    },
    /// Print the mock dashboard data the frontend renders
    Fixtures {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FixtureFormat::Json)]
        format: FixtureFormat,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                config,
                bind_address,
                dist_dir,
            } => {
                serve(config.as_deref(), bind_address, dist_dir).await?;
            }
            Commands::Fixtures { format } => {
                fixtures(format)?;
            }
        }
        Ok(())
    }
}
