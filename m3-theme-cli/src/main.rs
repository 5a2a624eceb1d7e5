use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod config;
mod output;

use commands::generate::GenerateOptions;
use config::ThemeConfig;

#[derive(Parser)]
#[command(name = "m3theme")]
#[command(version, about = "Generate Material 3 color themes from a seed color", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Config file to use instead of ./m3-theme.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a CSS `:root` block of light-dark() color properties
    Generate {
        #[command(flatten)]
        seed: SeedArgs,
        /// Destination file (default from config or theme.css)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,
        /// Print the CSS instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Show the tonal palettes derived from the seed
    Palette {
        #[command(flatten)]
        seed: SeedArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show every role of the light or dark scheme
    Scheme {
        #[command(flatten)]
        seed: SeedArgs,
        /// Show the dark scheme
        #[arg(long)]
        dark: bool,
        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SeedArgs {
    /// Seed color as #rgb or #rrggbb (default from config or #131313)
    #[arg(short, long)]
    seed: Option<String>,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "error,m3_theme=debug,m3theme=debug"
    } else {
        "error,m3_theme=info,m3theme=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let Cli {
        verbose,
        config,
        command,
    } = Cli::parse();
    init_tracing(verbose);

    let config = ThemeConfig::load(Path::new("."), config.as_deref())?;

    match command {
        Commands::Generate {
            seed,
            output,
            stdout,
        } => {
            commands::generate::execute(&GenerateOptions {
                seed: config.seed(seed.seed.as_deref()).to_string(),
                output: config.output(output.as_deref()),
                marker: config.marker().to_string(),
                stdout,
            })?;
        }
        Commands::Palette { seed, json } => {
            commands::palette::execute(config.seed(seed.seed.as_deref()), json)?;
        }
        Commands::Scheme { seed, dark, json } => {
            commands::scheme::execute(config.seed(seed.seed.as_deref()), dark, json)?;
        }
    }

    Ok(())
}
