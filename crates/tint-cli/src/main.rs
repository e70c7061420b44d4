//! tint - command line driver for the tint filter
//!
//! Resolves effective colors and runs the tiled renderer over synthetic
//! images, for checking parameters and timing worker counts.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{render::RenderArgs, resolve::ResolveArgs};

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Multiplicative tint filter")]
#[command(long_about = "
Multiply every pixel of a region by one color blended from white.

Examples:
  tint resolve --rgb C86432 --strength 0.5       # -> #E3B198
  tint resolve --hsv 120 100 100 --rounding half-up
  tint resolve --params '{\"strength\":0.3,\"source\":{\"rgb\":{\"r\":0,\"g\":0,\"b\":255}}}'
  tint render -W 1920 -H 1080 --rgb 336699 --band-rows 32
  tint render --cancel-after 100 -j 4 -vv
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective tint color for a parameter set
    #[command(visible_alias = "res")]
    Resolve(ResolveArgs),

    /// Tint a synthetic gradient with the tiled renderer
    #[command(visible_alias = "r")]
    Render(RenderArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args, cli.verbose),
        Commands::Render(args) => commands::render::run(args, cli.verbose),
    }
}
