//! Agent program drivers.
//!
//! - `aima table` - table-driven vacuum over a fixed percept sequence
//! - `aima random` - random pilot
//! - `aima reflex` - simple reflex vacuum
//! - `aima model` - model-based reflex vacuum

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use aima_demos::{drivers, DemoConfig};

#[derive(Parser)]
#[command(name = "aima")]
#[command(about = "Run classic agent programs and watch them act", version)]
struct Cli {
    /// Config file (defaults to .aima/config.yaml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Table-driven vacuum over a fixed percept sequence
    Table(PaceArgs),

    /// Random pilot
    Random(RunArgs),

    /// Simple reflex vacuum
    Reflex(RunArgs),

    /// Model-based reflex vacuum
    Model(RunArgs),
}

#[derive(Args)]
struct PaceArgs {
    /// Pause between percepts in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Do not print trace lines
    #[arg(long)]
    no_trace: bool,
}

impl PaceArgs {
    fn apply(&self, config: &mut DemoConfig) {
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if self.no_trace {
            config.trace = false;
        }
    }
}

#[derive(Args)]
struct RunArgs {
    /// Number of percepts to feed
    #[arg(long)]
    steps: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    pace: PaceArgs,
}

impl RunArgs {
    fn apply(&self, config: &mut DemoConfig) {
        self.pace.apply(config);
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::load_from_project(&std::env::current_dir()?)?,
    };

    match cli.command {
        Commands::Table(args) => {
            args.apply(&mut config);
            let actions = drivers::run_table(&config);
            let misses = actions.iter().filter(|a| a.is_none()).count();
            tracing::info!(calls = actions.len(), misses, "Table driver finished");
        }
        Commands::Random(args) => {
            args.apply(&mut config);
            let actions = drivers::run_random(&config)?;
            tracing::info!(calls = actions.len(), "Random driver finished");
        }
        Commands::Reflex(args) => {
            args.apply(&mut config);
            let steps = drivers::run_reflex(&config);
            tracing::info!(calls = steps.len(), "Reflex driver finished");
        }
        Commands::Model(args) => {
            args.apply(&mut config);
            let (steps, model) = drivers::run_model(&config);
            tracing::info!(calls = steps.len(), "Model driver finished");
            println!("Final model: {model:?}");
        }
    }

    Ok(())
}
