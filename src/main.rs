use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sha3sw::bench::{self, BenchConfig, DEFAULT_DATA_SIZE, DEFAULT_ITERATIONS};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sha3-bench", about = "Software SHA3-256 benchmark", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a test pattern repeatedly and report throughput
    Run {
        /// Bytes per message
        #[arg(long, default_value_t = DEFAULT_DATA_SIZE)]
        size: usize,
        /// Total number of hashes
        #[arg(long, short = 'n', default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,
        /// Worker threads sharing the iterations
        #[arg(long, short = 'j', default_value_t = 1)]
        threads: usize,
    },
    /// Print SHA3-256 of files (reads stdin if none)
    Sum {
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            size,
            iterations,
            threads,
        } => cmd_run(BenchConfig {
            data_size: size,
            iterations,
            threads,
        }),
        Commands::Sum { files } => cmd_sum(&files),
    }
}

fn cmd_run(config: BenchConfig) -> Result<()> {
    config.validate().context("benchmark failed")?;
    println!("{}", config.banner());
    let report = bench::run(&config).context("benchmark failed")?;
    println!("{report}");
    Ok(())
}

fn cmd_sum(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        let mut data = Vec::new();
        io::stdin()
            .read_to_end(&mut data)
            .context("reading stdin")?;
        println!("{}  -", sha3sw::sha3_256(&data));
        return Ok(());
    }
    for path in files {
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        debug!(path = %path.display(), len = data.len(), "hashing file");
        println!("{}  {}", sha3sw::sha3_256(&data), path.display());
    }
    Ok(())
}
