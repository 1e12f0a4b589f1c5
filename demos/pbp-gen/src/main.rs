//! pbp-gen — write a synthetic NFL play-by-play dataset.
//!
//! ```text
//! pbp-gen --rows 12000 --output plays.csv
//! pbp-gen --format parquet --seed 7 --threads 4
//! RUST_LOG=debug pbp-gen --rows 500
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use pbp_core::{GenConfig, SimRng};
use pbp_engine::{Generator, GeneratorBuilder, PlayCaller};
use pbp_output::{CsvWriter, DatasetSummary, OutputWriter, ParquetWriter, PlayOutputObserver, SqliteWriter};

const DEFAULT_STEM: &str = "nfl_simulation_dataset_realistic";

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
    Parquet,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Sqlite => "db",
            Format::Parquet => "parquet",
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Generate realistic NFL simulation data", long_about = None)]
struct Cli {
    /// Number of plays to generate
    #[arg(long, default_value_t = GenConfig::default().target_rows,
          value_parser = clap::value_parser!(u64).range(1..))]
    rows: u64,

    /// Output file [default: nfl_simulation_dataset_realistic.<ext>]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Run seed; the same seed always produces the same dataset
    #[arg(long, default_value_t = GenConfig::default().seed, conflicts_with = "random_seed")]
    seed: u64,

    /// Draw the run seed from OS entropy instead of --seed
    #[arg(long)]
    random_seed: bool,

    /// Worker threads [default: all logical cores]
    #[arg(long)]
    threads: Option<usize>,

    /// Games simulated per batch
    #[arg(long, default_value_t = GenConfig::default().games_per_batch)]
    batch: usize,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let seed = if cli.random_seed { SimRng::from_entropy().random::<u64>() } else { cli.seed };
    info!("run seed {seed}");

    let config = GenConfig {
        target_rows:     cli.rows,
        seed,
        num_threads:     cli.threads,
        games_per_batch: cli.batch,
        ..GenConfig::default()
    };
    let mut generator = GeneratorBuilder::new(config).build()?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{DEFAULT_STEM}.{}", cli.format.extension())));

    println!("Generating {} plays...", cli.rows);
    let t0 = Instant::now();
    let summary = match cli.format {
        Format::Csv => write_dataset(&mut generator, CsvWriter::new(&output)?)?,
        Format::Sqlite => write_dataset(&mut generator, SqliteWriter::new(&output)?)?,
        Format::Parquet => write_dataset(&mut generator, ParquetWriter::new(&output)?)?,
    };
    info!("wrote {} in {:.3} s", output.display(), t0.elapsed().as_secs_f64());

    print_summary(&summary, &output);
    Ok(())
}

/// Run the generator once, streaming rows into `writer` and the summary.
fn write_dataset<C: PlayCaller, W: OutputWriter>(
    generator: &mut Generator<C>,
    writer:    W,
) -> Result<DatasetSummary> {
    let mut observers = (PlayOutputObserver::new(writer), DatasetSummary::new());
    generator.run(&mut observers)?;

    let (mut output, summary) = observers;
    if let Some(e) = output.take_error() {
        return Err(e.into());
    }
    info!("{} rows written", output.rows_written());
    Ok(summary)
}

fn print_summary(summary: &DatasetSummary, output: &std::path::Path) {
    println!("Generated {} plays across {} games", summary.rows(), summary.games());
    println!("Output: {}", output.display());

    println!("\nPlay Type Distribution:");
    for (play_type, count) in summary.play_type_distribution() {
        println!("  {play_type}: {count} ({:.1}%)", summary.percent(count));
    }

    println!("\nResult Distribution:");
    for (result, count) in summary.result_distribution() {
        println!("  {result}: {count} ({:.1}%)", summary.percent(count));
    }
}
