#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use conway_rules::{Config, Pattern, PngRenderer, Renderer, RuleSet, Simulation, TextRenderer};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Text,
}

/// Runs a rule-driven Game of Life on a toroidal grid and writes
/// `generation<N>` snapshots.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON file with run parameters; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length.
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Number of generations to simulate.
    #[arg(short = 't', long)]
    generations: Option<u64>,

    /// Write a snapshot every this-many generations.
    #[arg(short = 'w', long)]
    write_frequency: Option<u64>,

    /// Seed of the random source.
    #[arg(long)]
    seed: Option<u64>,

    /// Seed pattern, RLE (`.rle`) or a plain-text picture.
    #[arg(long, conflicts_with = "random")]
    pattern: Option<PathBuf>,

    /// Seed the grid randomly instead of using a pattern.
    #[arg(long)]
    random: bool,

    /// `default`, `b3s23` or a rulestring like `B36/S23`.
    #[arg(long)]
    rules: Option<RuleSet>,

    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value = "png")]
    format: Format,

    /// Side of one cell in pixels (PNG only).
    #[arg(long, default_value_t = PngRenderer::DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Log every generation.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(generations) = self.generations {
            config.max_generations = generations;
        }
        if let Some(write_frequency) = self.write_frequency {
            config.write_frequency = write_frequency;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(path) = &self.pattern {
            config.pattern = Some(load_pattern(path)?);
        }
        if self.random {
            config.pattern = None;
        }
        if let Some(rules) = &self.rules {
            config.rules = rules.clone();
        }
        Ok(config)
    }
}

fn load_pattern(path: &Path) -> Result<Pattern> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let is_rle = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rle"));
    let pattern = if is_rle {
        Pattern::from_rle(&data)
    } else {
        Pattern::from_picture(&String::from_utf8_lossy(&data))
    };
    pattern.with_context(|| format!("failed to parse pattern {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = args.config()?;
    let mut simulation = Simulation::new(config).context("invalid run configuration")?;
    let renderer: Box<dyn Renderer> = match args.format {
        Format::Png => Box::new(PngRenderer::new(&args.output_dir, args.cell_size)?),
        Format::Text => Box::new(TextRenderer::new(&args.output_dir)?),
    };
    simulation.run(renderer)?;
    Ok(())
}
