use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use runnerga::config::{AppConfig, ConfigManager};
use runnerga::engines::evaluation::{evaluate_fitness, replay, Frame};
use runnerga::engines::generation::{EvolutionEngine, EvolutionResult, Genome, LogProgressCallback};
use runnerga::Course;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "runnerga",
    about = "Evolve action sequences that carry an agent across a tile course"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the genetic algorithm on a level file
    Evolve {
        /// Level text file
        level: PathBuf,

        /// Config file path (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        generations: Option<usize>,

        /// Genomes per generation (must be even)
        #[arg(long)]
        population: Option<usize>,

        #[arg(long)]
        genome_length: Option<usize>,

        /// Write a JSON report with the best genome and its replay frames
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Simulate a fixed action string such as "GGJGS"
    Replay {
        /// Level text file
        level: PathBuf,

        #[arg(long)]
        actions: String,

        #[arg(long, default_value = "20")]
        viewport: usize,

        /// Write per-tick frames as JSON
        #[arg(long)]
        trace: Option<PathBuf>,
    },

    /// Write the default configuration as TOML
    InitConfig {
        #[arg(long, default_value = "runnerga.toml")]
        output: PathBuf,
    },

    /// Print the configuration manifest as JSON
    Manifest,
}

#[derive(Serialize)]
struct RunReport<'a> {
    level: &'a Path,
    finished_at: DateTime<Utc>,
    config: &'a AppConfig,
    result: &'a EvolutionResult,
    replay: Vec<Frame>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Evolve {
            level,
            config,
            seed,
            generations,
            population,
            genome_length,
            report,
        } => {
            let manager = ConfigManager::new();
            if let Some(path) = config {
                manager.load_from_file(&path)?;
            }
            manager.update(|c| {
                if let Some(seed) = seed {
                    c.evolution.seed = seed;
                }
                if let Some(generations) = generations {
                    c.evolution.num_generations = generations;
                }
                if let Some(population) = population {
                    c.evolution.population_size = population;
                }
                if let Some(genome_length) = genome_length {
                    c.evolution.genome_length = genome_length;
                }
            })?;
            let app_config = manager.get();

            let course = Course::from_file(&level)
                .with_context(|| format!("loading level {}", level.display()))?;
            let engine = EvolutionEngine::new(app_config.evolution.clone())?;
            let callback = LogProgressCallback::new(app_config.evolution.num_generations);

            let result = engine.run(&course, callback);

            println!("MAX SCORE: {}", result.best_score);
            println!("FOUND IN GENERATION: {}", result.best_generation + 1);
            println!("ACTIONS: {}", result.best_genome);

            if let Some(path) = report {
                let mut best = result.best_genome.clone();
                let frames = replay(&mut best, &course, app_config.display.viewport_width);
                let report = RunReport {
                    level: &level,
                    finished_at: Utc::now(),
                    config: &app_config,
                    result: &result,
                    replay: frames,
                };
                write_json(&path, &report)?;
                log::info!("Report written to {}", path.display());
            }
        }
        Command::Replay {
            level,
            actions,
            viewport,
            trace,
        } => {
            if viewport == 0 {
                return Err(anyhow!("viewport width must be positive"));
            }
            let course = Course::from_file(&level)
                .with_context(|| format!("loading level {}", level.display()))?;
            let mut genome: Genome = actions.parse().map_err(|e: String| anyhow!(e))?;

            let evaluation = evaluate_fitness(&mut genome, &course);
            println!(
                "SCORE: {} ({:?} after {} ticks at {})",
                evaluation.score, evaluation.state, evaluation.ticks, evaluation.final_position
            );

            if let Some(path) = trace {
                let frames = replay(&mut genome, &course, viewport);
                write_json(&path, &frames)?;
                log::info!("{} frames written to {}", frames.len(), path.display());
            }
        }
        Command::InitConfig { output } => {
            ConfigManager::new().save_to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
        Command::Manifest => {
            let manifests = AppConfig::default().manifests();
            println!("{}", serde_json::to_string_pretty(&manifests)?);
        }
    }

    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
