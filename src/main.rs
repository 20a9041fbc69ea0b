//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, Settings},
    run_simulation,
    utils::{ColorOutput, TerminalRenderer},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Game of Life and rule-variant cellular automaton simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid side length (overrides config)
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Initial alive probability in [0, 1] (overrides config)
        #[arg(short, long)]
        probability: Option<f64>,

        /// Rulestring such as B3/S23, B36/S23 or B2/S (overrides config)
        #[arg(short, long)]
        rule: Option<String>,

        /// RNG seed for a reproducible initial grid (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Frame delay in milliseconds (overrides config)
        #[arg(short, long)]
        delay: Option<u64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            size,
            generations,
            probability,
            rule,
            seed,
            delay,
            verbose,
        } => run_command(config, size, generations, probability, rule, seed, delay, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    size: Option<usize>,
    generations: Option<usize>,
    probability: Option<f64>,
    rule: Option<String>,
    seed: Option<u64>,
    delay: Option<u64>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        grid_size: size,
        generations,
        probability,
        rule,
        seed,
        frame_delay_ms: delay,
    };
    settings.merge_with_cli(&cli_overrides);

    // Validate settings before any simulation work
    settings.validate().context("Parameter validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Grid size: {0}x{0}", settings.simulation.grid_size);
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Alive probability: {}", settings.simulation.alive_probability);
        println!("  Rule: {}", settings.rule_set()?);
        if let Some(seed) = settings.simulation.seed {
            println!("  Seed: {}", seed);
        }
        println!();
    }

    let mut renderer = TerminalRenderer::new(settings.output.color);
    let summary = run_simulation(&settings, &mut renderer).context("Simulation failed")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Done: {} generations, {} cells alive at the end",
            summary.generations_run, summary.final_population
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Variant configurations for the bundled rule presets
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut highlife = Settings::default();
    highlife.simulation.rule = "B36/S23".to_string();
    highlife.to_file(&examples_dir.join("highlife.yaml"))?;

    let mut live_free_or_die = Settings::default();
    live_free_or_die.simulation.rule = "B2/S".to_string();
    live_free_or_die.simulation.alive_probability = 0.1;
    live_free_or_die.to_file(&examples_dir.join("live_free_or_die.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
