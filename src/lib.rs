//! Game of Life simulator
//!
//! This library simulates Conway's Game of Life and B/S rule-variant
//! cellular automata on a finite square grid, handing each generation to a
//! renderer as it evolves.

pub mod automaton;
pub mod config;
pub mod error;
pub mod utils;

pub use automaton::{Grid, GridEngine, RuleSet};
pub use config::Settings;
pub use error::SetupError;
pub use utils::Renderer;

use anyhow::Result;
use std::time::Duration;

/// Outcome of a completed simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub generations_run: usize,
    pub final_population: usize,
}

/// Run a full simulation: validate settings, randomly populate the grid,
/// then step it for the configured number of generations, handing each grid
/// (including the initial one) to the renderer.
pub fn run_simulation(settings: &Settings, renderer: &mut dyn Renderer) -> Result<SimulationSummary> {
    settings.validate()?;

    let rules = settings.rule_set()?;
    let sim = &settings.simulation;
    let mut engine = GridEngine::initialize(sim.grid_size, sim.alive_probability, rules, sim.seed);

    let delay = Duration::from_millis(settings.output.frame_delay_ms);

    renderer.frame(engine.grid(), 0)?;
    for _ in 0..sim.generations {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        let grid = engine.step();
        renderer.frame(&grid, engine.generation())?;
    }

    Ok(SimulationSummary {
        generations_run: engine.generation(),
        final_population: engine.grid().living_count(),
    })
}
