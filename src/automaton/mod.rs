//! Cellular automaton core: grid, rules, and stepping engine

pub mod engine;
pub mod grid;
pub mod rules;

pub use engine::GridEngine;
pub use grid::Grid;
pub use rules::RuleSet;
