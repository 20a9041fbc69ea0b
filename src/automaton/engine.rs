//! Generation stepping engine

use super::{Grid, RuleSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Owns the current grid and advances it one generation at a time.
///
/// Every cell of the next generation is computed from the grid as it was
/// before the step began; the new grid replaces the old one only after all
/// cells are decided, so a step never reads partially-updated state.
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    rules: RuleSet,
    generation: usize,
}

impl GridEngine {
    /// Create an engine over an existing grid
    pub fn new(grid: Grid, rules: RuleSet) -> Self {
        Self {
            grid,
            rules,
            generation: 0,
        }
    }

    /// Create an engine with a randomly populated size x size grid.
    ///
    /// Each cell is independently alive with the given probability (must be
    /// in [0, 1], enforced by setup validation). A seed makes the initial
    /// population reproducible; without one the thread RNG is used.
    pub fn initialize(size: usize, probability: f64, rules: RuleSet, seed: Option<u64>) -> Self {
        let cells = match seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Self::random_cells(&mut rng, size * size, probability)
            }
            None => Self::random_cells(&mut rand::thread_rng(), size * size, probability),
        };

        let grid = Grid {
            width: size,
            height: size,
            cells,
        };

        Self::new(grid, rules)
    }

    fn random_cells<R: Rng>(rng: &mut R, len: usize, probability: f64) -> Vec<bool> {
        (0..len).map(|_| rng.gen_bool(probability)).collect()
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations stepped so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The rule set this engine applies
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Advance one generation and return a snapshot of the new grid.
    ///
    /// On a zero-dimension grid this is a no-op returning an empty grid.
    pub fn step(&mut self) -> Grid {
        let current = &self.grid;
        let mut next = Grid::new(current.width, current.height);

        for row in 0..current.height {
            for col in 0..current.width {
                let neighbors = current.count_neighbors(row, col);
                let idx = next.index(row, col);
                next.cells[idx] = self.rules.next_state(current.get(row, col), neighbors);
            }
        }

        self.grid = next;
        self.generation += 1;
        self.grid.clone()
    }

    /// Advance several generations, returning the final grid
    pub fn run_generations(&mut self, generations: usize) -> Grid {
        for _ in 0..generations {
            self.step();
        }
        self.grid.clone()
    }
}
