use crate::{utils::NiceInt, Config, Grid, NeighborCounts, Renderer, Result, RuleSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The stop flag was raised; holds the last finished generation.
    Cancelled(u64),
}

/// Generation loop over a toroidal grid.
///
/// Owns the grid, the neighbor-count buffer and the random source used by
/// probabilistic rules. Each generation first recounts neighbors for the
/// whole grid, then rewrites every cell in row-major order from its own state
/// and that count, so no cell ever sees a half-updated neighborhood.
pub struct Simulation {
    grid: Grid,
    counts: NeighborCounts,
    rules: RuleSet,
    rng: ChaCha8Rng,
    seed: u64,
    generation: u64,
    max_generations: u64,
    write_frequency: u64,
    initial_rendered: bool,
}

impl Simulation {
    /// Builds the initial grid from `config.pattern`, or randomly from the
    /// seeded source when no pattern is given.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::initialize(config.size, config.pattern.as_ref(), &mut rng)?;
        Ok(Self::assemble(grid, config, rng, seed))
    }

    /// Starts from an existing grid; `config.size` and `config.pattern` are
    /// ignored.
    pub fn from_grid(grid: Grid, config: Config) -> Result<Self> {
        Config {
            size: grid.size(),
            ..config.clone()
        }
        .validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self::assemble(grid, config, rng, seed))
    }

    fn assemble(grid: Grid, config: Config, rng: ChaCha8Rng, seed: u64) -> Self {
        Self {
            counts: NeighborCounts::for_grid(&grid),
            grid,
            rules: config.rules,
            rng,
            seed,
            generation: 0,
            max_generations: config.max_generations,
            write_frequency: config.write_frequency,
            initial_rendered: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Neighbor counts the last generation was computed from.
    pub fn counts(&self) -> &NeighborCounts {
        &self.counts
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Seed of the random source, also when it was drawn from entropy.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_generations(&self) -> u64 {
        self.max_generations
    }

    pub fn is_finished(&self) -> bool {
        self.generation >= self.max_generations
    }

    /// Advances the grid by one generation.
    pub fn step(&mut self) {
        self.counts.recount(&self.grid);
        let Self {
            grid, counts, rules, rng, ..
        } = self;
        for (cell, &live) in grid.cells_mut().iter_mut().zip(counts.counts()) {
            *cell = rules.next_state(*cell, live, rng);
        }
        self.generation += 1;
    }

    /// Runs until `max_generations` generations are done.
    pub fn run(&mut self, renderer: impl Renderer) -> Result<Outcome> {
        self.run_until(renderer, &AtomicBool::new(false))
    }

    /// Like [`Simulation::run`], but checks `stop` between generations.
    ///
    /// Generation 0 is rendered once on a fresh simulation, then every
    /// generation divisible by the write frequency. A cancelled run can be
    /// resumed by calling this again.
    pub fn run_until(&mut self, mut renderer: impl Renderer, stop: &AtomicBool) -> Result<Outcome> {
        info!(
            size = self.grid.size(),
            generations = self.max_generations,
            write_frequency = self.write_frequency,
            seed = self.seed,
            population = %NiceInt::from_usize(self.grid.population()),
            "starting run"
        );
        if self.generation == 0 && !self.initial_rendered {
            renderer.render(&self.grid, 0)?;
            self.initial_rendered = true;
        }
        while !self.is_finished() {
            if stop.load(Ordering::Relaxed) {
                warn!(generation = self.generation, "run cancelled");
                return Ok(Outcome::Cancelled(self.generation));
            }
            self.step();
            debug!(
                generation = self.generation,
                population = self.grid.population(),
                "generation done"
            );
            if self.generation % self.write_frequency == 0 {
                info!(generation = %NiceInt::from(self.generation), "snapshot");
                renderer.render(&self.grid, self.generation)?;
            }
        }
        info!(
            generations = %NiceInt::from(self.generation),
            population = %NiceInt::from_usize(self.grid.population()),
            "run finished"
        );
        Ok(Outcome::Completed)
    }
}
