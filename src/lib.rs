//! A 3x3x3 cube model and a layer-by-layer solver that advances one tick at a
//! time, so a front end can pace and animate every turn it makes.

pub mod algorithm;
pub mod cube;
pub mod error;
pub mod queue;
pub mod solver;
pub mod turn;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use cube::{Axis, Color, Cube, Direction, Face, Frame, Piece, Pos, SectionTurn};
pub use error::{NotationError, SolveError, TurnParseError};
pub use solver::{Solution, Solver, SolverConfig, Stage};
pub use turn::Turn;

/// Random section turns applied by [`Puzzle::randomize`].
pub const SCRAMBLE_TURNS: usize = 100;
/// Frames per animated section turn.
pub const DEFAULT_ANIMATION_STEPS: usize = 150;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub scramble_turns: usize,
    pub animation_steps: usize,
    pub solver: SolverConfig,
}
impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            scramble_turns: SCRAMBLE_TURNS,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            solver: SolverConfig::default(),
        }
    }
}

/// A cube together with the solver working on it. This is the whole surface a
/// renderer or input layer needs.
#[derive(Debug, Clone)]
pub struct Puzzle {
    config: PuzzleConfig,
    cube: Cube,
    solver: Solver,
    rng: ChaCha8Rng,
}
impl Default for Puzzle {
    fn default() -> Self {
        Self::new(PuzzleConfig::default())
    }
}
impl Puzzle {
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }
    /// A puzzle whose scrambles are reproducible from `seed`.
    pub fn with_seed(config: PuzzleConfig, seed: u64) -> Self {
        Self {
            config,
            cube: Cube::new(),
            solver: Solver::new(config.solver),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Back to the solved layout, with nothing left to do for the solver.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.solver.clear();
    }

    /// Scrambles the cube and makes the solver start over.
    pub fn randomize(&mut self) -> Vec<SectionTurn> {
        let turns = self
            .cube
            .scramble(&mut self.rng, self.config.scramble_turns);
        self.solver.clear();
        info!("scrambled with {} turns", turns.len());
        turns
    }

    /// Applies a scramble written in standard notation.
    pub fn apply_notation(&mut self, scramble: &str) -> Result<(), NotationError> {
        let turns = turn::sections_from_notation(scramble)?;
        debug!("applying {} section turns", turns.len());
        for turn in turns {
            self.cube.apply(turn);
        }
        Ok(())
    }

    pub fn rotate_section(&mut self, axis: Axis, index: usize, direction: Direction) {
        self.cube.rotate_section(axis, index, direction);
    }

    /// Rotates a section, reporting each intermediate frame to `on_frame`.
    pub fn rotate_section_animated<F>(
        &mut self,
        axis: Axis,
        index: usize,
        direction: Direction,
        on_frame: F,
    ) where
        F: FnMut(&Cube, Frame),
    {
        let steps = self.config.animation_steps;
        self.cube
            .rotate_section_animated(axis, index, direction, steps, on_frame);
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// One solver tick; see [`Solver::step`].
    pub fn solve_step(&mut self) -> Result<bool, SolveError> {
        self.solver.step(&mut self.cube)
    }

    pub fn solve(&mut self) -> Result<Solution, SolveError> {
        self.solver.solve(&mut self.cube)
    }
}
