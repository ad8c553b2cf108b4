//! Layer-by-layer solver, advanced one tick at a time.
//!
//! The solver keeps almost no state of its own. Every tick that finds the move
//! queue empty re-derives progress from the cube's coloring, so a cube turned by
//! hand in the middle of a solve is picked up from wherever it now stands.

mod bottom;
mod middle;
mod top;

use std::fmt;

use log::{debug, trace, warn};

use crate::algorithm::Algorithm;
use crate::cube::{Color, Cube, Face, Pos, SectionTurn};
use crate::error::SolveError;
use crate::queue::MoveQueue;
use crate::turn::{display_turns, Turn};

/// Color of the first layer, which is built on top.
pub const CROSS_COLOR: Color = Color::White;
/// Color of the last layer, opposite the first.
pub const LAST_LAYER_COLOR: Color = Color::Blue;

/// Whether the sticker of `pos` facing `face` has that face's center color.
fn matches_center(cube: &Cube, pos: Pos, face: Face) -> bool {
    cube.sticker(pos, face) == cube.center(face)
}

/// Solving stages in the order they are completed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    WhiteCross,
    WhiteCorners,
    SecondLayer,
    BottomCross,
    BottomEdges,
    BottomCornerPermutation,
    BottomCornerOrientation,
}
impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::WhiteCross,
        Stage::WhiteCorners,
        Stage::SecondLayer,
        Stage::BottomCross,
        Stage::BottomEdges,
        Stage::BottomCornerPermutation,
        Stage::BottomCornerOrientation,
    ];

    pub fn is_complete(self, cube: &Cube) -> bool {
        match self {
            Stage::WhiteCross => top::cross_complete(cube),
            Stage::WhiteCorners => top::corners_complete(cube),
            Stage::SecondLayer => middle::second_layer_complete(cube),
            Stage::BottomCross => bottom::cross_complete(cube),
            Stage::BottomEdges => bottom::edges_complete(cube),
            Stage::BottomCornerPermutation => bottom::corners_permuted(cube),
            Stage::BottomCornerOrientation => bottom::corners_oriented(cube),
        }
    }

    /// The earliest stage whose check fails, or `None` once all of them pass.
    pub fn first_incomplete(cube: &Cube) -> Option<Stage> {
        Self::ALL.into_iter().find(|stage| !stage.is_complete(cube))
    }
}
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::WhiteCross => "white cross",
            Stage::WhiteCorners => "white corners",
            Stage::SecondLayer => "second layer",
            Stage::BottomCross => "bottom cross",
            Stage::BottomEdges => "bottom edges",
            Stage::BottomCornerPermutation => "bottom corner permutation",
            Stage::BottomCornerOrientation => "bottom corner orientation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Bottom turns the second layer stage may spend without inserting an edge
    /// before it forces an insertion.
    pub second_layer_retry_limit: usize,
    /// Tick budget for [`Solver::solve`].
    pub max_ticks: usize,
}
impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            second_layer_retry_limit: 3,
            max_ticks: 5000,
        }
    }
}

/// Turns applied while solving and the number of ticks it took.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Solution {
    pub ticks: usize,
    pub turns: Vec<SectionTurn>,
}

#[derive(Debug, Default, Clone)]
pub struct Solver {
    config: SolverConfig,
    queue: MoveQueue,
    /// Set once the last stage is reached. From then on only that stage runs,
    /// until the cube is solved.
    orienting: bool,
    second_layer_bottom_turns: usize,
    last_turn: Option<SectionTurn>,
}
impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
    pub fn pending(&self) -> &MoveQueue {
        &self.queue
    }
    pub fn is_orienting(&self) -> bool {
        self.orienting
    }
    pub fn second_layer_bottom_turns(&self) -> usize {
        self.second_layer_bottom_turns
    }
    /// Section turn applied by the most recent tick, if any.
    pub fn last_turn(&self) -> Option<SectionTurn> {
        self.last_turn
    }

    /// Drops pending turns and everything remembered about the current solve.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.orienting = false;
        self.second_layer_bottom_turns = 0;
        self.last_turn = None;
    }

    /// Advances the solve by one tick. Applies one pending turn if there is
    /// one, otherwise inspects the cube and queues the next turns. Returns
    /// whether the cube is solved.
    pub fn step(&mut self, cube: &mut Cube) -> Result<bool, SolveError> {
        self.last_turn = None;

        if let Some(turn) = self.queue.pop() {
            trace!("applying {turn}");
            let section = turn.section();
            cube.apply(section);
            self.last_turn = Some(section);
            return Ok(false);
        }
        if self.check_solved(cube) {
            return Ok(true);
        }

        if self.orienting {
            self.orient_corners(cube);
            return Ok(self.check_solved(cube));
        }

        let cross_face = cube
            .locate_center(CROSS_COLOR)
            .ok_or(SolveError::MissingCrossCenter(CROSS_COLOR))?;

        let Some(stage) = Stage::first_incomplete(cube) else {
            warn!("every stage is complete but the cube is not solved");
            return Ok(false);
        };
        trace!("working on the {stage}");
        match stage {
            Stage::WhiteCross if cross_face != Face::Top => self.bring_to_top(cube, cross_face),
            Stage::WhiteCross => self.arrange_cross(cube),
            Stage::WhiteCorners => self.arrange_corners(cube),
            Stage::SecondLayer => self.arrange_second_layer(cube),
            Stage::BottomCross => self.arrange_bottom_cross(cube),
            Stage::BottomEdges => self.arrange_bottom_edges(cube),
            Stage::BottomCornerPermutation => self.permute_corners(cube),
            Stage::BottomCornerOrientation => {
                debug!("orienting the bottom corners");
                self.orienting = true;
                self.orient_corners(cube);
            }
        }
        if self.queue.is_empty() && self.last_turn.is_none() {
            warn!("no {stage} case matched");
        }

        Ok(self.check_solved(cube))
    }

    /// Whether the cube is solved. A solved cube ends the solve, so a hand turn
    /// made afterwards is worked from the cross again.
    fn check_solved(&mut self, cube: &Cube) -> bool {
        let solved = cube.is_solved();
        if solved {
            self.orienting = false;
            self.second_layer_bottom_turns = 0;
        }
        solved
    }

    /// Ticks until the cube is solved or the tick budget runs out.
    pub fn solve(&mut self, cube: &mut Cube) -> Result<Solution, SolveError> {
        let mut turns = vec![];
        for tick in 1..=self.config.max_ticks {
            let solved = self.step(cube)?;
            turns.extend(self.last_turn);
            if solved {
                debug!("solved in {tick} ticks with {} turns", turns.len());
                return Ok(Solution { ticks: tick, turns });
            }
        }
        Err(SolveError::TickBudgetExhausted(self.config.max_ticks))
    }

    fn queue_turns(&mut self, turns: &[Turn]) {
        debug!("queueing {}", display_turns(turns));
        self.queue.extend(turns);
    }

    fn queue_algorithm(&mut self, algorithm: Algorithm) {
        debug!(
            "queueing {algorithm}: {}",
            display_turns(algorithm.turns())
        );
        self.queue.extend(algorithm.turns());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Axis, Direction};

    #[test]
    fn solved_cube_is_left_alone() {
        let mut cube = Cube::new();
        let mut solver = Solver::default();
        assert_eq!(solver.step(&mut cube), Ok(true));
        assert_eq!(cube, Cube::new());
        assert!(solver.pending().is_empty());
        assert_eq!(solver.last_turn(), None);
    }

    #[test]
    fn cross_face_is_brought_to_the_top() {
        let mut cube = Cube::new();
        cube.apply(crate::turn::Turn::R.section());
        let mut solver = Solver::default();
        assert_eq!(solver.step(&mut cube), Ok(false));
        assert_eq!(cube.center(Face::Top), CROSS_COLOR);
        assert_eq!(
            solver.last_turn(),
            Some(SectionTurn::new(Axis::Z, 1, Direction::Cw))
        );
        assert!(solver.pending().is_empty());
    }

    #[test]
    fn stage_order() {
        let mut cube = Cube::new();
        assert_eq!(Stage::first_incomplete(&cube), Some(Stage::WhiteCross));
        cube.rotate_cube(Axis::Z, Direction::Cw);
        assert_eq!(Stage::first_incomplete(&cube), None);
        assert!(Stage::WhiteCross < Stage::BottomCornerOrientation);
    }

    #[test]
    fn clear_forgets_the_solve() {
        let mut cube = Cube::new();
        cube.rotate_cube(Axis::Z, Direction::Cw);
        cube.apply(crate::turn::Turn::F.section());
        let mut solver = Solver::default();
        solver.step(&mut cube).unwrap();
        assert!(!solver.pending().is_empty());
        solver.clear();
        assert!(solver.pending().is_empty());
        assert!(!solver.is_orienting());
    }

    #[test]
    fn tick_budget() {
        let mut cube = Cube::new();
        cube.apply(crate::turn::Turn::R.section());
        let mut solver = Solver::new(SolverConfig {
            max_ticks: 2,
            ..SolverConfig::default()
        });
        assert_eq!(
            solver.solve(&mut cube),
            Err(SolveError::TickBudgetExhausted(2))
        );
    }
}
