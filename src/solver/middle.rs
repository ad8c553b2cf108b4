use log::debug;

use super::{matches_center, Solver, LAST_LAYER_COLOR};
use crate::algorithm::Algorithm::{self, *};
use crate::cube::{Cube, Face, Pos, EDGE as E, MID as M};
use crate::turn::Turn;

/// Middle-layer edge slots and the two faces each one shows.
const SLOTS: [(Pos, Face, Face); 4] = [
    ([E, M, 0], Face::Right, Face::Back),
    ([E, M, E], Face::Right, Face::Front),
    ([0, M, E], Face::Left, Face::Front),
    ([0, M, 0], Face::Left, Face::Back),
];

/// Bottom edges under each side center, with the insertion to use depending
/// on which neighboring center the bottom sticker belongs to.
const BOTTOM_EDGES: [(Face, Pos, [(Face, Algorithm); 2]); 4] = [
    (
        Face::Right,
        [E, 0, M],
        [(Face::Back, InsertRightBack), (Face::Front, InsertRightFront)],
    ),
    (
        Face::Left,
        [0, 0, M],
        [(Face::Front, InsertLeftFront), (Face::Back, InsertLeftBack)],
    ),
    (
        Face::Front,
        [M, 0, E],
        [(Face::Right, InsertFrontRight), (Face::Left, InsertFrontLeft)],
    ),
    (
        Face::Back,
        [M, 0, 0],
        [(Face::Left, InsertBackLeft), (Face::Right, InsertBackRight)],
    ),
];

/// Middle slots seen from either side, for edges that sit in the wrong slot
/// or the right slot flipped.
const MISPLACED: [(Face, Face, Pos, Algorithm); 8] = [
    (Face::Right, Face::Back, [E, M, 0], InsertRightBack),
    (Face::Right, Face::Front, [E, M, E], InsertRightFront),
    (Face::Left, Face::Front, [0, M, E], InsertLeftFront),
    (Face::Left, Face::Back, [0, M, 0], InsertLeftBack),
    (Face::Front, Face::Right, [E, M, E], InsertFrontRight),
    (Face::Front, Face::Left, [0, M, E], InsertFrontLeft),
    (Face::Back, Face::Left, [0, M, 0], InsertBackLeft),
    (Face::Back, Face::Right, [E, M, 0], InsertBackRight),
];

pub(super) fn second_layer_complete(cube: &Cube) -> bool {
    SLOTS
        .iter()
        .all(|&(pos, a, b)| matches_center(cube, pos, a) && matches_center(cube, pos, b))
}

/// Insertion that replaces whatever sits in the first wrong slot.
fn forced_insertion(cube: &Cube) -> Option<Algorithm> {
    let ok = |pos: Pos, face: Face| matches_center(cube, pos, face);
    if !ok([E, M, 0], Face::Right) {
        Some(InsertRightBack)
    } else if !ok([E, M, E], Face::Right) {
        Some(InsertRightFront)
    } else if !ok([0, M, E], Face::Left) || !ok([0, M, E], Face::Front) {
        Some(InsertLeftFront)
    } else if !ok([0, M, 0], Face::Left) || !ok([0, M, 0], Face::Back) {
        Some(InsertLeftBack)
    } else if !ok([E, M, E], Face::Front) {
        Some(InsertRightFront)
    } else if !ok([E, M, 0], Face::Back) {
        Some(InsertRightBack)
    } else {
        None
    }
}

impl Solver {
    pub(super) fn arrange_second_layer(&mut self, cube: &Cube) {
        if self.second_layer_bottom_turns > self.config.second_layer_retry_limit {
            if let Some(algorithm) = forced_insertion(cube) {
                debug!(
                    "no insertion after {} bottom turns, forcing one",
                    self.second_layer_bottom_turns
                );
                // idle turns count from the last forced insertion, not only
                // from the corners stage
                self.second_layer_bottom_turns = 0;
                self.queue_algorithm(algorithm);
                return;
            }
        }

        for (side, pos, targets) in BOTTOM_EDGES {
            if !matches_center(cube, pos, side) {
                continue;
            }
            let below = cube.sticker(pos, Face::Bottom);
            if below == LAST_LAYER_COLOR {
                continue;
            }
            for (target, algorithm) in targets {
                if below == cube.center(target) {
                    self.queue_algorithm(algorithm);
                    return;
                }
            }
        }

        for (first, second, pos, algorithm) in MISPLACED {
            let (a, b) = (cube.center(first), cube.center(second));
            let (on_first, on_second) = (cube.sticker(pos, first), cube.sticker(pos, second));
            if (a == on_second && b == on_first) || (a == on_first && b != on_second) {
                self.queue_algorithm(algorithm);
                return;
            }
        }

        self.second_layer_bottom_turns += 1;
        self.queue_turns(&[Turn::D]);
    }
}
