//! Last layer, solved on the bottom face once the white layer is on top.

use super::{matches_center, Solver, LAST_LAYER_COLOR};
use crate::algorithm::Algorithm::{self, *};
use crate::cube::{Cube, Face, Pos, EDGE as E, MID as M};
use crate::turn::Turn;

/// Bottom edges in back, right, front, left order, with the side each one shows.
const EDGES: [(Pos, Face); 4] = [
    ([M, 0, 0], Face::Back),
    ([E, 0, M], Face::Right),
    ([M, 0, E], Face::Front),
    ([0, 0, M], Face::Left),
];

/// Bottom corners and the faces they show, each with the three-cycle that
/// keeps that corner in place. Pairing back-left with the front-right cycle
/// (and the reverse) also converges, only more slowly.
const CORNERS: [(Pos, [Face; 3], Algorithm); 4] = [
    ([0, 0, 0], [Face::Bottom, Face::Left, Face::Back], CycleCornersFixBackLeft),
    ([E, 0, 0], [Face::Bottom, Face::Right, Face::Back], CycleCornersFixBackRight),
    ([E, 0, E], [Face::Bottom, Face::Right, Face::Front], CycleCornersFixFrontRight),
    ([0, 0, E], [Face::Bottom, Face::Left, Face::Front], CycleCornersFixFrontLeft),
];

fn last_layer_edges(cube: &Cube) -> [bool; 4] {
    EDGES.map(|(pos, _)| cube.sticker(pos, Face::Bottom) == LAST_LAYER_COLOR)
}

fn aligned_edges(cube: &Cube) -> [bool; 4] {
    EDGES.map(|(pos, side)| matches_center(cube, pos, side))
}

/// Whether the corner's stickers are the colors of the three centers around
/// it, in any orientation.
fn corner_permuted(cube: &Cube, pos: Pos, faces: [Face; 3]) -> bool {
    let centers = faces.map(|face| cube.center(face));
    faces
        .iter()
        .all(|&face| centers.contains(&cube.sticker(pos, face)))
}

pub(super) fn cross_complete(cube: &Cube) -> bool {
    last_layer_edges(cube).iter().all(|&b| b)
}

pub(super) fn edges_complete(cube: &Cube) -> bool {
    aligned_edges(cube).iter().all(|&b| b)
}

pub(super) fn corners_permuted(cube: &Cube) -> bool {
    CORNERS
        .iter()
        .all(|&(pos, faces, _)| corner_permuted(cube, pos, faces))
}

pub(super) fn corners_oriented(cube: &Cube) -> bool {
    CORNERS.iter().all(|&(pos, faces, _)| {
        faces
            .iter()
            .all(|&face| matches_center(cube, pos, face))
    })
}

impl Solver {
    pub(super) fn arrange_bottom_cross(&mut self, cube: &Cube) {
        let algorithm = match last_layer_edges(cube) {
            [false, false, false, false] | [true, true, false, false] | [false, true, false, true] => {
                CrossFromFront
            }
            [false, true, true, false] | [true, false, true, false] => CrossFromLeft,
            [true, false, false, true] => CrossFromRight,
            [false, false, true, true] => CrossFromBack,
            _ => return,
        };
        self.queue_algorithm(algorithm);
    }

    pub(super) fn arrange_bottom_edges(&mut self, cube: &Cube) {
        let aligned = aligned_edges(cube);
        if aligned.iter().filter(|&&b| b).count() < 2 {
            self.queue_turns(&[Turn::D]);
            return;
        }
        let algorithm = match aligned {
            [false, false, true, true] => SwapEdgesFront,
            [true, false, false, true] => SwapEdgesLeft,
            [true, true, false, false] => SwapEdgesBack,
            [false, true, true, false] => SwapEdgesRight,
            [true, false, true, false] => SwapOppositeLeft,
            [false, true, false, true] => SwapOppositeFront,
            _ => return,
        };
        self.queue_algorithm(algorithm);
    }

    /// Cycles the three corners around the first one already in place. With
    /// none in place, any cycle brings one home.
    pub(super) fn permute_corners(&mut self, cube: &Cube) {
        let algorithm = CORNERS
            .iter()
            .find(|&&(pos, faces, _)| corner_permuted(cube, pos, faces))
            .map_or(CycleCornersFixFrontLeft, |&(_, _, algorithm)| algorithm);
        self.queue_algorithm(algorithm);
    }

    /// Twists the front-left bottom corner until it is right, then brings the
    /// next corner under it.
    pub(super) fn orient_corners(&mut self, cube: &Cube) {
        let corner = [0, 0, E];
        let oriented = cube.sticker(corner, Face::Bottom) == LAST_LAYER_COLOR
            && cube.sticker(corner, Face::Left) == cube.sticker([0, 0, M], Face::Left)
            && cube.sticker(corner, Face::Front) == cube.sticker([M, 0, E], Face::Front);
        if oriented {
            self.queue_turns(&[Turn::D]);
        } else {
            self.queue_algorithm(TwistCorner);
        }
    }
}
