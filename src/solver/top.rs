//! First layer: the white cross and the white corners, built on the top face.

use log::debug;

use super::{matches_center, Solver, CROSS_COLOR};
use crate::cube::{Axis, Cube, Direction, Face, Pos, SectionTurn, EDGE as E, MID as M};
use crate::turn::Turn::{
    self, BPrime as Bi, DPrime as Di, FPrime as Fi, LPrime as Li, RPrime as Ri, B, D, F, L, R,
};

/// Edges of the top layer with the side face of their second sticker.
const TOP_EDGES: [(Pos, Face, Turn); 4] = [
    ([M, E, E], Face::Front, F),
    ([M, E, 0], Face::Back, B),
    ([E, E, M], Face::Right, R),
    ([0, E, M], Face::Left, L),
];
const BOTTOM_EDGES: [(Pos, Face, Turn); 4] = [
    ([M, 0, E], Face::Front, F),
    ([M, 0, 0], Face::Back, B),
    ([E, 0, M], Face::Right, R),
    ([0, 0, M], Face::Left, L),
];

/// Ways to lift an edge with a white sticker facing `face` into the cross.
struct CrossCase {
    face: Face,
    lower: (Pos, &'static [Turn]),
    upper: (Pos, &'static [Turn]),
    /// Middle edges: the face the other sticker points at, then the turns for
    /// when that sticker already matches its center and for when it does not.
    sides: [(Pos, Face, &'static [Turn], &'static [Turn]); 2],
}

const CROSS_CASES: [CrossCase; 4] = [
    CrossCase {
        face: Face::Right,
        lower: ([E, 0, M], &[R, F, D, Fi]),
        upper: ([E, E, M], &[R, Bi, D, B]),
        sides: [
            ([E, M, 0], Face::Back, &[B], &[Bi, D, B]),
            ([E, M, E], Face::Front, &[Fi], &[F, D, Fi]),
        ],
    },
    CrossCase {
        face: Face::Left,
        lower: ([0, 0, M], &[L, B, D, Bi]),
        upper: ([0, E, M], &[L, Fi, D, F]),
        sides: [
            ([0, M, E], Face::Front, &[F], &[Fi, D, F]),
            ([0, M, 0], Face::Back, &[Bi], &[B, D, Bi]),
        ],
    },
    CrossCase {
        face: Face::Front,
        lower: ([M, 0, E], &[F, L, D, Li]),
        upper: ([M, E, E], &[F, Ri, D, R]),
        sides: [
            ([E, M, E], Face::Right, &[R], &[Ri, D, R]),
            ([0, M, E], Face::Left, &[Li], &[L, D, Li]),
        ],
    },
    CrossCase {
        face: Face::Back,
        lower: ([M, 0, 0], &[B, R, D, Ri]),
        upper: ([M, E, 0], &[B, Li, D, L]),
        sides: [
            ([0, M, 0], Face::Left, &[L], &[Li, D, L]),
            ([E, M, 0], Face::Right, &[Ri], &[R, D, Ri]),
        ],
    },
];

/// Top corners, one row per side sticker, with the top edge that sticker must agree with.
const TOP_CORNER_SIDES: [(Pos, Face, Pos); 8] = [
    ([E, E, E], Face::Right, [E, E, M]),
    ([E, E, E], Face::Front, [M, E, E]),
    ([E, E, 0], Face::Right, [E, E, M]),
    ([E, E, 0], Face::Back, [M, E, 0]),
    ([0, E, E], Face::Left, [0, E, M]),
    ([0, E, E], Face::Front, [M, E, E]),
    ([0, E, 0], Face::Left, [0, E, M]),
    ([0, E, 0], Face::Back, [M, E, 0]),
];

/// Corner moves for white stickers facing `face`.
struct CornerCase {
    face: Face,
    /// Top edge on this face that the corner's side sticker is compared with.
    edge: Pos,
    /// Top corners to kick down into the bottom layer.
    upper: [(Pos, &'static [Turn]); 2],
    /// Bottom corners to insert: the corner's other side face and its insertion.
    lower: [(Pos, Face, &'static [Turn]); 2],
}

const CORNER_CASES: [CornerCase; 4] = [
    CornerCase {
        face: Face::Right,
        edge: [E, E, M],
        upper: [([E, E, E], &[Ri, Di, R]), ([E, E, 0], &[R, D, Ri])],
        lower: [
            ([E, 0, 0], Face::Back, &[Di, Bi, D, B]),
            ([E, 0, E], Face::Front, &[D, F, Di, Fi]),
        ],
    },
    CornerCase {
        face: Face::Left,
        edge: [0, E, M],
        upper: [([0, E, 0], &[Li, Di, L]), ([0, E, E], &[L, D, Li])],
        lower: [
            ([0, 0, E], Face::Front, &[Di, Fi, D, F]),
            ([0, 0, 0], Face::Back, &[D, B, Di, Bi]),
        ],
    },
    CornerCase {
        face: Face::Front,
        edge: [M, E, E],
        upper: [([0, E, E], &[Fi, Di, F]), ([E, E, E], &[F, D, Fi])],
        lower: [
            ([E, 0, E], Face::Right, &[Di, Ri, D, R]),
            ([0, 0, E], Face::Left, &[D, L, Di, Li]),
        ],
    },
    CornerCase {
        face: Face::Back,
        edge: [M, E, 0],
        upper: [([E, E, 0], &[Bi, Di, B]), ([0, E, 0], &[B, D, Bi])],
        lower: [
            ([0, 0, 0], Face::Left, &[Di, Li, D, L]),
            ([E, 0, 0], Face::Right, &[D, R, Di, Ri]),
        ],
    },
];

/// Bottom corners showing white downwards, with the turns that bring them up.
const CORNER_LIFTS: [(Pos, &[Turn]); 4] = [
    ([0, 0, E], &[Fi, D, F]),
    ([E, 0, E], &[F, Di, Fi]),
    ([E, 0, 0], &[R, D, Ri]),
    ([0, 0, 0], &[Li, Di, L]),
];

pub(super) fn cross_complete(cube: &Cube) -> bool {
    cube.center(Face::Top) == CROSS_COLOR
        && TOP_EDGES.iter().all(|&(pos, side, _)| {
            cube.sticker(pos, Face::Top) == CROSS_COLOR && matches_center(cube, pos, side)
        })
}

pub(super) fn corners_complete(cube: &Cube) -> bool {
    cube.center(Face::Top) == CROSS_COLOR
        && TOP_CORNER_SIDES.iter().all(|&(pos, side, edge)| {
            cube.sticker(pos, Face::Top) == CROSS_COLOR
                && cube.sticker(pos, side) == cube.sticker(edge, side)
        })
}

impl Solver {
    /// Turns the middle slice that carries the white center towards the top.
    /// The bottom face needs two ticks, passing through the back.
    pub(super) fn bring_to_top(&mut self, cube: &mut Cube, face: Face) {
        let turn = match face {
            Face::Top => return,
            Face::Right => SectionTurn::new(Axis::Z, M, Direction::Cw),
            Face::Left => SectionTurn::new(Axis::Z, M, Direction::Ccw),
            Face::Bottom | Face::Back => SectionTurn::new(Axis::X, M, Direction::Cw),
            Face::Front => SectionTurn::new(Axis::X, M, Direction::Ccw),
        };
        debug!("white center is on the {face}, turning {turn}");
        cube.apply(turn);
        self.last_turn = Some(turn);
    }

    pub(super) fn arrange_cross(&mut self, cube: &Cube) {
        // white edges sitting on the bottom go up once they are under their center
        let mut waiting_below = false;
        for (pos, side, turn) in BOTTOM_EDGES {
            if cube.sticker(pos, Face::Bottom) == CROSS_COLOR {
                if matches_center(cube, pos, side) {
                    self.queue_turns(&[turn, turn]);
                    return;
                }
                waiting_below = true;
            }
        }
        if waiting_below {
            self.queue_turns(&[D]);
            return;
        }

        // white on top but over the wrong center: send it down
        for (pos, side, turn) in TOP_EDGES {
            if cube.sticker(pos, Face::Top) == CROSS_COLOR && !matches_center(cube, pos, side) {
                self.queue_turns(&[turn, turn]);
                return;
            }
        }

        for case in &CROSS_CASES {
            for (pos, turns) in [case.lower, case.upper] {
                if cube.sticker(pos, case.face) == CROSS_COLOR {
                    self.queue_turns(turns);
                    return;
                }
            }
            for (pos, side, aligned, unaligned) in case.sides {
                if cube.sticker(pos, case.face) == CROSS_COLOR {
                    let turns = if matches_center(cube, pos, side) {
                        aligned
                    } else {
                        unaligned
                    };
                    self.queue_turns(turns);
                    return;
                }
            }
        }
    }

    pub(super) fn arrange_corners(&mut self, cube: &Cube) {
        self.second_layer_bottom_turns = 0;

        let mut waiting_below = false;
        for case in &CORNER_CASES {
            for (pos, side, turns) in case.lower {
                if cube.sticker(pos, case.face) == CROSS_COLOR {
                    if cube.sticker(pos, side) == cube.sticker(top_edge(side), side) {
                        self.queue_turns(turns);
                        return;
                    }
                    waiting_below = true;
                }
            }
        }

        for case in &CORNER_CASES {
            for (pos, turns) in case.upper {
                let color = cube.sticker(pos, case.face);
                let unseated = cube.sticker(pos, Face::Top) == CROSS_COLOR
                    && cube.sticker(case.edge, case.face) != color;
                if color == CROSS_COLOR || unseated {
                    self.queue_turns(turns);
                    return;
                }
            }
        }

        if waiting_below {
            self.queue_turns(&[D]);
            return;
        }

        for (pos, turns) in CORNER_LIFTS {
            if cube.sticker(pos, Face::Bottom) == CROSS_COLOR {
                self.queue_turns(turns);
                return;
            }
        }
    }
}

/// Top-layer edge on a side face.
fn top_edge(side: Face) -> Pos {
    let mut pos = side.center();
    pos[1] = E;
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_edges_of_faces() {
        assert_eq!(top_edge(Face::Right), [E, E, M]);
        assert_eq!(top_edge(Face::Back), [M, E, 0]);
        for (pos, side, _) in TOP_EDGES {
            assert_eq!(top_edge(side), pos);
        }
    }
}
