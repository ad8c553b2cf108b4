use std::fmt;

use crate::turn::Turn;

/// Named turn sequences used once the first layer is built. The white layer is
/// on top throughout, so every sequence works on the bottom layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Bottom edge into the middle slot between the right and back faces,
    /// entering from the right face.
    InsertRightBack,
    InsertRightFront,
    InsertLeftFront,
    InsertLeftBack,
    InsertFrontRight,
    InsertFrontLeft,
    InsertBackLeft,
    InsertBackRight,

    /// Flips bottom edges to form the bottom cross, turning the front face.
    CrossFromFront,
    CrossFromLeft,
    CrossFromRight,
    CrossFromBack,

    /// Swaps two adjacent bottom edges and re-aligns the bottom layer.
    SwapEdgesFront,
    SwapEdgesLeft,
    SwapEdgesBack,
    SwapEdgesRight,
    /// Swaps two opposite bottom edges.
    SwapOppositeLeft,
    SwapOppositeFront,

    /// Cycles three bottom corners, leaving the named corner where it is.
    CycleCornersFixFrontRight,
    CycleCornersFixBackRight,
    CycleCornersFixBackLeft,
    CycleCornersFixFrontLeft,

    /// Twists the bottom front-left corner in place; disturbs the top layer
    /// until applied six times.
    TwistCorner,
}
impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Algorithm {
    pub const ALL: &'static [Self] = &[
        Self::InsertRightBack,
        Self::InsertRightFront,
        Self::InsertLeftFront,
        Self::InsertLeftBack,
        Self::InsertFrontRight,
        Self::InsertFrontLeft,
        Self::InsertBackLeft,
        Self::InsertBackRight,
        Self::CrossFromFront,
        Self::CrossFromLeft,
        Self::CrossFromRight,
        Self::CrossFromBack,
        Self::SwapEdgesFront,
        Self::SwapEdgesLeft,
        Self::SwapEdgesBack,
        Self::SwapEdgesRight,
        Self::SwapOppositeLeft,
        Self::SwapOppositeFront,
        Self::CycleCornersFixFrontRight,
        Self::CycleCornersFixBackRight,
        Self::CycleCornersFixBackLeft,
        Self::CycleCornersFixFrontLeft,
        Self::TwistCorner,
    ];

    pub fn turns(self) -> &'static [Turn] {
        use Algorithm::*;
        use Turn::{
            BPrime as Bi, DPrime as Di, FPrime as Fi, LPrime as Li, RPrime as Ri, UPrime as Ui,
            B, D, F, L, R, U,
        };

        match self {
            InsertRightBack => &[Di, Bi, D, B, Ri, B, R, Bi],
            InsertRightFront => &[D, F, Di, Fi, R, Fi, Ri, F],
            InsertLeftFront => &[Di, Fi, D, F, Li, F, L, Fi],
            InsertLeftBack => &[D, B, Di, Bi, L, Bi, Li, B],
            InsertFrontRight => &[Di, Ri, D, R, Fi, R, F, Ri],
            InsertFrontLeft => &[D, L, Di, Li, F, Li, Fi, L],
            InsertBackLeft => &[Di, Li, D, L, Bi, L, B, Li],
            InsertBackRight => &[D, R, Di, Ri, B, Ri, Bi, R],

            CrossFromFront => &[F, L, D, Li, Di, Fi],
            CrossFromLeft => &[L, B, D, Bi, Di, Li],
            CrossFromRight => &[R, F, D, Fi, Di, Ri],
            CrossFromBack => &[B, R, D, Ri, Di, Bi],

            SwapEdgesFront => &[F, D, Fi, D, F, D, D, Fi, D],
            SwapEdgesLeft => &[L, D, Li, D, L, D, D, Li, D],
            SwapEdgesBack => &[B, D, Bi, D, B, D, D, Bi, D],
            SwapEdgesRight => &[R, D, Ri, D, R, D, D, Ri, D],
            SwapOppositeLeft => &[L, D, Li, D, L, D, D, Li],
            SwapOppositeFront => &[F, D, Fi, D, F, D, D, Fi],

            CycleCornersFixFrontRight => &[D, F, Di, Bi, D, Fi, Di, B],
            CycleCornersFixBackRight => &[D, R, Di, Li, D, Ri, Di, L],
            CycleCornersFixBackLeft => &[D, B, Di, Fi, D, Bi, Di, F],
            CycleCornersFixFrontLeft => &[D, L, Di, Ri, D, Li, Di, R],

            TwistCorner => &[Li, Ui, L, U],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Axis, Cube, Direction, Face, Pos, EDGE, N};
    use crate::turn::display_turns;

    /// Solved cube turned so the white face is on top.
    fn white_on_top() -> Cube {
        let mut cube = Cube::new();
        cube.rotate_cube(Axis::Z, Direction::Cw);
        assert_eq!(cube.center(Face::Top), crate::cube::Color::White);
        cube
    }

    fn layer(cube: &Cube, y: usize) -> Vec<[crate::cube::Color; 6]> {
        let mut pieces = vec![];
        for x in 0..N {
            for z in 0..N {
                pieces.push(*cube.piece([x, y, z]).colors());
            }
        }
        pieces
    }

    fn run(cube: &mut Cube, algorithm: Algorithm) {
        for turn in algorithm.turns() {
            cube.apply(turn.section());
        }
    }

    #[test]
    fn last_layer_algorithms_keep_first_two_layers() {
        let solved = white_on_top();
        for &algorithm in &Algorithm::ALL[8..22] {
            let mut cube = solved.clone();
            run(&mut cube, algorithm);
            assert_eq!(layer(&cube, EDGE), layer(&solved, EDGE), "{algorithm}");
            assert_eq!(layer(&cube, 1), layer(&solved, 1), "{algorithm}");
        }
    }

    #[test]
    fn insertions_keep_top_layer() {
        let solved = white_on_top();
        for &algorithm in &Algorithm::ALL[..8] {
            let mut cube = solved.clone();
            run(&mut cube, algorithm);
            assert_eq!(layer(&cube, EDGE), layer(&solved, EDGE), "{algorithm}");
            assert_ne!(layer(&cube, 1), layer(&solved, 1), "{algorithm}");
        }
    }

    #[test]
    fn corner_cycles_fix_their_corner() {
        let cases: [(Algorithm, Pos); 4] = [
            (Algorithm::CycleCornersFixFrontRight, [EDGE, 0, EDGE]),
            (Algorithm::CycleCornersFixBackRight, [EDGE, 0, 0]),
            (Algorithm::CycleCornersFixBackLeft, [0, 0, 0]),
            (Algorithm::CycleCornersFixFrontLeft, [0, 0, EDGE]),
        ];
        let solved = white_on_top();
        for (algorithm, fixed) in cases {
            let mut cube = solved.clone();
            run(&mut cube, algorithm);
            let mut moved = *cube.piece(fixed).colors();
            let mut home = *solved.piece(fixed).colors();
            moved.sort_by_key(|&c| c as u8);
            home.sort_by_key(|&c| c as u8);
            assert_eq!(moved, home, "{algorithm}");
        }
    }

    #[test]
    fn twist_has_order_six() {
        let solved = white_on_top();
        let mut cube = solved.clone();
        run(&mut cube, Algorithm::TwistCorner);
        assert_ne!(cube, solved);
        for _ in 1..6 {
            run(&mut cube, Algorithm::TwistCorner);
        }
        assert_eq!(cube, solved);
    }

    #[test]
    fn sequences_are_written_out() {
        assert_eq!(
            display_turns(Algorithm::InsertRightBack.turns()),
            "D' B' D B R' B R B'"
        );
        assert_eq!(display_turns(Algorithm::TwistCorner.turns()), "L' U' L U");
        for &algorithm in Algorithm::ALL {
            assert!(!algorithm.turns().is_empty());
        }
    }
}
