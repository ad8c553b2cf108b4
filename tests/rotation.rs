use layercube::{Axis, Color, Cube, Direction, Face, SectionTurn, Turn};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn section_turn() -> impl Strategy<Value = SectionTurn> {
    (0..3usize, 0..3usize, any::<bool>())
        .prop_map(|(axis, index, cw)| SectionTurn::new(Axis::ALL[axis], index, Direction::from(cw)))
}

fn scrambled(turns: &[SectionTurn]) -> Cube {
    let mut cube = Cube::new();
    for &turn in turns {
        cube.apply(turn);
    }
    cube
}

proptest! {
    #[test]
    fn turn_then_inverse_restores(
        setup in prop::collection::vec(section_turn(), 0..40),
        turn in section_turn(),
    ) {
        let before = scrambled(&setup);
        let mut cube = before.clone();
        cube.apply(turn);
        cube.apply(turn.inverse());
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn four_quarter_turns_restore(
        setup in prop::collection::vec(section_turn(), 0..40),
        turn in section_turn(),
    ) {
        let before = scrambled(&setup);
        let mut cube = before.clone();
        for _ in 0..4 {
            cube.apply(turn);
        }
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn colors_are_conserved(setup in prop::collection::vec(section_turn(), 0..100)) {
        let cube = scrambled(&setup);
        prop_assert_eq!(cube.color_counts(), Cube::new().color_counts());

        let mut pieces: Vec<[Color; 6]> = (0..27)
            .map(|i| {
                let mut colors = *cube.piece([i / 9, i / 3 % 3, i % 3]).colors();
                colors.sort_by_key(|&c| c as u8);
                colors
            })
            .collect();
        let mut home: Vec<[Color; 6]> = (0..27)
            .map(|i| {
                let mut colors = *Cube::new().piece([i / 9, i / 3 % 3, i % 3]).colors();
                colors.sort_by_key(|&c| c as u8);
                colors
            })
            .collect();
        pieces.sort_by_key(|colors| colors.map(|c| c as u8));
        home.sort_by_key(|colors| colors.map(|c| c as u8));
        prop_assert_eq!(pieces, home);
    }
}

#[test]
fn reset_color_counts() {
    let counts = Cube::new().color_counts();
    for color in Color::ALL {
        let expected = match color {
            Color::Purple | Color::Black => 0,
            _ => 9,
        };
        assert_eq!(counts[color as usize], expected, "{color:?}");
    }
}

#[test]
fn four_bottom_turns_restore() {
    let mut cube = Cube::new();
    for _ in 0..4 {
        cube.rotate_section(Axis::Y, 0, Direction::Cw);
    }
    assert_eq!(cube, Cube::new());
}

#[test]
fn r_turn_moves_and_rotates_the_right_layer() {
    let before = Cube::new();
    let mut cube = before.clone();
    cube.apply(Turn::R.section());

    for y in 0..3 {
        for z in 0..3 {
            // front comes up: (y, z) goes to (z, 2 - y)
            let moved = cube.piece([2, z, 2 - y]);
            let original = before.piece([2, y, z]);
            assert_eq!(moved.color(Face::Right), original.color(Face::Right));
            assert_eq!(moved.color(Face::Left), original.color(Face::Left));
            assert_eq!(moved.color(Face::Top), original.color(Face::Front));
            assert_eq!(moved.color(Face::Back), original.color(Face::Top));
            assert_eq!(moved.color(Face::Bottom), original.color(Face::Back));
            assert_eq!(moved.color(Face::Front), original.color(Face::Bottom));
        }
    }

    // the rest of the cube is untouched
    for x in 0..2 {
        for y in 0..3 {
            for z in 0..3 {
                assert_eq!(cube.piece([x, y, z]), before.piece([x, y, z]));
            }
        }
    }

    assert_eq!(
        cube.face_stickers(Face::Top),
        [
            Color::Green, Color::Green, Color::Red,
            Color::Green, Color::Green, Color::Red,
            Color::Green, Color::Green, Color::Red,
        ]
    );
}

#[test]
fn named_turn_pairs_cancel() {
    for turn in Turn::ALL {
        let mut cube = Cube::new();
        cube.apply(turn.section());
        assert!(!cube.is_solved(), "{turn}");
        cube.apply(turn.inverse().section());
        assert!(cube.is_solved(), "{turn}");
    }
}

#[test]
fn seeded_scrambles_repeat() {
    use rand::SeedableRng;

    let mut a = Cube::new();
    let mut b = Cube::new();
    let turns_a = a.scramble(&mut rand_chacha::ChaCha8Rng::seed_from_u64(7), 100);
    let turns_b = b.scramble(&mut rand_chacha::ChaCha8Rng::seed_from_u64(7), 100);
    assert_eq!(turns_a, turns_b);
    assert_eq!(a, b);
    assert_eq!(turns_a.len(), 100);
}
