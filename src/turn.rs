use std::{fmt, str::FromStr};

use cubesim::{parse_scramble, Move, MoveVariant};

use crate::cube::{Axis, Direction, SectionTurn, EDGE, MID, N};
use crate::error::{NotationError, TurnParseError};

/// The twelve outer-layer quarter turns the solver speaks in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    R,
    RPrime,
    L,
    LPrime,
    F,
    FPrime,
    B,
    BPrime,
    D,
    DPrime,
    U,
    UPrime,
}
impl Turn {
    pub const ALL: [Turn; 12] = [
        Turn::R,
        Turn::RPrime,
        Turn::L,
        Turn::LPrime,
        Turn::F,
        Turn::FPrime,
        Turn::B,
        Turn::BPrime,
        Turn::D,
        Turn::DPrime,
        Turn::U,
        Turn::UPrime,
    ];

    /// The section turn this named turn performs.
    pub fn section(self) -> SectionTurn {
        use Direction::{Ccw, Cw};
        use Turn::*;

        let (axis, index, direction) = match self {
            R => (Axis::X, EDGE, Ccw),
            RPrime => (Axis::X, EDGE, Cw),
            L => (Axis::X, 0, Cw),
            LPrime => (Axis::X, 0, Ccw),
            F => (Axis::Z, EDGE, Ccw),
            FPrime => (Axis::Z, EDGE, Cw),
            B => (Axis::Z, 0, Cw),
            BPrime => (Axis::Z, 0, Ccw),
            D => (Axis::Y, 0, Cw),
            DPrime => (Axis::Y, 0, Ccw),
            U => (Axis::Y, EDGE, Ccw),
            UPrime => (Axis::Y, EDGE, Cw),
        };
        SectionTurn::new(axis, index, direction)
    }

    /// The named turn performing `section`, if it turns an outer layer.
    pub fn from_section(section: SectionTurn) -> Option<Turn> {
        Turn::ALL.into_iter().find(|turn| turn.section() == section)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        use Turn::*;

        match self {
            R => RPrime,
            RPrime => R,
            L => LPrime,
            LPrime => L,
            F => FPrime,
            FPrime => F,
            B => BPrime,
            BPrime => B,
            D => DPrime,
            DPrime => D,
            U => UPrime,
            UPrime => U,
        }
    }
}
impl FromStr for Turn {
    type Err = TurnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Turn::*;

        match s {
            "R" => Ok(R),
            "R'" => Ok(RPrime),
            "L" => Ok(L),
            "L'" => Ok(LPrime),
            "F" => Ok(F),
            "F'" => Ok(FPrime),
            "B" => Ok(B),
            "B'" => Ok(BPrime),
            "D" => Ok(D),
            "D'" => Ok(DPrime),
            "U" => Ok(U),
            "U'" => Ok(UPrime),
            _ => Err(TurnParseError(s.to_owned())),
        }
    }
}
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Turn::*;

        let s = match self {
            R => "R",
            RPrime => "R'",
            L => "L",
            LPrime => "L'",
            F => "F",
            FPrime => "F'",
            B => "B",
            BPrime => "B'",
            D => "D",
            DPrime => "D'",
            U => "U",
            UPrime => "U'",
        };
        f.write_str(s)
    }
}

/// Standard notation for a section turn: the outer layers by face and the
/// middle slices as `M` (following `L`), `E` (following `D`) and `S` (following `F`).
impl fmt::Display for SectionTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(turn) = Turn::from_section(*self) {
            return write!(f, "{turn}");
        }
        let (slice, forward) = match self.axis {
            Axis::X => ('M', Direction::Cw),
            Axis::Y => ('E', Direction::Cw),
            Axis::Z => ('S', Direction::Ccw),
        };
        if self.index != MID {
            return write!(f, "{:?}{}{:?}", self.axis, self.index, self.direction);
        }
        let prime = if self.direction == forward { "" } else { "'" };
        write!(f, "{slice}{prime}")
    }
}

pub fn parse_turns(turns: &str) -> Result<Vec<Turn>, TurnParseError> {
    turns.split_ascii_whitespace().map(str::parse).collect()
}

pub fn display_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(Turn::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expands a scramble in standard cube notation into section turns. Accepts
/// face turns, wide turns and whole-cube rotations with `2` and `'` suffixes.
pub fn sections_from_notation(scramble: &str) -> Result<Vec<SectionTurn>, NotationError> {
    let mut sections = vec![];
    for token in scramble.split_ascii_whitespace() {
        if !is_notation_token(token) {
            return Err(NotationError::UnknownToken(token.to_owned()));
        }
        let moves = parse_scramble(token.to_owned());
        if moves.len() != 1 {
            return Err(NotationError::UnknownToken(token.to_owned()));
        }
        for mv in moves {
            sections.extend(move_sections(mv)?);
        }
    }
    Ok(sections)
}

fn is_notation_token(token: &str) -> bool {
    let body = token
        .strip_suffix('\'')
        .or_else(|| token.strip_suffix('2'))
        .unwrap_or(token);
    let face = body.strip_suffix('w').unwrap_or(body);
    match face {
        "R" | "L" | "U" | "D" | "F" | "B" => true,
        "x" | "y" | "z" => face == body,
        _ => false,
    }
}

fn move_sections(mv: Move) -> Result<Vec<SectionTurn>, NotationError> {
    use Direction::{Ccw, Cw};

    // outer layer, direction of the plain move and how many layers deep it reaches
    let (axis, outer, direction, depth, variant) = match mv {
        Move::R(v) => (Axis::X, EDGE, Ccw, 1, v),
        Move::L(v) => (Axis::X, 0, Cw, 1, v),
        Move::U(v) => (Axis::Y, EDGE, Ccw, 1, v),
        Move::D(v) => (Axis::Y, 0, Cw, 1, v),
        Move::F(v) => (Axis::Z, EDGE, Ccw, 1, v),
        Move::B(v) => (Axis::Z, 0, Cw, 1, v),
        Move::Rw(2, v) => (Axis::X, EDGE, Ccw, 2, v),
        Move::Lw(2, v) => (Axis::X, 0, Cw, 2, v),
        Move::Uw(2, v) => (Axis::Y, EDGE, Ccw, 2, v),
        Move::Dw(2, v) => (Axis::Y, 0, Cw, 2, v),
        Move::Fw(2, v) => (Axis::Z, EDGE, Ccw, 2, v),
        Move::Bw(2, v) => (Axis::Z, 0, Cw, 2, v),
        Move::X(v) => (Axis::X, EDGE, Ccw, N, v),
        Move::Y(v) => (Axis::Y, EDGE, Ccw, N, v),
        Move::Z(v) => (Axis::Z, EDGE, Ccw, N, v),
        _ => return Err(NotationError::Unsupported(format!("{mv:?}"))),
    };
    let (direction, repeat) = match variant {
        MoveVariant::Standard => (direction, 1),
        MoveVariant::Double => (direction, 2),
        MoveVariant::Inverse => (direction.inverse(), 1),
    };
    let mut sections = vec![];
    for _ in 0..repeat {
        for d in 0..depth {
            let index = if outer == 0 { d } else { EDGE - d };
            sections.push(SectionTurn::new(axis, index, direction));
        }
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Cube, Face};

    #[test]
    fn parse_and_display() {
        let turns = parse_turns("R U R' U'").unwrap();
        assert_eq!(turns, vec![Turn::R, Turn::U, Turn::RPrime, Turn::UPrime]);
        assert_eq!(display_turns(&turns), "R U R' U'");
        assert!(parse_turns("R2").is_err());
        assert!(parse_turns("").unwrap().is_empty());
    }

    #[test]
    fn every_turn_round_trips_through_text() {
        for turn in Turn::ALL {
            assert_eq!(turn.to_string().parse::<Turn>().unwrap(), turn);
            assert_eq!(turn.inverse().section(), turn.section().inverse());
        }
    }

    #[test]
    fn r_moves_front_to_top() {
        let mut cube = Cube::new();
        cube.apply(Turn::R.section());
        // R lifts the front column of the right layer to the top
        assert_eq!(cube.sticker([EDGE, EDGE, MID], Face::Top), Face::Front.home_color());
        assert_eq!(cube.sticker([EDGE, EDGE, MID], Face::Right), Face::Right.home_color());
    }

    #[test]
    fn u_moves_front_to_left() {
        let mut cube = Cube::new();
        cube.apply(Turn::U.section());
        assert_eq!(cube.sticker([0, EDGE, MID], Face::Left), Face::Front.home_color());
    }

    #[test]
    fn f_moves_top_to_right() {
        let mut cube = Cube::new();
        cube.apply(Turn::F.section());
        assert_eq!(cube.sticker([EDGE, MID, EDGE], Face::Right), Face::Top.home_color());
    }

    #[test]
    fn section_turn_notation() {
        assert_eq!(Turn::RPrime.section().to_string(), "R'");
        assert_eq!(SectionTurn::new(Axis::X, MID, Direction::Cw).to_string(), "M");
        assert_eq!(SectionTurn::new(Axis::Y, MID, Direction::Ccw).to_string(), "E'");
        assert_eq!(SectionTurn::new(Axis::Z, MID, Direction::Cw).to_string(), "S'");
        assert_eq!(Turn::from_section(SectionTurn::new(Axis::Z, MID, Direction::Cw)), None);
    }

    #[test]
    fn notation_matches_named_turns() {
        let sections = sections_from_notation("R U' F B' L D").unwrap();
        let named: Vec<SectionTurn> = parse_turns("R U' F B' L D")
            .unwrap()
            .into_iter()
            .map(Turn::section)
            .collect();
        assert_eq!(sections, named);
    }

    #[test]
    fn notation_doubles_wides_and_rotations() {
        assert_eq!(
            sections_from_notation("R2").unwrap(),
            vec![Turn::R.section(), Turn::R.section()]
        );
        assert_eq!(sections_from_notation("Rw").unwrap().len(), 2);
        assert_eq!(sections_from_notation("y'").unwrap().len(), 3);

        let mut cube = Cube::new();
        for turn in sections_from_notation("x y2 z'").unwrap() {
            cube.apply(turn);
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn notation_rejects_garbage() {
        assert!(matches!(
            sections_from_notation("R Q"),
            Err(NotationError::UnknownToken(t)) if t == "Q"
        ));
        assert!(sections_from_notation("xw").is_err());
    }
}
