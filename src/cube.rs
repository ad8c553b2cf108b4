use std::fmt;

use lazy_static::lazy_static;
use rand::Rng;

/// Edge length of the cube.
pub const N: usize = 3;
/// Index of the middle section along any axis.
pub const MID: usize = 1;
/// Index of the outer section on the positive side of any axis.
pub const EDGE: usize = N - 1;

/// Grid coordinate `[x, y, z]` with x pointing right, y up and z towards the viewer.
pub type Pos = [usize; 3];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}
impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}
/// Direction of a quarter turn. `Cw` is clockwise when looking down the axis from its negative end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Cw,
    Ccw,
}
impl Direction {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }
    pub fn is_cw(self) -> bool {
        self == Direction::Cw
    }
}
impl From<bool> for Direction {
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Direction::Cw
        } else {
            Direction::Ccw
        }
    }
}

/// Outward direction of a sticker slot, fixed to the cube's own frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Right = 0,
    Left = 1,
    Top = 2,
    Bottom = 3,
    Front = 4,
    Back = 5,
}
impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Color this face shows after a reset.
    pub fn home_color(self) -> Color {
        match self {
            Face::Right => Color::White,
            Face::Left => Color::Blue,
            Face::Top => Color::Green,
            Face::Bottom => Color::Orange,
            Face::Front => Color::Red,
            Face::Back => Color::Yellow,
        }
    }
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }
    /// Section index of the outer layer this face belongs to.
    pub fn layer(self) -> usize {
        match self {
            Face::Right | Face::Top | Face::Front => EDGE,
            Face::Left | Face::Bottom | Face::Back => 0,
        }
    }
    /// Grid position of this face's center piece.
    pub fn center(self) -> Pos {
        let mut pos = [MID; 3];
        pos[self.axis() as usize] = self.layer();
        pos
    }
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Purple = 3,
    Orange = 4,
    Yellow = 5,
    /// Interior face, never visible.
    Black = 6,
    White = 7,
}
impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Orange,
        Color::Yellow,
        Color::Black,
        Color::White,
    ];

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Purple => 'p',
            Color::Orange => 'o',
            Color::Yellow => 'y',
            Color::Black => '.',
            Color::White => 'w',
        }
    }
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Red => [255, 0, 0],
            Color::Green => [0, 255, 0],
            Color::Blue => [0, 0, 255],
            Color::Purple => [255, 0, 255],
            Color::Orange => [255, 128, 0],
            Color::Yellow => [255, 255, 0],
            Color::Black => [0, 0, 0],
            Color::White => [255, 255, 255],
        }
    }
}

/// One cubie: the color shown in each of the six face slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    colors: [Color; 6],
}
impl Piece {
    /// Builds the piece that sits at `pos` on a freshly reset cube.
    pub fn new(pos: Pos) -> Self {
        let mut colors = [Color::Black; 6];
        for face in Face::ALL {
            if pos[face.axis() as usize] == face.layer() {
                colors[face as usize] = face.home_color();
            }
        }
        Self { colors }
    }
    /// A piece with arbitrary colors, indexed by `Face as usize`.
    pub fn from_colors(colors: [Color; 6]) -> Self {
        Self { colors }
    }
    pub fn color(&self, face: Face) -> Color {
        self.colors[face as usize]
    }
    pub fn colors(&self) -> &[Color; 6] {
        &self.colors
    }

    /// Quarter-turns the piece in place. The two slots on `axis` keep their colors.
    pub fn rotate(&mut self, axis: Axis, direction: Direction) {
        use Face::*;

        // each slot takes the color of the slot after it
        let [a, b, c, d] = match (axis, direction) {
            (Axis::X, Direction::Cw) => [Top, Back, Bottom, Front],
            (Axis::X, Direction::Ccw) => [Top, Front, Bottom, Back],
            (Axis::Y, Direction::Cw) => [Front, Left, Back, Right],
            (Axis::Y, Direction::Ccw) => [Front, Right, Back, Left],
            (Axis::Z, Direction::Cw) => [Top, Right, Bottom, Left],
            (Axis::Z, Direction::Ccw) => [Top, Left, Bottom, Right],
        };
        let first = self.colors[a as usize];
        self.colors[a as usize] = self.colors[b as usize];
        self.colors[b as usize] = self.colors[c as usize];
        self.colors[c as usize] = self.colors[d as usize];
        self.colors[d as usize] = first;
    }
}

/// A quarter turn of one section: the slice at `index` along `axis`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SectionTurn {
    pub axis: Axis,
    pub index: usize,
    pub direction: Direction,
}
impl SectionTurn {
    pub fn new(axis: Axis, index: usize, direction: Direction) -> Self {
        Self {
            axis,
            index,
            direction,
        }
    }
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }
}

/// One intermediate frame of an animated section turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub turn: SectionTurn,
    /// Signed angle in degrees, positive for `Cw`.
    pub angle: f32,
    pub step: usize,
    pub steps: usize,
}

lazy_static! {
    /// The nine grid positions showing each face, row by row as seen from outside the cube.
    static ref FACE_CELLS: [[Pos; 9]; 6] = {
        let mut cells = [[[0; 3]; 9]; 6];
        for face in Face::ALL {
            for row in 0..N {
                for col in 0..N {
                    cells[face as usize][row * N + col] = match face {
                        Face::Top => [col, EDGE, row],
                        Face::Bottom => [col, 0, EDGE - row],
                        Face::Front => [col, EDGE - row, EDGE],
                        Face::Back => [EDGE - col, EDGE - row, 0],
                        Face::Right => [EDGE, EDGE - row, EDGE - col],
                        Face::Left => [0, EDGE - row, col],
                    };
                }
            }
        }
        cells
    };
}

fn grid_index([x, y, z]: Pos) -> usize {
    x * N * N + y * N + z
}

/// Position of cell `(a, b)` within section `index` along `axis`.
fn slice_pos(axis: Axis, index: usize, a: usize, b: usize) -> Pos {
    match axis {
        Axis::X => [index, a, b],
        Axis::Y => [a, index, b],
        Axis::Z => [a, b, index],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    pieces: [Piece; N * N * N],
}
impl Default for Cube {
    fn default() -> Self {
        let mut pieces = [Piece::new([0; 3]); N * N * N];
        for x in 0..N {
            for y in 0..N {
                for z in 0..N {
                    pieces[grid_index([x, y, z])] = Piece::new([x, y, z]);
                }
            }
        }
        Self { pieces }
    }
}
impl Cube {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the canonical solved layout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn piece(&self, pos: Pos) -> &Piece {
        &self.pieces[grid_index(pos)]
    }
    /// Overwrites one cell. The result need not be reachable by turning.
    pub fn set_piece(&mut self, pos: Pos, piece: Piece) {
        self.pieces[grid_index(pos)] = piece;
    }
    pub fn sticker(&self, pos: Pos, face: Face) -> Color {
        self.piece(pos).color(face)
    }
    /// Outward color of the center piece on `face`.
    pub fn center(&self, face: Face) -> Color {
        self.sticker(face.center(), face)
    }
    pub fn face_stickers(&self, face: Face) -> [Color; 9] {
        FACE_CELLS[face as usize].map(|pos| self.sticker(pos, face))
    }
    /// Face whose center shows `color`, if any.
    pub fn locate_center(&self, color: Color) -> Option<Face> {
        Face::ALL.into_iter().find(|&face| self.center(face) == color)
    }

    /// Turns one section a quarter turn. Pieces move to their new cells and their
    /// colors rotate with them. An out of range `index` is ignored.
    pub fn rotate_section(&mut self, axis: Axis, index: usize, direction: Direction) {
        if index >= N {
            return;
        }
        let cell = |a: usize, b: usize| grid_index(slice_pos(axis, index, a, b));

        for a in 0..N {
            for b in 0..N {
                self.pieces[cell(a, b)].rotate(axis, direction);
            }
        }

        // the (a, b) plane of the Y section is mirrored relative to the other two
        let forward = direction.is_cw() != (axis == Axis::Y);
        for ring in 0..N / 2 {
            let far = N - 1 - ring;
            for i in 0..far - ring {
                let p0 = cell(ring, ring + i);
                let p1 = cell(ring + i, far);
                let p2 = cell(far, far - i);
                let p3 = cell(far - i, ring);
                if forward {
                    self.cycle([p0, p1, p2, p3]);
                } else {
                    self.cycle([p0, p3, p2, p1]);
                }
            }
        }
    }

    /// Same as [`Cube::rotate_section`], calling `on_frame` for each intermediate
    /// angle first. With `steps <= 1` the turn is applied without frames.
    pub fn rotate_section_animated<F>(
        &mut self,
        axis: Axis,
        index: usize,
        direction: Direction,
        steps: usize,
        mut on_frame: F,
    ) where
        F: FnMut(&Cube, Frame),
    {
        let turn = SectionTurn::new(axis, index, direction);
        if steps > 1 && index < N {
            let sign = if direction.is_cw() { 1.0 } else { -1.0 };
            for step in 0..steps {
                let angle = sign * 90.0 * step as f32 / steps as f32;
                on_frame(
                    self,
                    Frame {
                        turn,
                        angle,
                        step,
                        steps,
                    },
                );
            }
        }
        self.rotate_section(axis, index, direction);
    }

    pub fn apply(&mut self, turn: SectionTurn) {
        self.rotate_section(turn.axis, turn.index, turn.direction);
    }

    /// Reorients the whole cube by turning every section along `axis`.
    pub fn rotate_cube(&mut self, axis: Axis, direction: Direction) {
        for index in 0..N {
            self.rotate_section(axis, index, direction);
        }
    }

    /// Applies `turns` random section turns, middle sections included, and
    /// returns them in the order applied.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, turns: usize) -> Vec<SectionTurn> {
        let mut applied = Vec::with_capacity(turns);
        for _ in 0..turns {
            let direction = Direction::from(rng.random_bool(0.5));
            let index = rng.random_range(0..N);
            let axis = Axis::ALL[rng.random_range(0..Axis::ALL.len())];
            let turn = SectionTurn::new(axis, index, direction);
            self.apply(turn);
            applied.push(turn);
        }
        applied
    }

    /// Whether every outer face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let stickers = self.face_stickers(face);
            stickers.iter().all(|&c| c == stickers[0])
        })
    }

    /// Number of visible stickers of each color, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 8] {
        let mut counts = [0; 8];
        for face in Face::ALL {
            for color in self.face_stickers(face) {
                counts[color as usize] += 1;
            }
        }
        counts
    }

    fn cycle(&mut self, [a, b, c, d]: [usize; 4]) {
        let first = self.pieces[a];
        self.pieces[a] = self.pieces[b];
        self.pieces[b] = self.pieces[c];
        self.pieces[c] = self.pieces[d];
        self.pieces[d] = first;
    }
}

impl fmt::Display for Cube {
    /// Unfolded net: top above, then left front right back, then bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| -> String {
            self.face_stickers(face)[r * N..(r + 1) * N]
                .iter()
                .map(|c| c.letter())
                .collect()
        };
        let pad = " ".repeat(N + 1);
        for r in 0..N {
            writeln!(f, "{pad}{}", row(Face::Top, r))?;
        }
        for r in 0..N {
            let belt: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| row(face, r))
                .collect();
            writeln!(f, "{}", belt.join(" "))?;
        }
        for r in 0..N {
            writeln!(f, "{pad}{}", row(Face::Bottom, r))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_layout() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        for face in Face::ALL {
            assert_eq!(cube.center(face), face.home_color());
        }
        // the core piece shows nothing
        assert!(cube.piece([MID; 3]).colors().iter().all(|&c| c == Color::Black));
        assert_eq!(cube.sticker([EDGE, EDGE, EDGE], Face::Right), Color::White);
        assert_eq!(cube.sticker([EDGE, EDGE, EDGE], Face::Left), Color::Black);
        assert_eq!(cube.sticker([0, 0, 0], Face::Bottom), Color::Orange);
    }

    #[test]
    fn piece_rotation_keeps_axis_slots() {
        let mut piece = Piece::new([EDGE, EDGE, EDGE]);
        piece.rotate(Axis::X, Direction::Cw);
        assert_eq!(piece.color(Face::Right), Color::White);
        assert_eq!(piece.color(Face::Left), Color::Black);
        // top takes back, back takes bottom, bottom takes front, front takes top
        assert_eq!(piece.color(Face::Top), Color::Black);
        assert_eq!(piece.color(Face::Back), Color::Black);
        assert_eq!(piece.color(Face::Bottom), Color::Red);
        assert_eq!(piece.color(Face::Front), Color::Green);
    }

    #[test]
    fn piece_rotation_inverse() {
        let original = Piece::new([0, EDGE, EDGE]);
        for axis in Axis::ALL {
            let mut piece = original;
            piece.rotate(axis, Direction::Cw);
            assert_ne!(piece, original);
            piece.rotate(axis, Direction::Ccw);
            assert_eq!(piece, original);
        }
    }

    #[test]
    fn out_of_range_section_is_ignored() {
        let mut cube = Cube::new();
        cube.rotate_section(Axis::Y, N, Direction::Cw);
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn middle_turn_is_not_solved() {
        let mut cube = Cube::new();
        cube.rotate_section(Axis::Z, MID, Direction::Cw);
        assert!(!cube.is_solved());
        // the right center moved to the top
        assert_eq!(cube.center(Face::Top), Color::White);
        assert_eq!(cube.locate_center(Color::White), Some(Face::Top));
    }

    #[test]
    fn whole_cube_rotation_stays_solved() {
        let mut cube = Cube::new();
        for axis in Axis::ALL {
            cube.rotate_cube(axis, Direction::Cw);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn animation_frames() {
        let mut cube = Cube::new();
        let mut angles = vec![];
        cube.rotate_section_animated(Axis::X, EDGE, Direction::Ccw, 4, |c, frame| {
            assert!(c.is_solved());
            angles.push(frame.angle);
        });
        assert_eq!(angles, vec![0.0, -22.5, -45.0, -67.5]);
        assert!(!cube.is_solved());

        let mut called = false;
        cube.rotate_section_animated(Axis::X, EDGE, Direction::Cw, 1, |_, _| called = true);
        assert!(!called);
        assert!(cube.is_solved());
    }

    #[test]
    fn net_display() {
        let net = Cube::new().to_string();
        let lines: Vec<&str> = net.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    ggg");
        assert_eq!(lines[3], "bbb rrr www yyy");
        assert_eq!(lines[8], "    ooo");
    }
}
