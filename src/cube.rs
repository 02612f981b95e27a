use crate::constants::{Color, ALL_COLORS};
use crate::cubie::{Corner, CubieCube, Edge};
use crate::error::Error;
use crate::moves::Move;

pub const ROWS: usize = 9;
pub const COLS: usize = 12;

/// Flat facelet index -> (row, col) in the 9x12 cross-shaped grid, in
/// U1..U9,R1..R9,F1..F9,D1..D9,L1..L9,B1..B9 order:
/// ```text
///             U1 U2 U3
///             U4 U5 U6
///             U7 U8 U9
/// L1 L2 L3    F1 F2 F3    R1 R2 R3    B1 B2 B3
/// L4 L5 L6    F4 F5 F6    R4 R5 R6    B4 B5 B6
/// L7 L8 L9    F7 F8 F9    R7 R8 R9    B7 B8 B9
///             D1 D2 D3
///             D4 D5 D6
///             D7 D8 D9
/// ```
#[rustfmt::skip]
pub const GRID_POS: [(usize, usize); 54] = [
    (0,3),(0,4),(0,5),(1,3),(1,4),(1,5),(2,3),(2,4),(2,5),
    (3,6),(3,7),(3,8),(4,6),(4,7),(4,8),(5,6),(5,7),(5,8),
    (3,3),(3,4),(3,5),(4,3),(4,4),(4,5),(5,3),(5,4),(5,5),
    (6,3),(6,4),(6,5),(7,3),(7,4),(7,5),(8,3),(8,4),(8,5),
    (3,0),(3,1),(3,2),(4,0),(4,1),(4,2),(5,0),(5,1),(5,2),
    (3,9),(3,10),(3,11),(4,9),(4,10),(4,11),(5,9),(5,10),(5,11),
];

/// The six center-sticker flat indices, U,R,F,D,L,B.
pub const CENTER_FACELET: [usize; 6] = [4, 13, 22, 31, 40, 49];
pub const CENTER_COLOR: [Color; 6] = ALL_COLORS;

/// For each corner position 0..7, the flat facelet indices of its 3
/// stickers, ordered U/D-first-possible then the remaining two clockwise.
#[rustfmt::skip]
pub const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],   // URF
    [6, 18, 38],  // UFL
    [0, 36, 47],  // ULB
    [2, 45, 11],  // UBR
    [29, 26, 15], // DFR
    [27, 44, 24], // DLF
    [33, 53, 42], // DBL
    [35, 17, 51], // DRB
];

/// For each edge position 0..11, the flat facelet indices of its 2
/// stickers.
#[rustfmt::skip]
pub const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10], [7, 19], [3, 37], [1, 46],
    [32, 16], [28, 25], [30, 43], [34, 52],
    [23, 12], [21, 41], [50, 39], [48, 14],
];

#[rustfmt::skip]
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F], [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B], [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R], [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L], [Color::D, Color::R, Color::B],
];

#[rustfmt::skip]
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R], [Color::U, Color::F], [Color::U, Color::L], [Color::U, Color::B],
    [Color::D, Color::R], [Color::D, Color::F], [Color::D, Color::L], [Color::D, Color::B],
    [Color::F, Color::R], [Color::F, Color::L], [Color::B, Color::L], [Color::B, Color::R],
];

/// Cube on the sticker level: a 9x12 grid of colored facelets in the
/// cross-shaped unfolding, plus blank cells at the corners of the cross.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    grid: [[Option<Color>; COLS]; ROWS],
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Cube {
    /// The canonical solved layout: every sticker equals its face's color.
    pub fn new_solved() -> Self {
        let mut grid = [[None; COLS]; ROWS];
        for (flat, &(r, c)) in GRID_POS.iter().enumerate() {
            grid[r][c] = Some(ALL_COLORS[flat / 9]);
        }
        Cube { grid }
    }

    /// Parses a 9-line sticker grid. Rows 0-2 and 6-8 must be 3 spaces
    /// followed by 3 color characters; rows 3-5 must be 12 color
    /// characters. The six center stickers (fixed positions) name the six
    /// colors; every other character must be one of those six, and each
    /// color must occur exactly 9 times across the grid.
    pub fn from_grid(rows: &[&str]) -> Result<Self, Error> {
        if rows.len() != ROWS {
            return Err(Error::MalformedInput(format!(
                "expected 9 rows, got {}",
                rows.len()
            )));
        }

        let mut raw: [[Option<char>; COLS]; ROWS] = [[None; COLS]; ROWS];
        for (i, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if (0..3).contains(&i) || (6..9).contains(&i) {
                if chars.len() != 6 || chars[0..3] != [' ', ' ', ' '][..] {
                    return Err(Error::MalformedInput(format!(
                        "row {} must be 3 spaces followed by 3 color characters",
                        i
                    )));
                }
                for (k, &ch) in chars[3..6].iter().enumerate() {
                    raw[i][3 + k] = Some(ch);
                }
            } else {
                if chars.len() != 12 {
                    return Err(Error::MalformedInput(format!(
                        "row {} must be exactly 12 color characters",
                        i
                    )));
                }
                for (k, &ch) in chars.iter().enumerate() {
                    raw[i][k] = Some(ch);
                }
            }
        }

        let mut char_to_color = std::collections::HashMap::new();
        for (face, &flat) in CENTER_FACELET.iter().enumerate() {
            let (r, c) = GRID_POS[flat];
            let ch = raw[r][c].ok_or_else(|| {
                Error::MalformedInput("center sticker missing".into())
            })?;
            if char_to_color.insert(ch, ALL_COLORS[face]).is_some() {
                return Err(Error::MalformedInput(
                    "two faces share the same center color".into(),
                ));
            }
        }

        let mut grid = [[None; COLS]; ROWS];
        let mut counts = [0u8; 6];
        for &(r, c) in GRID_POS.iter() {
            let ch = raw[r][c].ok_or_else(|| Error::MalformedInput("missing sticker".into()))?;
            let color = *char_to_color
                .get(&ch)
                .ok_or_else(|| Error::MalformedInput(format!("unknown color character '{}'", ch)))?;
            counts[color as usize] += 1;
            grid[r][c] = Some(color);
        }
        if counts.iter().any(|&n| n != 9) {
            return Err(Error::MalformedInput(
                "each color must appear exactly 9 times".into(),
            ));
        }

        Ok(Cube { grid })
    }

    /// Color at grid cell `(row, col)`, or `None` for a blank cross corner.
    pub fn sticker(&self, row: usize, col: usize) -> Option<Color> {
        self.grid[row][col]
    }

    pub fn is_solved(&self) -> bool {
        *self == Cube::new_solved()
    }

    /// Rotates `face` clockwise `quarter_turns` times (1, 2 or 3), in
    /// place.
    pub fn apply(&mut self, face: Color, quarter_turns: u8) -> Result<(), Error> {
        let mv = match (face, quarter_turns) {
            (Color::U, 1) => Move::U,
            (Color::U, 2) => Move::U2,
            (Color::U, 3) => Move::U3,
            (Color::R, 1) => Move::R,
            (Color::R, 2) => Move::R2,
            (Color::R, 3) => Move::R3,
            (Color::F, 1) => Move::F,
            (Color::F, 2) => Move::F2,
            (Color::F, 3) => Move::F3,
            (Color::D, 1) => Move::D,
            (Color::D, 2) => Move::D2,
            (Color::D, 3) => Move::D3,
            (Color::L, 1) => Move::L,
            (Color::L, 2) => Move::L2,
            (Color::L, 3) => Move::L3,
            (Color::B, 1) => Move::B,
            (Color::B, 2) => Move::B2,
            (Color::B, 3) => Move::B3,
            _ => {
                return Err(Error::MalformedInput(
                    "quarter_turns must be 1, 2 or 3".into(),
                ))
            }
        };
        let cc = CubieCube::try_from(&*self)?;
        *self = Cube::from(&cc.apply_move(mv));
        Ok(())
    }
}

impl TryFrom<&Cube> for CubieCube {
    type Error = Error;

    /// Identifies, for each corner and edge position, which cubie sits
    /// there and its orientation, by matching the sticker colors at that
    /// position's facelets against the home-color tables.
    fn try_from(cube: &Cube) -> Result<Self, Self::Error> {
        let facelet = |i: usize| -> Result<Color, Error> {
            let (r, c) = GRID_POS[i];
            cube.grid[r][c]
                .ok_or_else(|| Error::MalformedInput("incomplete grid".into()))
        };

        let mut state = CubieCube::default();
        for i in 0..8 {
            let mut ori = 0;
            for index in 0..3 {
                ori = index;
                let col = facelet(CORNER_FACELET[i][ori])?;
                if col == Color::U || col == Color::D {
                    break;
                }
            }
            let col1 = facelet(CORNER_FACELET[i][(ori + 1) % 3])?;
            let col2 = facelet(CORNER_FACELET[i][(ori + 2) % 3])?;

            let mut found = false;
            for j in 0..8 {
                if col1 == CORNER_COLOR[j][1] && col2 == CORNER_COLOR[j][2] {
                    state.cp[i] = Corner::try_from(j as u8)?;
                    state.co[i] = ori as u8 % 3;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InconsistentCube(
                    "corner sticker colors match no known corner".into(),
                ));
            }
        }

        for i in 0..12 {
            let c0 = facelet(EDGE_FACELET[i][0])?;
            let c1 = facelet(EDGE_FACELET[i][1])?;
            let mut found = false;
            for j in 0..12 {
                if c0 == EDGE_COLOR[j][0] && c1 == EDGE_COLOR[j][1] {
                    state.ep[i] = Edge::try_from(j as u8)?;
                    state.eo[i] = 0;
                    found = true;
                    break;
                }
                if c0 == EDGE_COLOR[j][1] && c1 == EDGE_COLOR[j][0] {
                    state.ep[i] = Edge::try_from(j as u8)?;
                    state.eo[i] = 1;
                    found = true;
                    break;
                }
            }
            if !found {
                return Err(Error::InconsistentCube(
                    "edge sticker colors match no known edge".into(),
                ));
            }
        }

        if !state.is_solvable() {
            return Err(Error::InconsistentCube(
                "parity invariants violated; unreachable from solved".into(),
            ));
        }
        Ok(state)
    }
}

impl From<&CubieCube> for Cube {
    fn from(cc: &CubieCube) -> Self {
        let mut grid = [[None; COLS]; ROWS];

        for (face, &flat) in CENTER_FACELET.iter().enumerate() {
            let (r, c) = GRID_POS[flat];
            grid[r][c] = Some(CENTER_COLOR[face]);
        }

        for (i, corner_faces) in CORNER_FACELET.iter().enumerate() {
            let corner = cc.cp[i] as usize;
            for (j, &flat) in corner_faces.iter().enumerate() {
                let (r, c) = GRID_POS[flat];
                grid[r][c] = Some(CORNER_COLOR[corner][(j + (3 - cc.co[i] as usize)) % 3]);
            }
        }

        for (i, edge_faces) in EDGE_FACELET.iter().enumerate() {
            let edge = cc.ep[i] as usize;
            for (j, &flat) in edge_faces.iter().enumerate() {
                let (r, c) = GRID_POS[flat];
                grid[r][c] = Some(EDGE_COLOR[edge][(j + cc.eo[i] as usize) % 2]);
            }
        }

        Cube { grid }
    }
}
