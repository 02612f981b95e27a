use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::moves::Move::{self, *};

/// One of the six faces of the cube. Doubles as a sticker color: in the
/// solved state every sticker's color equals the face it sits on.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    U, R, F, D, L, B,
}

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];
pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

/// The 18 quarter/half/quarter' moves, grouped by face U,R,F,D,L,B.
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

/// The 10 moves that preserve membership in G1.
pub const G1_MOVES: [Move; 10] = [U, U2, U3, D, D2, D3, R2, L2, F2, B2];

pub const N_MOVE: usize = 18;
pub const N_MOVE2: usize = 10;

/// 3^7 possible corner orientations.
pub const N_TWIST: usize = 2187;
/// 2^11 possible edge orientations.
pub const N_FLIP: usize = 2048;
/// C(12,4) possible placements of the four slice edges, permutation ignored.
pub const N_SLICE: usize = 495;
/// 8! corner permutations.
pub const N_CORNERS: usize = 40320;
/// 8! permutations of the UD-edges among positions 0..7 (only meaningful in G1).
pub const N_UD_EDGES: usize = 40320;
/// 4! permutations of the slice edges among positions 8..11 (only meaningful in G1).
pub const N_SLICE_PERM: usize = 24;

/// The combinatorial `slice` index of the goal positions {8,9,10,11}.
pub const SLICE_GOAL: u16 = (N_SLICE - 1) as u16;
