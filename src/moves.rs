use std::fmt;
use std::str::FromStr;

use bincode::{Decode, Encode};

use crate::constants::{ALL_COLORS, N_CORNERS, N_FLIP, N_MOVE, N_MOVE2, N_SLICE, N_SLICE_PERM, N_TWIST, N_UD_EDGES};
use crate::cubie::{self, Corner::*, CubieCube, Edge::*};
use crate::error::Error;
use crate::{decode_table, write_table};

/// One of the 18 quarter/half/quarter' face turns.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

use Move::*;

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            U => "U", U2 => "U2", U3 => "U'",
            R => "R", R2 => "R2", R3 => "R'",
            F => "F", F2 => "F2", F3 => "F'",
            D => "D", D2 => "D2", D3 => "D'",
            L => "L", L2 => "L2", L3 => "L'",
            B => "B", B2 => "B2", B3 => "B'",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U), "U2" => Ok(U2), "U'" => Ok(U3),
            "R" => Ok(R), "R2" => Ok(R2), "R'" => Ok(R3),
            "F" => Ok(F), "F2" => Ok(F2), "F'" => Ok(F3),
            "D" => Ok(D), "D2" => Ok(D2), "D'" => Ok(D3),
            "L" => Ok(L), "L2" => Ok(L2), "L'" => Ok(L3),
            "B" => Ok(B), "B2" => Ok(B2), "B'" => Ok(B3),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl Move {
    /// The face this move turns, 0..=5 for U,R,F,D,L,B. Used by the
    /// search's same-axis redundancy pruning.
    pub fn face(&self) -> u8 {
        match self {
            U | U2 | U3 => 0,
            R | R2 | R3 => 1,
            F | F2 | F3 => 2,
            D | D2 | D3 => 3,
            L | L2 | L3 => 4,
            B | B2 | B3 => 5,
        }
    }

    pub fn is_same_layer(&self, other: &Move) -> bool {
        self.face() == other.face()
    }

    pub fn get_inverse(&self) -> Move {
        match self {
            U => U3, U3 => U, U2 => U2,
            R => R3, R3 => R, R2 => R2,
            F => F3, F3 => F, F2 => F2,
            D => D3, D3 => D, D2 => D2,
            L => L3, L3 => L, L2 => L2,
            B => B3, B3 => B, B2 => B2,
        }
    }
}

pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The move-transition tables: for each coordinate and each move, where
/// that coordinate value goes. Built once, cached to `tables/` as bincode.
#[derive(Debug)]
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_move: Vec<u16>,
    pub corner_perm_move: Vec<u16>,
    pub ud_edge_perm_move: Vec<u16>,
    pub slice_perm_move: Vec<u16>,
}

fn load_or_build<T, F>(path: &str, build: F) -> Result<T, Error>
where
    T: Encode + Decode,
    F: FnOnce() -> T,
{
    let bytes = std::fs::read(path).unwrap_or_default();
    if bytes.is_empty() {
        log::debug!("building table {}", path);
        let table = build();
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_table(path, &table)?;
        Ok(table)
    } else {
        decode_table(&bytes)
    }
}

impl MoveTables {
    pub fn new() -> Result<Self, Error> {
        Ok(MoveTables {
            twist_move: load_or_build("tables/move_twist", move_twist)?,
            flip_move: load_or_build("tables/move_flip", move_flip)?,
            slice_move: load_or_build("tables/move_slice", move_slice)?,
            corner_perm_move: load_or_build("tables/move_corner_perm", move_corner_perm)?,
            ud_edge_perm_move: load_or_build("tables/move_ud_edge_perm", move_ud_edge_perm)?,
            slice_perm_move: load_or_build("tables/move_slice_perm", move_slice_perm)?,
        })
    }
}

fn move_twist() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let mut table = vec![0u16; N_TWIST * N_MOVE];
    for i in 0..N_TWIST {
        a.set_twist(i as u16);
        for color in ALL_COLORS {
            for k in 0..3 {
                a.corner_multiply(bmc[color as usize]);
                table[N_MOVE * i + 3 * color as usize + k] = a.get_twist();
            }
            a.corner_multiply(bmc[color as usize]);
        }
    }
    table
}

fn move_flip() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let mut table = vec![0u16; N_FLIP * N_MOVE];
    for i in 0..N_FLIP {
        a.set_flip(i as u16);
        for color in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[color as usize]);
                table[N_MOVE * i + 3 * color as usize + k] = a.get_flip();
            }
            a.edge_multiply(bmc[color as usize]);
        }
    }
    table
}

fn move_slice() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let mut table = vec![0u16; N_SLICE * N_MOVE];
    for i in 0..N_SLICE {
        a.set_slice(i as u16);
        for color in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[color as usize]);
                table[N_MOVE * i + 3 * color as usize + k] = a.get_slice();
            }
            a.edge_multiply(bmc[color as usize]);
        }
    }
    table
}

fn move_corner_perm() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = cubie::basic_move_cubes();
    let mut table = vec![0u16; N_CORNERS * N_MOVE];
    for i in 0..N_CORNERS {
        a.set_corner_perm(i as u16);
        for color in ALL_COLORS {
            for k in 0..3 {
                a.corner_multiply(bmc[color as usize]);
                table[N_MOVE * i + 3 * color as usize + k] = a.get_corner_perm();
            }
            a.corner_multiply(bmc[color as usize]);
        }
    }
    table
}

/// Only meaningful for G1 cubes: the table is still built over the full
/// domain, it simply is never looked up outside phase 2.
fn move_ud_edge_perm() -> Vec<u16> {
    let mut a = CubieCube::default();
    let mut table = vec![0u16; N_UD_EDGES * N_MOVE2];
    for i in 0..N_UD_EDGES {
        a.set_ud_edge_perm(i as u16);
        for (mi, &mv) in crate::constants::G1_MOVES.iter().enumerate() {
            let b = a.apply_move(mv);
            table[N_MOVE2 * i + mi] = b.get_ud_edge_perm();
        }
    }
    table
}

fn move_slice_perm() -> Vec<u16> {
    let mut a = CubieCube::default();
    a.set_slice(crate::constants::SLICE_GOAL);
    let mut table = vec![0u16; N_SLICE_PERM * N_MOVE2];
    for i in 0..N_SLICE_PERM {
        a.set_slice_perm(i as u16);
        for (mi, &mv) in crate::constants::G1_MOVES.iter().enumerate() {
            let b = a.apply_move(mv);
            table[N_MOVE2 * i + mi] = b.get_slice_perm();
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALL_MOVES;

    #[test]
    fn display_and_parse_round_trip() {
        for &mv in ALL_MOVES.iter() {
            let s = mv.to_string();
            let parsed: Move = s.parse().unwrap();
            assert_eq!(mv, parsed);
        }
    }

    #[test]
    fn inverse_is_involution() {
        for &mv in ALL_MOVES.iter() {
            assert_eq!(mv.get_inverse().get_inverse(), mv);
        }
    }

    #[test]
    fn twist_move_table_matches_direct_apply() {
        let table = move_twist();
        let mut cc = CubieCube::default();
        cc.set_twist(123);
        let after = cc.apply_move(Move::R);
        let looked_up = table[N_MOVE * 123 + Move::R.face() as usize * 3];
        assert_eq!(after.get_twist(), looked_up);
    }

    #[test]
    fn flip_move_table_matches_direct_apply() {
        let table = move_flip();
        let mut cc = CubieCube::default();
        cc.set_flip(777);
        let after = cc.apply_move(Move::F2);
        let looked_up = table[N_MOVE * 777 + Move::F.face() as usize * 3 + 1];
        assert_eq!(after.get_flip(), looked_up);
    }
}
