use std::fmt;

use crate::constants::SLICE_GOAL;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MoveTables};

/// A cube state reduced to the six coordinates the two phases search over.
///
/// Phase 1 only reads `twist`, `flip` and `slice`. Phase 2 only reads
/// `corner_perm`, `ud_edge_perm` and `slice_perm`, and is only meaningful
/// once the cube is in G1.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Coord {
    pub twist: u16,
    pub flip: u16,
    pub slice: u16,
    pub corner_perm: u16,
    pub ud_edge_perm: u16,
    pub slice_perm: u16,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(twist: {}, flip: {}, slice: {}, cornerPerm: {}, udEdgePerm: {}, slicePerm: {})",
            self.twist, self.flip, self.slice, self.corner_perm, self.ud_edge_perm, self.slice_perm
        )
    }
}

impl Coord {
    /// Extracts all six coordinates from a cubie-level cube. Rejects cubes
    /// that violate the parity invariants.
    pub fn from_cubie(cc: &CubieCube) -> Result<Self, Error> {
        if !cc.is_solvable() {
            return Err(Error::InconsistentCube(
                "corner/edge orientation or permutation parity invariant violated".into(),
            ));
        }
        Ok(Self {
            twist: cc.get_twist(),
            flip: cc.get_flip(),
            slice: cc.get_slice(),
            corner_perm: cc.get_corner_perm(),
            ud_edge_perm: if cc.get_slice() == SLICE_GOAL {
                cc.get_ud_edge_perm()
            } else {
                u16::MAX
            },
            slice_perm: if cc.get_slice() == SLICE_GOAL {
                cc.get_slice_perm()
            } else {
                u16::MAX
            },
        })
    }

    /// True exactly when the twist/flip/slice triple is the phase-1 goal.
    pub fn is_g1(&self) -> bool {
        self.twist == 0 && self.flip == 0 && self.slice == SLICE_GOAL
    }

    /// True exactly when the phase-2 coordinates are all solved.
    pub fn is_solved(&self) -> bool {
        self.corner_perm == 0 && self.ud_edge_perm == 0 && self.slice_perm == 0
    }

    /// Advances the phase-1 coordinates (`twist`, `flip`, `slice`) by one
    /// of the 18 moves.
    pub fn apply_phase1(&self, tables: &MoveTables, m: Move) -> Self {
        let mi = 3 * m.face() as usize + quarter_index(m);
        let n_move = 18;
        let mut next = *self;
        next.twist = tables.twist_move[n_move * self.twist as usize + mi];
        next.flip = tables.flip_move[n_move * self.flip as usize + mi];
        next.slice = tables.slice_move[n_move * self.slice as usize + mi];
        next
    }

    /// Advances the phase-2 coordinates (`corner_perm`, `ud_edge_perm`,
    /// `slice_perm`) by one of the 10 G1-preserving moves.
    pub fn apply_phase2(&self, tables: &MoveTables, m: Move) -> Self {
        let n_move = 18;
        let n_move2 = 10;
        let g1_index = g1_move_index(m);
        let mut next = *self;
        next.corner_perm =
            tables.corner_perm_move[n_move * self.corner_perm as usize + 3 * m.face() as usize + quarter_index(m)];
        next.ud_edge_perm =
            tables.ud_edge_perm_move[n_move2 * self.ud_edge_perm as usize + g1_index];
        next.slice_perm = tables.slice_perm_move[n_move2 * self.slice_perm as usize + g1_index];
        next
    }
}

pub(crate) fn quarter_index(m: Move) -> usize {
    use Move::*;
    match m {
        U | R | F | D | L | B => 0,
        U2 | R2 | F2 | D2 | L2 | B2 => 1,
        U3 | R3 | F3 | D3 | L3 | B3 => 2,
    }
}

pub(crate) fn g1_move_index(m: Move) -> usize {
    use Move::*;
    match m {
        U => 0,
        U2 => 1,
        U3 => 2,
        D => 3,
        D2 => 4,
        D3 => 5,
        R2 => 6,
        L2 => 7,
        F2 => 8,
        B2 => 9,
        _ => unreachable!("phase 2 only moves along G1_MOVES"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::CubieCube;

    #[test]
    fn solved_coord_is_solved_and_g1() {
        let coord = Coord::from_cubie(&CubieCube::default()).unwrap();
        assert!(coord.is_g1());
        assert!(coord.is_solved());
    }

    #[test]
    fn apply_phase1_matches_cubie_apply() {
        let tables = MoveTables::new().unwrap();
        let cc = CubieCube::default();
        let coord = Coord::from_cubie(&cc).unwrap();
        let after_cc = cc.apply_move(Move::R);
        let after_coord = coord.apply_phase1(&tables, Move::R);
        let expect = Coord::from_cubie(&after_cc).unwrap();
        assert_eq!(after_coord.twist, expect.twist);
        assert_eq!(after_coord.flip, expect.flip);
        assert_eq!(after_coord.slice, expect.slice);
    }

    #[test]
    fn apply_phase2_matches_cubie_apply() {
        let tables = MoveTables::new().unwrap();
        let cc = CubieCube::default();
        let coord = Coord::from_cubie(&cc).unwrap();
        let after_cc = cc.apply_move(Move::R2);
        let after_coord = coord.apply_phase2(&tables, Move::R2);
        let expect = Coord::from_cubie(&after_cc).unwrap();
        assert_eq!(after_coord.corner_perm, expect.corner_perm);
        assert_eq!(after_coord.ud_edge_perm, expect.ud_edge_perm);
        assert_eq!(after_coord.slice_perm, expect.slice_perm);
    }
}
