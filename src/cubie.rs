use std::ops::Mul;

use self::{Corner::*, Edge::*};
use crate::constants::ALL_CORNERS;
use crate::constants::Color;
use crate::error::Error;
use crate::moves::{Move, Move::*, B_MOVE, D_MOVE, F_MOVE, L_MOVE, R_MOVE, U_MOVE};

/// The 8 corners, named by the three layers they sit in.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl TryFrom<u8> for Corner {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(URF),
            1 => Ok(UFL),
            2 => Ok(ULB),
            3 => Ok(UBR),
            4 => Ok(DFR),
            5 => Ok(DLF),
            6 => Ok(DBL),
            7 => Ok(DRB),
            _ => Err(Error::InvalidCorner),
        }
    }
}

/// The 12 edges, named by the two layers they sit in. 0..7 are the
/// UD-edges, 8..11 are the four slice edges.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

impl TryFrom<u8> for Edge {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UR),
            1 => Ok(UF),
            2 => Ok(UL),
            3 => Ok(UB),
            4 => Ok(DR),
            5 => Ok(DF),
            6 => Ok(DL),
            7 => Ok(DB),
            8 => Ok(FR),
            9 => Ok(FL),
            10 => Ok(BL),
            11 => Ok(BR),
            _ => Err(Error::InvalidEdge),
        }
    }
}

/// Cube on the cubie level: which cubie sits at each position, and how it
/// is oriented there.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl Mul for CubieCube {
    type Output = Self;

    /// (A * B).cp = A(B(x).cp).cp; (A * B).co = A(B(x).cp).co + B(x).co
    fn mul(self, rhs: CubieCube) -> Self::Output {
        let mut res = self;
        res.corner_multiply(rhs);
        res.edge_multiply(rhs);
        res
    }
}

/// The six basic face-turn cubes, indexed by `Color` (U,R,F,D,L,B).
pub fn basic_move_cubes() -> [CubieCube; 6] {
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE]
}

impl CubieCube {
    /// Applies a single named move to the current state.
    pub fn apply_move(self, move_name: Move) -> Self {
        let move_state = match move_name {
            U => U_MOVE,
            U2 => U_MOVE * U_MOVE,
            U3 => U_MOVE * U_MOVE * U_MOVE,
            D => D_MOVE,
            D2 => D_MOVE * D_MOVE,
            D3 => D_MOVE * D_MOVE * D_MOVE,
            R => R_MOVE,
            R2 => R_MOVE * R_MOVE,
            R3 => R_MOVE * R_MOVE * R_MOVE,
            L => L_MOVE,
            L2 => L_MOVE * L_MOVE,
            L3 => L_MOVE * L_MOVE * L_MOVE,
            F => F_MOVE,
            F2 => F_MOVE * F_MOVE,
            F3 => F_MOVE * F_MOVE * F_MOVE,
            B => B_MOVE,
            B2 => B_MOVE * B_MOVE,
            B3 => B_MOVE * B_MOVE * B_MOVE,
        };
        self * move_state
    }

    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }

    /// Multiplies this cube with `b`, restricted to the corners.
    pub fn corner_multiply(&mut self, b: CubieCube) {
        let mut cp = [URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[b.cp[i] as usize];
            co[i] = (self.co[b.cp[i] as usize] + b.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// Multiplies this cube with `b`, restricted to the edges.
    pub fn edge_multiply(&mut self, b: CubieCube) {
        let mut ep = [UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[b.ep[i] as usize];
            eo[i] = (self.eo[b.ep[i] as usize] + b.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    pub fn multiply(&mut self, b: CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Gets `twist`: base-3 encoding of corner orientations 0..6.
    pub fn get_twist(&self) -> u16 {
        self.co[0..7]
            .iter()
            .fold(0u16, |acc, &o| acc * 3 + o as u16)
    }

    /// Sets `twist`. Corner 7's orientation is fixed by the parity invariant.
    pub fn set_twist(&mut self, twist: u16) {
        let mut parity = 0u16;
        let mut twist = twist;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            parity += self.co[i] as u16;
            twist /= 3;
        }
        self.co[7] = ((3 - parity % 3) % 3) as u8;
    }

    /// Gets `flip`: base-2 encoding of edge orientations 0..10.
    pub fn get_flip(&self) -> u16 {
        self.eo[0..11]
            .iter()
            .fold(0u16, |acc, &o| acc * 2 + o as u16)
    }

    /// Sets `flip`. Edge 11's orientation is fixed by the parity invariant.
    pub fn set_flip(&mut self, flip: u16) {
        let mut parity = 0u16;
        let mut flip = flip;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            parity += self.eo[i] as u16;
            flip /= 2;
        }
        self.eo[11] = ((2 - parity % 2) % 2) as u8;
    }

    /// Gets `slice`: the combinatorial index of which 4 positions hold the
    /// slice edges, permutation ignored.
    pub fn get_slice(&self) -> u16 {
        let mut idx = 0u32;
        let mut rank = 1u32;
        for j in 0..12 {
            if matches!(self.ep[j], FR | FL | BL | BR) {
                idx += binomial(j as u32, rank);
                rank += 1;
            }
        }
        idx as u16
    }

    /// Sets `slice`: places the four slice edges at the positions encoded
    /// by `idx`, filling the rest with the eight UD-edges in order.
    pub fn set_slice(&mut self, idx: u16) {
        let slice_edges = [FR, FL, BL, BR];
        let other_edges = [UR, UF, UL, UB, DR, DF, DL, DB];
        let mut positions = [0u32; 4];
        let mut rem = idx as u32;
        for k in (1..=4u32).rev() {
            let mut p = k - 1;
            while binomial(p + 1, k) <= rem {
                p += 1;
            }
            positions[(k - 1) as usize] = p;
            rem -= binomial(p, k);
        }
        let mut is_slice_pos = [false; 12];
        for &p in positions.iter() {
            is_slice_pos[p as usize] = true;
        }
        let mut si = 0;
        let mut oi = 0;
        for j in 0..12 {
            if is_slice_pos[j] {
                self.ep[j] = slice_edges[si];
                si += 1;
            } else {
                self.ep[j] = other_edges[oi];
                oi += 1;
            }
        }
    }

    /// Gets `cornerPerm`: Lehmer-code index of the corner permutation.
    pub fn get_corner_perm(&self) -> u16 {
        lehmer_encode_corners(&self.cp)
    }

    /// Sets `cornerPerm`.
    pub fn set_corner_perm(&mut self, idx: u16) {
        self.cp = lehmer_decode_corners(idx);
    }

    /// Gets `udEdgePerm`: Lehmer-code index of the permutation of the eight
    /// UD-edges among positions 0..7. Only meaningful inside G1.
    pub fn get_ud_edge_perm(&self) -> u16 {
        let mut ids = [0u8; 8];
        for i in 0..8 {
            ids[i] = self.ep[i] as u8;
        }
        lehmer_encode_u8(&ids)
    }

    /// Sets `udEdgePerm`.
    pub fn set_ud_edge_perm(&mut self, idx: u16) {
        let ids = lehmer_decode_u8(idx, 8);
        for i in 0..8 {
            self.ep[i] = Edge::try_from(ids[i]).unwrap();
        }
    }

    /// Gets `slicePerm`: Lehmer-code index of the permutation of the four
    /// slice edges among positions 8..11. Only meaningful inside G1.
    pub fn get_slice_perm(&self) -> u16 {
        let mut ids = [0u8; 4];
        for i in 0..4 {
            ids[i] = self.ep[8 + i] as u8 - 8;
        }
        lehmer_encode_u8(&ids)
    }

    /// Sets `slicePerm`.
    pub fn set_slice_perm(&mut self, idx: u16) {
        let ids = lehmer_decode_u8(idx, 4);
        for i in 0..4 {
            self.ep[8 + i] = Edge::try_from(ids[i] + 8).unwrap();
        }
    }

    /// Number of quarter-twists needed to orient all corners.
    pub fn count_corner_twist(&self) -> u8 {
        self.co.iter().fold(0, |acc, &co| acc + (3 - co) % 3)
    }

    /// Number of quarter-flips needed to orient all edges.
    pub fn count_edge_twist(&self) -> u8 {
        self.eo.iter().sum()
    }

    /// Parity of the corner permutation: true if even.
    pub fn corner_parity(&self) -> bool {
        let mut s = 0;
        for i in 1..8 {
            for j in 0..i {
                if self.cp[j] as u8 > self.cp[i] as u8 {
                    s += 1;
                }
            }
        }
        s % 2 == 0
    }

    /// Parity of the edge permutation: true if even. A solvable cube has
    /// equal corner and edge parity.
    pub fn edge_parity(&self) -> bool {
        let mut s = 0;
        for i in 1..12 {
            for j in 0..i {
                if self.ep[j] as u8 > self.ep[i] as u8 {
                    s += 1;
                }
            }
        }
        s % 2 == 0
    }

    /// Checks the three invariants that every legal cube satisfies.
    pub fn is_solvable(&self) -> bool {
        let twist_ok = self.count_corner_twist() % 3 == 0;
        let flip_ok = self.count_edge_twist() % 2 == 0;
        let parity_ok = self.corner_parity() == self.edge_parity();
        twist_ok && flip_ok && parity_ok
    }

    /// True exactly when corners and edges are all oriented and the slice
    /// edges occupy the slice positions: the G1 subgroup membership test
    /// restated at the cubie level.
    pub fn is_in_g1(&self) -> bool {
        self.co.iter().all(|&o| o == 0)
            && self.eo.iter().all(|&o| o == 0)
            && self.get_slice() == crate::constants::SLICE_GOAL
    }

    /// True exactly when the cube is in the solved state.
    pub fn is_solved(&self) -> bool {
        *self == SOLVED_CUBIE_CUBE
    }
}

/// Binomial coefficient `n choose k`, 0 if `n < k`.
pub fn binomial(n: u32, k: u32) -> u32 {
    if k == 0 {
        return 1;
    }
    if n < k {
        return 0;
    }
    let mut num = 1u64;
    let mut den = 1u64;
    for i in 0..k {
        num *= (n - i) as u64;
        den *= (i + 1) as u64;
    }
    (num / den) as u32
}

/// Rotate array `arr` right between `left` and `right`, `right` included.
fn rotate_right<T: Copy>(arr: &mut [T], left: usize, right: usize) {
    let temp = arr[right];
    for i in (left + 1..=right).rev() {
        arr[i] = arr[i - 1];
    }
    arr[left] = temp;
}

/// Rotate array `arr` left between `left` and `right`, `right` included.
fn rotate_left<T: Copy>(arr: &mut [T], left: usize, right: usize) {
    let temp = arr[left];
    for i in left..right {
        arr[i] = arr[i + 1];
    }
    arr[right] = temp;
}

fn lehmer_encode_corners(cp: &[Corner; 8]) -> u16 {
    let mut perm = *cp;
    let mut b: u32 = 0;
    for j in (1..8).rev() {
        let mut k = 0u32;
        while perm[j] as usize != j {
            rotate_left(&mut perm, 0, j);
            k += 1;
        }
        b = (j as u32 + 1) * b + k;
    }
    b as u16
}

fn lehmer_decode_corners(idx: u16) -> [Corner; 8] {
    let mut cp = ALL_CORNERS;
    let mut idx = idx as u32;
    for j in 0..8u32 {
        let k = idx % (j + 1);
        idx /= j + 1;
        for _ in 0..k {
            rotate_right(&mut cp, 0, j as usize);
        }
    }
    cp
}

/// Lehmer-code encode of a permutation of `0..n` given as raw ids.
fn lehmer_encode_u8(ids: &[u8]) -> u16 {
    let n = ids.len();
    let mut perm = ids.to_vec();
    let mut b: u32 = 0;
    for j in (1..n).rev() {
        let mut k = 0u32;
        while perm[j] as usize != j {
            let temp = perm[0];
            for i in 0..j {
                perm[i] = perm[i + 1];
            }
            perm[j] = temp;
            k += 1;
        }
        b = (j as u32 + 1) * b + k;
    }
    b as u16
}

/// Lehmer-code decode into raw ids `0..n`.
fn lehmer_decode_u8(idx: u16, n: usize) -> Vec<u8> {
    let mut ids: Vec<u8> = (0..n as u8).collect();
    let mut idx = idx as u32;
    for j in 0..n as u32 {
        let k = idx % (j + 1);
        idx /= j + 1;
        for _ in 0..k {
            let temp = ids[j as usize];
            for i in (1..=j as usize).rev() {
                ids[i] = ids[i - 1];
            }
            ids[0] = temp;
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{N_CORNERS, N_FLIP, N_SLICE, N_SLICE_PERM, N_TWIST, N_UD_EDGES};

    #[test]
    fn solved_is_solved_and_in_g1() {
        let cc = SOLVED_CUBIE_CUBE;
        assert!(cc.is_solved());
        assert!(cc.is_in_g1());
        assert!(cc.is_solvable());
    }

    #[test]
    fn twist_round_trips() {
        let mut cc = CubieCube::default();
        for twist in 0..N_TWIST as u16 {
            cc.set_twist(twist);
            assert_eq!(cc.get_twist(), twist);
            assert_eq!(cc.co.iter().map(|&o| o as u32).sum::<u32>() % 3, 0);
        }
    }

    #[test]
    fn flip_round_trips() {
        let mut cc = CubieCube::default();
        for flip in (0..N_FLIP as u16).step_by(17) {
            cc.set_flip(flip);
            assert_eq!(cc.get_flip(), flip);
            assert_eq!(cc.eo.iter().map(|&o| o as u32).sum::<u32>() % 2, 0);
        }
    }

    #[test]
    fn slice_round_trips() {
        let mut cc = CubieCube::default();
        for slice in 0..N_SLICE as u16 {
            cc.set_slice(slice);
            assert_eq!(cc.get_slice(), slice);
        }
    }

    #[test]
    fn corner_perm_round_trips() {
        let mut cc = CubieCube::default();
        for idx in (0..N_CORNERS as u16).step_by(97) {
            cc.set_corner_perm(idx);
            assert_eq!(cc.get_corner_perm(), idx);
        }
    }

    #[test]
    fn ud_edge_perm_round_trips() {
        let mut cc = CubieCube::default();
        cc.set_slice(crate::constants::SLICE_GOAL);
        for idx in (0..N_UD_EDGES as u16).step_by(97) {
            cc.set_ud_edge_perm(idx);
            assert_eq!(cc.get_ud_edge_perm(), idx);
        }
    }

    #[test]
    fn slice_perm_round_trips() {
        let mut cc = CubieCube::default();
        cc.set_slice(crate::constants::SLICE_GOAL);
        for idx in 0..N_SLICE_PERM as u16 {
            cc.set_slice_perm(idx);
            assert_eq!(cc.get_slice_perm(), idx);
        }
    }

    #[test]
    fn quarter_turn_order_is_four() {
        for &mv in crate::constants::ALL_MOVES.iter().step_by(3) {
            let cc = CubieCube::default()
                .apply_move(mv)
                .apply_move(mv)
                .apply_move(mv)
                .apply_move(mv);
            assert_eq!(cc, SOLVED_CUBIE_CUBE);
        }
    }

    #[test]
    fn moves_preserve_invariants() {
        let mut cc = CubieCube::default();
        for &mv in [U, R, F, D, L, B, U2, R3, F2, D3].iter() {
            cc = cc.apply_move(mv);
            assert!(cc.is_solvable());
        }
    }
}
