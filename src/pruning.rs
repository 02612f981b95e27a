use std::collections::VecDeque;

use crate::constants::{ALL_MOVES, G1_MOVES, N_CORNERS, N_FLIP, N_SLICE, N_SLICE_PERM, N_TWIST, N_UD_EDGES};
use crate::coord::{g1_move_index, quarter_index};
use crate::error::Error;
use crate::moves::{Move, MoveTables};
use crate::{decode_table, write_table};

/// Sentinel marking an index that backward BFS never reached. Does not
/// occur for legal states: every coordinate-product cell below is reached
/// from the goal within the relevant move group's diameter.
pub const UNREACHED: u8 = u8::MAX;

/// Five backward-BFS distance tables, one per coordinate pair used as an
/// admissible heuristic component by one of the two search phases.
#[derive(Debug)]
pub struct PruningTables {
    pub twist_slice: Vec<u8>,
    pub flip_slice: Vec<u8>,
    pub twist_flip: Vec<u8>,
    pub corner_slice: Vec<u8>,
    pub ud_edge_slice: Vec<u8>,
}

fn load_or_build<F>(path: &str, build: F) -> Result<Vec<u8>, Error>
where
    F: FnOnce() -> Vec<u8>,
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

impl PruningTables {
    pub fn new(moves: &MoveTables) -> Result<Self, Error> {
        Ok(PruningTables {
            twist_slice: load_or_build("tables/prune_twist_slice", || bfs_twist_slice(moves))?,
            flip_slice: load_or_build("tables/prune_flip_slice", || bfs_flip_slice(moves))?,
            twist_flip: load_or_build("tables/prune_twist_flip", || bfs_twist_flip(moves))?,
            corner_slice: load_or_build("tables/prune_corner_slice", || bfs_corner_slice(moves))?,
            ud_edge_slice: load_or_build("tables/prune_ud_edge_slice", || bfs_ud_edge_slice(moves))?,
        })
    }

    /// Phase-1 heuristic: `max(twistSlice, flipSlice, twistFlip)`, 0 if any
    /// component is unreached.
    pub fn h1(&self, twist: u16, flip: u16, slice: u16) -> u8 {
        let a = self.twist_slice[twist as usize * N_SLICE + slice as usize];
        let b = self.flip_slice[flip as usize * N_SLICE + slice as usize];
        let c = self.twist_flip[twist as usize * N_FLIP + flip as usize];
        [a, b, c]
            .into_iter()
            .map(|v| if v == UNREACHED { 0 } else { v })
            .max()
            .unwrap_or(0)
    }

    /// Phase-2 heuristic: `max(cornerSlice, udEdgeSlice)`.
    pub fn h2(&self, corner_perm: u16, ud_edge_perm: u16, slice_perm: u16) -> u8 {
        let a = self.corner_slice[corner_perm as usize * N_SLICE_PERM + slice_perm as usize];
        let b = self.ud_edge_slice[ud_edge_perm as usize * N_SLICE_PERM + slice_perm as usize];
        [a, b]
            .into_iter()
            .map(|v| if v == UNREACHED { 0 } else { v })
            .max()
            .unwrap_or(0)
    }
}

/// Backward BFS over `twist*N_SLICE+slice`, using all 18 moves, from the
/// phase-1 goal (twist=0, slice=slice_goal).
fn bfs_twist_slice(moves: &MoveTables) -> Vec<u8> {
    let size = N_TWIST * N_SLICE;
    let mut dist = vec![UNREACHED; size];
    let goal = N_SLICE - 1;
    dist[goal] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(goal);
    while let Some(idx) = queue.pop_front() {
        let d = dist[idx];
        let twist = idx / N_SLICE;
        let slice = idx % N_SLICE;
        for &m in ALL_MOVES.iter() {
            let mi = 3 * m.face() as usize + quarter_index(m);
            let nt = moves.twist_move[18 * twist + mi] as usize;
            let ns = moves.slice_move[18 * slice + mi] as usize;
            let next = nt * N_SLICE + ns;
            if dist[next] == UNREACHED {
                dist[next] = d + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Backward BFS over `flip*N_SLICE+slice`, using all 18 moves, from
/// (flip=0, slice=slice_goal).
fn bfs_flip_slice(moves: &MoveTables) -> Vec<u8> {
    let size = N_FLIP * N_SLICE;
    let mut dist = vec![UNREACHED; size];
    let goal = N_SLICE - 1;
    dist[goal] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(goal);
    while let Some(idx) = queue.pop_front() {
        let d = dist[idx];
        let flip = idx / N_SLICE;
        let slice = idx % N_SLICE;
        for &m in ALL_MOVES.iter() {
            let mi = 3 * m.face() as usize + quarter_index(m);
            let nf = moves.flip_move[18 * flip + mi] as usize;
            let ns = moves.slice_move[18 * slice + mi] as usize;
            let next = nf * N_SLICE + ns;
            if dist[next] == UNREACHED {
                dist[next] = d + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Backward BFS over `twist*N_FLIP+flip`, using all 18 moves, from
/// (twist=0, flip=0).
fn bfs_twist_flip(moves: &MoveTables) -> Vec<u8> {
    let size = N_TWIST * N_FLIP;
    let mut dist = vec![UNREACHED; size];
    dist[0] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(0usize);
    while let Some(idx) = queue.pop_front() {
        let d = dist[idx];
        let twist = idx / N_FLIP;
        let flip = idx % N_FLIP;
        for &m in ALL_MOVES.iter() {
            let mi = 3 * m.face() as usize + quarter_index(m);
            let nt = moves.twist_move[18 * twist + mi] as usize;
            let nf = moves.flip_move[18 * flip + mi] as usize;
            let next = nt * N_FLIP + nf;
            if dist[next] == UNREACHED {
                dist[next] = d + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Backward BFS over `cornerPerm*N_SLICE_PERM+slicePerm`, using the 10
/// phase-2 moves, from (cornerPerm=0, slicePerm=0).
fn bfs_corner_slice(moves: &MoveTables) -> Vec<u8> {
    let size = N_CORNERS * N_SLICE_PERM;
    let mut dist = vec![UNREACHED; size];
    dist[0] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(0usize);
    while let Some(idx) = queue.pop_front() {
        let d = dist[idx];
        let cp = idx / N_SLICE_PERM;
        let sp = idx % N_SLICE_PERM;
        for &m in G1_MOVES.iter() {
            let mi18 = 3 * m.face() as usize + quarter_index(m);
            let mi10 = g1_move_index(m);
            let ncp = moves.corner_perm_move[18 * cp + mi18] as usize;
            let nsp = moves.slice_perm_move[10 * sp + mi10] as usize;
            let next = ncp * N_SLICE_PERM + nsp;
            if dist[next] == UNREACHED {
                dist[next] = d + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Backward BFS over `udEdgePerm*N_SLICE_PERM+slicePerm`, using the 10
/// phase-2 moves, from (udEdgePerm=0, slicePerm=0).
fn bfs_ud_edge_slice(moves: &MoveTables) -> Vec<u8> {
    let size = N_UD_EDGES * N_SLICE_PERM;
    let mut dist = vec![UNREACHED; size];
    dist[0] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(0usize);
    while let Some(idx) = queue.pop_front() {
        let d = dist[idx];
        let ue = idx / N_SLICE_PERM;
        let sp = idx % N_SLICE_PERM;
        for &m in G1_MOVES.iter() {
            let mi10 = g1_move_index(m);
            let nue = moves.ud_edge_perm_move[10 * ue + mi10] as usize;
            let nsp = moves.slice_perm_move[10 * sp + mi10] as usize;
            let next = nue * N_SLICE_PERM + nsp;
            if dist[next] == UNREACHED {
                dist[next] = d + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twist_flip_goal_is_zero_and_admissible() {
        let moves = MoveTables::new().unwrap();
        let table = bfs_twist_flip(&moves);
        assert_eq!(table[0], 0);
        assert!(table.iter().all(|&d| d != UNREACHED));
    }

    #[test]
    fn corner_slice_fully_reachable() {
        let moves = MoveTables::new().unwrap();
        let table = bfs_corner_slice(&moves);
        assert!(table.iter().all(|&d| d != UNREACHED));
    }

    #[test]
    fn h1_of_solved_is_zero() {
        let moves = MoveTables::new().unwrap();
        let pruning = PruningTables::new(&moves).unwrap();
        assert_eq!(pruning.h1(0, 0, crate::constants::SLICE_GOAL), 0);
    }

    #[test]
    fn h2_of_solved_is_zero() {
        let moves = MoveTables::new().unwrap();
        let pruning = PruningTables::new(&moves).unwrap();
        assert_eq!(pruning.h2(0, 0, 0), 0);
    }
}
