use crate::constants::{ALL_MOVES, G1_MOVES};
use crate::coord::Coord;
use crate::cube::Cube;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MoveTables};
use crate::pruning::PruningTables;

/// Depth caps from spec: phase 1 never needs more than 12 moves, phase 2
/// never more than 18. Exceeding either for a legal cube is an internal
/// bug, not a retryable condition.
const PHASE1_MAX_DEPTH: u32 = 12;
const PHASE2_MAX_DEPTH: u32 = 18;

/// The process-wide, read-only tables both search phases consult. Built
/// once (see `crate::tables()`).
pub struct SolverTables {
    pub moves: MoveTables,
    pub pruning: PruningTables,
}

impl SolverTables {
    pub fn new() -> Result<Self, Error> {
        let moves = MoveTables::new()?;
        let pruning = PruningTables::new(&moves)?;
        Ok(SolverTables { moves, pruning })
    }
}

/// Two consecutive moves are redundant if they share a face, or if they
/// turn opposite faces in the "wrong" order (this fixes a canonical
/// ordering for commuting opposite-face pairs, halving the branching
/// factor without losing any solution). Picks second-face-follows-first
/// for the higher-indexed face of each opposite pair (D after U, L after
/// R, B after F); since opposite faces commute, this is equivalent to
/// the other ordering.
fn is_redundant(last: Move, next: Move) -> bool {
    let diff = last.face() as i8 - next.face() as i8;
    diff == 0 || diff == 3
}

/// Phase 1 (C5): IDA* driving (twist, flip, slice) to the G1 goal using
/// all 18 moves.
pub fn solve_phase1(coord: Coord, tables: &SolverTables) -> Result<Vec<Move>, Error> {
    if coord.is_g1() {
        return Ok(Vec::new());
    }
    let mut bound = tables.pruning.h1(coord.twist, coord.flip, coord.slice) as u32;
    let mut solution = Vec::new();
    loop {
        if bound > PHASE1_MAX_DEPTH {
            return Err(Error::SearchExhausted(PHASE1_MAX_DEPTH));
        }
        solution.clear();
        match phase1_dfs(coord, 0, bound, None, tables, &mut solution) {
            DfsResult::Found => return Ok(solution),
            DfsResult::Bound(next) => bound = next,
        }
    }
}

enum DfsResult {
    Found,
    Bound(u32),
}

fn phase1_dfs(
    coord: Coord,
    g: u32,
    bound: u32,
    last: Option<Move>,
    tables: &SolverTables,
    solution: &mut Vec<Move>,
) -> DfsResult {
    let h = tables.pruning.h1(coord.twist, coord.flip, coord.slice) as u32;
    if g + h > bound {
        return DfsResult::Bound(g + h);
    }
    if coord.is_g1() {
        return DfsResult::Found;
    }
    let mut min_next = u32::MAX;
    for &m in ALL_MOVES.iter() {
        if let Some(last) = last {
            if is_redundant(last, m) {
                continue;
            }
        }
        let next_coord = coord.apply_phase1(&tables.moves, m);
        solution.push(m);
        match phase1_dfs(next_coord, g + 1, bound, Some(m), tables, solution) {
            DfsResult::Found => return DfsResult::Found,
            DfsResult::Bound(v) => min_next = min_next.min(v),
        }
        solution.pop();
    }
    DfsResult::Bound(min_next)
}

/// Phase 2 (C6): IDA* driving (cornerPerm, udEdgePerm, slicePerm) to
/// solved using only the 10 G1-preserving moves.
pub fn solve_phase2(coord: Coord, tables: &SolverTables) -> Result<Vec<Move>, Error> {
    if coord.is_solved() {
        return Ok(Vec::new());
    }
    let mut bound = tables
        .pruning
        .h2(coord.corner_perm, coord.ud_edge_perm, coord.slice_perm) as u32;
    let mut solution = Vec::new();
    loop {
        if bound > PHASE2_MAX_DEPTH {
            return Err(Error::SearchExhausted(PHASE2_MAX_DEPTH));
        }
        solution.clear();
        match phase2_dfs(coord, 0, bound, None, tables, &mut solution) {
            DfsResult::Found => return Ok(solution),
            DfsResult::Bound(next) => bound = next,
        }
    }
}

fn phase2_dfs(
    coord: Coord,
    g: u32,
    bound: u32,
    last: Option<Move>,
    tables: &SolverTables,
    solution: &mut Vec<Move>,
) -> DfsResult {
    let h = tables
        .pruning
        .h2(coord.corner_perm, coord.ud_edge_perm, coord.slice_perm) as u32;
    if g + h > bound {
        return DfsResult::Bound(g + h);
    }
    if coord.is_solved() {
        return DfsResult::Found;
    }
    let mut min_next = u32::MAX;
    for &m in G1_MOVES.iter() {
        if let Some(last) = last {
            if is_redundant(last, m) {
                continue;
            }
        }
        let next_coord = coord.apply_phase2(&tables.moves, m);
        solution.push(m);
        match phase2_dfs(next_coord, g + 1, bound, Some(m), tables, solution) {
            DfsResult::Found => return DfsResult::Found,
            DfsResult::Bound(v) => min_next = min_next.min(v),
        }
        solution.pop();
    }
    DfsResult::Bound(min_next)
}

/// Orchestrator (C7): solves `cube`, returning the full move sequence
/// (phase 1 followed by phase 2).
pub fn solve(cube: &Cube, tables: &SolverTables) -> Result<Vec<Move>, Error> {
    if cube.is_solved() {
        return Ok(Vec::new());
    }

    let cc = CubieCube::try_from(cube)?;
    let coord1 = Coord::from_cubie(&cc)?;
    let phase1 = solve_phase1(coord1, tables)?;

    let cc_g1 = cc.apply_moves(&phase1);
    let coord2 = Coord::from_cubie(&cc_g1)?;
    let phase2 = solve_phase2(coord2, tables)?;

    let mut result = phase1;
    result.extend(phase2);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Color;

    fn tables() -> SolverTables {
        SolverTables::new().unwrap()
    }

    #[test]
    fn solved_cube_has_empty_solution() {
        let t = tables();
        let cube = Cube::new_solved();
        let moves = solve(&cube, &t).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn single_move_scramble_solves_and_applies_clean() {
        let t = tables();
        let mut cube = Cube::new_solved();
        cube.apply(Color::R, 1).unwrap();
        let moves = solve(&cube, &t).unwrap();
        assert!(!moves.is_empty());
        for &m in &moves {
            let (face, qt) = m_to_face_qt(m);
            cube.apply(face, qt).unwrap();
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn scrambled_cube_solves_and_applies_clean() {
        let t = tables();
        let mut cube = Cube::new_solved();
        for &(face, qt) in &[
            (Color::R, 1),
            (Color::U, 2),
            (Color::F, 3),
            (Color::D, 1),
            (Color::L, 2),
            (Color::B, 1),
        ] {
            cube.apply(face, qt).unwrap();
        }
        let moves = solve(&cube, &t).unwrap();
        for &m in &moves {
            let (face, qt) = m_to_face_qt(m);
            cube.apply(face, qt).unwrap();
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn solving_is_deterministic() {
        let t = tables();
        let mut cube = Cube::new_solved();
        cube.apply(Color::R, 1).unwrap();
        cube.apply(Color::U, 1).unwrap();
        let a = solve(&cube, &t).unwrap();
        let b = solve(&cube, &t).unwrap();
        assert_eq!(a, b);
    }

    fn m_to_face_qt(m: Move) -> (Color, u8) {
        use Move::*;
        match m {
            U => (Color::U, 1), U2 => (Color::U, 2), U3 => (Color::U, 3),
            R => (Color::R, 1), R2 => (Color::R, 2), R3 => (Color::R, 3),
            F => (Color::F, 1), F2 => (Color::F, 2), F3 => (Color::F, 3),
            D => (Color::D, 1), D2 => (Color::D, 2), D3 => (Color::D, 3),
            L => (Color::L, 1), L2 => (Color::L, 2), L3 => (Color::L, 3),
            B => (Color::B, 1), B2 => (Color::B, 2), B3 => (Color::B, 3),
        }
    }
}
