//! `twophase-cuber`: a two-phase (Kociemba-style) solver for the 3x3x3
//! Rubik's cube.

#[macro_use]
extern crate lazy_static;

/// Cube on the sticker-grid level: parsing, validation, move application.
pub mod cube;

/// Cube on the cubie level: corner/edge permutation and orientation.
pub mod cubie;

/// Error type for parsing, validation and search failures.
pub mod error;

/// 3x3 cube constants shared across modules.
pub mod constants;

/// Cube reduced to the six search coordinates.
pub mod coord;

/// Move representation and move-transition tables.
pub mod moves;

/// Pruning (distance-to-goal) tables used as the IDA* heuristic.
pub mod pruning;

/// Two-phase IDA* search.
pub mod solver;

/// Parsing and formatting of move sequences.
pub mod scramble;

use std::{fs, path::Path};

use bincode::{
    config::{self, Configuration},
    decode_from_slice,
    error::DecodeError,
    encode_to_vec, Decode, Encode,
};

use crate::error::Error;
use crate::solver::SolverTables;

const CONFIG: Configuration = config::standard();

fn write_table<P, T: Encode>(path: P, table: &T) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let encoded = encode_to_vec(table, CONFIG)?;
    fs::write(path, encoded)?;
    Ok(())
}

fn decode_table<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let (decoded, written) = decode_from_slice(bytes, CONFIG)?;
    let additional = bytes.len() - written;

    if additional != 0 {
        return Err(DecodeError::UnexpectedEnd { additional })?;
    }
    Ok(decoded)
}

lazy_static! {
    /// Process-wide move and pruning tables, built or loaded from `tables/`
    /// the first time they are touched.
    static ref TABLES: SolverTables =
        SolverTables::new().expect("failed to initialize move/pruning tables");
}

/// Solves `cube`, returning its move sequence in the compact notation
/// (`scramble::format_moves` applies wire formatting separately).
pub fn solve(cube: &cube::Cube) -> Result<Vec<moves::Move>, Error> {
    solver::solve(cube, &TABLES)
}
