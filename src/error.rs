use thiserror::Error;

/// Errors produced while parsing, validating or solving a cube.
#[derive(Error, Debug)]
pub enum Error {
    /// The input grid fails structural or color-multiset validation. Raised
    /// only at the input boundary, never inside the solver.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A structurally valid grid that violates cube parity invariants
    /// (unreachable from the solved state).
    #[error("inconsistent cube: {0}")]
    InconsistentCube(String),
    /// A phase's depth cap was reached without finding a solution. For a
    /// legal cube and correct tables this cannot happen.
    #[error("search exhausted at depth cap {0}")]
    SearchExhausted(u32),
    /// A pruning or move table failed to build.
    #[error("table initialization failed: {0}")]
    TableInitFailure(String),
    #[error("invalid corner value")]
    InvalidCorner,
    #[error("invalid edge value")]
    InvalidEdge,
    #[error("invalid color value")]
    InvalidColor,
    #[error("invalid move token")]
    InvalidScramble,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
}
