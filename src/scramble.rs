use std::str::FromStr;

use crate::moves::Move;
use crate::error::Error;

/// Parses a space-separated sequence of compact move tokens ("U", "U2",
/// "U'", ...) into `Move`s.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

/// Renders a sequence of `Move`s back to compact notation.
pub fn scramble_to_str(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a solution in the wire format: each move becomes its face
/// letter repeated once per quarter-turn (a half-turn is the letter twice,
/// a counter-clockwise turn is the letter three times), space separated.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| {
            let face = face_letter(*m);
            std::iter::repeat(face)
                .take(quarter_turns(*m))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn face_letter(m: Move) -> &'static str {
    use Move::*;
    match m {
        U | U2 | U3 => "U",
        R | R2 | R3 => "R",
        F | F2 | F3 => "F",
        D | D2 | D3 => "D",
        L | L2 | L3 => "L",
        B | B2 | B3 => "B",
    }
}

fn quarter_turns(m: Move) -> usize {
    use Move::*;
    match m {
        U | R | F | D | L | B => 1,
        U2 | R2 | F2 | D2 | L2 | B2 => 2,
        U3 | R3 | F3 | D3 | L3 | B3 => 3,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn test_format_moves() {
        let m = vec![U, R2, F3];
        assert_eq!(format_moves(&m), "U R R F F F");
    }

    #[test]
    fn test_format_moves_empty() {
        assert_eq!(format_moves(&[]), "");
    }
}
