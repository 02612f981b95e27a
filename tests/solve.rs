use twophase_cuber::constants::Color;
use twophase_cuber::cube::Cube;
use twophase_cuber::error::Error;
use twophase_cuber::moves::Move;
use twophase_cuber::solve;

fn apply_all(cube: &mut Cube, moves: &[(Color, u8)]) {
    for &(face, qt) in moves {
        cube.apply(face, qt).unwrap();
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

fn apply_solution(cube: &mut Cube, moves: &[Move]) {
    for &m in moves {
        let (face, qt) = match m {
            Move::U | Move::U2 | Move::U3 => (Color::U, quarter_turns(m)),
            Move::R | Move::R2 | Move::R3 => (Color::R, quarter_turns(m)),
            Move::F | Move::F2 | Move::F3 => (Color::F, quarter_turns(m)),
            Move::D | Move::D2 | Move::D3 => (Color::D, quarter_turns(m)),
            Move::L | Move::L2 | Move::L3 => (Color::L, quarter_turns(m)),
            Move::B | Move::B2 | Move::B3 => (Color::B, quarter_turns(m)),
        };
        cube.apply(face, qt as u8).unwrap();
    }
}

#[test]
fn solved_input_gives_empty_output() {
    let cube = Cube::new_solved();
    let moves = solve(&cube).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn single_quarter_turn_solves_within_four_moves() {
    let mut cube = Cube::new_solved();
    apply_all(&mut cube, &[(Color::F, 1)]);
    let solution = solve(&cube).unwrap();
    assert!(solution.iter().map(|&m| quarter_turns(m)).sum::<usize>() <= 4);
    apply_solution(&mut cube, &solution);
    assert!(cube.is_solved());
}

#[test]
fn two_move_scramble_solves_within_four_quarter_turns() {
    let mut cube = Cube::new_solved();
    apply_all(&mut cube, &[(Color::F, 1), (Color::R, 1)]);
    let solution = solve(&cube).unwrap();
    assert!(solution.iter().map(|&m| quarter_turns(m)).sum::<usize>() <= 4);
    apply_solution(&mut cube, &solution);
    assert!(cube.is_solved());
}

#[test]
fn six_move_scramble_solves_within_twenty_quarter_turns() {
    let mut cube = Cube::new_solved();
    apply_all(
        &mut cube,
        &[
            (Color::F, 1),
            (Color::R, 1),
            (Color::U, 3),
            (Color::D, 3),
            (Color::L, 1),
            (Color::B, 3),
        ],
    );
    let solution = solve(&cube).unwrap();
    assert!(solution.iter().map(|&m| quarter_turns(m)).sum::<usize>() <= 20);
    apply_solution(&mut cube, &solution);
    assert!(cube.is_solved());
}

#[test]
fn twelve_move_scramble_solves() {
    let mut cube = Cube::new_solved();
    apply_all(
        &mut cube,
        &[
            (Color::R, 1),
            (Color::U, 2),
            (Color::F, 3),
            (Color::D, 1),
            (Color::L, 2),
            (Color::B, 1),
            (Color::R, 3),
            (Color::U, 1),
            (Color::F, 2),
            (Color::D, 3),
            (Color::L, 1),
            (Color::B, 2),
        ],
    );
    let solution = solve(&cube).unwrap();
    apply_solution(&mut cube, &solution);
    assert!(cube.is_solved());
}

#[test]
fn malformed_grid_is_rejected() {
    let rows = [
        "   OOO", "   OOO", "   OOO", "GGGWWWBBBYYY", "GGGWWWBBBYYY", "GGGWWWBBBYYY", "   RRR",
        "   RRR",
    ];
    let result = Cube::from_grid(&rows);
    assert!(matches!(result, Err(Error::MalformedInput(_))));
}

#[test]
fn solve_is_deterministic_end_to_end() {
    let mut cube = Cube::new_solved();
    apply_all(&mut cube, &[(Color::R, 1), (Color::U, 1), (Color::F, 3)]);
    let a = solve(&cube).unwrap();
    let b = solve(&cube).unwrap();
    assert_eq!(a, b);
}
