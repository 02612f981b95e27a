use criterion::{criterion_group, criterion_main, Criterion};

use twophase_cuber::constants::Color;
use twophase_cuber::cube::Cube;
use twophase_cuber::solve;

fn scrambled() -> Cube {
    let mut cube = Cube::new_solved();
    for &(face, qt) in &[
        (Color::R, 1),
        (Color::U, 2),
        (Color::F, 3),
        (Color::D, 1),
        (Color::L, 2),
        (Color::B, 1),
        (Color::R, 3),
        (Color::F, 1),
    ] {
        cube.apply(face, qt).unwrap();
    }
    cube
}

fn bench_solver(c: &mut Criterion) {
    let cube = scrambled();
    c.bench_function("solve", |b| b.iter(|| solve(&cube).unwrap()));
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
