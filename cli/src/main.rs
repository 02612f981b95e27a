use std::fs;
use std::process::ExitCode;

use clap::Parser;

use twophase_cuber::cube::Cube;
use twophase_cuber::scramble::format_moves;

/// Solve a 3x3x3 Rubik's cube from a sticker-grid file.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the input grid (9 lines per the sticker-grid format).
    input: String,

    /// Path to write the solution's move tokens to.
    output: String,
}

fn run(cli: &Cli) -> Result<(), twophase_cuber::error::Error> {
    let text = fs::read_to_string(&cli.input)?;
    let rows: Vec<&str> = text.lines().collect();
    let cube = Cube::from_grid(&rows)?;

    log::info!("solving cube read from {}", cli.input);
    let moves = twophase_cuber::solve(&cube)?;
    let formatted = format_moves(&moves);

    fs::write(&cli.output, formatted)?;
    log::info!("wrote solution to {}", cli.output);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
