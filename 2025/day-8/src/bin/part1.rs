use std::path::Path;
use std::process::ExitCode;

use miette::*;

use aoc2025_day_8::{junction, part1};

const INPUT_PATH: &str = "input";

fn run() -> Result<usize> {
    let junctions = junction::load(Path::new(INPUT_PATH))?;
    part1::solve(junctions, part1::PAIRS_TO_CONNECT)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let (line, code) = part1::report(run());
    println!("{}", line);
    code
}
