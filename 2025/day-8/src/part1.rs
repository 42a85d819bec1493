use std::process::ExitCode;

use miette::*;

use crate::circuit::Circuits;
use crate::junction::{self, Junction};
use crate::pairs::par_nearest_pairs;

/// How many of the closest junction pairs get wired together.
pub const PAIRS_TO_CONNECT: usize = 1000;

/// How many of the largest circuits go into the answer.
pub const CIRCUITS_TO_MULTIPLY: usize = 3;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with(input, PAIRS_TO_CONNECT).map(|product| product.to_string())
}

/// Runs the puzzle connecting `pairs` closest pairs instead of the default.
#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, pairs: usize) -> Result<usize> {
    let junctions = junction::parse(input)?;
    solve(junctions, pairs)
}

#[tracing::instrument(skip(junctions), fields(junctions = junctions.len()))]
pub fn solve(junctions: Vec<Junction>, pairs: usize) -> Result<usize> {
    let mut circuits = Circuits::new(junctions);
    tracing::debug!(distinct = circuits.len(), "built junction universe");

    let nearest = par_nearest_pairs(circuits.junctions(), pairs);
    circuits.connect_all(&nearest);
    tracing::info!(
        pairs = nearest.len(),
        circuits = circuits.circuit_count(),
        "wired closest junctions"
    );

    let product = circuits.largest_product(CIRCUITS_TO_MULTIPLY)?;
    Ok(product)
}

/// The line printed for a finished run, and how the process should exit.
pub fn report(outcome: Result<usize>) -> (String, ExitCode) {
    match outcome {
        Ok(product) => (
            format!(
                "Multiply together, the sizes of the three largest circuits is: {}",
                product
            ),
            ExitCode::SUCCESS,
        ),
        Err(report) => (
            format!("Process aborted due to error: {}", report),
            ExitCode::FAILURE,
        ),
    }
}
