use std::cmp::Ordering;

use itertools::Itertools;
use rayon::prelude::*;

use crate::junction::Junction;
use crate::top_k::TopK;

/// Two distinct junctions, by index into the junction list, and how far apart they are.
///
/// Pairs order by distance, then by index, so the order is total and
/// independent of how the candidates were enumerated.
#[derive(Debug, Clone, Copy)]
pub struct JunctionPair {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl JunctionPair {
    pub fn new(a: usize, b: usize, distance: f64) -> Self {
        Self { a, b, distance }
    }

    pub fn junctions(&self, junctions: &[Junction]) -> (Junction, Junction) {
        (junctions[self.a], junctions[self.b])
    }
}

impl PartialEq for JunctionPair {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for JunctionPair {}

impl PartialOrd for JunctionPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JunctionPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.a.cmp(&other.a))
            .then(self.b.cmp(&other.b))
    }
}

/// The `k` closest pairs of distinct junctions, ascending by distance.
///
/// Every unordered pair is measured exactly once. Repeated coordinates are
/// never paired with themselves.
#[tracing::instrument(skip(junctions), fields(junctions = junctions.len()))]
pub fn nearest_pairs(junctions: &[Junction], k: usize) -> Vec<JunctionPair> {
    let mut nearest = TopK::with_capacity(k);
    nearest.extend(
        junctions
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter(|((_, a), (_, b))| a != b)
            .map(|((i, a), (j, b))| JunctionPair::new(i, j, a.distance(*b))),
    );
    nearest.into_vec()
}

/// Same as [`nearest_pairs`], with the pairwise scan spread over the rayon pool.
#[tracing::instrument(skip(junctions), fields(junctions = junctions.len()))]
pub fn par_nearest_pairs(junctions: &[Junction], k: usize) -> Vec<JunctionPair> {
    junctions
        .par_iter()
        .enumerate()
        .fold(
            || TopK::with_capacity(k),
            |mut nearest, (i, a)| {
                for (j, b) in junctions.iter().enumerate().skip(i + 1) {
                    if a != b {
                        nearest.push(JunctionPair::new(i, j, a.distance(*b)));
                    }
                }
                nearest
            },
        )
        .reduce(|| TopK::with_capacity(k), TopK::merge)
        .into_vec()
}
