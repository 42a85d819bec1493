use std::cmp::Reverse;
use std::collections::HashMap;

use crate::error::CircuitError;
use crate::junction::{self, Junction};
use crate::pairs::JunctionPair;
use crate::top_k;

/// Junctions grouped into circuits.
///
/// A Disjoint Set Union (DSU) with path compression and union by size. Every
/// junction is identified by its index in [`Circuits::junctions`] and every
/// circuit by the index of its root.
#[derive(Debug, Clone)]
pub struct Circuits {
    junctions: Vec<Junction>,
    index: HashMap<Junction, usize>,
    parent: Vec<usize>,
    sizes: Vec<usize>,
    count: usize,
}

impl Circuits {
    /// Starts with every distinct junction in a circuit of its own.
    ///
    /// Repeated coordinates collapse into one junction, indices follow the
    /// first occurrence of each.
    pub fn new(junctions: impl IntoIterator<Item = Junction>) -> Self {
        let junctions = junction::unique(junctions);
        let n = junctions.len();
        let index = junctions.iter().enumerate().map(|(i, &j)| (j, i)).collect();

        Self {
            junctions,
            index,
            parent: (0..n).collect(),
            sizes: vec![1; n],
            count: n,
        }
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Number of junctions.
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// Number of distinct circuits.
    pub fn circuit_count(&self) -> usize {
        self.count
    }

    /// Index of the junction heading `i`'s circuit, flattening the path on the way up.
    pub fn root(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.root(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Wires two junctions together. Returns `true` if two circuits were merged.
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.root(a);
        let root_b = self.root(b);

        if root_a == root_b {
            return false;
        }

        let (big, small) = if self.sizes[root_a] < self.sizes[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[small] = big;
        self.sizes[big] += self.sizes[small];
        self.count -= 1;
        true
    }

    #[tracing::instrument(skip_all, fields(pairs = pairs.len()))]
    pub fn connect_all(&mut self, pairs: &[JunctionPair]) {
        let merged = pairs
            .iter()
            .filter(|pair| self.connect(pair.a, pair.b))
            .count();
        tracing::debug!(merged, circuits = self.count, "connected pairs");
    }

    pub fn same_circuit(&mut self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Size of the circuit holding `junction`, if it is one of ours.
    pub fn circuit_size(&mut self, junction: &Junction) -> Option<usize> {
        let i = *self.index.get(junction)?;
        let root = self.root(i);
        Some(self.sizes[root])
    }

    /// The size of every circuit, each circuit counted once.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| i == parent)
            .map(|(i, _)| self.sizes[i])
    }

    /// Multiplies together the sizes of the `n` largest circuits.
    pub fn largest_product(&self, n: usize) -> Result<usize, CircuitError> {
        let largest = largest_sizes(self.sizes(), n);
        if largest.len() < n {
            return Err(CircuitError::TooFewCircuits {
                wanted: n,
                found: self.count,
            });
        }
        Ok(largest.iter().product())
    }
}

/// The `n` largest sizes, descending.
pub fn largest_sizes(sizes: impl IntoIterator<Item = usize>, n: usize) -> Vec<usize> {
    top_k::smallest(sizes.into_iter().map(Reverse), n)
        .into_iter()
        .map(|Reverse(size)| size)
        .collect()
}
