//! k-clique instances and the 3-CNF to clique reduction

use crate::graph::Graph;
use crate::sat::CnfInstance;
use crate::search::{vertex_set_string, Cover};
use bitvec::prelude::*;
use serde::{Serialize, Serializer};
use std::fmt;

/// A vertex subset read as a clique; the complement of a [`Cover`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clique {
    bits: BitVec,
}

impl Clique {
    /// Flip every vertex of a cover: included becomes excluded and vice versa
    pub fn from_cover(cover: &Cover) -> Self {
        Self {
            bits: !cover.as_bits().to_bitvec(),
        }
    }

    /// The cover this clique is the complement of
    pub fn to_cover(&self) -> Cover {
        Cover::from(!self.bits.clone())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of selected vertices
    pub fn size(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.bits[vertex]
    }

    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn as_bits(&self) -> &BitSlice {
        &self.bits
    }
}

impl From<BitVec> for Clique {
    fn from(bits: BitVec) -> Self {
        Self { bits }
    }
}

impl Serialize for Clique {
    /// Serialized as the list of selected vertices
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.vertices())
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&vertex_set_string(self.vertices()))
    }
}

/// `a` is the negation of `b`
fn contradicts(a: i32, b: i32) -> bool {
    a.unsigned_abs() == b.unsigned_abs() && (a < 0) != (b < 0)
}

/// Does `graph` contain `k` mutually adjacent vertices?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueInstance {
    pub graph: Graph,
    pub k: usize,
}

impl CliqueInstance {
    pub fn new(graph: Graph, k: usize) -> Self {
        Self { graph, k }
    }

    /// One vertex per literal occurrence, vertex `3 * clause + slot`.
    ///
    /// Two occurrences are connected when they sit in different clauses and
    /// are not negations of each other. A clique of `clause_count` vertices
    /// then picks one non-contradictory literal from every clause.
    pub fn from_cnf(cnf: &CnfInstance) -> Self {
        let literals = cnf.literals();
        let mut graph = Graph::new(literals.len());

        for i in 0..literals.len() {
            for j in (i + 1)..literals.len() {
                if i / 3 != j / 3 && !contradicts(literals[i], literals[j]) {
                    graph.connect(i, j);
                }
            }
        }

        Self {
            graph,
            k: cnf.clause_count(),
        }
    }
}
