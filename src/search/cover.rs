//! Vertex covers and the per-vertex decisions the searches make

use bitvec::prelude::*;
use serde::{Serialize, Serializer};
use itertools::Itertools;
use std::fmt;

/// State of one vertex during branch-and-bound.
///
/// `Unvisited` only exists below the search cursor; every vertex the cursor
/// has passed is either `Excluded` or `Included`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Unvisited,
    Excluded,
    Included,
}

/// A subset of vertices, one bit per vertex
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cover {
    bits: BitVec,
}

impl Cover {
    /// No vertex included
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            bits: bitvec![0; vertex_count],
        }
    }

    /// Every vertex included; covers any graph
    pub fn full(vertex_count: usize) -> Self {
        Self {
            bits: bitvec![1; vertex_count],
        }
    }

    /// Collapse a fully decided vector. Panics on an `Unvisited` entry.
    pub(crate) fn from_decisions(decisions: &[Decision]) -> Self {
        let bits = decisions
            .iter()
            .map(|decision| match decision {
                Decision::Included => true,
                Decision::Excluded => false,
                Decision::Unvisited => panic!("cover taken from an undecided vector"),
            })
            .collect();
        Self { bits }
    }

    /// Number of vertices the cover is defined over
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of included vertices
    pub fn size(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.bits[vertex]
    }

    /// Included vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn as_bits(&self) -> &BitSlice {
        &self.bits
    }

    pub fn into_bits(self) -> BitVec {
        self.bits
    }
}

impl From<BitVec> for Cover {
    fn from(bits: BitVec) -> Self {
        Self { bits }
    }
}

impl Serialize for Cover {
    /// Serialized as the list of selected vertices
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.vertices())
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&vertex_set_string(self.vertices()))
    }
}

/// Render vertex indices as `{0,2,5}`
pub fn vertex_set_string(mut vertices: impl Iterator<Item = usize>) -> String {
    format!("{{{}}}", vertices.join(","))
}
