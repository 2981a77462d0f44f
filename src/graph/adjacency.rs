//! Fixed-size undirected graph stored as an adjacency matrix of bit rows

use crate::error::{ReduceError, Result};
use bitvec::prelude::*;

/// Undirected graph over vertices `0..vertex_count`.
///
/// Every vertex is adjacent to itself. The self-loop is a convention of the
/// matrix and never counts as an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<BitVec>,
}

impl Graph {
    /// Create a graph with no edges besides the self-loops
    pub fn new(vertex_count: usize) -> Self {
        let adjacency = (0..vertex_count)
            .map(|v| {
                let mut row = bitvec![0; vertex_count];
                row.set(v, true);
                row
            })
            .collect();

        Self {
            vertex_count,
            edge_count: 0,
            adjacency,
        }
    }

    /// Build a graph from a square 0/1 matrix.
    ///
    /// The diagonal is ignored and forced to 1. Off-diagonal entries must be
    /// symmetric.
    pub fn from_matrix(rows: &[Vec<u8>]) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ReduceError::MalformedGraph(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if let Some(j) = row.iter().position(|&x| x > 1) {
                return Err(ReduceError::MalformedGraph(format!(
                    "entry ({}, {}) is {}, expected 0 or 1",
                    i, j, row[j]
                )));
            }
        }

        let mut graph = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(ReduceError::MalformedGraph(format!(
                        "entries ({}, {}) and ({}, {}) differ",
                        i, j, j, i
                    )));
                }
                if rows[i][j] == 1 {
                    graph.connect(i, j);
                }
            }
        }
        Ok(graph)
    }

    #[inline]
    fn check_vertex(&self, v: usize) {
        assert!(
            v < self.vertex_count,
            "vertex {} out of range for graph with {} vertices",
            v,
            self.vertex_count
        );
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of unordered pairs `i != j` that are adjacent
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Connect `a` and `b`. Idempotent, and a no-op when `a == b`.
    pub fn connect(&mut self, a: usize, b: usize) {
        self.check_vertex(a);
        self.check_vertex(b);
        if self.adjacency[a][b] {
            return;
        }
        self.adjacency[a].set(b, true);
        self.adjacency[b].set(a, true);
        self.edge_count += 1;
    }

    /// Whether `a` and `b` are adjacent. A vertex is always adjacent to itself.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.check_vertex(a);
        self.check_vertex(b);
        self.adjacency[a][b]
    }

    /// Neighbours of `v`, excluding `v` itself
    pub fn neighbours(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.check_vertex(v);
        self.adjacency[v].iter_ones().filter(move |&u| u != v)
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbours(v).count()
    }

    /// All edges as pairs `(i, j)` with `i < j`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter_ones().filter(move |&j| j > i).map(move |j| (i, j)))
    }

    /// Graph on the same vertices whose edges are exactly the non-edges of `self`
    pub fn complement(&self) -> Graph {
        let n = self.vertex_count;
        let adjacency = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(v, row)| {
                let mut inverted = !row.clone();
                inverted.set(v, true);
                inverted
            })
            .collect();

        Graph {
            vertex_count: n,
            edge_count: n * n.saturating_sub(1) / 2 - self.edge_count,
            adjacency,
        }
    }

    /// Whether every edge has at least one endpoint in `cover`.
    ///
    /// Panics if `cover` is shorter than the vertex count.
    pub fn is_covered_by(&self, cover: &BitSlice) -> bool {
        self.edges().all(|(i, j)| cover[i] || cover[j])
    }

    /// Like [`Graph::is_covered_by`], but rejects vectors of the wrong length
    pub fn check_cover(&self, cover: &BitSlice) -> Result<bool> {
        self.check_length(cover)?;
        Ok(self.is_covered_by(cover))
    }

    /// Whether the selected vertices are pairwise adjacent
    pub fn is_clique(&self, selection: &BitSlice) -> Result<bool> {
        self.check_length(selection)?;
        let selected: Vec<usize> = selection.iter_ones().collect();
        Ok(selected
            .iter()
            .enumerate()
            .all(|(pos, &a)| selected[pos + 1..].iter().all(|&b| self.adjacency[a][b])))
    }

    fn check_length(&self, vector: &BitSlice) -> Result<()> {
        if vector.len() != self.vertex_count {
            return Err(ReduceError::CoverLength {
                expected: self.vertex_count,
                actual: vector.len(),
            });
        }
        Ok(())
    }
}
