//! Depth-first search for a cover of an exact size

use super::{Cover, CoverSearch};
use crate::error::Result;
use bitvec::prelude::*;

impl CoverSearch<'_> {
    /// Find any cover with exactly `k` vertices.
    ///
    /// Vertices are decided in index order, trying "include" before
    /// "exclude". Returns `Ok(None)` once the whole tree is exhausted.
    pub fn find_cover_of_size(&mut self, k: usize) -> Result<Option<Cover>> {
        self.start();
        let n = self.graph.vertex_count();
        if k > n {
            return Ok(None);
        }

        let mut wip = bitvec![0; n];
        if self.exact_inner(&mut wip, 0, 0, k)? {
            debug_assert!(self.graph.is_covered_by(&wip));
            Ok(Some(Cover::from(wip)))
        } else {
            Ok(None)
        }
    }

    /// Positions at or after `index` are always clear on entry, so once
    /// `count` reaches `k` the buffer is a complete vector with the rest
    /// excluded and coverage is checked over all of it.
    fn exact_inner(&mut self, wip: &mut BitVec, index: usize, count: usize, k: usize) -> Result<bool> {
        self.visit()?;

        if count == k {
            return Ok(self.graph.is_covered_by(wip));
        }
        // Not enough vertices left to reach k
        if wip.len() - index < k - count {
            return Ok(false);
        }

        wip.set(index, true);
        if self.exact_inner(wip, index + 1, count + 1, k)? {
            return Ok(true);
        }
        wip.set(index, false);

        self.exact_inner(wip, index + 1, count, k)
    }
}

#[cfg(test)]
mod tests {
    use crate::search::tests::{brute_force_minimum, random_graph};
    use crate::search::{find_cover_of_size, CoverSearch, SearchOptions};
    use crate::error::ReduceError;
    use crate::graph::Graph;
    use std::time::Duration;

    fn path(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for v in 1..n {
            graph.connect(v - 1, v);
        }
        graph
    }

    #[test]
    fn test_triangle_sizes() {
        let mut graph = Graph::new(3);
        graph.connect(0, 1);
        graph.connect(1, 2);
        graph.connect(0, 2);

        assert_eq!(find_cover_of_size(&graph, 1).unwrap(), None);
        let cover = find_cover_of_size(&graph, 2).unwrap().unwrap();
        assert_eq!(cover.size(), 2);
        assert!(graph.is_covered_by(cover.as_bits()));
        assert_eq!(find_cover_of_size(&graph, 3).unwrap().unwrap().size(), 3);
        assert_eq!(find_cover_of_size(&graph, 4).unwrap(), None);
    }

    #[test]
    fn test_first_cover_in_include_order() {
        // Include is tried first, so the lexicographically first cover wins
        let graph = path(4);
        let cover = find_cover_of_size(&graph, 2).unwrap().unwrap();
        assert_eq!(cover.vertices().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_zero_size_cover() {
        let graph = Graph::new(3);
        let cover = find_cover_of_size(&graph, 0).unwrap().unwrap();
        assert_eq!(cover.size(), 0);

        assert_eq!(find_cover_of_size(&path(2), 0).unwrap(), None);
        assert_eq!(find_cover_of_size(&Graph::new(0), 0).unwrap().unwrap().len(), 0);
    }

    #[test]
    fn test_exact_size_matches_brute_force() {
        for seed in 0..20 {
            let graph = random_graph(7, 0.4, seed);
            let minimum = brute_force_minimum(&graph);
            for k in 0..=graph.vertex_count() {
                let found = find_cover_of_size(&graph, k).unwrap();
                if k < minimum {
                    assert!(found.is_none(), "seed {} k {}", seed, k);
                } else {
                    // Adding vertices to a cover keeps it a cover
                    let cover = found.unwrap();
                    assert_eq!(cover.size(), k);
                    assert!(graph.is_covered_by(cover.as_bits()));
                }
            }
        }
    }

    #[test]
    fn test_timeout() {
        // K40 needs 39 vertices, so k = 20 can only end by exhausting the tree
        let mut graph = Graph::new(40);
        for a in 0..40 {
            for b in (a + 1)..40 {
                graph.connect(a, b);
            }
        }
        let mut search = CoverSearch::new(&graph, SearchOptions::with_timeout(Duration::ZERO));
        let result = search.find_cover_of_size(20);
        assert!(matches!(result, Err(ReduceError::SearchTimeout { .. })));
    }
}
