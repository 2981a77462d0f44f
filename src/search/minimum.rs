//! Branch-and-bound search for a minimum vertex cover

use super::{Cover, CoverSearch, Decision};
use crate::error::Result;

/// Smallest cover recorded so far, owned by the top-level call
struct Incumbent {
    size: usize,
    cover: Cover,
}

impl CoverSearch<'_> {
    /// Find a cover with the fewest vertices.
    ///
    /// Starts from the trivial all-included cover and only replaces it with
    /// strictly smaller valid covers, so ties keep the first one found.
    pub fn find_minimum_cover(&mut self) -> Result<Cover> {
        self.start();
        let n = self.graph.vertex_count();
        let mut best = Incumbent {
            size: n,
            cover: Cover::full(n),
        };
        let mut decisions = vec![Decision::Unvisited; n];

        self.minimum_inner(&mut decisions, 0, 0, &mut best)?;

        debug_assert!(self.graph.is_covered_by(best.cover.as_bits()));
        Ok(best.cover)
    }

    fn minimum_inner(
        &mut self,
        decisions: &mut [Decision],
        cursor: usize,
        count: usize,
        best: &mut Incumbent,
    ) -> Result<()> {
        self.visit()?;

        // Completing this branch can only add vertices
        if count >= best.size {
            return Ok(());
        }

        if cursor == decisions.len() {
            let cover = Cover::from_decisions(decisions);
            if self.graph.is_covered_by(cover.as_bits()) {
                best.size = count;
                best.cover = cover;
            }
            return Ok(());
        }

        decisions[cursor] = Decision::Included;
        self.minimum_inner(decisions, cursor + 1, count + 1, best)?;

        // An edge to an already excluded vertex could never be covered
        let blocked = self
            .graph
            .neighbours(cursor)
            .any(|u| decisions[u] == Decision::Excluded);
        if !blocked {
            decisions[cursor] = Decision::Excluded;
            self.minimum_inner(decisions, cursor + 1, count, best)?;
        }

        decisions[cursor] = Decision::Unvisited;
        Ok(())
    }
}
