//! Exact vertex-cover search: fixed-size existence and branch-and-bound minimum

pub mod cover;
pub mod engine;
pub mod exact;
pub mod minimum;

pub use cover::{vertex_set_string, Cover, Decision};
pub use engine::{CoverSearch, SearchOptions, SearchStats};

use crate::error::Result;
use crate::graph::Graph;

/// Any cover of exactly `k` vertices, or `None` if there is none
pub fn find_cover_of_size(graph: &Graph, k: usize) -> Result<Option<Cover>> {
    CoverSearch::new(graph, SearchOptions::unbounded()).find_cover_of_size(k)
}

/// A cover of minimum size
pub fn find_minimum_cover(graph: &Graph) -> Result<Cover> {
    CoverSearch::new(graph, SearchOptions::unbounded()).find_minimum_cover()
}
