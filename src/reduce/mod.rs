//! Reductions 3-CNF -> k-clique -> vertex cover, and back

pub mod clique;
pub mod vertex_cover;

pub use clique::{Clique, CliqueInstance};
pub use vertex_cover::VertexCoverInstance;

use crate::sat::CnfInstance;
use crate::search::Cover;

pub fn cnf_to_clique(cnf: &CnfInstance) -> CliqueInstance {
    CliqueInstance::from_cnf(cnf)
}

pub fn clique_to_vertex_cover(instance: &CliqueInstance) -> VertexCoverInstance {
    VertexCoverInstance::from_clique_instance(instance)
}

/// `clique[i] = 1 - cover[i]`
pub fn cover_to_clique(cover: &Cover) -> Clique {
    Clique::from_cover(cover)
}
