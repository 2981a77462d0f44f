//! 3-CNF satisfiability by reduction to vertex cover
//!
//! A 3-CNF formula is reduced to a k-clique instance, the clique instance to a
//! vertex-cover instance on the complement graph, and the vertex-cover
//! instance is solved by exact backtracking search. The cover is then mapped
//! back through both reductions to a variable assignment. The same searches
//! answer minimum vertex cover and maximum clique directly on graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod reduce;
pub mod sat;
pub mod search;
pub mod solve;
pub mod utils;

pub use config::Settings;
pub use error::{ReduceError, Result};
pub use graph::Graph;
pub use reduce::{Clique, CliqueInstance, VertexCoverInstance};
pub use sat::{Assignment, CnfInstance, Truth};
pub use search::{Cover, CoverSearch, SearchOptions};
pub use solve::{BatchSolver, SatReport, SolveOptions};

use std::path::Path;

/// Solve every formula of a CNF batch file with the given settings
pub fn solve_cnf_file<P: AsRef<Path>>(settings: &Settings, path: P) -> anyhow::Result<Vec<SatReport>> {
    let cnfs = sat::load_cnf_file(path)?;
    Ok(BatchSolver::from_settings(settings).solve_3sat(&cnfs)?)
}
