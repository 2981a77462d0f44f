//! Solving instances end to end and reporting the results

pub mod problem;
pub mod report;
pub mod validator;

pub use problem::{
    solve_3sat, solve_max_clique, solve_vertex_cover, solve_vertex_cover_of_size, BatchSolver, SolveOptions,
};
pub use report::{CliqueReport, CoverReport, InstanceSize, SatOutcome, SatReport};
pub use validator::{check_assignment, check_clique, ValidationResult};
