//! 3-CNF formulas, assignments and batch input

pub mod assignment;
pub mod cnf;
pub mod io;

pub use assignment::{Assignment, Truth};
pub use cnf::CnfInstance;
pub use io::{load_cnf_file, read_cnf_batch};
