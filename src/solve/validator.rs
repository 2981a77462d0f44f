//! Independent checks of the solutions the reduction chain produces

use crate::error::Result;
use crate::graph::Graph;
use crate::reduce::Clique;
use crate::sat::{Assignment, CnfInstance, Truth};

/// Outcome of checking an assignment against a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Indices of clauses with no literal evaluating to true
    pub unsatisfied_clauses: Vec<usize>,
    pub error_message: Option<String>,
}

/// A clause is satisfied when one of its literals evaluates to `T`.
///
/// Unassigned variables satisfy nothing, so an assignment read off a clique
/// passes only because every clause has its selected literal set.
pub fn check_assignment(cnf: &CnfInstance, assignment: &Assignment) -> ValidationResult {
    let unsatisfied_clauses: Vec<usize> = cnf
        .clauses()
        .enumerate()
        .filter(|(_, clause)| {
            !clause
                .iter()
                .any(|&lit| assignment.literal_value(lit) == Truth::True)
        })
        .map(|(idx, _)| idx)
        .collect();

    let is_valid = unsatisfied_clauses.is_empty();
    let error_message = if is_valid {
        None
    } else {
        Some(format!(
            "{} of {} clauses unsatisfied (first: clause {})",
            unsatisfied_clauses.len(),
            cnf.clause_count(),
            unsatisfied_clauses[0] + 1
        ))
    };

    ValidationResult {
        is_valid,
        unsatisfied_clauses,
        error_message,
    }
}

/// Whether `clique` has `k` vertices that are pairwise adjacent in `graph`
pub fn check_clique(graph: &Graph, clique: &Clique, k: usize) -> Result<bool> {
    Ok(clique.size() == k && graph.is_clique(clique.as_bits())?)
}
