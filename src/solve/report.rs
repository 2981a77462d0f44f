//! Results of solving one instance, with the sizes of every intermediate instance

use crate::reduce::Clique;
use crate::sat::Assignment;
use crate::search::Cover;
use serde::Serialize;

/// Size of a graph problem handed to the next stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstanceSize {
    pub vertices: usize,
    pub edges: usize,
    pub k: usize,
}

/// What the reduction chain produced for one formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SatOutcome {
    /// The clique picked one true literal per clause
    Satisfied { assignment: Assignment, clique: Clique },
    /// No cover of the required size exists. `fallback` is random and only
    /// shown for reference.
    NoSolution { fallback: Assignment },
    /// The search deadline passed before the tree was exhausted
    TimedOut { fallback: Assignment },
}

impl SatOutcome {
    /// The solution, or the random fallback when there is none
    pub fn assignment(&self) -> &Assignment {
        match self {
            SatOutcome::Satisfied { assignment, .. } => assignment,
            SatOutcome::NoSolution { fallback } | SatOutcome::TimedOut { fallback } => fallback,
        }
    }
}

/// Report for one 3-CNF formula
#[derive(Debug, Clone, Serialize)]
pub struct SatReport {
    /// Formula as `( 1| 2| 3)∧...`
    pub formula: String,
    /// Formula with each literal replaced by its truth value
    pub evaluated: String,
    pub variable_count: usize,
    pub clause_count: usize,
    pub clique: InstanceSize,
    pub cover: InstanceSize,
    pub outcome: SatOutcome,
    /// The assignment was checked clause by clause
    pub verified: bool,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

impl SatReport {
    pub fn is_satisfied(&self) -> bool {
        matches!(self.outcome, SatOutcome::Satisfied { .. })
    }

    pub fn timed_out(&self) -> bool {
        matches!(self.outcome, SatOutcome::TimedOut { .. })
    }

    pub fn assignment(&self) -> &Assignment {
        self.outcome.assignment()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Report for a vertex-cover search on one graph
#[derive(Debug, Clone, Serialize)]
pub struct CoverReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Set for an exact-size search, `None` for a minimum search
    pub requested_size: Option<usize>,
    /// `None` when an exact-size search found nothing or the search timed out
    pub cover: Option<Cover>,
    pub timed_out: bool,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

impl CoverReport {
    pub fn size(&self) -> Option<usize> {
        self.cover.as_ref().map(Cover::size)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Report for a maximum-clique search on one graph
#[derive(Debug, Clone, Serialize)]
pub struct CliqueReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// `None` when the search timed out
    pub clique: Option<Clique>,
    /// Size of the minimum cover found on the complement graph
    pub cover_size: Option<usize>,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

impl CliqueReport {
    /// `vertex_count - cover_size`
    pub fn size(&self) -> Option<usize> {
        self.clique.as_ref().map(Clique::size)
    }

    pub fn timed_out(&self) -> bool {
        self.clique.is_none()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
