//! Shared state for the exact-size and minimum cover searches

use crate::error::{ReduceError, Result};
use crate::graph::Graph;
use std::time::{Duration, Instant};

/// How often, in visited nodes, the deadline is compared against the clock
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Whole milliseconds, saturating at `u64::MAX`
pub(crate) fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Limits applied to a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Abort with [`ReduceError::SearchTimeout`] once this much time has passed
    pub timeout: Option<Duration>,
}

impl SearchOptions {
    /// Run to completion
    pub fn unbounded() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls made, including pruned ones
    pub nodes: u64,
}

/// Backtracking cover search over one graph.
///
/// The graph is borrowed immutably for the whole search; all backtracking
/// state belongs to the call in progress, so one `CoverSearch` can run
/// several searches in sequence.
pub struct CoverSearch<'a> {
    pub(super) graph: &'a Graph,
    options: SearchOptions,
    started: Instant,
    stats: SearchStats,
}

impl<'a> CoverSearch<'a> {
    pub fn new(graph: &'a Graph, options: SearchOptions) -> Self {
        Self {
            graph,
            options,
            started: Instant::now(),
            stats: SearchStats::default(),
        }
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Reset the clock and counters before a new top-level search
    pub(super) fn start(&mut self) {
        self.started = Instant::now();
        self.stats = SearchStats::default();
    }

    /// Count a node and honour the deadline
    #[inline]
    pub(super) fn visit(&mut self) -> Result<()> {
        self.stats.nodes += 1;
        if let Some(timeout) = self.options.timeout {
            if self.stats.nodes % DEADLINE_CHECK_INTERVAL == 0 {
                let elapsed = self.started.elapsed();
                if elapsed >= timeout {
                    return Err(ReduceError::SearchTimeout {
                        elapsed_ms: millis(elapsed),
                    });
                }
            }
        }
        Ok(())
    }
}
