//! Drivers that run the reduction chain and the searches, one instance or a batch

use super::report::{CliqueReport, CoverReport, InstanceSize, SatOutcome, SatReport};
use super::validator::{check_assignment, check_clique};
use crate::config::Settings;
use crate::error::{ReduceError, Result};
use crate::graph::Graph;
use crate::reduce::{clique_to_vertex_cover, cnf_to_clique, cover_to_clique};
use crate::sat::CnfInstance;
use crate::search::engine::millis;
use crate::search::{Cover, CoverSearch, SearchOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Options for solving a single instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub search: SearchOptions,
    /// Seed for the fallback assignment; drawn from the OS when unset
    pub seed: Option<u64>,
}

impl SolveOptions {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Same limits, seed shifted so every instance of a batch draws differently
    fn for_instance(&self, index: usize) -> Self {
        Self {
            search: self.search,
            seed: self.seed.map(|seed| seed.wrapping_add(index as u64)),
        }
    }
}

fn size_of(graph: &Graph, k: usize) -> InstanceSize {
    InstanceSize {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        k,
    }
}

/// A deadline overrun becomes `None` so the rest of a batch still reports;
/// every other error propagates
fn within_deadline<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ReduceError::SearchTimeout { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Decide a 3-CNF formula through 3-CNF -> k-clique -> vertex cover.
///
/// The cover search looks for exactly `2 * clause_count` vertices; its
/// complement is a clause-count clique, which fixes one true literal per
/// clause. Without such a cover, or when the search runs out of time, the
/// report carries a random assignment.
pub fn solve_3sat(cnf: &CnfInstance, options: &SolveOptions) -> Result<SatReport> {
    let started = Instant::now();

    let clique_instance = cnf_to_clique(cnf);
    let cover_instance = clique_to_vertex_cover(&clique_instance);

    let mut search = CoverSearch::new(&cover_instance.graph, options.search);
    let found = within_deadline(search.find_cover_of_size(cover_instance.k))?;

    let (outcome, verified) = match found {
        Some(Some(cover)) => {
            let clique = cover_to_clique(&cover);
            let assignment = cnf.assignment_from_clique(&clique)?;
            let verified = check_clique(&clique_instance.graph, &clique, clique_instance.k)?
                && check_assignment(cnf, &assignment).is_valid;
            (SatOutcome::Satisfied { assignment, clique }, verified)
        }
        Some(None) => {
            let fallback = cnf.random_assignment(&mut options.rng());
            (SatOutcome::NoSolution { fallback }, false)
        }
        None => {
            let fallback = cnf.random_assignment(&mut options.rng());
            (SatOutcome::TimedOut { fallback }, false)
        }
    };

    let evaluated = cnf.render_with_assignment(outcome.assignment());

    Ok(SatReport {
        formula: cnf.to_string(),
        evaluated,
        variable_count: cnf.variable_count(),
        clause_count: cnf.clause_count(),
        clique: size_of(&clique_instance.graph, clique_instance.k),
        cover: size_of(&cover_instance.graph, cover_instance.k),
        outcome,
        verified,
        nodes: search.stats().nodes,
        elapsed_ms: millis(started.elapsed()),
    })
}

/// Minimum vertex cover of `graph`
pub fn solve_vertex_cover(graph: &Graph, options: &SolveOptions) -> Result<CoverReport> {
    let started = Instant::now();
    let mut search = CoverSearch::new(graph, options.search);
    let cover = within_deadline(search.find_minimum_cover())?;

    Ok(CoverReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        requested_size: None,
        timed_out: cover.is_none(),
        cover,
        nodes: search.stats().nodes,
        elapsed_ms: millis(started.elapsed()),
    })
}

/// A vertex cover of exactly `k` vertices, if one exists
pub fn solve_vertex_cover_of_size(graph: &Graph, k: usize, options: &SolveOptions) -> Result<CoverReport> {
    let started = Instant::now();
    let mut search = CoverSearch::new(graph, options.search);
    let (cover, timed_out) = match within_deadline(search.find_cover_of_size(k))? {
        Some(cover) => (cover, false),
        None => (None, true),
    };

    Ok(CoverReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        requested_size: Some(k),
        cover,
        timed_out,
        nodes: search.stats().nodes,
        elapsed_ms: millis(started.elapsed()),
    })
}

/// Maximum clique of `graph`, as the complement of a minimum cover of the
/// complement graph
pub fn solve_max_clique(graph: &Graph, options: &SolveOptions) -> Result<CliqueReport> {
    let started = Instant::now();
    let complement = graph.complement();

    let mut search = CoverSearch::new(&complement, options.search);
    let cover = within_deadline(search.find_minimum_cover())?;
    let clique = cover.as_ref().map(cover_to_clique);
    debug_assert!(clique
        .as_ref()
        .map_or(true, |clique| graph.is_clique(clique.as_bits()).unwrap_or(false)));

    Ok(CliqueReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        cover_size: cover.as_ref().map(Cover::size),
        clique,
        nodes: search.stats().nodes,
        elapsed_ms: millis(started.elapsed()),
    })
}

/// Solves every instance of an input file with the same options.
///
/// With `parallel` set, instances are spread over the rayon pool; each
/// search itself stays sequential. Output order always follows input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSolver {
    options: SolveOptions,
    parallel: bool,
}

impl BatchSolver {
    pub fn new(options: SolveOptions, parallel: bool) -> Self {
        Self { options, parallel }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let timeout = match settings.search.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(
            SolveOptions {
                search: SearchOptions { timeout },
                seed: settings.search.random_seed,
            },
            settings.search.parallel,
        )
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    fn run<T, R, F>(&self, items: &[T], solve: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> Result<R> + Sync,
    {
        if self.parallel {
            items
                .par_iter()
                .enumerate()
                .map(|(idx, item)| solve(idx, item))
                .collect()
        } else {
            items
                .iter()
                .enumerate()
                .map(|(idx, item)| solve(idx, item))
                .collect()
        }
    }

    pub fn solve_3sat(&self, cnfs: &[CnfInstance]) -> Result<Vec<SatReport>> {
        self.run(cnfs, |idx, cnf| solve_3sat(cnf, &self.options.for_instance(idx)))
    }

    pub fn solve_vertex_cover(&self, graphs: &[Graph], size: Option<usize>) -> Result<Vec<CoverReport>> {
        self.run(graphs, |_, graph| match size {
            Some(k) => solve_vertex_cover_of_size(graph, k, &self.options),
            None => solve_vertex_cover(graph, &self.options),
        })
    }

    pub fn solve_max_clique(&self, graphs: &[Graph]) -> Result<Vec<CliqueReport>> {
        self.run(graphs, |_, graph| solve_max_clique(graph, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::Truth;
    use crate::search::tests::{brute_force_minimum, random_graph};

    fn seeded() -> SolveOptions {
        SolveOptions {
            search: SearchOptions::unbounded(),
            seed: Some(42),
        }
    }

    fn cnf(tokens: &[i32]) -> CnfInstance {
        CnfInstance::parse(tokens).unwrap()
    }

    #[test]
    fn test_single_clause() {
        let report = solve_3sat(&cnf(&[1, 2, 3]), &seeded()).unwrap();
        assert_eq!(report.clique, InstanceSize { vertices: 3, edges: 0, k: 1 });
        assert_eq!(report.cover.k, 2);
        assert!(report.is_satisfied());
        assert!(report.verified);

        let assignment = report.assignment();
        assert!((1..=3).any(|var| assignment.get(var) == Truth::True));
    }

    #[test]
    fn test_clause_with_both_polarities() {
        let report = solve_3sat(&cnf(&[1, -1, 1]), &seeded()).unwrap();
        assert!(report.is_satisfied());
        assert!(report.verified);
        assert_ne!(report.assignment().get(1), Truth::Unassigned);
    }

    #[test]
    fn test_two_clauses() {
        let formula = cnf(&[1, 2, 3, -1, -2, -3]);
        let report = solve_3sat(&formula, &seeded()).unwrap();
        assert_eq!(report.clique.vertices, 6);
        assert_eq!(report.clique.k, 2);
        assert_eq!(report.cover.k, 4);
        assert!(report.verified);

        let SatOutcome::Satisfied { assignment, clique } = &report.outcome else {
            panic!("expected a solution");
        };
        assert_eq!(clique.size(), 2);
        assert!(check_assignment(&formula, assignment).is_valid);
        assert_eq!(report.formula, "( 1| 2| 3)∧(-1|-2|-3)");
    }

    #[test]
    fn test_unsatisfiable() {
        // Every assignment of x1, x2 falsifies one of these four clauses
        let formula = cnf(&[1, 1, 2, 1, 1, -2, -1, -1, 2, -1, -1, -2]);
        let report = solve_3sat(&formula, &seeded()).unwrap();
        assert!(!report.is_satisfied());
        assert!(!report.verified);
        assert_eq!(report.assignment().assigned_count(), 2);
        assert_eq!(report.cover.k, 8);

        let again = solve_3sat(&formula, &seeded()).unwrap();
        assert_eq!(again.assignment(), report.assignment());
    }

    #[test]
    fn test_vertex_cover_reports() {
        let graph = random_graph(8, 0.4, 11);
        let minimum = brute_force_minimum(&graph);

        let report = solve_vertex_cover(&graph, &seeded()).unwrap();
        assert_eq!(report.size(), Some(minimum));
        assert_eq!(report.requested_size, None);

        let exact = solve_vertex_cover_of_size(&graph, minimum, &seeded()).unwrap();
        assert_eq!(exact.size(), Some(minimum));

        if minimum > 0 {
            let below = solve_vertex_cover_of_size(&graph, minimum - 1, &seeded()).unwrap();
            assert!(below.cover.is_none());
        }
    }

    #[test]
    fn test_max_clique() {
        let mut graph = Graph::new(5);
        for (a, b) in [(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)] {
            graph.connect(a, b);
        }
        let report = solve_max_clique(&graph, &seeded()).unwrap();
        assert_eq!(report.size(), Some(3));
        assert_eq!(report.cover_size, Some(2));
        let clique = report.clique.unwrap();
        assert_eq!(clique.vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_max_clique_matches_complement_cover() {
        for seed in 0..6 {
            let graph = random_graph(8, 0.5, seed);
            let report = solve_max_clique(&graph, &seeded()).unwrap();
            assert!(graph.is_clique(report.clique.as_ref().unwrap().as_bits()).unwrap());
            assert_eq!(report.size(), Some(8 - brute_force_minimum(&graph.complement())));
        }
    }

    #[test]
    fn test_batch_parallel_matches_sequential() {
        let cnfs = vec![
            cnf(&[1, 2, 3]),
            cnf(&[1, 1, 2, 1, 1, -2, -1, -1, 2, -1, -1, -2]),
            cnf(&[1, -2, 3, 2, 4, -1, -3, -4, 2]),
        ];
        let sequential = BatchSolver::new(seeded(), false).solve_3sat(&cnfs).unwrap();
        let parallel = BatchSolver::new(seeded(), true).solve_3sat(&cnfs).unwrap();

        assert_eq!(sequential.len(), 3);
        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.outcome, b.outcome);
            assert_eq!(a.formula, b.formula);
        }
        assert!(!sequential[1].is_satisfied());
    }

    #[test]
    fn test_batch_from_settings() {
        let mut settings = Settings::default();
        settings.search.timeout_seconds = 5;
        settings.search.random_seed = Some(1);
        let solver = BatchSolver::from_settings(&settings);
        assert_eq!(solver.options().search.timeout, Some(Duration::from_secs(5)));
        assert_eq!(solver.options().seed, Some(1));

        let graphs = vec![random_graph(6, 0.5, 1), Graph::new(2)];
        let reports = solver.solve_vertex_cover(&graphs, None).unwrap();
        assert_eq!(reports[1].size(), Some(0));
        let cliques = solver.solve_max_clique(&graphs).unwrap();
        assert_eq!(cliques[1].size(), Some(1));
    }

    fn expired() -> SolveOptions {
        SolveOptions {
            search: SearchOptions::with_timeout(Duration::ZERO),
            seed: Some(42),
        }
    }

    fn complete(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for a in 0..n {
            for b in (a + 1)..n {
                graph.connect(a, b);
            }
        }
        graph
    }

    #[test]
    fn test_timeout_keeps_the_rest_of_a_cover_batch() {
        let graphs = vec![complete(3), complete(40)];
        for parallel in [false, true] {
            let reports = BatchSolver::new(expired(), parallel)
                .solve_vertex_cover(&graphs, Some(20))
                .unwrap();
            assert_eq!(reports.len(), 2);

            assert!(!reports[0].timed_out);
            assert_eq!(reports[0].cover, None);
            assert!(reports[1].timed_out);
            assert_eq!(reports[1].cover, None);
            assert!(reports[1].nodes >= 1024);
        }

        let reports = BatchSolver::new(expired(), false)
            .solve_vertex_cover(&graphs, Some(2))
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].size(), Some(2));
    }

    #[test]
    fn test_timeout_keeps_the_rest_of_a_sat_batch() {
        // All eight sign patterns over three variables: unsatisfiable, and the
        // 24-vertex exact search runs far past the first deadline check
        let mut every_clause = Vec::new();
        for signs in 0..8 {
            for var in 1..=3 {
                let negative = signs & (1 << (var - 1)) != 0;
                every_clause.push(if negative { -var } else { var });
            }
        }
        let cnfs = vec![cnf(&[1, 2, 3]), cnf(&every_clause)];

        let reports = BatchSolver::new(expired(), false).solve_3sat(&cnfs).unwrap();
        assert!(reports[0].is_satisfied());
        assert!(reports[0].verified);
        assert!(reports[1].timed_out());
        assert!(!reports[1].verified);
        assert_eq!(reports[1].assignment().assigned_count(), 3);
        assert!(matches!(reports[1].outcome, SatOutcome::TimedOut { .. }));
    }

    #[test]
    fn test_timeout_in_max_clique() {
        // The complement of this graph is the sparse one the cover search struggles with
        let graph = random_graph(60, 0.1, 3).complement();
        let report = solve_max_clique(&graph, &expired()).unwrap();
        assert!(report.timed_out());
        assert_eq!(report.size(), None);
        assert_eq!(report.cover_size, None);

        let small = solve_max_clique(&complete(4), &expired()).unwrap();
        assert_eq!(small.size(), Some(4));
    }
}
