//! Vertex-cover instances obtained from clique instances by complementation

use super::CliqueInstance;
use crate::graph::Graph;

/// Does `graph` have a vertex cover of `k` vertices?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexCoverInstance {
    pub graph: Graph,
    pub k: usize,
}

impl VertexCoverInstance {
    pub fn new(graph: Graph, k: usize) -> Self {
        Self { graph, k }
    }

    /// A set is a k-clique of G exactly when its complement is a
    /// `(|V| - k)`-cover of the complement of G.
    pub fn from_clique_instance(instance: &CliqueInstance) -> Self {
        let n = instance.graph.vertex_count();
        Self {
            graph: instance.graph.complement(),
            k: n.saturating_sub(instance.k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::CnfInstance;

    #[test]
    fn test_from_cnf_chain_arithmetic() {
        for tokens in [
            vec![1, 2, 3],
            vec![1, 2, 3, -1, -2, -3],
            vec![1, -2, 3, 2, 4, -1, -3, -4, 2],
        ] {
            let cnf = CnfInstance::parse(&tokens).unwrap();
            let clique = CliqueInstance::from_cnf(&cnf);
            let cover = VertexCoverInstance::from_clique_instance(&clique);

            assert_eq!(cover.graph.vertex_count(), 3 * cnf.clause_count());
            assert_eq!(cover.k, 2 * cnf.clause_count());
            let n = cover.graph.vertex_count();
            assert_eq!(
                cover.graph.edge_count() + clique.graph.edge_count(),
                n * (n - 1) / 2
            );
        }
    }

    #[test]
    fn test_complement_graph() {
        let mut graph = Graph::new(3);
        graph.connect(0, 1);
        let cover = VertexCoverInstance::from_clique_instance(&CliqueInstance::new(graph, 2));
        assert_eq!(cover.k, 1);
        assert!(!cover.graph.connected(0, 1));
        assert!(cover.graph.connected(0, 2));
        assert!(cover.graph.connected(1, 2));
    }
}
