//! Reading and writing graph batches
//!
//! A batch is a stream of whitespace-separated integers. Each graph is its
//! vertex count `n` followed by `n * n` adjacency entries in row-major order.
//! A vertex count of `0`, or the end of the input, terminates the batch.

use super::Graph;
use crate::error::{ReduceError, Result};
use anyhow::Context;
use std::path::Path;

/// Load every graph from a batch file
pub fn load_graph_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Graph>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read graph file: {}", path.as_ref().display()))?;

    read_graph_batch(&content)
        .with_context(|| format!("Failed to parse graph file: {}", path.as_ref().display()))
}

/// Parse a batch of graphs from a string
pub fn read_graph_batch(content: &str) -> Result<Vec<Graph>> {
    let mut tokens = content
        .lines()
        .enumerate()
        .flat_map(|(line, text)| text.split_whitespace().map(move |token| (line + 1, token)));

    let mut next_value = |what: &str| -> Result<Option<(usize, usize)>> {
        match tokens.next() {
            None => Ok(None),
            Some((line, token)) => token
                .parse::<usize>()
                .map(|value| Some((line, value)))
                .map_err(|_| ReduceError::Parse {
                    line,
                    message: format!("invalid {} '{}'", what, token),
                }),
        }
    };

    let mut graphs = Vec::new();
    while let Some((line, size)) = next_value("vertex count")? {
        if size == 0 {
            break;
        }

        let mut rows = Vec::with_capacity(size);
        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                let (_, entry) = next_value("adjacency entry")?.ok_or_else(|| ReduceError::Parse {
                    line,
                    message: format!("graph of {} vertices ends before its matrix is complete", size),
                })?;
                let entry = u8::try_from(entry).map_err(|_| ReduceError::Parse {
                    line,
                    message: format!("adjacency entry {} is not 0 or 1", entry),
                })?;
                row.push(entry);
            }
            rows.push(row);
        }
        graphs.push(Graph::from_matrix(&rows)?);
    }

    Ok(graphs)
}

/// Render a graph in the batch format (vertex count, then the matrix)
pub fn graph_to_string(graph: &Graph) -> String {
    let n = graph.vertex_count();
    let mut result = format!("{}\n", n);
    for i in 0..n {
        let row: Vec<&str> = (0..n)
            .map(|j| if graph.connected(i, j) { "1" } else { "0" })
            .collect();
        result.push_str(&row.join(" "));
        result.push('\n');
    }
    result
}
