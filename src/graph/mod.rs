//! Undirected graph model and graph file I/O

pub mod adjacency;
pub mod io;

pub use adjacency::Graph;
pub use io::{graph_to_string, load_graph_file, read_graph_batch};
