#![allow(dead_code)]

use labelgraph::{prelude::*, tracing_support};

/// Installs the stderr subscriber once per test binary.  Set
/// `LABELGRAPH_TEST_VERBOSE` to see per-operation debug events.
pub fn init_tracing() {
    tracing_support::init_tracing(std::env::var_os("LABELGRAPH_TEST_VERBOSE").is_some());
}

/// Builds a graph from vertex labels and `(source, target, weight)` edges,
/// all tagged directional.
pub fn build_graph(vertices: &[&str], edges: &[(&str, &str, f64)]) -> GraphStore {
    init_tracing();
    let mut graph = GraphStore::new();
    for label in vertices {
        graph.add_vertex(*label);
    }
    for (source, target, weight) in edges {
        assert!(graph.add_edge(*source, *target, EdgeKind::Directional, *weight));
    }
    graph
}

/// The three-vertex graph A→B (2), B→C (3), A→C (10).
pub fn triangle() -> GraphStore {
    build_graph(
        &["A", "B", "C"],
        &[("A", "B", 2.0), ("B", "C", 3.0), ("A", "C", 10.0)],
    )
}
