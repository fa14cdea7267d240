use std::collections::{HashSet, VecDeque};

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

/// Labels used by generated graphs.  The last one is never added as a
/// vertex, so edges and queries naming it exercise the unknown-label paths.
pub const LABELS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "Z"];

pub fn arbitrary_label(g: &mut Gen) -> String {
    g.choose(&LABELS).copied().unwrap_or("A").to_string()
}

fn known_label(g: &mut Gen) -> String {
    let known = &LABELS[..LABELS.len() - 1];
    g.choose(known).copied().unwrap_or("A").to_string()
}

/// One mutation applied while building an arbitrary graph.
#[derive(Clone, Debug)]
pub enum Op {
    AddVertex(String),
    AddEdge(String, String, EdgeKind, f64),
    RemoveVertex(String),
    RemoveEdge(String, String),
}

impl Op {
    pub fn apply(&self, graph: &mut GraphStore) {
        match self {
            Op::AddVertex(label) => {
                graph.add_vertex(label.clone());
            }
            Op::AddEdge(source, target, kind, weight) => {
                graph.add_edge(source.clone(), target.clone(), *kind, *weight);
            }
            Op::RemoveVertex(label) => {
                graph.remove_vertex(label);
            }
            Op::RemoveEdge(source, target) => {
                graph.remove_edge(source, target);
            }
        }
    }
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // Weighted towards additions so graphs do not stay empty.
        match u8::arbitrary(g) % 10 {
            0..=3 => Op::AddVertex(known_label(g)),
            4..=7 => Op::AddEdge(
                arbitrary_label(g),
                arbitrary_label(g),
                EdgeKind::arbitrary(g),
                f64::from(u8::arbitrary(g) % 20),
            ),
            8 => Op::RemoveVertex(arbitrary_label(g)),
            _ => Op::RemoveEdge(arbitrary_label(g), arbitrary_label(g)),
        }
    }
}

/// A graph built by replaying arbitrary mutations, together with the
/// mutations themselves.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: GraphStore,
    pub ops: Vec<Op>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_ops = usize::arbitrary(g) % 60; // Limit size for testing
        let ops: Vec<Op> = (0..num_ops).map(|_| Op::arbitrary(g)).collect();
        let mut graph = GraphStore::with_directedness(Directedness::arbitrary(g));
        for op in &ops {
            op.apply(&mut graph);
        }
        ArbGraph { graph, ops }
    }
}

pub fn has_duplicates<T: Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Labels reachable from `start` by breadth-first search, following edges
/// the way the current mode allows.
pub fn reachable_from(graph: &GraphStore, start: &str) -> HashSet<String> {
    let mut visited = HashSet::new();
    if !graph.contains_vertex(start) {
        return visited;
    }
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(label) = queue.pop_front() {
        if !visited.insert(label.clone()) {
            continue;
        }
        for (neighbor, _) in graph.traversable_from(&label) {
            if !visited.contains(neighbor) {
                queue.push_back(neighbor.to_string());
            }
        }
    }
    visited
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency(graph: &GraphStore) {
    // Verify labels are unique
    assert!(!has_duplicates(graph.vertex_labels()));

    // Verify no edge dangles
    for edge in graph.edges() {
        assert!(
            graph.contains_vertex(edge.source()),
            "dangling source in {edge}"
        );
        assert!(
            graph.contains_vertex(edge.target()),
            "dangling target in {edge}"
        );
    }

    // Verify counts are correct
    assert_eq!(graph.vertices().count(), graph.order());
    assert_eq!(graph.edges().count(), graph.size());
    assert_eq!(graph.is_empty(), graph.order() == 0);

    // If there are edges, there must be vertices
    assert!(graph.order() > 0 || graph.size() == 0);

    // Every edge is counted once as outgoing and once as incoming
    let outgoing: usize = graph.vertex_labels().map(|v| graph.degree(v).outgoing).sum();
    let incoming: usize = graph.vertex_labels().map(|v| graph.degree(v).incoming).sum();
    assert_eq!(outgoing, graph.size());
    assert_eq!(incoming, graph.size());
}
