//! [`GraphStore`] is the in-memory graph that every operation of this crate
//! works on.  It owns an insertion-ordered list of [`Vertex`] values, an
//! insertion-ordered list of [`Edge`] values, and the graph-wide
//! [`Directedness`] mode.
//!
//! Mutations come in two flavors:
//!
//! - Lenient methods ([`GraphStore::add_vertex`], [`GraphStore::add_edge`],
//!   [`GraphStore::remove_vertex`], [`GraphStore::remove_edge`]) silently
//!   ignore requests that make no sense (duplicate labels, unknown
//!   endpoints) and report only whether anything changed.
//! - Checked methods (`try_*`) perform the same work but return a
//!   [`GraphError`] describing why a request was ignored.
//!
//! Queries never fail.  Unknown labels produce empty or zero results, and an
//! unreachable destination produces [`PathResult::unreachable`].
//!
//! Edge direction during traversal is decided by the graph-wide mode only.
//! Each edge also records an [`EdgeKind`], which is kept for display but
//! ignored by [`GraphStore::adjacents`], [`GraphStore::degree`],
//! [`GraphStore::are_adjacent`] and [`GraphStore::shortest_path`].

use crate::{
    directedness::Directedness,
    edge::Edge,
    edge_kind::EdgeKind,
    error::GraphError,
    path::PathResult,
    search,
    tracing_support::debug,
    vertex::Vertex,
};

/// Distinct neighbors of a vertex, split by the direction of the connecting
/// edge.  Labels appear in the order their first connecting edge was added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacents {
    pub incoming: Vec<String>,
    pub outgoing: Vec<String>,
}

/// Edge counts for a vertex.  Parallel edges are counted individually.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Degree {
    pub incoming: usize,
    pub outgoing: usize,
    /// `incoming + outgoing` in directed mode, `outgoing` alone in undirected
    /// mode.
    pub total: usize,
}

/// A labeled, weighted graph with a graph-wide directed mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    directedness: Directedness,
}

impl GraphStore {
    /// Creates an empty graph in directed mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph in the given mode.
    pub fn with_directedness(directedness: Directedness) -> Self {
        Self {
            directedness,
            ..Self::default()
        }
    }

    // Mode

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    pub fn set_directedness(&mut self, directedness: Directedness) {
        debug!(mode = %directedness, "set traversal mode");
        self.directedness = directedness;
    }

    /// Switches between directed (`true`) and undirected (`false`) mode.
    /// Stored edges are left untouched.
    pub fn set_directed(&mut self, directed: bool) {
        self.set_directedness(Directedness::from_directed(directed));
    }

    // Vertices

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    pub fn vertex_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(Vertex::label)
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertex_index(label).is_some()
    }

    pub(crate) fn vertex_index(&self, label: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.has_label(label))
    }

    /// Adds a vertex unless one with the same label exists.  Returns true if
    /// the vertex was added.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> bool {
        self.try_add_vertex(label).is_ok()
    }

    pub fn try_add_vertex(&mut self, label: impl Into<String>) -> Result<(), GraphError> {
        let label = label.into();
        if self.contains_vertex(&label) {
            debug!(%label, "ignoring duplicate vertex");
            return Err(GraphError::DuplicateVertex(label));
        }
        debug!(%label, "added vertex");
        self.vertices.push(Vertex::new(label));
        Ok(())
    }

    /// Removes a vertex and every edge that touches it.  Returns true if the
    /// vertex existed.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        self.try_remove_vertex(label).is_ok()
    }

    /// Removes a vertex and every edge that touches it, returning the removed
    /// edges in their original order.
    pub fn try_remove_vertex(&mut self, label: &str) -> Result<Vec<Edge>, GraphError> {
        let index = self
            .vertex_index(label)
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))?;
        self.vertices.remove(index);
        let removed = self.extract_edges(|edge| edge.touches(label));
        debug!(%label, incident = removed.len(), "removed vertex");
        Ok(removed)
    }

    // Edges

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Appends an edge if both endpoints exist.  Self-loops and parallel
    /// edges are accepted.  Returns true if the edge was added.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
        weight: f64,
    ) -> bool {
        self.try_add_edge(source, target, kind, weight).is_ok()
    }

    pub fn try_add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
        weight: f64,
    ) -> Result<(), GraphError> {
        let (source, target) = (source.into(), target.into());
        for label in [&source, &target] {
            if !self.contains_vertex(label) {
                debug!(%source, %target, "ignoring edge with unknown endpoint");
                return Err(GraphError::UnknownVertex(label.clone()));
            }
        }
        debug!(%source, %target, %kind, weight, "added edge");
        self.edges.push(Edge::new(source, target, kind, weight));
        Ok(())
    }

    /// Removes every edge running exactly from `source` to `target`, returning
    /// how many were removed.  The match is direction-sensitive in both modes,
    /// so an edge `target -> source` survives.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> usize {
        self.try_remove_edge(source, target)
            .map_or(0, |removed| removed.len())
    }

    pub fn try_remove_edge(&mut self, source: &str, target: &str) -> Result<Vec<Edge>, GraphError> {
        let removed = self.extract_edges(|edge| edge.connects(source, target));
        if removed.is_empty() {
            return Err(GraphError::UnknownEdge(
                source.to_string(),
                target.to_string(),
            ));
        }
        debug!(%source, %target, count = removed.len(), "removed edge");
        Ok(removed)
    }

    /// Removes all vertices and edges.  The mode is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    fn extract_edges(&mut self, mut pred: impl FnMut(&Edge) -> bool) -> Vec<Edge> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.edges.len());
        for edge in self.edges.drain(..) {
            if pred(&edge) {
                removed.push(edge);
            } else {
                kept.push(edge);
            }
        }
        self.edges = kept;
        removed
    }

    /// Edges whose source is `label`, regardless of mode.
    pub fn edges_from<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.source() == label)
    }

    /// Edges whose target is `label`, regardless of mode.
    pub fn edges_into<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.target() == label)
    }

    /// Edges connecting `from` to `into`.  In undirected mode edges running
    /// from `into` to `from` are included too.
    pub fn edges_between<'a>(
        &'a self,
        from: &'a str,
        into: &'a str,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        let directed = self.is_directed();
        self.edges
            .iter()
            .filter(move |edge| edge.connects(from, into) || (!directed && edge.connects(into, from)))
    }

    /// Neighbors reachable in one step from `label`, paired with the weight of
    /// the edge used.  In undirected mode edges into `label` are followed
    /// backwards as well.  A neighbor appears once per connecting edge.
    pub(crate) fn traversable_from<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let directed = self.is_directed();
        let forward = self
            .edges_from(label)
            .map(|edge| (edge.target(), edge.weight()));
        let backward = self
            .edges_into(label)
            .filter(move |_| !directed)
            .map(|edge| (edge.source(), edge.weight()));
        forward.chain(backward)
    }

    // Queries

    /// Distinct neighbors of `label`.  In undirected mode both lists hold the
    /// union of the directed incoming and outgoing neighbors.
    pub fn adjacents(&self, label: &str) -> Adjacents {
        let incoming = distinct(self.edges_into(label).map(Edge::source));
        let outgoing = distinct(self.edges_from(label).map(Edge::target));
        if self.is_directed() {
            return Adjacents { incoming, outgoing };
        }
        let union = distinct(outgoing.iter().chain(incoming.iter()).map(String::as_str));
        Adjacents {
            incoming: union.clone(),
            outgoing: union,
        }
    }

    /// Edge counts for `label`.  In undirected mode `total` equals
    /// `outgoing`, not the sum of both counts.
    pub fn degree(&self, label: &str) -> Degree {
        let incoming = self.edges_into(label).count();
        let outgoing = self.edges_from(label).count();
        let total = if self.is_directed() {
            incoming + outgoing
        } else {
            outgoing
        };
        Degree {
            incoming,
            outgoing,
            total,
        }
    }

    /// True if an edge runs from `a` to `b`, or, in undirected mode, from `b`
    /// to `a`.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.edges_between(a, b).next().is_some()
    }

    /// Finds a minimum-weight path from `start` to `end`.
    ///
    /// Weights are assumed to be non-negative; negative weights give
    /// unspecified (but terminating) results.  Returns
    /// [`PathResult::unreachable`] if either vertex is missing or no path
    /// exists.
    pub fn shortest_path(&self, start: &str, end: &str) -> PathResult {
        search::shortest_path(self, start, end)
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for label in labels {
        if !result.iter().any(|seen| seen == label) {
            result.push(label.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_graph() -> GraphStore {
        let mut graph = GraphStore::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", EdgeKind::Directional, 2.0);
        graph.add_edge("B", "C", EdgeKind::Directional, 3.0);
        graph.add_edge("A", "C", EdgeKind::Directional, 10.0);
        graph
    }

    #[test]
    fn test_new_graph_is_empty_and_directed() {
        let graph = GraphStore::new();
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
        assert!(graph.is_empty());
        assert!(graph.is_directed());
    }

    #[test]
    fn test_duplicate_vertex_is_ignored() {
        let mut graph = GraphStore::new();
        assert!(graph.add_vertex("A"));
        assert!(!graph.add_vertex("A"));
        assert_eq!(graph.order(), 1);
        assert_eq!(
            graph.try_add_vertex("A"),
            Err(GraphError::DuplicateVertex("A".to_string()))
        );
    }

    #[test]
    fn test_vertices_keep_insertion_order() {
        let mut graph = GraphStore::new();
        for label in ["C", "A", "B", "A"] {
            graph.add_vertex(label);
        }
        assert_eq!(graph.vertex_labels().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_edge_with_unknown_endpoint_is_ignored() {
        let mut graph = GraphStore::new();
        graph.add_vertex("A");
        assert!(!graph.add_edge("A", "Z", EdgeKind::Directional, 1.0));
        assert!(!graph.add_edge("Z", "A", EdgeKind::Directional, 1.0));
        assert_eq!(graph.size(), 0);
        assert_eq!(
            graph.try_add_edge("A", "Z", EdgeKind::Directional, 1.0),
            Err(GraphError::UnknownVertex("Z".to_string()))
        );
    }

    #[test]
    fn test_self_loops_and_parallel_edges_are_accepted() {
        let mut graph = GraphStore::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        assert!(graph.add_edge("A", "A", EdgeKind::Directional, 1.0));
        assert!(graph.add_edge("A", "B", EdgeKind::Directional, 1.0));
        assert!(graph.add_edge("A", "B", EdgeKind::Directional, 4.0));
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.edges_between("A", "B").count(), 2);
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph = abc_graph();
        graph.add_vertex("D");
        graph.add_edge("C", "D", EdgeKind::Directional, 1.0);
        let removed = graph.try_remove_vertex("C").unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 1);
        assert!(graph.edges().all(|edge| !edge.touches("C")));
        assert!(!graph.remove_vertex("C"));
    }

    #[test]
    fn test_remove_edge_removes_all_exact_matches() {
        let mut graph = abc_graph();
        graph.add_edge("A", "B", EdgeKind::Directional, 7.0);
        graph.add_edge("B", "A", EdgeKind::Directional, 7.0);
        assert_eq!(graph.remove_edge("A", "B"), 2);
        assert_eq!(graph.size(), 3);
        assert!(graph.edges().any(|edge| edge.connects("B", "A")));
        assert_eq!(graph.remove_edge("A", "B"), 0);
        assert_eq!(
            graph.try_remove_edge("A", "B"),
            Err(GraphError::UnknownEdge("A".to_string(), "B".to_string()))
        );
    }

    #[test]
    fn test_remove_edge_ignores_mode() {
        let mut graph = abc_graph();
        graph.set_directed(false);
        assert_eq!(graph.remove_edge("B", "A"), 0);
        assert!(graph.are_adjacent("B", "A"));
    }

    #[test]
    fn test_adjacents_directed() {
        let mut graph = abc_graph();
        graph.add_edge("A", "B", EdgeKind::Directional, 1.0);
        assert_eq!(
            graph.adjacents("A"),
            Adjacents {
                incoming: vec![],
                outgoing: vec!["B".to_string(), "C".to_string()],
            }
        );
        assert_eq!(
            graph.adjacents("C"),
            Adjacents {
                incoming: vec!["B".to_string(), "A".to_string()],
                outgoing: vec![],
            }
        );
    }

    #[test]
    fn test_adjacents_undirected_is_union() {
        let mut graph = abc_graph();
        graph.set_directed(false);
        let adjacents = graph.adjacents("B");
        assert_eq!(adjacents.outgoing, vec!["C".to_string(), "A".to_string()]);
        assert_eq!(adjacents.incoming, adjacents.outgoing);
    }

    #[test]
    fn test_adjacents_ignores_edge_kind() {
        let mut graph = GraphStore::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge("A", "B", EdgeKind::NonDirectional, 1.0);
        assert_eq!(graph.adjacents("B").outgoing, Vec::<String>::new());
        assert!(!graph.are_adjacent("B", "A"));
    }

    #[test]
    fn test_adjacents_of_unknown_vertex_are_empty() {
        assert_eq!(abc_graph().adjacents("Z"), Adjacents::default());
    }

    #[test]
    fn test_degree() {
        let mut graph = abc_graph();
        graph.add_edge("C", "A", EdgeKind::Directional, 1.0);
        assert_eq!(
            graph.degree("A"),
            Degree {
                incoming: 1,
                outgoing: 2,
                total: 3
            }
        );
        graph.set_directed(false);
        assert_eq!(
            graph.degree("A"),
            Degree {
                incoming: 1,
                outgoing: 2,
                total: 2
            }
        );
        assert_eq!(graph.degree("Z"), Degree::default());
    }

    #[test]
    fn test_degree_counts_parallel_edges() {
        let mut graph = abc_graph();
        graph.add_edge("A", "B", EdgeKind::Directional, 1.0);
        assert_eq!(graph.degree("B").incoming, 2);
        assert_eq!(graph.adjacents("B").incoming, vec!["A".to_string()]);
    }

    #[test]
    fn test_are_adjacent() {
        let mut graph = abc_graph();
        assert!(graph.are_adjacent("A", "B"));
        assert!(!graph.are_adjacent("B", "A"));
        graph.set_directed(false);
        assert!(graph.are_adjacent("B", "A"));
        assert!(!graph.are_adjacent("A", "Z"));
    }

    #[test]
    fn test_edges_between_follows_mode() {
        let mut graph = abc_graph();
        assert_eq!(graph.edges_between("A", "B").count(), 1);
        assert_eq!(graph.edges_between("B", "A").count(), 0);
        graph.set_directed(false);
        let weights: Vec<f64> = graph.edges_between("B", "A").map(Edge::weight).collect();
        assert_eq!(weights, vec![2.0]);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut graph = abc_graph();
        graph.set_directed(false);
        graph.clear();
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
        assert!(!graph.is_directed());
    }
}
