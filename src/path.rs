use std::fmt;

/// The outcome of [`GraphStore::shortest_path`](crate::GraphStore::shortest_path):
/// the total weight of the path and the labels it visits, start and end
/// included.
///
/// An unreachable destination is reported as a value, not an error: its cost
/// is `f64::INFINITY` and its path is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    cost: f64,
    vertices: Vec<String>,
}

impl PathResult {
    pub(crate) fn new(cost: f64, vertices: Vec<String>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { cost, vertices }
    }

    /// The sentinel for "no path": infinite cost, no vertices.
    pub fn unreachable() -> Self {
        Self {
            cost: f64::INFINITY,
            vertices: Vec::new(),
        }
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Labels along the path, starting with the start vertex.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<String> {
        self.vertices
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Number of edges along the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return write!(f, "no path");
        }
        write!(f, "{} (cost: {})", self.vertices.join(" → "), self.cost)
    }
}
