use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    directedness::Directedness,
    edge_kind::EdgeKind,
    graph::{Adjacents, Degree, GraphStore},
    path::PathResult,
};

/// A cloneable handle to one [`GraphStore`] guarded by a single
/// reader/writer lock.
///
/// Queries take the read lock and mutations the write lock, each for the
/// duration of one call.  Use [`SharedGraph::read`] or
/// [`SharedGraph::write`] to run several operations under one lock.
///
/// A lock poisoned by a panicking holder is recovered: every `GraphStore`
/// mutation finishes its changes before anything that can panic.
#[derive(Clone, Debug, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<GraphStore>>,
}

impl SharedGraph {
    pub fn new(graph: GraphStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, GraphStore> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, GraphStore> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copies the current state of the graph.
    pub fn snapshot(&self) -> GraphStore {
        self.read().clone()
    }

    pub fn add_vertex(&self, label: impl Into<String>) -> bool {
        self.write().add_vertex(label)
    }

    pub fn add_edge(
        &self,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
        weight: f64,
    ) -> bool {
        self.write().add_edge(source, target, kind, weight)
    }

    pub fn remove_vertex(&self, label: &str) -> bool {
        self.write().remove_vertex(label)
    }

    pub fn remove_edge(&self, source: &str, target: &str) -> usize {
        self.write().remove_edge(source, target)
    }

    pub fn set_directedness(&self, directedness: Directedness) {
        self.write().set_directedness(directedness);
    }

    pub fn set_directed(&self, directed: bool) {
        self.write().set_directed(directed);
    }

    pub fn is_directed(&self) -> bool {
        self.read().is_directed()
    }

    pub fn order(&self) -> usize {
        self.read().order()
    }

    pub fn size(&self) -> usize {
        self.read().size()
    }

    pub fn adjacents(&self, label: &str) -> Adjacents {
        self.read().adjacents(label)
    }

    pub fn degree(&self, label: &str) -> Degree {
        self.read().degree(label)
    }

    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.read().are_adjacent(a, b)
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> PathResult {
        self.read().shortest_path(start, end)
    }
}

impl From<GraphStore> for SharedGraph {
    fn from(graph: GraphStore) -> Self {
        Self::new(graph)
    }
}
