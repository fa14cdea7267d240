/// Errors reported by the checked mutation methods of
/// [`GraphStore`](crate::GraphStore).
///
/// The lenient methods (`add_vertex`, `add_edge`, ...) never report these;
/// they treat the same conditions as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex with this label is already present.
    #[error("vertex {0:?} already exists")]
    DuplicateVertex(String),
    /// No vertex with this label is present.
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(String),
    /// No edge runs from the first label to the second.
    #[error("no edge from {0:?} to {1:?}")]
    UnknownEdge(String, String),
}

/// Returned when a string names neither edge kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid edge kind {0:?}, expected \"directional\" or \"non-directional\"")]
pub struct ParseEdgeKindError(pub String);
