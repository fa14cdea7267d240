//! An in-memory labeled graph with weighted edges and a graph-wide directed
//! mode, answering order/size, adjacency, degree, adjacency-check and
//! shortest-path queries.
//!
//! ```
//! use labelgraph::prelude::*;
//!
//! let mut graph = GraphStore::new();
//! for label in ["A", "B", "C"] {
//!     graph.add_vertex(label);
//! }
//! graph.add_edge("A", "B", EdgeKind::Directional, 2.0);
//! graph.add_edge("B", "C", EdgeKind::Directional, 3.0);
//! graph.add_edge("A", "C", EdgeKind::Directional, 10.0);
//!
//! let path = graph.shortest_path("A", "C");
//! assert_eq!(path.cost(), 5.0);
//! assert_eq!(path.vertices(), ["A", "B", "C"]);
//! ```

pub mod directedness;
pub mod edge;
pub mod edge_kind;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod session;
pub mod shared;
pub mod tracing_support;
pub mod vertex;

mod search;

#[cfg(test)]
mod graph_test_support;

pub use crate::directedness::Directedness;
pub use crate::edge::{DEFAULT_WEIGHT, Edge};
pub use crate::edge_kind::EdgeKind;
pub use crate::error::{GraphError, ParseEdgeKindError};
pub use crate::graph::{Adjacents, Degree, GraphStore};
pub use crate::path::PathResult;
pub use crate::shared::SharedGraph;
pub use crate::vertex::Vertex;
