pub use crate::{
    Adjacents, Degree, Directedness, Edge, EdgeKind, GraphError, GraphStore, PathResult,
    SharedGraph,
};
