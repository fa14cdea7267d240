use std::fmt;

/// Graph-wide traversal mode.
///
/// This is the only switch the queries consult when deciding whether an edge
/// may be followed from its target back to its source.  The per-edge
/// [`EdgeKind`](crate::EdgeKind) tag plays no part in it.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    /// Edges are followed from source to target only.
    #[default]
    Directed,
    /// Edges are followed in both directions.
    Undirected,
}

impl Directedness {
    /// Converts the boolean form used by callers ("is the graph directed?").
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directedness::Directed => write!(f, "directed"),
            Directedness::Undirected => write!(f, "undirected"),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Directedness::from_directed(bool::arbitrary(g))
    }
}
