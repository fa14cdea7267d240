use std::{fmt, str::FromStr};

use crate::error::ParseEdgeKindError;

/// Per-edge direction tag.
///
/// The tag is stored with each edge and shown when the edge is displayed,
/// but traversal never reads it; see [`Directedness`](crate::Directedness).
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    #[default]
    Directional,
    NonDirectional,
}

impl EdgeKind {
    /// The arrow used when rendering an edge of this kind.
    pub fn arrow(&self) -> &'static str {
        match self {
            EdgeKind::Directional => "→",
            EdgeKind::NonDirectional => "↔",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Directional => "directional",
            EdgeKind::NonDirectional => "non-directional",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = ParseEdgeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directional" => Ok(EdgeKind::Directional),
            "non-directional" => Ok(EdgeKind::NonDirectional),
            other => Err(ParseEdgeKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for EdgeKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[EdgeKind::Directional, EdgeKind::NonDirectional])
            .unwrap_or(&EdgeKind::Directional)
    }
}
