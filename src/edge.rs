use std::fmt;

use crate::edge_kind::EdgeKind;

/// Weight used by callers that do not supply one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A weighted edge between two vertex labels.
///
/// `source` and `target` keep the order in which the edge was added, whatever
/// its [`EdgeKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    source: String,
    target: String,
    kind: EdgeKind,
    weight: f64,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
        weight: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            weight,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// True if the edge runs exactly from `source` to `target`.
    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }

    /// True if either end of the edge is `label`.
    pub fn touches(&self, label: &str) -> bool {
        self.source == label || self.target == label
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (weight: {})",
            self.source,
            self.kind.arrow(),
            self.target,
            self.weight
        )
    }
}
