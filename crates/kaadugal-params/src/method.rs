//! Tree-growing strategy tag stored for the forest builder.

use std::fmt;

use serde::Serialize;

/// Order in which the forest builder grows each tree.
///
/// This crate only stores the tag; the training routine gives it meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TrainMethod {
    /// Grow depth first (file token `DFS`).
    #[default]
    DepthFirst,
    /// Grow breadth first (file token `BFS`).
    BreadthFirst,
    /// Mix of depth- and breadth-first growth (file token `Hybrid`).
    Hybrid,
}

impl TrainMethod {
    /// Map a parameter-file token to a method. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DFS" => Some(Self::DepthFirst),
            "BFS" => Some(Self::BreadthFirst),
            "Hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    /// Return the token written to parameter files.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Return the human-readable name used in the summary block.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::DepthFirst => "Depth First",
            Self::BreadthFirst => "Breadth First",
            Self::Hybrid => "Hybrid depth/breadth First",
        }
    }
}

impl fmt::Display for TrainMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
