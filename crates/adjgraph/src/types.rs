use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Storage layout of a graph.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Representation {
    #[default]
    AdjacencySet,
    AdjacencyMatrix,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownRepresentation(String);

impl std::error::Error for UnknownRepresentation {}

impl Display for UnknownRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown representation '{}', expected 'set' or 'matrix'",
            self.0
        )
    }
}

impl FromStr for Representation {
    type Err = UnknownRepresentation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "set" | "adjacency-set" => Ok(Self::AdjacencySet),
            "matrix" | "adjacency-matrix" => Ok(Self::AdjacencyMatrix),
            _ => Err(UnknownRepresentation(s.to_owned())),
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdjacencySet => write!(f, "set"),
            Self::AdjacencyMatrix => write!(f, "matrix"),
        }
    }
}
