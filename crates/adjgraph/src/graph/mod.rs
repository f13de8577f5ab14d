use serde::{Deserialize, Serialize};

use crate::Weight;

pub mod adjacency_matrix;
pub mod adjacency_set;
pub mod any;
pub mod node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: Weight,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: Weight) -> Edge {
        Self { from, to, weight }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((from, to, weight): (usize, usize, Weight)) -> Self {
        Self::new(from, to, weight)
    }
}
