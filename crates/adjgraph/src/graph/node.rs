use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::GraphError;

/// A vertex together with the ids of the vertices it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NodeRepr")]
pub struct Node {
    vertex_id: usize,
    adjacent: FxHashSet<usize>,
}

#[derive(Deserialize)]
#[serde(rename = "Node")]
struct NodeRepr {
    vertex_id: usize,
    adjacent: FxHashSet<usize>,
}

impl TryFrom<NodeRepr> for Node {
    type Error = GraphError;

    fn try_from(repr: NodeRepr) -> Result<Self, Self::Error> {
        if repr.adjacent.contains(&repr.vertex_id) {
            return Err(GraphError::SelfLoop(repr.vertex_id));
        }
        Ok(Self {
            vertex_id: repr.vertex_id,
            adjacent: repr.adjacent,
        })
    }
}

impl Node {
    pub fn new(vertex_id: usize) -> Node {
        Self {
            vertex_id,
            adjacent: FxHashSet::default(),
        }
    }

    pub fn vertex_id(&self) -> usize {
        self.vertex_id
    }

    /// Adds `v` to the adjacency set.
    ///
    /// Returns `false` if `v` was already adjacent.
    pub fn add_adjacent(&mut self, v: usize) -> Result<bool, GraphError> {
        if v == self.vertex_id {
            return Err(GraphError::SelfLoop(v));
        }
        Ok(self.adjacent.insert(v))
    }

    pub fn is_adjacent(&self, v: usize) -> bool {
        self.adjacent.contains(&v)
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Adjacent vertex ids in ascending order.
    pub fn adjacent_vertices(&self) -> Vec<usize> {
        let mut adjacent: Vec<usize> = self.adjacent.iter().copied().collect();
        adjacent.sort_unstable();
        adjacent
    }
}
