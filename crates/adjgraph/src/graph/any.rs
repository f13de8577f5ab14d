use serde::{Deserialize, Serialize};

use crate::{
    Graph, GraphError, Representation, Weight,
    graph::{adjacency_matrix::AdjacencyMatrixGraph, adjacency_set::AdjacencySetGraph},
};

/// A graph whose representation is chosen at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyGraph {
    Set(AdjacencySetGraph),
    Matrix(AdjacencyMatrixGraph),
}

impl AnyGraph {
    /// # Panics
    /// Panics if a matrix for `vertex_count` vertices cannot be allocated.
    pub fn new(representation: Representation, vertex_count: usize, directed: bool) -> AnyGraph {
        match representation {
            Representation::AdjacencySet => {
                Self::Set(AdjacencySetGraph::new(vertex_count, directed))
            }
            Representation::AdjacencyMatrix => {
                Self::Matrix(AdjacencyMatrixGraph::new(vertex_count, directed))
            }
        }
    }

    pub fn try_new(
        representation: Representation,
        vertex_count: usize,
        directed: bool,
    ) -> Result<AnyGraph, GraphError> {
        Ok(match representation {
            Representation::AdjacencySet => {
                Self::Set(AdjacencySetGraph::new(vertex_count, directed))
            }
            Representation::AdjacencyMatrix => {
                Self::Matrix(AdjacencyMatrixGraph::try_new(vertex_count, directed)?)
            }
        })
    }

    pub fn representation(&self) -> Representation {
        match self {
            Self::Set(_) => Representation::AdjacencySet,
            Self::Matrix(_) => Representation::AdjacencyMatrix,
        }
    }
}

impl From<AdjacencySetGraph> for AnyGraph {
    fn from(graph: AdjacencySetGraph) -> Self {
        Self::Set(graph)
    }
}

impl From<AdjacencyMatrixGraph> for AnyGraph {
    fn from(graph: AdjacencyMatrixGraph) -> Self {
        Self::Matrix(graph)
    }
}

macro_rules! delegate {
    ($self:ident, $g:ident => $e:expr) => {
        match $self {
            AnyGraph::Set($g) => $e,
            AnyGraph::Matrix($g) => $e,
        }
    };
}

impl Graph for AnyGraph {
    fn vertex_count(&self) -> usize {
        delegate!(self, g => g.vertex_count())
    }

    fn is_directed(&self) -> bool {
        delegate!(self, g => g.is_directed())
    }

    fn add_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> Result<(), GraphError> {
        delegate!(self, g => g.add_edge(v1, v2, weight))
    }

    fn adjacent_vertices(&self, v: usize) -> Result<Vec<usize>, GraphError> {
        delegate!(self, g => g.adjacent_vertices(v))
    }

    fn indegree(&self, v: usize) -> Result<usize, GraphError> {
        delegate!(self, g => g.indegree(v))
    }

    fn edge_weight(&self, v1: usize, v2: usize) -> Result<Weight, GraphError> {
        delegate!(self, g => g.edge_weight(v1, v2))
    }

    fn outdegree(&self, v: usize) -> Result<usize, GraphError> {
        delegate!(self, g => g.outdegree(v))
    }

    fn edge_count(&self) -> usize {
        delegate!(self, g => g.edge_count())
    }
}
