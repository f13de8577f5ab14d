use std::{
    error::Error,
    fmt::Display,
    io::{self, Write},
};

pub mod builder;
pub mod graph;
pub mod input;
pub mod types;

pub use graph::{
    Edge, adjacency_matrix::AdjacencyMatrixGraph, adjacency_set::AdjacencySetGraph, any::AnyGraph,
    node::Node,
};
pub use types::Representation;

/// Edge weight. `0` is reserved for "no edge".
pub type Weight = u32;

/// Weight returned by [`Graph::edge_weight`] when the edge does not exist.
pub const NO_EDGE: Weight = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    OutOfBounds { vertex: i64, vertex_count: usize },
    SelfLoop(usize),
    UnsupportedWeight(Weight),
    InvalidWeight(Weight),
    /// The adjacency matrix for this many vertices does not fit in memory.
    TooLarge(usize),
    MatrixSize { vertex_count: usize, cells: usize },
    NodeOrder { index: usize, vertex_id: usize },
    /// An undirected graph holds `from -> to` without `to -> from`.
    Asymmetric { from: usize, to: usize },
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {} is out of bounds for a graph with {} vertices",
                vertex, vertex_count
            ),
            Self::SelfLoop(vertex) => {
                write!(f, "the vertex {} cannot be adjacent to itself", vertex)
            }
            Self::UnsupportedWeight(weight) => write!(
                f,
                "an adjacency set can't represent edges of weight {}",
                weight
            ),
            Self::InvalidWeight(weight) => {
                write!(f, "edge weight must be at least 1, got {}", weight)
            }
            Self::TooLarge(vertex_count) => write!(
                f,
                "an adjacency matrix for {} vertices is too large",
                vertex_count
            ),
            Self::MatrixSize {
                vertex_count,
                cells,
            } => write!(
                f,
                "matrix has {} cells, expected {} vertices squared",
                cells, vertex_count
            ),
            Self::NodeOrder { index, vertex_id } => {
                write!(f, "node at index {} has vertex id {}", index, vertex_id)
            }
            Self::Asymmetric { from, to } => write!(
                f,
                "undirected graph has edge {} -> {} without its mirror",
                from, to
            ),
        }
    }
}

impl GraphError {
    pub(crate) fn out_of_bounds(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfBounds {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Operations shared by every graph representation.
///
/// Vertex ids are `0..vertex_count()`. Every operation taking a vertex id fails
/// with [`GraphError::OutOfBounds`] for ids outside that range.
pub trait Graph {
    fn vertex_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Inserts the edge `v1 -> v2`. Undirected graphs also insert `v2 -> v1`
    /// with the same weight.
    fn add_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> Result<(), GraphError>;

    /// Targets of all out-edges of `v`, ascending and without duplicates.
    fn adjacent_vertices(&self, v: usize) -> Result<Vec<usize>, GraphError>;

    /// Number of distinct vertices `u` with an edge `u -> v`.
    fn indegree(&self, v: usize) -> Result<usize, GraphError>;

    /// Weight of `v1 -> v2`, or [`NO_EDGE`].
    fn edge_weight(&self, v1: usize, v2: usize) -> Result<Weight, GraphError>;

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_bounds(v, self.vertex_count()))
        }
    }

    fn has_edge(&self, v1: usize, v2: usize) -> Result<bool, GraphError> {
        Ok(self.edge_weight(v1, v2)? != NO_EDGE)
    }

    fn outdegree(&self, v: usize) -> Result<usize, GraphError> {
        Ok(self.adjacent_vertices(v)?.len())
    }

    /// Number of stored directed edges. An undirected edge counts twice.
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .filter_map(|v| self.outdegree(v).ok())
            .sum()
    }

    /// All edges ordered by source, then target.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertex_count()).flat_map(move |from| {
            self.adjacent_vertices(from)
                .into_iter()
                .flatten()
                .map(move |to| {
                    Edge::new(from, to, self.edge_weight(from, to).unwrap_or(NO_EDGE))
                })
        })
    }

    /// Writes one `"{from} --> {to}"` line per edge.
    fn write_edges<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for edge in self.edges() {
            writeln!(writer, "{} --> {}", edge.from(), edge.to())?;
        }
        Ok(())
    }

    /// Prints every edge to stdout.
    fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_edges(&mut lock)?;
        lock.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            GraphError::out_of_bounds(7, 4).to_string(),
            "vertex 7 is out of bounds for a graph with 4 vertices"
        );
        assert_eq!(
            GraphError::SelfLoop(2).to_string(),
            "the vertex 2 cannot be adjacent to itself"
        );
        assert_eq!(
            GraphError::UnsupportedWeight(3).to_string(),
            "an adjacency set can't represent edges of weight 3"
        );
        assert_eq!(
            GraphError::InvalidWeight(0).to_string(),
            "edge weight must be at least 1, got 0"
        );
        assert_eq!(
            GraphError::TooLarge(70000).to_string(),
            "an adjacency matrix for 70000 vertices is too large"
        );
        assert_eq!(
            GraphError::Asymmetric { from: 1, to: 2 }.to_string(),
            "undirected graph has edge 1 -> 2 without its mirror"
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn out_of_bounds_saturates() {
        assert_eq!(
            GraphError::out_of_bounds(usize::MAX, 1),
            GraphError::OutOfBounds {
                vertex: i64::MAX,
                vertex_count: 1
            }
        );
    }
}
