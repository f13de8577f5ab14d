use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{Graph, GraphError, NO_EDGE, Weight, graph::adjacency_set::AdjacencySetGraph};

/// Graph storing a dense `vertex_count × vertex_count` weight matrix.
///
/// `matrix[i * n + j]` is the weight of the edge `i -> j`, [`NO_EDGE`] if there
/// is none. The matrix is sized once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct AdjacencyMatrixGraph {
    vertex_count: usize,
    directed: bool,
    matrix: Vec<Weight>,
}

#[derive(Deserialize)]
#[serde(rename = "AdjacencyMatrixGraph")]
struct MatrixRepr {
    vertex_count: usize,
    directed: bool,
    matrix: Vec<Weight>,
}

impl TryFrom<MatrixRepr> for AdjacencyMatrixGraph {
    type Error = GraphError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        let MatrixRepr {
            vertex_count: n,
            directed,
            matrix,
        } = repr;
        if n.checked_mul(n) != Some(matrix.len()) {
            return Err(GraphError::MatrixSize {
                vertex_count: n,
                cells: matrix.len(),
            });
        }
        for v in 0..n {
            if matrix[v * n + v] != NO_EDGE {
                return Err(GraphError::SelfLoop(v));
            }
        }
        if !directed {
            for from in 0..n {
                for to in from + 1..n {
                    if matrix[from * n + to] != matrix[to * n + from] {
                        return Err(GraphError::Asymmetric { from, to });
                    }
                }
            }
        }
        Ok(Self {
            vertex_count: n,
            directed,
            matrix,
        })
    }
}

impl AdjacencyMatrixGraph {
    /// # Panics
    /// Panics if the matrix cannot be allocated, see [`Self::try_new`].
    pub fn new(vertex_count: usize, directed: bool) -> AdjacencyMatrixGraph {
        match Self::try_new(vertex_count, directed) {
            Ok(graph) => graph,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a graph without edges, failing with [`GraphError::TooLarge`]
    /// when `vertex_count²` weights overflow or cannot be allocated.
    pub fn try_new(
        vertex_count: usize,
        directed: bool,
    ) -> Result<AdjacencyMatrixGraph, GraphError> {
        let too_large = || GraphError::TooLarge(vertex_count);
        let cells = vertex_count
            .checked_mul(vertex_count)
            .filter(|cells| {
                cells
                    .checked_mul(size_of::<Weight>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(too_large)?;

        let mut matrix = Vec::new();
        matrix.try_reserve_exact(cells).map_err(|_| too_large())?;
        matrix.resize(cells, NO_EDGE);

        debug!(
            "Creating {}x{} adjacency matrix (directed: {})",
            vertex_count, vertex_count, directed
        );
        Ok(Self {
            vertex_count,
            directed,
            matrix,
        })
    }

    /// Weights of all edges leaving `v`, indexed by target.
    pub fn row(&self, v: usize) -> Result<&[Weight], GraphError> {
        self.check_vertex(v)?;
        let from = v * self.vertex_count;
        Ok(&self.matrix[from..from + self.vertex_count])
    }

    fn index(&self, v1: usize, v2: usize) -> usize {
        v1 * self.vertex_count + v2
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if v1 == v2 {
            return Err(GraphError::SelfLoop(v1));
        }
        if weight < 1 {
            return Err(GraphError::InvalidWeight(weight));
        }

        trace!("setting weight of {} -> {} to {}", v1, v2, weight);
        let i = self.index(v1, v2);
        self.matrix[i] = weight;
        if !self.directed {
            let i = self.index(v2, v1);
            self.matrix[i] = weight;
        }
        Ok(())
    }

    fn adjacent_vertices(&self, v: usize) -> Result<Vec<usize>, GraphError> {
        Ok(self
            .row(v)?
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != NO_EDGE)
            .map(|(i, _)| i)
            .collect())
    }

    fn indegree(&self, v: usize) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self
            .matrix
            .iter()
            .skip(v)
            .step_by(self.vertex_count)
            .filter(|w| **w != NO_EDGE)
            .count())
    }

    fn edge_weight(&self, v1: usize, v2: usize) -> Result<Weight, GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(self.matrix[self.index(v1, v2)])
    }

    fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|w| **w != NO_EDGE).count()
    }
}

impl TryFrom<&AdjacencySetGraph> for AdjacencyMatrixGraph {
    type Error = GraphError;

    fn try_from(graph: &AdjacencySetGraph) -> Result<Self, Self::Error> {
        let mut matrix = Self::try_new(graph.vertex_count(), graph.is_directed())?;
        for edge in graph.edges() {
            let i = matrix.index(edge.from(), edge.to());
            matrix.matrix[i] = edge.weight();
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{Token, assert_tokens};

    use super::*;
    use crate::graph::Edge;

    fn setup() -> AdjacencyMatrixGraph {
        let mut graph = AdjacencyMatrixGraph::new(4, true);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph
    }

    #[test]
    fn matrix_edge_weight() {
        let graph = setup();
        assert_eq!(graph.edge_weight(0, 1), Ok(5));
        assert_eq!(graph.edge_weight(1, 0), Ok(NO_EDGE));
        assert_eq!(graph.edge_weight(2, 3), Ok(1));
    }

    #[test]
    fn matrix_adjacent_vertices() {
        let graph = setup();
        assert_eq!(graph.adjacent_vertices(0), Ok(vec![1, 2]));
        assert_eq!(graph.adjacent_vertices(2), Ok(vec![3]));
        assert_eq!(graph.adjacent_vertices(3), Ok(vec![]));
    }

    #[test]
    fn matrix_indegree() {
        let graph = setup();
        assert_eq!(graph.indegree(0), Ok(0));
        assert_eq!(graph.indegree(1), Ok(1));
        assert_eq!(graph.indegree(3), Ok(1));
    }

    #[test]
    fn matrix_indegree_counts_column() {
        let mut graph = AdjacencyMatrixGraph::new(5, true);
        for u in [0, 1, 3, 4] {
            graph.add_edge(u, 2, 7).unwrap();
        }
        graph.add_edge(2, 0, 1).unwrap();
        assert_eq!(graph.indegree(2), Ok(4));
        assert_eq!(graph.indegree(0), Ok(1));
        assert_eq!(graph.indegree(1), Ok(0));
    }

    #[test]
    fn matrix_undirected_mirrors() {
        let mut graph = AdjacencyMatrixGraph::new(3, false);
        graph.add_edge(2, 0, 9).unwrap();
        assert_eq!(graph.edge_weight(2, 0), Ok(9));
        assert_eq!(graph.edge_weight(0, 2), Ok(9));
        assert_eq!(graph.indegree(0), Ok(1));
        assert_eq!(graph.indegree(2), Ok(1));
    }

    #[test]
    fn matrix_overwrites_weight() {
        let mut graph = setup();
        graph.add_edge(0, 1, 2).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Ok(2));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn matrix_invalid_weight() {
        let mut graph = setup();
        assert_eq!(graph.add_edge(1, 0, 0), Err(GraphError::InvalidWeight(0)));
        assert_eq!(graph.edge_weight(1, 0), Ok(NO_EDGE));
    }

    #[test]
    fn matrix_errors_checked_in_order() {
        let mut graph = setup();
        assert_eq!(
            graph.add_edge(9, 9, 0),
            Err(GraphError::OutOfBounds {
                vertex: 9,
                vertex_count: 4
            })
        );
        assert_eq!(graph.add_edge(3, 3, 0), Err(GraphError::SelfLoop(3)));
        assert!(graph.row(4).is_err());
        assert!(graph.indegree(4).is_err());
    }

    #[test]
    fn matrix_row() {
        let graph = setup();
        assert_eq!(graph.row(0), Ok(&[0, 5, 1, 0][..]));
    }

    #[test]
    fn matrix_edges() {
        let graph = setup();
        assert_eq!(
            graph.edges().collect::<Vec<Edge>>(),
            vec![Edge::new(0, 1, 5), Edge::new(0, 2, 1), Edge::new(2, 3, 1)]
        );
    }

    #[test]
    fn matrix_too_large() {
        assert_eq!(
            AdjacencyMatrixGraph::try_new(usize::MAX, true),
            Err(GraphError::TooLarge(usize::MAX))
        );
        assert_eq!(
            AdjacencyMatrixGraph::try_new(2, true),
            Ok(AdjacencyMatrixGraph::new(2, true))
        );
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn matrix_new_too_large() {
        AdjacencyMatrixGraph::new(usize::MAX, true);
    }

    #[test]
    fn matrix_serde() {
        let mut graph = AdjacencyMatrixGraph::new(2, false);
        graph.add_edge(0, 1, 3).unwrap();

        assert_tokens(
            &graph,
            &[
                Token::Struct {
                    name: "AdjacencyMatrixGraph",
                    len: 3,
                },
                Token::Str("vertex_count"),
                Token::U64(2),
                Token::Str("directed"),
                Token::Bool(false),
                Token::Str("matrix"),
                Token::Seq { len: Some(4) },
                Token::U32(0),
                Token::U32(3),
                Token::U32(3),
                Token::U32(0),
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn matrix_deserialize_rejects_malformed() {
        let parse = |json: &str| {
            serde_json::from_str::<AdjacencyMatrixGraph>(json)
                .unwrap_err()
                .to_string()
        };

        assert!(
            parse(r#"{"vertex_count":3,"directed":true,"matrix":[]}"#)
                .starts_with("matrix has 0 cells, expected 3 vertices squared")
        );
        assert!(
            parse(r#"{"vertex_count":2,"directed":true,"matrix":[0,1,0,4]}"#)
                .starts_with("the vertex 1 cannot be adjacent to itself")
        );
        assert!(
            parse(r#"{"vertex_count":2,"directed":false,"matrix":[0,1,0,0]}"#)
                .starts_with("undirected graph has edge 0 -> 1 without its mirror")
        );
        assert!(
            serde_json::from_str::<AdjacencyMatrixGraph>(
                r#"{"vertex_count":2,"directed":true,"matrix":[0,1,0,0]}"#
            )
            .is_ok()
        );
    }

    #[test]
    fn matrix_from_set() {
        let mut set = AdjacencySetGraph::new(3, false);
        set.add_edge(0, 1, 1).unwrap();
        set.add_edge(1, 2, 1).unwrap();

        let matrix = AdjacencyMatrixGraph::try_from(&set).unwrap();
        assert!(!matrix.is_directed());
        for v in 0..3 {
            assert_eq!(matrix.adjacent_vertices(v), set.adjacent_vertices(v));
        }
        assert_eq!(matrix.edge_weight(2, 1), Ok(1));
    }
}
