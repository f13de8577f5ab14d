use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{Graph, GraphError, NO_EDGE, Weight, graph::Edge, graph::node::Node};

/// Graph storing one [`Node`] per vertex.
///
/// Edges are unweighted: [`Graph::add_edge`] accepts only weight `1`, and
/// [`Graph::edge_weight`] reports `1` for existing edges and [`NO_EDGE`]
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SetRepr")]
pub struct AdjacencySetGraph {
    directed: bool,
    nodes: Vec<Node>,
}

#[derive(Deserialize)]
#[serde(rename = "AdjacencySetGraph")]
struct SetRepr {
    directed: bool,
    nodes: Vec<Node>,
}

impl TryFrom<SetRepr> for AdjacencySetGraph {
    type Error = GraphError;

    fn try_from(repr: SetRepr) -> Result<Self, Self::Error> {
        let SetRepr { directed, nodes } = repr;
        for (index, node) in nodes.iter().enumerate() {
            if node.vertex_id() != index {
                return Err(GraphError::NodeOrder {
                    index,
                    vertex_id: node.vertex_id(),
                });
            }
            for to in node.adjacent_vertices() {
                let Some(target) = nodes.get(to) else {
                    return Err(GraphError::out_of_bounds(to, nodes.len()));
                };
                if !directed && !target.is_adjacent(index) {
                    return Err(GraphError::Asymmetric { from: index, to });
                }
            }
        }
        Ok(Self { directed, nodes })
    }
}

impl AdjacencySetGraph {
    pub fn new(vertex_count: usize, directed: bool) -> AdjacencySetGraph {
        debug!(
            "Creating adjacency-set graph with {} vertices (directed: {})",
            vertex_count, directed
        );
        Self {
            directed,
            nodes: (0..vertex_count).map(Node::new).collect(),
        }
    }

    pub fn node(&self, v: usize) -> Result<&Node, GraphError> {
        self.nodes
            .get(v)
            .ok_or_else(|| GraphError::out_of_bounds(v, self.nodes.len()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Graph for AdjacencySetGraph {
    fn vertex_count(&self) -> usize {
        self.nodes.len()
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
        if weight != 1 {
            return Err(GraphError::UnsupportedWeight(weight));
        }

        trace!("adding edge {} -> {}", v1, v2);
        self.nodes[v1].add_adjacent(v2)?;
        if !self.directed {
            self.nodes[v2].add_adjacent(v1)?;
        }
        Ok(())
    }

    fn adjacent_vertices(&self, v: usize) -> Result<Vec<usize>, GraphError> {
        Ok(self.node(v)?.adjacent_vertices())
    }

    fn indegree(&self, v: usize) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self.nodes.iter().filter(|node| node.is_adjacent(v)).count())
    }

    fn edge_weight(&self, v1: usize, v2: usize) -> Result<Weight, GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if self.nodes[v1].is_adjacent(v2) {
            Ok(1)
        } else {
            Ok(NO_EDGE)
        }
    }

    fn outdegree(&self, v: usize) -> Result<usize, GraphError> {
        Ok(self.node(v)?.degree())
    }

    fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().flat_map(|node| {
            let from = node.vertex_id();
            node.adjacent_vertices()
                .into_iter()
                .map(move |to| Edge::new(from, to, 1))
        })
    }
}
