use log::debug;

use crate::{
    AnyGraph, GraphError, Representation,
    input::edgelist::{EdgeList, InputError},
};

pub struct Uninitialized {}

pub struct FromEdgeList {
    edges: EdgeList,
}

#[derive(Debug, Clone, Copy, Default)]
struct Options {
    vertex_count: Option<usize>,
    directed: bool,
    representation: Representation,
}

/// Builds an [`AnyGraph`], optionally filled from an edge list.
///
/// Without an explicit vertex count the graph gets just enough vertices for
/// the largest id in the edge list.
pub struct GraphBuilder<State> {
    options: Options,
    state: State,
}

impl<State> GraphBuilder<State> {
    pub fn vertex_count(mut self, vertex_count: usize) -> Self {
        self.options.vertex_count = Some(vertex_count);
        self
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.options.directed = directed;
        self
    }

    pub fn representation(mut self, representation: Representation) -> Self {
        self.options.representation = representation;
        self
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            state: Uninitialized {},
        }
    }

    pub fn edges(self, edges: EdgeList) -> GraphBuilder<FromEdgeList> {
        GraphBuilder {
            options: self.options,
            state: FromEdgeList { edges },
        }
    }

    pub fn string(self, s: &str) -> Result<GraphBuilder<FromEdgeList>, InputError> {
        Ok(self.edges(EdgeList::try_from(s)?))
    }

    /// Builds a graph without edges.
    pub fn build(self) -> Result<AnyGraph, GraphError> {
        let options = self.options;
        AnyGraph::try_new(
            options.representation,
            options.vertex_count.unwrap_or(0),
            options.directed,
        )
    }
}

impl GraphBuilder<FromEdgeList> {
    pub fn build(self) -> Result<AnyGraph, GraphError> {
        let Options {
            vertex_count,
            directed,
            representation,
        } = self.options;
        let edges = self.state.edges;
        let vertex_count = vertex_count.unwrap_or_else(|| edges.min_vertex_count());

        debug!(
            "Building {} graph with {} vertices from {} edges",
            representation,
            vertex_count,
            edges.len()
        );
        let mut graph = AnyGraph::try_new(representation, vertex_count, directed)?;
        edges.load_into(&mut graph)?;
        Ok(graph)
    }
}
