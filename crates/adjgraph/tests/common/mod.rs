use adjgraph::{AdjacencyMatrixGraph, AdjacencySetGraph, Graph, input::edgelist::EdgeList};

pub const EDGES: &str = "0 1\n\
    0 2\n\
    2 3\n\
    4 1\n\
    3 4\n\
    1 5";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn setup(directed: bool) -> (AdjacencySetGraph, AdjacencyMatrixGraph) {
    init_logger();
    let edges = EdgeList::try_from(EDGES).unwrap();

    let mut set = AdjacencySetGraph::new(edges.min_vertex_count(), directed);
    let mut matrix = AdjacencyMatrixGraph::new(edges.min_vertex_count(), directed);
    edges.load_into(&mut set).unwrap();
    edges.load_into(&mut matrix).unwrap();

    (set, matrix)
}

pub fn all_pairs<G: Graph>(graph: &G) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..graph.vertex_count())
        .flat_map(move |a| (0..graph.vertex_count()).map(move |b| (a, b)))
        .filter(|(a, b)| a != b)
}
