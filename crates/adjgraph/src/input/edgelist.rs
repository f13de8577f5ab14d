use std::{cmp::max, error::Error, fmt::Display, iter::Copied, slice::Iter, str::FromStr};

use log::debug;

use crate::{Graph, GraphError, NO_EDGE, Weight};

/// Edges as read from text, before they are checked against a graph.
///
/// Vertex ids are signed so that negative ids survive parsing and are reported
/// as [`GraphError::OutOfBounds`] when loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    edges: Box<[(i64, i64, i64)]>,
    max_vertex_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    MissingSource,
    MissingTarget,
    InvalidInteger(String),
    TrailingTokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    line: usize,
    kind: InputErrorKind,
}

impl InputError {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &InputErrorKind {
        &self.kind
    }
}

impl Error for InputError {}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            InputErrorKind::MissingSource => write!(f, "no source found"),
            InputErrorKind::MissingTarget => write!(f, "no target found"),
            InputErrorKind::InvalidInteger(token) => write!(f, "'{}' is not a valid integer", token),
            InputErrorKind::TrailingTokens => write!(f, "expected 'from to [weight]'"),
        }
    }
}

impl EdgeList {
    pub fn new(edges: Vec<(i64, i64, i64)>) -> Self {
        let max_vertex_id = edges.iter().map(|(s, t, _)| max(*s, *t)).max();
        Self {
            edges: edges.into_boxed_slice(),
            max_vertex_id,
        }
    }

    pub fn max_vertex_id(&self) -> Option<i64> {
        self.max_vertex_id
    }

    /// Smallest vertex count that holds every non-negative id in the list.
    pub fn min_vertex_count(&self) -> usize {
        self.max_vertex_id
            .and_then(|id| usize::try_from(id).ok())
            .map_or(0, |id| id + 1)
    }

    pub fn edges(&self) -> Copied<Iter<'_, (i64, i64, i64)>> {
        self.edges.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Adds every edge to `graph` in order, stopping at the first error.
    ///
    /// Negative weights are passed on as [`NO_EDGE`] so the graph rejects them
    /// with its own weight error.
    pub fn load_into<G: Graph>(&self, graph: &mut G) -> Result<(), GraphError> {
        debug!(
            "Loading {} edges into graph with {} vertices",
            self.len(),
            graph.vertex_count()
        );
        let vertex_count = graph.vertex_count();
        for (source, target, weight) in self.edges() {
            let source = vertex(source, vertex_count)?;
            let target = vertex(target, vertex_count)?;
            let weight = Weight::try_from(weight).unwrap_or(NO_EDGE);
            graph.add_edge(source, target, weight)?;
        }
        Ok(())
    }
}

fn vertex(id: i64, vertex_count: usize) -> Result<usize, GraphError> {
    usize::try_from(id).map_err(|_| GraphError::OutOfBounds {
        vertex: id,
        vertex_count,
    })
}

fn parse<T: FromStr>(token: &str, line: usize) -> Result<T, InputError> {
    T::from_str(token).map_err(|_| InputError {
        line,
        kind: InputErrorKind::InvalidInteger(token.to_owned()),
    })
}

impl TryFrom<&str> for EdgeList {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result: Vec<(i64, i64, i64)> = vec![];

        for (i, line) in value.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let error = |kind: InputErrorKind| InputError {
                line: line_no,
                kind,
            };

            let mut tokens = line.split_whitespace();
            let source: i64 = parse(
                tokens.next().ok_or_else(|| error(InputErrorKind::MissingSource))?,
                line_no,
            )?;
            let target: i64 = parse(
                tokens.next().ok_or_else(|| error(InputErrorKind::MissingTarget))?,
                line_no,
            )?;
            let weight = match tokens.next() {
                Some(token) => {
                    let weight: i64 = parse(token, line_no)?;
                    if weight > i64::from(Weight::MAX) {
                        return Err(error(InputErrorKind::InvalidInteger(token.to_owned())));
                    }
                    weight
                }
                None => 1,
            };
            if tokens.next().is_some() {
                return Err(error(InputErrorKind::TrailingTokens));
            }

            result.push((source, target, weight));
        }

        Ok(EdgeList::new(result))
    }
}

impl FromStr for EdgeList {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeList::try_from(s)
    }
}
