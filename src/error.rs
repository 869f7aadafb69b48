//! Error types shared by the solvers, the parsers and the instance files.

use crate::graph::Vertex;
use thiserror::Error;

/// Errors raised while building a graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex outside `1..=n`.
    #[error("vertex {vertex} is out of range 1..={n}")]
    VertexOutOfRange { vertex: Vertex, n: u32 },

    /// More vertices than [`crate::graph::MAX_VERTICES`].
    #[error("{n} vertices exceed the limit of {max}")]
    TooManyVertices { n: u32, max: u32 },

    /// Edge weight outside the 32-bit range accepted by the solvers.
    #[error("edge weight {weight} is outside {min}..={max}")]
    WeightOutOfRange { weight: i64, min: i64, max: i64 },

    /// Adjacency table whose size disagrees with the vertex count.
    #[error("adjacency table has {len} slots, expected {expected}")]
    AdjacencySize { len: usize, expected: usize },

    /// Ray stored on a vertex other than its source.
    #[error("ray from {from} is stored on vertex {vertex}")]
    RaySource { vertex: Vertex, from: Vertex },

    /// Ray total that does not match twice the edge count.
    #[error("{rays} rays do not describe {edges} undirected edges")]
    RayCount { rays: usize, edges: u32 },

    /// Railway row index outside `1..n`.
    #[error("row {row} is out of range for {n} cities")]
    RowOutOfRange { row: Vertex, n: u32 },

    /// Railway row with the wrong number of roads.
    #[error("row {row} must describe {expected} roads, got {actual}")]
    RowLength {
        row: Vertex,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while reading contest input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("token {position}: '{token}' is not a valid {expected}")]
    InvalidNumber {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("row {row}: '{symbol}' is not a road direction (expected R or B)")]
    InvalidRoad { row: Vertex, symbol: char },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("instance encoding error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, Error>;
