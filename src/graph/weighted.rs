use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Vertices are numbered from 1; slot 0 of every adjacency table is unused.
pub type Vertex = u32;
pub type Weight = i64;

/// Largest vertex count accepted from input, files and generators.
pub const MAX_VERTICES: u32 = 1 << 20;

/// Edge weights are 32-bit, so a tree of fewer than 2^32 edges sums within
/// `Weight` without overflow.
pub const MIN_WEIGHT: Weight = i32::MIN as Weight;
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

pub fn check_vertex_limit(n: u32) -> Result<(), GraphError> {
    if n > MAX_VERTICES {
        return Err(GraphError::TooManyVertices {
            n,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}

pub fn check_weight(weight: Weight) -> Result<(), GraphError> {
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(GraphError::WeightOutOfRange {
            weight,
            min: MIN_WEIGHT,
            max: MAX_WEIGHT,
        });
    }
    Ok(())
}

/// One directed half of an undirected edge, stored on its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ray {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Ray {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Ray { from, to, weight }
    }
}

// Heavier rays first, ties go to the larger target.
impl Ord for Ray {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.to, self.from).cmp(&(other.weight, other.to, other.from))
    }
}

impl PartialOrd for Ray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedGraph {
    n: u32,
    m: u32,
    adjacency: Vec<Vec<Ray>>,
}

impl WeightedGraph {
    pub fn new(n: u32) -> Self {
        WeightedGraph {
            n,
            m: 0,
            adjacency: vec![Vec::new(); n as usize + 1],
        }
    }

    pub fn from_edges(n: u32, edges: &[(Vertex, Vertex, Weight)]) -> Result<Self, GraphError> {
        check_vertex_limit(n)?;
        let mut graph = WeightedGraph::new(n);
        for &(u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `u - v`. Self loops and parallel edges are kept.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        check_weight(weight)?;
        self.adjacency[u as usize].push(Ray::new(u, v, weight));
        self.adjacency[v as usize].push(Ray::new(v, u, weight));
        self.m += 1;
        Ok(())
    }

    pub fn rays(&self, v: Vertex) -> &[Ray] {
        self.adjacency
            .get(v as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> u32 {
        self.n
    }

    pub fn edge_count(&self) -> u32 {
        self.m
    }

    pub fn ray_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Every undirected edge once, as `(u, v, weight)` with `u <= v`.
    pub fn edges(&self) -> Vec<(Vertex, Vertex, Weight)> {
        let mut edges = Vec::with_capacity(self.m as usize);
        for u in 1..=self.n {
            let mut loops_seen = 0usize;
            for ray in self.rays(u) {
                if ray.to > u {
                    edges.push((u, ray.to, ray.weight));
                } else if ray.to == u {
                    // a self loop leaves two identical rays on its vertex
                    loops_seen += 1;
                    if loops_seen % 2 == 1 {
                        edges.push((u, u, ray.weight));
                    }
                }
            }
        }
        edges
    }

    /// Checks the invariants `add_edge` maintains, for graphs that did not
    /// come through it (e.g. decoded from an instance file).
    pub fn validate(&self) -> Result<(), GraphError> {
        check_vertex_limit(self.n)?;
        let expected = self.n as usize + 1;
        if self.adjacency.len() != expected {
            return Err(GraphError::AdjacencySize {
                len: self.adjacency.len(),
                expected,
            });
        }
        if !self.adjacency[0].is_empty() {
            return Err(GraphError::VertexOutOfRange { vertex: 0, n: self.n });
        }
        for v in 1..=self.n {
            for ray in self.rays(v) {
                if ray.from != v {
                    return Err(GraphError::RaySource {
                        vertex: v,
                        from: ray.from,
                    });
                }
                self.check_vertex(ray.to)?;
                check_weight(ray.weight)?;
            }
        }
        let rays = self.ray_count();
        if rays != 2 * self.m as usize {
            return Err(GraphError::RayCount {
                rays,
                edges: self.m,
            });
        }
        Ok(())
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex == 0 || vertex > self.n {
            return Err(GraphError::VertexOutOfRange { vertex, n: self.n });
        }
        Ok(())
    }
}
