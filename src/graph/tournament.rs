//! Railway road maps: a tournament over `n` cities, one road between every
//! pair, each road typed `R` (points from the lower city to the higher one)
//! or `B` (points back). The map is optimal when no city can reach itself,
//! i.e. the tournament is acyclic.

use crate::error::GraphError;
use crate::graph::weighted::{check_vertex_limit, Vertex};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

pub const ACYCLIC_VERDICT: &str = "YES";
pub const CYCLIC_VERDICT: &str = "NO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadKind {
    /// `i -> i + j`
    Red,
    /// `i + j -> i`
    Blue,
}

impl RoadKind {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(RoadKind::Red),
            'B' => Some(RoadKind::Blue),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            RoadKind::Red => 'R',
            RoadKind::Blue => 'B',
        }
    }
}

/// DFS state of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Gray,
    Black,
}

/// Cities of a directed cycle in traversal order; the last one leads back
/// to the first.
pub type CycleWitness = SmallVec<[Vertex; 8]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadMap {
    n: u32,
    adjacency: Vec<Vec<Vertex>>,
}

impl RoadMap {
    pub fn new(n: u32) -> Self {
        RoadMap {
            n,
            adjacency: vec![Vec::new(); n as usize + 1],
        }
    }

    /// Row `i` lists the roads from `i` to `i + 1 ..= n`.
    pub fn add_row(&mut self, i: Vertex, roads: &[RoadKind]) -> Result<(), GraphError> {
        if i == 0 || i >= self.n {
            return Err(GraphError::RowOutOfRange { row: i, n: self.n });
        }
        let expected = (self.n - i) as usize;
        if roads.len() != expected {
            return Err(GraphError::RowLength {
                row: i,
                expected,
                actual: roads.len(),
            });
        }
        for (offset, &kind) in roads.iter().enumerate() {
            let j = i + 1 + offset as u32;
            match kind {
                RoadKind::Red => self.adjacency[i as usize].push(j),
                RoadKind::Blue => self.adjacency[j as usize].push(i),
            }
        }
        Ok(())
    }

    pub fn from_rows(n: u32, rows: &[Vec<RoadKind>]) -> Result<Self, GraphError> {
        check_vertex_limit(n)?;
        let mut map = RoadMap::new(n);
        for (index, row) in rows.iter().enumerate() {
            map.add_row(index as u32 + 1, row)?;
        }
        Ok(map)
    }

    pub fn city_count(&self) -> u32 {
        self.n
    }

    /// Checks that the table has one slot per city and every road ends at a
    /// city, for maps that did not come through `add_row`.
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
        for roads in &self.adjacency[1..] {
            if let Some(&vertex) = roads.iter().find(|&&to| to == 0 || to > self.n) {
                return Err(GraphError::VertexOutOfRange { vertex, n: self.n });
            }
        }
        Ok(())
    }

    pub fn successors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency
            .get(v as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_road(&self, from: Vertex, to: Vertex) -> bool {
        self.successors(from).contains(&to)
    }

    pub fn road_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Rebuilds the contest rows, the inverse of [`RoadMap::from_rows`].
    pub fn rows(&self) -> Vec<Vec<RoadKind>> {
        let mut rows: Vec<Vec<RoadKind>> = (1..self.n)
            .map(|i| vec![RoadKind::Blue; (self.n - i) as usize])
            .collect();
        for i in 1..self.n {
            for &j in self.successors(i) {
                if j > i {
                    rows[(i - 1) as usize][(j - i - 1) as usize] = RoadKind::Red;
                }
            }
        }
        rows
    }
}

pub fn is_acyclic(map: &RoadMap) -> bool {
    find_cycle(map).is_none()
}

/// Depth-first search with three colors from every white city in order.
/// Stops at the first back edge, i.e. the first gray city met.
pub fn find_cycle(map: &RoadMap) -> Option<CycleWitness> {
    let mut colors = vec![Color::White; map.n as usize + 1];
    // (city, index of the next successor to visit)
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    for start in 1..=map.n {
        if colors[start as usize] != Color::White {
            continue;
        }
        colors[start as usize] = Color::Gray;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let v = frame.0;
            let Some(&to) = map.successors(v).get(frame.1) else {
                colors[v as usize] = Color::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;
            match colors[to as usize] {
                Color::Gray => {
                    let witness = gray_path(&stack, to);
                    debug!(length = witness.len(), "back edge {v} -> {to} closes a cycle");
                    return Some(witness);
                }
                Color::White => {
                    trace!(from = v, to, "descend");
                    colors[to as usize] = Color::Gray;
                    stack.push((to, 0));
                }
                Color::Black => {}
            }
        }
    }

    debug!(cities = map.n, "road map is acyclic");
    None
}

fn gray_path(stack: &[(Vertex, usize)], entry: Vertex) -> CycleWitness {
    let first = stack
        .iter()
        .position(|&(v, _)| v == entry)
        .unwrap_or(0);
    stack[first..].iter().map(|&(v, _)| v).collect()
}

/// Shrinks a cycle of a tournament to a directed triangle.
///
/// For a cycle `c0 -> c1 -> ... -> ck -> c0` either `c2 -> c0`, closing
/// `c0 -> c1 -> c2 -> c0`, or `c0 -> c2`, leaving the shorter cycle
/// `c0 -> c2 -> ... -> c0`.
pub fn cycle_triangle(map: &RoadMap, cycle: &[Vertex]) -> Option<[Vertex; 3]> {
    if cycle.len() < 3 {
        return None;
    }
    let mut cycle: CycleWitness = cycle.iter().copied().collect();
    while cycle.len() > 3 {
        if map.has_road(cycle[2], cycle[0]) {
            break;
        }
        cycle.remove(1);
    }
    Some([cycle[0], cycle[1], cycle[2]])
}

/// `YES` when the road map is optimal, `NO` otherwise.
pub fn railway_verdict(map: &RoadMap) -> &'static str {
    if is_acyclic(map) {
        ACYCLIC_VERDICT
    } else {
        CYCLIC_VERDICT
    }
}
