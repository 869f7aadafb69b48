//! Maximum spanning tree by Prim's algorithm.
//!
//! Growing the tree from vertex 1, each step takes the heaviest ray that
//! leaves the tree. Rays whose target joined the tree after they were queued
//! are dropped when popped. O(E log E) time, O(E) heap memory.

use crate::graph::heap::RayHeap;
use crate::graph::weighted::{Vertex, Weight, WeightedGraph};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Sentinel printed when the graph has no spanning tree.
pub const NO_SPANNING_TREE: &str = "Oops! I did it again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub total_weight: Weight,
    pub edges: Vec<TreeEdge>,
}

/// Returns `None` when the graph is disconnected.
pub fn maximum_spanning_tree(graph: &WeightedGraph) -> Option<SpanningTree> {
    let n = graph.vertex_count();
    let mut tree = SpanningTree {
        total_weight: 0,
        edges: Vec::with_capacity(n.saturating_sub(1) as usize),
    };
    if n == 0 {
        return Some(tree);
    }

    let mut added = bitvec![0; n as usize + 1];
    let mut remaining = n;
    let mut rays = RayHeap::with_capacity(graph.ray_count());

    add_vertex(1, graph, &mut added, &mut rays);
    remaining -= 1;

    while remaining > 0 {
        let Some(ray) = rays.pop_max() else {
            debug!(remaining, "heap exhausted before the tree spanned the graph");
            return None;
        };
        if added[ray.to as usize] {
            continue;
        }
        trace!(from = ray.from, to = ray.to, weight = ray.weight, "tree edge");
        tree.total_weight += ray.weight;
        tree.edges.push(TreeEdge {
            from: ray.from,
            to: ray.to,
            weight: ray.weight,
        });
        remaining -= 1;
        add_vertex(ray.to, graph, &mut added, &mut rays);
    }

    debug!(
        vertices = n,
        edges = graph.edge_count(),
        total_weight = tree.total_weight,
        "maximum spanning tree built"
    );
    Some(tree)
}

/// The contest answer: the weight of the maximum spanning tree.
pub fn maximum_spanning_weight(graph: &WeightedGraph) -> Option<Weight> {
    maximum_spanning_tree(graph).map(|tree| tree.total_weight)
}

fn add_vertex(v: Vertex, graph: &WeightedGraph, added: &mut BitVec, rays: &mut RayHeap) {
    added.set(v as usize, true);
    rays.extend(
        graph
            .rays(v)
            .iter()
            .copied()
            .filter(|ray| !added[ray.to as usize]),
    );
}
