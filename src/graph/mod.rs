pub mod heap;
pub mod spanning;
pub mod tournament;
pub mod weighted;

pub use heap::RayHeap;
pub use spanning::{maximum_spanning_tree, maximum_spanning_weight, SpanningTree, TreeEdge};
pub use tournament::{
    cycle_triangle, find_cycle, is_acyclic, railway_verdict, Color, CycleWitness, RoadKind,
    RoadMap,
};
pub use weighted::{
    check_vertex_limit, check_weight, Ray, Vertex, Weight, WeightedGraph, MAX_VERTICES,
    MAX_WEIGHT, MIN_WEIGHT,
};
