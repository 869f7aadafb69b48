use crate::error::GraphError;
use crate::graph::{check_vertex_limit, RoadKind, RoadMap, Vertex, Weight, WeightedGraph};
use fxhash::FxHashSet;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_WEIGHT: Weight = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceParameters {
    pub nodes: u32,
    pub edges: u32,
    pub max_weight: Weight,
    pub connected: bool,
    pub acyclic: bool,
    pub seed: Option<u64>,
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// `1..=n` in random order.
pub fn shuffled_vertices(n: u32, rng: &mut impl Rng) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = (1..=n).collect();
    vertices.shuffle(rng);
    vertices
}

/// Random simple graph on `n` vertices with up to `m` distinct edges.
/// With `connected` set, the first `n - 1` edges form a random spanning tree.
pub fn random_network(
    n: u32,
    m: u32,
    max_weight: Weight,
    connected: bool,
    rng: &mut impl Rng,
) -> Result<WeightedGraph, GraphError> {
    check_vertex_limit(n)?;
    let mut graph = WeightedGraph::new(n);
    if n == 0 {
        return Ok(graph);
    }
    let capacity = n as u64 * (n as u64 - 1) / 2;
    let target = (m as u64).min(capacity) as usize;
    let mut used: FxHashSet<(Vertex, Vertex)> = FxHashSet::default();

    if connected {
        let order = shuffled_vertices(n, rng);
        for index in 1..order.len() {
            let parent = order[rng.random_range(0..index)];
            let child = order[index];
            let weight = rng.random_range(0..=max_weight.max(0));
            insert_edge(&mut graph, &mut used, parent, child, weight)?;
        }
    }

    while used.len() < target {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        let weight = rng.random_range(0..=max_weight.max(0));
        insert_edge(&mut graph, &mut used, u, v, weight)?;
    }
    Ok(graph)
}

fn insert_edge(
    graph: &mut WeightedGraph,
    used: &mut FxHashSet<(Vertex, Vertex)>,
    u: Vertex,
    v: Vertex,
    weight: Weight,
) -> Result<(), GraphError> {
    if u == v || used.contains(&(u.min(v), u.max(v))) {
        return Ok(());
    }
    graph.add_edge(u, v, weight)?;
    used.insert((u.min(v), u.max(v)));
    Ok(())
}

/// Every road direction drawn uniformly.
pub fn random_road_map(n: u32, rng: &mut impl Rng) -> Result<RoadMap, GraphError> {
    check_vertex_limit(n)?;
    let rows: Vec<Vec<RoadKind>> = (1..n)
        .map(|i| {
            (0..n - i)
                .map(|_| {
                    if rng.random_bool(0.5) {
                        RoadKind::Red
                    } else {
                        RoadKind::Blue
                    }
                })
                .collect()
        })
        .collect();
    RoadMap::from_rows(n, &rows)
}

/// Transitive tournament: cities ranked by a random permutation, every road
/// points from the better ranked city to the worse one.
pub fn acyclic_road_map(n: u32, rng: &mut impl Rng) -> Result<RoadMap, GraphError> {
    check_vertex_limit(n)?;
    let rank = shuffled_vertices(n, rng);
    let rows: Vec<Vec<RoadKind>> = (1..n)
        .map(|i| {
            ((i + 1)..=n)
                .map(|j| {
                    if rank[(i - 1) as usize] < rank[(j - 1) as usize] {
                        RoadKind::Red
                    } else {
                        RoadKind::Blue
                    }
                })
                .collect()
        })
        .collect();
    RoadMap::from_rows(n, &rows)
}

pub fn generate_network_instance(
    n: u32,
    m: u32,
    max_weight: Weight,
    connected: bool,
    seed: Option<u64>,
) -> Result<(WeightedGraph, InstanceParameters), GraphError> {
    let mut rng = seeded_rng(seed);
    let graph = random_network(n, m, max_weight, connected, &mut rng)?;
    let params = InstanceParameters {
        nodes: n,
        edges: graph.edge_count(),
        max_weight,
        connected,
        acyclic: false,
        seed,
    };
    Ok((graph, params))
}

pub fn generate_railway_instance(
    n: u32,
    acyclic: bool,
    seed: Option<u64>,
) -> Result<(RoadMap, InstanceParameters), GraphError> {
    let mut rng = seeded_rng(seed);
    let map = if acyclic {
        acyclic_road_map(n, &mut rng)?
    } else {
        random_road_map(n, &mut rng)?
    };
    let params = InstanceParameters {
        nodes: n,
        edges: map.road_count() as u32,
        max_weight: 0,
        connected: true,
        acyclic,
        seed,
    };
    Ok((map, params))
}
