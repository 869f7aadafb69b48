//! Answer rendering: the one-line contest format, or JSON with the tree
//! edges and cycle witnesses attached.

use crate::error::Result;
use crate::graph::spanning::NO_SPANNING_TREE;
use crate::graph::tournament::{ACYCLIC_VERDICT, CYCLIC_VERDICT};
use crate::graph::{
    cycle_triangle, find_cycle, maximum_spanning_tree, RoadMap, TreeEdge, Vertex, Weight,
    WeightedGraph,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkAnswer {
    pub vertices: u32,
    pub edges: u32,
    pub total_weight: Option<Weight>,
    pub tree: Vec<TreeEdge>,
}

impl NetworkAnswer {
    pub fn solve(graph: &WeightedGraph) -> Self {
        let tree = maximum_spanning_tree(graph);
        NetworkAnswer {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            total_weight: tree.as_ref().map(|tree| tree.total_weight),
            tree: tree.map(|tree| tree.edges).unwrap_or_default(),
        }
    }
}

impl fmt::Display for NetworkAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_weight {
            Some(weight) => write!(f, "{weight}"),
            None => write!(f, "{NO_SPANNING_TREE}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailwayAnswer {
    pub cities: u32,
    pub optimal: bool,
    pub cycle: Option<Vec<Vertex>>,
    pub triangle: Option<[Vertex; 3]>,
}

impl RailwayAnswer {
    pub fn solve(map: &RoadMap) -> Self {
        let cycle = find_cycle(map);
        let triangle = cycle
            .as_ref()
            .and_then(|cycle| cycle_triangle(map, cycle));
        RailwayAnswer {
            cities: map.city_count(),
            optimal: cycle.is_none(),
            cycle: cycle.map(|cycle| cycle.into_vec()),
            triangle,
        }
    }
}

impl fmt::Display for RailwayAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optimal {
            write!(f, "{ACYCLIC_VERDICT}")
        } else {
            write!(f, "{CYCLIC_VERDICT}")
        }
    }
}

pub fn render<T: Serialize + fmt::Display>(answer: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(answer.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(answer)?),
    }
}
