use crate::error::Result;
use crate::graph::{RoadMap, WeightedGraph};
use crate::utils::random_graph::InstanceParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProblemKind {
    Network(WeightedGraph),
    Railways(RoadMap),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub problem: ProblemKind,
    pub metadata: Option<InstanceParameters>,
}

impl ProblemInstance {
    pub fn new(problem: ProblemKind) -> Self {
        ProblemInstance {
            problem,
            metadata: None,
        }
    }

    pub fn with_metadata(problem: ProblemKind, metadata: InstanceParameters) -> Self {
        ProblemInstance {
            problem,
            metadata: Some(metadata),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.problem {
            ProblemKind::Network(_) => "network",
            ProblemKind::Railways(_) => "railways",
        }
    }

    /// Rejects decoded graphs whose tables the solvers would index out of bounds.
    pub fn validate(&self) -> Result<()> {
        match &self.problem {
            ProblemKind::Network(graph) => graph.validate()?,
            ProblemKind::Railways(map) => map.validate()?,
        }
        Ok(())
    }
}

pub fn save_instance<P: AsRef<Path>>(path: P, instance: &ProblemInstance) -> Result<()> {
    let bytes = bincode::serialize(instance)?;
    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(&bytes)?;
    debug!(
        path = %path.as_ref().display(),
        bytes = bytes.len(),
        kind = instance.label(),
        "instance saved"
    );
    Ok(())
}

pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<ProblemInstance> {
    let bytes = fs::read(path.as_ref())?;
    let instance: ProblemInstance = bincode::deserialize(&bytes)?;
    instance.validate()?;
    debug!(
        path = %path.as_ref().display(),
        kind = instance.label(),
        "instance loaded"
    );
    Ok(instance)
}
