//! The synthesized resource graph.

use serde::{Deserialize, Serialize};

use crate::build::BuildProject;
use crate::distribution::Distribution;
use crate::pipeline::Pipeline;
use crate::storage::Bucket;
use crate::{ResourceName, Result};

/// A managed resource registered by the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    Bucket(Bucket),
    BuildProject(BuildProject),
    Pipeline(Pipeline),
    Distribution(Distribution),
}

impl Resource {
    /// Logical name of the underlying resource.
    pub fn name(&self) -> &ResourceName {
        match self {
            Resource::Bucket(bucket) => &bucket.name,
            Resource::BuildProject(project) => &project.name,
            Resource::Pipeline(pipeline) => &pipeline.name,
            Resource::Distribution(distribution) => &distribution.name,
        }
    }
}

/// A creation-order edge: `resource` is created after `depends_on`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub resource: ResourceName,
    pub depends_on: ResourceName,
}

/// The full resource graph handed to the platform for reconciliation.
///
/// Built once at definition time and immutable afterwards. Creation,
/// update, rollback, and deletion of the underlying resources belong to
/// the platform that applies the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGraph {
    /// Naming namespace every resource is registered under.
    pub prefix: String,
    pub resources: Vec<Resource>,
    pub dependencies: Vec<Dependency>,
}

impl ResourceGraph {
    /// The deploy bucket.
    pub fn bucket(&self) -> Option<&Bucket> {
        self.resources.iter().find_map(|r| match r {
            Resource::Bucket(bucket) => Some(bucket),
            _ => None,
        })
    }

    /// The build project backing the pipeline's build stage.
    pub fn build_project(&self) -> Option<&BuildProject> {
        self.resources.iter().find_map(|r| match r {
            Resource::BuildProject(project) => Some(project),
            _ => None,
        })
    }

    /// The delivery pipeline.
    pub fn pipeline(&self) -> Option<&Pipeline> {
        self.resources.iter().find_map(|r| match r {
            Resource::Pipeline(pipeline) => Some(pipeline),
            _ => None,
        })
    }

    /// All distributions in the graph (zero or one).
    pub fn distributions(&self) -> Vec<&Distribution> {
        self.resources
            .iter()
            .filter_map(|r| match r {
                Resource::Distribution(distribution) => Some(distribution),
                _ => None,
            })
            .collect()
    }

    /// Whether `resource` is declared to depend on `on`.
    pub fn depends_on(&self, resource: &ResourceName, on: &ResourceName) -> bool {
        self.dependencies
            .iter()
            .any(|d| &d.resource == resource && &d.depends_on == on)
    }

    /// Serialize the graph for hand-off to the platform tool.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
