//! Pipeline, stage, and action definitions.

use serde::{Deserialize, Serialize};

use crate::ResourceName;
use crate::secret::SecretReference;

/// An opaque named bundle of files passed between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub name: String,
}

impl PipelineArtifact {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// How the source action learns about new commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTrigger {
    /// Push webhook delivered by the repository host.
    Webhook,
    /// Periodic polling.
    Poll,
    /// Manual releases only.
    None,
}

impl std::fmt::Display for SourceTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTrigger::Webhook => write!(f, "webhook"),
            SourceTrigger::Poll => write!(f, "poll"),
            SourceTrigger::None => write!(f, "none"),
        }
    }
}

/// What a pipeline action does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Pull a branch of a GitHub repository.
    GitHubSource {
        owner: String,
        repo: String,
        branch: String,
        trigger: SourceTrigger,
        /// Access token, resolved by the platform at execution time.
        token: SecretReference,
    },
    /// Run a managed build project against the input artifact.
    CodeBuild { project: ResourceName },
    /// Copy the input artifact's contents into a bucket.
    S3Deploy { bucket: ResourceName },
}

/// A single action inside a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub kind: ActionKind,
    /// Artifact consumed, if any.
    pub input: Option<PipelineArtifact>,
    /// Artifact produced, if any.
    pub output: Option<PipelineArtifact>,
}

/// A named ordered step of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub actions: Vec<Action>,
}

/// The delivery pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: ResourceName,
    /// Stages in execution order: Source, Build, Deploy.
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Look up a stage by name.
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }
}
