//! Build project and build specification types.

use serde::{Deserialize, Serialize};

use crate::{ResourceName, Result};

/// Linux container image the managed build service runs.
pub const UBUNTU_DOCKER_BUILD_IMAGE: &str = "aws/codebuild/ubuntu-base:14.04-docker-18.09.0";

/// Compute tier for the build container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeType {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for ComputeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputeType::Small => write!(f, "small"),
            ComputeType::Medium => write!(f, "medium"),
            ComputeType::Large => write!(f, "large"),
        }
    }
}

/// Container environment a build project runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnvironment {
    pub image: String,
    pub compute_type: ComputeType,
    /// Privileged mode, required for nested containerization during builds.
    pub privileged: bool,
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self {
            image: UBUNTU_DOCKER_BUILD_IMAGE.to_string(),
            compute_type: ComputeType::Small,
            privileged: true,
        }
    }
}

/// Build specification supplied by the caller, or the pass-through default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum BuildSpec {
    /// No spec supplied; the pass-through spec is used.
    #[default]
    Passthrough,
    /// A literal spec string, handed to the build service verbatim.
    Literal(String),
    /// A structured spec document, serialized before hand-off.
    Structured(serde_json::Value),
}

impl BuildSpec {
    /// Resolve to the string form handed to the build service.
    ///
    /// A structured document is serialized; a non-empty literal is used
    /// unchanged; anything else falls back to the serialized pass-through
    /// spec. The spec schema is not validated here; a malformed spec fails
    /// at the build-execution layer.
    pub fn resolve(&self) -> Result<String> {
        match self {
            BuildSpec::Structured(doc) => Ok(serde_json::to_string(doc)?),
            BuildSpec::Literal(spec) if !spec.is_empty() => Ok(spec.clone()),
            _ => Ok(serde_json::to_string(&BuildSpecDocument::passthrough())?),
        }
    }
}

/// A structured build specification document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpecDocument {
    pub version: String,
    pub phases: BuildPhases,
    pub artifacts: ArtifactRules,
}

/// Phases of a build specification; this stack only models the build phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPhases {
    pub build: BuildPhase,
}

/// Commands run during one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPhase {
    pub commands: Vec<String>,
}

/// Output artifact globs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRules {
    pub files: Vec<String>,
}

impl BuildSpecDocument {
    /// Spec that prints the build environment and archives every file.
    pub fn passthrough() -> Self {
        Self {
            version: "0.2".to_string(),
            phases: BuildPhases {
                build: BuildPhase {
                    commands: vec!["env".to_string()],
                },
            },
            artifacts: ArtifactRules {
                files: vec!["**/*".to_string()],
            },
        }
    }
}

/// A managed build project wired into the pipeline's build stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildProject {
    pub name: ResourceName,
    pub environment: BuildEnvironment,
    /// Resolved build specification string.
    pub buildspec: String,
}
