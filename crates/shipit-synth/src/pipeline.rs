//! Pipeline builder: Source, Build, Deploy.

use shipit_config::StackConfig;
use shipit_core::build::{BuildEnvironment, BuildProject};
use shipit_core::pipeline::{
    Action, ActionKind, Pipeline, PipelineArtifact, SourceTrigger, Stage,
};
use shipit_core::secret::SecretReference;
use shipit_core::storage::Bucket;
use shipit_core::{ResourceName, Result};
use tracing::debug;

const BUILD_PROJECT_SUFFIX: &str = "cicd-codebuild";
const PIPELINE_SUFFIX: &str = "cicd-pipeline";

/// Built-in source-action defaults; caller-supplied values win.
#[derive(Debug, Clone)]
pub struct SourceDefaults {
    pub branch: String,
    pub token_secret: String,
}

impl Default for SourceDefaults {
    fn default() -> Self {
        Self {
            branch: "master".to_string(),
            token_secret: "my-github-token".to_string(),
        }
    }
}

/// Assemble the build project and the three-stage pipeline.
///
/// Exactly one artifact flows Source to Build and one flows Build to
/// Deploy; the deploy stage is terminal.
pub(crate) fn build_pipeline(
    config: &StackConfig,
    bucket: &Bucket,
) -> Result<(BuildProject, Pipeline)> {
    let defaults = SourceDefaults::default();
    let branch = config.github_branch.clone().unwrap_or(defaults.branch);
    let token_secret = config
        .github_token_secret
        .clone()
        .unwrap_or(defaults.token_secret);

    let source_output = PipelineArtifact::new("source-output");
    let source_action = Action {
        name: "GitHub_Source".to_string(),
        kind: ActionKind::GitHubSource {
            owner: config.github_owner.clone(),
            repo: config.github_repo.clone(),
            branch,
            trigger: SourceTrigger::Webhook,
            token: SecretReference::secrets_manager(token_secret),
        },
        input: None,
        output: Some(source_output.clone()),
    };

    let project = BuildProject {
        name: ResourceName::prefixed(&config.prefix, BUILD_PROJECT_SUFFIX),
        environment: BuildEnvironment::default(),
        buildspec: config.buildspec.resolve()?,
    };

    let build_output = PipelineArtifact::new("build-output");
    let build_action = Action {
        name: "CodeBuild".to_string(),
        kind: ActionKind::CodeBuild {
            project: project.name.clone(),
        },
        input: Some(source_output),
        output: Some(build_output.clone()),
    };

    let deploy_action = Action {
        name: "S3Deploy".to_string(),
        kind: ActionKind::S3Deploy {
            bucket: bucket.name.clone(),
        },
        input: Some(build_output),
        output: None,
    };

    let pipeline = Pipeline {
        name: ResourceName::prefixed(&config.prefix, PIPELINE_SUFFIX),
        stages: vec![
            Stage {
                name: "Source".to_string(),
                actions: vec![source_action],
            },
            Stage {
                name: "Build".to_string(),
                actions: vec![build_action],
            },
            Stage {
                name: "Deploy".to_string(),
                actions: vec![deploy_action],
            },
        ],
    };
    debug!(name = %pipeline.name, stages = pipeline.stages.len(), "built pipeline");

    Ok((project, pipeline))
}
