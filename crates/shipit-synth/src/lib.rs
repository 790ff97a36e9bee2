//! Stack assembly: configuration in, resource graph out.
//!
//! [`synthesize`] is a single synchronous pass with no I/O: validate the
//! configuration, build the deploy bucket, wire the three-stage pipeline,
//! and conditionally add the CDN distribution. Nothing is registered if
//! validation fails. Resource lifecycle (create, update, rollback, delete)
//! belongs to the platform that applies the graph.

mod distribution;
mod pipeline;
mod storage;

pub use pipeline::SourceDefaults;

use shipit_config::StackConfig;
use shipit_core::graph::{Dependency, Resource, ResourceGraph};
use shipit_core::{Error, Result};
use tracing::{debug, info};

/// Assemble the full resource graph for one stack.
pub fn synthesize(config: &StackConfig) -> Result<ResourceGraph> {
    validate(config)?;

    info!(prefix = %config.prefix, "synthesizing stack");

    let bucket = storage::build_bucket(config);
    let (project, pipeline) = pipeline::build_pipeline(config, &bucket)?;

    let mut dependencies = vec![
        Dependency {
            resource: pipeline.name.clone(),
            depends_on: bucket.name.clone(),
        },
        Dependency {
            resource: pipeline.name.clone(),
            depends_on: project.name.clone(),
        },
    ];

    let bucket_name = bucket.name.clone();
    let mut resources = vec![
        Resource::Bucket(bucket),
        Resource::BuildProject(project),
        Resource::Pipeline(pipeline),
    ];

    if config.use_cloudfront {
        let distribution = distribution::build_distribution(config, &bucket_name);
        debug!(name = %distribution.name, "adding distribution");
        dependencies.push(Dependency {
            resource: distribution.name.clone(),
            depends_on: bucket_name.clone(),
        });
        resources.push(Resource::Distribution(distribution));
    }

    info!(resources = resources.len(), "stack synthesized");

    Ok(ResourceGraph {
        prefix: config.prefix.clone(),
        resources,
        dependencies,
    })
}

/// Reject configurations missing required fields before any resource is
/// built.
fn validate(config: &StackConfig) -> Result<()> {
    if config.prefix.is_empty() {
        return Err(Error::InvalidConfig("prefix must not be empty".to_string()));
    }
    if config.github_owner.is_empty() {
        return Err(Error::InvalidConfig("github owner is required".to_string()));
    }
    if config.github_repo.is_empty() {
        return Err(Error::InvalidConfig("github repo is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipit_core::build::BuildSpec;

    fn base_config() -> StackConfig {
        StackConfig {
            prefix: "myapp".to_string(),
            github_owner: "acme".to_string(),
            github_repo: "website".to_string(),
            ..StackConfig::default()
        }
    }

    #[test]
    fn graph_holds_bucket_project_and_pipeline() {
        let graph = synthesize(&base_config()).unwrap();

        assert_eq!(graph.resources.len(), 3);
        assert_eq!(graph.bucket().unwrap().name.as_str(), "myapp-cicd-deploy");
        assert_eq!(
            graph.build_project().unwrap().name.as_str(),
            "myapp-cicd-codebuild"
        );
        assert_eq!(
            graph.pipeline().unwrap().name.as_str(),
            "myapp-cicd-pipeline"
        );
    }

    #[test]
    fn cloudfront_flag_adds_exactly_one_distribution() {
        let mut config = base_config();
        config.use_cloudfront = true;

        let graph = synthesize(&config).unwrap();
        let distributions = graph.distributions();
        assert_eq!(distributions.len(), 1);

        let distribution = distributions[0];
        assert_eq!(distribution.origin.bucket, graph.bucket().unwrap().name);
        assert_eq!(distribution.behaviors.len(), 1);
        assert!(distribution.behaviors[0].is_default);
    }

    #[test]
    fn no_cloudfront_flag_no_distribution() {
        let graph = synthesize(&base_config()).unwrap();
        assert!(graph.distributions().is_empty());
    }

    #[test]
    fn pipeline_depends_on_bucket_and_project() {
        let graph = synthesize(&base_config()).unwrap();
        let pipeline = graph.pipeline().unwrap().name.clone();

        assert!(graph.depends_on(&pipeline, &graph.bucket().unwrap().name));
        assert!(graph.depends_on(&pipeline, &graph.build_project().unwrap().name));
    }

    #[test]
    fn distribution_depends_on_bucket() {
        let mut config = base_config();
        config.use_cloudfront = true;

        let graph = synthesize(&config).unwrap();
        let distribution = graph.distributions()[0].name.clone();
        assert!(graph.depends_on(&distribution, &graph.bucket().unwrap().name));
    }

    #[test]
    fn structured_buildspec_reaches_the_project() {
        let mut config = base_config();
        let doc = serde_json::json!({
            "version": "0.2",
            "phases": { "build": { "commands": ["npm run build"] } },
            "artifacts": { "files": ["dist/**/*"] },
        });
        config.buildspec = BuildSpec::Structured(doc.clone());

        let graph = synthesize(&config).unwrap();
        assert_eq!(
            graph.build_project().unwrap().buildspec,
            serde_json::to_string(&doc).unwrap()
        );
    }

    #[test]
    fn empty_prefix_rejected_before_any_resource() {
        let mut config = base_config();
        config.prefix = String::new();

        let result = synthesize(&config);
        assert!(matches!(result.unwrap_err(), Error::InvalidConfig(_)));
    }

    #[test]
    fn missing_github_coordinates_rejected() {
        let mut config = base_config();
        config.github_owner = String::new();
        assert!(matches!(
            synthesize(&config).unwrap_err(),
            Error::InvalidConfig(_)
        ));

        let mut config = base_config();
        config.github_repo = String::new();
        assert!(matches!(
            synthesize(&config).unwrap_err(),
            Error::InvalidConfig(_)
        ));
    }

    #[test]
    fn graph_serializes_for_handoff() {
        let mut config = base_config();
        config.use_cloudfront = true;

        let json = synthesize(&config).unwrap().to_json().unwrap();
        assert!(json.contains("myapp-cf-distribution"));
        assert!(json.contains(r#""type": "pipeline""#));
    }
}
