//! Stack configuration parsing.
//!
//! A stack is described by a flat `shipit.kdl` document:
//!
//! ```kdl
//! stack "myapp-prod"
//!
//! github owner="acme" repo="website" branch="develop"
//!
//! s3-hosting #true
//! index-document "home.html"
//! error-document "404.html"
//!
//! cloudfront #true
//!
//! buildspec "version: 0.2"
//! ```
//!
//! `github token-secret=` names the secret-store entry holding the access
//! token; `buildspec json=` supplies a structured spec document instead of
//! a literal string. A bare `cloudfront` or `s3-hosting` node enables the
//! feature.

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use serde::{Deserialize, Serialize};
use shipit_core::build::BuildSpec;

/// Input configuration for one stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackConfig {
    /// Naming namespace for every resource in the stack.
    pub prefix: String,
    /// Front the deploy bucket with a CDN distribution.
    pub use_cloudfront: bool,
    /// Configure the deploy bucket for static-website hosting.
    pub use_s3_hosting: bool,
    /// Website index document; "index.html" when hosting is enabled and
    /// none is given.
    pub index_document: Option<String>,
    /// Website error document.
    pub error_document: Option<String>,
    pub github_owner: String,
    pub github_repo: String,
    /// Branch to pull; defaults to "master" when absent.
    pub github_branch: Option<String>,
    /// Secret-store entry holding the access token; defaults to
    /// "my-github-token" when absent.
    pub github_token_secret: Option<String>,
    /// Build specification override.
    pub buildspec: BuildSpec,
}

/// Parse a stack configuration from KDL text.
pub fn parse_stack(kdl: &str) -> ConfigResult<StackConfig> {
    let doc: KdlDocument = kdl.parse()?;

    let mut config = StackConfig::default();

    for node in doc.nodes() {
        match node.name().value() {
            "stack" => {
                config.prefix = get_first_string_arg(node)
                    .ok_or_else(|| ConfigError::MissingField("stack prefix".to_string()))?;
            }
            "cloudfront" => {
                config.use_cloudfront = get_first_bool_arg(node).unwrap_or(true);
            }
            "s3-hosting" => {
                config.use_s3_hosting = get_first_bool_arg(node).unwrap_or(true);
            }
            "index-document" => {
                config.index_document = get_first_string_arg(node);
            }
            "error-document" => {
                config.error_document = get_first_string_arg(node);
            }
            "github" => {
                config.github_owner = get_string_prop(node, "owner")
                    .ok_or_else(|| ConfigError::MissingField("github owner".to_string()))?;
                config.github_repo = get_string_prop(node, "repo")
                    .ok_or_else(|| ConfigError::MissingField("github repo".to_string()))?;
                config.github_branch = get_string_prop(node, "branch");
                config.github_token_secret = get_string_prop(node, "token-secret");
            }
            "buildspec" => {
                config.buildspec = parse_buildspec(node)?;
            }
            _ => {} // Ignore unknown nodes
        }
    }

    if config.prefix.is_empty() {
        return Err(ConfigError::MissingField("stack prefix".to_string()));
    }
    if config.github_owner.is_empty() {
        return Err(ConfigError::MissingField("github owner".to_string()));
    }
    if config.github_repo.is_empty() {
        return Err(ConfigError::MissingField("github repo".to_string()));
    }

    Ok(config)
}

fn parse_buildspec(node: &KdlNode) -> ConfigResult<BuildSpec> {
    if let Some(json) = get_string_prop(node, "json") {
        let doc = serde_json::from_str(&json).map_err(|e| ConfigError::InvalidValue {
            field: "buildspec json".to_string(),
            message: e.to_string(),
        })?;
        return Ok(BuildSpec::Structured(doc));
    }
    match get_first_string_arg(node) {
        Some(spec) => Ok(BuildSpec::Literal(spec)),
        None => Ok(BuildSpec::Passthrough),
    }
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn get_first_bool_arg(node: &KdlNode) -> Option<bool> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_bool())
}

fn get_string_prop(node: &KdlNode, name: &str) -> Option<String> {
    node.get(name)
        .and_then(|v| v.as_string())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_stack() {
        let kdl = r#"
            stack "myapp-prod"

            github owner="acme" repo="website" branch="develop" token-secret="deploy-token"

            s3-hosting #true
            index-document "home.html"
            error-document "404.html"

            cloudfront #true

            buildspec "version: 0.2"
        "#;

        let config = parse_stack(kdl).unwrap();
        assert_eq!(config.prefix, "myapp-prod");
        assert_eq!(config.github_owner, "acme");
        assert_eq!(config.github_repo, "website");
        assert_eq!(config.github_branch.as_deref(), Some("develop"));
        assert_eq!(config.github_token_secret.as_deref(), Some("deploy-token"));
        assert!(config.use_s3_hosting);
        assert!(config.use_cloudfront);
        assert_eq!(config.index_document.as_deref(), Some("home.html"));
        assert_eq!(config.error_document.as_deref(), Some("404.html"));
        assert_eq!(
            config.buildspec,
            BuildSpec::Literal("version: 0.2".to_string())
        );
    }

    #[test]
    fn minimal_stack_uses_defaults() {
        let kdl = r#"
            stack "myapp"
            github owner="acme" repo="website"
        "#;

        let config = parse_stack(kdl).unwrap();
        assert!(!config.use_cloudfront);
        assert!(!config.use_s3_hosting);
        assert!(config.index_document.is_none());
        assert!(config.github_branch.is_none());
        assert!(config.github_token_secret.is_none());
        assert_eq!(config.buildspec, BuildSpec::Passthrough);
    }

    #[test]
    fn bare_feature_nodes_enable() {
        let kdl = r#"
            stack "myapp"
            github owner="acme" repo="website"
            cloudfront
            s3-hosting
        "#;

        let config = parse_stack(kdl).unwrap();
        assert!(config.use_cloudfront);
        assert!(config.use_s3_hosting);
    }

    #[test]
    fn explicit_false_disables() {
        let kdl = r#"
            stack "myapp"
            github owner="acme" repo="website"
            cloudfront #false
        "#;

        let config = parse_stack(kdl).unwrap();
        assert!(!config.use_cloudfront);
    }

    #[test]
    fn structured_buildspec_from_json_prop() {
        let kdl = r#"
            stack "myapp"
            github owner="acme" repo="website"
            buildspec json="{\"version\":\"0.2\"}"
        "#;

        let config = parse_stack(kdl).unwrap();
        match config.buildspec {
            BuildSpec::Structured(doc) => assert_eq!(doc["version"], "0.2"),
            other => panic!("expected structured buildspec, got {:?}", other),
        }
    }

    #[test]
    fn malformed_buildspec_json_rejected() {
        let kdl = r#"
            stack "myapp"
            github owner="acme" repo="website"
            buildspec json="{not json"
        "#;

        let result = parse_stack(kdl);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn missing_stack_prefix_rejected() {
        let kdl = r#"
            github owner="acme" repo="website"
        "#;

        let result = parse_stack(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::MissingField(_)));
    }

    #[test]
    fn missing_github_repo_rejected() {
        let kdl = r#"
            stack "myapp"
            github owner="acme"
        "#;

        let result = parse_stack(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::MissingField(_)));
    }

    #[test]
    fn unknown_nodes_ignored() {
        let kdl = r#"
            stack "myapp"
            github owner="acme" repo="website"
            notifications channel="deploys"
        "#;

        assert!(parse_stack(kdl).is_ok());
    }
}
