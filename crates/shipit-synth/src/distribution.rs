//! Distribution builder.

use shipit_config::StackConfig;
use shipit_core::ResourceName;
use shipit_core::distribution::{CacheBehavior, Distribution, Origin};

const DISTRIBUTION_SUFFIX: &str = "cf-distribution";

/// Build the edge distribution fronting the deploy bucket.
pub(crate) fn build_distribution(config: &StackConfig, bucket: &ResourceName) -> Distribution {
    Distribution {
        name: ResourceName::prefixed(&config.prefix, DISTRIBUTION_SUFFIX),
        origin: Origin {
            bucket: bucket.clone(),
        },
        behaviors: vec![CacheBehavior { is_default: true }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_default_behavior_over_bucket_origin() {
        let config = StackConfig {
            prefix: "myapp".to_string(),
            ..StackConfig::default()
        };
        let bucket = ResourceName::prefixed("myapp", "cicd-deploy");

        let distribution = build_distribution(&config, &bucket);
        assert_eq!(distribution.name.as_str(), "myapp-cf-distribution");
        assert_eq!(distribution.origin.bucket, bucket);
        assert_eq!(distribution.behaviors.len(), 1);
        assert!(distribution.default_behavior().is_some());
    }
}
