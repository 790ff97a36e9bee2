//! Storage-target builder.

use shipit_config::StackConfig;
use shipit_core::ResourceName;
use shipit_core::storage::{Bucket, WebsiteHosting};
use tracing::debug;

const DEPLOY_BUCKET_SUFFIX: &str = "cicd-deploy";

/// Build the deploy bucket, configured for website hosting when enabled.
pub(crate) fn build_bucket(config: &StackConfig) -> Bucket {
    let website = config.use_s3_hosting.then(|| WebsiteHosting {
        index_document: config
            .index_document
            .clone()
            .unwrap_or_else(|| "index.html".to_string()),
        error_document: config.error_document.clone(),
    });

    let bucket = Bucket {
        name: ResourceName::prefixed(&config.prefix, DEPLOY_BUCKET_SUFFIX),
        website,
    };
    debug!(name = %bucket.name, website = bucket.is_website(), "built deploy bucket");
    bucket
}
