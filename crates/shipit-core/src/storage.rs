//! Object-storage bucket types.

use serde::{Deserialize, Serialize};

use crate::ResourceName;

/// Static-website hosting settings for a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteHosting {
    /// Document served at the site root.
    pub index_document: String,
    /// Document served for missing keys, if configured.
    pub error_document: Option<String>,
}

/// The deploy bucket.
///
/// Acts as the pipeline's deploy target and, when hosting is configured,
/// as the website origin. Without hosting the bucket is plain object
/// storage with no website endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: ResourceName,
    pub website: Option<WebsiteHosting>,
}

impl Bucket {
    pub fn is_website(&self) -> bool {
        self.website.is_some()
    }
}
