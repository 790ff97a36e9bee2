//! Content-delivery distribution types.

use serde::{Deserialize, Serialize};

use crate::ResourceName;

/// Origin a distribution pulls from; only bucket origins exist here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub bucket: ResourceName,
}

/// A cache behavior on a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheBehavior {
    /// Whether this behavior handles requests not matched by any other.
    pub is_default: bool,
}

/// An edge-caching distribution fronting the deploy bucket.
///
/// Fixed topology: one origin, one behavior marked default. Custom
/// domains, TLS certificates, and additional behaviors are not configured
/// by this stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub name: ResourceName,
    pub origin: Origin,
    pub behaviors: Vec<CacheBehavior>,
}

impl Distribution {
    /// The behavior marked default.
    pub fn default_behavior(&self) -> Option<&CacheBehavior> {
        self.behaviors.iter().find(|b| b.is_default)
    }
}
