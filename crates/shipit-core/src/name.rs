//! Resource naming.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Logical name of a resource registered by a stack.
///
/// Every resource is namespaced by the stack prefix. Reusing a prefix
/// across stacks collides on the platform side; that is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ResourceName(String);

impl ResourceName {
    /// Derive a resource name from the stack prefix and a fixed suffix.
    pub fn prefixed(prefix: &str, suffix: &str) -> Self {
        Self(format!("{prefix}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_joins_with_dash() {
        let name = ResourceName::prefixed("myapp", "cicd-deploy");
        assert_eq!(name.as_str(), "myapp-cicd-deploy");
        assert_eq!(name.to_string(), "myapp-cicd-deploy");
    }
}
