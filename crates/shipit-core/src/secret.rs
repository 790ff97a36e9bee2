//! Secret references.

use serde::{Deserialize, Serialize};

/// Secret store a reference resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretBackend {
    /// Managed secrets-manager entry.
    SecretsManager,
    /// Systems-manager secure parameter.
    SsmParameter,
}

impl std::fmt::Display for SecretBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretBackend::SecretsManager => write!(f, "secrets_manager"),
            SecretBackend::SsmParameter => write!(f, "ssm_parameter"),
        }
    }
}

/// A named pointer into the platform secret store.
///
/// The value is resolved by the platform at pipeline execution time and is
/// never read, logged, or serialized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretReference {
    pub name: String,
    pub backend: SecretBackend,
}

impl SecretReference {
    pub fn secrets_manager(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: SecretBackend::SecretsManager,
        }
    }

    pub fn ssm_parameter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: SecretBackend::SsmParameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_carries_name_and_backend_only() {
        let reference = SecretReference::secrets_manager("my-github-token");
        let value = serde_json::to_value(&reference).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["backend", "name"]);
        assert_eq!(value["name"], "my-github-token");
        assert_eq!(value["backend"], "secrets_manager");
    }
}
