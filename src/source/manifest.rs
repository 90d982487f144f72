//! JSON route manifest.
//!
//! Lists handler types with their optional base path and their handler
//! methods with optional sub-paths:
//!
//! ```json
//! {
//!   "resources": [
//!     {
//!       "owner": "app::UserResource",
//!       "path": "/users",
//!       "methods": [{ "name": "get", "path": "{id}" }, { "name": "list" }]
//!     }
//!   ]
//! }
//! ```

use crate::descriptor::HandlerMethod;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read route manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse route manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
}

/// A handler type and its base path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub owner: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

/// A handler method and its sub-path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl RouteManifest {
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Every handler method declared in the manifest, in declaration order
    pub fn handlers(&self) -> impl Iterator<Item = HandlerMethod> + '_ {
        self.resources.iter().flat_map(|resource| {
            resource
                .methods
                .iter()
                .map(move |method| HandlerMethod::new(resource.owner.as_str(), method.name.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "resources": [
            {
                "owner": "app::UserResource",
                "path": "/users",
                "methods": [{ "name": "get", "path": "{id}" }, { "name": "list" }]
            },
            { "owner": "app::HealthResource", "methods": [{ "name": "check", "path": "/health" }] }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = RouteManifest::from_json_str(MANIFEST).unwrap();

        assert_eq!(manifest.resources.len(), 2);
        assert_eq!(manifest.resources[0].path.as_deref(), Some("/users"));
        assert_eq!(manifest.resources[0].methods[1].path, None);
        assert_eq!(manifest.resources[1].path, None);
    }

    #[test]
    fn test_handlers_in_declaration_order() {
        let manifest = RouteManifest::from_json_str(MANIFEST).unwrap();
        let handlers: Vec<String> = manifest.handlers().map(|h| h.to_string()).collect();

        assert_eq!(
            handlers,
            vec![
                "app::UserResource#get",
                "app::UserResource#list",
                "app::HealthResource#check",
            ]
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = RouteManifest::from_json_str("{}").unwrap();
        assert_eq!(manifest.handlers().count(), 0);
    }

    #[test]
    fn test_invalid_manifest() {
        let err = RouteManifest::from_json_str(r#"{"resources": [{"path": "/x"}]}"#).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RouteManifest::load("/nonexistent/routes.json").unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/routes.json"));
    }
}
