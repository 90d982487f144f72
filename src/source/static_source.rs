//! Hand-authored route metadata.

use super::{FragmentTarget, LookupError, PathFragmentSource, RouteManifest};
use std::collections::HashMap;

/// In-memory fragment source keyed by owner type path and method name.
///
/// Targets without a registered fragment resolve to `Ok(None)`.
#[derive(Debug, Clone, Default)]
pub struct StaticFragmentSource {
    type_paths: HashMap<String, String>,
    method_paths: HashMap<(String, String), String>,
}

impl StaticFragmentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from every fragment declared in a route manifest
    pub fn from_manifest(manifest: &RouteManifest) -> Self {
        let mut source = Self::new();
        for resource in &manifest.resources {
            if let Some(path) = &resource.path {
                source.insert_type_path(&resource.owner, path);
            }
            for method in &resource.methods {
                if let Some(path) = &method.path {
                    source.insert_method_path(&resource.owner, &method.name, path);
                }
            }
        }
        source
    }

    pub fn with_type_path(mut self, owner: &str, path: &str) -> Self {
        self.insert_type_path(owner, path);
        self
    }

    pub fn with_method_path(mut self, owner: &str, method: &str, path: &str) -> Self {
        self.insert_method_path(owner, method, path);
        self
    }

    pub fn insert_type_path(&mut self, owner: &str, path: &str) {
        self.type_paths.insert(owner.to_string(), path.to_string());
    }

    pub fn insert_method_path(&mut self, owner: &str, method: &str, path: &str) {
        self.method_paths
            .insert((owner.to_string(), method.to_string()), path.to_string());
    }
}

impl PathFragmentSource for StaticFragmentSource {
    fn lookup(&self, target: &FragmentTarget<'_>) -> Result<Option<String>, LookupError> {
        let fragment = match target {
            FragmentTarget::Type(owner) => self.type_paths.get(*owner),
            FragmentTarget::Method(method) => self
                .method_paths
                .get(&(method.owner().to_string(), method.name().to_string())),
        };
        Ok(fragment.cloned())
    }
}
