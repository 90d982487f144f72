//! Per-handler descriptor cache.

use crate::{
    descriptor::{HandlerMethod, HandlerMethodDescriptor},
    diagnostics::DiagnosticsSink,
    source::PathFragmentSource,
};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Caches one [`HandlerMethodDescriptor`] per handler method.
///
/// Descriptors are resolved outside the lock. When two callers race on the
/// same handler the first insert wins and both get the same `Arc`.
pub struct DescriptorCache {
    source: Arc<dyn PathFragmentSource>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    entries: RwLock<HashMap<HandlerMethod, Arc<HandlerMethodDescriptor>>>,
}

impl DescriptorCache {
    pub fn new(source: Arc<dyn PathFragmentSource>, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            source,
            diagnostics,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cached descriptor for `method`, resolving it on first use
    pub fn get_or_resolve(&self, method: &HandlerMethod) -> Arc<HandlerMethodDescriptor> {
        if let Some(descriptor) = self.get(method) {
            return descriptor;
        }

        let resolved = Arc::new(HandlerMethodDescriptor::resolve(
            method,
            self.source.as_ref(),
            self.diagnostics.as_ref(),
        ));

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(method.clone()).or_insert(resolved))
    }

    pub fn get(&self, method: &HandlerMethod) -> Option<Arc<HandlerMethodDescriptor>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(method).cloned()
    }

    /// Resolve a batch of handlers up front, returning how many were new
    pub fn warm(&self, methods: impl IntoIterator<Item = HandlerMethod>) -> usize {
        let mut resolved = 0;
        for method in methods {
            if self.get(&method).is_none() {
                self.get_or_resolve(&method);
                resolved += 1;
            }
        }
        resolved
    }

    pub fn evict(&self, method: &HandlerMethod) -> Option<Arc<HandlerMethodDescriptor>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(method)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all cached descriptors ordered by handler identity
    pub fn descriptors(&self) -> Vec<Arc<HandlerMethodDescriptor>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut sorted: Vec<_> = entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted.into_iter().map(|(_, d)| Arc::clone(d)).collect()
    }
}
