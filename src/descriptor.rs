//! Handler method identity and its resolved route descriptor.

use crate::{
    diagnostics::DiagnosticsSink,
    source::{FragmentTarget, PathFragmentSource},
    template::combine,
};
use serde::Serialize;
use std::fmt;

/// Identity of a handler method: the fully-qualified owner type and the
/// method name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HandlerMethod {
    owner: String,
    name: String,
}

impl HandlerMethod {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Fully-qualified owner type, e.g. `app::api::UserResource`
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path segment of the owner type, split on `::` or `.`
    pub fn owner_simple_name(&self) -> &str {
        let after_colons = self.owner.rsplit("::").next().unwrap_or(&self.owner);
        after_colons.rsplit('.').next().unwrap_or(after_colons)
    }
}

impl fmt::Display for HandlerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.owner, self.name)
    }
}

/// Immutable route label for one handler method.
///
/// The template is a pure function of the two path fragments, so descriptors
/// built twice for the same handler compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HandlerMethodDescriptor {
    owner_simple_name: String,
    method_name: String,
    template: String,
}

impl HandlerMethodDescriptor {
    /// Build a descriptor from fragments that are already known
    pub fn from_fragments(
        method: &HandlerMethod,
        class_path: Option<&str>,
        method_path: Option<&str>,
    ) -> Self {
        Self {
            owner_simple_name: method.owner_simple_name().to_string(),
            method_name: method.name().to_string(),
            template: combine(class_path, method_path),
        }
    }

    /// Look up both fragments and build the descriptor.
    ///
    /// A failed lookup is reported to `diagnostics` and treated as an absent
    /// fragment; it never fails construction.
    pub fn resolve(
        method: &HandlerMethod,
        source: &dyn PathFragmentSource,
        diagnostics: &dyn DiagnosticsSink,
    ) -> Self {
        let class_path =
            lookup_or_absent(source, diagnostics, FragmentTarget::Type(method.owner()));
        let method_path = lookup_or_absent(source, diagnostics, FragmentTarget::Method(method));

        Self::from_fragments(method, class_path.as_deref(), method_path.as_deref())
    }

    pub fn owner_simple_name(&self) -> &str {
        &self.owner_simple_name
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Normalized route template; empty for root or unknown paths
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Span labeling one invocation of this handler
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "handler",
            owner = %self.owner_simple_name,
            method = %self.method_name,
            route = %self.template,
        )
    }
}

fn lookup_or_absent(
    source: &dyn PathFragmentSource,
    diagnostics: &dyn DiagnosticsSink,
    target: FragmentTarget<'_>,
) -> Option<String> {
    match source.lookup(&target) {
        Ok(fragment) => fragment,
        Err(error) => {
            diagnostics.lookup_failed(&target, &error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        diagnostics::TracingDiagnostics,
        source::{LookupError, StaticFragmentSource},
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        failures: Mutex<Vec<String>>,
    }

    impl DiagnosticsSink for RecordingSink {
        fn lookup_failed(&self, target: &FragmentTarget<'_>, error: &LookupError) {
            self.failures
                .lock()
                .unwrap()
                .push(format!("{target}: {error}"));
        }
    }

    fn user_get() -> HandlerMethod {
        HandlerMethod::new("app::api::UserResource", "get")
    }

    #[test]
    fn test_owner_simple_name() {
        assert_eq!(user_get().owner_simple_name(), "UserResource");
        assert_eq!(
            HandlerMethod::new("org.example.OrderResource", "list").owner_simple_name(),
            "OrderResource"
        );
        assert_eq!(HandlerMethod::new("Plain", "m").owner_simple_name(), "Plain");
        assert_eq!(HandlerMethod::new("", "m").owner_simple_name(), "");
    }

    #[test]
    fn test_from_fragments() {
        let descriptor =
            HandlerMethodDescriptor::from_fragments(&user_get(), Some("/users"), Some("{id}"));

        assert_eq!(descriptor.owner_simple_name(), "UserResource");
        assert_eq!(descriptor.method_name(), "get");
        assert_eq!(descriptor.template(), "users/*");
    }

    #[test]
    fn test_resolve_from_static_source() {
        let source = StaticFragmentSource::new()
            .with_type_path("app::api::UserResource", "/users")
            .with_method_path("app::api::UserResource", "get", "/{id}");

        let descriptor = HandlerMethodDescriptor::resolve(&user_get(), &source, &TracingDiagnostics);
        assert_eq!(descriptor.template(), "users/*");
    }

    #[test]
    fn test_resolve_degrades_failed_method_lookup_to_absent() {
        fn source(target: &FragmentTarget<'_>) -> Result<Option<String>, LookupError> {
            match target {
                FragmentTarget::Type(_) => Ok(Some("/users/{id}".to_string())),
                FragmentTarget::Method(_) => Err(LookupError::Malformed {
                    target: target.to_string(),
                    reason: "value is not a string".to_string(),
                }),
            }
        }
        let sink = RecordingSink::default();

        let descriptor = HandlerMethodDescriptor::resolve(&user_get(), &source, &sink);

        assert_eq!(descriptor.template(), combine(Some("/users/{id}"), None));
        let failures = sink.failures.lock().unwrap();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("app::api::UserResource#get"));
    }

    #[test]
    fn test_resolve_degrades_both_failed_lookups_to_empty_template() {
        fn source(target: &FragmentTarget<'_>) -> Result<Option<String>, LookupError> {
            Err(LookupError::Inaccessible {
                target: target.to_string(),
                reason: "denied".to_string(),
            })
        }
        let sink = RecordingSink::default();

        let descriptor = HandlerMethodDescriptor::resolve(&user_get(), &source, &sink);

        assert_eq!(descriptor.template(), "");
        assert_eq!(descriptor.method_name(), "get");
        assert_eq!(sink.failures.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_repeated_resolution_is_value_equal() {
        let source = StaticFragmentSource::new().with_type_path("app::api::UserResource", "/users");

        let first = HandlerMethodDescriptor::resolve(&user_get(), &source, &TracingDiagnostics);
        let second = HandlerMethodDescriptor::resolve(&user_get(), &source, &TracingDiagnostics);
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptor_serializes() {
        let descriptor =
            HandlerMethodDescriptor::from_fragments(&user_get(), Some("/users"), None);
        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "owner_simple_name": "UserResource",
                "method_name": "get",
                "template": "users"
            })
        );
    }

    #[derive(Default)]
    struct FieldRecorder(Vec<(String, String)>);

    impl tracing::field::Visit for FieldRecorder {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    type CapturedSpans = std::sync::Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>;

    struct SpanCapture(CapturedSpans);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanCapture {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut fields = FieldRecorder::default();
            attrs.record(&mut fields);
            self.0
                .lock()
                .unwrap()
                .push((attrs.metadata().name().to_string(), fields.0));
        }
    }

    #[test]
    fn test_span_carries_route_labels() {
        use tracing_subscriber::layer::SubscriberExt;

        let captured = CapturedSpans::default();
        let subscriber =
            tracing_subscriber::registry().with(SpanCapture(std::sync::Arc::clone(&captured)));
        let descriptor =
            HandlerMethodDescriptor::from_fragments(&user_get(), Some("/users"), Some("{id}"));

        tracing::subscriber::with_default(subscriber, || {
            let span = descriptor.span();
            assert_eq!(span.metadata().map(|m| m.level()), Some(&tracing::Level::INFO));
        });

        let spans = captured.lock().unwrap();
        assert_eq!(spans.len(), 1);
        let (name, fields) = &spans[0];
        assert_eq!(name, "handler");
        assert_eq!(
            fields,
            &vec![
                ("owner".to_string(), "UserResource".to_string()),
                ("method".to_string(), "get".to_string()),
                ("route".to_string(), "users/*".to_string()),
            ]
        );
    }
}
