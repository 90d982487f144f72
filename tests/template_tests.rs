use route_template::{
    DescriptorCache, FragmentTarget, HandlerMethod, HandlerMethodDescriptor, LookupError,
    SilentDiagnostics, StaticFragmentSource, combine, normalize_segment,
};
use std::sync::Arc;

#[test]
fn test_documented_combinations() {
    let cases = [
        (None, None, ""),
        (Some("/"), Some("/"), ""),
        (Some("/a"), Some("/b"), "a/b"),
        (Some("/a"), Some("{id}"), "a/*"),
        (Some("/a/{id}/b/{name}"), None, "a/*/b/*"),
        (None, Some("/x/y"), "x/y"),
        (Some("/base/"), Some("/sub"), "base//sub"),
    ];

    for (class_path, method_path, expected) in cases {
        assert_eq!(
            combine(class_path, method_path),
            expected,
            "combine({class_path:?}, {method_path:?})"
        );
    }
}

#[test]
fn test_template_never_starts_with_slash_after_single_leading_slash() {
    let fragments = [None, Some(""), Some("/"), Some("/a"), Some("a/"), Some("/{x}/y")];
    for class_path in fragments {
        for method_path in fragments {
            let template = combine(class_path, method_path);
            assert!(!template.starts_with('/'), "{class_path:?} + {method_path:?} = {template:?}");
        }
    }
}

#[test]
fn test_normalized_fragment_is_fixed_point() {
    for raw in ["/users/{id}", "{a}/{b}/", "plain", "/x//y"] {
        let once = normalize_segment(Some(raw), false);
        let twice = normalize_segment(Some(&once), false);
        assert_eq!(once, twice, "raw: {raw:?}");
    }
}

fn failing_lookup(target: &FragmentTarget<'_>) -> Result<Option<String>, LookupError> {
    match target {
        FragmentTarget::Type(owner) => Err(LookupError::MissingAttribute {
            target: owner.to_string(),
        }),
        FragmentTarget::Method(_) => Ok(Some("/{id}/details".to_string())),
    }
}

#[test]
fn test_lookup_failure_matches_absent_fragment() {
    let method = HandlerMethod::new("app::UserResource", "details");

    let failed = HandlerMethodDescriptor::resolve(&method, &failing_lookup, &SilentDiagnostics);
    let absent = HandlerMethodDescriptor::from_fragments(&method, None, Some("/{id}/details"));

    assert_eq!(failed, absent);
    assert_eq!(failed.template(), "*/details");
}

#[test]
fn test_cache_with_failing_source() {
    let cache = DescriptorCache::new(Arc::new(failing_lookup), Arc::new(SilentDiagnostics));
    let method = HandlerMethod::new("app::UserResource", "details");

    let descriptor = cache.get_or_resolve(&method);
    assert_eq!(descriptor.template(), "*/details");
    assert_eq!(descriptor.owner_simple_name(), "UserResource");
}

#[test]
fn test_static_source_round_trip_through_descriptor() {
    let source = StaticFragmentSource::new()
        .with_type_path("app::FileResource", "/files")
        .with_method_path("app::FileResource", "download", "/{bucket}/{key}.{ext}");
    let method = HandlerMethod::new("app::FileResource", "download");

    let descriptor = HandlerMethodDescriptor::resolve(&method, &source, &SilentDiagnostics);
    assert_eq!(descriptor.template(), "files/*/*.*");
}
