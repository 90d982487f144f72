//! Path template derivation.
//!
//! Turns the type-level base fragment and the method-level sub-path fragment
//! of a handler into one low-cardinality route label, e.g.
//! `("/users", "{id}/posts")` becomes `users/*/posts`.

use regex::Regex;
use std::sync::LazyLock;

/// Marker substituted for every `{...}` path parameter.
pub const WILDCARD: &str = "*";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("placeholder pattern is valid"));

/// Absent, empty and `/` fragments carry no path information.
fn is_blank(raw: Option<&str>) -> bool {
    matches!(raw, None | Some("") | Some("/"))
}

/// Replace every brace-delimited placeholder with [`WILDCARD`].
///
/// An unterminated `{` is left as literal text.
pub fn collapse_placeholders(path: &str) -> String {
    PLACEHOLDER.replace_all(path, WILDCARD).into_owned()
}

/// Normalize a single fragment.
///
/// Blank fragments normalize to `""`. Otherwise a leading `/` is stripped,
/// a trailing `/` is enforced when `is_base` is set, and placeholders are
/// collapsed.
pub fn normalize_segment(raw: Option<&str>, is_base: bool) -> String {
    let path = match raw {
        Some(path) if !is_blank(raw) => path,
        _ => return String::new(),
    };

    let add_trailing_slash = is_base && !path.ends_with('/');
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut normalized = collapse_placeholders(path);
    if add_trailing_slash {
        normalized.push('/');
    }
    normalized
}

/// Combine a base (type-level) and a sub (method-level) fragment into a
/// path template.
///
/// When both are present they are joined with exactly one literal `/`, so a
/// base that already ends with `/` yields a double slash: `("/base/", "/sub")`
/// becomes `base//sub`. Existing metric labels depend on this, keep it.
pub fn combine(class_path: Option<&str>, method_path: Option<&str>) -> String {
    if is_blank(class_path) {
        return normalize_segment(method_path, false);
    }
    if is_blank(method_path) {
        return normalize_segment(class_path, false);
    }
    let base = normalize_segment(class_path, method_path.is_none());
    format!("{base}/{}", normalize_segment(method_path, false))
}
