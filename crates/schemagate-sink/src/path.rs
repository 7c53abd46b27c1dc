//! Path sanitization shared by every sink backend.
//!
//! A schema path may arrive as a bare relative key (`"v1/default.json"`) or
//! as a fully-qualified address that embeds the sink's own base location and,
//! for container-addressed stores, the container segment. Sanitizing reduces
//! both forms to the identical bare key, and is a no-op on an already-bare
//! key.

/// Characters treated as path separators when trimming.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Reduce a path to a bare relative key under `base_location`.
///
/// Fully-qualified addresses are recognized by their scheme marker: a path
/// starting with `http` (case-insensitive) has the base-location prefix
/// stripped, also case-insensitively. Anything else passes through with
/// separators trimmed.
pub fn sanitize(path: &str, base_location: &str) -> String {
    strip_qualified(path, base_location, None)
}

/// Like [`sanitize`], additionally stripping the container segment that
/// container-addressed stores place between the base location and the key.
pub fn sanitize_in_container(path: &str, base_location: &str, container: &str) -> String {
    strip_qualified(path, base_location, Some(container))
}

fn strip_qualified(path: &str, base_location: &str, container: Option<&str>) -> String {
    let path = path.trim();
    if !starts_with_ignore_case(path, "http") {
        return trim_separators(path).to_string();
    }

    let mut rest = strip_prefix_ignore_case(path, base_location.trim()).unwrap_or(path);
    rest = trim_separators(rest);
    if let Some(container) = container {
        // Container names are case-sensitive once inside the address.
        if let Some(after) = rest.strip_prefix(container) {
            if after.is_empty() || after.starts_with(&SEPARATORS[..]) {
                rest = trim_separators(after);
            }
        }
    }
    trim_separators(rest).to_string()
}

fn trim_separators(path: &str) -> &str {
    path.trim_matches(|c| SEPARATORS.contains(&c))
}

fn starts_with_ignore_case(path: &str, marker: &str) -> bool {
    path.len() >= marker.len()
        && path.is_char_boundary(marker.len())
        && path[..marker.len()].eq_ignore_ascii_case(marker)
}

fn strip_prefix_ignore_case<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() || !starts_with_ignore_case(path, prefix) {
        return None;
    }
    Some(&path[prefix.len()..])
}
