//! Mask composition and normalization
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a mask is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use rhtmx_schema::path::is_normalized_mask;
///
/// assert!(is_normalized_mask("/"));
/// assert!(is_normalized_mask("/users/{id}"));
///
/// assert!(!is_normalized_mask(""));
/// assert!(!is_normalized_mask("users")); // Missing leading /
/// assert!(!is_normalized_mask("/users/")); // Trailing /
/// assert!(!is_normalized_mask("/api//users")); // Double //
/// ```
pub fn is_normalized_mask(mask: &str) -> bool {
    if mask.is_empty() || !mask.starts_with('/') {
        return false;
    }

    if mask.contains("//") {
        return false;
    }

    mask == "/" || !mask.ends_with('/')
}

/// Normalize a mask to canonical form
///
/// Collapses runs of `/`, trims leading and trailing `/`, then prepends
/// exactly one `/`. Returns `Cow::Borrowed` when the mask is already
/// canonical.
///
/// # Examples
///
/// ```
/// use rhtmx_schema::path::normalize_mask;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_mask("/users"), Cow::Borrowed("/users")));
///
/// assert_eq!(normalize_mask("users/"), "/users");
/// assert_eq!(normalize_mask("//api///v1//"), "/api/v1");
/// assert_eq!(normalize_mask(""), "/");
/// ```
pub fn normalize_mask(mask: &str) -> Cow<'_, str> {
    if is_normalized_mask(mask) {
        return Cow::Borrowed(mask);
    }

    // split → filter → join drops every empty component, which collapses
    // runs of `/` and trims both ends in one pass
    let normalized = mask
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Builds the full mask of an endpoint
///
/// Joins group paths, the controller path and the method path with `/` and
/// normalizes the result. Empty segments never produce empty components.
///
/// # Examples
///
/// ```
/// use rhtmx_schema::path::compose_mask;
///
/// assert_eq!(compose_mask(&["api", "v1"], "users", "{id}"), "/api/v1/users/{id}");
/// assert_eq!(compose_mask(&["/api/"], "/users/", "/"), "/api/users");
/// assert_eq!(compose_mask::<&str>(&[], "", ""), "/");
/// ```
pub fn compose_mask<S: AsRef<str>>(
    group_paths: &[S],
    controller_path: &str,
    method_path: &str,
) -> String {
    let joined = group_paths
        .iter()
        .map(AsRef::as_ref)
        .chain([controller_path, method_path])
        .collect::<Vec<_>>()
        .join("/");

    normalize_mask(&joined).into_owned()
}
