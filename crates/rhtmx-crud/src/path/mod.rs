/// Path utilities for route segments and view file references
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Joins two route path fragments with exactly one `/`
///
/// Trailing slashes are trimmed from `left` and leading slashes from `right`.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::path::join_route_paths;
///
/// assert_eq!(join_route_paths("users", ":userId"), "users/:userId");
/// assert_eq!(join_route_paths("users/", "/:userId"), "users/:userId");
/// assert_eq!(join_route_paths("posts", ":postId/edit"), "posts/:postId/edit");
/// ```
pub fn join_route_paths(left: &str, right: &str) -> String {
    format!(
        "{}/{}",
        left.trim_end_matches('/'),
        right.trim_start_matches('/')
    )
}

/// Builds the per-instance dynamic segment for a camel-cased singular name
///
/// # Examples
///
/// ```
/// use rhtmx_crud::path::dynamic_segment;
///
/// assert_eq!(dynamic_segment("user"), ":userId");
/// assert_eq!(dynamic_segment("blogPost"), ":blogPostId");
/// ```
pub fn dynamic_segment(camel_singular: &str) -> String {
    format!(":{}Id", camel_singular)
}

/// Normalize a base directory by removing trailing separators
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
///
/// Returns `Cow::Borrowed` when the input has no trailing separator.
/// Backslashes are converted so view references always use `/`.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::path::normalize_base;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_base("./views"), Cow::Borrowed("./views")));
/// assert_eq!(normalize_base("./views/"), "./views");
/// assert_eq!(normalize_base(".\\app\\views\\"), "./app/views");
/// ```
pub fn normalize_base(base: &str) -> Cow<'_, str> {
    // Fast path: nothing to fix
    if !base.contains('\\') && !base.ends_with('/') {
        return Cow::Borrowed(base);
    }

    let normalized = base.replace('\\', "/");
    Cow::Owned(normalized.trim_end_matches('/').to_string())
}

/// Builds a view file reference: `{base}/{dir}/{stem}[.{extension}]`
///
/// An empty extension leaves the stem bare.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::path::view_file;
///
/// assert_eq!(view_file("./views", "users", "index", "tsx"), "./views/users/index.tsx");
/// assert_eq!(view_file("./views", "users", "_layout", ""), "./views/users/_layout");
/// ```
pub fn view_file(base: &str, dir: &str, stem: &str, extension: &str) -> String {
    let base = normalize_base(base);
    if extension.is_empty() {
        format!("{}/{}/{}", base, dir, stem)
    } else {
        format!("{}/{}/{}.{}", base, dir, stem, extension.trim_start_matches('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_route_paths() {
        assert_eq!(join_route_paths("users/:userId", "posts"), "users/:userId/posts");
        assert_eq!(join_route_paths("a///", "///b"), "a/b");
    }

    #[test]
    fn test_join_route_paths_empty_left() {
        assert_eq!(join_route_paths("", "posts"), "/posts");
    }

    #[test]
    fn test_normalize_base_valid() {
        let base = normalize_base("./views");
        assert!(matches!(base, Cow::Borrowed("./views")));
    }

    #[test]
    fn test_normalize_base_trailing_slashes() {
        assert_eq!(normalize_base("./views///"), "./views");
        assert_eq!(normalize_base("app\\views"), "app/views");
    }

    #[test]
    fn test_view_file_extension_with_dot() {
        assert_eq!(
            view_file("./views/", "posts", "show", ".rsx"),
            "./views/posts/show.rsx"
        );
    }
}
