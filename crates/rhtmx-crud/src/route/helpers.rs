/// Route config entry constructors
///
/// These mirror the helpers of file-based route configs: `index`, `route`,
/// `layout` and `prefix`. Each returns plain data; nothing touches the file system.

use crate::path::join_route_paths;
use crate::{Disposition, RouteConfigEntry};

/// Option bag shared by the route constructors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Unique route id
    pub id: Option<String>,
    /// Case-sensitive matching, passed through verbatim
    pub case_sensitive: Option<bool>,
    /// Disposition tag threaded through unchanged
    pub on: Option<Disposition>,
}

impl RouteOptions {
    /// Options carrying only an id
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Sets the disposition tag
    pub fn on(mut self, on: impl Into<Option<Disposition>>) -> Self {
        self.on = on.into();
        self
    }

    /// Sets case-sensitive matching
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }
}

/// Creates an index route (rendered at its parent's path)
///
/// # Examples
///
/// ```
/// use rhtmx_crud::{index, RouteOptions};
///
/// let route = index("./views/users/index.tsx", RouteOptions::id("users.index"));
/// assert!(route.index);
/// assert_eq!(route.path, None);
/// ```
pub fn index(file: impl Into<String>, options: RouteOptions) -> RouteConfigEntry {
    RouteConfigEntry {
        id: options.id,
        index: true,
        case_sensitive: options.case_sensitive,
        file: file.into(),
        on: options.on,
        ..RouteConfigEntry::default()
    }
}

/// Creates a route for a path segment, optionally with children
///
/// # Examples
///
/// ```
/// use rhtmx_crud::{route, RouteOptions};
///
/// let route = route("edit", "./views/users/edit.tsx", RouteOptions::id("users.edit"), None);
/// assert_eq!(route.path.as_deref(), Some("edit"));
/// assert!(route.is_leaf());
/// ```
pub fn route(
    path: impl Into<String>,
    file: impl Into<String>,
    options: RouteOptions,
    children: Option<Vec<RouteConfigEntry>>,
) -> RouteConfigEntry {
    RouteConfigEntry {
        id: options.id,
        path: Some(path.into()),
        case_sensitive: options.case_sensitive,
        file: file.into(),
        children,
        on: options.on,
        ..RouteConfigEntry::default()
    }
}

/// Creates a pathless layout route wrapping its children
pub fn layout(
    file: impl Into<String>,
    options: RouteOptions,
    children: Option<Vec<RouteConfigEntry>>,
) -> RouteConfigEntry {
    RouteConfigEntry {
        id: options.id,
        case_sensitive: options.case_sensitive,
        file: file.into(),
        children,
        on: options.on,
        ..RouteConfigEntry::default()
    }
}

/// Prepends a path prefix to a list of routes
///
/// Index routes and routes with a path get `prefix/path` (or just `prefix`
/// when they have no path). Pathless layouts are kept as-is and the prefix is
/// applied to their children instead.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::{index, prefix, route, RouteOptions};
///
/// let routes = prefix(":userId", vec![
///     index("./views/users/show.tsx", RouteOptions::id("users.show")),
///     route("edit", "./views/users/edit.tsx", RouteOptions::id("users.edit"), None),
/// ]);
///
/// assert_eq!(routes[0].path.as_deref(), Some(":userId"));
/// assert_eq!(routes[1].path.as_deref(), Some(":userId/edit"));
/// ```
pub fn prefix(prefix_path: &str, routes: Vec<RouteConfigEntry>) -> Vec<RouteConfigEntry> {
    routes
        .into_iter()
        .map(|mut entry| {
            if entry.index || entry.path.is_some() {
                entry.path = Some(match entry.path.as_deref() {
                    Some(path) if !path.is_empty() => join_route_paths(prefix_path, path),
                    _ => prefix_path.to_string(),
                });
            } else if let Some(children) = entry.children.take() {
                entry.children = Some(prefix(prefix_path, children));
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_recurses_into_pathless_layouts() {
        let routes = prefix(
            "posts",
            vec![layout(
                "./views/posts/_layout.tsx",
                RouteOptions::id("posts.layout"),
                Some(vec![
                    index("./views/posts/show.tsx", RouteOptions::default()),
                    route("edit", "./views/posts/edit.tsx", RouteOptions::default(), None),
                ]),
            )],
        );

        assert_eq!(routes[0].path, None);
        let children = routes[0].children.as_ref().unwrap();
        assert_eq!(children[0].path.as_deref(), Some("posts"));
        assert_eq!(children[1].path.as_deref(), Some("posts/edit"));
    }

    #[test]
    fn test_prefix_keeps_children_of_routes_with_paths() {
        let routes = prefix(
            ":userId",
            vec![route(
                "comments",
                "./views/comments/_layout.tsx",
                RouteOptions::default(),
                Some(vec![route("new", "./views/comments/new.tsx", RouteOptions::default(), None)]),
            )],
        );

        assert_eq!(routes[0].path.as_deref(), Some(":userId/comments"));
        let children = routes[0].children.as_ref().unwrap();
        assert_eq!(children[0].path.as_deref(), Some("new"));
    }

    #[test]
    fn test_prefix_empty_path_becomes_prefix() {
        let routes = prefix(
            "users",
            vec![route("", "./views/users/list.tsx", RouteOptions::default(), None)],
        );
        assert_eq!(routes[0].path.as_deref(), Some("users"));
    }

    #[test]
    fn test_options_pass_through() {
        let entry = route(
            "new",
            "./views/users/new.tsx",
            RouteOptions::id("users.new")
                .on(Disposition::Member)
                .case_sensitive(true),
            None,
        );
        assert_eq!(entry.on, Some(Disposition::Member));
        assert_eq!(entry.case_sensitive, Some(true));
        assert_eq!(entry.children, None);
    }
}
