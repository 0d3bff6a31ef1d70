/// Route id generation and validation
///
/// Ids are dot-delimited and mirror the nesting of resource and action names:
/// `admin.users.comments.show`.

use std::collections::HashSet;

use crate::{CrudError, Result, RouteConfigEntry};

/// Composes a route id from `parent_id`, `id_prefix`, `resource` and `action`
///
/// Absent or empty parts are skipped. Pure, never fails.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::generate_route_id;
///
/// assert_eq!(generate_route_id("users", None, Some("index"), None), "users.index");
/// assert_eq!(generate_route_id("users", Some("admin"), Some("show"), None), "admin.users.show");
/// assert_eq!(generate_route_id("comments", None, None, Some("users")), "users.comments");
/// ```
pub fn generate_route_id(
    resource: &str,
    id_prefix: Option<&str>,
    action: Option<&str>,
    parent_id: Option<&str>,
) -> String {
    [parent_id, id_prefix, Some(resource), action]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Collects every route id in the tree, depth-first in declaration order
pub fn route_ids(routes: &[RouteConfigEntry]) -> Vec<&str> {
    fn collect<'a>(routes: &'a [RouteConfigEntry], ids: &mut Vec<&'a str>) {
        for entry in routes {
            if let Some(id) = entry.id.as_deref() {
                ids.push(id);
            }
            if let Some(children) = entry.children.as_deref() {
                collect(children, ids);
            }
        }
    }

    let mut ids = Vec::new();
    collect(routes, &mut ids);
    ids
}

/// Fails on the first route id that appears more than once in the tree
///
/// The builder never checks this itself: sibling or cousin resources sharing
/// a name and id prefix produce colliding ids.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::{crud, ensure_unique_ids, CrudError};
///
/// let mut routes = crud("users").build();
/// assert!(ensure_unique_ids(&routes).is_ok());
///
/// routes.extend(crud("users").build());
/// assert!(matches!(ensure_unique_ids(&routes), Err(CrudError::DuplicateRouteId { .. })));
/// ```
pub fn ensure_unique_ids(routes: &[RouteConfigEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    route_ids(routes)
        .into_iter()
        .find(|id| !seen.insert(*id))
        .map_or(Ok(()), |id| {
            Err(CrudError::DuplicateRouteId { id: id.to_string() })
        })
}

/// Drops the first dot-component of an id: `users.posts.show` → `posts.show`
///
/// Ids without a dot are returned unchanged.
pub(crate) fn strip_leading_segment(id: &str) -> &str {
    id.split_once('.').map_or(id, |(_, rest)| rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_route_id_full() {
        assert_eq!(
            generate_route_id("comments", Some("admin"), Some("edit"), Some("users")),
            "users.admin.comments.edit"
        );
    }

    #[test]
    fn test_generate_route_id_skips_empty_parts() {
        assert_eq!(generate_route_id("users", Some(""), Some("layout"), Some("")), "users.layout");
        assert_eq!(generate_route_id("users", None, None, None), "users");
    }

    #[test]
    fn test_generate_route_id_is_deterministic() {
        let first = generate_route_id("posts", Some("v1"), Some("new"), Some("users"));
        let second = generate_route_id("posts", Some("v1"), Some("new"), Some("users"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_strip_leading_segment() {
        assert_eq!(strip_leading_segment("users.posts.show"), "posts.show");
        assert_eq!(strip_leading_segment("show"), "show");
    }
}
