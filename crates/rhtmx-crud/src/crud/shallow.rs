//! Shallow nesting
//!
//! A nested resource declared with `on: shallow` keeps its `index` and `new`
//! routes under the parent's instance segment, while `show`, `edit` and
//! `destroy` move to a standalone top-level tree:
//!
//! ```text
//! users/:userId/posts          users.posts.index
//! users/:userId/posts/new      users.posts.new
//! posts/:postId                posts.show
//! posts/:postId/edit           posts.edit
//! posts/:postId/destroy        posts.destroy
//! ```

use tracing::{trace, warn};

use crate::path::{dynamic_segment, join_route_paths};
use crate::route::id::strip_leading_segment;
use crate::route::{generate_route_id, layout, prefix, route, RouteOptions};
use crate::{Action, Disposition, Origin, RouteConfigEntry, RouteKind};

use super::{ResourceNames, Scope};

/// The resource whose children callback produced the shallow routes
pub(super) struct Enclosing<'a> {
    pub scope: &'a Scope,
    pub names: &'a ResourceNames,
    pub id_prefix: Option<&'a str>,
    pub on: Option<Disposition>,
}

/// Routes of one nested resource, keyed by that resource's names
struct Group {
    resource: String,
    plural: String,
    routes: Vec<RouteConfigEntry>,
}

/// Insertion-ordered groups
#[derive(Default)]
struct Groups(Vec<Group>);

impl Groups {
    fn push(&mut self, origin: &Origin, entry: RouteConfigEntry) {
        match self.0.iter_mut().find(|group| group.resource == origin.resource) {
            Some(group) => group.routes.push(entry),
            None => self.0.push(Group {
                resource: origin.resource.clone(),
                plural: origin.plural.clone(),
                routes: vec![entry],
            }),
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Regroups the routes of shallow children into extra top-level trees
///
/// Returns the nested `index`/`new` layouts (already prefixed with
/// `{plural}/:{name}Id` of the enclosing resource) followed by one standalone
/// layout per nested resource holding its relocated member routes.
pub(super) fn rewrite(
    enclosing: &Enclosing<'_>,
    shallow: Vec<RouteConfigEntry>,
) -> Vec<RouteConfigEntry> {
    if shallow.is_empty() {
        return Vec::new();
    }

    let mut nestable = Groups::default();
    let mut relocatable = Groups::default();

    for entry in shallow {
        let Some(origin) = entry.origin else {
            warn!(
                id = entry.id.as_deref().unwrap_or_default(),
                file = %entry.file,
                "skipping shallow route without resource metadata"
            );
            continue;
        };

        for child in entry.children.into_iter().flatten() {
            if matches!(child.action(), Some(Action::Index | Action::New)) {
                nestable.push(&origin, child);
            } else {
                relocatable.push(&origin, relocate(child));
            }
        }
    }

    trace!(
        resource = %enclosing.names.resource,
        nested = nestable.len(),
        relocated = relocatable.len(),
        "regrouped shallow routes"
    );

    let Enclosing {
        scope,
        names,
        id_prefix,
        on,
    } = enclosing;

    let nested_layouts = nestable
        .0
        .into_iter()
        .map(|group| {
            let file = scope.view_file(&group.plural, "_layout");
            let options = RouteOptions::id(generate_route_id(
                &group.resource,
                *id_prefix,
                Some("layout"),
                Some(names.resource.as_str()),
            ))
            .on(Disposition::Shallow);
            let origin = group_origin(&group, RouteKind::ShallowNested { attach: *on });

            route(group.plural, file, options, Some(group.routes)).with_origin(origin)
        })
        .collect();

    let instance_path = join_route_paths(&names.plural, &dynamic_segment(&names.camel_singular));
    let mut output = prefix(&instance_path, nested_layouts);

    output.extend(relocatable.0.into_iter().map(|group| {
        let file = scope.view_file(&group.plural, "_layout");
        let options = RouteOptions::id(generate_route_id(
            &group.resource,
            *id_prefix,
            Some("layout"),
            None,
        ))
        .on(Disposition::Shallow);
        let origin = group_origin(&group, RouteKind::ShallowRelocated);

        layout(file, options, Some(prefix(&group.plural, group.routes))).with_origin(origin)
    }));

    output
}

/// Rewrites a member route's id as if its resource were declared top-level
fn relocate(mut entry: RouteConfigEntry) -> RouteConfigEntry {
    entry.id = entry
        .id
        .as_deref()
        .map(|id| strip_leading_segment(id).to_string());
    entry
}

fn group_origin(group: &Group, kind: RouteKind) -> Origin {
    Origin {
        resource: group.resource.clone(),
        plural: group.plural.clone(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::index;

    fn enclosing_users() -> (Scope, ResourceNames) {
        (Scope::default(), ResourceNames::new("users"))
    }

    #[test]
    fn test_no_shallow_routes() {
        let (scope, names) = enclosing_users();
        let enclosing = Enclosing {
            scope: &scope,
            names: &names,
            id_prefix: None,
            on: None,
        };
        assert!(rewrite(&enclosing, Vec::new()).is_empty());
    }

    #[test]
    fn test_routes_without_origin_are_skipped() {
        let (scope, names) = enclosing_users();
        let enclosing = Enclosing {
            scope: &scope,
            names: &names,
            id_prefix: None,
            on: None,
        };
        let hand_built = layout(
            "./views/posts/_layout.tsx",
            RouteOptions::id("users.posts.layout").on(Disposition::Shallow),
            Some(vec![index(
                "./views/posts/index.tsx",
                RouteOptions::id("users.posts.index").on(Disposition::Shallow),
            )]),
        );

        assert!(rewrite(&enclosing, vec![hand_built]).is_empty());
    }

    #[test]
    fn test_relocate_strips_leading_segment() {
        let entry = index("./views/posts/show.tsx", RouteOptions::id("users.posts.show"));
        assert_eq!(relocate(entry).id.as_deref(), Some("posts.show"));
    }
}
