/// CRUD route tree builder
///
/// Turns a resource name, options and an optional children callback into the
/// route tree a developer would otherwise hand-write:
///
/// ```text
/// users            (layout)  ./views/users/_layout.tsx   users.layout
/// ├── (index)                ./views/users/index.tsx     users.index
/// ├── new                    ./views/users/new.tsx       users.new
/// ├── :userId      (index)   ./views/users/show.tsx      users.show
/// ├── :userId/edit           ./views/users/edit.tsx      users.edit
/// └── :userId/destroy        ./views/users/destroy.tsx   users.destroy
/// ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CrudConfig;
use crate::error::{CrudError, Result};
use crate::inflect::{camelize, pluralize, singularize};
use crate::path::dynamic_segment;
use crate::route::{generate_route_id, index, prefix, route, RouteOptions};
use crate::{Action, Disposition, Origin, RouteConfigEntry, RouteKind};

mod scope;
mod shallow;

pub use scope::Scope;

// ============================================================================
// Options
// ============================================================================

/// Per-resource options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrudOptions {
    /// Extra id segment placed before the resource name (ids only, never paths)
    #[serde(default)]
    pub id_prefix: Option<String>,
    /// Actions to generate; all five when absent
    #[serde(default)]
    pub only: Option<Vec<Action>>,
    /// Disposition carried by this resource's routes when nested
    #[serde(default)]
    pub on: Option<Disposition>,
    /// Reserved; shallow nesting is selected with `on: shallow`
    #[serde(default)]
    pub shallow: Option<bool>,
}

impl CrudOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(id_prefix.into());
        self
    }

    pub fn only(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.only = Some(actions.into_iter().collect());
        self
    }

    pub fn on(mut self, on: Disposition) -> Self {
        self.on = Some(on);
        self
    }
}

// ============================================================================
// Children
// ============================================================================

/// Output of a children callback, flattened by exactly one level
///
/// A callback may return a flat route list or one list per nested resource.
pub trait IntoRouteList {
    fn into_route_list(self) -> Vec<RouteConfigEntry>;
}

impl IntoRouteList for Vec<RouteConfigEntry> {
    fn into_route_list(self) -> Vec<RouteConfigEntry> {
        self
    }
}

impl IntoRouteList for Vec<Vec<RouteConfigEntry>> {
    fn into_route_list(self) -> Vec<RouteConfigEntry> {
        self.into_iter().flatten().collect()
    }
}

impl<const N: usize> IntoRouteList for [Vec<RouteConfigEntry>; N] {
    fn into_route_list(self) -> Vec<RouteConfigEntry> {
        self.into_iter().flatten().collect()
    }
}

impl<const N: usize> IntoRouteList for [RouteConfigEntry; N] {
    fn into_route_list(self) -> Vec<RouteConfigEntry> {
        self.into()
    }
}

impl IntoRouteList for () {
    fn into_route_list(self) -> Vec<RouteConfigEntry> {
        Vec::new()
    }
}

type Children<'a> = Box<dyn FnOnce(&Scope) -> Vec<RouteConfigEntry> + 'a>;

// ============================================================================
// Entry Points
// ============================================================================

/// Starts a top-level resource declaration with the default base directory
///
/// # Examples
///
/// ```
/// use rhtmx_crud::{crud, Action};
///
/// let routes = crud("users").only([Action::Index, Action::Show]).build();
/// let layout = &routes[0];
/// assert_eq!(layout.file, "./views/users/_layout.tsx");
/// assert_eq!(layout.children.as_ref().unwrap().len(), 2);
/// ```
pub fn crud<'a>(resource: impl Into<String>) -> ResourceBuilder<'a> {
    ResourceBuilder::new(Cow::Owned(Scope::default()), resource.into())
}

/// A CRUD builder bound to a base directory
///
/// Every resource declared through it, including nested ones, references
/// view files under that directory.
///
/// # Examples
///
/// ```
/// use rhtmx_crud::Crud;
///
/// let crud = Crud::new("./app/views");
/// let routes = crud.crud("posts").build();
/// assert_eq!(routes[0].file, "./app/views/posts/_layout.tsx");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Crud {
    root: Scope,
}

impl Crud {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            root: Scope::root(base),
        }
    }

    /// Builder using the configured views directory, extension and default actions
    pub fn from_config(config: &CrudConfig) -> Self {
        Self {
            root: Scope::from_config(config),
        }
    }

    /// Overrides the view file extension (`tsx` by default, empty for none)
    pub fn with_extension(self, extension: impl Into<String>) -> Self {
        Self {
            root: self.root.with_extension(extension),
        }
    }

    /// The top-level scope resources are declared in
    pub fn scope(&self) -> &Scope {
        &self.root
    }

    /// Starts a top-level resource declaration
    pub fn crud(&self, resource: impl Into<String>) -> ResourceBuilder<'_> {
        self.root.crud(resource)
    }
}

/// Declaration of one resource
///
/// Collects the optional options and children callback, then
/// [`build`](ResourceBuilder::build) runs the tree builder once.
pub struct ResourceBuilder<'a> {
    scope: Cow<'a, Scope>,
    resource: String,
    options: CrudOptions,
    children: Option<Children<'a>>,
}

impl<'a> ResourceBuilder<'a> {
    pub(crate) fn new(scope: Cow<'a, Scope>, resource: String) -> Self {
        Self {
            scope,
            resource,
            options: CrudOptions::default(),
            children: None,
        }
    }

    /// Replaces all options at once
    pub fn options(mut self, options: CrudOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.options = self.options.id_prefix(id_prefix);
        self
    }

    pub fn only(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.options = self.options.only(actions);
        self
    }

    pub fn on(mut self, on: Disposition) -> Self {
        self.options = self.options.on(on);
        self
    }

    /// Declares nested resources
    ///
    /// The callback runs inside a child [`Scope`] whose parent id is this
    /// resource's id, so nested ids read `users.comments.show`.
    pub fn nested<F, R>(mut self, children: F) -> Self
    where
        F: FnOnce(&Scope) -> R + 'a,
        R: IntoRouteList,
    {
        self.children = Some(Box::new(move |scope: &Scope| {
            children(scope).into_route_list()
        }));
        self
    }

    /// Builds the route tree
    ///
    /// The first entry is always the resource's layout route; shallow nesting
    /// appends further top-level trees after it.
    ///
    /// A non-empty resource name is the caller's responsibility: an empty one
    /// is logged and yields empty path segments. Use
    /// [`try_build`](ResourceBuilder::try_build) to reject it instead.
    pub fn build(self) -> Vec<RouteConfigEntry> {
        if self.resource.trim().is_empty() {
            warn!(
                parent_id = self.scope.parent_id().unwrap_or_default(),
                "building CRUD routes for an empty resource name"
            );
        }
        build_resource(&self.scope, &self.resource, &self.options, self.children)
    }

    /// Like [`build`](ResourceBuilder::build), but fails on an empty resource name
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_crud::{crud, CrudError};
    ///
    /// assert!(crud("users").try_build().is_ok());
    /// assert_eq!(
    ///     crud("").try_build(),
    ///     Err(CrudError::EmptyResourceName { parent_id: None })
    /// );
    /// ```
    pub fn try_build(self) -> Result<Vec<RouteConfigEntry>> {
        if self.resource.trim().is_empty() {
            return Err(CrudError::EmptyResourceName {
                parent_id: self.scope.parent_id().map(str::to_string),
            });
        }
        Ok(self.build())
    }
}

// ============================================================================
// Tree Builder
// ============================================================================

/// Derived names for one resource
pub(crate) struct ResourceNames {
    pub resource: String,
    pub plural: String,
    pub camel_singular: String,
}

impl ResourceNames {
    pub(crate) fn new(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            plural: pluralize(resource),
            camel_singular: camelize(&singularize(resource)),
        }
    }

    fn origin(&self, kind: RouteKind) -> Origin {
        Origin {
            resource: self.resource.clone(),
            plural: self.plural.clone(),
            kind,
        }
    }
}

fn build_resource(
    scope: &Scope,
    resource: &str,
    options: &CrudOptions,
    children: Option<Children<'_>>,
) -> Vec<RouteConfigEntry> {
    let parent_id = scope.parent_id();
    let id_prefix = options.id_prefix.as_deref();
    let on = options.on;
    let names = ResourceNames::new(resource);
    let only = options.only.as_deref().unwrap_or(scope.default_actions());

    // Children see this resource's id as their parent id
    let nested = match children {
        Some(children) => {
            let child_scope = scope.enter(generate_route_id(resource, id_prefix, None, parent_id));
            children(&child_scope)
        }
        None => Vec::new(),
    };

    let mut member_children = Vec::new();
    let mut collection_children = Vec::new();
    let mut shallow_children = Vec::new();
    let mut top_level = Vec::new();
    for child in nested {
        match placement(&child) {
            Placement::Member => member_children.push(child),
            Placement::Collection => collection_children.push(child),
            Placement::Shallow => shallow_children.push(child),
            Placement::TopLevel => top_level.push(child),
        }
    }

    let action_route = |action: Action| {
        let file = scope.view_file(&names.plural, action.as_str());
        let options = RouteOptions::id(generate_route_id(
            resource,
            id_prefix,
            Some(action.as_str()),
            parent_id,
        ))
        .on(on);

        let entry = match action {
            Action::Index | Action::Show => index(file, options),
            Action::New | Action::Edit | Action::Destroy => {
                route(action.as_str(), file, options, None)
            }
        };
        entry.with_origin(names.origin(RouteKind::Action(action)))
    };

    let mut routes = Vec::new();

    if only.contains(&Action::Index) {
        routes.push(action_route(Action::Index));
    }

    if only.contains(&Action::New) {
        routes.push(action_route(Action::New));
    }

    if only.iter().any(Action::is_member) {
        let mut member_routes: Vec<RouteConfigEntry> = [Action::Show, Action::Edit, Action::Destroy]
            .into_iter()
            .filter(|action| only.contains(action))
            .map(action_route)
            .collect();
        member_routes.extend(member_children);

        routes.extend(prefix(&dynamic_segment(&names.camel_singular), member_routes));
    } else if !member_children.is_empty() {
        debug!(
            resource,
            dropped = member_children.len(),
            "resource has no member actions; member routes dropped"
        );
    }

    let collection_count = collection_children.len();
    routes.extend(collection_children);

    let shallow_routes = shallow::rewrite(
        &shallow::Enclosing {
            scope,
            names: &names,
            id_prefix,
            on,
        },
        shallow_children,
    );

    debug!(
        resource,
        parent_id = parent_id.unwrap_or_default(),
        routes = routes.len(),
        collection = collection_count,
        shallow = shallow_routes.len(),
        top_level = top_level.len(),
        "built CRUD routes"
    );

    let layout = route(
        names.plural.as_str(),
        scope.view_file(&names.plural, "_layout"),
        RouteOptions::id(generate_route_id(resource, id_prefix, Some("layout"), parent_id)).on(on),
        Some(routes),
    )
    .with_origin(names.origin(RouteKind::Layout));

    let mut output = Vec::with_capacity(1 + shallow_routes.len() + top_level.len());
    output.push(layout);
    output.extend(shallow_routes);
    output.extend(top_level);
    output
}

/// Where a nested route lands in the enclosing resource's tree
enum Placement {
    /// Inside the `:{name}Id` group
    Member,
    /// Sibling of the `:{name}Id` group
    Collection,
    /// Handed to the shallow rewriter
    Shallow,
    /// Passed through after the enclosing layout
    TopLevel,
}

fn placement(entry: &RouteConfigEntry) -> Placement {
    // Trees already produced by a nested shallow rewrite keep their place
    // relative to the resource that produced them.
    match entry.origin.as_ref().map(|origin| origin.kind) {
        Some(RouteKind::ShallowRelocated) => return Placement::TopLevel,
        Some(RouteKind::ShallowNested { attach }) => {
            return match attach {
                Some(Disposition::Member) => Placement::Member,
                Some(Disposition::Shallow) => Placement::TopLevel,
                Some(Disposition::Collection) | None => Placement::Collection,
            }
        }
        _ => {}
    }

    match entry.on {
        Some(Disposition::Member) => Placement::Member,
        Some(Disposition::Shallow) => Placement::Shallow,
        Some(Disposition::Collection) | None => Placement::Collection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        let names = ResourceNames::new("blog_posts");
        assert_eq!(names.plural, "blog_posts");
        assert_eq!(names.camel_singular, "blogPost");

        let names = ResourceNames::new("person");
        assert_eq!(names.plural, "people");
        assert_eq!(names.camel_singular, "person");
    }

    #[test]
    fn test_into_route_list_flattens_one_level() {
        let users = crud("users").build();
        let posts = crud("posts").build();

        let flat = vec![users.clone(), posts.clone()].into_route_list();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0], users[0]);
        assert_eq!(flat[1], posts[0]);

        assert!(().into_route_list().is_empty());
    }

    #[test]
    fn test_builder_options_match_options_struct() {
        let via_setters = crud("users").id_prefix("admin").only([Action::Index]).build();
        let via_struct = crud("users")
            .options(CrudOptions::new().id_prefix("admin").only([Action::Index]))
            .build();
        assert_eq!(via_setters, via_struct);
    }

    #[test]
    fn test_origin_is_recorded() {
        let routes = crud("users").build();
        let layout = &routes[0];
        assert_eq!(layout.resource(), Some("users"));
        assert_eq!(layout.action(), None);

        let children = layout.children.as_ref().unwrap();
        let actions: Vec<Option<Action>> = children.iter().map(|c| c.action()).collect();
        assert_eq!(
            actions,
            vec![
                Some(Action::Index),
                Some(Action::New),
                Some(Action::Show),
                Some(Action::Edit),
                Some(Action::Destroy),
            ]
        );
    }

    #[test]
    fn test_options_deserialize_from_camel_case() {
        let options: CrudOptions =
            serde_json::from_str(r#"{ "idPrefix": "admin", "only": ["index", "show"], "on": "member" }"#)
                .unwrap();
        assert_eq!(
            options,
            CrudOptions::new()
                .id_prefix("admin")
                .only([Action::Index, Action::Show])
                .on(Disposition::Member)
        );
    }
}
