//! # RHTMX CRUD
//!
//! Generates resourceful route trees for file-based routers, the way a
//! developer would otherwise hand-write them:
//! - CRUD actions (`index`, `new`, `show`, `edit`, `destroy`)
//! - Nested resources attached as **collection** or **member** routes
//! - **Shallow** nesting, where per-instance actions of a nested resource are
//!   lifted out to their own top-level tree
//! - Dot-delimited route ids that mirror the resource nesting
//!
//! ## Ambient Context
//!
//! Nested resources are declared inside a children callback. The callback
//! receives a [`Scope`] carrying the base view directory and the id of the
//! enclosing resource, so nested calls extend the parent's ids without any
//! global state. Two independent builds never observe each other's scope.
//!
//! ## Example
//!
//! ```
//! use rhtmx_crud::{crud, Disposition};
//!
//! let routes = crud("users")
//!     .nested(|scope| vec![scope.crud("comments").on(Disposition::Member).build()])
//!     .build();
//!
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].id.as_deref(), Some("users.layout"));
//! assert_eq!(routes[0].path.as_deref(), Some("users"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod crud;
mod error;
pub mod inflect;
pub mod path;
pub mod route;

// Re-export public types
pub use config::{Config, CrudConfig};
pub use crud::{crud, Crud, CrudOptions, IntoRouteList, ResourceBuilder, Scope};
pub use error::{CrudError, Result};
pub use route::helpers::{index, layout, prefix, route, RouteOptions};
pub use route::id::{ensure_unique_ids, generate_route_id, route_ids};

// ============================================================================
// Core Types
// ============================================================================

/// A single node of a route configuration tree
///
/// Serializes to the JSON shape consumed by file-based routers:
/// `{ "id", "path", "index", "caseSensitive", "file", "children", "on" }`,
/// with absent fields omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfigEntry {
    /// Unique route id, e.g. `users.comments.show`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Path segment relative to the parent route (absent for pathless layouts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether this is an index route
    #[serde(default, skip_serializing_if = "is_false")]
    pub index: bool,
    /// Case-sensitive path matching, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// View file reference
    pub file: String,
    /// Child routes (absent for leaves)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteConfigEntry>>,
    /// How this route attaches to an enclosing resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<Disposition>,
    /// Resource and action that produced this route; never serialized
    #[serde(skip)]
    pub(crate) origin: Option<Origin>,
}

/// Equality ignores the builder's origin metadata so generated trees compare
/// equal to trees written by hand with the route helpers.
impl PartialEq for RouteConfigEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.path == other.path
            && self.index == other.index
            && self.case_sensitive == other.case_sensitive
            && self.file == other.file
            && self.children == other.children
            && self.on == other.on
    }
}

impl RouteConfigEntry {
    /// Returns true if this route has no children
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map_or(true, |children| children.is_empty())
    }

    /// Name of the resource that generated this route, if any
    pub fn resource(&self) -> Option<&str> {
        self.origin.as_ref().map(|origin| origin.resource.as_str())
    }

    /// CRUD action this route serves (`None` for layouts and hand-built routes)
    pub fn action(&self) -> Option<Action> {
        match self.origin.as_ref()?.kind {
            RouteKind::Action(action) => Some(action),
            _ => None,
        }
    }

    pub(crate) fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Structured record of which resource and action produced a route
///
/// Shallow regrouping reads this instead of re-deriving resource names from
/// dot-split ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Origin {
    pub resource: String,
    pub plural: String,
    pub kind: RouteKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteKind {
    Layout,
    Action(Action),
    /// `index`/`new` of a shallow resource, kept under the parent instance;
    /// `attach` is the enclosing resource's own disposition
    ShallowNested { attach: Option<Disposition> },
    /// Member routes of a shallow resource, lifted to the top level
    ShallowRelocated,
}

/// One of the five CRUD actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// List the collection: `/{plural}`
    Index,
    /// Form for a new instance: `/{plural}/new`
    New,
    /// Show one instance: `/{plural}/:id`
    Show,
    /// Edit one instance: `/{plural}/:id/edit`
    Edit,
    /// Delete one instance: `/{plural}/:id/destroy`
    Destroy,
}

impl Action {
    /// Every action, in default generation order
    pub const ALL: [Action; 5] = [
        Action::Index,
        Action::Show,
        Action::New,
        Action::Edit,
        Action::Destroy,
    ];

    /// Id suffix and view file stem for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::New => "new",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Destroy => "destroy",
        }
    }

    /// Whether this action addresses a single instance (lives under `:{name}Id`)
    pub fn is_member(&self) -> bool {
        matches!(self, Action::Show | Action::Edit | Action::Destroy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CrudError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "index" => Ok(Action::Index),
            "new" => Ok(Action::New),
            "show" => Ok(Action::Show),
            "edit" => Ok(Action::Edit),
            "destroy" => Ok(Action::Destroy),
            other => Err(CrudError::UnknownAction(other.to_string())),
        }
    }
}

/// How a nested resource's routes attach to the enclosing resource
///
/// Absent disposition behaves like [`Disposition::Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Nested inside the parent's per-instance segment: `/users/:userId/comments`
    Member,
    /// Sibling of the parent's per-instance segment: `/users/comments`
    Collection,
    /// `index`/`new` nested under the parent instance, `show`/`edit`/`destroy`
    /// lifted to a top-level tree: `/users/:userId/posts`, `/posts/:postId`
    Shallow,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Member => "member",
            Disposition::Collection => "collection",
            Disposition::Shallow => "shallow",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disposition {
    type Err = CrudError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "member" => Ok(Disposition::Member),
            "collection" => Ok(Disposition::Collection),
            "shallow" => Ok(Disposition::Shallow),
            other => Err(CrudError::UnknownDisposition(other.to_string())),
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Serializes a route tree to pretty-printed JSON for a file router manifest
pub fn routes_to_json(routes: &[RouteConfigEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trips_through_str() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = "update".parse::<Action>().unwrap_err();
        assert_eq!(err, CrudError::UnknownAction("update".to_string()));
    }

    #[test]
    fn test_unknown_disposition_is_rejected() {
        assert!("nested".parse::<Disposition>().is_err());
        assert_eq!("shallow".parse::<Disposition>().unwrap(), Disposition::Shallow);
    }

    #[test]
    fn test_member_actions() {
        let member: Vec<Action> = Action::ALL.into_iter().filter(Action::is_member).collect();
        assert_eq!(member, vec![Action::Show, Action::Edit, Action::Destroy]);
    }

    #[test]
    fn test_entry_serializes_without_absent_fields() {
        let entry = index("./views/users/index.tsx", RouteOptions::id("users.index"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "users.index",
                "index": true,
                "file": "./views/users/index.tsx",
            })
        );
    }

    #[test]
    fn test_equality_ignores_origin() {
        let plain = index("./views/users/index.tsx", RouteOptions::id("users.index"));
        let tagged = plain.clone().with_origin(Origin {
            resource: "users".to_string(),
            plural: "users".to_string(),
            kind: RouteKind::Action(Action::Index),
        });
        assert_eq!(plain, tagged);
        assert_eq!(tagged.action(), Some(Action::Index));
        assert_eq!(plain.action(), None);
    }
}
