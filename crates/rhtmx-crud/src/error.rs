//! Error types for route tree generation

use thiserror::Error;

/// Errors surfaced by route validation and name parsing
///
/// [`crate::ResourceBuilder::build`] never fails; these come from the explicit
/// checks ([`crate::ResourceBuilder::try_build`], [`crate::ensure_unique_ids`])
/// and from parsing action or disposition names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrudError {
    #[error("resource name is empty (parent id: {parent_id:?})")]
    EmptyResourceName { parent_id: Option<String> },

    #[error("duplicate route id `{id}`")]
    DuplicateRouteId { id: String },

    #[error("unknown CRUD action `{0}` (expected index, new, show, edit or destroy)")]
    UnknownAction(String),

    #[error("unknown route disposition `{0}` (expected member, collection or shallow)")]
    UnknownDisposition(String),
}

pub type Result<T> = std::result::Result<T, CrudError>;
