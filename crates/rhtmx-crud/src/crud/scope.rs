//! Ambient context for nested resource declarations

use std::borrow::Cow;

use crate::config::CrudConfig;
use crate::path::view_file;
use crate::Action;

use super::ResourceBuilder;

/// Default directory for view file references
pub const DEFAULT_BASE: &str = "./views";

/// Default view file extension
pub const DEFAULT_EXTENSION: &str = "tsx";

/// The context a resource is declared in
///
/// A `Scope` is handed to every children callback. It carries the base view
/// directory and the id of the enclosing resource; nested resources started
/// with [`Scope::crud`] inherit both. The value only lives for the duration
/// of the callback, so the enclosing context is untouched when it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    base: String,
    extension: String,
    default_actions: Vec<Action>,
    parent_id: Option<String>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::root(DEFAULT_BASE)
    }
}

impl Scope {
    /// Top-level scope with a fixed base directory
    pub(crate) fn root(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            default_actions: Action::ALL.to_vec(),
            parent_id: None,
        }
    }

    pub(crate) fn from_config(config: &CrudConfig) -> Self {
        Self {
            base: config.views_dir.clone(),
            extension: config.extension.clone(),
            default_actions: config.default_actions.clone(),
            parent_id: None,
        }
    }

    pub(crate) fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Child scope for a resource's children callback
    pub(crate) fn enter(&self, parent_id: String) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..self.clone()
        }
    }

    /// Base directory for view file references
    pub fn base(&self) -> &str {
        &self.base
    }

    /// View file extension (without the dot)
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Id of the enclosing resource, `None` at the top level
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Actions generated when a resource doesn't restrict them with `only`
    pub fn default_actions(&self) -> &[Action] {
        &self.default_actions
    }

    /// Starts a nested resource declaration in this scope
    pub fn crud(&self, resource: impl Into<String>) -> ResourceBuilder<'_> {
        ResourceBuilder::new(Cow::Borrowed(self), resource.into())
    }

    pub(crate) fn view_file(&self, dir: &str, stem: &str) -> String {
        view_file(&self.base, dir, stem, &self.extension)
    }
}
