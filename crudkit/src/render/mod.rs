//! View-rendering collaborator contract
//!
//! The controller assembles a [`ViewData`] mapping (entities page, entity,
//! form view-model) and hands it to a [`ViewRenderer`] together with a view
//! identifier of the form `<module>/<entity>/<action>`. What the renderer does
//! with it — Askama, Tera, JSON for tests — is its own business.

use axum::response::Response;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CrudError;

/// String-keyed view data handed to the renderer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewData(Map<String, Value>);

impl ViewData {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pre-built JSON value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Serialize `value` and insert it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Render`] when `value` cannot be serialized.
    pub fn insert_ser(
        &mut self,
        key: impl Into<String>,
        value: &impl Serialize,
    ) -> Result<(), CrudError> {
        self.0.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Merge another mapping into this one; keys from `other` win.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the mapping into its underlying JSON map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// View-rendering collaborator.
pub trait ViewRenderer: Send + Sync {
    /// Render the view identified by `view` with `data` into a response.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Render`] when the view is unknown or rendering
    /// fails.
    fn render(&self, view: &str, data: &ViewData) -> Result<Response, CrudError>;
}
