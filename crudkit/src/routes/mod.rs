//! Routing collaborator contract and per-controller route configuration
//!
//! [`RouteSet`] is a value object configured once at controller construction:
//! the three canonical route names plus optional post-create/update/delete
//! destinations that fall back to the index route when unset. URL generation
//! itself is delegated to the host via [`UrlResolver`].

use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

use crate::error::CrudError;

/// Logical route identifiers for one CRUD controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSet {
    /// Route of the listing action.
    pub index: String,
    /// Route of the add action.
    pub add: String,
    /// Route of the edit action.
    pub edit: String,
    /// Destination after a successful create; `index` when unset.
    pub created: Option<String>,
    /// Destination after a successful update (and after an edit on a missing
    /// record); `index` when unset.
    pub updated: Option<String>,
    /// Destination after a delete; `index` when unset.
    pub removed: Option<String>,
}

impl Default for RouteSet {
    fn default() -> Self {
        Self {
            index: "index".into(),
            add: "add".into(),
            edit: "edit".into(),
            created: None,
            updated: None,
            removed: None,
        }
    }
}

impl RouteSet {
    /// Post-create destination, falling back to the index route.
    #[must_use]
    pub fn created_or_index(&self) -> &str {
        self.created.as_deref().unwrap_or(&self.index)
    }

    /// Post-update destination, falling back to the index route.
    #[must_use]
    pub fn updated_or_index(&self) -> &str {
        self.updated.as_deref().unwrap_or(&self.index)
    }

    /// Post-delete destination, falling back to the index route.
    #[must_use]
    pub fn removed_or_index(&self) -> &str {
        self.removed.as_deref().unwrap_or(&self.index)
    }
}

/// Routing collaborator: resolves logical route names into URLs.
pub trait UrlResolver: Send + Sync {
    /// Build the URL for `route`, substituting `params`.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::UnknownRoute`] when the route is not known.
    fn url_for(&self, route: &str, params: &[(&str, &str)]) -> Result<String, CrudError>;
}

/// Build a redirect response to `url`.
#[must_use]
pub fn redirect_to(url: &str) -> Response {
    Redirect::to(url).into_response()
}
